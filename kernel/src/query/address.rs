use crate::database::Transaction;
use crate::entity::{Address, AddressId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AddressQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &AddressId,
    ) -> error_stack::Result<Option<Address>, KernelError>;
}

pub trait DependOnAddressQuery<Connection: Transaction>: Sync + Send + 'static {
    type AddressQuery: AddressQuery<Connection>;
    fn address_query(&self) -> &Self::AddressQuery;
}
