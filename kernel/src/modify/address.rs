use crate::database::Transaction;
use crate::entity::Address;
use crate::KernelError;

#[async_trait::async_trait]
pub trait AddressModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Creates the address row or rewrites an existing one in place.
    async fn upsert(
        &self,
        con: &mut Connection,
        address: &Address,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAddressModifier<Connection: Transaction>: 'static + Sync + Send {
    type AddressModifier: AddressModifier<Connection>;
    fn address_modifier(&self) -> &Self::AddressModifier;
}
