use crate::database::Transaction;
use crate::entity::{Rental, RentalId, RentalSummary, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentalQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError>;

    /// All open rentals, oldest first, joined with game and user data for the
    /// staff listing.
    async fn find_open(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<RentalSummary>, KernelError>;

    async fn find_open_by_user(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<RentalSummary>, KernelError>;
}

pub trait DependOnRentalQuery<Connection: Transaction>: Sync + Send + 'static {
    type RentalQuery: RentalQuery<Connection>;
    fn rental_query(&self) -> &Self::RentalQuery;
}
