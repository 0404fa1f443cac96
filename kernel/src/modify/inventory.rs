use crate::database::Transaction;
use crate::entity::{GameId, InventoryId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InventoryModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Stocks one new copy of `game_id`, available for rent.
    async fn create(
        &self,
        con: &mut Connection,
        game_id: &GameId,
    ) -> error_stack::Result<InventoryId, KernelError>;

    /// Conditional flip of a copy's rented state. Fails with
    /// [`KernelError::Concurrency`] when the copy is already in the requested
    /// state, which catches a racing writer that slipped past the row lock.
    async fn set_rented(
        &self,
        con: &mut Connection,
        id: &InventoryId,
        rented: bool,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnInventoryModifier<Connection: Transaction>: 'static + Sync + Send {
    type InventoryModifier: InventoryModifier<Connection>;
    fn inventory_modifier(&self) -> &Self::InventoryModifier;
}
