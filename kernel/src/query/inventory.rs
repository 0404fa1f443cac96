use crate::database::Transaction;
use crate::entity::{GameId, Inventory, InventoryId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait InventoryQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &InventoryId,
    ) -> error_stack::Result<Option<Inventory>, KernelError>;

    /// Picks the available copy with the lowest id and locks its row for the
    /// rest of the transaction, so two concurrent rent attempts can never
    /// settle on the same copy. `None` means the game is out of stock.
    async fn find_available(
        &self,
        con: &mut Connection,
        game_id: &GameId,
    ) -> error_stack::Result<Option<Inventory>, KernelError>;

    async fn count_available(
        &self,
        con: &mut Connection,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnInventoryQuery<Connection: Transaction>: Sync + Send + 'static {
    type InventoryQuery: InventoryQuery<Connection>;
    fn inventory_query(&self) -> &Self::InventoryQuery;
}
