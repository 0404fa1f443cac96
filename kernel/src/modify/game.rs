use crate::database::Transaction;
use crate::entity::{BoardGame, GameId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GameModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        game: &BoardGame,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        game: &BoardGame,
    ) -> error_stack::Result<(), KernelError>;

    /// Deleting a game cascades to its inventory at the storage layer.
    async fn delete(
        &self,
        con: &mut Connection,
        id: &GameId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnGameModifier<Connection: Transaction>: 'static + Sync + Send {
    type GameModifier: GameModifier<Connection>;
    fn game_modifier(&self) -> &Self::GameModifier;
}
