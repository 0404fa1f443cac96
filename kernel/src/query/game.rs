use crate::database::Transaction;
use crate::entity::{BoardGame, GameFilter, GameId, GameSlug};
use crate::KernelError;

#[async_trait::async_trait]
pub trait GameQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &GameId,
    ) -> error_stack::Result<Option<BoardGame>, KernelError>;

    async fn find_by_slug(
        &self,
        con: &mut Connection,
        slug: &GameSlug,
    ) -> error_stack::Result<Option<BoardGame>, KernelError>;

    /// Returns the catalog narrowed by `filter`; an unfiltered criteria set
    /// returns every game.
    async fn list(
        &self,
        con: &mut Connection,
        filter: &GameFilter,
    ) -> error_stack::Result<Vec<BoardGame>, KernelError>;
}

pub trait DependOnGameQuery<Connection: Transaction>: Sync + Send + 'static {
    type GameQuery: GameQuery<Connection>;
    fn game_query(&self) -> &Self::GameQuery;
}
