use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnGameQuery, GameQuery};
use kernel::interface::update::{DependOnInventoryModifier, InventoryModifier};
use kernel::prelude::entity::GameSlug;
use kernel::KernelError;

use crate::transfer::AddCopiesDto;

#[async_trait::async_trait]
pub trait StockService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGameQuery<Connection>
    + DependOnInventoryModifier<Connection>
{
    /// Administrative stocking: adds `count` physical copies of a game, each
    /// immediately available for rent. Returns the new copy ids.
    async fn add_copies(&self, dto: AddCopiesDto) -> error_stack::Result<Vec<i64>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let slug = GameSlug::new(dto.slug);
        let game = self
            .game_query()
            .find_by_slug(&mut con, &slug)
            .await?
            .ok_or_else(|| Report::new(KernelError::GameNotFound))?;

        let mut created = Vec::with_capacity(dto.count as usize);
        for _ in 0..dto.count {
            let id = self.inventory_modifier().create(&mut con, game.id()).await?;
            created.push(id.into());
        }
        con.commit().await?;

        tracing::info!(slug = %slug.as_ref(), count = created.len(), "stocked copies");
        Ok(created)
    }
}

impl<Connection: Transaction + Send, T> StockService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGameQuery<Connection>
        + DependOnInventoryModifier<Connection>
{
}
