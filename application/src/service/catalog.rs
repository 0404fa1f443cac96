use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnGameQuery, DependOnInventoryQuery, GameQuery, InventoryQuery};
use kernel::interface::update::{DependOnGameModifier, GameModifier};
use kernel::prelude::entity::{
    BoardGame, CategoryTags, DailyPrice, DurationRange, GameDescription, GameFilter, GameId,
    GameName, GameSlug, ImageName, MinimumAge, PlayerCounts,
};
use kernel::KernelError;

use crate::transfer::{
    CreateGameDto, DeleteGameDto, GameDetailsDto, GameDto, GameFilterDto, GetGameDto,
    UpdateGameDto,
};

#[async_trait::async_trait]
pub trait GetGameService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGameQuery<Connection>
    + DependOnInventoryQuery<Connection>
{
    async fn list_games(
        &self,
        dto: GameFilterDto,
    ) -> error_stack::Result<Vec<GameDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let filter = GameFilter::from(dto);
        let games = self.game_query().list(&mut con, &filter).await?;
        con.commit().await?;

        Ok(games.into_iter().map(GameDto::from).collect())
    }

    async fn game_details(
        &self,
        dto: GetGameDto,
    ) -> error_stack::Result<Option<GameDetailsDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let slug = GameSlug::new(dto.slug);
        let details = match self.game_query().find_by_slug(&mut con, &slug).await? {
            Some(game) => {
                let available = self
                    .inventory_query()
                    .count_available(&mut con, game.id())
                    .await?;
                Some(GameDetailsDto::new(game, available))
            }
            None => None,
        };
        con.commit().await?;

        Ok(details)
    }
}

impl<Connection: Transaction + Send, T> GetGameService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGameQuery<Connection>
        + DependOnInventoryQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait ManageGameService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGameQuery<Connection>
    + DependOnGameModifier<Connection>
{
    async fn create_game(&self, dto: CreateGameDto) -> error_stack::Result<GameDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let game = BoardGame::new(
            GameId::new(Uuid::new_v4()),
            GameSlug::new(dto.slug),
            GameName::new(dto.name),
            GameDescription::new(dto.description),
            PlayerCounts::new(dto.players),
            dto.minimum_age.map(MinimumAge::new),
            DurationRange::new(dto.min_duration, dto.max_duration),
            DailyPrice::new(dto.daily_price),
            CategoryTags::new(dto.categories),
            dto.image.map(ImageName::new),
        );
        self.game_modifier().create(&mut con, &game).await?;
        con.commit().await?;

        tracing::info!(slug = %game.slug().as_ref(), "created catalog entry");
        Ok(GameDto::from(game))
    }

    async fn update_game(&self, dto: UpdateGameDto) -> error_stack::Result<GameDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let slug = GameSlug::new(dto.slug);
        let game = self
            .game_query()
            .find_by_slug(&mut con, &slug)
            .await?
            .ok_or_else(|| Report::new(KernelError::GameNotFound))?;

        let game = game.reconstruct(|g| {
            if let Some(name) = dto.name {
                g.name = GameName::new(name);
            }
            if let Some(description) = dto.description {
                g.description = GameDescription::new(description);
            }
            if let Some(players) = dto.players {
                g.players = PlayerCounts::new(players);
            }
            if let Some(age) = dto.minimum_age {
                g.minimum_age = Some(MinimumAge::new(age));
            }
            if dto.min_duration.is_some() || dto.max_duration.is_some() {
                g.duration = DurationRange::new(
                    dto.min_duration.or(g.duration.min()),
                    dto.max_duration.or(g.duration.max()),
                );
            }
            if let Some(price) = dto.daily_price {
                g.daily_price = DailyPrice::new(price);
            }
            if let Some(categories) = dto.categories {
                g.categories = CategoryTags::new(categories);
            }
            if let Some(image) = dto.image {
                g.image = Some(ImageName::new(image));
            }
        });
        self.game_modifier().update(&mut con, &game).await?;
        con.commit().await?;

        Ok(GameDto::from(game))
    }

    async fn delete_game(&self, dto: DeleteGameDto) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().transact().await?;

        let slug = GameSlug::new(dto.slug);
        let game = self
            .game_query()
            .find_by_slug(&mut con, &slug)
            .await?
            .ok_or_else(|| Report::new(KernelError::GameNotFound))?;
        self.game_modifier().delete(&mut con, game.id()).await?;
        con.commit().await?;

        tracing::info!(slug = %slug.as_ref(), "deleted catalog entry");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> ManageGameService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGameQuery<Connection>
        + DependOnGameModifier<Connection>
{
}
