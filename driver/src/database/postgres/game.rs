use rust_decimal::Decimal;
use sqlx::{PgConnection, Postgres, QueryBuilder};
use uuid::Uuid;

use kernel::interface::query::GameQuery;
use kernel::interface::update::GameModifier;
use kernel::prelude::entity::{
    BoardGame, CategoryTags, DailyPrice, DurationRange, GameDescription, GameFilter, GameId,
    GameName, GameSlug, ImageName, MinimumAge, PlayerCounts,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresGameRepository;

#[async_trait::async_trait]
impl GameQuery<PostgresTransaction> for PostgresGameRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &GameId,
    ) -> error_stack::Result<Option<BoardGame>, KernelError> {
        PgGameInternal::find_by_id(con.as_pg(), id)
            .await
            .convert_error()
    }

    async fn find_by_slug(
        &self,
        con: &mut PostgresTransaction,
        slug: &GameSlug,
    ) -> error_stack::Result<Option<BoardGame>, KernelError> {
        PgGameInternal::find_by_slug(con.as_pg(), slug)
            .await
            .convert_error()
    }

    async fn list(
        &self,
        con: &mut PostgresTransaction,
        filter: &GameFilter,
    ) -> error_stack::Result<Vec<BoardGame>, KernelError> {
        PgGameInternal::list(con.as_pg(), filter)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl GameModifier<PostgresTransaction> for PostgresGameRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        game: &BoardGame,
    ) -> error_stack::Result<(), KernelError> {
        PgGameInternal::create(con.as_pg(), game)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        game: &BoardGame,
    ) -> error_stack::Result<(), KernelError> {
        PgGameInternal::update(con.as_pg(), game)
            .await
            .convert_error()
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &GameId,
    ) -> error_stack::Result<(), KernelError> {
        PgGameInternal::delete(con.as_pg(), id)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: Uuid,
    slug: String,
    name: String,
    description: String,
    number_of_players: Vec<i32>,
    minimum_age: Option<i32>,
    min_duration: Option<i32>,
    max_duration: Option<i32>,
    daily_price: Decimal,
    categories: Vec<String>,
    image_name: Option<String>,
}

impl From<GameRow> for BoardGame {
    fn from(value: GameRow) -> Self {
        BoardGame::new(
            GameId::new(value.id),
            GameSlug::new(value.slug),
            GameName::new(value.name),
            GameDescription::new(value.description),
            PlayerCounts::new(value.number_of_players),
            value.minimum_age.map(MinimumAge::new),
            DurationRange::new(value.min_duration, value.max_duration),
            DailyPrice::new(value.daily_price),
            CategoryTags::new(value.categories),
            value.image_name.map(ImageName::new),
        )
    }
}

static GAME_COLUMNS: &str = "id, slug, name, description, number_of_players, minimum_age, min_duration, max_duration, daily_price, categories, image_name";

pub(in crate::database) struct PgGameInternal;

impl PgGameInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &GameId,
    ) -> Result<Option<BoardGame>, DriverError> {
        let row = sqlx::query_as::<_, GameRow>(
            // language=postgresql
            r#"
            SELECT id, slug, name, description, number_of_players, minimum_age,
                   min_duration, max_duration, daily_price, categories, image_name
            FROM board_games
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(BoardGame::from))
    }

    async fn find_by_slug(
        con: &mut PgConnection,
        slug: &GameSlug,
    ) -> Result<Option<BoardGame>, DriverError> {
        let row = sqlx::query_as::<_, GameRow>(
            // language=postgresql
            r#"
            SELECT id, slug, name, description, number_of_players, minimum_age,
                   min_duration, max_duration, daily_price, categories, image_name
            FROM board_games
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(BoardGame::from))
    }

    /// Builds one `AND` clause per set criterion. Criteria on nullable
    /// columns compare with `>=`/`<=`, which is false for `NULL`, matching
    /// the in-memory predicate [`GameFilter::matches`].
    async fn list(
        con: &mut PgConnection,
        filter: &GameFilter,
    ) -> Result<Vec<BoardGame>, DriverError> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {GAME_COLUMNS} FROM board_games WHERE TRUE"
        ));
        if let Some(players) = filter.number_of_players() {
            query.push(" AND ");
            query.push_bind(*players);
            query.push(" = ANY(number_of_players)");
        }
        if let Some(min_age) = filter.min_age() {
            query.push(" AND minimum_age >= ");
            query.push_bind(*min_age);
        }
        if let Some(min_duration) = filter.min_duration() {
            query.push(" AND min_duration >= ");
            query.push_bind(*min_duration);
        }
        if let Some(max_duration) = filter.max_duration() {
            query.push(" AND max_duration <= ");
            query.push_bind(*max_duration);
        }
        if let Some(min_price) = filter.min_price() {
            query.push(" AND daily_price >= ");
            query.push_bind(*min_price);
        }
        if let Some(max_price) = filter.max_price() {
            query.push(" AND daily_price <= ");
            query.push_bind(*max_price);
        }
        query.push(" ORDER BY name");

        let rows = query.build_query_as::<GameRow>().fetch_all(con).await?;
        Ok(rows.into_iter().map(BoardGame::from).collect())
    }

    async fn create(con: &mut PgConnection, game: &BoardGame) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO board_games (id, slug, name, description, number_of_players,
                                     minimum_age, min_duration, max_duration,
                                     daily_price, categories, image_name)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(game.id().as_ref())
        .bind(game.slug().as_ref())
        .bind(game.name().as_ref())
        .bind(game.description().as_ref())
        .bind(game.players().as_ref())
        .bind(game.minimum_age().as_ref().map(|age| *age.as_ref()))
        .bind(game.duration().min())
        .bind(game.duration().max())
        .bind(game.daily_price().as_ref())
        .bind(game.categories().as_ref())
        .bind(game.image().as_ref().map(|image| image.as_ref().as_str()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, game: &BoardGame) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE board_games
            SET slug = $2, name = $3, description = $4, number_of_players = $5,
                minimum_age = $6, min_duration = $7, max_duration = $8,
                daily_price = $9, categories = $10, image_name = $11
            WHERE id = $1
            "#,
        )
        .bind(game.id().as_ref())
        .bind(game.slug().as_ref())
        .bind(game.name().as_ref())
        .bind(game.description().as_ref())
        .bind(game.players().as_ref())
        .bind(game.minimum_age().as_ref().map(|age| *age.as_ref()))
        .bind(game.duration().min())
        .bind(game.duration().max())
        .bind(game.daily_price().as_ref())
        .bind(game.categories().as_ref())
        .bind(game.image().as_ref().map(|image| image.as_ref().as_str()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &GameId) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM board_games
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::GameQuery;
    use kernel::interface::update::GameModifier;
    use kernel::prelude::entity::{
        BoardGame, CategoryTags, DailyPrice, DurationRange, GameDescription, GameFilter, GameId,
        GameName, GameSlug, MinimumAge, PlayerCounts,
    };
    use kernel::KernelError;

    use crate::database::postgres::game::PostgresGameRepository;
    use crate::database::postgres::PostgresDatabase;

    fn game(slug: &str, players: &[i32], price: Decimal) -> BoardGame {
        BoardGame::new(
            GameId::new(Uuid::new_v4()),
            GameSlug::new(slug.to_string()),
            GameName::new(slug.to_string()),
            GameDescription::new("test game".to_string()),
            PlayerCounts::new(players.to_vec()),
            Some(MinimumAge::new(8)),
            DurationRange::new(Some(30), Some(60)),
            DailyPrice::new(price),
            CategoryTags::new(vec!["strategy".to_string()]),
            None,
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let slug = format!("crud-{}", Uuid::new_v4());
        let created = game(&slug, &[2, 4], Decimal::new(250, 2));
        PostgresGameRepository.create(&mut con, &created).await?;

        let found = PostgresGameRepository
            .find_by_slug(&mut con, created.slug())
            .await?;
        assert_eq!(found, Some(created.clone()));

        let renamed = created
            .clone()
            .reconstruct(|g| g.name = GameName::new("renamed".to_string()));
        PostgresGameRepository.update(&mut con, &renamed).await?;
        let found = PostgresGameRepository
            .find_by_id(&mut con, renamed.id())
            .await?;
        assert_eq!(found, Some(renamed.clone()));

        PostgresGameRepository.delete(&mut con, renamed.id()).await?;
        let found = PostgresGameRepository
            .find_by_id(&mut con, renamed.id())
            .await?;
        assert!(found.is_none());

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn list_filters_by_player_count() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let prefix = Uuid::new_v4();
        let pair = game(&format!("{prefix}-pair"), &[2, 4], Decimal::new(100, 2));
        let trio = game(&format!("{prefix}-trio"), &[3, 5], Decimal::new(100, 2));
        let party = game(&format!("{prefix}-party"), &[4, 6], Decimal::new(100, 2));
        for created in [&pair, &trio, &party] {
            PostgresGameRepository.create(&mut con, created).await?;
        }

        let filter = GameFilter::new(Some(4), None, None, None, None, None);
        let listed = PostgresGameRepository.list(&mut con, &filter).await?;
        let slugs: Vec<_> = listed.iter().map(|g| g.slug().as_ref().clone()).collect();
        assert!(slugs.contains(pair.slug().as_ref()));
        assert!(slugs.contains(party.slug().as_ref()));
        assert!(!slugs.contains(trio.slug().as_ref()));

        // sentinel zero criteria leave the catalog unfiltered
        let unfiltered = GameFilter::new(Some(0), Some(0), None, None, None, None);
        let listed = PostgresGameRepository.list(&mut con, &unfiltered).await?;
        assert!(listed.len() >= 3);

        // every row the SQL returns must satisfy the in-memory predicate
        let filter = GameFilter::new(
            Some(4),
            Some(8),
            None,
            None,
            Some(Decimal::new(50, 2)),
            None,
        );
        let listed = PostgresGameRepository.list(&mut con, &filter).await?;
        assert!(listed.iter().all(|g| filter.matches(g)));

        con.roll_back().await?;
        Ok(())
    }
}
