use error_stack::Report;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::InventoryQuery;
use kernel::interface::update::InventoryModifier;
use kernel::prelude::entity::{GameId, Inventory, InventoryId};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresInventoryRepository;

#[async_trait::async_trait]
impl InventoryQuery<PostgresTransaction> for PostgresInventoryRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &InventoryId,
    ) -> error_stack::Result<Option<Inventory>, KernelError> {
        PgInventoryInternal::find_by_id(con.as_pg(), id)
            .await
            .convert_error()
    }

    async fn find_available(
        &self,
        con: &mut PostgresTransaction,
        game_id: &GameId,
    ) -> error_stack::Result<Option<Inventory>, KernelError> {
        PgInventoryInternal::find_available(con.as_pg(), game_id)
            .await
            .convert_error()
    }

    async fn count_available(
        &self,
        con: &mut PostgresTransaction,
        game_id: &GameId,
    ) -> error_stack::Result<i64, KernelError> {
        PgInventoryInternal::count_available(con.as_pg(), game_id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl InventoryModifier<PostgresTransaction> for PostgresInventoryRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        game_id: &GameId,
    ) -> error_stack::Result<InventoryId, KernelError> {
        PgInventoryInternal::create(con.as_pg(), game_id)
            .await
            .convert_error()
    }

    async fn set_rented(
        &self,
        con: &mut PostgresTransaction,
        id: &InventoryId,
        rented: bool,
    ) -> error_stack::Result<(), KernelError> {
        let updated = PgInventoryInternal::set_rented(con.as_pg(), id, rented)
            .await
            .convert_error()?;
        if updated == 0 {
            return Err(Report::new(KernelError::Concurrency).attach_printable(format!(
                "copy {} is already {}",
                id.as_ref(),
                if rented { "rented" } else { "available" }
            )));
        }
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct InventoryRow {
    id: i64,
    game_id: Uuid,
    is_rented: bool,
}

impl From<InventoryRow> for Inventory {
    fn from(value: InventoryRow) -> Self {
        Inventory::new(
            InventoryId::new(value.id),
            GameId::new(value.game_id),
            value.is_rented,
        )
    }
}

pub(in crate::database) struct PgInventoryInternal;

impl PgInventoryInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &InventoryId,
    ) -> Result<Option<Inventory>, DriverError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            // language=postgresql
            r#"
            SELECT id, game_id, is_rented
            FROM inventory
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Inventory::from))
    }

    /// Lowest-id-first keeps copy selection deterministic; `FOR UPDATE SKIP
    /// LOCKED` makes a concurrent renter move on to the next copy instead of
    /// blocking on this one.
    async fn find_available(
        con: &mut PgConnection,
        game_id: &GameId,
    ) -> Result<Option<Inventory>, DriverError> {
        let row = sqlx::query_as::<_, InventoryRow>(
            // language=postgresql
            r#"
            SELECT id, game_id, is_rented
            FROM inventory
            WHERE game_id = $1 AND is_rented = FALSE
            ORDER BY id
            LIMIT 1
            FOR UPDATE SKIP LOCKED
            "#,
        )
        .bind(game_id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Inventory::from))
    }

    async fn count_available(con: &mut PgConnection, game_id: &GameId) -> Result<i64, DriverError> {
        let count = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            SELECT COUNT(*)
            FROM inventory
            WHERE game_id = $1 AND is_rented = FALSE
            "#,
        )
        .bind(game_id.as_ref())
        .fetch_one(con)
        .await?;
        Ok(count)
    }

    async fn create(con: &mut PgConnection, game_id: &GameId) -> Result<InventoryId, DriverError> {
        let id = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            INSERT INTO inventory (game_id, is_rented)
            VALUES ($1, FALSE)
            RETURNING id
            "#,
        )
        .bind(game_id.as_ref())
        .fetch_one(con)
        .await?;
        Ok(InventoryId::new(id))
    }

    /// Flips only when the row is not already in the requested state, so the
    /// affected-row count doubles as the concurrency check.
    async fn set_rented(
        con: &mut PgConnection,
        id: &InventoryId,
        rented: bool,
    ) -> Result<u64, DriverError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE inventory
            SET is_rented = $2
            WHERE id = $1 AND is_rented <> $2
            "#,
        )
        .bind(id.as_ref())
        .bind(rented)
        .execute(con)
        .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::InventoryQuery;
    use kernel::interface::update::{GameModifier, InventoryModifier};
    use kernel::prelude::entity::{
        BoardGame, CategoryTags, DailyPrice, DurationRange, GameDescription, GameId, GameName,
        GameSlug, PlayerCounts,
    };
    use kernel::KernelError;

    use crate::database::postgres::game::PostgresGameRepository;
    use crate::database::postgres::inventory::PostgresInventoryRepository;
    use crate::database::postgres::PostgresDatabase;

    fn game(slug: String) -> BoardGame {
        BoardGame::new(
            GameId::new(Uuid::new_v4()),
            GameSlug::new(slug.clone()),
            GameName::new(slug),
            GameDescription::new("copies".to_string()),
            PlayerCounts::new(vec![2]),
            None,
            DurationRange::new(None, None),
            DailyPrice::new(Decimal::new(150, 2)),
            CategoryTags::new(Vec::<String>::new()),
            None,
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn stocking_and_availability() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let game = game(format!("stock-{}", Uuid::new_v4()));
        PostgresGameRepository.create(&mut con, &game).await?;

        let stocked = rand::thread_rng().gen_range(2..=5);
        let mut copies = Vec::with_capacity(stocked);
        for _ in 0..stocked {
            copies.push(PostgresInventoryRepository.create(&mut con, game.id()).await?);
        }
        assert!(copies[0].as_ref() < copies[1].as_ref());

        let count = PostgresInventoryRepository
            .count_available(&mut con, game.id())
            .await?;
        assert_eq!(count, stocked as i64);

        // the lowest available id wins
        let picked = PostgresInventoryRepository
            .find_available(&mut con, game.id())
            .await?
            .ok_or(KernelError::GameNotAvailable)?;
        assert_eq!(picked.id(), &copies[0]);

        PostgresInventoryRepository
            .set_rented(&mut con, &copies[0], true)
            .await?;
        let picked = PostgresInventoryRepository
            .find_available(&mut con, game.id())
            .await?
            .ok_or(KernelError::GameNotAvailable)?;
        assert_eq!(picked.id(), &copies[1]);

        // flipping to the state the row is already in is a conflict
        let conflict = PostgresInventoryRepository
            .set_rented(&mut con, &copies[0], true)
            .await
            .expect_err("flip to the current state must fail");
        assert!(matches!(
            conflict.current_context(),
            KernelError::Concurrency
        ));

        con.roll_back().await?;
        Ok(())
    }
}
