use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{
    DailyPrice, GameName, GameSlug, InventoryId, NewRental, Rental, RentalCost, RentalId,
    RentalSummary, RentedAt, ReturnedAt, UserId, UserName,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresRentalRepository;

#[async_trait::async_trait]
impl RentalQuery<PostgresTransaction> for PostgresRentalRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        PgRentalInternal::find_by_id(con.as_pg(), id)
            .await
            .convert_error()
    }

    async fn find_open(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<RentalSummary>, KernelError> {
        PgRentalInternal::find_open(con.as_pg(), None)
            .await
            .convert_error()
    }

    async fn find_open_by_user(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<RentalSummary>, KernelError> {
        PgRentalInternal::find_open(con.as_pg(), Some(user_id))
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl RentalModifier<PostgresTransaction> for PostgresRentalRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        rental: &NewRental,
    ) -> error_stack::Result<Rental, KernelError> {
        PgRentalInternal::create(con.as_pg(), rental)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        PgRentalInternal::update(con.as_pg(), rental)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: i64,
    user_id: Uuid,
    inventory_id: i64,
    rented_at: OffsetDateTime,
    returned_at: Option<OffsetDateTime>,
    total_cost: Decimal,
}

impl From<RentalRow> for Rental {
    fn from(value: RentalRow) -> Self {
        Rental::new(
            RentalId::new(value.id),
            UserId::new(value.user_id),
            InventoryId::new(value.inventory_id),
            RentedAt::new(value.rented_at),
            value.returned_at.map(ReturnedAt::new),
            RentalCost::new(value.total_cost),
        )
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    user_id: Uuid,
    user_name: String,
    game_name: String,
    game_slug: String,
    rented_at: OffsetDateTime,
    daily_price: Decimal,
}

impl From<SummaryRow> for RentalSummary {
    fn from(value: SummaryRow) -> Self {
        RentalSummary::new(
            RentalId::new(value.id),
            UserId::new(value.user_id),
            UserName::new(value.user_name),
            GameName::new(value.game_name),
            GameSlug::new(value.game_slug),
            RentedAt::new(value.rented_at),
            DailyPrice::new(value.daily_price),
        )
    }
}

pub(in crate::database) struct PgRentalInternal;

impl PgRentalInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &RentalId,
    ) -> Result<Option<Rental>, DriverError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, inventory_id, rented_at, returned_at, total_cost
            FROM rentals
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Rental::from))
    }

    async fn find_open(
        con: &mut PgConnection,
        user_id: Option<&UserId>,
    ) -> Result<Vec<RentalSummary>, DriverError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            // language=postgresql
            r#"
            SELECT r.id, r.user_id, u.name AS user_name, g.name AS game_name,
                   g.slug AS game_slug, r.rented_at, g.daily_price
            FROM rentals r
            JOIN users u ON u.id = r.user_id
            JOIN inventory i ON i.id = r.inventory_id
            JOIN board_games g ON g.id = i.game_id
            WHERE r.returned_at IS NULL
              AND ($1::uuid IS NULL OR r.user_id = $1)
            ORDER BY r.rented_at, r.id
            "#,
        )
        .bind(user_id.map(|id| *id.as_ref()))
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(RentalSummary::from).collect())
    }

    async fn create(con: &mut PgConnection, rental: &NewRental) -> Result<Rental, DriverError> {
        let row = sqlx::query_as::<_, RentalRow>(
            // language=postgresql
            r#"
            INSERT INTO rentals (user_id, inventory_id, rented_at, returned_at, total_cost)
            VALUES ($1, $2, $3, NULL, $4)
            RETURNING id, user_id, inventory_id, rented_at, returned_at, total_cost
            "#,
        )
        .bind(rental.user_id().as_ref())
        .bind(rental.inventory_id().as_ref())
        .bind(rental.rented_at().as_ref())
        .bind(rental.total_cost().as_ref())
        .fetch_one(con)
        .await?;
        Ok(Rental::from(row))
    }

    async fn update(con: &mut PgConnection, rental: &Rental) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE rentals
            SET returned_at = $2, total_cost = $3
            WHERE id = $1
            "#,
        )
        .bind(rental.id().as_ref())
        .bind(rental.returned_at().as_ref().map(|at| *at.as_ref()))
        .bind(rental.total_cost().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use time::OffsetDateTime;
    use uuid::Uuid;

    use application::service::{GetRentalService, RentService, ReturnService, StockService};
    use application::transfer::{
        AddCopiesDto, GetUserRentalsDto, RentGameDto, ReturnGameDto,
    };
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::update::{GameModifier, UserModifier};
    use kernel::prelude::entity::{
        BoardGame, CategoryTags, DailyPrice, DurationRange, GameDescription, GameId, GameName,
        GameSlug, PlayerCounts, User, UserEmail, UserId, UserName,
    };
    use kernel::KernelError;

    use crate::database::postgres::game::PostgresGameRepository;
    use crate::database::postgres::user::PostgresUserRepository;
    use crate::database::postgres::PostgresDatabase;

    async fn seed(db: &PostgresDatabase, slug: &str) -> error_stack::Result<User, KernelError> {
        let mut con = db.transact().await?;
        let game = BoardGame::new(
            GameId::new(Uuid::new_v4()),
            GameSlug::new(slug.to_string()),
            GameName::new(slug.to_string()),
            GameDescription::new("lifecycle".to_string()),
            PlayerCounts::new(vec![2, 3, 4]),
            None,
            DurationRange::new(Some(45), Some(90)),
            DailyPrice::new(Decimal::new(300, 2)),
            CategoryTags::new(vec!["family".to_string()]),
            None,
        );
        PostgresGameRepository.create(&mut con, &game).await?;

        let user = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new("renter".to_string()),
            UserEmail::new(format!("{slug}@example.com")),
            None,
            false,
            None,
        );
        PostgresUserRepository.create(&mut con, &user).await?;
        con.commit().await?;
        Ok(user)
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn rental_lifecycle() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let slug = format!("lifecycle-{}", Uuid::new_v4());
        let user = seed(&db, &slug).await?;

        db.add_copies(AddCopiesDto {
            slug: slug.clone(),
            count: 1,
        })
        .await?;

        let rental = db
            .rent_game(RentGameDto {
                slug: slug.clone(),
                user_id: *user.id().as_ref(),
            })
            .await?;
        assert!(rental.returned_at.is_none());
        assert_eq!(rental.total_cost, Decimal::new(300, 2));

        // the only copy is out
        let rejected = db
            .rent_game(RentGameDto {
                slug: slug.clone(),
                user_id: *user.id().as_ref(),
            })
            .await
            .expect_err("no copy left");
        assert!(matches!(
            rejected.current_context(),
            KernelError::GameNotAvailable
        ));

        let open = db
            .user_rentals(GetUserRentalsDto {
                user_id: *user.id().as_ref(),
                as_of: OffsetDateTime::now_utc(),
            })
            .await?;
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].accrued_cost, Decimal::new(300, 2));

        let returned = db
            .return_game(ReturnGameDto {
                rental_id: rental.id,
            })
            .await?;
        assert!(returned.returned_at.is_some());
        assert_eq!(returned.total_cost, Decimal::new(300, 2));

        // second return is rejected and the ledger row is untouched
        let again = db
            .return_game(ReturnGameDto {
                rental_id: rental.id,
            })
            .await
            .expect_err("already returned");
        assert!(matches!(
            again.current_context(),
            KernelError::AlreadyReturned
        ));

        // the copy is rentable again
        let rental = db
            .rent_game(RentGameDto {
                slug: slug.clone(),
                user_id: *user.id().as_ref(),
            })
            .await?;
        db.return_game(ReturnGameDto {
            rental_id: rental.id,
        })
        .await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn concurrent_rents_get_one_winner() -> error_stack::Result<(), KernelError> {
        let db = Arc::new(PostgresDatabase::new().await?);
        let slug = format!("race-{}", Uuid::new_v4());
        let user = seed(&db, &slug).await?;

        db.add_copies(AddCopiesDto {
            slug: slug.clone(),
            count: 1,
        })
        .await?;

        let mut tasks = Vec::new();
        for _ in 0..4 {
            let db = Arc::clone(&db);
            let slug = slug.clone();
            let user_id = *user.id().as_ref();
            tasks.push(tokio::spawn(async move {
                db.rent_game(RentGameDto { slug, user_id }).await
            }));
        }

        let mut won = 0;
        for task in tasks {
            let outcome = task.await.map_err(|_| KernelError::Internal)?;
            match outcome {
                Ok(_) => won += 1,
                Err(report) => assert!(matches!(
                    report.current_context(),
                    KernelError::GameNotAvailable | KernelError::Concurrency
                )),
            }
        }
        assert_eq!(won, 1);
        Ok(())
    }
}
