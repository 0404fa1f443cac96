use error_stack::{Report, ResultExt};
use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnGameQuery, DependOnInventoryQuery, DependOnRentalQuery, GameQuery, InventoryQuery,
    RentalQuery,
};
use kernel::interface::update::{
    DependOnInventoryModifier, DependOnRentalModifier, InventoryModifier, RentalModifier,
};
use kernel::prelude::entity::{
    GameSlug, NewRental, RentalCost, RentalId, RentedAt, ReturnedAt, UserId,
};
use kernel::KernelError;

use crate::transfer::{
    GetUserRentalsDto, ListOpenRentalsDto, OpenRentalDto, RentGameDto, RentalDto, ReturnGameDto,
};

#[async_trait::async_trait]
pub trait RentService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGameQuery<Connection>
    + DependOnInventoryQuery<Connection>
    + DependOnInventoryModifier<Connection>
    + DependOnRentalModifier<Connection>
{
    /// Rents one copy of the game to `user_id`. Copy selection, rental
    /// creation and the availability flip happen in one transaction; when two
    /// requests race for the last copy the row lock serializes them and the
    /// loser sees [`KernelError::GameNotAvailable`].
    async fn rent_game(&self, dto: RentGameDto) -> error_stack::Result<RentalDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let slug = GameSlug::new(dto.slug);
        let game = self
            .game_query()
            .find_by_slug(&mut con, &slug)
            .await?
            .ok_or_else(|| Report::new(KernelError::GameNotFound))?;
        let copy = self
            .inventory_query()
            .find_available(&mut con, game.id())
            .await?
            .ok_or_else(|| Report::new(KernelError::GameNotAvailable))?;

        // Initial charge is one day; the rest accrues until the return.
        let new_rental = NewRental::new(
            UserId::new(dto.user_id),
            copy.id().clone(),
            RentedAt::new(OffsetDateTime::now_utc()),
            RentalCost::new(*game.daily_price().as_ref()),
        );
        let rental = self.rental_modifier().create(&mut con, &new_rental).await?;
        self.inventory_modifier()
            .set_rented(&mut con, copy.id(), true)
            .await?;
        con.commit().await?;

        tracing::info!(
            slug = %slug.as_ref(),
            copy = copy.id().as_ref(),
            rental = rental.id().as_ref(),
            "rented game"
        );
        Ok(RentalDto::from(rental))
    }
}

impl<Connection: Transaction + Send, T> RentService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGameQuery<Connection>
        + DependOnInventoryQuery<Connection>
        + DependOnInventoryModifier<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ReturnService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnGameQuery<Connection>
    + DependOnInventoryQuery<Connection>
    + DependOnInventoryModifier<Connection>
    + DependOnRentalQuery<Connection>
    + DependOnRentalModifier<Connection>
{
    /// Closes an open rental: stamps the return time, bills every started
    /// day, and frees the copy. A second return attempt fails with
    /// [`KernelError::AlreadyReturned`] and changes nothing.
    async fn return_game(&self, dto: ReturnGameDto) -> error_stack::Result<RentalDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let rental_id = RentalId::new(dto.rental_id);
        let rental = self
            .rental_query()
            .find_by_id(&mut con, &rental_id)
            .await?
            .ok_or_else(|| Report::new(KernelError::RentalNotFound))?;
        if rental.is_returned() {
            return Err(Report::new(KernelError::AlreadyReturned));
        }

        let copy = self
            .inventory_query()
            .find_by_id(&mut con, rental.inventory_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::Internal))
            .attach_printable("open rental references a missing inventory copy")?;
        let game = self
            .game_query()
            .find_by_id(&mut con, copy.game_id())
            .await?
            .ok_or_else(|| Report::new(KernelError::Internal))
            .attach_printable("inventory copy references a missing game")?;

        let closed = rental.close(
            game.daily_price(),
            ReturnedAt::new(OffsetDateTime::now_utc()),
        );
        self.rental_modifier().update(&mut con, &closed).await?;
        self.inventory_modifier()
            .set_rented(&mut con, copy.id(), false)
            .await?;
        con.commit().await?;

        tracing::info!(
            rental = closed.id().as_ref(),
            copy = copy.id().as_ref(),
            "returned game"
        );
        Ok(RentalDto::from(closed))
    }
}

impl<Connection: Transaction + Send, T> ReturnService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnGameQuery<Connection>
        + DependOnInventoryQuery<Connection>
        + DependOnInventoryModifier<Connection>
        + DependOnRentalQuery<Connection>
        + DependOnRentalModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetRentalService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
    async fn open_rentals(
        &self,
        dto: ListOpenRentalsDto,
    ) -> error_stack::Result<Vec<OpenRentalDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let summaries = self.rental_query().find_open(&mut con).await?;
        con.commit().await?;

        Ok(summaries
            .into_iter()
            .map(|summary| OpenRentalDto::from_summary(summary, dto.as_of))
            .collect())
    }

    async fn user_rentals(
        &self,
        dto: GetUserRentalsDto,
    ) -> error_stack::Result<Vec<OpenRentalDto>, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let summaries = self
            .rental_query()
            .find_open_by_user(&mut con, &user_id)
            .await?;
        con.commit().await?;

        Ok(summaries
            .into_iter()
            .map(|summary| OpenRentalDto::from_summary(summary, dto.as_of))
            .collect())
    }
}

impl<Connection: Transaction + Send, T> GetRentalService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnRentalQuery<Connection>
{
}
