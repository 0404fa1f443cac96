use error_stack::ResultExt;
use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAddressQuery, DependOnGameQuery, DependOnInventoryQuery, DependOnRentalQuery,
    DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAddressModifier, DependOnGameModifier, DependOnInventoryModifier,
    DependOnRentalModifier, DependOnUserModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{address::*, game::*, inventory::*, rental::*, user::*};

mod address;
mod game;
mod inventory;
mod rental;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL).convert_error()?;
        let pool = Pool::connect(&url).await.convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .change_context(KernelError::Internal)?;
        tracing::debug!("connected to postgres, migrations applied");
        Ok(Self { pool })
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl PostgresTransaction {
    pub(in crate::database) fn as_pg(&mut self) -> &mut PgConnection {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

impl DependOnGameQuery<PostgresTransaction> for PostgresDatabase {
    type GameQuery = PostgresGameRepository;
    fn game_query(&self) -> &Self::GameQuery {
        &PostgresGameRepository
    }
}

impl DependOnGameModifier<PostgresTransaction> for PostgresDatabase {
    type GameModifier = PostgresGameRepository;
    fn game_modifier(&self) -> &Self::GameModifier {
        &PostgresGameRepository
    }
}

impl DependOnInventoryQuery<PostgresTransaction> for PostgresDatabase {
    type InventoryQuery = PostgresInventoryRepository;
    fn inventory_query(&self) -> &Self::InventoryQuery {
        &PostgresInventoryRepository
    }
}

impl DependOnInventoryModifier<PostgresTransaction> for PostgresDatabase {
    type InventoryModifier = PostgresInventoryRepository;
    fn inventory_modifier(&self) -> &Self::InventoryModifier {
        &PostgresInventoryRepository
    }
}

impl DependOnRentalQuery<PostgresTransaction> for PostgresDatabase {
    type RentalQuery = PostgresRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &PostgresRentalRepository
    }
}

impl DependOnRentalModifier<PostgresTransaction> for PostgresDatabase {
    type RentalModifier = PostgresRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &PostgresRentalRepository
    }
}

impl DependOnUserQuery<PostgresTransaction> for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnUserModifier<PostgresTransaction> for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

impl DependOnAddressQuery<PostgresTransaction> for PostgresDatabase {
    type AddressQuery = PostgresAddressRepository;
    fn address_query(&self) -> &Self::AddressQuery {
        &PostgresAddressRepository
    }
}

impl DependOnAddressModifier<PostgresTransaction> for PostgresDatabase {
    type AddressModifier = PostgresAddressRepository;
    fn address_modifier(&self) -> &Self::AddressModifier {
        &PostgresAddressRepository
    }
}
