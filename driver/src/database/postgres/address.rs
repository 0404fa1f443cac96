use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::AddressQuery;
use kernel::interface::update::AddressModifier;
use kernel::prelude::entity::{
    Address, AddressId, City, Country, HouseNumber, PostalCode, Street,
};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresAddressRepository;

#[async_trait::async_trait]
impl AddressQuery<PostgresTransaction> for PostgresAddressRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &AddressId,
    ) -> error_stack::Result<Option<Address>, KernelError> {
        PgAddressInternal::find_by_id(con.as_pg(), id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl AddressModifier<PostgresTransaction> for PostgresAddressRepository {
    async fn upsert(
        &self,
        con: &mut PostgresTransaction,
        address: &Address,
    ) -> error_stack::Result<(), KernelError> {
        PgAddressInternal::upsert(con.as_pg(), address)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: Uuid,
    street: String,
    house_number: String,
    postal_code: String,
    city: String,
    country: String,
}

impl From<AddressRow> for Address {
    fn from(value: AddressRow) -> Self {
        Address::new(
            AddressId::new(value.id),
            Street::new(value.street),
            HouseNumber::new(value.house_number),
            PostalCode::new(value.postal_code),
            City::new(value.city),
            Country::new(value.country),
        )
    }
}

pub(in crate::database) struct PgAddressInternal;

impl PgAddressInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &AddressId,
    ) -> Result<Option<Address>, DriverError> {
        let row = sqlx::query_as::<_, AddressRow>(
            // language=postgresql
            r#"
            SELECT id, street, house_number, postal_code, city, country
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Address::from))
    }

    async fn upsert(con: &mut PgConnection, address: &Address) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO addresses (id, street, house_number, postal_code, city, country)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE
            SET street = EXCLUDED.street, house_number = EXCLUDED.house_number,
                postal_code = EXCLUDED.postal_code, city = EXCLUDED.city,
                country = EXCLUDED.country
            "#,
        )
        .bind(address.id().as_ref())
        .bind(address.street().as_ref())
        .bind(address.house_number().as_ref())
        .bind(address.postal_code().as_ref())
        .bind(address.city().as_ref())
        .bind(address.country().as_ref())
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::AddressQuery;
    use kernel::interface::update::AddressModifier;
    use kernel::prelude::entity::{
        Address, AddressId, City, Country, HouseNumber, PostalCode, Street,
    };
    use kernel::KernelError;

    use crate::database::postgres::address::PostgresAddressRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn upsert_rewrites_in_place() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let id = AddressId::new(Uuid::new_v4());
        let address = Address::new(
            id.clone(),
            Street::new("Keizersgracht".to_string()),
            HouseNumber::new("12a".to_string()),
            PostalCode::new("1015 CN".to_string()),
            City::new("Amsterdam".to_string()),
            Country::new("NL".to_string()),
        );
        PostgresAddressRepository.upsert(&mut con, &address).await?;

        let moved = address.reconstruct(|a| a.city = City::new("Utrecht".to_string()));
        PostgresAddressRepository.upsert(&mut con, &moved).await?;

        let found = PostgresAddressRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(moved));

        con.roll_back().await?;
        Ok(())
    }
}
