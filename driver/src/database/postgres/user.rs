use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{AddressId, PhoneNumber, User, UserEmail, UserId, UserName};
use kernel::KernelError;

use crate::database::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery<PostgresTransaction> for PostgresUserRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con.as_pg(), id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl UserModifier<PostgresTransaction> for PostgresUserRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::create(con.as_pg(), user)
            .await
            .convert_error()
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::update(con.as_pg(), user)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    phone_number: Option<String>,
    is_staff: bool,
    address_id: Option<Uuid>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        User::new(
            UserId::new(value.id),
            UserName::new(value.name),
            UserEmail::new(value.email),
            value.phone_number.map(PhoneNumber::new),
            value.is_staff,
            value.address_id.map(AddressId::new),
        )
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(con: &mut PgConnection, id: &UserId) -> Result<Option<User>, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, name, email, phone_number, is_staff, address_id
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(User::from))
    }

    async fn create(con: &mut PgConnection, user: &User) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, phone_number, is_staff, address_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.name().as_ref())
        .bind(user.email().as_ref())
        .bind(
            user.phone_number()
                .as_ref()
                .map(|phone| phone.as_ref().as_str()),
        )
        .bind(user.is_staff())
        .bind(user.address_id().as_ref().map(|id| *id.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, user: &User) -> Result<(), DriverError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, phone_number = $4, is_staff = $5, address_id = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.name().as_ref())
        .bind(user.email().as_ref())
        .bind(
            user.phone_number()
                .as_ref()
                .map(|phone| phone.as_ref().as_str()),
        )
        .bind(user.is_staff())
        .bind(user.address_id().as_ref().map(|id| *id.as_ref()))
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{PhoneNumber, User, UserEmail, UserId, UserName};
    use kernel::KernelError;

    use crate::database::postgres::user::PostgresUserRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn create_and_update_profile() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let id = UserId::new(Uuid::new_v4());
        let user = User::new(
            id.clone(),
            UserName::new("alice".to_string()),
            UserEmail::new(format!("{}@example.com", id.as_ref())),
            None,
            false,
            None,
        );
        PostgresUserRepository.create(&mut con, &user).await?;

        let found = PostgresUserRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(user.clone()));

        let user = user.reconstruct(|u| {
            u.phone_number = Some(PhoneNumber::new("+31 6 12345678".to_string()));
        });
        PostgresUserRepository.update(&mut con, &user).await?;
        let found = PostgresUserRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(user));

        con.roll_back().await?;
        Ok(())
    }
}
