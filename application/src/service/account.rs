use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AddressQuery, DependOnAddressQuery, DependOnUserQuery, UserQuery};
use kernel::interface::update::{
    AddressModifier, DependOnAddressModifier, DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{
    Address, AddressId, City, Country, HouseNumber, PhoneNumber, PostalCode, Street, User, UserId,
    UserName,
};
use kernel::KernelError;

use crate::transfer::{AccountDto, GetAccountDto, UpdateProfileDto, UpsertAddressDto};

#[async_trait::async_trait]
pub trait AccountService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
    + DependOnAddressQuery<Connection>
    + DependOnAddressModifier<Connection>
{
    async fn get_account(&self, dto: GetAccountDto) -> error_stack::Result<AccountDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self.find_user(&mut con, dto.user_id).await?;
        let address = self.find_address(&mut con, &user).await?;
        con.commit().await?;

        Ok(AccountDto::new(user, address))
    }

    /// Staff gate for the administration routes. An unknown identity is
    /// treated as unauthenticated rather than missing data.
    async fn ensure_staff(&self, dto: GetAccountDto) -> error_stack::Result<(), KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self
            .user_query()
            .find_by_id(&mut con, &UserId::new(dto.user_id))
            .await?
            .ok_or_else(|| Report::new(KernelError::Unauthorized))?;
        con.commit().await?;

        if *user.is_staff() {
            Ok(())
        } else {
            Err(Report::new(KernelError::Forbidden))
        }
    }

    async fn update_profile(
        &self,
        dto: UpdateProfileDto,
    ) -> error_stack::Result<AccountDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self.find_user(&mut con, dto.user_id).await?;
        let user = user.reconstruct(|u| {
            if let Some(name) = dto.name {
                u.name = UserName::new(name);
            }
            if let Some(number) = dto.phone_number {
                u.phone_number = Some(PhoneNumber::new(number));
            }
        });
        self.user_modifier().update(&mut con, &user).await?;
        let address = self.find_address(&mut con, &user).await?;
        con.commit().await?;

        Ok(AccountDto::new(user, address))
    }

    /// Rewrites the user's address in place, or creates and links one when the
    /// profile has none yet.
    async fn upsert_address(
        &self,
        dto: UpsertAddressDto,
    ) -> error_stack::Result<AccountDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user = self.find_user(&mut con, dto.user_id).await?;
        let address_id = user
            .address_id()
            .clone()
            .unwrap_or_else(|| AddressId::new(Uuid::new_v4()));
        let address = Address::new(
            address_id.clone(),
            Street::new(dto.street),
            HouseNumber::new(dto.house_number),
            PostalCode::new(dto.postal_code),
            City::new(dto.city),
            Country::new(dto.country),
        );
        self.address_modifier().upsert(&mut con, &address).await?;

        let user = if user.address_id().is_none() {
            let linked = user.reconstruct(|u| u.address_id = Some(address_id));
            self.user_modifier().update(&mut con, &linked).await?;
            linked
        } else {
            user
        };
        con.commit().await?;

        Ok(AccountDto::new(user, Some(address)))
    }

    async fn find_user(
        &self,
        con: &mut Connection,
        user_id: Uuid,
    ) -> error_stack::Result<User, KernelError> {
        self.user_query()
            .find_by_id(con, &UserId::new(user_id))
            .await?
            .ok_or_else(|| Report::new(KernelError::UserNotFound))
    }

    async fn find_address(
        &self,
        con: &mut Connection,
        user: &User,
    ) -> error_stack::Result<Option<Address>, KernelError> {
        match user.address_id() {
            Some(id) => self.address_query().find_by_id(con, id).await,
            None => Ok(None),
        }
    }
}

impl<Connection: Transaction + Send, T> AccountService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
        + DependOnAddressQuery<Connection>
        + DependOnAddressModifier<Connection>
{
}
