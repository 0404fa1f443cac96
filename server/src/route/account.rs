use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::identity::Identity;
use application::service::{AccountService, GetRentalService};
use application::transfer::{GetAccountDto, GetUserRentalsDto};
use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};
use time::OffsetDateTime;

mod request;
mod response;

pub use self::{request::*, response::*};

pub trait AccountRouter {
    fn route_account(self) -> Self;
}

impl AccountRouter for Router<AppModule> {
    fn route_account(self) -> Self {
        self.route(
            "/account",
            get(
                |State(handler): State<AppModule>, Identity(user_id): Identity| async move {
                    let account = handler
                        .database()
                        .get_account(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    let rentals = handler
                        .database()
                        .user_rentals(GetUserRentalsDto {
                            user_id,
                            as_of: OffsetDateTime::now_utc(),
                        })
                        .await
                        .map_err(ErrorStatus::from)?;
                    Ok::<_, ErrorStatus>(Json(AccountResponse::new(account, rentals)))
                },
            )
            .patch(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Json(req): Json<UpdateProfileRequest>| async move {
                    let account = handler
                        .database()
                        .update_profile(req.into_dto(user_id))
                        .await
                        .map_err(ErrorStatus::from)?;
                    let rentals = handler
                        .database()
                        .user_rentals(GetUserRentalsDto {
                            user_id,
                            as_of: OffsetDateTime::now_utc(),
                        })
                        .await
                        .map_err(ErrorStatus::from)?;
                    Ok::<_, ErrorStatus>(Json(AccountResponse::new(account, rentals)))
                },
            ),
        )
        .route(
            "/account/address",
            put(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Json(req): Json<UpsertAddressRequest>| async move {
                    let account = handler
                        .database()
                        .upsert_address(req.into_dto(user_id))
                        .await
                        .map_err(ErrorStatus::from)?;
                    let rentals = handler
                        .database()
                        .user_rentals(GetUserRentalsDto {
                            user_id,
                            as_of: OffsetDateTime::now_utc(),
                        })
                        .await
                        .map_err(ErrorStatus::from)?;
                    Ok::<_, ErrorStatus>(Json(AccountResponse::new(account, rentals)))
                },
            ),
        )
    }
}
