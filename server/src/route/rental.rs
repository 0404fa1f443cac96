use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::identity::Identity;
use application::service::{AccountService, GetRentalService, RentService, ReturnService};
use application::transfer::{GetAccountDto, ListOpenRentalsDto, RentGameDto, ReturnGameDto};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use time::OffsetDateTime;

mod response;

pub use self::response::*;

pub trait RentalRouter {
    fn route_rental(self) -> Self;
}

impl RentalRouter for Router<AppModule> {
    fn route_rental(self) -> Self {
        self.route(
            "/games/:slug/rent",
            post(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Path(slug): Path<String>| async move {
                    handler
                        .database()
                        .rent_game(RentGameDto { slug, user_id })
                        .await
                        .map(|rental| (StatusCode::CREATED, Json(RentalResponse::from(rental))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals",
            get(
                |State(handler): State<AppModule>, Identity(user_id): Identity| async move {
                    handler
                        .database()
                        .ensure_staff(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .database()
                        .open_rentals(ListOpenRentalsDto {
                            as_of: OffsetDateTime::now_utc(),
                        })
                        .await
                        .map(|rentals| {
                            Json(
                                rentals
                                    .into_iter()
                                    .map(OpenRentalResponse::from)
                                    .collect::<Vec<_>>(),
                            )
                        })
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/rentals/:id/return",
            post(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Path(rental_id): Path<i64>| async move {
                    handler
                        .database()
                        .ensure_staff(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .database()
                        .return_game(ReturnGameDto { rental_id })
                        .await
                        .map(|rental| Json(RentalResponse::from(rental)))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
