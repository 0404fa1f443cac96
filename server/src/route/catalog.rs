use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::identity::Identity;
use application::service::{AccountService, GetGameService, ManageGameService, StockService};
use application::transfer::{DeleteGameDto, GetAccountDto, GetGameDto};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::Query;

mod request;
mod response;

pub use self::{request::*, response::*};

pub trait CatalogRouter {
    fn route_catalog(self) -> Self;
}

impl CatalogRouter for Router<AppModule> {
    fn route_catalog(self) -> Self {
        self.route(
            "/games",
            get(
                |State(handler): State<AppModule>, Query(req): Query<GameFilterRequest>| async move {
                    handler
                        .database()
                        .list_games(req.into_fail_open())
                        .await
                        .map(|games| {
                            Json(games.into_iter().map(GameResponse::from).collect::<Vec<_>>())
                        })
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Json(req): Json<CreateGameRequest>| async move {
                    handler
                        .database()
                        .ensure_staff(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .database()
                        .create_game(req.into())
                        .await
                        .map(|game| (StatusCode::CREATED, Json(GameResponse::from(game))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/games/:slug",
            get(
                |State(handler): State<AppModule>, Path(slug): Path<String>| async move {
                    handler
                        .database()
                        .game_details(GetGameDto { slug })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|details| {
                            details
                                .map(|details| {
                                    Json(GameDetailsResponse::from(details)).into_response()
                                })
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .patch(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Path(slug): Path<String>,
                 Json(req): Json<UpdateGameRequest>| async move {
                    handler
                        .database()
                        .ensure_staff(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .database()
                        .update_game(req.into_dto(slug))
                        .await
                        .map(|game| Json(GameResponse::from(game)))
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Path(slug): Path<String>| async move {
                    handler
                        .database()
                        .ensure_staff(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .database()
                        .delete_game(DeleteGameDto { slug })
                        .await
                        .map(|()| StatusCode::NO_CONTENT)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/games/:slug/copies",
            post(
                |State(handler): State<AppModule>,
                 Identity(user_id): Identity,
                 Path(slug): Path<String>,
                 Json(req): Json<AddCopiesRequest>| async move {
                    handler
                        .database()
                        .ensure_staff(GetAccountDto { user_id })
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .database()
                        .add_copies(req.into_dto(slug))
                        .await
                        .map(|ids| (StatusCode::CREATED, Json(StockedResponse::new(ids))))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
