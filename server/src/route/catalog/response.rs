use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use application::transfer::{GameDetailsDto, GameDto};

#[derive(Debug, Serialize)]
pub struct GameResponse {
    id: Uuid,
    slug: String,
    name: String,
    description: String,
    players: Vec<i32>,
    minimum_age: Option<i32>,
    min_duration: Option<i32>,
    max_duration: Option<i32>,
    daily_price: Decimal,
    categories: Vec<String>,
    image: Option<String>,
}

impl From<GameDto> for GameResponse {
    fn from(value: GameDto) -> Self {
        Self {
            id: value.id,
            slug: value.slug,
            name: value.name,
            description: value.description,
            players: value.players,
            minimum_age: value.minimum_age,
            min_duration: value.min_duration,
            max_duration: value.max_duration,
            daily_price: value.daily_price,
            categories: value.categories,
            image: value.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameDetailsResponse {
    #[serde(flatten)]
    game: GameResponse,
    available_copies: i64,
    is_available: bool,
}

impl From<GameDetailsDto> for GameDetailsResponse {
    fn from(value: GameDetailsDto) -> Self {
        Self {
            game: GameResponse::from(value.game),
            available_copies: value.available_copies,
            is_available: value.is_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StockedResponse {
    copy_ids: Vec<i64>,
}

impl StockedResponse {
    pub fn new(copy_ids: Vec<i64>) -> Self {
        Self { copy_ids }
    }
}
