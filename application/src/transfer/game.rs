use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::prelude::entity::{BoardGame, DestructBoardGame, GameFilter};

#[derive(Debug, Clone)]
pub struct GameDto {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub players: Vec<i32>,
    pub minimum_age: Option<i32>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub daily_price: Decimal,
    pub categories: Vec<String>,
    pub image: Option<String>,
}

impl From<BoardGame> for GameDto {
    fn from(value: BoardGame) -> Self {
        let DestructBoardGame {
            id,
            slug,
            name,
            description,
            players,
            minimum_age,
            duration,
            daily_price,
            categories,
            image,
        } = value.into_destruct();
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
            players: players.into(),
            minimum_age: minimum_age.map(Into::into),
            min_duration: duration.min(),
            max_duration: duration.max(),
            daily_price: daily_price.into(),
            categories: categories.into(),
            image: image.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameDetailsDto {
    pub game: GameDto,
    pub available_copies: i64,
    pub is_available: bool,
}

impl GameDetailsDto {
    pub fn new(game: BoardGame, available_copies: i64) -> Self {
        Self {
            game: GameDto::from(game),
            available_copies,
            is_available: available_copies > 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetGameDto {
    pub slug: String,
}

/// Raw filter selections. Prices arrive integer-encoded from the form.
#[derive(Debug, Clone, Default)]
pub struct GameFilterDto {
    pub number_of_players: Option<i32>,
    pub min_age: Option<i32>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

impl From<GameFilterDto> for GameFilter {
    fn from(value: GameFilterDto) -> Self {
        GameFilter::new(
            value.number_of_players,
            value.min_age,
            value.min_duration,
            value.max_duration,
            value.min_price.map(Decimal::from),
            value.max_price.map(Decimal::from),
        )
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameDto {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub players: Vec<i32>,
    pub minimum_age: Option<i32>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub daily_price: Decimal,
    pub categories: Vec<String>,
    pub image: Option<String>,
}

/// Absent fields keep their current value; provided fields overwrite it.
///
/// Because absence means "keep", the nullable attributes (`minimum_age`,
/// `image`) cannot be cleared back to unset through this patch; clearing
/// would need a distinct "set to null" encoding on the wire.
#[derive(Debug, Clone)]
pub struct UpdateGameDto {
    pub slug: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub players: Option<Vec<i32>>,
    pub minimum_age: Option<i32>,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub daily_price: Option<Decimal>,
    pub categories: Option<Vec<String>>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DeleteGameDto {
    pub slug: String,
}

#[derive(Debug, Clone)]
pub struct AddCopiesDto {
    pub slug: String,
    pub count: u32,
}
