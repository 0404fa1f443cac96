use std::num::ParseIntError;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use application::transfer::{AddCopiesDto, CreateGameDto, GameFilterDto, UpdateGameDto};

/// Raw catalog filter selections, straight off the query string. Kept as
/// strings so a malformed value can be handled here instead of failing
/// extraction with a 400.
#[derive(Debug, Default, Deserialize)]
pub struct GameFilterRequest {
    number_of_players: Option<String>,
    min_age: Option<String>,
    min_duration: Option<String>,
    max_duration: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
}

impl GameFilterRequest {
    /// The catalog page never fails on bad filter input: if any value does
    /// not parse, the whole filter resets and the full catalog is shown.
    /// Sentinel handling (`0` means "no selection") happens further down.
    pub fn into_fail_open(self) -> GameFilterDto {
        let parsed = || -> Result<GameFilterDto, ParseIntError> {
            Ok(GameFilterDto {
                number_of_players: parse_field(self.number_of_players)?,
                min_age: parse_field(self.min_age)?,
                min_duration: parse_field(self.min_duration)?,
                max_duration: parse_field(self.max_duration)?,
                min_price: parse_field(self.min_price)?,
                max_price: parse_field(self.max_price)?,
            })
        }();
        parsed.unwrap_or_default()
    }
}

fn parse_field<T: FromStr>(value: Option<String>) -> Result<Option<T>, T::Err> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().parse())
        .transpose()
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    slug: String,
    name: String,
    description: String,
    players: Vec<i32>,
    minimum_age: Option<i32>,
    min_duration: Option<i32>,
    max_duration: Option<i32>,
    daily_price: Decimal,
    #[serde(default)]
    categories: Vec<String>,
    image: Option<String>,
}

impl From<CreateGameRequest> for CreateGameDto {
    fn from(value: CreateGameRequest) -> Self {
        CreateGameDto {
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

/// Patch body for a catalog entry. Omitted fields keep their stored value;
/// `null` is treated the same as omitted, so nullable attributes cannot be
/// cleared here.
#[derive(Debug, Deserialize)]
pub struct UpdateGameRequest {
    name: Option<String>,
    description: Option<String>,
    players: Option<Vec<i32>>,
    minimum_age: Option<i32>,
    min_duration: Option<i32>,
    max_duration: Option<i32>,
    daily_price: Option<Decimal>,
    categories: Option<Vec<String>>,
    image: Option<String>,
}

impl UpdateGameRequest {
    pub fn into_dto(self, slug: String) -> UpdateGameDto {
        UpdateGameDto {
            slug,
            name: self.name,
            description: self.description,
            players: self.players,
            minimum_age: self.minimum_age,
            min_duration: self.min_duration,
            max_duration: self.max_duration,
            daily_price: self.daily_price,
            categories: self.categories,
            image: self.image,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCopiesRequest {
    count: u32,
}

impl AddCopiesRequest {
    pub fn into_dto(self, slug: String) -> AddCopiesDto {
        AddCopiesDto {
            slug,
            count: self.count,
        }
    }
}

#[cfg(test)]
mod test {
    use super::GameFilterRequest;

    fn request(players: &str, min_price: &str) -> GameFilterRequest {
        GameFilterRequest {
            number_of_players: Some(players.to_string()),
            min_age: None,
            min_duration: None,
            max_duration: None,
            min_price: Some(min_price.to_string()),
            max_price: None,
        }
    }

    #[test]
    fn valid_selections_pass_through() {
        let dto = request("4", "10").into_fail_open();
        assert_eq!(dto.number_of_players, Some(4));
        assert_eq!(dto.min_price, Some(10));
    }

    #[test]
    fn one_bad_value_resets_the_whole_filter() {
        let dto = request("plenty", "10").into_fail_open();
        assert_eq!(dto.number_of_players, None);
        assert_eq!(dto.min_price, None);
    }

    #[test]
    fn blank_fields_are_no_selection() {
        let dto = request("  ", "").into_fail_open();
        assert_eq!(dto.number_of_players, None);
        assert_eq!(dto.min_price, None);
    }

    #[test]
    fn sentinel_zero_is_kept_for_the_filter_to_drop() {
        let dto = request("0", "0").into_fail_open();
        assert_eq!(dto.number_of_players, Some(0));
        assert_eq!(dto.min_price, Some(0));
    }
}
