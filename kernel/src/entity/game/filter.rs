use rust_decimal::Decimal;
use vodca::References;

use crate::entity::BoardGame;

/// Optional catalog criteria, ANDed together. `0` (or any non-positive value)
/// is the form's "no selection" sentinel and leaves the criterion unset, so a
/// default filter passes the whole catalog through.
///
/// This is the reference predicate for the SQL the driver builds; the two must
/// agree. Games with an unknown attribute (no minimum age, no duration bound)
/// do not match a criterion on that attribute.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct GameFilter {
    number_of_players: Option<i32>,
    min_age: Option<i32>,
    min_duration: Option<i32>,
    max_duration: Option<i32>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
}

impl GameFilter {
    pub fn new(
        number_of_players: Option<i32>,
        min_age: Option<i32>,
        min_duration: Option<i32>,
        max_duration: Option<i32>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
    ) -> Self {
        Self {
            number_of_players: number_of_players.filter(|value| *value > 0),
            min_age: min_age.filter(|value| *value > 0),
            min_duration: min_duration.filter(|value| *value > 0),
            max_duration: max_duration.filter(|value| *value > 0),
            min_price: min_price.filter(|value| *value > Decimal::ZERO),
            max_price: max_price.filter(|value| *value > Decimal::ZERO),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, game: &BoardGame) -> bool {
        if let Some(players) = self.number_of_players {
            if !game.players().supports(players) {
                return false;
            }
        }
        if let Some(min_age) = self.min_age {
            match game.minimum_age() {
                Some(age) => {
                    if *age.as_ref() < min_age {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some(min_duration) = self.min_duration {
            match game.duration().min() {
                Some(min) => {
                    if min < min_duration {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some(max_duration) = self.max_duration {
            match game.duration().max() {
                Some(max) => {
                    if max > max_duration {
                        return false;
                    }
                }
                None => return false,
            }
        }
        if let Some(min_price) = self.min_price {
            if *game.daily_price().as_ref() < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if *game.daily_price().as_ref() > max_price {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::entity::{
        BoardGame, CategoryTags, DailyPrice, DurationRange, GameDescription, GameFilter, GameId,
        GameName, GameSlug, MinimumAge, PlayerCounts,
    };

    fn game(name: &str, players: Vec<i32>, age: i32, price: i64) -> BoardGame {
        BoardGame::new(
            GameId::new(Uuid::new_v4()),
            GameSlug::new(name.to_lowercase()),
            GameName::new(name),
            GameDescription::new("description"),
            PlayerCounts::new(players),
            Some(MinimumAge::new(age)),
            DurationRange::new(Some(30), Some(60)),
            DailyPrice::new(Decimal::from(price)),
            CategoryTags::new(vec!["family".to_string()]),
            None,
        )
    }

    #[test]
    fn default_filter_passes_everything() {
        let filter = GameFilter::default();
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&game("Carcassonne", vec![2, 3, 4], 8, 10)));
    }

    #[test]
    fn sentinel_zero_means_no_selection() {
        let filter = GameFilter::new(Some(0), Some(0), Some(0), Some(0), None, None);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn player_count_must_be_supported_exactly() {
        let games = vec![
            game("A", vec![2, 4], 8, 10),
            game("B", vec![3, 5], 8, 10),
            game("C", vec![4, 6], 8, 10),
        ];
        let filter = GameFilter::new(Some(4), None, None, None, None, None);
        let matched: Vec<_> = games.iter().filter(|g| filter.matches(g)).collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|g| g.players().supports(4)));
    }

    #[test]
    fn criteria_combine_with_and() {
        let subject = game("Agricola", vec![1, 2, 3, 4], 12, 15);
        let pass = GameFilter::new(Some(2), Some(10), None, None, None, None);
        assert!(pass.matches(&subject));
        let fail_age = GameFilter::new(Some(2), Some(14), None, None, None, None);
        assert!(!fail_age.matches(&subject));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let subject = game("Azul", vec![2, 3, 4], 8, 10);
        let exact = GameFilter::new(
            None,
            None,
            None,
            None,
            Some(Decimal::from(10)),
            Some(Decimal::from(10)),
        );
        assert!(exact.matches(&subject));
        let below = GameFilter::new(None, None, None, None, None, Some(Decimal::from(9)));
        assert!(!below.matches(&subject));
    }

    #[test]
    fn unknown_minimum_age_fails_an_age_criterion() {
        let mut subject = game("Prototype", vec![2], 8, 5);
        subject = subject.reconstruct(|g| g.minimum_age = None);
        let filter = GameFilter::new(None, Some(6), None, None, None, None);
        assert!(!filter.matches(&subject));
    }
}
