mod age;
mod category;
mod description;
mod duration;
mod filter;
mod id;
mod image;
mod name;
mod players;
mod price;
mod slug;

pub use self::{
    age::*, category::*, description::*, duration::*, filter::*, id::*, image::*, name::*,
    players::*, price::*, slug::*,
};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

/// A catalog entry. One row per game title; physical copies live in
/// [`crate::entity::Inventory`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation)]
pub struct BoardGame {
    id: GameId,
    slug: GameSlug,
    name: GameName,
    description: GameDescription,
    players: PlayerCounts,
    minimum_age: Option<MinimumAge>,
    duration: DurationRange,
    daily_price: DailyPrice,
    categories: CategoryTags,
    image: Option<ImageName>,
}

impl BoardGame {
    pub fn new(
        id: GameId,
        slug: GameSlug,
        name: GameName,
        description: GameDescription,
        players: PlayerCounts,
        minimum_age: Option<MinimumAge>,
        duration: DurationRange,
        daily_price: DailyPrice,
        categories: CategoryTags,
        image: Option<ImageName>,
    ) -> Self {
        Self {
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
        }
    }
}
