mod account;
mod game;
mod rental;

pub use self::{account::*, game::*, rental::*};
