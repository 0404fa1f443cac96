mod address;
mod game;
mod inventory;
mod rental;
mod user;

pub use self::{address::*, game::*, inventory::*, rental::*, user::*};
