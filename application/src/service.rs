mod account;
mod catalog;
mod rental;
mod stock;

pub use self::{account::*, catalog::*, rental::*, stock::*};
