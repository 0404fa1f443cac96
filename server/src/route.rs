mod account;
mod catalog;
mod rental;

pub use self::{account::*, catalog::*, rental::*};
