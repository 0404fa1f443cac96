pub use self::postgres::*;

mod postgres;
