pub mod prelude;

pub mod character;
pub mod ownership;
