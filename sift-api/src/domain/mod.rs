mod user;

pub mod search;

pub use user::*;
