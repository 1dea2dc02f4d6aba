pub mod prelude;

pub mod comments;
pub mod favorites;
pub mod users;
