pub mod comment;
pub mod favorite;
pub mod user;
