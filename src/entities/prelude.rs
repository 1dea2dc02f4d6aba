pub use super::comments::Entity as Comments;
pub use super::favorites::Entity as Favorites;
pub use super::users::Entity as Users;
