use sea_orm::entity::prelude::*;

/// One favorited movie per row. Uniqueness of (username, movie_id) is
/// enforced by an index created in the initial migration, which is what
/// makes favorite-add a single conditional insert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub username: String,

    /// Catalog movie identifier, kept as an opaque string.
    pub movie_id: String,

    /// Full movie snapshot as fetched at favorite-time.
    #[sea_orm(column_type = "Text")]
    pub movie_json: String,

    pub created_at: String, // ISO8601
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
