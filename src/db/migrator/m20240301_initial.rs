use crate::entities::prelude::*;
use crate::entities::{comments, favorites};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Users)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Favorites)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Comments)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // A user's favorites hold at most one entry per movie id; the unique
        // index is what makes favorite-add a single conditional insert.
        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_username_movie_id")
                    .table(Favorites)
                    .col(favorites::Column::Username)
                    .col(favorites::Column::MovieId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_movie_id")
                    .table(Comments)
                    .col(comments::Column::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).to_owned())
            .await?;

        Ok(())
    }
}
