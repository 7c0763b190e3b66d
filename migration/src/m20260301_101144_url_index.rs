use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_index(sea_query::Index::create()
             .name("url-created-at")
             .table(super::m20260301_093020_create_url_table::URL::Table)
             .col(super::m20260301_093020_create_url_table::URL::CreatedAt)
             .to_owned()
        ).await?;

        manager.create_index(sea_query::Index::create()
             .name("url-url")
             .table(super::m20260301_093020_create_url_table::URL::Table)
             .col(super::m20260301_093020_create_url_table::URL::Url)
             .to_owned()
        ).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(sea_query::Index::drop()
            .name("url-created-at")
            .to_owned()
        ).await?;

        manager.drop_index(sea_query::Index::drop()
            .name("url-url")
            .to_owned()
        ).await
    }
}
