use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(URL::Table)
                    .col(
                        ColumnDef::new(URL::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(URL::Url).text().not_null())
                    .col(ColumnDef::new(URL::Summary).text().null())
                    .col(
                        ColumnDef::new(URL::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(URL::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(URL::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum URL {
    Table,
    Id,
    Url,
    Summary,
    CreatedAt,
    UpdatedAt,
}
