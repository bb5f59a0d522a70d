use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Author fields carry no length limit, so neither do their columns.
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Authors::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Authors::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Authors::FirstName).text().not_null())
        .col(ColumnDef::new(Authors::LastName).text().not_null())
        .col(ColumnDef::new(Authors::Email).text().not_null())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Authors {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
}
