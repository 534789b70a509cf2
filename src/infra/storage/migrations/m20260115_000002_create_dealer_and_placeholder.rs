use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dealer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dealer::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Dealer::DealerName).string().not_null())
                    .col(ColumnDef::new(Dealer::DealerType).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Placeholder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Placeholder::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Placeholder::Token).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Placeholder::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dealer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Dealer {
    Table,
    Id,
    DealerName,
    DealerType,
}

#[derive(DeriveIden)]
enum Placeholder {
    Table,
    Id,
    Token,
}
