use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MoneyMarketList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MoneyMarketList::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MoneyMarketList::ReportDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MoneyMarketList::UploadTimestamp)
                            .timestamp_with_time_zone(),
                    )
                    .col(ColumnDef::new(MoneyMarketList::Status).string().not_null())
                    .col(ColumnDef::new(MoneyMarketList::Description).string())
                    .to_owned(),
            )
            .await?;

        // SQLite caps decimal precision at 16
        manager
            .create_table(
                Table::create()
                    .table(MoneyMarketDeal::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MoneyMarketDeal::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MoneyMarketDeal::DealNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MoneyMarketDeal::TradeDate).date())
                    .col(
                        ColumnDef::new(MoneyMarketDeal::SettlementDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MoneyMarketDeal::MaturityDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MoneyMarketDeal::PrincipalAmount)
                            .decimal_len(16, 2),
                    )
                    .col(ColumnDef::new(MoneyMarketDeal::InterestRate).decimal_len(10, 6))
                    .col(ColumnDef::new(MoneyMarketDeal::Currency).string())
                    .col(ColumnDef::new(MoneyMarketDeal::Counterparty).string())
                    .col(
                        ColumnDef::new(MoneyMarketDeal::Active)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MoneyMarketDeal::ListId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_money_market_deal_list")
                            .from(MoneyMarketDeal::Table, MoneyMarketDeal::ListId)
                            .to(MoneyMarketList::Table, MoneyMarketList::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_money_market_deal_deal_number")
                    .table(MoneyMarketDeal::Table)
                    .col(MoneyMarketDeal::DealNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DealPlaceholder::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DealPlaceholder::DealId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DealPlaceholder::PlaceholderId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(DealPlaceholder::DealId)
                            .col(DealPlaceholder::PlaceholderId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deal_placeholder_deal")
                            .from(DealPlaceholder::Table, DealPlaceholder::DealId)
                            .to(MoneyMarketDeal::Table, MoneyMarketDeal::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deal_placeholder_placeholder")
                            .from(DealPlaceholder::Table, DealPlaceholder::PlaceholderId)
                            .to(Placeholder::Table, Placeholder::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UploadNotification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UploadNotification::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UploadNotification::UploadTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UploadNotification::FileName).string())
                    .col(ColumnDef::new(UploadNotification::RecordCount).integer())
                    .col(ColumnDef::new(UploadNotification::ErrorMessage).string())
                    .col(ColumnDef::new(UploadNotification::ListId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_upload_notification_list")
                            .from(UploadNotification::Table, UploadNotification::ListId)
                            .to(MoneyMarketList::Table, MoneyMarketList::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UploadNotification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DealPlaceholder::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MoneyMarketDeal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MoneyMarketList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MoneyMarketList {
    Table,
    Id,
    ReportDate,
    UploadTimestamp,
    Status,
    Description,
}

#[derive(DeriveIden)]
enum MoneyMarketDeal {
    Table,
    Id,
    DealNumber,
    TradeDate,
    SettlementDate,
    MaturityDate,
    PrincipalAmount,
    InterestRate,
    Currency,
    Counterparty,
    Active,
    ListId,
}

#[derive(DeriveIden)]
enum DealPlaceholder {
    Table,
    DealId,
    PlaceholderId,
}

#[derive(DeriveIden)]
enum UploadNotification {
    #[sea_orm(iden = "money_market_upload_notification")]
    Table,
    Id,
    UploadTimestamp,
    FileName,
    RecordCount,
    ErrorMessage,
    ListId,
}

#[derive(DeriveIden)]
enum Placeholder {
    Table,
    Id,
}
