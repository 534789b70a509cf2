use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FiscalYear::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FiscalYear::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FiscalYear::Year).integer().not_null())
                    .col(ColumnDef::new(FiscalYear::StartDate).date())
                    .col(ColumnDef::new(FiscalYear::EndDate).date())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FiscalQuarter::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FiscalQuarter::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FiscalQuarter::QuarterNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FiscalQuarter::StartDate).date())
                    .col(ColumnDef::new(FiscalQuarter::EndDate).date())
                    .col(ColumnDef::new(FiscalQuarter::FiscalYearId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fiscal_quarter_year")
                            .from(FiscalQuarter::Table, FiscalQuarter::FiscalYearId)
                            .to(FiscalYear::Table, FiscalYear::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FiscalMonth::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FiscalMonth::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FiscalMonth::MonthNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FiscalMonth::StartDate).date())
                    .col(ColumnDef::new(FiscalMonth::EndDate).date())
                    .col(ColumnDef::new(FiscalMonth::FiscalQuarterId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fiscal_month_quarter")
                            .from(FiscalMonth::Table, FiscalMonth::FiscalQuarterId)
                            .to(FiscalQuarter::Table, FiscalQuarter::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FiscalMonth::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FiscalQuarter::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FiscalYear::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FiscalYear {
    Table,
    Id,
    Year,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum FiscalQuarter {
    Table,
    Id,
    QuarterNumber,
    StartDate,
    EndDate,
    FiscalYearId,
}

#[derive(DeriveIden)]
enum FiscalMonth {
    Table,
    Id,
    MonthNumber,
    StartDate,
    EndDate,
    FiscalQuarterId,
}
