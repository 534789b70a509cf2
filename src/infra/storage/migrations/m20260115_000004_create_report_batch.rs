use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportBatch::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReportBatch::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ReportBatch::UploadTimestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ReportBatch::Status).string().not_null())
                    .col(ColumnDef::new(ReportBatch::Checksum).string())
                    .col(ColumnDef::new(ReportBatch::UploadedBy).uuid())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReportBatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReportBatch {
    Table,
    Id,
    UploadTimestamp,
    Status,
    Checksum,
    UploadedBy,
}
