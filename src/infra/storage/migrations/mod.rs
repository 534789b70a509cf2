//! Database migrations for the money market service

use sea_orm_migration::prelude::*;

mod m20260115_000001_create_fiscal_calendar;
mod m20260115_000002_create_dealer_and_placeholder;
mod m20260115_000003_create_money_market;
mod m20260115_000004_create_report_batch;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_fiscal_calendar::Migration),
            Box::new(m20260115_000002_create_dealer_and_placeholder::Migration),
            Box::new(m20260115_000003_create_money_market::Migration),
            Box::new(m20260115_000004_create_report_batch::Migration),
        ]
    }
}
