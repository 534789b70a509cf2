//! Repository traits for data access
//!
//! One trait per entity, all with the same shape: insert, update, lookup,
//! filtered list with pagination, filtered count, delete, existence check.
//! Implementations are in `infra/storage/repositories.rs`.

use anyhow::Result;
use async_trait::async_trait;

use crate::contract::*;

use super::criteria::*;
use super::filter::Page;

#[async_trait]
pub trait DealerRepository: Send + Sync {
    async fn insert(&self, dealer: &Dealer) -> Result<Dealer>;
    async fn update(&self, dealer: &Dealer) -> Result<Dealer>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Dealer>>;
    /// Returns the requested page plus the total match count
    async fn list(&self, criteria: &DealerCriteria, page: &Page) -> Result<(Vec<Dealer>, u64)>;
    async fn count(&self, criteria: &DealerCriteria) -> Result<u64>;
    /// Returns whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait MoneyMarketDealRepository: Send + Sync {
    async fn insert(&self, deal: &MoneyMarketDeal) -> Result<MoneyMarketDeal>;
    async fn update(&self, deal: &MoneyMarketDeal) -> Result<MoneyMarketDeal>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MoneyMarketDeal>>;
    async fn list(
        &self,
        criteria: &MoneyMarketDealCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketDeal>, u64)>;
    async fn count(&self, criteria: &MoneyMarketDealCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait MoneyMarketListRepository: Send + Sync {
    async fn insert(&self, list: &MoneyMarketList) -> Result<MoneyMarketList>;
    async fn update(&self, list: &MoneyMarketList) -> Result<MoneyMarketList>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MoneyMarketList>>;
    async fn list(
        &self,
        criteria: &MoneyMarketListCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketList>, u64)>;
    async fn count(&self, criteria: &MoneyMarketListCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait MoneyMarketUploadNotificationRepository: Send + Sync {
    async fn insert(
        &self,
        notification: &MoneyMarketUploadNotification,
    ) -> Result<MoneyMarketUploadNotification>;
    async fn update(
        &self,
        notification: &MoneyMarketUploadNotification,
    ) -> Result<MoneyMarketUploadNotification>;
    async fn find_by_id(&self, id: i64) -> Result<Option<MoneyMarketUploadNotification>>;
    async fn list(
        &self,
        criteria: &MoneyMarketUploadNotificationCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketUploadNotification>, u64)>;
    async fn count(&self, criteria: &MoneyMarketUploadNotificationCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait FiscalYearRepository: Send + Sync {
    async fn insert(&self, year: &FiscalYear) -> Result<FiscalYear>;
    async fn update(&self, year: &FiscalYear) -> Result<FiscalYear>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FiscalYear>>;
    async fn list(
        &self,
        criteria: &FiscalYearCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalYear>, u64)>;
    async fn count(&self, criteria: &FiscalYearCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait FiscalQuarterRepository: Send + Sync {
    async fn insert(&self, quarter: &FiscalQuarter) -> Result<FiscalQuarter>;
    async fn update(&self, quarter: &FiscalQuarter) -> Result<FiscalQuarter>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FiscalQuarter>>;
    async fn list(
        &self,
        criteria: &FiscalQuarterCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalQuarter>, u64)>;
    async fn count(&self, criteria: &FiscalQuarterCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait FiscalMonthRepository: Send + Sync {
    async fn insert(&self, month: &FiscalMonth) -> Result<FiscalMonth>;
    async fn update(&self, month: &FiscalMonth) -> Result<FiscalMonth>;
    async fn find_by_id(&self, id: i64) -> Result<Option<FiscalMonth>>;
    async fn list(
        &self,
        criteria: &FiscalMonthCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalMonth>, u64)>;
    async fn count(&self, criteria: &FiscalMonthCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait ReportBatchRepository: Send + Sync {
    async fn insert(&self, batch: &ReportBatch) -> Result<ReportBatch>;
    async fn update(&self, batch: &ReportBatch) -> Result<ReportBatch>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ReportBatch>>;
    async fn list(
        &self,
        criteria: &ReportBatchCriteria,
        page: &Page,
    ) -> Result<(Vec<ReportBatch>, u64)>;
    async fn count(&self, criteria: &ReportBatchCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait PlaceholderRepository: Send + Sync {
    async fn insert(&self, placeholder: &Placeholder) -> Result<Placeholder>;
    async fn update(&self, placeholder: &Placeholder) -> Result<Placeholder>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Placeholder>>;
    async fn list(
        &self,
        criteria: &PlaceholderCriteria,
        page: &Page,
    ) -> Result<(Vec<Placeholder>, u64)>;
    async fn count(&self, criteria: &PlaceholderCriteria) -> Result<u64>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn exists(&self, id: i64) -> Result<bool>;
}
