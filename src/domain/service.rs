//! Domain service - orchestrates validation, persistence, and change
//! propagation for every entity
//!
//! Writes go to the primary store synchronously; on success a change event
//! is handed to the notifier for the search mirror. Reads never touch the
//! mirror (that is the `_search` endpoint's job).

use std::sync::Arc;

use crate::contract::*;

use super::criteria::*;
use super::events::{ChangeNotifier, EntityChange};
use super::filter::Page;
use super::repository::*;

/// Domain service over all entity repositories
pub struct Service {
    dealers: Arc<dyn DealerRepository>,
    deals: Arc<dyn MoneyMarketDealRepository>,
    lists: Arc<dyn MoneyMarketListRepository>,
    upload_notifications: Arc<dyn MoneyMarketUploadNotificationRepository>,
    fiscal_years: Arc<dyn FiscalYearRepository>,
    fiscal_quarters: Arc<dyn FiscalQuarterRepository>,
    fiscal_months: Arc<dyn FiscalMonthRepository>,
    report_batches: Arc<dyn ReportBatchRepository>,
    placeholders: Arc<dyn PlaceholderRepository>,
    changes: Arc<dyn ChangeNotifier>,
}

/// Repository bundle used to build the service
pub struct Repositories {
    pub dealers: Arc<dyn DealerRepository>,
    pub deals: Arc<dyn MoneyMarketDealRepository>,
    pub lists: Arc<dyn MoneyMarketListRepository>,
    pub upload_notifications: Arc<dyn MoneyMarketUploadNotificationRepository>,
    pub fiscal_years: Arc<dyn FiscalYearRepository>,
    pub fiscal_quarters: Arc<dyn FiscalQuarterRepository>,
    pub fiscal_months: Arc<dyn FiscalMonthRepository>,
    pub report_batches: Arc<dyn ReportBatchRepository>,
    pub placeholders: Arc<dyn PlaceholderRepository>,
}

fn ensure_no_id(id: Option<i64>, resource: &str) -> Result<(), DomainError> {
    if id.is_some() {
        return Err(DomainError::validation(format!(
            "a new {resource} cannot already have an id"
        )));
    }
    Ok(())
}

fn ensure_matching_id(path_id: i64, body_id: Option<i64>) -> Result<(), DomainError> {
    match body_id {
        None => Err(DomainError::validation("id is required in the request body")),
        Some(id) if id != path_id => Err(DomainError::validation(format!(
            "body id {id} does not match path id {path_id}"
        ))),
        Some(_) => Ok(()),
    }
}

impl Service {
    pub fn new(repos: Repositories, changes: Arc<dyn ChangeNotifier>) -> Self {
        Self {
            dealers: repos.dealers,
            deals: repos.deals,
            lists: repos.lists,
            upload_notifications: repos.upload_notifications,
            fiscal_years: repos.fiscal_years,
            fiscal_quarters: repos.fiscal_quarters,
            fiscal_months: repos.fiscal_months,
            report_batches: repos.report_batches,
            placeholders: repos.placeholders,
            changes,
        }
    }

    // ===== Dealer =====

    pub async fn create_dealer(&self, dealer: Dealer) -> Result<Dealer, DomainError> {
        ensure_no_id(dealer.id, "dealer")?;
        let saved = self.dealers.insert(&dealer).await?;
        tracing::debug!(id = ?saved.id, "dealer created");
        self.changes.notify(EntityChange::DealerSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_dealer(&self, id: i64) -> Result<Dealer, DomainError> {
        self.dealers
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "dealer",
                id,
            })
    }

    pub async fn list_dealers(
        &self,
        criteria: &DealerCriteria,
        page: &Page,
    ) -> Result<(Vec<Dealer>, u64), DomainError> {
        Ok(self.dealers.list(criteria, page).await?)
    }

    pub async fn count_dealers(&self, criteria: &DealerCriteria) -> Result<u64, DomainError> {
        Ok(self.dealers.count(criteria).await?)
    }

    pub async fn update_dealer(&self, id: i64, dealer: Dealer) -> Result<Dealer, DomainError> {
        ensure_matching_id(id, dealer.id)?;
        if !self.dealers.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "dealer",
                id,
            });
        }
        let saved = self.dealers.update(&dealer).await?;
        self.changes.notify(EntityChange::DealerSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_dealer(&self, id: i64, patch: DealerPatch) -> Result<Dealer, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut dealer = self.get_dealer(id).await?;
        if let Some(v) = patch.dealer_name {
            dealer.dealer_name = v;
        }
        if let Some(v) = patch.dealer_type {
            dealer.dealer_type = v;
        }
        let saved = self.dealers.update(&dealer).await?;
        self.changes.notify(EntityChange::DealerSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_dealer(&self, id: i64) -> Result<(), DomainError> {
        if self.dealers.delete(id).await? {
            self.changes.notify(EntityChange::DealerDeleted(id));
        }
        Ok(())
    }

    // ===== MoneyMarketDeal =====

    pub async fn create_deal(
        &self,
        deal: MoneyMarketDeal,
    ) -> Result<MoneyMarketDeal, DomainError> {
        ensure_no_id(deal.id, "money market deal")?;
        let saved = self.deals.insert(&deal).await?;
        tracing::debug!(id = ?saved.id, deal_number = %saved.deal_number, "deal created");
        self.changes.notify(EntityChange::DealSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_deal(&self, id: i64) -> Result<MoneyMarketDeal, DomainError> {
        self.deals
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "money market deal",
                id,
            })
    }

    pub async fn list_deals(
        &self,
        criteria: &MoneyMarketDealCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketDeal>, u64), DomainError> {
        Ok(self.deals.list(criteria, page).await?)
    }

    pub async fn count_deals(
        &self,
        criteria: &MoneyMarketDealCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.deals.count(criteria).await?)
    }

    pub async fn update_deal(
        &self,
        id: i64,
        deal: MoneyMarketDeal,
    ) -> Result<MoneyMarketDeal, DomainError> {
        ensure_matching_id(id, deal.id)?;
        if !self.deals.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "money market deal",
                id,
            });
        }
        let saved = self.deals.update(&deal).await?;
        self.changes.notify(EntityChange::DealSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_deal(
        &self,
        id: i64,
        patch: MoneyMarketDealPatch,
    ) -> Result<MoneyMarketDeal, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut deal = self.get_deal(id).await?;
        if let Some(v) = patch.deal_number {
            deal.deal_number = v;
        }
        if let Some(v) = patch.trade_date {
            deal.trade_date = v;
        }
        if let Some(v) = patch.settlement_date {
            deal.settlement_date = v;
        }
        if let Some(v) = patch.maturity_date {
            deal.maturity_date = v;
        }
        if let Some(v) = patch.principal_amount {
            deal.principal_amount = v;
        }
        if let Some(v) = patch.interest_rate {
            deal.interest_rate = v;
        }
        if let Some(v) = patch.currency {
            deal.currency = v;
        }
        if let Some(v) = patch.counterparty {
            deal.counterparty = v;
        }
        if let Some(v) = patch.active {
            deal.active = v;
        }
        if let Some(v) = patch.list_id {
            deal.list_id = v;
        }
        if let Some(v) = patch.placeholders {
            deal.placeholders = v;
        }
        let saved = self.deals.update(&deal).await?;
        self.changes.notify(EntityChange::DealSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_deal(&self, id: i64) -> Result<(), DomainError> {
        if self.deals.delete(id).await? {
            self.changes.notify(EntityChange::DealDeleted(id));
        }
        Ok(())
    }

    // ===== MoneyMarketList =====

    pub async fn create_list(
        &self,
        list: MoneyMarketList,
    ) -> Result<MoneyMarketList, DomainError> {
        ensure_no_id(list.id, "money market list")?;
        let saved = self.lists.insert(&list).await?;
        self.changes.notify(EntityChange::ListSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_list(&self, id: i64) -> Result<MoneyMarketList, DomainError> {
        self.lists
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "money market list",
                id,
            })
    }

    pub async fn list_lists(
        &self,
        criteria: &MoneyMarketListCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketList>, u64), DomainError> {
        Ok(self.lists.list(criteria, page).await?)
    }

    pub async fn count_lists(
        &self,
        criteria: &MoneyMarketListCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.lists.count(criteria).await?)
    }

    pub async fn update_list(
        &self,
        id: i64,
        list: MoneyMarketList,
    ) -> Result<MoneyMarketList, DomainError> {
        ensure_matching_id(id, list.id)?;
        if !self.lists.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "money market list",
                id,
            });
        }
        let saved = self.lists.update(&list).await?;
        self.changes.notify(EntityChange::ListSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_list(
        &self,
        id: i64,
        patch: MoneyMarketListPatch,
    ) -> Result<MoneyMarketList, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut list = self.get_list(id).await?;
        if let Some(v) = patch.report_date {
            list.report_date = v;
        }
        if let Some(v) = patch.upload_timestamp {
            list.upload_timestamp = v;
        }
        if let Some(v) = patch.status {
            list.status = v;
        }
        if let Some(v) = patch.description {
            list.description = v;
        }
        let saved = self.lists.update(&list).await?;
        self.changes.notify(EntityChange::ListSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_list(&self, id: i64) -> Result<(), DomainError> {
        if self.lists.delete(id).await? {
            self.changes.notify(EntityChange::ListDeleted(id));
        }
        Ok(())
    }

    // ===== MoneyMarketUploadNotification =====

    pub async fn create_upload_notification(
        &self,
        notification: MoneyMarketUploadNotification,
    ) -> Result<MoneyMarketUploadNotification, DomainError> {
        ensure_no_id(notification.id, "upload notification")?;
        let saved = self.upload_notifications.insert(&notification).await?;
        self.changes
            .notify(EntityChange::UploadNotificationSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_upload_notification(
        &self,
        id: i64,
    ) -> Result<MoneyMarketUploadNotification, DomainError> {
        self.upload_notifications
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "upload notification",
                id,
            })
    }

    pub async fn list_upload_notifications(
        &self,
        criteria: &MoneyMarketUploadNotificationCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketUploadNotification>, u64), DomainError> {
        Ok(self.upload_notifications.list(criteria, page).await?)
    }

    pub async fn count_upload_notifications(
        &self,
        criteria: &MoneyMarketUploadNotificationCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.upload_notifications.count(criteria).await?)
    }

    pub async fn update_upload_notification(
        &self,
        id: i64,
        notification: MoneyMarketUploadNotification,
    ) -> Result<MoneyMarketUploadNotification, DomainError> {
        ensure_matching_id(id, notification.id)?;
        if !self.upload_notifications.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "upload notification",
                id,
            });
        }
        let saved = self.upload_notifications.update(&notification).await?;
        self.changes
            .notify(EntityChange::UploadNotificationSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_upload_notification(
        &self,
        id: i64,
        patch: MoneyMarketUploadNotificationPatch,
    ) -> Result<MoneyMarketUploadNotification, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut notification = self.get_upload_notification(id).await?;
        if let Some(v) = patch.upload_timestamp {
            notification.upload_timestamp = v;
        }
        if let Some(v) = patch.file_name {
            notification.file_name = v;
        }
        if let Some(v) = patch.record_count {
            notification.record_count = v;
        }
        if let Some(v) = patch.error_message {
            notification.error_message = v;
        }
        if let Some(v) = patch.list_id {
            notification.list_id = v;
        }
        let saved = self.upload_notifications.update(&notification).await?;
        self.changes
            .notify(EntityChange::UploadNotificationSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_upload_notification(&self, id: i64) -> Result<(), DomainError> {
        if self.upload_notifications.delete(id).await? {
            self.changes
                .notify(EntityChange::UploadNotificationDeleted(id));
        }
        Ok(())
    }

    // ===== FiscalYear =====

    pub async fn create_fiscal_year(&self, year: FiscalYear) -> Result<FiscalYear, DomainError> {
        ensure_no_id(year.id, "fiscal year")?;
        let saved = self.fiscal_years.insert(&year).await?;
        self.changes
            .notify(EntityChange::FiscalYearSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_fiscal_year(&self, id: i64) -> Result<FiscalYear, DomainError> {
        self.fiscal_years
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "fiscal year",
                id,
            })
    }

    pub async fn list_fiscal_years(
        &self,
        criteria: &FiscalYearCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalYear>, u64), DomainError> {
        Ok(self.fiscal_years.list(criteria, page).await?)
    }

    pub async fn count_fiscal_years(
        &self,
        criteria: &FiscalYearCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.fiscal_years.count(criteria).await?)
    }

    pub async fn update_fiscal_year(
        &self,
        id: i64,
        year: FiscalYear,
    ) -> Result<FiscalYear, DomainError> {
        ensure_matching_id(id, year.id)?;
        if !self.fiscal_years.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "fiscal year",
                id,
            });
        }
        let saved = self.fiscal_years.update(&year).await?;
        self.changes
            .notify(EntityChange::FiscalYearSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_fiscal_year(
        &self,
        id: i64,
        patch: FiscalYearPatch,
    ) -> Result<FiscalYear, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut year = self.get_fiscal_year(id).await?;
        if let Some(v) = patch.year {
            year.year = v;
        }
        if let Some(v) = patch.start_date {
            year.start_date = v;
        }
        if let Some(v) = patch.end_date {
            year.end_date = v;
        }
        let saved = self.fiscal_years.update(&year).await?;
        self.changes
            .notify(EntityChange::FiscalYearSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_fiscal_year(&self, id: i64) -> Result<(), DomainError> {
        if self.fiscal_years.delete(id).await? {
            self.changes.notify(EntityChange::FiscalYearDeleted(id));
        }
        Ok(())
    }

    // ===== FiscalQuarter =====

    pub async fn create_fiscal_quarter(
        &self,
        quarter: FiscalQuarter,
    ) -> Result<FiscalQuarter, DomainError> {
        ensure_no_id(quarter.id, "fiscal quarter")?;
        let saved = self.fiscal_quarters.insert(&quarter).await?;
        self.changes
            .notify(EntityChange::FiscalQuarterSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_fiscal_quarter(&self, id: i64) -> Result<FiscalQuarter, DomainError> {
        self.fiscal_quarters
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "fiscal quarter",
                id,
            })
    }

    pub async fn list_fiscal_quarters(
        &self,
        criteria: &FiscalQuarterCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalQuarter>, u64), DomainError> {
        Ok(self.fiscal_quarters.list(criteria, page).await?)
    }

    pub async fn count_fiscal_quarters(
        &self,
        criteria: &FiscalQuarterCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.fiscal_quarters.count(criteria).await?)
    }

    pub async fn update_fiscal_quarter(
        &self,
        id: i64,
        quarter: FiscalQuarter,
    ) -> Result<FiscalQuarter, DomainError> {
        ensure_matching_id(id, quarter.id)?;
        if !self.fiscal_quarters.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "fiscal quarter",
                id,
            });
        }
        let saved = self.fiscal_quarters.update(&quarter).await?;
        self.changes
            .notify(EntityChange::FiscalQuarterSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_fiscal_quarter(
        &self,
        id: i64,
        patch: FiscalQuarterPatch,
    ) -> Result<FiscalQuarter, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut quarter = self.get_fiscal_quarter(id).await?;
        if let Some(v) = patch.quarter_number {
            quarter.quarter_number = v;
        }
        if let Some(v) = patch.start_date {
            quarter.start_date = v;
        }
        if let Some(v) = patch.end_date {
            quarter.end_date = v;
        }
        if let Some(v) = patch.fiscal_year_id {
            quarter.fiscal_year_id = v;
        }
        let saved = self.fiscal_quarters.update(&quarter).await?;
        self.changes
            .notify(EntityChange::FiscalQuarterSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_fiscal_quarter(&self, id: i64) -> Result<(), DomainError> {
        if self.fiscal_quarters.delete(id).await? {
            self.changes.notify(EntityChange::FiscalQuarterDeleted(id));
        }
        Ok(())
    }

    // ===== FiscalMonth =====

    pub async fn create_fiscal_month(
        &self,
        month: FiscalMonth,
    ) -> Result<FiscalMonth, DomainError> {
        ensure_no_id(month.id, "fiscal month")?;
        let saved = self.fiscal_months.insert(&month).await?;
        self.changes
            .notify(EntityChange::FiscalMonthSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_fiscal_month(&self, id: i64) -> Result<FiscalMonth, DomainError> {
        self.fiscal_months
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "fiscal month",
                id,
            })
    }

    pub async fn list_fiscal_months(
        &self,
        criteria: &FiscalMonthCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalMonth>, u64), DomainError> {
        Ok(self.fiscal_months.list(criteria, page).await?)
    }

    pub async fn count_fiscal_months(
        &self,
        criteria: &FiscalMonthCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.fiscal_months.count(criteria).await?)
    }

    pub async fn update_fiscal_month(
        &self,
        id: i64,
        month: FiscalMonth,
    ) -> Result<FiscalMonth, DomainError> {
        ensure_matching_id(id, month.id)?;
        if !self.fiscal_months.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "fiscal month",
                id,
            });
        }
        let saved = self.fiscal_months.update(&month).await?;
        self.changes
            .notify(EntityChange::FiscalMonthSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_fiscal_month(
        &self,
        id: i64,
        patch: FiscalMonthPatch,
    ) -> Result<FiscalMonth, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut month = self.get_fiscal_month(id).await?;
        if let Some(v) = patch.month_number {
            month.month_number = v;
        }
        if let Some(v) = patch.start_date {
            month.start_date = v;
        }
        if let Some(v) = patch.end_date {
            month.end_date = v;
        }
        if let Some(v) = patch.fiscal_quarter_id {
            month.fiscal_quarter_id = v;
        }
        let saved = self.fiscal_months.update(&month).await?;
        self.changes
            .notify(EntityChange::FiscalMonthSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_fiscal_month(&self, id: i64) -> Result<(), DomainError> {
        if self.fiscal_months.delete(id).await? {
            self.changes.notify(EntityChange::FiscalMonthDeleted(id));
        }
        Ok(())
    }

    // ===== ReportBatch =====

    pub async fn create_report_batch(
        &self,
        batch: ReportBatch,
    ) -> Result<ReportBatch, DomainError> {
        ensure_no_id(batch.id, "report batch")?;
        let saved = self.report_batches.insert(&batch).await?;
        self.changes
            .notify(EntityChange::ReportBatchSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_report_batch(&self, id: i64) -> Result<ReportBatch, DomainError> {
        self.report_batches
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "report batch",
                id,
            })
    }

    pub async fn list_report_batches(
        &self,
        criteria: &ReportBatchCriteria,
        page: &Page,
    ) -> Result<(Vec<ReportBatch>, u64), DomainError> {
        Ok(self.report_batches.list(criteria, page).await?)
    }

    pub async fn count_report_batches(
        &self,
        criteria: &ReportBatchCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.report_batches.count(criteria).await?)
    }

    pub async fn update_report_batch(
        &self,
        id: i64,
        batch: ReportBatch,
    ) -> Result<ReportBatch, DomainError> {
        ensure_matching_id(id, batch.id)?;
        if !self.report_batches.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "report batch",
                id,
            });
        }
        let saved = self.report_batches.update(&batch).await?;
        self.changes
            .notify(EntityChange::ReportBatchSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_report_batch(
        &self,
        id: i64,
        patch: ReportBatchPatch,
    ) -> Result<ReportBatch, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut batch = self.get_report_batch(id).await?;
        if let Some(v) = patch.upload_timestamp {
            batch.upload_timestamp = v;
        }
        if let Some(v) = patch.status {
            batch.status = v;
        }
        if let Some(v) = patch.checksum {
            batch.checksum = v;
        }
        if let Some(v) = patch.uploaded_by {
            batch.uploaded_by = v;
        }
        let saved = self.report_batches.update(&batch).await?;
        self.changes
            .notify(EntityChange::ReportBatchSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_report_batch(&self, id: i64) -> Result<(), DomainError> {
        if self.report_batches.delete(id).await? {
            self.changes.notify(EntityChange::ReportBatchDeleted(id));
        }
        Ok(())
    }

    // ===== Placeholder =====

    pub async fn create_placeholder(
        &self,
        placeholder: Placeholder,
    ) -> Result<Placeholder, DomainError> {
        ensure_no_id(placeholder.id, "placeholder")?;
        let saved = self.placeholders.insert(&placeholder).await?;
        self.changes
            .notify(EntityChange::PlaceholderSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn get_placeholder(&self, id: i64) -> Result<Placeholder, DomainError> {
        self.placeholders
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "placeholder",
                id,
            })
    }

    pub async fn list_placeholders(
        &self,
        criteria: &PlaceholderCriteria,
        page: &Page,
    ) -> Result<(Vec<Placeholder>, u64), DomainError> {
        Ok(self.placeholders.list(criteria, page).await?)
    }

    pub async fn count_placeholders(
        &self,
        criteria: &PlaceholderCriteria,
    ) -> Result<u64, DomainError> {
        Ok(self.placeholders.count(criteria).await?)
    }

    pub async fn update_placeholder(
        &self,
        id: i64,
        placeholder: Placeholder,
    ) -> Result<Placeholder, DomainError> {
        ensure_matching_id(id, placeholder.id)?;
        if !self.placeholders.exists(id).await? {
            return Err(DomainError::NotFound {
                resource: "placeholder",
                id,
            });
        }
        let saved = self.placeholders.update(&placeholder).await?;
        self.changes
            .notify(EntityChange::PlaceholderSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn patch_placeholder(
        &self,
        id: i64,
        patch: PlaceholderPatch,
    ) -> Result<Placeholder, DomainError> {
        ensure_matching_id(id, patch.id)?;
        let mut placeholder = self.get_placeholder(id).await?;
        if let Some(v) = patch.token {
            placeholder.token = v;
        }
        let saved = self.placeholders.update(&placeholder).await?;
        self.changes
            .notify(EntityChange::PlaceholderSaved(saved.clone()));
        Ok(saved)
    }

    pub async fn delete_placeholder(&self, id: i64) -> Result<(), DomainError> {
        if self.placeholders.delete(id).await? {
            self.changes.notify(EntityChange::PlaceholderDeleted(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_preset_id() {
        let err = ensure_no_id(Some(7), "dealer").unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(ensure_no_id(None, "dealer").is_ok());
    }

    #[test]
    fn update_requires_matching_body_id() {
        assert!(ensure_matching_id(3, Some(3)).is_ok());
        assert!(matches!(
            ensure_matching_id(3, None),
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            ensure_matching_id(3, Some(4)),
            Err(DomainError::Validation { .. })
        ));
    }
}
