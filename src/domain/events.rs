//! Change events feeding the search mirror
//!
//! Every successful write to the primary store produces one `EntityChange`.
//! The notifier hands events off without blocking the request path; the
//! mirror applies them on its own task, so index visibility is eventual.
//! Events are idempotent replacements keyed by id, safe under at-least-once
//! delivery.

use crate::contract::*;

/// A committed change to the primary store
#[derive(Debug, Clone)]
pub enum EntityChange {
    DealerSaved(Dealer),
    DealerDeleted(i64),
    DealSaved(MoneyMarketDeal),
    DealDeleted(i64),
    ListSaved(MoneyMarketList),
    ListDeleted(i64),
    UploadNotificationSaved(MoneyMarketUploadNotification),
    UploadNotificationDeleted(i64),
    FiscalYearSaved(FiscalYear),
    FiscalYearDeleted(i64),
    FiscalQuarterSaved(FiscalQuarter),
    FiscalQuarterDeleted(i64),
    FiscalMonthSaved(FiscalMonth),
    FiscalMonthDeleted(i64),
    ReportBatchSaved(ReportBatch),
    ReportBatchDeleted(i64),
    PlaceholderSaved(Placeholder),
    PlaceholderDeleted(i64),
}

/// Seam between the domain service and the search mirror
pub trait ChangeNotifier: Send + Sync {
    /// Hand off a committed change; must not block
    fn notify(&self, change: EntityChange);
}

/// Notifier that drops all events, for tests and mirror-less deployments
pub struct NoOpChangeNotifier;

impl ChangeNotifier for NoOpChangeNotifier {
    fn notify(&self, _change: EntityChange) {}
}
