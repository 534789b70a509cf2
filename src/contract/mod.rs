//! Contract layer: domain models and errors shared across transports

pub mod error;
pub mod model;

pub use error::DomainError;
pub use model::{
    BatchStatus, Dealer, DealerPatch, FiscalMonth, FiscalMonthPatch, FiscalQuarter,
    FiscalQuarterPatch, FiscalYear, FiscalYearPatch, MoneyMarketDeal, MoneyMarketDealPatch,
    MoneyMarketList, MoneyMarketListPatch, MoneyMarketUploadNotification,
    MoneyMarketUploadNotificationPatch, Placeholder, PlaceholderPatch, ReportBatch,
    ReportBatchPatch,
};
