//! Contract models for the money market service
//!
//! These models are transport-agnostic and shared between the REST layer,
//! the domain service, and the storage/search backends. NO serde derives -
//! wire formats live in the DTO layer.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Processing status shared by lists, batches, and notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Pending,
    Processed,
    Failed,
}

impl BatchStatus {
    /// Stable string form stored in the database and exposed on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processed => "PROCESSED",
            Self::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "PROCESSED" => Some(Self::Processed),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Counterparty dealer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    /// Generated identifier, absent until first insert
    pub id: Option<i64>,
    pub dealer_name: String,
    pub dealer_type: Option<String>,
}

/// A single money market deal
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyMarketDeal {
    pub id: Option<i64>,
    pub deal_number: String,
    pub trade_date: Option<NaiveDate>,
    pub settlement_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub principal_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub currency: Option<String>,
    pub counterparty: Option<String>,
    pub active: bool,
    /// Parent upload batch
    pub list_id: Option<i64>,
    /// Attached placeholder tags (many-to-many)
    pub placeholders: Vec<Placeholder>,
}

/// An uploaded batch of deals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyMarketList {
    pub id: Option<i64>,
    pub report_date: NaiveDate,
    pub upload_timestamp: Option<DateTime<Utc>>,
    pub status: BatchStatus,
    pub description: Option<String>,
}

/// Signal emitted when a list upload finishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyMarketUploadNotification {
    pub id: Option<i64>,
    pub upload_timestamp: DateTime<Utc>,
    pub file_name: Option<String>,
    pub record_count: Option<i32>,
    pub error_message: Option<String>,
    pub list_id: Option<i64>,
}

/// Fiscal calendar year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalYear {
    pub id: Option<i64>,
    pub year: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Fiscal calendar quarter, belongs to a year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalQuarter {
    pub id: Option<i64>,
    pub quarter_number: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub fiscal_year_id: Option<i64>,
}

/// Fiscal calendar month, belongs to a quarter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalMonth {
    pub id: Option<i64>,
    pub month_number: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub fiscal_quarter_id: Option<i64>,
}

/// Report generation batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBatch {
    pub id: Option<i64>,
    pub upload_timestamp: DateTime<Utc>,
    pub status: BatchStatus,
    pub checksum: Option<String>,
    /// Uploading user reference; user management is out of scope here
    pub uploaded_by: Option<Uuid>,
}

/// Generic tag attachable to deals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub id: Option<i64>,
    pub token: String,
}

// ===== Merge-patch structs =====
//
// One per entity; `None` means "leave the stored value unchanged". Fields
// that are themselves optional use a double Option so a patch can clear them.

#[derive(Debug, Clone, Default)]
pub struct DealerPatch {
    pub id: Option<i64>,
    pub dealer_name: Option<String>,
    pub dealer_type: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct MoneyMarketDealPatch {
    pub id: Option<i64>,
    pub deal_number: Option<String>,
    pub trade_date: Option<Option<NaiveDate>>,
    pub settlement_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub principal_amount: Option<Option<Decimal>>,
    pub interest_rate: Option<Option<Decimal>>,
    pub currency: Option<Option<String>>,
    pub counterparty: Option<Option<String>>,
    pub active: Option<bool>,
    pub list_id: Option<Option<i64>>,
    pub placeholders: Option<Vec<Placeholder>>,
}

#[derive(Debug, Clone, Default)]
pub struct MoneyMarketListPatch {
    pub id: Option<i64>,
    pub report_date: Option<NaiveDate>,
    pub upload_timestamp: Option<Option<DateTime<Utc>>>,
    pub status: Option<BatchStatus>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct MoneyMarketUploadNotificationPatch {
    pub id: Option<i64>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    pub file_name: Option<Option<String>>,
    pub record_count: Option<Option<i32>>,
    pub error_message: Option<Option<String>>,
    pub list_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, Default)]
pub struct FiscalYearPatch {
    pub id: Option<i64>,
    pub year: Option<i32>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Default)]
pub struct FiscalQuarterPatch {
    pub id: Option<i64>,
    pub quarter_number: Option<i32>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub fiscal_year_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, Default)]
pub struct FiscalMonthPatch {
    pub id: Option<i64>,
    pub month_number: Option<i32>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub fiscal_quarter_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, Default)]
pub struct ReportBatchPatch {
    pub id: Option<i64>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    pub status: Option<BatchStatus>,
    pub checksum: Option<Option<String>>,
    pub uploaded_by: Option<Option<Uuid>>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaceholderPatch {
    pub id: Option<i64>,
    pub token: Option<String>,
}
