//! REST DTOs with serde derives for HTTP API
//!
//! Wire field names are camelCase. Required fields are `Option` here so a
//! missing field surfaces as a 400 validation problem from the mapper
//! instead of a deserialization failure.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Distinguishes an absent patch field from an explicit `null`: absent
/// leaves the field alone, `null` clears it.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ===== Dealer =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub dealer_name: Option<String>,
    pub dealer_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerPatchDto {
    pub id: Option<i64>,
    pub dealer_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub dealer_type: Option<Option<String>>,
}

// ===== MoneyMarketDeal =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketDealDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub deal_number: Option<String>,
    pub trade_date: Option<NaiveDate>,
    pub settlement_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    pub principal_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub currency: Option<String>,
    pub counterparty: Option<String>,
    pub active: Option<bool>,
    pub list_id: Option<i64>,
    /// Attached placeholder tags, referenced by id
    #[serde(default)]
    pub placeholders: Option<Vec<PlaceholderDto>>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketDealPatchDto {
    pub id: Option<i64>,
    pub deal_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub trade_date: Option<Option<NaiveDate>>,
    pub settlement_date: Option<NaiveDate>,
    pub maturity_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub principal_amount: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub interest_rate: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "double_option")]
    pub currency: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub counterparty: Option<Option<String>>,
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub list_id: Option<Option<i64>>,
    pub placeholders: Option<Vec<PlaceholderDto>>,
}

// ===== MoneyMarketList =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketListDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub report_date: Option<NaiveDate>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    /// One of PENDING, PROCESSED, FAILED
    #[schema(example = "PENDING")]
    pub status: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketListPatchDto {
    pub id: Option<i64>,
    pub report_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub upload_timestamp: Option<Option<DateTime<Utc>>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

// ===== MoneyMarketUploadNotification =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketUploadNotificationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    pub file_name: Option<String>,
    pub record_count: Option<i32>,
    pub error_message: Option<String>,
    pub list_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMarketUploadNotificationPatchDto {
    pub id: Option<i64>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub file_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub record_count: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub error_message: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub list_id: Option<Option<i64>>,
}

// ===== Fiscal calendar =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYearDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub year: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiscalYearPatchDto {
    pub id: Option<i64>,
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiscalQuarterDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub quarter_number: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub fiscal_year_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiscalQuarterPatchDto {
    pub id: Option<i64>,
    pub quarter_number: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub fiscal_year_id: Option<Option<i64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiscalMonthDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub month_number: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub fiscal_quarter_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FiscalMonthPatchDto {
    pub id: Option<i64>,
    pub month_number: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub fiscal_quarter_id: Option<Option<i64>>,
}

// ===== ReportBatch =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportBatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    /// One of PENDING, PROCESSED, FAILED
    #[schema(example = "PROCESSED")]
    pub status: Option<String>,
    pub checksum: Option<String>,
    pub uploaded_by: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportBatchPatchDto {
    pub id: Option<i64>,
    pub upload_timestamp: Option<DateTime<Utc>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub checksum: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub uploaded_by: Option<Option<Uuid>>,
}

// ===== Placeholder =====

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderPatchDto {
    pub id: Option<i64>,
    pub token: Option<String>,
}

// ===== Search =====

/// Query parameters for the `_search` endpoints
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuery {
    /// `*` matches everything; anything else is a substring query
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let patch: DealerPatchDto = serde_json::from_str(r#"{"dealerName":"X"}"#).unwrap();
        assert_eq!(patch.dealer_name.as_deref(), Some("X"));
        assert!(patch.dealer_type.is_none());

        let patch: DealerPatchDto = serde_json::from_str(r#"{"dealerType":null}"#).unwrap();
        assert!(patch.dealer_name.is_none());
        assert_eq!(patch.dealer_type, Some(None));

        let patch: DealerPatchDto = serde_json::from_str(r#"{"dealerType":"BROKER"}"#).unwrap();
        assert_eq!(patch.dealer_type, Some(Some("BROKER".to_string())));
    }

    #[test]
    fn deal_dto_accepts_minimal_body() {
        let dto: MoneyMarketDealDto = serde_json::from_str(
            r#"{"dealNumber":"MMD-1","settlementDate":"2026-01-02","maturityDate":"2026-04-02","active":true}"#,
        )
        .unwrap();
        assert_eq!(dto.deal_number.as_deref(), Some("MMD-1"));
        assert!(dto.placeholders.is_none());
    }
}
