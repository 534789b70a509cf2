//! Per-entity filter criteria assembled from raw query pairs
//!
//! Parameter names use the wire-level camelCase field names. Parameters
//! without a recognized operator suffix (including `page`/`size`/`sort`)
//! and unknown field names are ignored.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::filter::{split_param, BooleanFilter, RangeFilter, StringFilter};

#[derive(Debug, Clone, Default)]
pub struct DealerCriteria {
    pub id: RangeFilter<i64>,
    pub dealer_name: StringFilter,
    pub dealer_type: StringFilter,
}

impl DealerCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "dealerName" => c.dealer_name.absorb(op, value),
                "dealerType" => c.dealer_type.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoneyMarketDealCriteria {
    pub id: RangeFilter<i64>,
    pub deal_number: StringFilter,
    pub trade_date: RangeFilter<NaiveDate>,
    pub settlement_date: RangeFilter<NaiveDate>,
    pub maturity_date: RangeFilter<NaiveDate>,
    pub principal_amount: RangeFilter<Decimal>,
    pub interest_rate: RangeFilter<Decimal>,
    pub currency: StringFilter,
    pub counterparty: StringFilter,
    pub active: BooleanFilter,
    pub list_id: RangeFilter<i64>,
}

impl MoneyMarketDealCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "dealNumber" => c.deal_number.absorb(op, value),
                "tradeDate" => c.trade_date.absorb(op, value),
                "settlementDate" => c.settlement_date.absorb(op, value),
                "maturityDate" => c.maturity_date.absorb(op, value),
                "principalAmount" => c.principal_amount.absorb(op, value),
                "interestRate" => c.interest_rate.absorb(op, value),
                "currency" => c.currency.absorb(op, value),
                "counterparty" => c.counterparty.absorb(op, value),
                "active" => c.active.absorb(op, value),
                "listId" => c.list_id.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoneyMarketListCriteria {
    pub id: RangeFilter<i64>,
    pub report_date: RangeFilter<NaiveDate>,
    pub upload_timestamp: RangeFilter<DateTime<Utc>>,
    pub status: StringFilter,
    pub description: StringFilter,
}

impl MoneyMarketListCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "reportDate" => c.report_date.absorb(op, value),
                "uploadTimestamp" => c.upload_timestamp.absorb(op, value),
                "status" => c.status.absorb(op, value),
                "description" => c.description.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoneyMarketUploadNotificationCriteria {
    pub id: RangeFilter<i64>,
    pub upload_timestamp: RangeFilter<DateTime<Utc>>,
    pub file_name: StringFilter,
    pub record_count: RangeFilter<i32>,
    pub error_message: StringFilter,
    pub list_id: RangeFilter<i64>,
}

impl MoneyMarketUploadNotificationCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "uploadTimestamp" => c.upload_timestamp.absorb(op, value),
                "fileName" => c.file_name.absorb(op, value),
                "recordCount" => c.record_count.absorb(op, value),
                "errorMessage" => c.error_message.absorb(op, value),
                "listId" => c.list_id.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct FiscalYearCriteria {
    pub id: RangeFilter<i64>,
    pub year: RangeFilter<i32>,
    pub start_date: RangeFilter<NaiveDate>,
    pub end_date: RangeFilter<NaiveDate>,
}

impl FiscalYearCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "year" => c.year.absorb(op, value),
                "startDate" => c.start_date.absorb(op, value),
                "endDate" => c.end_date.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct FiscalQuarterCriteria {
    pub id: RangeFilter<i64>,
    pub quarter_number: RangeFilter<i32>,
    pub start_date: RangeFilter<NaiveDate>,
    pub end_date: RangeFilter<NaiveDate>,
    pub fiscal_year_id: RangeFilter<i64>,
}

impl FiscalQuarterCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "quarterNumber" => c.quarter_number.absorb(op, value),
                "startDate" => c.start_date.absorb(op, value),
                "endDate" => c.end_date.absorb(op, value),
                "fiscalYearId" => c.fiscal_year_id.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct FiscalMonthCriteria {
    pub id: RangeFilter<i64>,
    pub month_number: RangeFilter<i32>,
    pub start_date: RangeFilter<NaiveDate>,
    pub end_date: RangeFilter<NaiveDate>,
    pub fiscal_quarter_id: RangeFilter<i64>,
}

impl FiscalMonthCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "monthNumber" => c.month_number.absorb(op, value),
                "startDate" => c.start_date.absorb(op, value),
                "endDate" => c.end_date.absorb(op, value),
                "fiscalQuarterId" => c.fiscal_quarter_id.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportBatchCriteria {
    pub id: RangeFilter<i64>,
    pub upload_timestamp: RangeFilter<DateTime<Utc>>,
    pub status: StringFilter,
    pub checksum: StringFilter,
    pub uploaded_by: RangeFilter<Uuid>,
}

impl ReportBatchCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "uploadTimestamp" => c.upload_timestamp.absorb(op, value),
                "status" => c.status.absorb(op, value),
                "checksum" => c.checksum.absorb(op, value),
                "uploadedBy" => c.uploaded_by.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaceholderCriteria {
    pub id: RangeFilter<i64>,
    pub token: StringFilter,
}

impl PlaceholderCriteria {
    pub fn from_params(pairs: &[(String, String)]) -> Self {
        let mut c = Self::default();
        for (key, value) in pairs {
            let Some((field, op)) = split_param(key) else {
                continue;
            };
            match field {
                "id" => c.id.absorb(op, value),
                "token" => c.token.absorb(op, value),
                _ => {}
            }
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn dealer_criteria_picks_up_known_fields() {
        let c = DealerCriteria::from_params(&pairs(&[
            ("dealerName.equals", "AAAAAAAAAA"),
            ("dealerType.contains", "BANK"),
            ("id.greaterThan", "5"),
            ("page", "0"),
            ("unknownField.equals", "x"),
        ]));
        assert_eq!(c.dealer_name.equals.as_deref(), Some("AAAAAAAAAA"));
        assert_eq!(c.dealer_type.contains.as_deref(), Some("BANK"));
        assert_eq!(c.id.greater_than, Some(5));
    }

    #[test]
    fn deal_criteria_parses_dates_and_decimals() {
        let c = MoneyMarketDealCriteria::from_params(&pairs(&[
            ("settlementDate.greaterThanOrEqual", "2026-01-01"),
            ("principalAmount.lessThan", "1000000.50"),
            ("active.equals", "true"),
        ]));
        assert_eq!(
            c.settlement_date.greater_than_or_equal,
            Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        );
        assert_eq!(
            c.principal_amount.less_than,
            Some("1000000.50".parse().unwrap())
        );
        assert_eq!(c.active.equals, Some(true));
    }
}
