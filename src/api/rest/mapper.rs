//! Conversions between REST DTOs and contract models
//!
//! DTO-to-model conversions validate required fields and enum values so
//! bad bodies come back as 400 validation problems.

use crate::contract::*;

use super::dto::*;

fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::validation(format!("{field} is required")))
}

fn parse_status(raw: &str) -> Result<BatchStatus, DomainError> {
    BatchStatus::parse(raw).ok_or_else(|| {
        DomainError::validation(format!(
            "status '{raw}' is not one of PENDING, PROCESSED, FAILED"
        ))
    })
}

/// Placeholders attached to a deal are references; only the id has to be
/// present, tokens are re-read from the store.
fn placeholder_refs(dtos: Option<Vec<PlaceholderDto>>) -> Vec<Placeholder> {
    dtos.unwrap_or_default()
        .into_iter()
        .map(|p| Placeholder {
            id: p.id,
            token: p.token.unwrap_or_default(),
        })
        .collect()
}

// ===== Dealer =====

impl TryFrom<DealerDto> for Dealer {
    type Error = DomainError;

    fn try_from(dto: DealerDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            dealer_name: required(dto.dealer_name, "dealerName")?,
            dealer_type: dto.dealer_type,
        })
    }
}

impl From<Dealer> for DealerDto {
    fn from(dealer: Dealer) -> Self {
        Self {
            id: dealer.id,
            dealer_name: Some(dealer.dealer_name),
            dealer_type: dealer.dealer_type,
        }
    }
}

impl From<DealerPatchDto> for DealerPatch {
    fn from(dto: DealerPatchDto) -> Self {
        Self {
            id: dto.id,
            dealer_name: dto.dealer_name,
            dealer_type: dto.dealer_type,
        }
    }
}

// ===== MoneyMarketDeal =====

impl TryFrom<MoneyMarketDealDto> for MoneyMarketDeal {
    type Error = DomainError;

    fn try_from(dto: MoneyMarketDealDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            deal_number: required(dto.deal_number, "dealNumber")?,
            trade_date: dto.trade_date,
            settlement_date: required(dto.settlement_date, "settlementDate")?,
            maturity_date: required(dto.maturity_date, "maturityDate")?,
            principal_amount: dto.principal_amount,
            interest_rate: dto.interest_rate,
            currency: dto.currency,
            counterparty: dto.counterparty,
            active: required(dto.active, "active")?,
            list_id: dto.list_id,
            placeholders: placeholder_refs(dto.placeholders),
        })
    }
}

impl From<MoneyMarketDeal> for MoneyMarketDealDto {
    fn from(deal: MoneyMarketDeal) -> Self {
        Self {
            id: deal.id,
            deal_number: Some(deal.deal_number),
            trade_date: deal.trade_date,
            settlement_date: Some(deal.settlement_date),
            maturity_date: Some(deal.maturity_date),
            principal_amount: deal.principal_amount,
            interest_rate: deal.interest_rate,
            currency: deal.currency,
            counterparty: deal.counterparty,
            active: Some(deal.active),
            list_id: deal.list_id,
            placeholders: Some(deal.placeholders.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<MoneyMarketDealPatchDto> for MoneyMarketDealPatch {
    fn from(dto: MoneyMarketDealPatchDto) -> Self {
        Self {
            id: dto.id,
            deal_number: dto.deal_number,
            trade_date: dto.trade_date,
            settlement_date: dto.settlement_date,
            maturity_date: dto.maturity_date,
            principal_amount: dto.principal_amount,
            interest_rate: dto.interest_rate,
            currency: dto.currency,
            counterparty: dto.counterparty,
            active: dto.active,
            list_id: dto.list_id,
            placeholders: dto.placeholders.map(placeholder_refs_from),
        }
    }
}

fn placeholder_refs_from(dtos: Vec<PlaceholderDto>) -> Vec<Placeholder> {
    placeholder_refs(Some(dtos))
}

// ===== MoneyMarketList =====

impl TryFrom<MoneyMarketListDto> for MoneyMarketList {
    type Error = DomainError;

    fn try_from(dto: MoneyMarketListDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            report_date: required(dto.report_date, "reportDate")?,
            upload_timestamp: dto.upload_timestamp,
            status: parse_status(&required(dto.status, "status")?)?,
            description: dto.description,
        })
    }
}

impl From<MoneyMarketList> for MoneyMarketListDto {
    fn from(list: MoneyMarketList) -> Self {
        Self {
            id: list.id,
            report_date: Some(list.report_date),
            upload_timestamp: list.upload_timestamp,
            status: Some(list.status.as_str().to_string()),
            description: list.description,
        }
    }
}

impl TryFrom<MoneyMarketListPatchDto> for MoneyMarketListPatch {
    type Error = DomainError;

    fn try_from(dto: MoneyMarketListPatchDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            report_date: dto.report_date,
            upload_timestamp: dto.upload_timestamp,
            status: dto.status.as_deref().map(parse_status).transpose()?,
            description: dto.description,
        })
    }
}

// ===== MoneyMarketUploadNotification =====

impl TryFrom<MoneyMarketUploadNotificationDto> for MoneyMarketUploadNotification {
    type Error = DomainError;

    fn try_from(dto: MoneyMarketUploadNotificationDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            upload_timestamp: required(dto.upload_timestamp, "uploadTimestamp")?,
            file_name: dto.file_name,
            record_count: dto.record_count,
            error_message: dto.error_message,
            list_id: dto.list_id,
        })
    }
}

impl From<MoneyMarketUploadNotification> for MoneyMarketUploadNotificationDto {
    fn from(notification: MoneyMarketUploadNotification) -> Self {
        Self {
            id: notification.id,
            upload_timestamp: Some(notification.upload_timestamp),
            file_name: notification.file_name,
            record_count: notification.record_count,
            error_message: notification.error_message,
            list_id: notification.list_id,
        }
    }
}

impl From<MoneyMarketUploadNotificationPatchDto> for MoneyMarketUploadNotificationPatch {
    fn from(dto: MoneyMarketUploadNotificationPatchDto) -> Self {
        Self {
            id: dto.id,
            upload_timestamp: dto.upload_timestamp,
            file_name: dto.file_name,
            record_count: dto.record_count,
            error_message: dto.error_message,
            list_id: dto.list_id,
        }
    }
}

// ===== Fiscal calendar =====

impl TryFrom<FiscalYearDto> for FiscalYear {
    type Error = DomainError;

    fn try_from(dto: FiscalYearDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            year: required(dto.year, "year")?,
            start_date: dto.start_date,
            end_date: dto.end_date,
        })
    }
}

impl From<FiscalYear> for FiscalYearDto {
    fn from(year: FiscalYear) -> Self {
        Self {
            id: year.id,
            year: Some(year.year),
            start_date: year.start_date,
            end_date: year.end_date,
        }
    }
}

impl From<FiscalYearPatchDto> for FiscalYearPatch {
    fn from(dto: FiscalYearPatchDto) -> Self {
        Self {
            id: dto.id,
            year: dto.year,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

impl TryFrom<FiscalQuarterDto> for FiscalQuarter {
    type Error = DomainError;

    fn try_from(dto: FiscalQuarterDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            quarter_number: required(dto.quarter_number, "quarterNumber")?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            fiscal_year_id: dto.fiscal_year_id,
        })
    }
}

impl From<FiscalQuarter> for FiscalQuarterDto {
    fn from(quarter: FiscalQuarter) -> Self {
        Self {
            id: quarter.id,
            quarter_number: Some(quarter.quarter_number),
            start_date: quarter.start_date,
            end_date: quarter.end_date,
            fiscal_year_id: quarter.fiscal_year_id,
        }
    }
}

impl From<FiscalQuarterPatchDto> for FiscalQuarterPatch {
    fn from(dto: FiscalQuarterPatchDto) -> Self {
        Self {
            id: dto.id,
            quarter_number: dto.quarter_number,
            start_date: dto.start_date,
            end_date: dto.end_date,
            fiscal_year_id: dto.fiscal_year_id,
        }
    }
}

impl TryFrom<FiscalMonthDto> for FiscalMonth {
    type Error = DomainError;

    fn try_from(dto: FiscalMonthDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            month_number: required(dto.month_number, "monthNumber")?,
            start_date: dto.start_date,
            end_date: dto.end_date,
            fiscal_quarter_id: dto.fiscal_quarter_id,
        })
    }
}

impl From<FiscalMonth> for FiscalMonthDto {
    fn from(month: FiscalMonth) -> Self {
        Self {
            id: month.id,
            month_number: Some(month.month_number),
            start_date: month.start_date,
            end_date: month.end_date,
            fiscal_quarter_id: month.fiscal_quarter_id,
        }
    }
}

impl From<FiscalMonthPatchDto> for FiscalMonthPatch {
    fn from(dto: FiscalMonthPatchDto) -> Self {
        Self {
            id: dto.id,
            month_number: dto.month_number,
            start_date: dto.start_date,
            end_date: dto.end_date,
            fiscal_quarter_id: dto.fiscal_quarter_id,
        }
    }
}

// ===== ReportBatch =====

impl TryFrom<ReportBatchDto> for ReportBatch {
    type Error = DomainError;

    fn try_from(dto: ReportBatchDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            upload_timestamp: required(dto.upload_timestamp, "uploadTimestamp")?,
            status: parse_status(&required(dto.status, "status")?)?,
            checksum: dto.checksum,
            uploaded_by: dto.uploaded_by,
        })
    }
}

impl From<ReportBatch> for ReportBatchDto {
    fn from(batch: ReportBatch) -> Self {
        Self {
            id: batch.id,
            upload_timestamp: Some(batch.upload_timestamp),
            status: Some(batch.status.as_str().to_string()),
            checksum: batch.checksum,
            uploaded_by: batch.uploaded_by,
        }
    }
}

impl TryFrom<ReportBatchPatchDto> for ReportBatchPatch {
    type Error = DomainError;

    fn try_from(dto: ReportBatchPatchDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            upload_timestamp: dto.upload_timestamp,
            status: dto.status.as_deref().map(parse_status).transpose()?,
            checksum: dto.checksum,
            uploaded_by: dto.uploaded_by,
        })
    }
}

// ===== Placeholder =====

impl TryFrom<PlaceholderDto> for Placeholder {
    type Error = DomainError;

    fn try_from(dto: PlaceholderDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            token: required(dto.token, "token")?,
        })
    }
}

impl From<Placeholder> for PlaceholderDto {
    fn from(placeholder: Placeholder) -> Self {
        Self {
            id: placeholder.id,
            token: Some(placeholder.token),
        }
    }
}

impl From<PlaceholderPatchDto> for PlaceholderPatch {
    fn from(dto: PlaceholderPatchDto) -> Self {
        Self {
            id: dto.id,
            token: dto.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_field_is_a_validation_error() {
        let dto = DealerDto {
            id: None,
            dealer_name: None,
            dealer_type: Some("BANK".to_string()),
        };
        let err = Dealer::try_from(dto).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn bad_status_is_a_validation_error() {
        let dto = MoneyMarketListDto {
            id: None,
            report_date: Some(chrono::NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()),
            upload_timestamp: None,
            status: Some("SHIPPED".to_string()),
            description: None,
        };
        assert!(matches!(
            MoneyMarketList::try_from(dto),
            Err(DomainError::Validation { .. })
        ));
    }
}
