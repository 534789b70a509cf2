//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models. Generated ids
//! map to `NotSet` on insert so the database assigns them.

use anyhow::anyhow;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::contract::*;

use super::entity;

fn id_value(id: Option<i64>) -> sea_orm::ActiveValue<i64> {
    match id {
        Some(id) => Set(id),
        None => NotSet,
    }
}

fn parse_status(raw: &str) -> anyhow::Result<BatchStatus> {
    BatchStatus::parse(raw).ok_or_else(|| anyhow!("unknown batch status in store: {raw}"))
}

// ===== Dealer =====

impl From<entity::dealer::Model> for Dealer {
    fn from(m: entity::dealer::Model) -> Self {
        Self {
            id: Some(m.id),
            dealer_name: m.dealer_name,
            dealer_type: m.dealer_type,
        }
    }
}

impl From<&Dealer> for entity::dealer::ActiveModel {
    fn from(model: &Dealer) -> Self {
        Self {
            id: id_value(model.id),
            dealer_name: Set(model.dealer_name.clone()),
            dealer_type: Set(model.dealer_type.clone()),
        }
    }
}

// ===== MoneyMarketDeal =====
//
// Placeholders live in a join table; the repository attaches them after
// reading the row, so the row-level conversion takes them as an argument.

impl entity::deal::Model {
    pub fn into_deal(self, placeholders: Vec<Placeholder>) -> MoneyMarketDeal {
        MoneyMarketDeal {
            id: Some(self.id),
            deal_number: self.deal_number,
            trade_date: self.trade_date,
            settlement_date: self.settlement_date,
            maturity_date: self.maturity_date,
            principal_amount: self.principal_amount,
            interest_rate: self.interest_rate,
            currency: self.currency,
            counterparty: self.counterparty,
            active: self.active,
            list_id: self.list_id,
            placeholders,
        }
    }
}

impl From<&MoneyMarketDeal> for entity::deal::ActiveModel {
    fn from(model: &MoneyMarketDeal) -> Self {
        Self {
            id: id_value(model.id),
            deal_number: Set(model.deal_number.clone()),
            trade_date: Set(model.trade_date),
            settlement_date: Set(model.settlement_date),
            maturity_date: Set(model.maturity_date),
            principal_amount: Set(model.principal_amount),
            interest_rate: Set(model.interest_rate),
            currency: Set(model.currency.clone()),
            counterparty: Set(model.counterparty.clone()),
            active: Set(model.active),
            list_id: Set(model.list_id),
        }
    }
}

// ===== MoneyMarketList =====

impl TryFrom<entity::list::Model> for MoneyMarketList {
    type Error = anyhow::Error;

    fn try_from(m: entity::list::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(m.id),
            report_date: m.report_date,
            upload_timestamp: m.upload_timestamp,
            status: parse_status(&m.status)?,
            description: m.description,
        })
    }
}

impl From<&MoneyMarketList> for entity::list::ActiveModel {
    fn from(model: &MoneyMarketList) -> Self {
        Self {
            id: id_value(model.id),
            report_date: Set(model.report_date),
            upload_timestamp: Set(model.upload_timestamp),
            status: Set(model.status.as_str().to_string()),
            description: Set(model.description.clone()),
        }
    }
}

// ===== MoneyMarketUploadNotification =====

impl From<entity::upload_notification::Model> for MoneyMarketUploadNotification {
    fn from(m: entity::upload_notification::Model) -> Self {
        Self {
            id: Some(m.id),
            upload_timestamp: m.upload_timestamp,
            file_name: m.file_name,
            record_count: m.record_count,
            error_message: m.error_message,
            list_id: m.list_id,
        }
    }
}

impl From<&MoneyMarketUploadNotification> for entity::upload_notification::ActiveModel {
    fn from(model: &MoneyMarketUploadNotification) -> Self {
        Self {
            id: id_value(model.id),
            upload_timestamp: Set(model.upload_timestamp),
            file_name: Set(model.file_name.clone()),
            record_count: Set(model.record_count),
            error_message: Set(model.error_message.clone()),
            list_id: Set(model.list_id),
        }
    }
}

// ===== Fiscal calendar =====

impl From<entity::fiscal_year::Model> for FiscalYear {
    fn from(m: entity::fiscal_year::Model) -> Self {
        Self {
            id: Some(m.id),
            year: m.year,
            start_date: m.start_date,
            end_date: m.end_date,
        }
    }
}

impl From<&FiscalYear> for entity::fiscal_year::ActiveModel {
    fn from(model: &FiscalYear) -> Self {
        Self {
            id: id_value(model.id),
            year: Set(model.year),
            start_date: Set(model.start_date),
            end_date: Set(model.end_date),
        }
    }
}

impl From<entity::fiscal_quarter::Model> for FiscalQuarter {
    fn from(m: entity::fiscal_quarter::Model) -> Self {
        Self {
            id: Some(m.id),
            quarter_number: m.quarter_number,
            start_date: m.start_date,
            end_date: m.end_date,
            fiscal_year_id: m.fiscal_year_id,
        }
    }
}

impl From<&FiscalQuarter> for entity::fiscal_quarter::ActiveModel {
    fn from(model: &FiscalQuarter) -> Self {
        Self {
            id: id_value(model.id),
            quarter_number: Set(model.quarter_number),
            start_date: Set(model.start_date),
            end_date: Set(model.end_date),
            fiscal_year_id: Set(model.fiscal_year_id),
        }
    }
}

impl From<entity::fiscal_month::Model> for FiscalMonth {
    fn from(m: entity::fiscal_month::Model) -> Self {
        Self {
            id: Some(m.id),
            month_number: m.month_number,
            start_date: m.start_date,
            end_date: m.end_date,
            fiscal_quarter_id: m.fiscal_quarter_id,
        }
    }
}

impl From<&FiscalMonth> for entity::fiscal_month::ActiveModel {
    fn from(model: &FiscalMonth) -> Self {
        Self {
            id: id_value(model.id),
            month_number: Set(model.month_number),
            start_date: Set(model.start_date),
            end_date: Set(model.end_date),
            fiscal_quarter_id: Set(model.fiscal_quarter_id),
        }
    }
}

// ===== ReportBatch =====

impl TryFrom<entity::report_batch::Model> for ReportBatch {
    type Error = anyhow::Error;

    fn try_from(m: entity::report_batch::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(m.id),
            upload_timestamp: m.upload_timestamp,
            status: parse_status(&m.status)?,
            checksum: m.checksum,
            uploaded_by: m.uploaded_by,
        })
    }
}

impl From<&ReportBatch> for entity::report_batch::ActiveModel {
    fn from(model: &ReportBatch) -> Self {
        Self {
            id: id_value(model.id),
            upload_timestamp: Set(model.upload_timestamp),
            status: Set(model.status.as_str().to_string()),
            checksum: Set(model.checksum.clone()),
            uploaded_by: Set(model.uploaded_by),
        }
    }
}

// ===== Placeholder =====

impl From<entity::placeholder::Model> for Placeholder {
    fn from(m: entity::placeholder::Model) -> Self {
        Self {
            id: Some(m.id),
            token: m.token,
        }
    }
}

impl From<&Placeholder> for entity::placeholder::ActiveModel {
    fn from(model: &Placeholder) -> Self {
        Self {
            id: id_value(model.id),
            token: Set(model.token.clone()),
        }
    }
}
