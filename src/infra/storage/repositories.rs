//! SeaORM repository implementations
//!
//! Filters from the criteria structs are folded into a single `Condition`
//! per request; list and count share the same condition so their results
//! always agree.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait, Value,
};

use crate::contract::*;
use crate::domain::criteria::*;
use crate::domain::filter::{BooleanFilter, Page, RangeFilter, SortDirection, StringFilter};
use crate::domain::repository::*;

use super::entity;

// ===== Filter -> Condition translation =====

fn string_condition<C: ColumnTrait>(col: C, f: &StringFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(v) = &f.equals {
        cond = cond.add(col.eq(v.clone()));
    }
    if let Some(v) = &f.not_equals {
        cond = cond.add(col.ne(v.clone()));
    }
    if let Some(vs) = &f.r#in {
        cond = cond.add(col.is_in(vs.iter().cloned()));
    }
    if let Some(vs) = &f.not_in {
        cond = cond.add(col.is_not_in(vs.iter().cloned()));
    }
    if let Some(specified) = f.specified {
        cond = cond.add(if specified {
            col.is_not_null()
        } else {
            col.is_null()
        });
    }
    if let Some(v) = &f.contains {
        cond = cond.add(col.contains(v.as_str()));
    }
    if let Some(v) = &f.does_not_contain {
        cond = cond.add(col.not_like(format!("%{v}%")));
    }
    cond
}

fn range_condition<C, T>(col: C, f: &RangeFilter<T>) -> Condition
where
    C: ColumnTrait,
    T: Into<Value> + Clone,
{
    let mut cond = Condition::all();
    if let Some(v) = &f.equals {
        cond = cond.add(col.eq(v.clone()));
    }
    if let Some(v) = &f.not_equals {
        cond = cond.add(col.ne(v.clone()));
    }
    if let Some(vs) = &f.r#in {
        cond = cond.add(col.is_in(vs.iter().cloned()));
    }
    if let Some(vs) = &f.not_in {
        cond = cond.add(col.is_not_in(vs.iter().cloned()));
    }
    if let Some(specified) = f.specified {
        cond = cond.add(if specified {
            col.is_not_null()
        } else {
            col.is_null()
        });
    }
    if let Some(v) = &f.greater_than {
        cond = cond.add(col.gt(v.clone()));
    }
    if let Some(v) = &f.greater_than_or_equal {
        cond = cond.add(col.gte(v.clone()));
    }
    if let Some(v) = &f.less_than {
        cond = cond.add(col.lt(v.clone()));
    }
    if let Some(v) = &f.less_than_or_equal {
        cond = cond.add(col.lte(v.clone()));
    }
    cond
}

fn boolean_condition<C: ColumnTrait>(col: C, f: &BooleanFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(v) = f.equals {
        cond = cond.add(col.eq(v));
    }
    if let Some(v) = f.not_equals {
        cond = cond.add(col.ne(v));
    }
    if let Some(specified) = f.specified {
        cond = cond.add(if specified {
            col.is_not_null()
        } else {
            col.is_null()
        });
    }
    cond
}

fn order<E: EntityTrait>(
    query: sea_orm::Select<E>,
    col: impl ColumnTrait,
    direction: SortDirection,
) -> sea_orm::Select<E> {
    match direction {
        SortDirection::Asc => query.order_by_asc(col),
        SortDirection::Desc => query.order_by_desc(col),
    }
}

// ===== Dealer =====

pub struct SeaOrmDealerRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDealerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &DealerCriteria) -> Condition {
        use entity::dealer::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(string_condition(Column::DealerName, &criteria.dealer_name))
            .add(string_condition(Column::DealerType, &criteria.dealer_type))
    }

    fn sort_column(field: &str) -> entity::dealer::Column {
        use entity::dealer::Column;
        match field {
            "dealerName" => Column::DealerName,
            "dealerType" => Column::DealerType,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl DealerRepository for SeaOrmDealerRepository {
    async fn insert(&self, dealer: &Dealer) -> Result<Dealer> {
        let active: entity::dealer::ActiveModel = dealer.into();
        let saved = entity::dealer::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn update(&self, dealer: &Dealer) -> Result<Dealer> {
        let active: entity::dealer::ActiveModel = dealer.into();
        let saved = entity::dealer::Entity::update(active)
            .exec(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dealer>> {
        let row = entity::dealer::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(row.map(Into::into))
    }

    async fn list(&self, criteria: &DealerCriteria, page: &Page) -> Result<(Vec<Dealer>, u64)> {
        let query = entity::dealer::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn count(&self, criteria: &DealerCriteria) -> Result<u64> {
        Ok(entity::dealer::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::dealer::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::dealer::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}

// ===== MoneyMarketDeal =====

pub struct SeaOrmMoneyMarketDealRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMoneyMarketDealRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &MoneyMarketDealCriteria) -> Condition {
        use entity::deal::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(string_condition(Column::DealNumber, &criteria.deal_number))
            .add(range_condition(Column::TradeDate, &criteria.trade_date))
            .add(range_condition(
                Column::SettlementDate,
                &criteria.settlement_date,
            ))
            .add(range_condition(
                Column::MaturityDate,
                &criteria.maturity_date,
            ))
            .add(range_condition(
                Column::PrincipalAmount,
                &criteria.principal_amount,
            ))
            .add(range_condition(
                Column::InterestRate,
                &criteria.interest_rate,
            ))
            .add(string_condition(Column::Currency, &criteria.currency))
            .add(string_condition(
                Column::Counterparty,
                &criteria.counterparty,
            ))
            .add(boolean_condition(Column::Active, &criteria.active))
            .add(range_condition(Column::ListId, &criteria.list_id))
    }

    fn sort_column(field: &str) -> entity::deal::Column {
        use entity::deal::Column;
        match field {
            "dealNumber" => Column::DealNumber,
            "tradeDate" => Column::TradeDate,
            "settlementDate" => Column::SettlementDate,
            "maturityDate" => Column::MaturityDate,
            "principalAmount" => Column::PrincipalAmount,
            "interestRate" => Column::InterestRate,
            "currency" => Column::Currency,
            "counterparty" => Column::Counterparty,
            "active" => Column::Active,
            _ => Column::Id,
        }
    }

    /// Batch-load attached placeholders for a set of deal rows
    async fn attach_placeholders(
        &self,
        rows: Vec<entity::deal::Model>,
    ) -> Result<Vec<MoneyMarketDeal>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let deal_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let links = entity::deal_placeholder::Entity::find()
            .filter(entity::deal_placeholder::Column::DealId.is_in(deal_ids))
            .all(&*self.db)
            .await?;
        let placeholder_ids: Vec<i64> = links.iter().map(|l| l.placeholder_id).collect();
        let placeholders: HashMap<i64, Placeholder> = entity::placeholder::Entity::find()
            .filter(entity::placeholder::Column::Id.is_in(placeholder_ids))
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, Placeholder::from(p)))
            .collect();

        let mut attached: HashMap<i64, Vec<Placeholder>> = HashMap::new();
        for link in links {
            if let Some(p) = placeholders.get(&link.placeholder_id) {
                attached.entry(link.deal_id).or_default().push(p.clone());
            }
        }
        for set in attached.values_mut() {
            set.sort_by_key(|p| p.id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = row.id;
                row.into_deal(attached.remove(&id).unwrap_or_default())
            })
            .collect())
    }

    /// Replace the association set; placeholders without an id are skipped.
    /// Delete and re-insert run in one transaction so a failed insert does
    /// not strand the deal with no links.
    async fn replace_placeholders(&self, deal_id: i64, placeholders: &[Placeholder]) -> Result<()> {
        let txn = self.db.begin().await?;
        entity::deal_placeholder::Entity::delete_many()
            .filter(entity::deal_placeholder::Column::DealId.eq(deal_id))
            .exec(&txn)
            .await?;

        let links: Vec<entity::deal_placeholder::ActiveModel> = placeholders
            .iter()
            .filter_map(|p| p.id)
            .map(|placeholder_id| entity::deal_placeholder::ActiveModel {
                deal_id: sea_orm::ActiveValue::Set(deal_id),
                placeholder_id: sea_orm::ActiveValue::Set(placeholder_id),
            })
            .collect();
        if !links.is_empty() {
            entity::deal_placeholder::Entity::insert_many(links)
                .exec(&txn)
                .await?;
        }
        txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl MoneyMarketDealRepository for SeaOrmMoneyMarketDealRepository {
    async fn insert(&self, deal: &MoneyMarketDeal) -> Result<MoneyMarketDeal> {
        let active: entity::deal::ActiveModel = deal.into();
        let saved = entity::deal::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        self.replace_placeholders(saved.id, &deal.placeholders)
            .await?;
        let mut deals = self.attach_placeholders(vec![saved]).await?;
        Ok(deals.remove(0))
    }

    async fn update(&self, deal: &MoneyMarketDeal) -> Result<MoneyMarketDeal> {
        let active: entity::deal::ActiveModel = deal.into();
        let saved = entity::deal::Entity::update(active).exec(&*self.db).await?;
        self.replace_placeholders(saved.id, &deal.placeholders)
            .await?;
        let mut deals = self.attach_placeholders(vec![saved]).await?;
        Ok(deals.remove(0))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MoneyMarketDeal>> {
        let row = entity::deal::Entity::find_by_id(id).one(&*self.db).await?;
        match row {
            Some(row) => Ok(self.attach_placeholders(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        criteria: &MoneyMarketDealCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketDeal>, u64)> {
        let query = entity::deal::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((self.attach_placeholders(rows).await?, total))
    }

    async fn count(&self, criteria: &MoneyMarketDealCriteria) -> Result<u64> {
        Ok(entity::deal::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        entity::deal_placeholder::Entity::delete_many()
            .filter(entity::deal_placeholder::Column::DealId.eq(id))
            .exec(&*self.db)
            .await?;
        let res = entity::deal::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::deal::Entity::find_by_id(id).count(&*self.db).await?;
        Ok(count > 0)
    }
}

// ===== MoneyMarketList =====

pub struct SeaOrmMoneyMarketListRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMoneyMarketListRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &MoneyMarketListCriteria) -> Condition {
        use entity::list::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(range_condition(Column::ReportDate, &criteria.report_date))
            .add(range_condition(
                Column::UploadTimestamp,
                &criteria.upload_timestamp,
            ))
            .add(string_condition(Column::Status, &criteria.status))
            .add(string_condition(Column::Description, &criteria.description))
    }

    fn sort_column(field: &str) -> entity::list::Column {
        use entity::list::Column;
        match field {
            "reportDate" => Column::ReportDate,
            "uploadTimestamp" => Column::UploadTimestamp,
            "status" => Column::Status,
            "description" => Column::Description,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl MoneyMarketListRepository for SeaOrmMoneyMarketListRepository {
    async fn insert(&self, list: &MoneyMarketList) -> Result<MoneyMarketList> {
        let active: entity::list::ActiveModel = list.into();
        let saved = entity::list::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        saved.try_into()
    }

    async fn update(&self, list: &MoneyMarketList) -> Result<MoneyMarketList> {
        let active: entity::list::ActiveModel = list.into();
        let saved = entity::list::Entity::update(active).exec(&*self.db).await?;
        saved.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MoneyMarketList>> {
        let row = entity::list::Entity::find_by_id(id).one(&*self.db).await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn list(
        &self,
        criteria: &MoneyMarketListCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketList>, u64)> {
        let query = entity::list::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        let lists = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>>>()?;
        Ok((lists, total))
    }

    async fn count(&self, criteria: &MoneyMarketListCriteria) -> Result<u64> {
        Ok(entity::list::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::list::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::list::Entity::find_by_id(id).count(&*self.db).await?;
        Ok(count > 0)
    }
}

// ===== MoneyMarketUploadNotification =====

pub struct SeaOrmUploadNotificationRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUploadNotificationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &MoneyMarketUploadNotificationCriteria) -> Condition {
        use entity::upload_notification::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(range_condition(
                Column::UploadTimestamp,
                &criteria.upload_timestamp,
            ))
            .add(string_condition(Column::FileName, &criteria.file_name))
            .add(range_condition(Column::RecordCount, &criteria.record_count))
            .add(string_condition(
                Column::ErrorMessage,
                &criteria.error_message,
            ))
            .add(range_condition(Column::ListId, &criteria.list_id))
    }

    fn sort_column(field: &str) -> entity::upload_notification::Column {
        use entity::upload_notification::Column;
        match field {
            "uploadTimestamp" => Column::UploadTimestamp,
            "fileName" => Column::FileName,
            "recordCount" => Column::RecordCount,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl MoneyMarketUploadNotificationRepository for SeaOrmUploadNotificationRepository {
    async fn insert(
        &self,
        notification: &MoneyMarketUploadNotification,
    ) -> Result<MoneyMarketUploadNotification> {
        let active: entity::upload_notification::ActiveModel = notification.into();
        let saved = entity::upload_notification::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn update(
        &self,
        notification: &MoneyMarketUploadNotification,
    ) -> Result<MoneyMarketUploadNotification> {
        let active: entity::upload_notification::ActiveModel = notification.into();
        let saved = entity::upload_notification::Entity::update(active)
            .exec(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MoneyMarketUploadNotification>> {
        let row = entity::upload_notification::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        criteria: &MoneyMarketUploadNotificationCriteria,
        page: &Page,
    ) -> Result<(Vec<MoneyMarketUploadNotification>, u64)> {
        let query = entity::upload_notification::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn count(&self, criteria: &MoneyMarketUploadNotificationCriteria) -> Result<u64> {
        Ok(entity::upload_notification::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::upload_notification::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::upload_notification::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}

// ===== FiscalYear =====

pub struct SeaOrmFiscalYearRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFiscalYearRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &FiscalYearCriteria) -> Condition {
        use entity::fiscal_year::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(range_condition(Column::Year, &criteria.year))
            .add(range_condition(Column::StartDate, &criteria.start_date))
            .add(range_condition(Column::EndDate, &criteria.end_date))
    }

    fn sort_column(field: &str) -> entity::fiscal_year::Column {
        use entity::fiscal_year::Column;
        match field {
            "year" => Column::Year,
            "startDate" => Column::StartDate,
            "endDate" => Column::EndDate,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl FiscalYearRepository for SeaOrmFiscalYearRepository {
    async fn insert(&self, year: &FiscalYear) -> Result<FiscalYear> {
        let active: entity::fiscal_year::ActiveModel = year.into();
        let saved = entity::fiscal_year::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn update(&self, year: &FiscalYear) -> Result<FiscalYear> {
        let active: entity::fiscal_year::ActiveModel = year.into();
        let saved = entity::fiscal_year::Entity::update(active)
            .exec(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FiscalYear>> {
        let row = entity::fiscal_year::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        criteria: &FiscalYearCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalYear>, u64)> {
        let query = entity::fiscal_year::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn count(&self, criteria: &FiscalYearCriteria) -> Result<u64> {
        Ok(entity::fiscal_year::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::fiscal_year::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::fiscal_year::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}

// ===== FiscalQuarter =====

pub struct SeaOrmFiscalQuarterRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFiscalQuarterRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &FiscalQuarterCriteria) -> Condition {
        use entity::fiscal_quarter::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(range_condition(
                Column::QuarterNumber,
                &criteria.quarter_number,
            ))
            .add(range_condition(Column::StartDate, &criteria.start_date))
            .add(range_condition(Column::EndDate, &criteria.end_date))
            .add(range_condition(
                Column::FiscalYearId,
                &criteria.fiscal_year_id,
            ))
    }

    fn sort_column(field: &str) -> entity::fiscal_quarter::Column {
        use entity::fiscal_quarter::Column;
        match field {
            "quarterNumber" => Column::QuarterNumber,
            "startDate" => Column::StartDate,
            "endDate" => Column::EndDate,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl FiscalQuarterRepository for SeaOrmFiscalQuarterRepository {
    async fn insert(&self, quarter: &FiscalQuarter) -> Result<FiscalQuarter> {
        let active: entity::fiscal_quarter::ActiveModel = quarter.into();
        let saved = entity::fiscal_quarter::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn update(&self, quarter: &FiscalQuarter) -> Result<FiscalQuarter> {
        let active: entity::fiscal_quarter::ActiveModel = quarter.into();
        let saved = entity::fiscal_quarter::Entity::update(active)
            .exec(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FiscalQuarter>> {
        let row = entity::fiscal_quarter::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        criteria: &FiscalQuarterCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalQuarter>, u64)> {
        let query = entity::fiscal_quarter::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn count(&self, criteria: &FiscalQuarterCriteria) -> Result<u64> {
        Ok(entity::fiscal_quarter::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::fiscal_quarter::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::fiscal_quarter::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}

// ===== FiscalMonth =====

pub struct SeaOrmFiscalMonthRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFiscalMonthRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &FiscalMonthCriteria) -> Condition {
        use entity::fiscal_month::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(range_condition(Column::MonthNumber, &criteria.month_number))
            .add(range_condition(Column::StartDate, &criteria.start_date))
            .add(range_condition(Column::EndDate, &criteria.end_date))
            .add(range_condition(
                Column::FiscalQuarterId,
                &criteria.fiscal_quarter_id,
            ))
    }

    fn sort_column(field: &str) -> entity::fiscal_month::Column {
        use entity::fiscal_month::Column;
        match field {
            "monthNumber" => Column::MonthNumber,
            "startDate" => Column::StartDate,
            "endDate" => Column::EndDate,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl FiscalMonthRepository for SeaOrmFiscalMonthRepository {
    async fn insert(&self, month: &FiscalMonth) -> Result<FiscalMonth> {
        let active: entity::fiscal_month::ActiveModel = month.into();
        let saved = entity::fiscal_month::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn update(&self, month: &FiscalMonth) -> Result<FiscalMonth> {
        let active: entity::fiscal_month::ActiveModel = month.into();
        let saved = entity::fiscal_month::Entity::update(active)
            .exec(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<FiscalMonth>> {
        let row = entity::fiscal_month::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        criteria: &FiscalMonthCriteria,
        page: &Page,
    ) -> Result<(Vec<FiscalMonth>, u64)> {
        let query = entity::fiscal_month::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn count(&self, criteria: &FiscalMonthCriteria) -> Result<u64> {
        Ok(entity::fiscal_month::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::fiscal_month::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::fiscal_month::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}

// ===== ReportBatch =====

pub struct SeaOrmReportBatchRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmReportBatchRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &ReportBatchCriteria) -> Condition {
        use entity::report_batch::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(range_condition(
                Column::UploadTimestamp,
                &criteria.upload_timestamp,
            ))
            .add(string_condition(Column::Status, &criteria.status))
            .add(string_condition(Column::Checksum, &criteria.checksum))
            .add(range_condition(Column::UploadedBy, &criteria.uploaded_by))
    }

    fn sort_column(field: &str) -> entity::report_batch::Column {
        use entity::report_batch::Column;
        match field {
            "uploadTimestamp" => Column::UploadTimestamp,
            "status" => Column::Status,
            "checksum" => Column::Checksum,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl ReportBatchRepository for SeaOrmReportBatchRepository {
    async fn insert(&self, batch: &ReportBatch) -> Result<ReportBatch> {
        let active: entity::report_batch::ActiveModel = batch.into();
        let saved = entity::report_batch::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        saved.try_into()
    }

    async fn update(&self, batch: &ReportBatch) -> Result<ReportBatch> {
        let active: entity::report_batch::ActiveModel = batch.into();
        let saved = entity::report_batch::Entity::update(active)
            .exec(&*self.db)
            .await?;
        saved.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ReportBatch>> {
        let row = entity::report_batch::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        row.map(TryInto::try_into).transpose()
    }

    async fn list(
        &self,
        criteria: &ReportBatchCriteria,
        page: &Page,
    ) -> Result<(Vec<ReportBatch>, u64)> {
        let query = entity::report_batch::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        let batches = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>>>()?;
        Ok((batches, total))
    }

    async fn count(&self, criteria: &ReportBatchCriteria) -> Result<u64> {
        Ok(entity::report_batch::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let res = entity::report_batch::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::report_batch::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}

// ===== Placeholder =====

pub struct SeaOrmPlaceholderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPlaceholderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn condition(criteria: &PlaceholderCriteria) -> Condition {
        use entity::placeholder::Column;
        Condition::all()
            .add(range_condition(Column::Id, &criteria.id))
            .add(string_condition(Column::Token, &criteria.token))
    }

    fn sort_column(field: &str) -> entity::placeholder::Column {
        use entity::placeholder::Column;
        match field {
            "token" => Column::Token,
            _ => Column::Id,
        }
    }
}

#[async_trait]
impl PlaceholderRepository for SeaOrmPlaceholderRepository {
    async fn insert(&self, placeholder: &Placeholder) -> Result<Placeholder> {
        let active: entity::placeholder::ActiveModel = placeholder.into();
        let saved = entity::placeholder::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn update(&self, placeholder: &Placeholder) -> Result<Placeholder> {
        let active: entity::placeholder::ActiveModel = placeholder.into();
        let saved = entity::placeholder::Entity::update(active)
            .exec(&*self.db)
            .await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Placeholder>> {
        let row = entity::placeholder::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        criteria: &PlaceholderCriteria,
        page: &Page,
    ) -> Result<(Vec<Placeholder>, u64)> {
        let query = entity::placeholder::Entity::find().filter(Self::condition(criteria));
        let total = query.clone().count(&*self.db).await?;
        let rows = order(query, Self::sort_column(&page.sort.field), page.sort.direction)
            .limit(page.size)
            .offset(page.offset())
            .all(&*self.db)
            .await?;
        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn count(&self, criteria: &PlaceholderCriteria) -> Result<u64> {
        Ok(entity::placeholder::Entity::find()
            .filter(Self::condition(criteria))
            .count(&*self.db)
            .await?)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        entity::deal_placeholder::Entity::delete_many()
            .filter(entity::deal_placeholder::Column::PlaceholderId.eq(id))
            .exec(&*self.db)
            .await?;
        let res = entity::placeholder::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count = entity::placeholder::Entity::find_by_id(id)
            .count(&*self.db)
            .await?;
        Ok(count > 0)
    }
}
