//! HTTP request handlers - thin layer that delegates to domain service
//!
//! List and count endpoints take the raw query pairs so dotted filter
//! parameters (`dealerName.contains=...`) survive extraction. The total
//! match count travels in the `X-Total-Count` header, the page in the body.

use axum::{
    extract::{Path, Query},
    http::{header::HeaderName, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use serde::Serialize;

use crate::app::AppState;
use crate::domain::criteria::*;
use crate::domain::filter::Page;
use crate::infra::search::{SearchDocument, SearchIndex};

use super::dto::*;
use super::error::Problem;

static TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

type RawQuery = Query<Vec<(String, String)>>;

fn list_response<T: Serialize>(items: Vec<T>, total: u64) -> (HeaderMap, Json<Vec<T>>) {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT.clone(), HeaderValue::from(total));
    (headers, Json(items))
}

fn search_response<T, D>(index: &SearchIndex<T>, query: &str) -> (HeaderMap, Json<Vec<D>>)
where
    T: SearchDocument + Clone,
    D: From<T> + Serialize,
{
    let hits = index.search(query);
    let total = hits.len() as u64;
    list_response(hits.into_iter().map(D::from).collect(), total)
}

// ===== Dealer =====

pub async fn create_dealer(
    Extension(state): Extension<AppState>,
    Json(dto): Json<DealerDto>,
) -> Result<(StatusCode, Json<DealerDto>), Problem> {
    let saved = state.service.create_dealer(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_dealer(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DealerDto>, Problem> {
    Ok(Json(state.service.get_dealer(id).await?.into()))
}

pub async fn list_dealers(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<DealerDto>>), Problem> {
    let criteria = DealerCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_dealers(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_dealers(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = DealerCriteria::from_params(&params);
    Ok(Json(state.service.count_dealers(&criteria).await?))
}

pub async fn update_dealer(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<DealerDto>,
) -> Result<Json<DealerDto>, Problem> {
    let saved = state.service.update_dealer(id, dto.try_into()?).await?;
    Ok(Json(saved.into()))
}

pub async fn patch_dealer(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<DealerPatchDto>,
) -> Result<Json<DealerDto>, Problem> {
    let saved = state.service.patch_dealer(id, dto.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_dealer(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_dealer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_dealers(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<DealerDto>>), Problem> {
    Ok(search_response(&state.search.dealers, &query.query))
}

// ===== MoneyMarketDeal =====

pub async fn create_deal(
    Extension(state): Extension<AppState>,
    Json(dto): Json<MoneyMarketDealDto>,
) -> Result<(StatusCode, Json<MoneyMarketDealDto>), Problem> {
    let saved = state.service.create_deal(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_deal(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MoneyMarketDealDto>, Problem> {
    Ok(Json(state.service.get_deal(id).await?.into()))
}

pub async fn list_deals(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<MoneyMarketDealDto>>), Problem> {
    let criteria = MoneyMarketDealCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_deals(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_deals(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = MoneyMarketDealCriteria::from_params(&params);
    Ok(Json(state.service.count_deals(&criteria).await?))
}

pub async fn update_deal(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<MoneyMarketDealDto>,
) -> Result<Json<MoneyMarketDealDto>, Problem> {
    let saved = state.service.update_deal(id, dto.try_into()?).await?;
    Ok(Json(saved.into()))
}

pub async fn patch_deal(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<MoneyMarketDealPatchDto>,
) -> Result<Json<MoneyMarketDealDto>, Problem> {
    let saved = state.service.patch_deal(id, dto.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_deal(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_deal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_deals(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<MoneyMarketDealDto>>), Problem> {
    Ok(search_response(&state.search.deals, &query.query))
}

// ===== MoneyMarketList =====

pub async fn create_list(
    Extension(state): Extension<AppState>,
    Json(dto): Json<MoneyMarketListDto>,
) -> Result<(StatusCode, Json<MoneyMarketListDto>), Problem> {
    let saved = state.service.create_list(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_list(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MoneyMarketListDto>, Problem> {
    Ok(Json(state.service.get_list(id).await?.into()))
}

pub async fn list_lists(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<MoneyMarketListDto>>), Problem> {
    let criteria = MoneyMarketListCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_lists(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_lists(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = MoneyMarketListCriteria::from_params(&params);
    Ok(Json(state.service.count_lists(&criteria).await?))
}

pub async fn update_list(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<MoneyMarketListDto>,
) -> Result<Json<MoneyMarketListDto>, Problem> {
    let saved = state.service.update_list(id, dto.try_into()?).await?;
    Ok(Json(saved.into()))
}

pub async fn patch_list(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<MoneyMarketListPatchDto>,
) -> Result<Json<MoneyMarketListDto>, Problem> {
    let saved = state.service.patch_list(id, dto.try_into()?).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_list(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_list(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_lists(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<MoneyMarketListDto>>), Problem> {
    Ok(search_response(&state.search.lists, &query.query))
}

// ===== MoneyMarketUploadNotification =====

pub async fn create_upload_notification(
    Extension(state): Extension<AppState>,
    Json(dto): Json<MoneyMarketUploadNotificationDto>,
) -> Result<(StatusCode, Json<MoneyMarketUploadNotificationDto>), Problem> {
    let saved = state
        .service
        .create_upload_notification(dto.try_into()?)
        .await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_upload_notification(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MoneyMarketUploadNotificationDto>, Problem> {
    Ok(Json(state.service.get_upload_notification(id).await?.into()))
}

pub async fn list_upload_notifications(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<MoneyMarketUploadNotificationDto>>), Problem> {
    let criteria = MoneyMarketUploadNotificationCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state
        .service
        .list_upload_notifications(&criteria, &page)
        .await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_upload_notifications(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = MoneyMarketUploadNotificationCriteria::from_params(&params);
    Ok(Json(
        state.service.count_upload_notifications(&criteria).await?,
    ))
}

pub async fn update_upload_notification(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<MoneyMarketUploadNotificationDto>,
) -> Result<Json<MoneyMarketUploadNotificationDto>, Problem> {
    let saved = state
        .service
        .update_upload_notification(id, dto.try_into()?)
        .await?;
    Ok(Json(saved.into()))
}

pub async fn patch_upload_notification(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<MoneyMarketUploadNotificationPatchDto>,
) -> Result<Json<MoneyMarketUploadNotificationDto>, Problem> {
    let saved = state
        .service
        .patch_upload_notification(id, dto.into())
        .await?;
    Ok(Json(saved.into()))
}

pub async fn delete_upload_notification(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_upload_notification(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_upload_notifications(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<MoneyMarketUploadNotificationDto>>), Problem> {
    Ok(search_response(
        &state.search.upload_notifications,
        &query.query,
    ))
}

// ===== FiscalYear =====

pub async fn create_fiscal_year(
    Extension(state): Extension<AppState>,
    Json(dto): Json<FiscalYearDto>,
) -> Result<(StatusCode, Json<FiscalYearDto>), Problem> {
    let saved = state.service.create_fiscal_year(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_fiscal_year(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FiscalYearDto>, Problem> {
    Ok(Json(state.service.get_fiscal_year(id).await?.into()))
}

pub async fn list_fiscal_years(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<FiscalYearDto>>), Problem> {
    let criteria = FiscalYearCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_fiscal_years(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_fiscal_years(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = FiscalYearCriteria::from_params(&params);
    Ok(Json(state.service.count_fiscal_years(&criteria).await?))
}

pub async fn update_fiscal_year(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<FiscalYearDto>,
) -> Result<Json<FiscalYearDto>, Problem> {
    let saved = state.service.update_fiscal_year(id, dto.try_into()?).await?;
    Ok(Json(saved.into()))
}

pub async fn patch_fiscal_year(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<FiscalYearPatchDto>,
) -> Result<Json<FiscalYearDto>, Problem> {
    let saved = state.service.patch_fiscal_year(id, dto.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_fiscal_year(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_fiscal_year(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_fiscal_years(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<FiscalYearDto>>), Problem> {
    Ok(search_response(&state.search.fiscal_years, &query.query))
}

// ===== FiscalQuarter =====

pub async fn create_fiscal_quarter(
    Extension(state): Extension<AppState>,
    Json(dto): Json<FiscalQuarterDto>,
) -> Result<(StatusCode, Json<FiscalQuarterDto>), Problem> {
    let saved = state.service.create_fiscal_quarter(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_fiscal_quarter(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FiscalQuarterDto>, Problem> {
    Ok(Json(state.service.get_fiscal_quarter(id).await?.into()))
}

pub async fn list_fiscal_quarters(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<FiscalQuarterDto>>), Problem> {
    let criteria = FiscalQuarterCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_fiscal_quarters(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_fiscal_quarters(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = FiscalQuarterCriteria::from_params(&params);
    Ok(Json(state.service.count_fiscal_quarters(&criteria).await?))
}

pub async fn update_fiscal_quarter(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<FiscalQuarterDto>,
) -> Result<Json<FiscalQuarterDto>, Problem> {
    let saved = state
        .service
        .update_fiscal_quarter(id, dto.try_into()?)
        .await?;
    Ok(Json(saved.into()))
}

pub async fn patch_fiscal_quarter(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<FiscalQuarterPatchDto>,
) -> Result<Json<FiscalQuarterDto>, Problem> {
    let saved = state.service.patch_fiscal_quarter(id, dto.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_fiscal_quarter(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_fiscal_quarter(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_fiscal_quarters(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<FiscalQuarterDto>>), Problem> {
    Ok(search_response(&state.search.fiscal_quarters, &query.query))
}

// ===== FiscalMonth =====

pub async fn create_fiscal_month(
    Extension(state): Extension<AppState>,
    Json(dto): Json<FiscalMonthDto>,
) -> Result<(StatusCode, Json<FiscalMonthDto>), Problem> {
    let saved = state.service.create_fiscal_month(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_fiscal_month(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FiscalMonthDto>, Problem> {
    Ok(Json(state.service.get_fiscal_month(id).await?.into()))
}

pub async fn list_fiscal_months(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<FiscalMonthDto>>), Problem> {
    let criteria = FiscalMonthCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_fiscal_months(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_fiscal_months(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = FiscalMonthCriteria::from_params(&params);
    Ok(Json(state.service.count_fiscal_months(&criteria).await?))
}

pub async fn update_fiscal_month(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<FiscalMonthDto>,
) -> Result<Json<FiscalMonthDto>, Problem> {
    let saved = state
        .service
        .update_fiscal_month(id, dto.try_into()?)
        .await?;
    Ok(Json(saved.into()))
}

pub async fn patch_fiscal_month(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<FiscalMonthPatchDto>,
) -> Result<Json<FiscalMonthDto>, Problem> {
    let saved = state.service.patch_fiscal_month(id, dto.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_fiscal_month(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_fiscal_month(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_fiscal_months(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<FiscalMonthDto>>), Problem> {
    Ok(search_response(&state.search.fiscal_months, &query.query))
}

// ===== ReportBatch =====

pub async fn create_report_batch(
    Extension(state): Extension<AppState>,
    Json(dto): Json<ReportBatchDto>,
) -> Result<(StatusCode, Json<ReportBatchDto>), Problem> {
    let saved = state.service.create_report_batch(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_report_batch(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReportBatchDto>, Problem> {
    Ok(Json(state.service.get_report_batch(id).await?.into()))
}

pub async fn list_report_batches(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<ReportBatchDto>>), Problem> {
    let criteria = ReportBatchCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_report_batches(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_report_batches(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = ReportBatchCriteria::from_params(&params);
    Ok(Json(state.service.count_report_batches(&criteria).await?))
}

pub async fn update_report_batch(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ReportBatchDto>,
) -> Result<Json<ReportBatchDto>, Problem> {
    let saved = state
        .service
        .update_report_batch(id, dto.try_into()?)
        .await?;
    Ok(Json(saved.into()))
}

pub async fn patch_report_batch(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ReportBatchPatchDto>,
) -> Result<Json<ReportBatchDto>, Problem> {
    let saved = state
        .service
        .patch_report_batch(id, dto.try_into()?)
        .await?;
    Ok(Json(saved.into()))
}

pub async fn delete_report_batch(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_report_batch(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_report_batches(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<ReportBatchDto>>), Problem> {
    Ok(search_response(&state.search.report_batches, &query.query))
}

// ===== Placeholder =====

pub async fn create_placeholder(
    Extension(state): Extension<AppState>,
    Json(dto): Json<PlaceholderDto>,
) -> Result<(StatusCode, Json<PlaceholderDto>), Problem> {
    let saved = state.service.create_placeholder(dto.try_into()?).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn get_placeholder(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlaceholderDto>, Problem> {
    Ok(Json(state.service.get_placeholder(id).await?.into()))
}

pub async fn list_placeholders(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<(HeaderMap, Json<Vec<PlaceholderDto>>), Problem> {
    let criteria = PlaceholderCriteria::from_params(&params);
    let page = Page::from_params(&params);
    let (items, total) = state.service.list_placeholders(&criteria, &page).await?;
    Ok(list_response(items.into_iter().map(Into::into).collect(), total))
}

pub async fn count_placeholders(
    Extension(state): Extension<AppState>,
    Query(params): RawQuery,
) -> Result<Json<u64>, Problem> {
    let criteria = PlaceholderCriteria::from_params(&params);
    Ok(Json(state.service.count_placeholders(&criteria).await?))
}

pub async fn update_placeholder(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<PlaceholderDto>,
) -> Result<Json<PlaceholderDto>, Problem> {
    let saved = state
        .service
        .update_placeholder(id, dto.try_into()?)
        .await?;
    Ok(Json(saved.into()))
}

pub async fn patch_placeholder(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<PlaceholderPatchDto>,
) -> Result<Json<PlaceholderDto>, Problem> {
    let saved = state.service.patch_placeholder(id, dto.into()).await?;
    Ok(Json(saved.into()))
}

pub async fn delete_placeholder(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Problem> {
    state.service.delete_placeholder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_placeholders(
    Extension(state): Extension<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<(HeaderMap, Json<Vec<PlaceholderDto>>), Problem> {
    Ok(search_response(&state.search.placeholders, &query.query))
}
