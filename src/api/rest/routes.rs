//! Route registration for the entity CRUD surface
//!
//! Every entity gets the same shape: collection, `/count`, `/_search`, and
//! `/{id}`. `/count` and `/_search` are registered before `/{id}` only for
//! readability; axum gives static segments precedence either way.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use super::handlers;

pub fn router() -> Router {
    Router::new()
        // Dealer
        .route("/dealers", post(handlers::create_dealer))
        .route("/dealers", get(handlers::list_dealers))
        .route("/dealers/count", get(handlers::count_dealers))
        .route("/dealers/_search", get(handlers::search_dealers))
        .route("/dealers/{id}", get(handlers::get_dealer))
        .route("/dealers/{id}", put(handlers::update_dealer))
        .route("/dealers/{id}", patch(handlers::patch_dealer))
        .route("/dealers/{id}", delete(handlers::delete_dealer))
        // MoneyMarketDeal
        .route("/money-market-deals", post(handlers::create_deal))
        .route("/money-market-deals", get(handlers::list_deals))
        .route("/money-market-deals/count", get(handlers::count_deals))
        .route("/money-market-deals/_search", get(handlers::search_deals))
        .route("/money-market-deals/{id}", get(handlers::get_deal))
        .route("/money-market-deals/{id}", put(handlers::update_deal))
        .route("/money-market-deals/{id}", patch(handlers::patch_deal))
        .route("/money-market-deals/{id}", delete(handlers::delete_deal))
        // MoneyMarketList
        .route("/money-market-lists", post(handlers::create_list))
        .route("/money-market-lists", get(handlers::list_lists))
        .route("/money-market-lists/count", get(handlers::count_lists))
        .route("/money-market-lists/_search", get(handlers::search_lists))
        .route("/money-market-lists/{id}", get(handlers::get_list))
        .route("/money-market-lists/{id}", put(handlers::update_list))
        .route("/money-market-lists/{id}", patch(handlers::patch_list))
        .route("/money-market-lists/{id}", delete(handlers::delete_list))
        // MoneyMarketUploadNotification
        .route(
            "/money-market-upload-notifications",
            post(handlers::create_upload_notification),
        )
        .route(
            "/money-market-upload-notifications",
            get(handlers::list_upload_notifications),
        )
        .route(
            "/money-market-upload-notifications/count",
            get(handlers::count_upload_notifications),
        )
        .route(
            "/money-market-upload-notifications/_search",
            get(handlers::search_upload_notifications),
        )
        .route(
            "/money-market-upload-notifications/{id}",
            get(handlers::get_upload_notification),
        )
        .route(
            "/money-market-upload-notifications/{id}",
            put(handlers::update_upload_notification),
        )
        .route(
            "/money-market-upload-notifications/{id}",
            patch(handlers::patch_upload_notification),
        )
        .route(
            "/money-market-upload-notifications/{id}",
            delete(handlers::delete_upload_notification),
        )
        // FiscalYear
        .route("/fiscal-years", post(handlers::create_fiscal_year))
        .route("/fiscal-years", get(handlers::list_fiscal_years))
        .route("/fiscal-years/count", get(handlers::count_fiscal_years))
        .route("/fiscal-years/_search", get(handlers::search_fiscal_years))
        .route("/fiscal-years/{id}", get(handlers::get_fiscal_year))
        .route("/fiscal-years/{id}", put(handlers::update_fiscal_year))
        .route("/fiscal-years/{id}", patch(handlers::patch_fiscal_year))
        .route("/fiscal-years/{id}", delete(handlers::delete_fiscal_year))
        // FiscalQuarter
        .route("/fiscal-quarters", post(handlers::create_fiscal_quarter))
        .route("/fiscal-quarters", get(handlers::list_fiscal_quarters))
        .route(
            "/fiscal-quarters/count",
            get(handlers::count_fiscal_quarters),
        )
        .route(
            "/fiscal-quarters/_search",
            get(handlers::search_fiscal_quarters),
        )
        .route("/fiscal-quarters/{id}", get(handlers::get_fiscal_quarter))
        .route(
            "/fiscal-quarters/{id}",
            put(handlers::update_fiscal_quarter),
        )
        .route(
            "/fiscal-quarters/{id}",
            patch(handlers::patch_fiscal_quarter),
        )
        .route(
            "/fiscal-quarters/{id}",
            delete(handlers::delete_fiscal_quarter),
        )
        // FiscalMonth
        .route("/fiscal-months", post(handlers::create_fiscal_month))
        .route("/fiscal-months", get(handlers::list_fiscal_months))
        .route("/fiscal-months/count", get(handlers::count_fiscal_months))
        .route(
            "/fiscal-months/_search",
            get(handlers::search_fiscal_months),
        )
        .route("/fiscal-months/{id}", get(handlers::get_fiscal_month))
        .route("/fiscal-months/{id}", put(handlers::update_fiscal_month))
        .route("/fiscal-months/{id}", patch(handlers::patch_fiscal_month))
        .route("/fiscal-months/{id}", delete(handlers::delete_fiscal_month))
        // ReportBatch
        .route("/report-batches", post(handlers::create_report_batch))
        .route("/report-batches", get(handlers::list_report_batches))
        .route(
            "/report-batches/count",
            get(handlers::count_report_batches),
        )
        .route(
            "/report-batches/_search",
            get(handlers::search_report_batches),
        )
        .route("/report-batches/{id}", get(handlers::get_report_batch))
        .route("/report-batches/{id}", put(handlers::update_report_batch))
        .route(
            "/report-batches/{id}",
            patch(handlers::patch_report_batch),
        )
        .route(
            "/report-batches/{id}",
            delete(handlers::delete_report_batch),
        )
        // Placeholder
        .route("/placeholders", post(handlers::create_placeholder))
        .route("/placeholders", get(handlers::list_placeholders))
        .route("/placeholders/count", get(handlers::count_placeholders))
        .route("/placeholders/_search", get(handlers::search_placeholders))
        .route("/placeholders/{id}", get(handlers::get_placeholder))
        .route("/placeholders/{id}", put(handlers::update_placeholder))
        .route("/placeholders/{id}", patch(handlers::patch_placeholder))
        .route("/placeholders/{id}", delete(handlers::delete_placeholder))
}
