mod requests;
mod responses;

use crate::{
    models::history::{HistoryRecord, StatusFilter},
    utils::{format_clock_str, format_date_str, format_display_date, format_display_time},
    AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_history).service(history_counts);
}

crate::post_funcs! {
    (search_history, "/search_history", SearchHistoryRequest, SearchHistoryResponse),
    (history_counts, "/history_counts", HistoryCountsRequest, HistoryCountsResponse),
}

fn history_item(record: &HistoryRecord) -> HistoryItem {
    HistoryItem {
        id: record.id.clone(),
        facility: record.facility.clone(),
        professional_name: record.professional_name.clone(),
        specialty: record.specialty.label().to_string(),
        date: format_date_str(&record.date),
        display_date: format_display_date(&record.date),
        time: format_clock_str(&record.time),
        display_time: format_display_time(&record.time),
        address: record.address.clone(),
        phone: record.phone.clone(),
        status: record.status.key().to_string(),
        status_label: record.status.label().to_string(),
        action_date: format_date_str(&record.action_date),
    }
}

async fn search_history_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchHistoryRequest>,
) -> anyhow::Result<SearchHistoryResponse> {
    let info = info.into_inner();
    let filter = info
        .status
        .parse::<StatusFilter>()
        .context("Bad status filter")?;

    let records = state
        .history
        .filter_by_status(filter)
        .into_iter()
        .map(history_item)
        .collect();

    Ok(SearchHistoryResponse {
        success: true,
        err: "".to_string(),
        records,
    })
}

async fn history_counts_impl(
    state: web::Data<AppState>,
    _info: web::Json<HistoryCountsRequest>,
) -> anyhow::Result<HistoryCountsResponse> {
    let counts = state.history.counts();

    Ok(HistoryCountsResponse {
        success: true,
        err: "".to_string(),
        total: counts.total(),
        confirmed: counts.confirmed,
        rejected: counts.rejected,
        cancelled: counts.cancelled,
        completed: counts.completed,
    })
}
