mod requests;
mod responses;

use crate::{
    models::{
        catalog::{Specialty, PROFESSIONALS},
        slots::NewSlot,
    },
    protocol::SlotItem,
    AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_slots)
        .service(add_slot)
        .service(toggle_slot)
        .service(delete_slot)
        .service(slot_stats)
        .service(catalog);
}

crate::post_funcs! {
    (list_slots, "/list_slots", ListSlotsRequest, ListSlotsResponse),
    (add_slot, "/add_slot", AddSlotRequest, AddSlotResponse),
    (toggle_slot, "/toggle_slot", ToggleSlotRequest, ToggleSlotResponse),
    (delete_slot, "/delete_slot", DeleteSlotRequest, DeleteSlotResponse),
    (slot_stats, "/slot_stats", SlotStatsRequest, SlotStatsResponse),
    (catalog, "/catalog", CatalogRequest, CatalogResponse),
}

async fn list_slots_impl(
    state: web::Data<AppState>,
    info: web::Json<ListSlotsRequest>,
) -> anyhow::Result<ListSlotsResponse> {
    let info = info.into_inner();
    let registry = state.lock_slots()?;

    let slots = registry
        .all()
        .iter()
        .filter(|slot| slot.available || !info.only_available)
        .map(SlotItem::from)
        .collect();

    Ok(ListSlotsResponse {
        success: true,
        err: "".to_string(),
        slots,
    })
}

async fn add_slot_impl(
    state: web::Data<AppState>,
    info: web::Json<AddSlotRequest>,
) -> anyhow::Result<AddSlotResponse> {
    let info = info.into_inner();
    let new_slot = NewSlot {
        professional_name: info.professional_name,
        specialty: info.specialty,
        date: info.date,
        time: info.time,
        facility: info.facility,
    };

    let slot = state
        .lock_slots()?
        .add(new_slot)
        .context("Could not add slot")?;

    Ok(AddSlotResponse {
        success: true,
        err: "".to_string(),
        slot: SlotItem::from(&slot),
    })
}

async fn toggle_slot_impl(
    state: web::Data<AppState>,
    info: web::Json<ToggleSlotRequest>,
) -> anyhow::Result<ToggleSlotResponse> {
    let info = info.into_inner();
    let toggled = state.lock_slots()?.toggle_availability(&info.id);

    Ok(ToggleSlotResponse {
        success: true,
        err: "".to_string(),
        found: toggled.is_some(),
        available: toggled.unwrap_or(false),
    })
}

async fn delete_slot_impl(
    state: web::Data<AppState>,
    info: web::Json<DeleteSlotRequest>,
) -> anyhow::Result<DeleteSlotResponse> {
    let info = info.into_inner();
    let removed = state.lock_slots()?.remove(&info.id);

    Ok(DeleteSlotResponse {
        success: true,
        err: "".to_string(),
        removed: removed.is_some(),
    })
}

async fn slot_stats_impl(
    state: web::Data<AppState>,
    _info: web::Json<SlotStatsRequest>,
) -> anyhow::Result<SlotStatsResponse> {
    let stats = state.lock_slots()?.stats();

    Ok(SlotStatsResponse {
        success: true,
        err: "".to_string(),
        total: stats.total(),
        available: stats.available_count,
        unavailable: stats.unavailable_count,
        specialties: stats.distinct_specialty_count,
        professionals: stats.distinct_professional_count,
    })
}

async fn catalog_impl(
    state: web::Data<AppState>,
    _info: web::Json<CatalogRequest>,
) -> anyhow::Result<CatalogResponse> {
    let default_facility = state.lock_slots()?.default_facility().to_string();

    Ok(CatalogResponse {
        success: true,
        err: "".to_string(),
        specialties: Specialty::ALL.iter().map(|sp| sp.label().to_string()).collect(),
        professionals: PROFESSIONALS.iter().map(|name| name.to_string()).collect(),
        default_facility,
    })
}
