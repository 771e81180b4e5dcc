use serde::Serialize;

use crate::protocol::SlotItem;

#[derive(Default, Serialize)]
pub struct ListSlotsResponse {
    pub success: bool,
    pub err: String,
    pub slots: Vec<SlotItem>,
}

#[derive(Default, Serialize)]
pub struct AddSlotResponse {
    pub success: bool,
    pub err: String,
    pub slot: SlotItem,
}

#[derive(Default, Serialize)]
pub struct ToggleSlotResponse {
    pub success: bool,
    pub err: String,
    pub found: bool,
    pub available: bool,
}

#[derive(Default, Serialize)]
pub struct DeleteSlotResponse {
    pub success: bool,
    pub err: String,
    pub removed: bool,
}

#[derive(Default, Serialize)]
pub struct SlotStatsResponse {
    pub success: bool,
    pub err: String,
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
    pub specialties: usize,
    pub professionals: usize,
}

#[derive(Default, Serialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub err: String,
    pub specialties: Vec<String>,
    pub professionals: Vec<String>,
    pub default_facility: String,
}

crate::impl_err_response! {
    ListSlotsResponse,
    AddSlotResponse,
    ToggleSlotResponse,
    DeleteSlotResponse,
    SlotStatsResponse,
    CatalogResponse,
}
