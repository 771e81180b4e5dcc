use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListSlotsRequest {
    #[serde(default)]
    pub only_available: bool,
}

#[derive(Deserialize)]
pub struct AddSlotRequest {
    #[serde(default)]
    pub professional_name: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub facility: String,
}

#[derive(Deserialize)]
pub struct ToggleSlotRequest {
    pub id: String,
}

#[derive(Deserialize)]
pub struct DeleteSlotRequest {
    pub id: String,
}

#[derive(Deserialize)]
pub struct SlotStatsRequest {}

#[derive(Deserialize)]
pub struct CatalogRequest {}
