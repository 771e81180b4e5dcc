use serde::Serialize;

#[derive(Default, Serialize)]
pub struct HistoryItem {
    pub id: String,
    pub facility: String,
    pub professional_name: String,
    pub specialty: String,
    pub date: String,
    pub display_date: String,
    pub time: String,
    pub display_time: String,
    pub address: String,
    pub phone: String,
    pub status: String,
    pub status_label: String,
    pub action_date: String,
}

#[derive(Default, Serialize)]
pub struct SearchHistoryResponse {
    pub success: bool,
    pub err: String,
    pub records: Vec<HistoryItem>,
}

#[derive(Default, Serialize)]
pub struct HistoryCountsResponse {
    pub success: bool,
    pub err: String,
    pub total: usize,
    pub confirmed: usize,
    pub rejected: usize,
    pub cancelled: usize,
    pub completed: usize,
}

crate::impl_err_response! {
    SearchHistoryResponse,
    HistoryCountsResponse,
}
