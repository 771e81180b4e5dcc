use serde::Deserialize;

fn default_status() -> String {
    "all".to_string()
}

#[derive(Deserialize)]
pub struct SearchHistoryRequest {
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Deserialize)]
pub struct HistoryCountsRequest {}
