pub mod admin;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod protocol;
pub mod store;
pub mod user;
pub mod utils;

use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use crate::{
    config::Config,
    notify::TracingNotifier,
    store::{seed, HistoryStore, SlotRegistry},
};

pub struct AppState {
    slots: Mutex<SlotRegistry>,
    pub history: HistoryStore,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let (slots, history) = if config.seed_sample_data {
            (seed::sample_slots(), seed::sample_history())
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            slots: Mutex::new(SlotRegistry::with_slots(
                TracingNotifier,
                config.default_facility.clone(),
                slots,
            )),
            history: HistoryStore::new(history),
        }
    }

    pub fn lock_slots(&self) -> anyhow::Result<MutexGuard<'_, SlotRegistry>> {
        self.slots
            .lock()
            .map_err(|_| anyhow!("slot registry lock poisoned"))
    }
}
