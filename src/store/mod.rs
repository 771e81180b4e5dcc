pub mod history;
pub mod seed;
pub mod slots;

pub use self::{history::HistoryStore, slots::SlotRegistry};
