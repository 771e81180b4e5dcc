use chrono::{NaiveDate, NaiveTime};

use super::catalog::Specialty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: String,
    pub professional_name: String,
    pub specialty: Specialty,
    pub facility: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available: bool,
}

/// Raw values of the slot creation form. Parsed and checked by
/// `SlotRegistry::add`.
#[derive(Debug, Clone, Default)]
pub struct NewSlot {
    pub professional_name: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub facility: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotStats {
    pub available_count: usize,
    pub unavailable_count: usize,
    pub distinct_specialty_count: usize,
    pub distinct_professional_count: usize,
}

impl SlotStats {
    pub fn total(&self) -> usize {
        self.available_count + self.unavailable_count
    }
}
