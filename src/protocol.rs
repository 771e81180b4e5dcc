#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

use serde::Serialize;

use crate::{
    models::slots::Slot,
    utils::{format_clock_str, format_date_str, format_display_date, format_display_time},
};

/// A slot as the admin panel lists it.
#[derive(Default, Serialize)]
pub struct SlotItem {
    pub id: String,
    pub professional_name: String,
    pub specialty: String,
    pub facility: String,
    pub date: String,
    pub display_date: String,
    pub time: String,
    pub display_time: String,
    pub available: bool,
}

impl From<&Slot> for SlotItem {
    fn from(slot: &Slot) -> Self {
        Self {
            id: slot.id.clone(),
            professional_name: slot.professional_name.clone(),
            specialty: slot.specialty.label().to_string(),
            facility: slot.facility.clone(),
            date: format_date_str(&slot.date),
            display_date: format_display_date(&slot.date),
            time: format_clock_str(&slot.time),
            display_time: format_display_time(&slot.time),
            available: slot.available,
        }
    }
}
