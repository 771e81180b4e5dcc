use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info};

use crate::{
    error::{SlotError, ValidationError},
    models::{
        catalog::Specialty,
        slots::{NewSlot, Slot, SlotStats},
    },
    notify::{Notification, Notifier, TracingNotifier},
};

/// Source of the millisecond timestamps slot ids are derived from.
pub type Clock = fn() -> i64;

fn unix_millis() -> i64 {
    Utc::now().timestamp_millis()
}

const TITLE_ERROR: &str = "Error";
const MSG_MISSING_FIELDS: &str = "Por favor completa todos los campos";
const TITLE_ADDED: &str = "Turno agregado";
const MSG_ADDED: &str =
    "El turno ha sido agregado exitosamente y estará disponible para los afiliados";
const TITLE_ENABLED: &str = "Turno habilitado";
const MSG_ENABLED: &str = "El turno ahora está disponible para los afiliados";
const TITLE_DISABLED: &str = "Turno deshabilitado";
const MSG_DISABLED: &str = "El turno ya no estará disponible para los afiliados";
const TITLE_REMOVED: &str = "Turno eliminado";
const MSG_REMOVED: &str = "El turno ha sido eliminado del sistema";

/// The admin panel's bookable slots, kept in insertion order.
pub struct SlotRegistry<N = TracingNotifier> {
    slots: Vec<Slot>,
    notifier: N,
    default_facility: String,
    clock: Clock,
    last_id: i64,
}

impl<N: Notifier> SlotRegistry<N> {
    pub fn new<S: Into<String>>(notifier: N, default_facility: S) -> Self {
        Self::with_slots(notifier, default_facility, Vec::new())
    }

    pub fn with_slots<S: Into<String>>(notifier: N, default_facility: S, slots: Vec<Slot>) -> Self {
        Self {
            slots,
            notifier,
            default_facility: default_facility.into(),
            clock: unix_millis,
            last_id: 0,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn default_facility(&self) -> &str {
        &self.default_facility
    }

    pub fn all(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn get_or_err(&self, id: &str) -> Result<&Slot, SlotError> {
        self.get(id).ok_or_else(|| SlotError::NotFound { id: id.to_string() })
    }

    /// Validates the form values and appends a new, available slot.
    ///
    /// On failure the collection is left untouched and an error notice is
    /// emitted instead of the success one.
    pub fn add(&mut self, input: NewSlot) -> Result<Slot, SlotError> {
        let slot = match self.build_slot(input) {
            Ok(slot) => slot,
            Err(err) => {
                let message = match &err {
                    ValidationError::Missing { .. } => MSG_MISSING_FIELDS.to_string(),
                    ValidationError::Invalid { field, value } => {
                        format!("Valor inválido en {}: {}", field, value)
                    }
                };
                self.notifier.notify(Notification::error(TITLE_ERROR, message));
                return Err(err.into());
            }
        };

        info!(id = %slot.id, professional = %slot.professional_name, "slot added");
        self.slots.push(slot.clone());
        self.notifier.notify(Notification::success(TITLE_ADDED, MSG_ADDED));
        Ok(slot)
    }

    /// Flips availability and returns the new value, or `None` if no slot has `id`.
    pub fn toggle_availability(&mut self, id: &str) -> Option<bool> {
        let slot = match self.slots.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => slot,
            None => {
                debug!(id, "toggle on unknown slot ignored");
                return None;
            }
        };
        slot.available = !slot.available;
        let available = slot.available;

        info!(id, available, "slot availability toggled");
        let notice = if available {
            Notification::success(TITLE_ENABLED, MSG_ENABLED)
        } else {
            Notification::success(TITLE_DISABLED, MSG_DISABLED)
        };
        self.notifier.notify(notice);
        Some(available)
    }

    pub fn remove(&mut self, id: &str) -> Option<Slot> {
        let index = match self.slots.iter().position(|slot| slot.id == id) {
            Some(index) => index,
            None => {
                debug!(id, "remove on unknown slot ignored");
                return None;
            }
        };
        let slot = self.slots.remove(index);

        info!(id, "slot removed");
        self.notifier.notify(Notification::success(TITLE_REMOVED, MSG_REMOVED));
        Some(slot)
    }

    pub fn stats(&self) -> SlotStats {
        let mut stats = SlotStats::default();
        let mut specialties = HashSet::new();
        let mut professionals = HashSet::new();
        for slot in &self.slots {
            if slot.available {
                stats.available_count += 1;
            } else {
                stats.unavailable_count += 1;
            }
            specialties.insert(slot.specialty);
            professionals.insert(slot.professional_name.as_str());
        }
        stats.distinct_specialty_count = specialties.len();
        stats.distinct_professional_count = professionals.len();
        stats
    }

    fn build_slot(&mut self, input: NewSlot) -> Result<Slot, ValidationError> {
        let professional_name = required("professional_name", input.professional_name)?;
        let specialty = required("specialty", input.specialty)?;
        let date = required("date", input.date)?;
        let time = required("time", input.time)?;

        let specialty = specialty.parse::<Specialty>().map_err(|_| ValidationError::Invalid {
            field: "specialty",
            value: specialty.clone(),
        })?;
        let date = crate::utils::parse_date_str(&date).map_err(|_| ValidationError::Invalid {
            field: "date",
            value: date.clone(),
        })?;
        let time = crate::utils::parse_clock_str(&time).map_err(|_| ValidationError::Invalid {
            field: "time",
            value: time.clone(),
        })?;
        let facility = match input.facility.trim() {
            "" => self.default_facility.clone(),
            facility => facility.to_string(),
        };

        Ok(Slot {
            id: self.next_id(),
            professional_name,
            specialty,
            facility,
            date,
            time,
            available: true,
        })
    }

    // Timestamp-derived, strictly increasing, and never equal to a live id.
    fn next_id(&mut self) -> String {
        let mut candidate = (self.clock)().max(self.last_id + 1);
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_id = candidate;
        candidate.to_string()
    }
}

fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::catalog::DEFAULT_FACILITY,
        notify::{NoticeKind, RecordingNotifier},
        store::seed,
    };
    use chrono::{NaiveDate, NaiveTime};

    fn fixed_clock() -> i64 {
        1_700_000_000_000
    }

    fn seeded() -> (SlotRegistry<RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let registry =
            SlotRegistry::with_slots(notifier.clone(), DEFAULT_FACILITY, seed::sample_slots())
                .with_clock(fixed_clock);
        (registry, notifier)
    }

    fn dr_x() -> NewSlot {
        NewSlot {
            professional_name: "Dr. X".to_string(),
            specialty: "Neurología".to_string(),
            date: "2024-12-20".to_string(),
            time: "11:00".to_string(),
            facility: "Centro Médico San Juan".to_string(),
        }
    }

    #[test]
    fn add_to_seeded_registry() {
        let (mut registry, notifier) = seeded();
        assert_eq!(registry.stats().available_count, 2);

        let slot = registry.add(dr_x()).unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.stats().available_count, 3);
        assert!(slot.available);
        assert_eq!(slot.specialty, Specialty::Neurology);
        assert_eq!(slot.date, NaiveDate::from_ymd(2024, 12, 20));
        assert_eq!(slot.time, NaiveTime::from_hms(11, 0, 0));
        assert_eq!(registry.all().last(), Some(&slot));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].title, "Turno agregado");
    }

    #[test]
    fn add_with_missing_field_changes_nothing() {
        let (mut registry, notifier) = seeded();
        let before = registry.all().to_vec();

        for field in 0..4 {
            let mut input = dr_x();
            match field {
                0 => input.professional_name.clear(),
                1 => input.specialty = "   ".to_string(),
                2 => input.date.clear(),
                _ => input.time.clear(),
            }
            let err = registry.add(input).unwrap_err();
            assert!(matches!(
                err,
                SlotError::Validation(ValidationError::Missing { .. })
            ));
        }

        assert_eq!(registry.all(), before.as_slice());
        let notices = notifier.notices();
        assert_eq!(notices.len(), 4);
        assert!(notices
            .iter()
            .all(|n| n.kind == NoticeKind::Error && n.message == "Por favor completa todos los campos"));
    }

    #[test]
    fn add_rejects_unparseable_values() {
        let (mut registry, _) = seeded();
        let mut input = dr_x();
        input.date = "20/12/2024".to_string();

        assert_eq!(
            registry.add(input),
            Err(SlotError::Validation(ValidationError::Invalid {
                field: "date",
                value: "20/12/2024".to_string(),
            }))
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn empty_facility_uses_default() {
        let (mut registry, _) = seeded();
        let mut input = dr_x();
        input.facility = String::new();

        let slot = registry.add(input).unwrap();
        assert_eq!(slot.facility, DEFAULT_FACILITY);
    }

    #[test]
    fn ids_stay_unique_under_a_frozen_clock() {
        let (mut registry, _) = seeded();
        let a = registry.add(dr_x()).unwrap();
        let b = registry.add(dr_x()).unwrap();
        registry.remove(&b.id);
        let c = registry.add(dr_x()).unwrap();

        assert_eq!(a.id, "1700000000000");
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn ids_skip_past_seeded_ones() {
        fn tiny_clock() -> i64 {
            1
        }
        let mut registry =
            SlotRegistry::with_slots(RecordingNotifier::default(), DEFAULT_FACILITY, seed::sample_slots())
                .with_clock(tiny_clock);

        let slot = registry.add(dr_x()).unwrap();
        assert_eq!(slot.id, "4");
    }

    #[test]
    fn toggle_twice_restores_availability() {
        let (mut registry, notifier) = seeded();

        assert_eq!(registry.toggle_availability("1"), Some(false));
        assert_eq!(registry.toggle_availability("1"), Some(true));
        assert_eq!(registry.get("1").map(|s| s.available), Some(true));

        let titles: Vec<_> = notifier.notices().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Turno deshabilitado", "Turno habilitado"]);
    }

    #[test]
    fn toggle_unknown_id_is_silent() {
        let (mut registry, notifier) = seeded();
        let before = registry.all().to_vec();

        assert_eq!(registry.toggle_availability("missing"), None);
        assert_eq!(registry.all(), before.as_slice());
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let (mut registry, notifier) = seeded();

        let removed = registry.remove("2").unwrap();
        assert_eq!(removed.professional_name, "Dr. Carlos Rodríguez");
        let after_first = registry.all().to_vec();

        assert_eq!(registry.remove("2"), None);
        assert_eq!(registry.all(), after_first.as_slice());
        assert_eq!(registry.len(), 2);
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(
            registry.get_or_err("2"),
            Err(SlotError::NotFound { id: "2".to_string() })
        );
    }

    #[test]
    fn stats_partition_the_collection() {
        let (mut registry, _) = seeded();
        let check = |registry: &SlotRegistry<RecordingNotifier>| {
            let stats = registry.stats();
            assert_eq!(stats.available_count + stats.unavailable_count, registry.len());
        };

        check(&registry);
        let slot = registry.add(dr_x()).unwrap();
        check(&registry);
        registry.toggle_availability(&slot.id);
        check(&registry);
        registry.remove("1");
        check(&registry);

        let stats = registry.stats();
        assert_eq!(stats.available_count, 1);
        assert_eq!(stats.unavailable_count, 2);
        assert_eq!(stats.distinct_specialty_count, 3);
        assert_eq!(stats.distinct_professional_count, 3);
    }

    #[test]
    fn distinct_counts_use_set_semantics() {
        let (mut registry, _) = seeded();
        let mut input = dr_x();
        input.professional_name = "Dr. María González".to_string();
        input.specialty = "Cardiología".to_string();
        registry.add(input).unwrap();

        let stats = registry.stats();
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.distinct_specialty_count, 3);
        assert_eq!(stats.distinct_professional_count, 3);
    }

    #[test]
    fn empty_registry_stats() {
        let registry = SlotRegistry::new(RecordingNotifier::default(), DEFAULT_FACILITY);
        assert!(registry.is_empty());
        assert_eq!(registry.stats(), SlotStats::default());
    }
}
