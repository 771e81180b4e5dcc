//! Sample records the panels start with.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    catalog::{Specialty, DEFAULT_FACILITY},
    history::{HistoryRecord, Status},
    slots::Slot,
};

fn slot(
    id: &str,
    professional_name: &str,
    specialty: Specialty,
    date: NaiveDate,
    time: NaiveTime,
    available: bool,
) -> Slot {
    Slot {
        id: id.to_string(),
        professional_name: professional_name.to_string(),
        specialty,
        facility: DEFAULT_FACILITY.to_string(),
        date,
        time,
        available,
    }
}

pub fn sample_slots() -> Vec<Slot> {
    vec![
        slot(
            "1",
            "Dr. María González",
            Specialty::Cardiology,
            NaiveDate::from_ymd(2024, 12, 15),
            NaiveTime::from_hms(14, 30, 0),
            true,
        ),
        slot(
            "2",
            "Dr. Carlos Rodríguez",
            Specialty::Traumatology,
            NaiveDate::from_ymd(2024, 12, 16),
            NaiveTime::from_hms(10, 0, 0),
            true,
        ),
        slot(
            "3",
            "Dra. Ana Martínez",
            Specialty::Dermatology,
            NaiveDate::from_ymd(2024, 12, 17),
            NaiveTime::from_hms(16, 15, 0),
            false,
        ),
    ]
}

struct Visit<'a> {
    id: &'a str,
    facility: &'a str,
    professional_name: &'a str,
    specialty: Specialty,
    date: (i32, u32, u32),
    time: (u32, u32),
    address: &'a str,
    phone: &'a str,
    status: Status,
    action_date: (i32, u32, u32),
}

impl Visit<'_> {
    fn into_record(self) -> HistoryRecord {
        let (y, m, d) = self.date;
        let (ay, am, ad) = self.action_date;
        HistoryRecord {
            id: self.id.to_string(),
            facility: self.facility.to_string(),
            professional_name: self.professional_name.to_string(),
            specialty: self.specialty,
            date: NaiveDate::from_ymd(y, m, d),
            time: NaiveTime::from_hms(self.time.0, self.time.1, 0),
            address: self.address.to_string(),
            phone: self.phone.to_string(),
            status: self.status,
            action_date: NaiveDate::from_ymd(ay, am, ad),
        }
    }
}

/// One record per status, most recent decision first.
pub fn sample_history() -> Vec<HistoryRecord> {
    vec![
        Visit {
            id: "h1",
            facility: "Centro Médico San Juan",
            professional_name: "Dr. María González",
            specialty: Specialty::Cardiology,
            date: (2024, 12, 10),
            time: (14, 30),
            address: "Av. Corrientes 1234",
            phone: "011-4567-8901",
            status: Status::Completed,
            action_date: (2024, 12, 8),
        },
        Visit {
            id: "h2",
            facility: "Clínica Norte",
            professional_name: "Dr. Carlos Rodríguez",
            specialty: Specialty::Traumatology,
            date: (2024, 12, 5),
            time: (10, 0),
            address: "Av. Santa Fe 5678",
            phone: "011-4567-8902",
            status: Status::Rejected,
            action_date: (2024, 12, 3),
        },
        Visit {
            id: "h3",
            facility: "Hospital Central",
            professional_name: "Dra. Ana Martínez",
            specialty: Specialty::Dermatology,
            date: (2024, 11, 28),
            time: (16, 15),
            address: "Av. Rivadavia 9012",
            phone: "011-4567-8903",
            status: Status::Cancelled,
            action_date: (2024, 11, 26),
        },
        Visit {
            id: "h4",
            facility: "Centro Médico Belgrano",
            professional_name: "Dr. Luis Fernández",
            specialty: Specialty::Ophthalmology,
            date: (2024, 12, 20),
            time: (9, 0),
            address: "Av. Cabildo 2345",
            phone: "011-4567-8904",
            status: Status::Confirmed,
            action_date: (2024, 12, 12),
        },
    ]
    .into_iter()
    .map(Visit::into_record)
    .collect()
}
