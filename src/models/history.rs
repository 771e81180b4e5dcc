use chrono::{NaiveDate, NaiveTime};
use std::{fmt, str::FromStr};

use super::catalog::Specialty;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Confirmed,
    Rejected,
    Cancelled,
    Completed,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Confirmed,
        Status::Rejected,
        Status::Cancelled,
        Status::Completed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Status::Confirmed => "confirmed",
            Status::Rejected => "rejected",
            Status::Cancelled => "cancelled",
            Status::Completed => "completed",
        }
    }

    /// Badge text in the history view.
    pub fn label(self) -> &'static str {
        match self {
            Status::Confirmed => "Confirmado",
            Status::Rejected => "Rechazado",
            Status::Cancelled => "Cancelado",
            Status::Completed => "Completado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Status {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::utils::normalize_label(s).as_str() {
            "confirmed" | "aceptado" | "confirmado" => Ok(Status::Confirmed),
            "rejected" | "rechazado" => Ok(Status::Rejected),
            "cancelled" | "canceled" | "cancelado" => Ok(Status::Cancelled),
            "completed" | "completado" => Ok(Status::Completed),
            _ => Err(ParseError::UnknownStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        StatusFilter::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::utils::normalize_label(s).as_str() {
            "all" | "todos" => Ok(StatusFilter::All),
            _ => s.parse().map(StatusFilter::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub id: String,
    pub facility: String,
    pub professional_name: String,
    pub specialty: Specialty,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub address: String,
    pub phone: String,
    pub status: Status,
    pub action_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCounts {
    pub confirmed: usize,
    pub rejected: usize,
    pub cancelled: usize,
    pub completed: usize,
}

impl HistoryCounts {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Confirmed => self.confirmed,
            Status::Rejected => self.rejected,
            Status::Cancelled => self.cancelled,
            Status::Completed => self.completed,
        }
    }

    pub(crate) fn bump(&mut self, status: Status) {
        match status {
            Status::Confirmed => self.confirmed += 1,
            Status::Rejected => self.rejected += 1,
            Status::Cancelled => self.cancelled += 1,
            Status::Completed => self.completed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.confirmed + self.rejected + self.cancelled + self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_spanish_keys() {
        assert_eq!("completed".parse::<Status>(), Ok(Status::Completed));
        assert_eq!("aceptado".parse::<Status>(), Ok(Status::Confirmed));
        assert_eq!("Canceled".parse::<Status>(), Ok(Status::Cancelled));
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn filter_sentinel() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("todos".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "rechazado".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(Status::Rejected))
        );
        assert_eq!(
            "nope".parse::<StatusFilter>(),
            Err(ParseError::UnknownStatus("nope".to_string()))
        );
    }

    #[test]
    fn only_filter_matches_single_status() {
        let filter = StatusFilter::from(Status::Completed);
        assert!(filter.matches(Status::Completed));
        assert!(!filter.matches(Status::Cancelled));
        assert!(Status::ALL.iter().all(|s| StatusFilter::All.matches(*s)));
    }
}
