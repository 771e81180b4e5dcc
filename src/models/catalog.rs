use std::{fmt, str::FromStr};

use crate::error::ParseError;

pub const DEFAULT_FACILITY: &str = "Centro Médico San Juan";

pub const PROFESSIONALS: [&str; 6] = [
    "Dr. María González",
    "Dr. Carlos Rodríguez",
    "Dra. Ana Martínez",
    "Dr. Luis Fernández",
    "Dra. Carmen López",
    "Dr. Roberto Silva",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    Cardiology,
    Traumatology,
    Dermatology,
    Ophthalmology,
    Neurology,
    Pediatrics,
    Gynecology,
    Urology,
}

impl Specialty {
    pub const ALL: [Specialty; 8] = [
        Specialty::Cardiology,
        Specialty::Traumatology,
        Specialty::Dermatology,
        Specialty::Ophthalmology,
        Specialty::Neurology,
        Specialty::Pediatrics,
        Specialty::Gynecology,
        Specialty::Urology,
    ];

    /// Label shown in the admin form and on slot badges.
    pub fn label(self) -> &'static str {
        match self {
            Specialty::Cardiology => "Cardiología",
            Specialty::Traumatology => "Traumatología",
            Specialty::Dermatology => "Dermatología",
            Specialty::Ophthalmology => "Oftalmología",
            Specialty::Neurology => "Neurología",
            Specialty::Pediatrics => "Pediatría",
            Specialty::Gynecology => "Ginecología",
            Specialty::Urology => "Urología",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiology",
            Specialty::Traumatology => "traumatology",
            Specialty::Dermatology => "dermatology",
            Specialty::Ophthalmology => "ophthalmology",
            Specialty::Neurology => "neurology",
            Specialty::Pediatrics => "pediatrics",
            Specialty::Gynecology => "gynecology",
            Specialty::Urology => "urology",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialty {
    type Err = ParseError;

    /// Accepts the Spanish label with or without accents, or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = crate::utils::normalize_label(s);
        Specialty::ALL
            .iter()
            .copied()
            .find(|sp| crate::utils::normalize_label(sp.label()) == key || sp.english_name() == key)
            .ok_or_else(|| ParseError::UnknownSpecialty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_loosely() {
        assert_eq!("Neurología".parse::<Specialty>(), Ok(Specialty::Neurology));
        assert_eq!("  neurologia ".parse::<Specialty>(), Ok(Specialty::Neurology));
        assert_eq!("PEDIATRICS".parse::<Specialty>(), Ok(Specialty::Pediatrics));
    }

    #[test]
    fn rejects_unknown_specialty() {
        assert_eq!(
            "Odontología".parse::<Specialty>(),
            Err(ParseError::UnknownSpecialty("Odontología".to_string()))
        );
    }

    #[test]
    fn display_uses_label() {
        for sp in Specialty::ALL.iter() {
            assert_eq!(sp.to_string().parse::<Specialty>(), Ok(*sp));
        }
    }
}
