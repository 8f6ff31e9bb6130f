//! Domain value objects: Role, FuelType, RegistryStatus.
//!
//! These are pure value types, `Copy` and compared by value. Each has a
//! canonical string form (`as_str` / `Display`) and a `FromStr` parser.

use crate::domain::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Role ──────────────────────────────────────────────────────────────────────

/// Employee job title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    President,
    VicePresident,
    Manager,
    Lead,
    Worker,
    Intern,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Self::President,
        Self::VicePresident,
        Self::Manager,
        Self::Lead,
        Self::Worker,
        Self::Intern,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::President => "president",
            Self::VicePresident => "vicepresident",
            Self::Manager => "manager",
            Self::Lead => "lead",
            Self::Worker => "worker",
            Self::Intern => "intern",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "president" => Ok(Self::President),
            "vicepresident" | "vice-president" | "vice_president" | "vp" => {
                Ok(Self::VicePresident)
            }
            "manager" => Ok(Self::Manager),
            "lead" => Ok(Self::Lead),
            "worker" => Ok(Self::Worker),
            "intern" => Ok(Self::Intern),
            other => Err(DomainError::InvalidValue {
                kind: "role",
                value: other.to_owned(),
            }),
        }
    }
}

// ── FuelType ──────────────────────────────────────────────────────────────────

/// Fuel a vehicle model runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Electric,
    Petrol,
    Diesel,
}

impl FuelType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electric => "electric",
            Self::Petrol => "petrol",
            Self::Diesel => "diesel",
        }
    }

    /// Registration tax as a fraction of the catalogue price.
    pub fn tax_rate(self) -> Decimal {
        match self {
            Self::Electric => Decimal::new(2, 2),
            Self::Petrol | Self::Diesel => Decimal::new(5, 2),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "electric" | "ev" => Ok(Self::Electric),
            "petrol" | "gasoline" => Ok(Self::Petrol),
            "diesel" => Ok(Self::Diesel),
            other => Err(DomainError::InvalidValue {
                kind: "fuel type",
                value: other.to_owned(),
            }),
        }
    }
}

// ── RegistryStatus ────────────────────────────────────────────────────────────

/// Reported availability of a vehicle registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistryStatus {
    Online,
    ConnectionError,
    Offline,
}

impl RegistryStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::ConnectionError => "CONNECTION_ERROR",
            Self::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for RegistryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
