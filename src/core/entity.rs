//! POS entity model and its creation/update inputs
//!
//! A [`Pos`] is a physical coffee-sale location on a campus. Identity
//! (`id`) and timestamps (`created_at`, `updated_at`) are always assigned
//! by the service, never by the caller; the wire contract uses camelCase
//! field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of point of sale. Closed set; unrecognized wire values are a
/// request-validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosType {
    Cafeteria,
    Cafe,
    Kiosk,
    VendingMachine,
}

impl FromStr for PosType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAFETERIA" => Ok(Self::Cafeteria),
            "CAFE" => Ok(Self::Cafe),
            "KIOSK" => Ok(Self::Kiosk),
            "VENDING_MACHINE" => Ok(Self::VendingMachine),
            other => Err(format!("unknown POS type '{}'", other)),
        }
    }
}

impl fmt::Display for PosType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Cafeteria => "CAFETERIA",
            Self::Cafe => "CAFE",
            Self::Kiosk => "KIOSK",
            Self::VendingMachine => "VENDING_MACHINE",
        };
        write!(f, "{}", s)
    }
}

/// Campus a point of sale belongs to. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampusType {
    Main,
    North,
    South,
    Downtown,
}

impl FromStr for CampusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAIN" => Ok(Self::Main),
            "NORTH" => Ok(Self::North),
            "SOUTH" => Ok(Self::South),
            "DOWNTOWN" => Ok(Self::Downtown),
            other => Err(format!("unknown campus '{}'", other)),
        }
    }
}

impl fmt::Display for CampusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Main => "MAIN",
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::Downtown => "DOWNTOWN",
        };
        write!(f, "{}", s)
    }
}

/// A point-of-sale record.
///
/// `id` is immutable once assigned and never reused, even after a catalog
/// reset. `created_at` is set exactly once; `updated_at` is refreshed on
/// every successful update, so `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pos {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub pos_type: PosType,
    pub campus: CampusType,
    pub street: String,
    pub house_number: String,
    pub postal_code: u32,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pos {
    /// Build a fully-formed record from a creation input, assigning a fresh
    /// identity and `created_at = updated_at = now`.
    pub fn new(input: NewPos) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            pos_type: input.pos_type,
            campus: input.campus,
            street: input.street,
            house_number: input.house_number,
            postal_code: input.postal_code,
            city: input.city,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields from an update payload, keeping `id` and
    /// `created_at` and refreshing `updated_at`.
    pub fn apply(&mut self, update: PosUpdate) {
        self.name = update.name;
        self.description = update.description;
        self.pos_type = update.pos_type;
        self.campus = update.campus;
        self.street = update.street;
        self.house_number = update.house_number;
        self.postal_code = update.postal_code;
        self.city = update.city;
        self.touch();
    }

    /// Refresh the update timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Creation input: every field of a [`Pos`] except identity and timestamps.
///
/// An `id` or timestamps present in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPos {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub pos_type: PosType,
    pub campus: CampusType,
    pub street: String,
    pub house_number: String,
    pub postal_code: u32,
    pub city: String,
}

/// Update input: the full field set plus an optional `id`.
///
/// When `id` is present the target record is matched by id; otherwise the
/// first record with the same `name` (in insertion order) is the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosUpdate {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub pos_type: PosType,
    pub campus: CampusType,
    pub street: String,
    pub house_number: String,
    pub postal_code: u32,
    pub city: String,
}
