//! The fixed set of monitored cities

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A monitored metro city.
///
/// The set is closed: the selector only ever offers these, so there is no
/// way to select anything else.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
pub enum City {
    #[default]
    Delhi,
    Mumbai,
    Chennai,
    Bangalore,
    Kolkata,
    Hyderabad,
}

impl City {
    /// All cities in selector order
    pub const ALL: [City; 6] = [
        City::Delhi,
        City::Mumbai,
        City::Chennai,
        City::Bangalore,
        City::Kolkata,
        City::Hyderabad,
    ];

    /// Display name, also used as the `q` parameter for both weather APIs
    pub fn name(self) -> &'static str {
        match self {
            City::Delhi => "Delhi",
            City::Mumbai => "Mumbai",
            City::Chennai => "Chennai",
            City::Bangalore => "Bangalore",
            City::Kolkata => "Kolkata",
            City::Hyderabad => "Hyderabad",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
