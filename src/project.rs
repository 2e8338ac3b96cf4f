//! # Project Types
//!
//! The slice of a REAPER project that the converter cares about.
//!
//! ```text
//! Project
//!   ├── Vec<Marker> (sorted by time, ties keep file order)
//!   │     ├── id: u32 (marker number in REAPER, may repeat for regions)
//!   │     ├── time: f64 (seconds from project start)
//!   │     └── name: String (quotes stripped)
//!   └── Tempo (first TEMPO line or 120 bpm 4/4)
//!         ├── bpm: f64
//!         ├── numerator / denominator: u32
//!         └── time_basis: TimeBasis (0-5)
//! ```
//!
//! ## Related Modules
//! - `parser` - Builds a `Project` from `.rpp` text
//! - `cue` - Uses `Tempo` for smart cue numbers
//! - `showdata` - Turns markers into CSV rows

use serde::Serialize;

/// A named position on the project timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: u32,
    pub time: f64,
    pub name: String,
}

impl Marker {
    pub fn new(id: u32, time: f64, name: impl Into<String>) -> Self {
        Self {
            id,
            time,
            name: name.into(),
        }
    }
}

/// The fourth TEMPO field. Carried through as-is, only 0 to 5 are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TimeBasis(u8);

impl TimeBasis {
    pub fn new(code: u8) -> Option<Self> {
        (code <= 5).then_some(Self(code))
    }

    pub fn code(&self) -> u8 {
        self.0
    }
}

/// Project tempo and time signature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tempo {
    pub bpm: f64,
    pub numerator: u32,   // Beats per measure
    pub denominator: u32, // Not used for numbering
    pub time_basis: TimeBasis,
}

impl Default for Tempo {
    fn default() -> Self {
        Self {
            bpm: 120.0,
            numerator: 4,
            denominator: 4,
            time_basis: TimeBasis::default(),
        }
    }
}

impl Tempo {
    /// Length of one beat in seconds
    pub fn seconds_per_beat(&self) -> f64 {
        60.0 / self.bpm
    }
}

/// Everything the parser extracts from a project file
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Project {
    pub markers: Vec<Marker>,
    pub tempo: Tempo,
}
