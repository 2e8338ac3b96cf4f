//! # Project Text Parser
//!
//! Pulls `MARKER` and `TEMPO` lines out of REAPER's `.rpp` project text.
//!
//! ## Recognized Lines
//! ```text
//! MARKER <id> <time> <"name"|'name'|name> ...
//! TEMPO <bpm> <numerator> <denominator> <basis 0-5> ...
//! ```
//!
//! Everything else in the project (tracks, items, envelopes...) is ignored. A line
//! that looks like a marker but carries a number that doesn't parse (`1.2.3` as a
//! time, an id too large for `u32`) is dropped as a whole and scanning carries on.
//!
//! ## Example
//! ```rust
//! use reacue::parse;
//!
//! let project = parse("  MARKER 2 4.5 \"Chorus\" 0\n  MARKER 1 0 Intro\n  TEMPO 90 3 4 0");
//! assert_eq!(project.markers[0].name, "Intro");
//! assert_eq!(project.markers[1].time, 4.5);
//! assert_eq!(project.tempo.bpm, 90.0);
//! ```

use crate::project::{Marker, Project, Tempo, TimeBasis};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Compiled once and never mutated; every call iterates with its own cursor.
static MARKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*MARKER\s+(\d+)\s+([0-9.]+)\s+(?:"([^"]*)"|'([^']*)'|(\S+))"#)
        .expect("marker pattern is valid")
});

static TEMPO_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*TEMPO\s(\d+)\s(\d+)\s(\d+)\s([0-5])").expect("tempo pattern is valid")
});

/// Parse markers and tempo from project text
pub fn parse(input: &str) -> Project {
    let project = Project {
        markers: parse_markers(input),
        tempo: parse_tempo(input),
    };
    tracing::debug!(
        markers = project.markers.len(),
        bpm = project.tempo.bpm,
        "parsed project"
    );
    project
}

/// All markers in the project, sorted by time (stable)
pub fn parse_markers(input: &str) -> Vec<Marker> {
    let mut markers: Vec<Marker> = input
        .lines()
        .filter_map(|line| {
            let caps = MARKER_LINE.captures(line)?;
            let marker = marker_from_captures(&caps);
            if marker.is_none() {
                tracing::trace!(line, "discarding marker line with malformed number");
            }
            marker
        })
        .collect();

    // sort_by is stable, equal times keep file order
    markers.sort_by(|a, b| a.time.total_cmp(&b.time));
    markers
}

fn marker_from_captures(caps: &Captures) -> Option<Marker> {
    let id = caps[1].parse::<u32>().ok()?;
    let time = caps[2].parse::<f64>().ok()?;
    let name = caps
        .get(3)
        .or_else(|| caps.get(4))
        .or_else(|| caps.get(5))
        .map_or("", |m| m.as_str());

    Some(Marker::new(id, time, name))
}

/// The first valid TEMPO line, or the default tempo when there is none
pub fn parse_tempo(input: &str) -> Tempo {
    input
        .lines()
        .filter_map(|line| TEMPO_LINE.captures(line))
        .find_map(|caps| tempo_from_captures(&caps))
        .unwrap_or_else(|| {
            tracing::debug!("no TEMPO line found, using default tempo");
            Tempo::default()
        })
}

fn tempo_from_captures(caps: &Captures) -> Option<Tempo> {
    let bpm = caps[1].parse::<u32>().ok().filter(|&v| v > 0)?;
    let numerator = caps[2].parse::<u32>().ok().filter(|&v| v > 0)?;
    let denominator = caps[3].parse::<u32>().ok().filter(|&v| v > 0)?;
    let time_basis = caps[4].parse::<u8>().ok().and_then(TimeBasis::new)?;

    Some(Tempo {
        bpm: f64::from(bpm),
        numerator,
        denominator,
        time_basis,
    })
}
