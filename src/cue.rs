//! # Cue Numbering
//!
//! Every marker becomes one cue. The cue number is either a plain counter starting
//! at the configured first cue, or a "smart" number read off the musical position
//! of the marker: `measure.beat` with the beat given in hundredths (`3.450` is
//! measure 3, beat 4.50).
//!
//! Smart numbers are not deduplicated. Two markers inside the same hundredth of a
//! beat get the same cue number.

use crate::project::{Marker, Tempo};
use crate::time::MusicalPosition;

/// How cue numbers are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueNumbering {
    /// `first_cue`, `first_cue + 1`, ...
    Sequential { first_cue: u32 },
    /// Measure and beat of the marker at the project tempo
    Smart,
}

impl CueNumbering {
    pub fn new(smart_cue_numbers: bool, first_cue: u32) -> Self {
        if smart_cue_numbers {
            CueNumbering::Smart
        } else {
            CueNumbering::Sequential { first_cue }
        }
    }
}

/// Cue identifier for the marker at `index` (0-based, in time order)
pub fn cue_number(numbering: CueNumbering, marker: &Marker, index: usize, tempo: &Tempo) -> String {
    match numbering {
        CueNumbering::Sequential { first_cue } => (u64::from(first_cue) + index as u64).to_string(),
        CueNumbering::Smart => MusicalPosition::from_seconds(marker.time, tempo).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_at(time: f64) -> Marker {
        Marker::new(1, time, "m")
    }

    #[test]
    fn test_sequential_numbers() {
        let numbering = CueNumbering::new(false, 5);
        let tempo = Tempo::default();
        let cues: Vec<String> = (0..3)
            .map(|i| cue_number(numbering, &marker_at(i as f64), i, &tempo))
            .collect();
        assert_eq!(cues, vec!["5", "6", "7"]);
    }

    #[test]
    fn test_smart_number_on_downbeat() {
        let tempo = Tempo {
            bpm: 120.0,
            numerator: 4,
            ..Tempo::default()
        };
        let cue = cue_number(CueNumbering::new(true, 1), &marker_at(2.0), 0, &tempo);
        assert_eq!(cue, "2.100");
    }

    #[test]
    fn test_smart_number_ignores_index_and_first_cue() {
        let tempo = Tempo::default();
        let numbering = CueNumbering::new(true, 40);
        assert_eq!(numbering, CueNumbering::Smart);
        assert_eq!(cue_number(numbering, &marker_at(0.0), 7, &tempo), "1.100");
    }

    #[test]
    fn test_smart_numbers_in_three_four() {
        // 90 bpm, 3/4: 1 beat = 2/3 s
        let tempo = Tempo {
            bpm: 90.0,
            numerator: 3,
            ..Tempo::default()
        };
        assert_eq!(cue_number(CueNumbering::Smart, &marker_at(2.0), 0, &tempo), "2.100");
        assert_eq!(cue_number(CueNumbering::Smart, &marker_at(1.0), 0, &tempo), "1.250");
    }

    #[test]
    fn test_smart_numbers_can_collide() {
        let tempo = Tempo::default();
        let a = cue_number(CueNumbering::Smart, &marker_at(1.0), 0, &tempo);
        let b = cue_number(CueNumbering::Smart, &marker_at(1.0001), 1, &tempo);
        assert_eq!(a, b);
    }
}
