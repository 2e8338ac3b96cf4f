//! # Time Conversion
//!
//! Converts between seconds, `HH:MM:SS:FF` timecode and musical position.
//!
//! ## Timecode
//! Timecode runs at a fixed 30 frames per second, the rate REAPER and Eos have to
//! agree on. The hour field is not wrapped at 24 hours; it simply keeps growing.
//!
//! Offsets are always added in seconds, so `00:00:50:00 + 00:00:20:00` carries into
//! the minutes and gives `00:01:10:00`.
//!
//! ## Musical Position
//! A position is a 1-based measure plus the beat inside that measure scaled by 100
//! (`450` = beat 4.50). Beats are counted at the project tempo and grouped by the time
//! signature numerator.

use crate::project::Tempo;
use std::fmt;
use std::str::FromStr;

/// Frames per second for every timecode
pub const FRAME_RATE: u32 = 30;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

// Fraction of a frame treated as rounding error when flooring. A time within
// 1e-7 frames below a frame boundary counts as that frame, so 0.999999997 s is
// 00:00:01:00 and not 00:00:00:29.
const FRAME_TOLERANCE: f64 = 1e-7;

/// Format seconds as `HH:MM:SS:FF`
pub fn seconds_to_timecode(seconds: f64) -> String {
    Timecode::from_seconds(seconds).to_string()
}

/// Parse a `HH:MM:SS:FF` string into seconds. Missing or malformed fields count as 0.
pub fn timecode_to_seconds(timecode: &str) -> f64 {
    timecode
        .parse::<Timecode>()
        .map(|tc| tc.to_seconds())
        .unwrap_or(0.0)
}

/// A timecode value. Fields are not required to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timecode {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub frames: u64,
}

impl Timecode {
    pub const ZERO: Timecode = Timecode {
        hours: 0,
        minutes: 0,
        seconds: 0,
        frames: 0,
    };

    /// Largest value the offset input accepts
    pub const MAX_OFFSET: Timecode = Timecode {
        hours: 23,
        minutes: 59,
        seconds: 59,
        frames: FRAME_RATE as u64 - 1,
    };

    pub fn new(hours: u64, minutes: u64, seconds: u64, frames: u64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Split seconds into timecode fields, rounding frames down.
    /// Negative and non-finite input is treated as zero.
    ///
    /// Works on a whole frame count so that `n / 30` seconds always lands on frame
    /// `n` instead of `n - 1` through floating point error.
    pub fn from_seconds(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::ZERO;
        }

        let fps = u64::from(FRAME_RATE);
        let total_frames = (seconds * f64::from(FRAME_RATE) + FRAME_TOLERANCE).floor() as u64;
        let total_seconds = total_frames / fps;

        Self {
            hours: total_seconds / SECONDS_PER_HOUR,
            minutes: total_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            frames: total_frames % fps,
        }
    }

    pub fn to_seconds(&self) -> f64 {
        (self.hours * SECONDS_PER_HOUR + self.minutes * SECONDS_PER_MINUTE + self.seconds) as f64
            + self.frames as f64 / f64::from(FRAME_RATE)
    }

    /// Carry overflowing fields upward. Anything at or past 24 hours
    /// clamps to `23:59:59:29`.
    pub fn normalized(&self) -> Self {
        let fps = u64::from(FRAME_RATE);
        let seconds = self.seconds + self.frames / fps;
        let minutes = self.minutes + seconds / 60;
        let hours = self.hours + minutes / 60;

        if hours >= 24 {
            return Self::MAX_OFFSET;
        }

        Self {
            hours,
            minutes: minutes % 60,
            seconds: seconds % 60,
            frames: self.frames % fps,
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

impl FromStr for Timecode {
    type Err = std::convert::Infallible;

    /// Lenient parse: fields are read left to right as hours, minutes, seconds,
    /// frames. Missing or non-numeric fields become 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s
            .trim()
            .split(':')
            .map(|field| field.trim().parse::<u64>().unwrap_or(0));

        Ok(Self {
            hours: fields.next().unwrap_or(0),
            minutes: fields.next().unwrap_or(0),
            seconds: fields.next().unwrap_or(0),
            frames: fields.next().unwrap_or(0),
        })
    }
}

/// Position in measures and beats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicalPosition {
    /// 1-based measure number
    pub measure: u64,
    /// 1-based beat inside the measure, times 100
    pub beat_hundredths: u64,
}

impl MusicalPosition {
    /// Locate a time (seconds) on the beat grid of `tempo`.
    ///
    /// The beat count is rounded to 3 decimals first so that floating point noise
    /// doesn't push a marker that sits on a beat into the previous one.
    pub fn from_seconds(seconds: f64, tempo: &Tempo) -> Self {
        let beats = (seconds * tempo.bpm / 60.0 * 1000.0).round() / 1000.0;
        let beats = if beats.is_finite() { beats.max(0.0) } else { 0.0 };
        let numerator = f64::from(tempo.numerator.max(1));

        Self {
            measure: (beats / numerator).floor() as u64 + 1,
            beat_hundredths: ((beats % numerator + 1.0) * 100.0).round() as u64,
        }
    }

    /// Seconds from project start to this position
    pub fn to_seconds(&self, tempo: &Tempo) -> f64 {
        let numerator = f64::from(tempo.numerator.max(1));
        let beats = self.measure.saturating_sub(1) as f64 * numerator
            + self.beat_hundredths as f64 / 100.0
            - 1.0;
        beats.max(0.0) * tempo.seconds_per_beat()
    }
}

impl fmt::Display for MusicalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.measure, self.beat_hundredths)
    }
}
