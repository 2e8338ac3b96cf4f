//! # Show Data Options
//!
//! `ShowDataOptions` is the fully resolved configuration the converter runs with.
//! Every field is required. Defaults live in exactly one place,
//! [`RawSettings::resolve`], which turns the optional values coming from a YAML
//! settings file and the command line into a complete `ShowDataOptions`.
//!
//! ## Settings File
//! ```yaml
//! timecode-source: smpte
//! timecode-offset: "01:00:00:00"
//! event-list: 2
//! first-event: 1
//! cue-list: 5
//! first-cue: 100
//! create-cue-links: true
//! create-cues: true
//! smart-cue-numbers: false
//! project-name: Opening Night
//! ```

use crate::error::ReaCueError;
use crate::time::Timecode;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Where Eos receives timecode from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimecodeSource {
    #[default]
    Midi,
    Smpte,
}

impl TimecodeSource {
    /// Numeric code Eos uses for the source (also the event part number)
    pub fn code(&self) -> u8 {
        match self {
            TimecodeSource::Midi => 1,
            TimecodeSource::Smpte => 2,
        }
    }

    /// Label written into the source row
    pub fn label(&self) -> &'static str {
        match self {
            TimecodeSource::Midi => "MIDI",
            TimecodeSource::Smpte => "SMPTE",
        }
    }
}

impl fmt::Display for TimecodeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimecodeSource::Midi => write!(f, "midi"),
            TimecodeSource::Smpte => write!(f, "smpte"),
        }
    }
}

impl FromStr for TimecodeSource {
    type Err = ReaCueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midi" => Ok(TimecodeSource::Midi),
            "smpte" => Ok(TimecodeSource::Smpte),
            other => Err(ReaCueError::InvalidOption {
                name: "timecode-source",
                message: format!("expected 'midi' or 'smpte', got '{}'", other),
            }),
        }
    }
}

/// Resolved conversion options
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDataOptions {
    pub timecode_source: TimecodeSource,
    pub timecode_offset: Timecode,
    pub event_list: u32,
    pub first_event: u32,
    pub cue_list: u32,
    pub first_cue: u32,
    pub create_cue_links: bool,
    pub create_cues: bool,
    pub smart_cue_numbers: bool,
    pub project_name: String,
}

/// Optional settings, as read from YAML or collected from the command line
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub timecode_source: Option<TimecodeSource>,
    pub timecode_offset: Option<String>,
    pub event_list: Option<u32>,
    pub first_event: Option<u32>,
    pub cue_list: Option<u32>,
    pub first_cue: Option<u32>,
    pub create_cue_links: Option<bool>,
    pub create_cues: Option<bool>,
    pub smart_cue_numbers: Option<bool>,
    pub project_name: Option<String>,
}

impl RawSettings {
    /// Parse a YAML settings document
    pub fn from_yaml(content: &str) -> Result<Self, ReaCueError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ReaCueError::Settings(e.to_string()))
    }

    /// Read a YAML settings file
    pub fn load(path: &Path) -> Result<Self, ReaCueError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReaCueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Fill unset fields from `other`; values already set in `self` win
    pub fn or(self, other: RawSettings) -> Self {
        Self {
            timecode_source: self.timecode_source.or(other.timecode_source),
            timecode_offset: self.timecode_offset.or(other.timecode_offset),
            event_list: self.event_list.or(other.event_list),
            first_event: self.first_event.or(other.first_event),
            cue_list: self.cue_list.or(other.cue_list),
            first_cue: self.first_cue.or(other.first_cue),
            create_cue_links: self.create_cue_links.or(other.create_cue_links),
            create_cues: self.create_cues.or(other.create_cues),
            smart_cue_numbers: self.smart_cue_numbers.or(other.smart_cue_numbers),
            project_name: self.project_name.or(other.project_name),
        }
    }

    /// Assign defaults and validate. `source` is the project file, used for the
    /// default project name.
    pub fn resolve(self, source: &Path) -> Result<ShowDataOptions, ReaCueError> {
        let timecode_offset = self
            .timecode_offset
            .as_deref()
            .map(parse_offset)
            .transpose()?
            .unwrap_or(Timecode::ZERO);

        let project_name = match self.project_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => project_name_from_path(source),
        };

        Ok(ShowDataOptions {
            timecode_source: self.timecode_source.unwrap_or_default(),
            timecode_offset,
            event_list: at_least_one("event-list", self.event_list)?,
            first_event: at_least_one("first-event", self.first_event)?,
            cue_list: at_least_one("cue-list", self.cue_list)?,
            first_cue: at_least_one("first-cue", self.first_cue)?,
            create_cue_links: self.create_cue_links.unwrap_or(true),
            create_cues: self.create_cues.unwrap_or(false),
            smart_cue_numbers: self.smart_cue_numbers.unwrap_or(false),
            project_name,
        })
    }
}

fn at_least_one(name: &'static str, value: Option<u32>) -> Result<u32, ReaCueError> {
    match value {
        None => Ok(1),
        Some(0) => Err(ReaCueError::InvalidOption {
            name,
            message: "must be at least 1".to_string(),
        }),
        Some(v) => Ok(v),
    }
}

/// Offsets may only contain digits and colons, like the masked input they come
/// from. Fields are then carried and clamped to a day.
fn parse_offset(value: &str) -> Result<Timecode, ReaCueError> {
    let value = value.trim();
    if !value.chars().all(|c| c.is_ascii_digit() || c == ':') || value.split(':').count() > 4 {
        return Err(ReaCueError::InvalidOption {
            name: "timecode-offset",
            message: format!("expected HH:MM:SS:FF, got '{}'", value),
        });
    }
    let timecode: Timecode = value.parse().unwrap_or_default();
    Ok(timecode.normalized())
}

/// File name without the `.rpp` extension
pub fn project_name_from_path(path: &Path) -> String {
    let is_rpp = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("rpp"));
    let name = if is_rpp { path.file_stem() } else { path.file_name() };

    name.map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Name of the CSV written for a project
pub fn output_file_name(project_name: &str) -> String {
    format!("ReaCue_ShowData_{}.csv", project_name)
}
