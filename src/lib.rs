pub mod api;
pub mod cue;
pub mod error;
pub mod options;
pub mod parser;
pub mod project;
pub mod showdata;
pub mod time;

pub use api::{convert, convert_project, read_project, write_document};
pub use cue::{cue_number, CueNumbering};
pub use error::*;
pub use options::{output_file_name, project_name_from_path, RawSettings, ShowDataOptions, TimecodeSource};
pub use parser::{parse, parse_markers, parse_tempo};
pub use project::*;
pub use showdata::{build_entries, showcontrol_section, targets_section, to_show_data, ShowDataEntry};
pub use time::{seconds_to_timecode, timecode_to_seconds, MusicalPosition, Timecode, FRAME_RATE};
