//! # Public API
//!
//! Entry points used by the command line front end and by anything embedding the
//! converter.
//!
//! - [`convert()`] - Project text straight to CSV
//! - [`convert_project()`] - Already parsed project to CSV
//! - [`read_project()`] / [`write_document()`] - File access for the front end
//!
//! ## Typical Usage
//!
//! ```rust
//! use reacue::{convert, RawSettings};
//! use std::path::Path;
//!
//! let rpp = r#"
//!   TEMPO 120 4 4 0
//!   MARKER 1 0 "Start"
//!   MARKER 2 5 "Cue A"
//! "#;
//!
//! let options = RawSettings::default().resolve(Path::new("Show.rpp"))?;
//! let csv = convert(rpp, &options);
//! assert!(csv.contains("28,Event,1,2,1,\"Cue A\",00:00:05:00,,,Cue  1 / 2"));
//! # Ok::<(), reacue::ReaCueError>(())
//! ```

use crate::{parse, to_show_data, Project, ReaCueError, ShowDataOptions};
use std::path::Path;

/// Convert REAPER project text to an Eos show data CSV document.
///
/// # Pipeline
/// 1. Extract markers and tempo
/// 2. Number cues and convert marker times to timecode
/// 3. Write the SHOWCONTROL section and, if enabled, the TARGETS section
///
/// Never fails: text without markers produces a document with only headers.
pub fn convert(project_text: &str, options: &ShowDataOptions) -> String {
    let project = parse(project_text);
    convert_project(&project, options)
}

/// Convert a parsed project.
pub fn convert_project(project: &Project, options: &ShowDataOptions) -> String {
    tracing::debug!(
        markers = project.markers.len(),
        timecode_source = %options.timecode_source,
        smart_cue_numbers = options.smart_cue_numbers,
        create_cues = options.create_cues,
        "assembling show data"
    );
    to_show_data(&project.markers, &project.tempo, options)
}

/// Read a project file as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_project(path: &Path) -> Result<String, ReaCueError> {
    let bytes = std::fs::read(path).map_err(|source| ReaCueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a show data document exactly as assembled
pub fn write_document(path: &Path, document: &str) -> Result<(), ReaCueError> {
    std::fs::write(path, document).map_err(|source| ReaCueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(())
}
