//! # Show Data Assembler
//!
//! Builds the Eos show-control CSV from parsed markers.
//!
//! ## Document Layout
//! ```text
//! START_SHOWCONTROL
//! <column header>
//! 28,Event,<list>,0,<1|2>,,,,Source 1 External,<MIDI|SMPTE>
//! 28,Event,<list>,<event>,<1|2>,"<label>",<HH:MM:SS:FF>,,,<Cue  <list> / <cue>>
//! END_SHOWCONTROL
//! START_TARGETS            (only with create_cues)
//! <column header>
//! 15,Cue_List,,<list>,ReaCue-CueList-<list>,,<project>
//! 1,Cue,<list>,<cue>,ReaCue-Cue-<list>-<event>,,<label>
//! END_TARGETS
//! ```
//!
//! Lines are joined with `\n` and the document does not end with a newline.

use crate::cue::{cue_number, CueNumbering};
use crate::options::ShowDataOptions;
use crate::project::{Marker, Tempo};
use crate::time::seconds_to_timecode;

const EVENT_TARGET_TYPE: u8 = 28;
const CUE_LIST_TARGET_TYPE: u8 = 15;
const CUE_TARGET_TYPE: u8 = 1;

const SHOWCONTROL_COLUMNS: &str =
    "TARGET_TYPE,TARGET_TYPE_AS_TEXT,TARGET_LIST_NUMBER,TARGET_ID,PART_NUMBER,LABEL,TIME_ADDRESS,DATE,TRIGGER,ACTION";
const TARGETS_COLUMNS: &str =
    "TARGET_TYPE,TARGET_TYPE_AS_TEXT,TARGET_LIST_NUMBER,TARGET_ID,TARGET_DCID,PART_NUMBER,LABEL";

/// One marker, ready to be written as rows
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDataEntry {
    /// Event number in the event list
    pub id: u64,
    pub label: String,
    pub timecode: String,
    pub cue: String,
}

/// Labels are wrapped in double quotes in the CSV, so any inside are dropped
pub fn sanitize_label(label: &str) -> String {
    label.replace('"', "")
}

/// One entry per marker, in marker order
pub fn build_entries(markers: &[Marker], tempo: &Tempo, options: &ShowDataOptions) -> Vec<ShowDataEntry> {
    let numbering = CueNumbering::new(options.smart_cue_numbers, options.first_cue);
    let offset = options.timecode_offset.to_seconds();

    markers
        .iter()
        .enumerate()
        .map(|(index, marker)| ShowDataEntry {
            id: u64::from(options.first_event) + index as u64,
            label: sanitize_label(&marker.name),
            timecode: seconds_to_timecode(marker.time + offset),
            cue: cue_number(numbering, marker, index, tempo),
        })
        .collect()
}

/// The START_SHOWCONTROL ... END_SHOWCONTROL block
pub fn showcontrol_section(entries: &[ShowDataEntry], options: &ShowDataOptions) -> String {
    let part = options.timecode_source.code();
    let mut lines = Vec::with_capacity(entries.len() + 4);

    lines.push("START_SHOWCONTROL".to_string());
    lines.push(SHOWCONTROL_COLUMNS.to_string());
    lines.push(format!(
        "{},Event,{},0,{},,,,Source 1 External,{}",
        EVENT_TARGET_TYPE,
        options.event_list,
        part,
        options.timecode_source.label()
    ));

    for entry in entries {
        let action = if options.create_cue_links {
            format!("Cue  {} / {}", options.cue_list, entry.cue)
        } else {
            String::new()
        };
        lines.push(format!(
            "{},Event,{},{},{},\"{}\",{},,,{}",
            EVENT_TARGET_TYPE, options.event_list, entry.id, part, entry.label, entry.timecode, action
        ));
    }

    lines.push("END_SHOWCONTROL".to_string());
    lines.join("\n")
}

/// The START_TARGETS ... END_TARGETS block defining the cue list and its cues
pub fn targets_section(entries: &[ShowDataEntry], options: &ShowDataOptions) -> String {
    let cue_list = options.cue_list;
    let mut lines = Vec::with_capacity(entries.len() + 4);

    lines.push("START_TARGETS".to_string());
    lines.push(TARGETS_COLUMNS.to_string());
    lines.push(format!(
        "{},Cue_List,,{},ReaCue-CueList-{},,{}",
        CUE_LIST_TARGET_TYPE, cue_list, cue_list, options.project_name
    ));

    for entry in entries {
        lines.push(format!(
            "{},Cue,{},{},ReaCue-Cue-{}-{},,{}",
            CUE_TARGET_TYPE, cue_list, entry.cue, cue_list, entry.id, entry.label
        ));
    }

    lines.push("END_TARGETS".to_string());
    lines.join("\n")
}

/// Full CSV document for a set of markers
pub fn to_show_data(markers: &[Marker], tempo: &Tempo, options: &ShowDataOptions) -> String {
    let entries = build_entries(markers, tempo, options);
    let mut document = showcontrol_section(&entries, options);

    if options.create_cues {
        document.push('\n');
        document.push_str(&targets_section(&entries, options));
    }

    document
}
