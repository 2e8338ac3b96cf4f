//! Integration tests for the converter
//!
//! Tests the full path from REAPER project text to the Eos CSV document.

use reacue::{
    convert, parse, read_project, write_document, RawSettings, ReaCueError, ShowDataOptions,
    Timecode, TimecodeSource,
};
use std::path::Path;

const PROJECT: &str = r#"<REAPER_PROJECT 0.1 "7.0/linux-x86_64" 1700000000
  TEMPO 120 4 4 0
  MARKER 2 5.0 "Cue A" 0
  MARKER 1 0.0 "Start" 0
>
"#;

fn options() -> ShowDataOptions {
    ShowDataOptions {
        timecode_source: TimecodeSource::Midi,
        timecode_offset: Timecode::ZERO,
        event_list: 1,
        first_event: 1,
        cue_list: 1,
        first_cue: 1,
        create_cue_links: true,
        create_cues: false,
        smart_cue_numbers: false,
        project_name: "Show".to_string(),
    }
}

fn event_rows(document: &str) -> Vec<&str> {
    document
        .lines()
        .filter(|line| line.starts_with("28,Event,") && !line.starts_with("28,Event,1,0,"))
        .collect()
}

#[test]
fn test_two_markers_end_to_end() {
    let document = convert(PROJECT, &options());
    let rows = event_rows(&document);
    assert_eq!(
        rows,
        vec![
            "28,Event,1,1,1,\"Start\",00:00:00:00,,,Cue  1 / 1",
            "28,Event,1,2,1,\"Cue A\",00:00:05:00,,,Cue  1 / 2",
        ]
    );
    assert!(document.starts_with("START_SHOWCONTROL\n"));
    assert!(document.ends_with("END_SHOWCONTROL"));
}

#[test]
fn test_smart_numbers_with_targets() {
    let opts = ShowDataOptions {
        smart_cue_numbers: true,
        create_cues: true,
        cue_list: 7,
        ..options()
    };
    let document = convert(PROJECT, &opts);
    // 5 s at 120 bpm = 10 beats = measure 3, beat 3
    assert!(document.contains("28,Event,1,2,1,\"Cue A\",00:00:05:00,,,Cue  7 / 3.300"));
    assert!(document.contains("15,Cue_List,,7,ReaCue-CueList-7,,Show"));
    assert!(document.contains("1,Cue,7,1.100,ReaCue-Cue-7-1,,Start"));
    assert!(document.contains("1,Cue,7,3.300,ReaCue-Cue-7-2,,Cue A"));
    assert!(document.ends_with("END_TARGETS"));
}

#[test]
fn test_offset_and_smpte() {
    let opts = ShowDataOptions {
        timecode_source: TimecodeSource::Smpte,
        timecode_offset: Timecode::new(1, 0, 0, 0),
        ..options()
    };
    let document = convert("MARKER 1 50 late\nMARKER 2 3599.5 edge", &opts);
    assert!(document.contains("28,Event,1,0,2,,,,Source 1 External,SMPTE"));
    assert!(document.contains("\"late\",01:00:50:00,,,"));
    assert!(document.contains("\"edge\",01:59:59:15,,,"));
}

#[test]
fn test_label_quotes_removed() {
    let document = convert(r#"MARKER 1 1 'He said "hi"'"#, &options());
    assert!(document.contains(",\"He said hi\",00:00:01:00,"));
}

#[test]
fn test_missing_tempo_falls_back_to_default() {
    let project = parse("MARKER 1 2.0 x");
    assert_eq!(project.tempo.bpm, 120.0);

    let opts = ShowDataOptions {
        smart_cue_numbers: true,
        ..options()
    };
    assert!(convert("MARKER 1 2.0 x", &opts).contains("Cue  1 / 2.100"));
}

#[test]
fn test_text_without_markers() {
    let document = convert("not a project at all", &options());
    assert!(event_rows(&document).is_empty());
    assert_eq!(document.lines().count(), 4);
}

#[test]
fn test_settings_resolved_from_yaml() {
    let yaml = "first-event: 20\nfirst-cue: 5\ncreate-cue-links: false\n";
    let opts = RawSettings::from_yaml(yaml)
        .unwrap()
        .resolve(Path::new("/tmp/Gala.rpp"))
        .unwrap();
    let document = convert(PROJECT, &opts);
    assert!(document.contains("28,Event,1,20,1,\"Start\",00:00:00:00,,,\n"));
    assert!(document.ends_with("28,Event,1,21,1,\"Cue A\",00:00:05:00,,,\nEND_SHOWCONTROL"));
    assert_eq!(opts.project_name, "Gala");
}

#[test]
fn test_read_convert_write_files() {
    let dir = tempfile::tempdir().unwrap();
    let project_path = dir.path().join("Gala.rpp");
    std::fs::write(&project_path, PROJECT).unwrap();

    let text = read_project(&project_path).unwrap();
    let opts = RawSettings::default().resolve(&project_path).unwrap();
    let document = convert(&text, &opts);

    let out_path = dir.path().join(reacue::output_file_name(&opts.project_name));
    write_document(&out_path, &document).unwrap();

    assert!(out_path.ends_with("ReaCue_ShowData_Gala.csv"));
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), document);
}

#[test]
fn test_settings_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reacue.yaml");
    std::fs::write(&path, "timecode-source: smpte\ncue-list: 3\n").unwrap();

    let settings = RawSettings::load(&path).unwrap();
    assert_eq!(settings.timecode_source, Some(TimecodeSource::Smpte));
    assert_eq!(settings.cue_list, Some(3));
}

#[test]
fn test_missing_project_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_project(&dir.path().join("missing.rpp"));
    assert!(matches!(result, Err(ReaCueError::Io { .. })));
}
