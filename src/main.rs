use anyhow::{Context, Result};
use clap::Parser;
use reacue::{RawSettings, TimecodeSource};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "reacue", version)]
#[command(about = "Convert REAPER markers into an Eos show control CSV import", long_about = None)]
struct Args {
    /// REAPER project file (.rpp)
    project: PathBuf,

    /// YAML settings file; command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file path (default: `ReaCue_ShowData_<project-name>.csv`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the parsed markers and tempo as YAML and exit
    #[arg(long)]
    dump: bool,

    /// Suppress informational messages (only warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// How Eos receives timecode: midi or smpte
    #[arg(long)]
    timecode_source: Option<TimecodeSource>,

    /// Offset added to every marker, HH:MM:SS:FF
    #[arg(long)]
    timecode_offset: Option<String>,

    /// Show control (event) list number
    #[arg(long)]
    event_list: Option<u32>,

    /// Event number of the first marker
    #[arg(long)]
    first_event: Option<u32>,

    /// Cue list the events refer to
    #[arg(long)]
    cue_list: Option<u32>,

    /// Cue number of the first marker (ignored with --smart-cue-numbers)
    #[arg(long)]
    first_cue: Option<u32>,

    /// Leave the event actions empty instead of linking cues
    #[arg(long)]
    no_cue_links: bool,

    /// Also define the cue list and its cues
    #[arg(long)]
    create_cues: bool,

    /// Number cues by measure.beat at the project tempo
    #[arg(long)]
    smart_cue_numbers: bool,

    /// Name used for the cue list label and the output file
    #[arg(long)]
    project_name: Option<String>,
}

impl Args {
    /// Flags as settings. Switches only count when given so that a settings file
    /// can still turn them on.
    fn settings(&self) -> RawSettings {
        RawSettings {
            timecode_source: self.timecode_source,
            timecode_offset: self.timecode_offset.clone(),
            event_list: self.event_list,
            first_event: self.first_event,
            cue_list: self.cue_list,
            first_cue: self.first_cue,
            create_cue_links: self.no_cue_links.then_some(false),
            create_cues: self.create_cues.then_some(true),
            smart_cue_numbers: self.smart_cue_numbers.then_some(true),
            project_name: self.project_name.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.quiet { "reacue=warn" } else { "reacue=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = reacue::read_project(&args.project)?;

    let project = reacue::parse(&source);

    if args.dump {
        print!("{}", serde_yaml::to_string(&project)?);
        return Ok(());
    }

    let file_settings = match &args.config {
        Some(path) => RawSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => RawSettings::default(),
    };
    let options = args.settings().or(file_settings).resolve(&args.project)?;

    let document = reacue::convert_project(&project, &options);

    if args.stdout {
        println!("{}", document);
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(reacue::output_file_name(&options.project_name)));

    reacue::write_document(&output_path, &document)?;

    tracing::info!(
        path = %output_path.display(),
        events = project.markers.len(),
        "wrote show data"
    );

    Ok(())
}
