use anyhow::Result;
use clap::Parser;
use mashup_grouper::grouping::GroupEntry;
use mashup_grouper::report::{GroupReporter, TextReporter};
use mashup_grouper::{GroupingConfig, GroupingEngine};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mashup-grouper")]
#[command(about = "Group tagged music tracks into tempo-compatible mashup candidates", long_about = None)]
struct Args {
    /// Music directory to scan for tagged audio files
    music_dir: String,

    /// Dump ALL groups
    #[arg(short = 'f', long)]
    full: bool,

    /// Show tracks compatible at a single BPM
    #[arg(long)]
    bpm: Option<u32>,

    /// Partition groups by musical key
    #[arg(long)]
    key_aware: bool,

    /// Tempo tolerance in BPM (default: 5)
    #[arg(long, default_value = "5")]
    max_diff: u32,

    /// Minimum usable BPM, exclusive (default: 60)
    #[arg(long, default_value = "60")]
    min_bpm: u32,

    /// Maximum usable BPM, exclusive (default: 190)
    #[arg(long, default_value = "190")]
    max_bpm: u32,

    /// Build the index with parallel workers
    #[arg(long)]
    parallel: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if !args.full && args.bpm.is_none() {
        anyhow::bail!("Nothing to do: pass --full for a group dump or --bpm N for a point query");
    }

    // Expand ~ in the directory argument
    let music_dir = shellexpand::tilde(&args.music_dir);
    let music_dir = PathBuf::from(music_dir.as_ref());

    let records = mashup_grouper::tags::scan_library(&music_dir)?;
    log::info!("Loaded {} grouping candidates", records.len());

    let config = GroupingConfig::new()
        .with_bpm_range(args.min_bpm, args.max_bpm)
        .with_max_diff(args.max_diff)
        .with_key_aware(args.key_aware);
    let engine = GroupingEngine::new(config);

    let index = if args.parallel {
        engine.build_parallel(records)
    } else {
        engine.build(records)
    };

    let stdout = std::io::stdout();
    let mut reporter = TextReporter::new(stdout.lock());

    if let Some(bpm) = args.bpm {
        let matches = engine.query_by_bpm(&index, bpm);
        if matches.is_empty() {
            log::info!("No tracks compatible at {} BPM", bpm);
        } else {
            let entry = GroupEntry {
                bpm,
                key: None,
                tracks: matches.iter().collect(),
            };
            reporter.write_group(&entry)?;
        }
    } else {
        for entry in engine.full_dump(&index) {
            reporter.write_group(&entry)?;
        }
    }

    Ok(())
}
