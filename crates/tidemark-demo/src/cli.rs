#![forbid(unsafe_code)]

//! Argument parsing and the top-level pipeline.
//!
//! One command, no subcommands: read the event file, lay it out, report
//! a summary, emit SVG. The summary goes to stderr whenever the SVG is
//! going to stdout, so the document stays pipeable.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tidemark::{
    Clock, ColumnMap, Dialect, FixedClock, Layout, LayoutConfig, LayoutEngine, SystemClock, Table,
    TimeScale, decode_records,
};

use crate::error::{DemoError, Result};
use crate::svg::SvgScatter;

/// Years between tick labels down the left edge of the track.
const TICK_STEP_YEARS: u32 = 25;

/// Inset of the tick labels from the left edge, in pixels.
const TICK_INSET_PX: f64 = 16.0;

#[derive(Debug, Parser)]
#[command(
    name = "tidemark-demo",
    about = "Lay out a delimited event file as a temporal scatter and emit SVG",
    version
)]
pub struct Cli {
    /// Event file, one row per event.
    pub csv: PathBuf,

    /// Seed for reproducible jitter and collision nudging.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Earliest year kept on the track.
    #[arg(long)]
    pub year_min: Option<i32>,

    /// Latest year kept on the track.
    #[arg(long)]
    pub year_max: Option<i32>,

    /// Write the SVG here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Field delimiter of the input file.
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// Override the current year used to split past from future.
    #[arg(long)]
    pub now_year: Option<i32>,
}

pub fn run_from_env() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}

pub fn run(cli: &Cli) -> Result<()> {
    let text = std::fs::read_to_string(&cli.csv).map_err(|source| DemoError::Read {
        path: cli.csv.clone(),
        source,
    })?;
    let table = Table::parse(&text, dialect_for(cli.delimiter))?;
    let (records, skips) = decode_records(&table, &ColumnMap::disasters())?;

    let mut config = LayoutConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config = config.clone().with_years(
        cli.year_min.unwrap_or(config.year_min),
        cli.year_max.unwrap_or(config.year_max),
    );

    let scale = TimeScale::new(config.year_min, config.year_max, config.track.height_px)?;
    let markers = scale.century_marks(TICK_STEP_YEARS, TICK_INSET_PX - config.track.half_width());

    let fixed;
    let clock: &dyn Clock = match cli.now_year {
        Some(year) => {
            fixed = FixedClock(year);
            &fixed
        }
        None => &SystemClock,
    };
    let now_year = clock.current_year();
    let now_line = (config.year_min..=config.year_max)
        .contains(&now_year)
        .then(|| scale.position(now_year));

    let mut engine = LayoutEngine::new(config.clone());
    let layout = engine.layout(&records, &markers, clock)?;

    let summary = summarize(&cli.csv, &config, &layout, skips.skipped);
    let document = SvgScatter::for_track(config.track)
        .with_now_line(now_line)
        .export(&layout);

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &document).map_err(|source| DemoError::Write {
                path: path.clone(),
                source,
            })?;
            println!("{summary}");
            println!("wrote {}", path.display());
        }
        None => {
            eprintln!("{summary}");
            print!("{document}");
        }
    }
    Ok(())
}

fn summarize(csv: &std::path::Path, config: &LayoutConfig, layout: &Layout, unreadable: usize) -> String {
    let future = layout.points.iter().filter(|p| p.is_future()).count();
    format!(
        "{}: {} placed ({} future), {} outside {}..={}, {} unreadable; {} nudged, {} still crowded",
        csv.display(),
        layout.points.len(),
        future,
        layout.skipped,
        config.year_min,
        config.year_max,
        unreadable,
        layout.placement.moved,
        layout.placement.exhausted,
    )
}

fn dialect_for(delimiter: char) -> Dialect {
    match delimiter {
        ';' => Dialect::semicolon(),
        ',' => Dialect::comma(),
        other => Dialect {
            delimiter: other,
            ..Dialect::comma()
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
