mod reports;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use hoslog_core::{
    DayLog, HosConfig, LogbookSimulator, TripFeasibility, TripRequest, estimate_trip_feasibility,
};
use reports::{render_console_report, render_json_report, render_markdown_report};

#[derive(Debug, Parser)]
#[command(name = "hoslog", version)]
#[command(about = "Dispatcher tool for HOS trip feasibility checks and duty-status logbooks")]
struct Args {
    /// Trip distance in miles
    #[arg(long)]
    distance: f64,

    /// Required driving time in minutes
    #[arg(long)]
    driving_time: f64,

    /// Hours already consumed in the rolling weekly cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_used: f64,

    /// Driving minutes before the pickup stop is due
    #[arg(long, default_value_t = 0.0)]
    pickup_time: f64,

    /// Run the feasibility pre-check only, skip the simulation
    #[arg(long)]
    check_only: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Print every log entry, not just the day summaries
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Optional JSON file overriding the default HOS constants
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    config.validate()?;

    let (report, days) = run_trip(&args, &config)?;

    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => render_json_report(&mut output_target, &report, &days)?,
        "markdown" => render_markdown_report(&mut output_target, &report, &days)?,
        _ => render_console_report(&mut output_target, &report, &days, args.verbose)?,
    }
    output_target.flush_inner()?;

    if !report.feasible {
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<HosConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading HOS config from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing HOS config from {}", path.display()))
        }
        None => Ok(HosConfig::default()),
    }
}

/// Validate the trip, run the estimator, and simulate when the trip fits.
///
/// Infeasible and check-only runs return an empty day list; the caller decides
/// how to surface the verdict.
fn run_trip(args: &Args, config: &HosConfig) -> Result<(TripFeasibility, Vec<DayLog>)> {
    let request = TripRequest {
        total_distance_miles: args.distance,
        total_driving_time_mins: args.driving_time,
        cycle_hours_used: args.cycle_used,
        pickup_time_mins: args.pickup_time,
    };
    request.validate(config)?;

    let report = estimate_trip_feasibility(
        request.total_distance_miles,
        request.total_driving_time_mins,
        request.cycle_hours_used,
        config,
    );
    log::debug!(
        "estimate: ~{:.2}h on-duty against {:.2}h remaining",
        report.predicted_on_duty_hrs,
        report.remaining_cycle_hrs
    );

    let days = if report.feasible && !args.check_only {
        LogbookSimulator::new(
            request.total_distance_miles,
            request.total_driving_time_mins,
            config,
        )
        .generate(request.pickup_time_mins)
    } else {
        Vec::new()
    };

    Ok((report, days))
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
