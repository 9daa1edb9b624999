mod input;
mod pipeline;
mod render;
mod trace;

use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::filter::{filter_persistent, validate_threshold};
use crate::pipeline::timepoints::resolve_timepoints;
use crate::render::{SankeyConfig, build_records, write_dashboard};

/// Output sankey HTML with data file.
#[derive(Debug, Parser)]
#[command(name = "clone-sankey", version, about)]
struct Cli {
    /// Identifier used to name the output file sankey_<dashboard_id>.html
    dashboard_id: String,

    /// Input observation table (.csv/.tsv, optionally gzipped)
    path: PathBuf,

    /// Minimum number of cells present in a clone in each timepoint to be included
    #[arg(short, long, default_value_t = 3)]
    threshold: u32,

    /// Order of timepoints
    #[arg(short, long, num_args = 2, value_names = ["PRE", "POST"])]
    order: Option<Vec<String>>,

    /// Pixel width of sankey plot
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Pixel height of sankey plot
    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Column name for timepoint
    #[arg(long, default_value = "timepoint")]
    timepoint: String,

    /// Column name for clone ID
    #[arg(long, default_value = "clone_id")]
    clone: String,

    /// Column name for cell type
    #[arg(long, default_value = "cell_type")]
    subtype: String,

    /// HTML template to render into
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Directory the dashboard is written to
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn main() {
    trace::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    validate_threshold(cli.threshold).map_err(|e| e.to_string())?;

    let table = input::load_obs(&cli.path, &cli.timepoint, &cli.clone, &cli.subtype)
        .map_err(|e| e.to_string())?;

    let explicit = cli
        .order
        .as_ref()
        .map(|pair| (pair[0].clone(), pair[1].clone()));
    let order =
        resolve_timepoints(&table, &cli.timepoint, explicit).map_err(|e| e.to_string())?;

    let filtered = filter_persistent(&table, &cli.timepoint, &cli.clone, &order, cli.threshold)
        .map_err(|e| e.to_string())?;

    let config = SankeyConfig {
        data: build_records(&filtered),
        width: cli.width,
        height: cli.height,
        subset_param: cli.subtype,
        clone_param: cli.clone,
        timepoint_param: cli.timepoint,
        timepoint_order: [order.0, order.1],
    };

    write_dashboard(&config, &cli.template, &cli.out, &cli.dashboard_id)
        .map_err(|e| e.to_string())?;

    Ok(())
}
