use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solar_pump_sizer::config::{self, Config};
use solar_pump_sizer::i18n::{self, Translator};
use solar_pump_sizer::pump::CatalogStore;
use solar_pump_sizer::sizing::{compute_sizing, SizingInput};
use solar_pump_sizer::{app, logging, report};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "solar_pump_sizer",
    version,
    about = "Size a solar/AC water pump from daily demand and site geometry"
)]
struct Args {
    /// UI language (ko, en, pt-br, auto)
    #[arg(long, default_value = "auto", global = true)]
    lang: String,

    /// Path to the TOML configuration file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Pump catalog JSON file (overrides catalog_path in the config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one sizing pass and print the summary
    Size(SizeArgs),
    /// Catalog utilities
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Read a catalog with alternate key spellings and write canonical JSON
    Normalize {
        /// Input catalog JSON
        input: PathBuf,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Values left out fall back to the `defaults` section of the config.
#[derive(clap::Args, Debug, Default)]
struct SizeArgs {
    #[arg(long)]
    people: Option<f64>,
    #[arg(long)]
    cattle: Option<f64>,
    #[arg(long)]
    pigs: Option<f64>,
    #[arg(long)]
    gardens: Option<f64>,
    /// Pasture area [ha]
    #[arg(long)]
    pasture: Option<f64>,
    /// Well depth [m]
    #[arg(long)]
    well_depth: Option<f64>,
    /// Tank height [m]
    #[arg(long)]
    tank_height: Option<f64>,
    /// Pipe distance [m]
    #[arg(long)]
    pipe_distance: Option<f64>,
    /// Pumping hours per day
    #[arg(long)]
    hours: Option<f64>,
    /// Pump efficiency (0-1)
    #[arg(long)]
    efficiency: Option<f64>,
    /// Skip the power estimate
    #[arg(long)]
    no_power: bool,
    #[arg(long)]
    flow_margin: Option<f64>,
    #[arg(long)]
    head_margin: Option<f64>,
    /// Exact pump type filter
    #[arg(long = "type")]
    pump_type: Option<String>,
    /// Voltage substring filter
    #[arg(long)]
    voltage: Option<String>,
    /// Rows in the candidate table
    #[arg(long)]
    top: Option<usize>,
}

impl SizeArgs {
    fn apply(&self, input: &mut SizingInput) {
        let set = |slot: &mut f64, value: Option<f64>| {
            if let Some(v) = value {
                *slot = v;
            }
        };
        set(&mut input.demand.people, self.people);
        set(&mut input.demand.cattle, self.cattle);
        set(&mut input.demand.pigs, self.pigs);
        set(&mut input.demand.gardens, self.gardens);
        set(&mut input.demand.pasture, self.pasture);
        set(&mut input.site.well_depth_m, self.well_depth);
        set(&mut input.site.tank_height_m, self.tank_height);
        set(&mut input.site.pipe_distance_m, self.pipe_distance);
        set(&mut input.pumping.hours_per_day, self.hours);
        set(&mut input.pumping.efficiency, self.efficiency);
        set(&mut input.margins.flow, self.flow_margin);
        set(&mut input.margins.head, self.head_margin);
        if self.no_power {
            input.pumping.power_enabled = false;
        }
        if let Some(t) = &self.pump_type {
            input.type_filter = t.clone();
        }
        if let Some(v) = &self.voltage {
            input.voltage_filter = v.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut cfg = config::load_or_default(&args.config)
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    let lang = i18n::resolve_language(&args.lang, Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);
    info!(language = tr.language_code(), "starting");

    match args.command {
        Some(Command::Catalog {
            action: CatalogCommand::Normalize { input, output },
        }) => normalize_catalog_file(&input, output.as_deref()),
        Some(Command::Size(size)) => {
            let store = open_catalog(args.catalog.as_deref(), &cfg)?;
            let mut input = cfg.defaults.clone();
            size.apply(&mut input);
            let result = compute_sizing(&mut input, &store.snapshot(), &cfg.params());
            print!("{}", report::summary(&result, &tr));
            println!();
            let rows = size.top.unwrap_or_else(|| cfg.top_n());
            print!("{}", report::candidate_table(&result.ranking, rows, &tr));
            Ok(())
        }
        None => {
            let mut store = open_catalog(args.catalog.as_deref(), &cfg)?;
            if let Some(path) = &args.catalog {
                cfg.catalog_path = Some(path.display().to_string());
            }
            app::run(&mut cfg, &args.config, &mut store, &tr)?;
            Ok(())
        }
    }
}

/// `--catalog`가 있으면 반드시 읽고, 설정의 경로는 실패해도 예제 카탈로그로 넘어간다.
fn open_catalog(explicit: Option<&Path>, cfg: &Config) -> Result<CatalogStore> {
    let mut store = CatalogStore::default();
    if let Some(path) = explicit {
        let load = store
            .import_file(path)
            .with_context(|| format!("failed to import catalog {path:?}"))?;
        info!(accepted = load.accepted, dropped = load.dropped(), "catalog loaded");
    } else if let Some(path) = &cfg.catalog_path {
        if let Err(err) = store.import_file(path) {
            warn!("catalog {path:?} could not be loaded, using the sample catalog: {err}");
        }
    }
    Ok(store)
}

fn normalize_catalog_file(input: &Path, output: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(input).with_context(|| format!("failed to read {input:?}"))?;
    let mut store = CatalogStore::new(Vec::new());
    let load = store.replace_from_json(&text)?;
    eprintln!(
        "{} records read, {} kept, {} dropped",
        load.received,
        load.accepted,
        load.dropped()
    );
    let json = store.to_json_pretty()?;
    match output {
        Some(path) => fs::write(path, json).with_context(|| format!("failed to write {path:?}"))?,
        None => println!("{json}"),
    }
    Ok(())
}
