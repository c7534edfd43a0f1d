use std::fmt;
use std::fs;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ArgMatches;
use serde_json::json;

use crate::{
    cgshop::{CGSHOPInstance, CGSHOPSolution},
    color::{CheckerResult, checker},
    compact_graph::CompactGraph,
    config::TrialConfig,
    error::{ColoringError, Result},
    graph::Graph,
    search::trials::{TrialReport, greedy_trials},
    solution::write_coloring,
};

/// input file formats
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InstanceType {
    /// "n m" header followed by 0-indexed "u v" pairs
    EdgeList,
    /// DIMACS .col file
    Dimacs,
    /// CGSHOP 2022 instance (segments colored so that crossing segments differ)
    Cgshop,
}

impl FromStr for InstanceType {
    type Err = ColoringError;

    fn from_str(s:&str) -> Result<Self> {
        match s {
            "edgelist" => Ok(InstanceType::EdgeList),
            "dimacs" => Ok(InstanceType::Dimacs),
            "cgshop" => Ok(InstanceType::Cgshop),
            _ => Err(ColoringError::parameter("type", s)),
        }
    }
}

impl fmt::Display for InstanceType {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceType::EdgeList => write!(f, "edgelist"),
            InstanceType::Dimacs => write!(f, "dimacs"),
            InstanceType::Cgshop => write!(f, "cgshop"),
        }
    }
}

/// parameters of a solver run
#[derive(Debug, Clone)]
pub struct Params {
    /// instance filename
    pub inst_filename: String,
    /// instance format
    pub instance_type: InstanceType,
    /// where the coloring is written
    pub sol_file: String,
    /// where the performance statistics are written (if any)
    pub perf_file: Option<String>,
    /// search parameters
    pub config: TrialConfig,
}

/// initializes the logger (level "info" unless RUST_LOG says otherwise)
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// parses a command line value
fn parse_arg<T:FromStr>(name:&str, value:&str) -> Result<T> {
    value.parse::<T>().map_err(|_| ColoringError::parameter(name, value))
}

/// seed taken from the clock, for runs without an explicit one
fn clock_seed() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/** reads command line input.
The search parameters start from their defaults, are overwritten by the
configuration file (if given) then by the command line flags.
*/
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let inst_filename = main_args.value_of("input").unwrap_or("in.txt").to_string();
    let sol_file = main_args.value_of("output").unwrap_or("out.txt").to_string();
    let instance_type:InstanceType = parse_arg("type", main_args.value_of("type").unwrap_or("edgelist"))?;
    let mut config = match main_args.value_of("config") {
        None => TrialConfig { seed: clock_seed(), ..TrialConfig::default() },
        Some(filename) => {
            log::info!("reading configuration from: {}", filename);
            TrialConfig::from_file(filename)?
        }
    };
    if let Some(k) = main_args.value_of("trials") { config.trials = parse_arg("trials", k)?; }
    if let Some(seed) = main_args.value_of("seed") { config.seed = parse_arg("seed", seed)?; }
    if let Some(target) = main_args.value_of("early_stop") {
        config.early_stop_at = Some(parse_arg("early_stop", target)?);
    }
    if let Some(t) = main_args.value_of("time") { config.time_limit = Some(parse_arg("time", t)?); }
    if let Some(engine) = main_args.value_of("engine") { config.engine = engine.parse()?; }
    let perf_file = main_args.value_of("perf").map(|e| {
        log::info!("printing perfs in: {}", e);
        e.to_string()
    });
    if main_args.occurrences_of("input") == 0 {
        log::warn!("no instance given, using {}/{}", inst_filename, sol_file);
    }
    log::info!(
        "trials: {}, seed: {}, engine: {}, early stop: {:?}, time limit: {:?}",
        config.trials, config.seed, config.engine, config.early_stop_at, config.time_limit
    );
    Ok(Params { inst_filename, instance_type, sol_file, perf_file, config })
}

/// reads an instance file
pub fn load_instance(filename:&str, instance_type:InstanceType) -> Result<Graph> {
    log::info!("reading instance: {} ({})", filename, instance_type);
    match instance_type {
        InstanceType::EdgeList => crate::edge_list::read_from_file(filename),
        InstanceType::Dimacs => crate::dimacs::read_from_file(filename),
        InstanceType::Cgshop => CGSHOPInstance::from_file(filename)?.to_graph(),
    }
}

/// outcome of solve: the search report and the verdict of the checker on its coloring
#[derive(Debug, Clone)]
pub struct Solved {
    /// search report
    pub report: TrialReport,
    /// checker result on the best coloring
    pub check: CheckerResult,
}

/** builds the compact graph, runs the trials and checks the best coloring.
An invalid coloring is logged as an error but still returned, so that it
can be written for diagnosis.
*/
pub fn solve(graph:&Graph, config:&TrialConfig) -> Result<Solved> {
    let inst = CompactGraph::build(graph)?;
    inst.display_statistics();
    let report = greedy_trials(&inst, config)?;
    log::info!("{} colors used.", report.nb_colors);
    let check = checker(&inst, &report.coloring);
    match &check {
        CheckerResult::Ok(_) => log::info!("coloring valid."),
        _ => log::error!("coloring not valid: {:?}", check),
    }
    Ok(Solved { report, check })
}

/** exports the coloring and (optionally) the search statistics to files.
The coloring is written as a CGSHOP solution if cgshop_instance (the CGSHOP
instance name) is given, as a "[c0, c1, ...]" list otherwise.
*/
pub fn export_results(
    inst_filename:&str,
    report:&TrialReport,
    perf_file:Option<&str>,
    sol_file:&str,
    cgshop_instance:Option<&str>,
) -> Result<()> {
    if let Some(filename) = perf_file {
        let stats = json!({
            "primal_list": report.improvements.iter().map(|i| i.nb_colors).collect::<Vec<usize>>(),
            "improvements": report.improvements,
            "time_searched": report.time_searched,
            "nb_trials": report.nb_trials,
            "seed": report.seed,
            "inst_name": inst_filename
        });
        fs::write(filename, serde_json::to_string(&stats)?)?;
    }
    match cgshop_instance {
        Some(id) => CGSHOPSolution::from_coloring(id, &report.coloring).to_file(sol_file)?,
        None => write_coloring(sol_file, &report.coloring)?,
    }
    log::info!("coloring written in: {}", sol_file);
    Ok(())
}

/** reads the instance, colors it and writes the coloring.
Loading errors abort before anything is written. An invalid coloring is
still written, then reported as InvalidColoringDetected.
*/
pub fn run(params:&Params) -> Result<()> {
    let (graph, cgshop_instance) = match params.instance_type {
        InstanceType::Cgshop => {
            log::info!("reading instance: {} (cgshop)", params.inst_filename);
            let cg_inst = CGSHOPInstance::from_file(&params.inst_filename)?;
            cg_inst.display_statistics();
            (cg_inst.to_graph()?, Some(cg_inst.id().to_string()))
        }
        t => (load_instance(&params.inst_filename, t)?, None),
    };
    let solved = solve(&graph, &params.config)?;
    // export results (also when the coloring is invalid, for diagnosis)
    export_results(
        &params.inst_filename,
        &solved.report,
        params.perf_file.as_deref(),
        &params.sol_file,
        cgshop_instance.as_deref(),
    )?;
    match solved.check.into_error(&solved.report.coloring) {
        None => Ok(()),
        Some(e) => Err(e),
    }
}
