use clap::{App, load_yaml};

use greedy_color::{
    cgshop::CGSHOPSolution,
    color::{checker, CheckerResult},
    compact_graph::CompactGraph,
    error::Result,
    solution::read_coloring,
    util::{load_instance, init_logger, InstanceType},
};

/** checks a coloring file against an instance. Returns true if it is proper */
fn run() -> Result<bool> {
    // parse arguments
    let yaml = load_yaml!("coloring_checker.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap_or_default();
    let sol_filename = main_args.value_of("solution").unwrap_or_default();
    let instance_type:InstanceType = main_args.value_of("type").unwrap_or("edgelist").parse()?;
    // read files
    let instance = CompactGraph::build(&load_instance(inst_filename, instance_type)?)?;
    let coloring = match instance_type {
        InstanceType::Cgshop => CGSHOPSolution::from_file(sol_filename)?.colors().to_vec(),
        _ => read_coloring(sol_filename)?,
    };
    // call checker
    match checker(&instance, &coloring) {
        CheckerResult::Ok(n) => {
            println!("{}", n);
            Ok(true)
        },
        CheckerResult::WrongLength(expected, found) => {
            println!("ERROR: {} colors given for {} vertices", found, expected);
            Ok(false)
        },
        CheckerResult::ConflictingEdge(a, b) => {
            println!("ERROR: vertices {} and {} are adjacent and share color {}", a, b, coloring[a]);
            Ok(false)
        },
    }
}

/** checks a coloring */
pub fn main() {
    init_logger();
    match run() {
        Ok(true) => {},
        Ok(false) => std::process::exit(1),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    }
}
