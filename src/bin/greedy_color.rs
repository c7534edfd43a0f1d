use clap::{App, load_yaml};

use greedy_color::util::{read_params, run, init_logger};


/** solves a coloring instance using a randomized multi-trial greedy */
pub fn main() {
    init_logger();
    // parse arguments
    let yaml = load_yaml!("greedy_color.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = read_params(&main_args).and_then(|params| run(&params)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
