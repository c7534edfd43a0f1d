use std::time::Instant;

use dogs::search_algorithm::{NeverStoppingCriterion, StoppingCriterion, TimeStoppingCriterion};
use fastrand::Rng;
use serde::Serialize;

use crate::color::{Coloring, VertexId, nb_colors};
use crate::compact_graph::CompactGraph;
use crate::config::TrialConfig;
use crate::error::{ColoringError, Result};
use crate::search::first_fit::create_engine;

/// derives the seed of a trial from the run seed (SplitMix64 step)
pub fn trial_seed(seed:u64, trial:usize) -> u64 {
    let mut z = seed.wrapping_add((trial as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// uniformly random permutation of 0..n
pub fn random_order(n:usize, rng:&mut Rng) -> Vec<VertexId> {
    let mut order:Vec<VertexId> = (0..n).collect();
    rng.shuffle(&mut order);
    order
}

/// new best coloring found during the search
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Improvement {
    /// trial that found it
    pub trial: usize,
    /// its number of colors
    pub nb_colors: usize,
    /// seconds since the beginning of the search
    pub time: f32,
}

/** keeps the best coloring seen so far.
offer is the only operation that modifies it. Strictly better candidates
replace the current one, ties keep the earliest.
*/
#[derive(Debug)]
pub struct BestColoring {
    /// best (coloring, nb colors) found
    best: Option<(Coloring, usize)>,
    /// every improvement, in order
    improvements: Vec<Improvement>,
    /// creation time
    t_start: Instant,
}

impl Default for BestColoring {
    fn default() -> Self { Self::new() }
}

impl BestColoring {
    /// empty aggregator (best count is +∞)
    pub fn new() -> Self {
        Self { best: None, improvements: Vec::new(), t_start: Instant::now() }
    }

    /// keeps the candidate if it uses strictly less colors. Returns true if kept
    pub fn offer(&mut self, coloring:Coloring, nb_colors:usize, trial:usize) -> bool {
        if let Some(best) = self.nb_colors() {
            if best <= nb_colors { return false; }
        }
        let time = self.t_start.elapsed().as_secs_f32();
        log::info!("found new best: {} colors (trial {}, {:.3}s)", nb_colors, trial, time);
        self.improvements.push(Improvement { trial, nb_colors, time });
        self.best = Some((coloring, nb_colors));
        true
    }

    /// best number of colors (None if nothing was offered)
    pub fn nb_colors(&self) -> Option<usize> {
        self.best.as_ref().map(|(_, c)| *c)
    }

    /// best coloring (None if nothing was offered)
    pub fn best(&self) -> Option<&Coloring> {
        self.best.as_ref().map(|(c, _)| c)
    }

    /// improvements found so far
    pub fn improvements(&self) -> &[Improvement] { &self.improvements }
}

/// outcome of a multi-trial search
#[derive(Debug, Clone)]
pub struct TrialReport {
    /// best coloring found
    pub coloring: Coloring,
    /// its number of colors
    pub nb_colors: usize,
    /// number of trials performed
    pub nb_trials: usize,
    /// successive improvements (non-increasing number of colors)
    pub improvements: Vec<Improvement>,
    /// total search time (seconds)
    pub time_searched: f32,
    /// run seed
    pub seed: u64,
}

/** repeats the first-fit greedy with random orders and keeps the best coloring.
 - each trial uses its own generator, seeded from (config.seed, trial index)
 - stops after config.trials trials, when config.early_stop_at is reached,
   or when the stopping criterion fires (at least one trial is always run)

Fails with NoTrialsRequested if config.trials is 0.
*/
pub fn run_trials<Stopping:StoppingCriterion>(
    inst:&CompactGraph,
    config:&TrialConfig,
    stopping_criterion:Stopping,
) -> Result<TrialReport> {
    if config.trials == 0 {
        return Err(ColoringError::NoTrialsRequested);
    }
    let t_start = Instant::now();
    let mut engine = create_engine(config.engine, inst);
    let mut best = BestColoring::new();
    let mut nb_trials = 0;
    for trial in 0..config.trials {
        if trial > 0 && stopping_criterion.is_finished() {
            log::info!("stopping criterion reached after {} trials", nb_trials);
            break;
        }
        let mut rng = Rng::with_seed(trial_seed(config.seed, trial));
        let order = random_order(inst.n(), &mut rng);
        let coloring = engine.color(inst, &order);
        let nb = nb_colors(&coloring);
        nb_trials += 1;
        log::debug!("{}: {} colors", trial, nb);
        best.offer(coloring, nb, trial);
        if let (Some(target), Some(current)) = (config.early_stop_at, best.nb_colors()) {
            if current <= target {
                log::info!("target of {} colors reached after {} trials", target, nb_trials);
                break;
            }
        }
    }
    let time_searched = t_start.elapsed().as_secs_f32();
    log::info!("done coloring {} random orders in {:.3}s", nb_trials, time_searched);
    let BestColoring { best, improvements, .. } = best;
    let (coloring, nb_colors) = best.unwrap_or_default();
    Ok(TrialReport { coloring, nb_colors, nb_trials, improvements, time_searched, seed: config.seed })
}

/// runs the trials with the time limit of the configuration (if any)
pub fn greedy_trials(inst:&CompactGraph, config:&TrialConfig) -> Result<TrialReport> {
    match config.time_limit {
        Some(t) => run_trials(inst, config, TimeStoppingCriterion::new(t)),
        None => run_trials(inst, config, NeverStoppingCriterion::default()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::config::EngineKind;
    use crate::edge_list::read_from_file;
    use crate::graph::Graph;
    use crate::search::testing::random_graph;

    fn config(trials:usize, seed:u64) -> TrialConfig {
        TrialConfig { trials, seed, ..TrialConfig::default() }
    }

    fn instance(filename:&str) -> CompactGraph {
        CompactGraph::build(&read_from_file(filename).unwrap()).unwrap()
    }

    #[test]
    fn test_no_trials() {
        let inst = instance("insts/cycle4.txt");
        assert!(matches!(
            greedy_trials(&inst, &config(0, 1)),
            Err(ColoringError::NoTrialsRequested)
        ));
    }

    #[test]
    fn test_single_vertex() {
        let inst = instance("insts/single.txt");
        let report = greedy_trials(&inst, &config(10, 1)).unwrap();
        assert_eq!(report.coloring, vec![0]);
        assert_eq!(report.nb_colors, 1);
        assert_eq!(checker(&inst, &report.coloring), CheckerResult::Ok(1));
    }

    #[test]
    fn test_empty_graph() {
        let inst = CompactGraph::build(&Graph::new(0, 0).unwrap()).unwrap();
        let report = greedy_trials(&inst, &config(3, 1)).unwrap();
        assert!(report.coloring.is_empty());
        assert_eq!(report.nb_colors, 0);
    }

    #[test]
    fn test_cycle_finds_two_colors() {
        let inst = instance("insts/cycle4.txt");
        for engine in [EngineKind::Scan, EngineKind::Bitset].iter() {
            let c = TrialConfig { engine: *engine, ..config(200, 12) };
            let report = greedy_trials(&inst, &c).unwrap();
            assert_eq!(report.nb_colors, 2);
            assert_eq!(report.nb_trials, 200);
            assert_eq!(checker(&inst, &report.coloring), CheckerResult::Ok(2));
        }
    }

    #[test]
    fn test_complete_graph_every_trial() {
        let inst = instance("insts/k4.txt");
        let report = greedy_trials(&inst, &config(100, 3)).unwrap();
        assert_eq!(report.nb_colors, 4);
        // the first trial is the only improvement: every trial uses 4 colors
        assert_eq!(report.improvements.len(), 1);
        assert_eq!(report.improvements[0].trial, 0);
        let mut engine = create_engine(EngineKind::Scan, &inst);
        for trial in 0..100 {
            let mut rng = Rng::with_seed(trial_seed(3, trial));
            let coloring = engine.color(&inst, &random_order(4, &mut rng));
            assert_eq!(nb_colors(&coloring), 4);
        }
    }

    #[test]
    fn test_best_is_monotone() {
        let inst = CompactGraph::build(&random_graph(150, 0.1, 77)).unwrap();
        let report = greedy_trials(&inst, &config(300, 5)).unwrap();
        assert!(report.improvements.windows(2).all(|w| {
            w[0].nb_colors > w[1].nb_colors && w[0].trial < w[1].trial
        }));
        let last = report.improvements.last().unwrap();
        assert_eq!(last.nb_colors, report.nb_colors);
        assert!(report.nb_colors <= inst.max_degree() + 1);
        assert!(matches!(checker(&inst, &report.coloring), CheckerResult::Ok(_)));
    }

    #[test]
    fn test_reproducible() {
        let inst = CompactGraph::build(&random_graph(80, 0.2, 1)).unwrap();
        let r1 = greedy_trials(&inst, &config(50, 99)).unwrap();
        let r2 = greedy_trials(&inst, &config(50, 99)).unwrap();
        assert_eq!(r1.coloring, r2.coloring);
        assert_eq!(r1.nb_colors, r2.nb_colors);
        let trials1:Vec<usize> = r1.improvements.iter().map(|i| i.trial).collect();
        let trials2:Vec<usize> = r2.improvements.iter().map(|i| i.trial).collect();
        assert_eq!(trials1, trials2);
    }

    #[test]
    fn test_trial_seeds_differ() {
        assert_ne!(trial_seed(0, 0), trial_seed(0, 1));
        assert_ne!(trial_seed(0, 1), trial_seed(1, 1));
        assert_eq!(trial_seed(4, 2), trial_seed(4, 2));
    }

    #[test]
    fn test_random_order_is_permutation() {
        let mut rng = Rng::with_seed(8);
        let mut order = random_order(50, &mut rng);
        order.sort_unstable();
        assert_eq!(order, (0..50).collect::<Vec<usize>>());
    }

    #[test]
    fn test_early_stop() {
        let inst = instance("insts/cycle4.txt");
        let c = TrialConfig { early_stop_at: Some(2), ..config(10_000, 4) };
        let report = greedy_trials(&inst, &c).unwrap();
        assert_eq!(report.nb_colors, 2);
        assert_eq!(report.nb_trials, report.improvements.last().unwrap().trial + 1);
        assert!(report.nb_trials < 10_000);
    }

    #[test]
    fn test_time_limit_runs_one_trial() {
        let inst = instance("insts/k4.txt");
        let c = TrialConfig { time_limit: Some(0.), ..config(1000, 4) };
        let report = greedy_trials(&inst, &c).unwrap();
        assert_eq!(report.nb_trials, 1);
        assert_eq!(report.nb_colors, 4);
    }

    #[test]
    fn test_stopping_criteria() {
        let inst = instance("insts/k4.txt");
        let report = run_trials(&inst, &config(25, 1), NeverStoppingCriterion::default()).unwrap();
        assert_eq!(report.nb_trials, 25);
        let report = run_trials(&inst, &config(25, 1), TimeStoppingCriterion::new(0.)).unwrap();
        assert_eq!(report.nb_trials, 1);
    }

    #[test]
    fn test_offer_keeps_earliest_tie() {
        let mut best = BestColoring::new();
        assert_eq!(best.nb_colors(), None);
        assert!(best.offer(vec![0,1,2], 3, 0));
        assert!(!best.offer(vec![2,1,0], 3, 1));
        assert!(!best.offer(vec![0,1,3], 4, 2));
        assert_eq!(best.best(), Some(&vec![0,1,2]));
        assert!(best.offer(vec![0,1,0], 2, 3));
        assert_eq!(best.nb_colors(), Some(2));
        assert_eq!(best.improvements().len(), 2);
    }
}
