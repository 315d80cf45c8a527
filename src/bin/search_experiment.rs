use std::time::{Duration, Instant};

use clap::Parser;
use eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use sorted_search::{
    binary_search::{search_index, SearchMode},
    cli::{SearchExperimentArgs, SearchExperimentCommands},
    experiment::{generate_sorted_of_size, Experiment, Iteration, Params},
    predicate::OrdTarget,
    sorted_insert::insert_sorted,
};

#[derive(Serialize)]
pub struct ExperimentContainer {
    pub params: Params,
    #[serde(skip)]
    pub mode: Option<SearchMode>,
    pub iterations: Vec<Iteration>,
    pub args: SearchExperimentArgs,
}

impl ExperimentContainer {
    pub fn new(args: SearchExperimentArgs) -> Self {
        let sweep = args.command.sweep();
        let params = Params {
            start: sweep.min_size,
            stop: sweep.max_size,
            step_size: sweep.step_size,
            query_size: sweep.query_size,
            max_value: sweep.max_value,
        };
        let mode = match &args.command {
            SearchExperimentCommands::Insert(_) => None,
            SearchExperimentCommands::Search(search) => Some(search.mode.into()),
        };
        Self {
            params,
            mode,
            iterations: Vec::new(),
            args,
        }
    }
}

impl Experiment for ExperimentContainer {
    type Resource = Vec<u32>;

    fn setup(&self, rng: &mut StdRng, n: u64) -> Self::Resource {
        generate_sorted_of_size(n, self.params.max_value, rng)
    }

    fn get_params(&self) -> &Params {
        &self.params
    }

    fn execute_query(&self, resource: &Self::Resource, target: u32) -> Duration {
        match self.mode {
            Some(mode) => {
                let now = Instant::now();
                search_index(resource, mode, &OrdTarget(&target));
                now.elapsed()
            }
            None => {
                // time the insertion alone, not the copy it needs
                let mut values = resource.clone();
                let now = Instant::now();
                insert_sorted(&mut values, target);
                now.elapsed()
            }
        }
    }

    fn push_iteration(&mut self, iteration: Iteration) {
        self.iterations.push(iteration);
    }
}

pub fn main() -> Result<()> {
    let args = SearchExperimentArgs::parse();
    let outfile = args.outfile.clone();
    let mut experiment = ExperimentContainer::new(args);
    let mut rng = StdRng::seed_from_u64(42);
    experiment.run(&mut rng);
    experiment.save(&outfile)?;
    println!("Wrote {} iterations to {}", experiment.iterations.len(), outfile.display());
    Ok(())
}
