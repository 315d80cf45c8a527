use eyre::{Result, WrapErr};
use rand::{distributions::Uniform, prelude::Distribution, rngs::StdRng};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::{Duration, Instant},
};

use crate::sorted_insert::insert_sorted;

#[derive(Serialize, Debug, Clone)]
pub struct Iteration {
    pub n: u64,
    pub query_time: Duration,
    pub setup_time: Duration,
}

#[derive(Serialize, Debug, Clone)]
pub struct Params {
    pub start: u64,
    pub stop: u64,
    pub step_size: u64,
    pub query_size: u64,
    pub max_value: u32,
}

/// A sweep over sequence lengths, timing a setup and a batch of queries at
/// each length.
pub trait Experiment: Serialize {
    type Resource;

    fn setup(&self, rng: &mut StdRng, n: u64) -> Self::Resource;
    fn get_params(&self) -> &Params;
    fn execute_query(&self, resource: &Self::Resource, target: u32) -> Duration;

    fn get_iterations(&self, rng: &mut StdRng) -> Vec<Iteration> {
        let params = self.get_params();
        (params.start..=params.stop)
            .step_by(params.step_size.max(1) as usize)
            .map(|n| {
                println!("Setting up run with n = {n}");
                let now = Instant::now();
                let resource = self.setup(rng, n);
                let setup_time = now.elapsed();
                // generated values stay below max_value, so querying it always misses
                let query_dist = Uniform::new_inclusive(0, params.max_value);
                let mut query_time = Duration::default();
                query_dist
                    .sample_iter(&mut *rng)
                    .take(params.query_size as usize)
                    .for_each(|target| {
                        query_time += self.execute_query(&resource, target);
                    });
                Iteration {
                    n,
                    query_time,
                    setup_time,
                }
            })
            .collect()
    }

    fn save<S: AsRef<Path>>(&self, fname: S) -> Result<()> {
        let file = File::create(fname).wrap_err("could not create experiment output file")?;
        let mut writer = BufWriter::new(file);
        write!(
            &mut writer,
            "{}",
            serde_json::to_string(self).wrap_err("Could not serialize experiment")?
        )?;
        Ok(())
    }

    fn push_iteration(&mut self, iteration: Iteration);

    fn run(&mut self, rng: &mut StdRng) {
        self.get_iterations(rng)
            .into_iter()
            .for_each(|iteration| self.push_iteration(iteration))
    }
}

/// Build a sorted sequence of `size` values in `[0, max_value)` by inserting
/// each one at its sorted position.
pub fn generate_sorted_of_size(size: u64, max_value: u32, rng: &mut StdRng) -> Vec<u32> {
    let distribution = Uniform::new(0, max_value.max(1));
    let mut values = Vec::with_capacity(size as usize);
    distribution
        .sample_iter(rng)
        .take(size as usize)
        .for_each(|value| {
            insert_sorted(&mut values, value);
        });
    values
}
