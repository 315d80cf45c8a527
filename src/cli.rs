use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::binary_search::SearchMode;

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
pub enum QueryMode {
    FirstEqual,
    LastEqual,
    InsertionIndex,
}

impl From<QueryMode> for SearchMode {
    fn from(value: QueryMode) -> Self {
        match value {
            QueryMode::FirstEqual => SearchMode::FirstEqual,
            QueryMode::LastEqual => SearchMode::LastEqual,
            QueryMode::InsertionIndex => SearchMode::InsertionIndex,
        }
    }
}

#[derive(Parser, Debug, Serialize)]
/// Verify sorted insertion and binary search against random sequences
pub struct VerifyArgs {
    /// The number of random sequences to build and check
    #[arg(short, long, default_value = "512")]
    pub iterations: u64,

    /// Sequence lengths are drawn uniformly below this
    #[arg(long, default_value = "512")]
    pub max_size: u64,

    /// Element values are drawn uniformly below this
    #[arg(long, default_value = "1024")]
    pub max_value: u32,

    /// Seed for the random generator; drawn from entropy when absent
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Serialize)]
/// Time sorted insertion or binary search over a sweep of sequence lengths
pub struct SearchExperimentArgs {
    #[command(subcommand)]
    pub command: SearchExperimentCommands,

    /// A file to write the results to
    pub outfile: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Serialize)]
pub enum SearchExperimentCommands {
    Insert(SweepArgs),
    Search(SearchArgs),
}

#[derive(Args, Debug, Clone, Serialize)]
pub struct SweepArgs {
    #[arg(long, default_value = "1000")]
    /// The minimum length of the sequence to build
    pub min_size: u64,

    #[arg(long, default_value = "100000")]
    /// The maximum length of the sequence to build
    pub max_size: u64,

    #[arg(short, long, default_value = "1000")]
    pub step_size: u64,

    /// The number of queries to time per length
    #[arg(short, long, default_value = "100")]
    pub query_size: u64,

    #[arg(long, default_value = "1024")]
    pub max_value: u32,
}

#[derive(Args, Debug, Clone, Serialize)]
pub struct SearchArgs {
    #[command(flatten)]
    pub sweep: SweepArgs,

    #[arg(short, long, default_value = "first-equal", value_enum)]
    pub mode: QueryMode,
}

impl SearchExperimentCommands {
    pub fn sweep(&self) -> &SweepArgs {
        match self {
            SearchExperimentCommands::Insert(sweep) => sweep,
            SearchExperimentCommands::Search(args) => &args.sweep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_commands_are_well_formed() {
        VerifyArgs::command().debug_assert();
        SearchExperimentArgs::command().debug_assert();
    }

    #[test]
    fn test_verify_defaults() {
        let args = VerifyArgs::try_parse_from(["sorted_search"]).unwrap();
        assert_eq!(512, args.iterations);
        assert_eq!(512, args.max_size);
        assert_eq!(1024, args.max_value);
        assert_eq!(None, args.seed);
    }

    #[test]
    fn test_search_subcommand() {
        let args = SearchExperimentArgs::try_parse_from([
            "search_experiment",
            "out.json",
            "search",
            "--mode",
            "last-equal",
            "--max-size",
            "5000",
        ])
        .unwrap();
        assert_eq!(PathBuf::from("out.json"), args.outfile);
        match &args.command {
            SearchExperimentCommands::Search(search) => {
                assert_eq!(SearchMode::LastEqual, SearchMode::from(search.mode));
                assert_eq!(5000, search.sweep.max_size);
                assert_eq!(1000, search.sweep.min_size);
            }
            SearchExperimentCommands::Insert(_) => panic!("expected the search subcommand"),
        }
    }
}
