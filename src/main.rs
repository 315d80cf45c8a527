use clap::Parser;
use eyre::{ensure, Result, WrapErr};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sorted_search::{
    check::{check_bounds, check_insertion, check_sorted},
    cli::VerifyArgs,
    experiment::generate_sorted_of_size,
    ext::SortedSearch,
};

fn verify_sequence(values: &[u32], rng: &mut StdRng) -> Result<()> {
    check_sorted(values)?;
    for _ in 0..values.len().saturating_sub(1) {
        let expected = rng.gen_range(0..values.len());
        let target = values[expected];
        let found = values
            .search_index_of(&target, Default::default())
            .ok_or_else(|| eyre::eyre!("no index found for {target} (at {expected})"))?;
        ensure!(
            values[found] == target,
            "searching for {target} (at {expected}) found {} at {found}",
            values[found]
        );
        check_bounds(values, &target)?;
        check_insertion(values, &target)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = VerifyArgs::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut total_len = 0_u64;
    for iteration in 0..args.iterations {
        let size = rng.gen_range(0..args.max_size.max(1));
        let values = generate_sorted_of_size(size, args.max_value, &mut rng);
        verify_sequence(&values, &mut rng)
            .wrap_err(format!("verification failed on iteration {iteration}"))?;
        total_len += size;
    }
    println!(
        "Verified {} sequences ({} elements in total)",
        args.iterations, total_len
    );
    Ok(())
}
