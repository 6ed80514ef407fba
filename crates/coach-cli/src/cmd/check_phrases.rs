use anyhow::{bail, Context, Result};
use coach_core::PhrasePool;
use std::path::Path;

// Sample ids used to exercise every placeholder.
const SAMPLE_FROM: &str = "U0000001";
const SAMPLE_TO: &str = "U0000002";
const SAMPLE_GROUP: &str = "S0000001";

pub fn run(path: &Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let pool = PhrasePool::parse(&text)?;

    let failures = pool.check_all(SAMPLE_FROM, SAMPLE_TO, SAMPLE_GROUP);
    for failure in &failures {
        eprintln!("{failure}");
    }
    if !failures.is_empty() {
        bail!("{} of {} templates failed to render", failures.len(), pool.len());
    }

    println!("{} templates OK", pool.len());
    Ok(())
}
