//! Langs command implementation.

use anyhow::{Context, Result};
use numwords_engine::registry;

/// Run the langs command.
pub fn run() -> Result<()> {
    println!("{:<6} {:<14} {:>10} {:>7}  Sample (1001)", "Tag", "Name", "Chunk", "Scales");
    for lang in registry::languages() {
        let profile = registry::profile(lang)?;
        let sample = numwords_engine::to_words(1001, lang)
            .with_context(|| format!("failed to render sample for {lang}"))?;
        println!(
            "{:<6} {:<14} {:>10} {:>7}  {}",
            lang.tag(),
            profile.name,
            profile.chunk_base,
            profile.max_scale_index(),
            sample
        );
    }
    Ok(())
}
