//! Validate dataset files.

use std::path::PathBuf;

use crate::commands::load_dataset;

pub fn run(paths: Vec<PathBuf>) -> anyhow::Result<()> {
    let mut failures = 0usize;

    for path in &paths {
        match load_dataset(path) {
            Ok(dataset) => {
                let (min, max) = dataset.value_range().unwrap_or((0.0, 0.0));
                println!(
                    "{}: ok ('{}', {} samples, values {min:.2}..{max:.2})",
                    path.display(),
                    dataset.label,
                    dataset.samples.len()
                );
            }
            Err(e) => {
                failures += 1;
                println!("{}: {e}", path.display());
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} dataset(s) failed validation", paths.len());
    }

    println!("\nAll datasets are valid.");
    Ok(())
}
