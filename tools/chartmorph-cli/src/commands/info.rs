//! Show dataset information.

use std::path::PathBuf;

use chartmorph_chart_model::labels::{format_currency, month_label};

use crate::commands::load_dataset;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let dataset = load_dataset(&path)?;
    let (min, max) = dataset
        .value_range()
        .ok_or_else(|| anyhow::anyhow!("dataset has no samples"))?;

    println!("Dataset: {}", dataset.label);
    println!("  Samples: {}", dataset.samples.len());
    println!("  Min: {}", format_currency(min));
    println!("  Max: {}", format_currency(max));
    println!();

    for sample in &dataset.samples {
        let label = month_label(sample.month).unwrap_or("???");
        println!("  {label}. {:>12}", format_currency(sample.value));
    }

    Ok(())
}
