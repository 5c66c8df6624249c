//! Write example dataset files.

use std::path::PathBuf;

use chartmorph_chart_model::sample::{serialize_dataset, Dataset};

pub fn run(output: PathBuf) -> anyhow::Result<()> {
    let datasets = [
        Dataset::from_monthly_values(
            "2021",
            [
                4500.0, 6200.0, 5100.0, 7300.0, 8100.0, 7600.0, 6900.0, 7200.0, 8400.0, 9100.0,
                9700.0, 5800.0,
            ],
        ),
        Dataset::from_monthly_values(
            "2022",
            [
                5200.0, 4800.0, 6500.0, 7900.0, 9200.0, 11800.0, 10400.0, 9800.0, 9100.0, 8600.0,
                9400.0, 12100.0,
            ],
        ),
    ];

    std::fs::create_dir_all(&output)?;

    for dataset in &datasets {
        let path = output.join(format!("{}.json", dataset.label));
        let json = serialize_dataset(dataset)
            .map_err(|e| anyhow::anyhow!("Failed to serialize dataset: {e}"))?;
        std::fs::write(&path, json)?;
        println!("Wrote {}", path.display());
    }

    println!();
    println!("Try:");
    println!("  chartmorph render {}/2021.json -o 2021.svg", output.display());
    println!(
        "  chartmorph morph {}/2021.json {}/2022.json",
        output.display(),
        output.display()
    );

    Ok(())
}
