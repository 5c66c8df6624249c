pub mod info;
pub mod init;
pub mod morph;
pub mod render;
pub mod validate;

use std::path::Path;

use chartmorph_chart_model::sample::{parse_dataset, Dataset};

/// Load and validate a dataset file.
pub fn load_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let dataset = parse_dataset(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))?;
    dataset
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid dataset {}: {e}", path.display()))?;
    Ok(dataset)
}
