//! Render a dataset curve to an SVG document.

use std::path::PathBuf;

use chartmorph_chart_model::labels::format_currency;
use chartmorph_curve_engine::builder::build_curve;
use chartmorph_curve_engine::layout::ChartLayout;
use chartmorph_curve_engine::preview::svg_document;

use crate::commands::load_dataset;

pub fn run(
    path: PathBuf,
    output: Option<PathBuf>,
    width: f64,
    height: f64,
) -> anyhow::Result<()> {
    let dataset = load_dataset(&path)?;

    let layout = ChartLayout {
        graph_width: width,
        graph_height: height,
        ..ChartLayout::default()
    };

    let curve = build_curve(&dataset.samples, &layout)
        .map_err(|e| anyhow::anyhow!("Failed to build curve: {e}"))?;
    let svg = svg_document(curve.path(), &layout);

    tracing::debug!(
        label = %dataset.label,
        points = curve.path().point_count(),
        "curve built"
    );

    match output {
        Some(out_path) => {
            std::fs::write(&out_path, &svg)?;
            println!("Rendered '{}' to {}", dataset.label, out_path.display());
            println!(
                "  Value range: {} .. {}",
                format_currency(curve.value_min()),
                format_currency(curve.value_max())
            );
        }
        None => print!("{svg}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        crate::commands::init::run(dir.path().to_path_buf()).unwrap();

        let out = dir.path().join("2021.svg");
        run(
            dir.path().join("2021.json"),
            Some(out.clone()),
            600.0,
            300.0,
        )
        .unwrap();

        let svg = std::fs::read_to_string(out).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("<path d=\"M "));
    }
}
