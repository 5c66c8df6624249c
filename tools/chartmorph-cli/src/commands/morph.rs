//! Simulate a transition between two datasets.

use std::path::PathBuf;
use std::time::Duration;

use chartmorph_curve_engine::builder::build_curve;
use chartmorph_curve_engine::easing::EasingFunction;
use chartmorph_curve_engine::layout::ChartLayout;
use chartmorph_curve_engine::preview::{simulate_morph, svg_document};
use chartmorph_curve_engine::transition::TransitionConfig;

use crate::commands::load_dataset;

pub fn run(
    from: PathBuf,
    to: PathBuf,
    fps: f64,
    duration_ms: u64,
    easing: String,
    out_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let from_dataset = load_dataset(&from)?;
    let to_dataset = load_dataset(&to)?;

    let easing = EasingFunction::from_name(&easing)
        .ok_or_else(|| anyhow::anyhow!("Unknown easing function: {easing}"))?;
    let config = TransitionConfig {
        duration: Duration::from_millis(duration_ms),
        easing,
        ..Default::default()
    };

    let layout = ChartLayout::default();
    let from_curve = build_curve(&from_dataset.samples, &layout)
        .map_err(|e| anyhow::anyhow!("Failed to build source curve: {e}"))?;
    let to_curve = build_curve(&to_dataset.samples, &layout)
        .map_err(|e| anyhow::anyhow!("Failed to build target curve: {e}"))?;

    let frames = simulate_morph(&from_curve, &to_curve, &config, fps)
        .map_err(|e| anyhow::anyhow!("Failed to simulate morph: {e}"))?;

    println!(
        "Morphing '{}' -> '{}' over {} ms ({} frames at {} fps, {} easing)",
        from_dataset.label,
        to_dataset.label,
        duration_ms,
        frames.len(),
        fps,
        config.easing.name()
    );

    match out_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            for (index, frame) in frames.iter().enumerate() {
                let path = dir.join(format!("frame_{index:04}.svg"));
                std::fs::write(&path, svg_document(&frame.path, &layout))?;
            }
            println!("Wrote {} frames to {}", frames.len(), dir.display());
        }
        None => {
            for frame in &frames {
                println!(
                    "  t={:.3}s progress={:.4} {}",
                    frame.time_secs,
                    frame.progress,
                    frame.path.to_svg()
                );
            }
        }
    }

    Ok(())
}
