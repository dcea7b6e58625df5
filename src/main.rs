// src/main.rs

mod analysis;
mod config;
mod detector;
mod error;
mod types;

use analysis::{analyze_source, Report};
use anyhow::{Context, Result};
use chrono::Utc;
use detector::StoredDetections;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use types::Config;
use walkdir::WalkDir;

fn main() -> Result<()> {
    let config_path =
        std::env::var("ANALYSIS_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config = Config::load(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("pothole_analysis={}", config.logging.level))
        .init();

    info!("🕳️  Road Damage Analysis starting");
    info!("✓ Configuration loaded from {}", config_path);
    info!(
        "Detector confidence threshold: {:.2}",
        config.detector.confidence_threshold
    );

    let dumps = find_detection_dumps(&config.io.input_dir);
    if dumps.is_empty() {
        error!("No detection dumps found in {}", config.io.input_dir);
        return Ok(());
    }
    info!("Found {} detection dump(s) to analyze", dumps.len());

    fs::create_dir_all(&config.io.output_dir)
        .with_context(|| format!("Failed to create output dir {}", config.io.output_dir))?;

    for (idx, dump_path) in dumps.iter().enumerate() {
        info!(
            "Analyzing {}/{}: {}",
            idx + 1,
            dumps.len(),
            dump_path.display()
        );

        match analyze_dump(dump_path, &config) {
            Ok(report) => {
                info!(
                    "  Overall road risk: {} ({} detection(s))",
                    report.overall_risk, report.detection_count
                );
            }
            Err(e) => {
                warn!("  Skipping {}: {:#}", dump_path.display(), e);
            }
        }
    }

    Ok(())
}

fn analyze_dump(path: &Path, config: &Config) -> Result<Report> {
    let mut source = StoredDetections::load(path, config.detector.confidence_threshold)?;
    let report = analyze_source(&mut source, Utc::now())?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("analysis");
    let out_path = Path::new(&config.io.output_dir).join(format!("{stem}.report.json"));

    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&out_path, json)
        .with_context(|| format!("Failed to write report to {}", out_path.display()))?;
    info!("  ✓ Report written to {}", out_path.display());

    Ok(report)
}

fn find_detection_dumps(dir: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension().map_or(false, |ext| ext == "json")
                && !p
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.ends_with(".report.json"))
        })
        .collect();
    files.sort();
    files
}
