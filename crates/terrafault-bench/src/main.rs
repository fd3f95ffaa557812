use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use terrafault_bench::report;
use terrafault_bench::runner::BenchmarkRunner;
use terrafault_bench::scenes::{self, SceneConfig};
use terrafault_terrain::{config, export, Terrain};

fn print_usage() {
    eprintln!("Usage: terrain-bench [OPTIONS]");
    eprintln!("  --baseline <path>              Load baseline JSON for comparison");
    eprintln!("  --output <path>                Save current results as JSON baseline");
    eprintln!("  --regression-threshold <pct>   Regression threshold percentage (default: 10)");
    eprintln!("  --iterations <n>               Runs per scene (default: 5)");
    eprintln!("  --seed <n>                     Fault sampling seed (default: 42)");
    eprintln!("  --config <path>                Benchmark only the terrain described by a RON file");
    eprintln!("  --export-obj <path>            Write the first scene's terrain as Wavefront OBJ");
}

/// Value following a flag, parsed, or exit with a usage error.
fn flag_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let Some(raw) = args.get(i) else {
        eprintln!("Missing value for {flag}");
        process::exit(1);
    };
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {flag} value: {raw}");
        process::exit(1);
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut obj_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut iterations = 5u32;
    let mut seed = 42u64;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--baseline" => {
                i += 1;
                baseline_path = Some(flag_value(&args, i, "--baseline"));
            }
            "--output" => {
                i += 1;
                output_path = Some(flag_value(&args, i, "--output"));
            }
            "--regression-threshold" => {
                i += 1;
                regression_threshold = flag_value(&args, i, "--regression-threshold");
            }
            "--iterations" => {
                i += 1;
                iterations = flag_value(&args, i, "--iterations");
            }
            "--seed" => {
                i += 1;
                seed = flag_value(&args, i, "--seed");
            }
            "--config" => {
                i += 1;
                config_path = Some(flag_value(&args, i, "--config"));
            }
            "--export-obj" => {
                i += 1;
                obj_path = Some(flag_value(&args, i, "--export-obj"));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let scene_configs = match &config_path {
        Some(path) => match config::load_params_from_file(path) {
            Ok(params) => vec![SceneConfig::new(path.display().to_string(), params)],
            Err(e) => {
                log::error!("{e}");
                process::exit(1);
            }
        },
        None => scenes::standard_scenes(),
    };

    let runner = BenchmarkRunner::new(iterations, seed);
    let mut results = Vec::with_capacity(scene_configs.len());
    for scene in &scene_configs {
        match runner.run_scene(scene) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::error!("Scene '{}' failed: {e}", scene.name);
                process::exit(1);
            }
        }
    }

    // Print markdown summary
    println!("\n## Terrain Pipeline Benchmark (seed {seed})\n");
    println!("{}", report::format_markdown(&results));

    if let (Some(path), Some(scene)) = (&obj_path, scene_configs.first()) {
        let exported = Terrain::from_seed(scene.params.clone(), seed)
            .map_err(|e| e.to_string())
            .and_then(|terrain| export::save_obj(&terrain, path).map_err(|e| e.to_string()));
        if let Err(e) = exported {
            log::error!("Failed to export {}: {e}", path.display());
            process::exit(1);
        }
    }

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: unix_timestamp(),
            seed,
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            log::error!("Failed to save baseline to {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            if baseline.seed != seed {
                log::warn!(
                    "Baseline was recorded with seed {}, current run uses {}",
                    baseline.seed,
                    seed
                );
            }
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

/// Seconds since the Unix epoch, without pulling in a date crate.
fn unix_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("unix-{secs}")
}
