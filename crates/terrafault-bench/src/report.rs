use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub seed: u64,
    pub results: Vec<BenchmarkResult>,
}

/// A scene whose total mean time grew past the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Regression {
    pub scene_name: String,
    pub pct_change: f64,
}

/// Load a baseline from a JSON file. Returns None if the file is missing or
/// unreadable.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(baseline) => Some(baseline),
        Err(e) => {
            log::warn!("Ignoring malformed baseline {}: {e}", path.display());
            None
        }
    }
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare current results against a baseline by total mean time. Scenes
/// absent from the baseline, or with a zero baseline time, are skipped.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<Regression> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };
        let base_ms = base.stages.total.mean_ms;
        if base_ms <= 0.0 {
            continue;
        }
        let pct_change = (result.stages.total.mean_ms - base_ms) / base_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push(Regression {
                scene_name: result.scene_name.clone(),
                pct_change,
            });
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Vertices | Faces | Grid (ms) | Shaping (ms) | Normals (ms) | Edges (ms) | Total (ms) | P95 (ms) | Mupd/s | Elevation |\n");
    out.push_str("|-------|----------|-------|-----------|--------------|--------------|------------|------------|----------|--------|-----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.1} | [{:.4}, {:.4}] |\n",
            r.scene_name,
            r.vertices,
            r.faces,
            r.stages.grid.mean_ms,
            r.stages.shaping.mean_ms,
            r.stages.normals.mean_ms,
            r.stages.edges.mean_ms,
            r.stages.total.mean_ms,
            r.stages.total.p95_ms,
            r.shaping_throughput(),
            r.min_elevation,
            r.max_elevation,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[Regression], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = format!("REGRESSIONS DETECTED (>{:.0}% threshold):\n", threshold_pct);
    for r in regressions {
        out.push_str(&format!("  - {}: +{:.1}%\n", r.scene_name, r.pct_change));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{StageTimings, TimingSeries};

    fn result(name: &str, total_mean_ms: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            vertices: 4225,
            faces: 8192,
            passes: 300,
            iterations: 3,
            min_elevation: -0.1,
            max_elevation: 0.2,
            stages: StageTimings {
                shaping: TimingSeries {
                    mean_ms: total_mean_ms / 2.0,
                    ..TimingSeries::default()
                },
                total: TimingSeries {
                    mean_ms: total_mean_ms,
                    ..TimingSeries::default()
                },
                ..StageTimings::default()
            },
        }
    }

    fn baseline(results: Vec<BenchmarkResult>) -> Baseline {
        Baseline {
            timestamp: "test".to_string(),
            seed: 1,
            results,
        }
    }

    #[test]
    fn test_compare_flags_regressions() {
        let base = baseline(vec![result("a", 10.0), result("b", 10.0)]);
        let current = vec![result("a", 10.5), result("b", 12.0), result("new", 99.0)];
        let regressions = compare(&current, &base, 10.0);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].scene_name, "b");
        assert!((regressions[0].pct_change - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_skips_zero_baseline() {
        let base = baseline(vec![result("a", 0.0)]);
        assert!(compare(&[result("a", 5.0)], &base, 10.0).is_empty());
    }

    #[test]
    fn test_markdown_has_row_per_result() {
        let md = format_markdown(&[result("32x32/300p", 4.0), result("64x64/300p", 8.0)]);
        assert_eq!(md.lines().count(), 4);
        assert!(md.contains("| 64x64/300p | 4225 | 8192 |"));
    }

    #[test]
    fn test_format_comparison() {
        assert!(format_comparison(&[], 10.0).starts_with("All scenes within 10%"));
        let text = format_comparison(
            &[Regression {
                scene_name: "b".to_string(),
                pct_change: 20.0,
            }],
            10.0,
        );
        assert!(text.contains("  - b: +20.0%"));
    }

    #[test]
    fn test_baseline_save_load() {
        let dir = std::env::temp_dir().join(format!("terrafault-bench-{}", std::process::id()));
        let path = dir.join("baseline.json");
        let base = baseline(vec![result("a", 3.0)]);
        save_baseline(&path, &base).expect("should save");
        let loaded = load_baseline(&path).expect("should load");
        assert_eq!(loaded.seed, 1);
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].stages.total.mean_ms, 3.0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_baseline() {
        assert!(load_baseline(Path::new("/nonexistent/baseline.json")).is_none());
    }
}
