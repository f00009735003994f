//! Hygiene: source-level budgets for the atlas crate.
//!
//! Production files under `src/` (sibling `*_test.rs` files excluded) are
//! scanned for patterns that crash the page, swallow library errors, or leak
//! widget resources. Every budget is zero and only ever goes down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the wasm module" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "library errors must reach the caller" },
    Budget { pattern: ".ok()", max: 0, why: "library errors must reach the caller" },
    Budget { pattern: ".forget()", max: 0, why: "marker listeners are owned by the widget" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "dead code is deleted, not silenced" },
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(name, _)| name.ends_with("host.rs")), "scan found no sources");
}

#[test]
fn pattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut report = Vec::new();
    for budget in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|(name, content)| (name.clone(), content.lines().filter(|l| l.contains(budget.pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > budget.max {
            let detail: Vec<String> = hits.iter().map(|(n, c)| format!("    {n}: {c}")).collect();
            report.push(format!(
                "`{}` found {total}, max {} ({})\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                detail.join("\n")
            ));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
