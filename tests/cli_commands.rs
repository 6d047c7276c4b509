//! End-to-end runs of the CLI commands against temporary files.

use std::fs;

use tempfile::TempDir;
use ttt_atlas::{
    AtlasSummary, Outcome,
    cli::{
        commands::{
            analyze::{self, AnalyzeArgs},
            generate::{self, GenerateArgs},
            render::{self, RenderArgs},
        },
        config::ConfigArgs,
    },
};

fn generate_into(dir: &TempDir) -> std::path::PathBuf {
    let listing = dir.path().join("states.txt");
    generate::execute(GenerateArgs {
        output: Some(listing.clone()),
    })
    .unwrap();
    listing
}

fn seeded(seed: u64) -> ConfigArgs {
    ConfigArgs {
        seed: Some(seed),
        ..ConfigArgs::default()
    }
}

#[test]
fn generate_writes_boards_then_edges() {
    let dir = TempDir::new().unwrap();
    let listing = fs::read_to_string(generate_into(&dir)).unwrap();

    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines[0], "---------");
    let boards = lines.iter().take_while(|l| !l.starts_with('(')).count();
    assert_eq!(boards, 765);
    assert!(lines[boards..].iter().all(|l| l.starts_with('(')));
}

#[test]
fn render_writes_a_complete_document() {
    let dir = TempDir::new().unwrap();
    let listing = generate_into(&dir);
    let first = dir.path().join("a.tex");
    let second = dir.path().join("b.tex");

    for output in [&first, &second] {
        render::execute(RenderArgs {
            input: listing.clone(),
            output: Some(output.clone()),
            config: seeded(11),
            progress: false,
        })
        .unwrap();
    }

    let doc = fs::read_to_string(&first).unwrap();
    assert!(doc.starts_with(r"\documentclass{article}"));
    assert!(doc.ends_with("\\end{document}\n"));
    assert_eq!(doc, fs::read_to_string(&second).unwrap());
}

#[test]
fn render_honours_a_config_file() {
    let dir = TempDir::new().unwrap();
    let listing = generate_into(&dir);
    let config_path = dir.path().join("atlas.json");
    fs::write(
        &config_path,
        r#"{ "page": { "width_mm": 1000.0, "height_mm": 1100.0 }, "seed": 3 }"#,
    )
    .unwrap();
    let output = dir.path().join("wide.tex");

    render::execute(RenderArgs {
        input: listing,
        output: Some(output.clone()),
        config: ConfigArgs {
            config: Some(config_path),
            ..ConfigArgs::default()
        },
        progress: false,
    })
    .unwrap();

    let doc = fs::read_to_string(output).unwrap();
    // bands stretch to the configured page corner
    assert!(doc.contains("rectangle (1000.00mm,1100.00mm);"));
}

#[test]
fn malformed_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let listing = dir.path().join("bad.txt");
    fs::write(&listing, "---------\nX--------\n(1,two)\n").unwrap();
    let output = dir.path().join("out.tex");

    let result = render::execute(RenderArgs {
        input: listing,
        output: Some(output.clone()),
        config: seeded(0),
        progress: false,
    });
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn pinned_counts_larger_than_input_fail() {
    let dir = TempDir::new().unwrap();
    let listing = dir.path().join("short.txt");
    fs::write(&listing, "---------\n").unwrap();

    let result = analyze::execute(AnalyzeArgs {
        input: listing,
        config: ConfigArgs {
            vertices: Some(765),
            ..ConfigArgs::default()
        },
        export: None,
    });
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("765"), "{message}");
}

#[test]
fn analyze_exports_json_summary() {
    let dir = TempDir::new().unwrap();
    let listing = generate_into(&dir);
    let export = dir.path().join("summary.json");

    analyze::execute(AnalyzeArgs {
        input: listing,
        config: ConfigArgs::default(),
        export: Some(export.clone()),
    })
    .unwrap();

    let summary: AtlasSummary = serde_json::from_str(&fs::read_to_string(export).unwrap()).unwrap();
    assert_eq!(summary.vertices, 765);
    assert_eq!(summary.root_outcome, Some(Outcome::Draw));
    assert_eq!(summary.plies[0].draws, 1);
}
