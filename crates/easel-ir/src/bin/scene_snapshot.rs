use anyhow::{Context, Result, bail};
use std::env;
use std::fs;
use std::path::PathBuf;

use easel_ir::ConversionOptions;
use easel_scene::Document;

/// Converts a layout JSON file and prints the resulting scene tree,
/// for eyeballing converter output without a host canvas.
fn main() -> Result<()> {
    let mut args = env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        eprintln!(
            "Usage: cargo run -p easel-ir --bin scene_snapshot <layout.json> [--options <options.json>]"
        );
        bail!("missing <layout.json>");
    }

    let input = PathBuf::from(args.remove(0));
    if !input.exists() {
        bail!("input file not found: {}", input.display());
    }

    let mut options = ConversionOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--options" => {
                if i + 1 >= args.len() {
                    bail!("--options expects a path");
                }
                let text = fs::read_to_string(&args[i + 1])
                    .with_context(|| format!("failed to read {}", args[i + 1]))?;
                options = serde_json::from_str(&text)
                    .with_context(|| format!("failed to parse {}", args[i + 1]))?;
                i += 2;
            }
            other => bail!("unknown flag: {}", other),
        }
    }

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut canvas = Document::new();
    let root = easel_ir::convert_str(&raw, &mut canvas, &options)?;

    println!("{}", serde_json::to_string_pretty(&root)?);
    Ok(())
}
