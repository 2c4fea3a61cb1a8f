//! Subcommand implementations.

use anyhow::{Context, Result};
use regiontree::{encode_tree, paint, PaintOptions, QuadTree, TextPainter};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::cli::Command;
use crate::config::{check_size, Config};
use crate::render;

/// Largest default grid for `show`.
pub const MAX_PREVIEW_SIZE: u32 = 64;

/// Run `command`, writing its report to `out`.
pub fn run(command: &Command, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Depth { file } => {
            let tree = load_tree(file, config)?;
            writeln!(out, "{}", tree.depth())?;
        }

        Command::Stats { file, json } => {
            let stats = load_tree(file, config)?.stats();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
            } else {
                writeln!(out, "depth: {}", stats.depth)?;
                writeln!(out, "branches: {}", stats.branches)?;
                writeln!(out, "leaves: {}", stats.leaves)?;
                writeln!(out, "black leaves: {}", stats.black_leaves)?;
                writeln!(out, "white leaves: {}", stats.white_leaves)?;
                writeln!(out, "black area: {:.2}%", stats.black_area * 100.0)?;
            }
        }

        Command::Render {
            file,
            output,
            size,
            no_outline,
        } => {
            let tree = load_tree(file, config)?;
            let mut options = config.paint_options();
            if let Some(size) = size {
                options.size = *size;
            }
            if *no_outline {
                options.outline = false;
            }
            check_size(options.size)?;
            render::render_to_file(&tree, &options, config.colors, output)?;
            info!(path = %output.display(), size = options.size, "rendered quadtree");
        }

        Command::Show { file, size } => {
            let tree = load_tree(file, config)?;
            let size = size.unwrap_or_else(|| preview_size(&tree));
            check_size(size)?;
            let mut painter = TextPainter::new(size);
            let options = PaintOptions {
                size,
                outline: false,
            };
            paint(&tree, &mut painter, &options);
            write!(out, "{}", painter.into_string())?;
        }

        Command::Encode {
            image,
            output,
            json,
        } => {
            let bitmap = render::load_bitmap(image)?;
            let tree = encode_tree(&bitmap)
                .with_context(|| format!("Cannot encode {}", image.display()))?;
            info!(
                side = bitmap.side(),
                depth = tree.depth(),
                leaves = tree.leaf_count(),
                "encoded image"
            );
            let text = if *json {
                tree.to_json()?
            } else {
                tree.to_notation(config.order)
            };
            match output {
                Some(path) => std::fs::write(path, format!("{}\n", text))
                    .with_context(|| format!("Failed to write tree: {}", path.display()))?,
                None => writeln!(out, "{}", text)?,
            }
        }

        Command::Compact { file } => {
            let tree = load_tree(file, config)?;
            let compacted = tree.compacted();
            info!(
                before = tree.leaf_count(),
                after = compacted.leaf_count(),
                "compacted quadtree"
            );
            writeln!(out, "{}", compacted.to_notation(config.order))?;
        }
    }
    Ok(())
}

fn load_tree(path: &Path, config: &Config) -> Result<QuadTree> {
    QuadTree::from_file_with(path, &config.parse_options())
        .with_context(|| format!("Failed to load tree: {}", path.display()))
}

/// Smallest grid that shows every leaf, capped at [`MAX_PREVIEW_SIZE`].
fn preview_size(tree: &QuadTree) -> u32 {
    tree.min_side()
        .and_then(|side| u32::try_from(side).ok())
        .unwrap_or(MAX_PREVIEW_SIZE)
        .min(MAX_PREVIEW_SIZE)
}
