//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use regiontree::QuadrantOrder;
use std::path::PathBuf;

/// Inspect, render and encode region quadtrees.
#[derive(Parser, Debug)]
#[command(name = "regiontree", version)]
#[command(about = "Inspect, render and encode region quadtrees of black-and-white images")]
pub struct Cli {
    /// Path to a TOML configuration file (default: ./regiontree.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quadrant order of notation lists, overriding the config file.
    #[arg(long, value_enum, global = true)]
    pub order: Option<OrderArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Quadrant order as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Top left, top right, bottom right, bottom left
    Clockwise,
    /// Top left, top right, bottom left, bottom right
    RowMajor,
}

impl From<OrderArg> for QuadrantOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Clockwise => QuadrantOrder::Clockwise,
            OrderArg::RowMajor => QuadrantOrder::RowMajor,
        }
    }
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the recursion depth of a tree.
    Depth {
        /// Tree file in nested-list notation.
        file: PathBuf,
    },

    /// Print node counts and black area.
    Stats {
        /// Tree file in nested-list notation.
        file: PathBuf,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render a tree to a PNG image.
    Render {
        /// Tree file in nested-list notation.
        file: PathBuf,
        /// Output PNG path.
        #[arg(short, long)]
        output: PathBuf,
        /// Canvas side in pixels (at most 4096).
        #[arg(long)]
        size: Option<u32>,
        /// Do not outline leaves.
        #[arg(long)]
        no_outline: bool,
    },

    /// Preview a tree as text.
    Show {
        /// Tree file in nested-list notation.
        file: PathBuf,
        /// Grid side in characters (default: 2^depth capped at 64, at most 4096).
        #[arg(long)]
        size: Option<u32>,
    },

    /// Encode a square power-of-two image as a tree.
    Encode {
        /// Input image.
        image: PathBuf,
        /// Write notation here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print JSON instead of notation.
        #[arg(long)]
        json: bool,
    },

    /// Merge uniform branches and print the result.
    Compact {
        /// Tree file in nested-list notation.
        file: PathBuf,
    },
}
