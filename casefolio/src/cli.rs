//! Command-line interface definitions for casefolio

use casefolio::{Category, DividerStyle, FontName, Theme};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the casefolio application
#[derive(Parser)]
#[command(name = "casefolio")]
#[command(version)]
#[command(about = "Portfolio case-study scaffolding tool", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for casefolio
#[derive(Subcommand)]
pub enum Commands {
    /// Populate a document with the case-study structure and print it
    Generate {
        /// Request file (TOML); flags override its fields
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Project title
        #[arg(short, long)]
        title: Option<String>,

        /// Project category
        #[arg(short, long, value_enum)]
        category: Option<Category>,

        /// Color theme
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Divider glyph between page groups
        #[arg(short, long, value_enum)]
        divider: Option<DividerStyle>,

        /// Remove every existing page first
        #[arg(long)]
        clear_existing: bool,

        /// Overwrite heading and body text of existing nodes
        #[arg(long)]
        refresh_placeholders: bool,

        /// Pre-existing page in the document (repeatable)
        #[arg(long = "page", value_name = "NAME")]
        pages: Vec<String>,

        /// Number of times to run against the same document
        #[arg(long, default_value_t = 1)]
        runs: usize,

        /// Installed font as FAMILY:STYLE (repeatable; defaults to Inter and Roboto)
        #[arg(long = "font", value_name = "FAMILY:STYLE")]
        fonts: Vec<FontName>,

        /// Simulate a host without page dividers
        #[arg(long)]
        no_dividers: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the sections of the catalog
    Sections {
        /// Project title substituted into the cover
        #[arg(short, long, default_value = casefolio::options::DEFAULT_TITLE)]
        title: String,

        /// Project category substituted into the cover
        #[arg(short, long, value_enum, default_value = "mobile")]
        category: Category,
    },

    /// Print the resolved style for a category and theme
    Style {
        /// Project category
        #[arg(short, long, value_enum, default_value = "mobile")]
        category: Category,

        /// Color theme
        #[arg(long, value_enum, default_value = "dark")]
        theme: Theme,
    },
}
