//! CLI module - Command-line interface for Malarr
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::entry::ListKind;

/// Malarr - MyAnimeList Export Normalizer
/// Parses and combines a user's raw list data into canonical records
#[derive(Parser)]
#[command(name = "malarr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse downloaded raw files into canonical JSON records
    #[command(alias = "p")]
    Parse {
        #[command(subcommand)]
        command: ParseCommands,
    },

    /// Combine list, XML export and history data for a user
    #[command(alias = "c")]
    Combine {
        /// Username whose data directory to combine
        #[arg(short, long)]
        username: String,

        /// Only print anime or manga
        #[arg(long, value_enum)]
        only: Option<Kind>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(Subcommand)]
pub enum ParseCommands {
    /// Parse an XML list export file
    Xml {
        /// Path to the export file
        file: PathBuf,
    },

    /// Parse a list endpoint payload file
    List {
        /// Path to the payload file
        file: PathBuf,

        /// List kind; guessed from the file name when omitted
        #[arg(long, value_enum)]
        kind: Option<Kind>,
    },

    /// Parse a scraped history file
    History {
        /// Path to the history file
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Anime,
    Manga,
}

impl From<Kind> for ListKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Anime => Self::Anime,
            Kind::Manga => Self::Manga,
        }
    }
}

pub use commands::*;
