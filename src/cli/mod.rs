// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the onelink command-line interface.
//!
//! Search and suggest run the same pipeline as the web front end, so a catalog
//! edit can be checked from a terminal before it ships. `store` is the admin
//! surface over the catalog file; `redirect` checks a link against the
//! allowlist.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "onelink",
    about = "Bilingual search over a government e-services catalog",
    version
)]
pub struct Cli {
    /// JSON config file (edit distance, limits, category aliases, redirect allowlist)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display ranked results
    Search {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Search query (Arabic or English); omit to list everything
        #[arg(default_value = "")]
        query: String,

        /// Region facet: all, sa, eg, cn, global
        #[arg(short, long, default_value = "all")]
        region: String,

        /// Category filter key; repeat to OR several together
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete suggestions for a partial query
    Suggest {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Partial query
        query: String,

        /// Maximum suggestions (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Summarize a catalog: counts per region, category, and status
    Inspect {
        /// Catalog JSON file
        catalog: PathBuf,
    },

    /// Check a link against the redirect allowlist
    Redirect {
        /// Target URL
        url: String,
    },

    /// Manage the admin service store
    Store {
        /// Store JSON file
        file: PathBuf,

        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
pub enum StoreAction {
    /// List services in display order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a service
    Add {
        /// Unique id: 2-40 of [a-z0-9_-]
        id: String,

        /// Arabic name
        #[arg(long)]
        name_ar: String,

        /// English name
        #[arg(long)]
        name_en: Option<String>,

        /// Link; must be https
        #[arg(long)]
        url: String,

        #[arg(long)]
        category: Option<String>,

        /// Icon path under /icons/
        #[arg(long)]
        icon: Option<String>,

        /// Position in the list (1-10000)
        #[arg(long)]
        order: Option<u32>,

        /// Add the service hidden
        #[arg(long)]
        disabled: bool,
    },

    /// Change fields of an existing service
    Update {
        id: String,

        #[arg(long)]
        name_ar: Option<String>,

        #[arg(long)]
        name_en: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        order: Option<u32>,
    },

    /// Enable a disabled service or disable an enabled one
    Toggle { id: String },

    /// Delete a service
    Remove { id: String },
}
