// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! `search` queries the published posts (one-shot, or `--interactive` to feed
//! keystrokes from stdin through the debounced controller). `posts` lists
//! posts by category. `views`, `subscribe`, and `theme` drive the site
//! services against the JSON stores named in `folio.json`.

pub mod display;
mod search;
mod site;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use folio::config::SiteConfig;
use folio::subscription::Language;
use folio::theme::Theme;
use folio::Result;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Fuzzy search and site services for a personal blog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site configuration file
    #[arg(long, global = true, env = "FOLIO_CONFIG", default_value = "folio.json")]
    pub config: PathBuf,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search published posts
    Search {
        /// Search term (omit with --interactive)
        query: Option<String>,

        /// Maximum number of results to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Read one keystroke state per stdin line and print settled results
        #[arg(short, long)]
        interactive: bool,
    },

    /// List published posts, optionally in one category
    Posts {
        /// Category slug ("all" for every post)
        #[arg(short, long)]
        tag: Option<String>,

        /// List category slugs instead of posts
        #[arg(long)]
        categories: bool,
    },

    /// Read or record post views
    Views {
        #[command(subcommand)]
        action: ViewsAction,
    },

    /// Subscribe an email address
    Subscribe {
        email: String,

        /// Language for the confirmation message
        #[arg(long, value_enum, default_value = "en")]
        lang: LangArg,
    },

    /// Show, set, or toggle the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
pub enum ViewsAction {
    /// Current count for a post
    Get { slug: String },
    /// Count one view and print the new total
    Hit { slug: String },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Persist a theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
    /// Flip and persist the theme
    Toggle,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LangArg {
    En,
    Es,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Language::En,
            LangArg::Es => Language::Es,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = SiteConfig::load(&self.config)?;
        let json = self.json;

        match self.command {
            Commands::Search {
                query,
                limit,
                interactive,
            } => {
                if interactive {
                    search::run_interactive(&config, limit, json).await
                } else {
                    search::run_once(&config, query.as_deref().unwrap_or(""), limit, json)
                }
            }
            Commands::Posts { tag, categories } => site::posts(&config, tag.as_deref(), categories, json),
            Commands::Views { action } => match action {
                ViewsAction::Get { slug } => site::views(&config, &slug, false, json),
                ViewsAction::Hit { slug } => site::views(&config, &slug, true, json),
            },
            Commands::Subscribe { email, lang } => site::subscribe(&config, &email, lang.into(), json),
            Commands::Theme { action } => match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => site::theme(&config, None, false, json),
                ThemeAction::Set { theme } => site::theme(&config, Some(theme.into()), false, json),
                ThemeAction::Toggle => site::theme(&config, None, true, json),
            },
        }
    }
}
