// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Light/dark preference.
//!
//! The stored choice wins. Without one, the system preference is used.
//!
//! # Detection order
//!
//! 1. `FOLIO_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Light

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::json_file;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Accepts "light"/"l" and "dark"/"d", any case.
    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim().to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The system's preferred theme.
pub fn detect_system_theme() -> Theme {
    detect_with(|key| std::env::var(key).ok()).unwrap_or_else(|| {
        if macos_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

/// Environment-only detection; `None` when nothing in `env` decides.
fn detect_with(env: impl Fn(&str) -> Option<String>) -> Option<Theme> {
    if let Some(theme) = env("FOLIO_THEME").as_deref().and_then(Theme::parse) {
        return Some(theme);
    }

    // "fg;bg"; backgrounds 0-6 and 8 are dark
    let bg = env("COLORFGBG")?;
    let bg: u8 = bg.split(';').next_back()?.parse().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

#[cfg(target_os = "macos")]
fn macos_prefers_dark() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|out| out.status.success() && String::from_utf8_lossy(&out.stdout).contains("Dark"))
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
fn macos_prefers_dark() -> bool {
    false
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Option<Theme>,
}

/// Theme preference persisted as `{"theme": "light" | "dark"}`.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored preference, if any. An unreadable file counts as none.
    pub fn stored(&self) -> Option<Theme> {
        match json_file::load_or_default::<Preferences>(&self.path) {
            Ok(prefs) => prefs.theme,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable theme preference");
                None
            }
        }
    }

    /// Stored preference, else the system's.
    pub fn current(&self) -> Theme {
        self.stored().unwrap_or_else(detect_system_theme)
    }

    pub fn set(&self, theme: Theme) -> Result<()> {
        json_file::save(&self.path, &Preferences { theme: Some(theme) })?;
        tracing::debug!(theme = %theme, "saved theme preference");
        Ok(())
    }

    /// Flip the current theme and persist it.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current().toggle();
        self.set(next)?;
        Ok(next)
    }
}
