//! Runtime configuration for the player binary.
//!
//! Read from the environment on desktop (a `.env` file is honoured) and
//! derived from the browser viewport on the web. Provided to the UI through
//! Dioxus context.

use std::str::FromStr;

use anyhow::Context;

pub const DEFAULT_WINDOW_TITLE: &str = "vidframe";

/// Environment variable names
pub mod env_keys {
    pub const WINDOW_TITLE: &str = "VIDFRAME_WINDOW_TITLE";
    pub const SHELL: &str = "VIDFRAME_SHELL";
}

/// Viewports narrower than this get the mobile shell
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Shell variant for layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    pub fn for_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Classes for the shell's outer container
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Desktop => "shell shell-desktop",
            Self::Mobile => "shell shell-mobile",
        }
    }
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown shell kind: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerConfig {
    /// Desktop window title and page title
    pub window_title: String,
    pub shell: ShellKind,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            shell: ShellKind::default(),
        }
    }
}

impl PlayerConfig {
    /// Build a config from a key lookup. Missing keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let window_title = lookup(env_keys::WINDOW_TITLE)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string());

        let shell = match lookup(env_keys::SHELL) {
            Some(raw) => raw
                .parse::<ShellKind>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {}", env_keys::SHELL))?,
            None => ShellKind::default(),
        };

        Ok(Self {
            window_title,
            shell,
        })
    }

    /// Desktop: read the process environment after loading `.env`.
    ///
    /// An invalid value is logged and the defaults are used instead.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {e:#}");
                Self::default()
            }
        }
    }

    /// Web: pick the shell from the viewport width.
    #[cfg(target_arch = "wasm32")]
    pub fn from_viewport() -> Self {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        Self {
            shell: ShellKind::for_viewport_width(width),
            ..Self::default()
        }
    }
}
