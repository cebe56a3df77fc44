//! Application-global theme state.
//!
//! The store is owned at application scope; header components never hold
//! authoritative theme state, only a cached read for the current render.
//! All writes go through [`ThemeStore::request_toggle`].

use crate::shared::errors::AppError;
use dioxus::prelude::*;
use std::str::FromStr;

/// The two site-wide color modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Glyph for the mode the toggle switches *to*.
    pub fn target_glyph(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }

    /// The opposite mode. Two applications restore the original.
    pub fn toggled(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(AppError::UnknownThemeMode(other.to_string())),
        }
    }
}

/// Global signal backing the theme store.
static THEME_MODE: GlobalSignal<ThemeMode> = GlobalSignal::new(ThemeMode::default);

/// Narrow adapter over the global theme store: one read, one toggle request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeStore;

impl ThemeStore {
    /// Current mode. Reading inside a component subscribes it to changes.
    pub fn read_mode(&self) -> ThemeMode {
        *THEME_MODE.read()
    }

    /// Ask the store to flip its mode. Fire-and-forget, no return value.
    pub fn request_toggle(&self) {
        let next = THEME_MODE.peek().toggled();
        *THEME_MODE.write() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_exactly_once() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_double_toggle_restores_origin() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_unknown_mode_is_an_error() {
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert!(matches!(err, AppError::UnknownThemeMode(ref name) if name == "sepia"));
    }

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
