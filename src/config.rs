//! Static navigation configuration.
//!
//! The header is data-driven: primary links and the Analysis sub-menu are
//! ordered lists consumed by generic list rendering, with no per-item logic
//! beyond selection closing the relevant overlay. Deployments may override
//! the defaults with a JSON document via [`NavConfig::from_json`].

use crate::shared::errors::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Viewport width (px) at which the inline nav collapses into the drawer.
pub const NAV_BREAKPOINT_PX: f64 = 900.0;

/// A labeled navigation target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }
}

/// A labeled group of links rendered as a dropdown (desktop) or an expanded
/// group (drawer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubMenu {
    pub label: String,
    pub items: Vec<NavLink>,
}

/// Full navigation surface configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub analysis: SubMenu,
    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: f64,
}

fn default_breakpoint() -> f64 {
    NAV_BREAKPOINT_PX
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: "FinSight".to_string(),
            links: vec![
                NavLink::new("Home", "/"),
                NavLink::new("News", "/news"),
                NavLink::new("About Us", "/about"),
            ],
            analysis: SubMenu {
                label: "Analysis".to_string(),
                items: vec![
                    NavLink::new("Bank Sector", "/analysis/bank-sector"),
                    NavLink::new("Hydropower", "/analysis/hydropower"),
                    NavLink::new("Others", "/analysis/others"),
                ],
            },
            breakpoint_px: NAV_BREAKPOINT_PX,
        }
    }
}

impl NavConfig {
    /// Parse a configuration override from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Shared default configuration used when the host supplies none.
pub static DEFAULT_NAV: Lazy<NavConfig> = Lazy::new(NavConfig::default);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn test_default_links_are_ordered() {
        let config = NavConfig::default();
        let labels: Vec<&str> = config.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Home", "News", "About Us"]);
    }

    #[test]
    fn test_default_analysis_menu() {
        let config = NavConfig::default();
        assert_eq!(config.analysis.label, "Analysis");
        let labels: Vec<&str> = config
            .analysis
            .items
            .iter()
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(labels, ["Bank Sector", "Hydropower", "Others"]);
    }

    #[test]
    fn test_from_json_accepts_override() {
        let json = r#"{
            "brand": "FinSight Beta",
            "links": [{"label": "Home", "target": "/"}],
            "analysis": {"label": "Sectors", "items": []}
        }"#;
        let config = NavConfig::from_json(json).unwrap();
        assert_eq!(config.brand, "FinSight Beta");
        assert_eq!(config.links.len(), 1);
        // Breakpoint falls back to the default when omitted
        assert_eq!(config.breakpoint_px, NAV_BREAKPOINT_PX);
    }

    #[test]
    fn test_from_json_surfaces_config_error() {
        let err = NavConfig::from_json("{\"brand\": 42}").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
