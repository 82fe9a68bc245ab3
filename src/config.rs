//! Page content settings.
//!
//! Values are read from an optional inline JSON block
//! (`<script type="application/json" id="portfolio-config">`). Every field
//! has a default so a page without the block behaves like the stock site.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PortfolioError;

/// Element id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Address the mailto hand-off is addressed to.
    pub recipient: String,
    /// Labels cycled by the hero typing effect, in order.
    pub skills: Vec<String>,
    /// Static text shown before the typing span.
    pub typing_prefix: String,
    /// Navbar background once the page is scrolled.
    pub navbar_solid: String,
    /// Navbar background at the top of the page.
    pub navbar_translucent: String,
    /// Hosts whose external links get press feedback.
    pub pressed_link_hosts: Vec<String>,
    /// Selector for cards that fade in on first view.
    pub reveal_selector: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            recipient: "chinmaymahajan9998@gmail.com".to_owned(),
            skills: ["Python", "SQL", "Power BI", "Excel", "Data Analysis"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            typing_prefix: "Data Analyst | ".to_owned(),
            navbar_solid: "rgba(19, 52, 59, 0.98)".to_owned(),
            navbar_translucent: "rgba(19, 52, 59, 0.95)".to_owned(),
            pressed_link_hosts: vec!["linkedin.com".to_owned()],
            reveal_selector: ".skill-card, .timeline-item, .contact-item".to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::Config`] when the text is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, PortfolioError> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }

    /// Resolve the configuration from the optional block text.
    ///
    /// A missing block yields the defaults; a malformed one is logged and
    /// also falls back to the defaults.
    #[must_use]
    pub fn resolve(block: Option<&str>) -> Self {
        let Some(text) = block.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring portfolio config block: {err}");
                Self::default()
            }
        }
    }
}
