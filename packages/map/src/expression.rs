//! The quick status-tab filter.
//!
//! Independent of the hierarchical division/area/zone filter: the tabs
//! compile to a renderer filter expression over the `status` feature
//! property, applied to the dot layer without touching the source data.

use serde_json::json;
use sewer_map_manhole_models::Status;
use strum_macros::{AsRefStr, Display, EnumString};

/// The four quick-filter tabs above the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum StatusTab {
    /// Show all locations regardless of status.
    #[default]
    All,
    Safe,
    Warning,
    Danger,
}

impl StatusTab {
    /// The renderer filter expression for this tab; `None` clears the
    /// filter (the "all" tab).
    #[must_use]
    pub fn filter_expression(self) -> Option<serde_json::Value> {
        self.status()
            .map(|status| json!(["==", ["get", "status"], status.as_ref()]))
    }

    /// The status tier this tab narrows to, if any.
    #[must_use]
    pub const fn status(self) -> Option<Status> {
        match self {
            Self::All => None,
            Self::Safe => Some(Status::Safe),
            Self::Warning => Some(Status::Warning),
            Self::Danger => Some(Status::Danger),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tab_clears_the_filter() {
        assert_eq!(StatusTab::All.filter_expression(), None);
    }

    #[test]
    fn tier_tabs_compile_to_property_equality() {
        assert_eq!(
            StatusTab::Danger.filter_expression(),
            Some(json!(["==", ["get", "status"], "danger"]))
        );
        assert_eq!(
            StatusTab::Safe.filter_expression(),
            Some(json!(["==", ["get", "status"], "safe"]))
        );
    }

    #[test]
    fn parses_tab_names() {
        assert_eq!("warning".parse::<StatusTab>().unwrap(), StatusTab::Warning);
        assert_eq!("all".parse::<StatusTab>().unwrap(), StatusTab::All);
    }
}
