//! View state
//!
//! The selected tab plus the four metric group slots. The tab only
//! changes through [`ViewState::select`]; slots only change through
//! [`ViewState::apply`] and [`ViewState::record`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::TabParseError;
use super::metrics::{MetricGroup, MetricGroups, SlotUpdate};

/// Dashboard tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Data,
    Analysis,
    Solutions,
}

impl Tab {
    /// Tabs in navigation order
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Data, Tab::Analysis, Tab::Solutions];

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Data => "data",
            Tab::Analysis => "analysis",
            Tab::Solutions => "solutions",
        }
    }

    /// Navigation button label
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Data => "Data Insights",
            Tab::Analysis => "System Analysis",
            Tab::Solutions => "Solutions",
        }
    }

    /// Resolve an untyped tag, falling back to the overview tab
    pub fn from_tag(tag: &str) -> Tab {
        tag.parse().unwrap_or_else(|e: TabParseError| {
            tracing::debug!(error = %e, "Falling back to overview tab");
            Tab::Overview
        })
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Tab {
    type Err = TabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TabParseError(s.to_string()))
    }
}

/// State owned by the top-level dashboard view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    active_tab: Tab,
    groups: MetricGroups,
}

impl ViewState {
    /// Fresh state: overview tab, nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    pub fn groups(&self) -> &MetricGroups {
        &self.groups
    }

    /// Switch tabs. Returns whether the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        changed
    }

    /// Fill (or refill) one metric group slot
    pub fn apply(&mut self, group: MetricGroup) {
        self.groups.apply(group);
    }

    /// Apply a loader outcome: fill the slot or empty it
    pub fn record(&mut self, update: SlotUpdate) {
        self.groups.record(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::loader::StaticSource;
    use crate::dashboard::metrics::GroupKind;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.active_tab(), Tab::Overview);
        assert!(GroupKind::ALL
            .into_iter()
            .all(|kind| !state.groups().is_loaded(kind)));
    }

    #[test]
    fn test_every_tab_reachable_from_every_tab() {
        for from in Tab::ALL {
            for to in Tab::ALL {
                let mut state = ViewState::new();
                state.select(from);
                let changed = state.select(to);
                assert_eq!(state.active_tab(), to);
                assert_eq!(changed, from != to);
                assert!(state.is_active(to));
            }
        }
    }

    #[test]
    fn test_select_leaves_groups_untouched() {
        let mut state = ViewState::new();
        state.apply(MetricGroup::Delivery(StaticSource::delivery()));
        let before = state.groups().clone();

        state.select(Tab::Analysis);
        assert_eq!(state.groups(), &before);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("data".parse::<Tab>().unwrap(), Tab::Data);
        assert_eq!("SOLUTIONS".parse::<Tab>().unwrap(), Tab::Solutions);
        assert_eq!(
            "references".parse::<Tab>(),
            Err(TabParseError("references".to_string()))
        );
    }

    #[test]
    fn test_from_tag_falls_back_to_overview() {
        assert_eq!(Tab::from_tag("analysis"), Tab::Analysis);
        assert_eq!(Tab::from_tag("references"), Tab::Overview);
        assert_eq!(Tab::from_tag(""), Tab::Overview);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Data Insights", "System Analysis", "Solutions"]
        );
    }
}
