//! Dashboard State
//!
//! Reactive wrapper around the core [`ViewState`]. Nothing here outlives
//! the page: a reload starts from the overview tab and the built-in data.

use leptos::*;
use quickcommerce::dashboard::{DataLoader, LoadReport, SlotUpdate, StaticSource, Tab, ViewState};

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Active tab and metric group slots
    pub view: RwSignal<ViewState>,
    /// Provider base URL for this session; `None` uses the built-in data
    pub source_url: RwSignal<Option<String>>,
    /// Set while the latest load is running
    pub loading: RwSignal<bool>,
    /// When the latest load finished (ms since epoch)
    pub loaded_at: RwSignal<Option<i64>>,
    /// Groups the latest load could not fetch, with the reason
    pub failures: RwSignal<Vec<String>>,
    /// Number of the most recently started load
    generation: StoredValue<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            view: create_rw_signal(ViewState::new()),
            source_url: create_rw_signal(None),
            loading: create_rw_signal(false),
            loaded_at: create_rw_signal(None),
            failures: create_rw_signal(Vec::new()),
            generation: store_value(0),
        }
    }

    /// Switch tabs. Metric slots are left alone.
    pub fn select(&self, tab: Tab) {
        self.view.update(|view| {
            view.select(tab);
        });
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.view.with(|view| view.is_active(tab))
    }

    /// Start a new load; earlier loads become stale
    pub fn begin_load(&self) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.loading.set(true);
        self.generation.get_value()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get_value() == generation
    }

    /// Apply a slot update from load `generation`. Stale loads are ignored.
    pub fn record(&self, generation: u64, update: SlotUpdate) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.view.update(|view| view.record(update));
        true
    }

    /// Publish the outcome of load `generation` unless a newer one started
    pub fn finish_load(&self, generation: u64, report: &LoadReport) {
        if !self.is_current(generation) {
            return;
        }

        let failures = report
            .failed
            .iter()
            .map(|(kind, e)| format!("{}: {}", kind, e))
            .collect::<Vec<_>>();
        for failure in &failures {
            logging::warn!("Metric group not loaded - {}", failure);
        }

        self.failures.set(failures);
        self.loaded_at.set(Some(chrono::Utc::now().timestamp_millis()));
        self.loading.set(false);
    }

    /// Run the loader and fill slots as groups arrive
    pub fn load(&self) {
        let state = *self;
        let generation = state.begin_load();

        spawn_local(async move {
            let report = load_groups(state, generation).await;
            state.finish_load(generation, &report);
        });
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_groups(state: DashboardState, generation: u64) -> LoadReport {
    let sink = move |update: SlotUpdate| {
        state.record(generation, update);
    };

    #[cfg(target_arch = "wasm32")]
    if let Some(url) = state.source_url.get_untracked() {
        return DataLoader::new(crate::api::HttpSource::new(url))
            .load(sink)
            .await;
    }

    DataLoader::new(StaticSource).load(sink).await
}

/// Create the dashboard state and provide it via context
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState::new();
    provide_context(state);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcommerce::dashboard::{GroupKind, SourceError};

    #[test]
    fn test_select_keeps_groups() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        let generation = state.begin_load();
        state.record(generation, SlotUpdate::Filled(StaticSource::group(GroupKind::Labor)));
        state.select(Tab::Analysis);

        assert!(state.is_active(Tab::Analysis));
        assert!(state.view.with(|v| v.groups().is_loaded(GroupKind::Labor)));

        runtime.dispose();
    }

    #[test]
    fn test_stale_load_cannot_overwrite_newer_one() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.record(second, SlotUpdate::Cleared(GroupKind::Delivery)));
        let late = SlotUpdate::Filled(StaticSource::group(GroupKind::Delivery));
        assert!(!state.record(first, late));
        assert!(!state.view.with(|v| v.groups().is_loaded(GroupKind::Delivery)));

        let stale = LoadReport {
            loaded: vec![GroupKind::Delivery],
            failed: vec![],
        };
        state.finish_load(first, &stale);
        assert!(state.loading.get_untracked());
        assert_eq!(state.loaded_at.get_untracked(), None);

        let latest = LoadReport {
            loaded: vec![],
            failed: vec![(
                GroupKind::Delivery,
                SourceError::Unavailable("offline".to_string()),
            )],
        };
        state.finish_load(second, &latest);
        assert!(!state.loading.get_untracked());
        assert_eq!(state.failures.get_untracked().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_starts_without_provider_url() {
        let runtime = create_runtime();

        let state = DashboardState::new();
        assert_eq!(state.source_url.get_untracked(), None);

        runtime.dispose();
    }
}
