//! Data Loader
//!
//! Populates the metric group slots from a [`MetricsSource`].
//!
//! All four groups are requested at once and each one is handed to the
//! caller as soon as it arrives, in whatever order the source answers.
//! A group that fails is emptied, even if an earlier load filled it, and
//! the dashboard shows its loading placeholder. Loading again overwrites
//! every slot.

use async_trait::async_trait;
use futures_util::stream::{FuturesUnordered, StreamExt};

use super::error::SourceError;
use super::metrics::{
    ConsumerMetrics, DeliveryMetrics, EnvironmentMetrics, GroupKind, LaborMetrics, MetricGroup,
    MetricGroups, SlotUpdate,
};
use super::state::ViewState;

/// Provider of metric groups, one group per request
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MetricsSource {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch a single group
    async fn fetch(&self, kind: GroupKind) -> Result<MetricGroup, SourceError>;
}

/// Fixed in-memory snapshot. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl StaticSource {
    pub fn delivery() -> DeliveryMetrics {
        DeliveryMetrics {
            avg_delivery_time: 12.5,
            orders_today: 12543.0,
            on_time_rate: 87.0,
            delivery_delay: 13.0,
            customer_complaints: 342.0,
        }
    }

    pub fn consumer() -> ConsumerMetrics {
        ConsumerMetrics {
            avg_orders_per_user: 4.2,
            impulse_purchase_rate: 38.0,
            expect_fast_delivery: 72.0,
            immediate_need: 65.0,
            instant_gratification: 68.0,
            ordering_frequency: 4.8,
            speed_expectation: 8.2,
        }
    }

    pub fn environment() -> EnvironmentMetrics {
        EnvironmentMetrics {
            co2_emissions: 12450.0,
            packaging_waste: 8.7,
            ev_fleet_percentage: 15.0,
            delivery_trips: 28765.0,
            environmental_degradation: 7.4,
        }
    }

    pub fn labor() -> LaborMetrics {
        LaborMetrics {
            avg_time_pressure: 7.8,
            turnover_rate: 22.0,
            accidents_this_month: 14.0,
            worker_stress: 8.1,
            overspeeding_incidents: 23.0,
            gig_worker_turnover: 28.0,
        }
    }

    pub fn group(kind: GroupKind) -> MetricGroup {
        match kind {
            GroupKind::Delivery => MetricGroup::Delivery(Self::delivery()),
            GroupKind::Consumer => MetricGroup::Consumer(Self::consumer()),
            GroupKind::Environment => MetricGroup::Environment(Self::environment()),
            GroupKind::Labor => MetricGroup::Labor(Self::labor()),
        }
    }

    /// Every slot filled
    pub fn snapshot() -> MetricGroups {
        MetricGroups {
            delivery: Some(Self::delivery()),
            consumer: Some(Self::consumer()),
            environment: Some(Self::environment()),
            labor: Some(Self::labor()),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MetricsSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, kind: GroupKind) -> Result<MetricGroup, SourceError> {
        Ok(Self::group(kind))
    }
}

/// Outcome of one load pass
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Groups delivered to the sink, in arrival order
    pub loaded: Vec<GroupKind>,
    /// Groups that could not be fetched
    pub failed: Vec<(GroupKind, SourceError)>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.loaded.len() == GroupKind::ALL.len()
    }
}

/// Drives a [`MetricsSource`] to fill the dashboard's group slots
pub struct DataLoader<S> {
    source: S,
}

impl<S: MetricsSource> DataLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Request every group and pass each outcome to `sink` as it arrives.
    ///
    /// A failed group is reported as [`SlotUpdate::Cleared`] so a value
    /// from an earlier load does not outlive it.
    pub async fn load<F>(&self, mut sink: F) -> LoadReport
    where
        F: FnMut(SlotUpdate),
    {
        let mut pending: FuturesUnordered<_> = GroupKind::ALL
            .into_iter()
            .map(|kind| async move { (kind, self.source.fetch(kind).await) })
            .collect();

        let mut report = LoadReport::default();

        while let Some((kind, result)) = pending.next().await {
            match result.and_then(|group| check_kind(kind, group)) {
                Ok(group) => {
                    tracing::debug!(
                        source = self.source.name(),
                        group = %kind,
                        "Metric group loaded"
                    );
                    sink(SlotUpdate::Filled(group));
                    report.loaded.push(kind);
                }
                Err(e) => {
                    tracing::warn!(
                        source = self.source.name(),
                        group = %kind,
                        error = %e,
                        "Failed to load metric group"
                    );
                    sink(SlotUpdate::Cleared(kind));
                    report.failed.push((kind, e));
                }
            }
        }

        tracing::info!(
            source = self.source.name(),
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "Metric load finished"
        );

        report
    }

    /// Load straight into a [`ViewState`]
    pub async fn load_into(&self, state: &mut ViewState) -> LoadReport {
        self.load(|update| state.record(update)).await
    }
}

fn check_kind(requested: GroupKind, group: MetricGroup) -> Result<MetricGroup, SourceError> {
    if group.kind() == requested {
        Ok(group)
    } else {
        Err(SourceError::Decode {
            group: requested,
            reason: format!("received {} data", group.kind()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::router::{render_state, CardBody, ContentBlock};
    use crate::dashboard::state::Tab;

    /// Source that only knows some groups and answers the rest with an error
    struct PartialSource {
        available: Vec<GroupKind>,
    }

    #[async_trait]
    impl MetricsSource for PartialSource {
        fn name(&self) -> &str {
            "partial"
        }

        async fn fetch(&self, kind: GroupKind) -> Result<MetricGroup, SourceError> {
            if self.available.contains(&kind) {
                Ok(StaticSource::group(kind))
            } else {
                Err(SourceError::Unavailable(format!("{} offline", kind)))
            }
        }
    }

    /// Source that answers every request with delivery data
    struct MislabelledSource;

    #[async_trait]
    impl MetricsSource for MislabelledSource {
        fn name(&self) -> &str {
            "mislabelled"
        }

        async fn fetch(&self, _kind: GroupKind) -> Result<MetricGroup, SourceError> {
            Ok(StaticSource::group(GroupKind::Delivery))
        }
    }

    #[tokio::test]
    async fn test_static_load_fills_every_slot() {
        let loader = DataLoader::new(StaticSource);
        let mut state = ViewState::new();

        let report = loader.load_into(&mut state).await;

        assert!(report.is_complete());
        assert_eq!(state.groups(), &StaticSource::snapshot());
        assert_eq!(state.active_tab(), Tab::Overview);
    }

    #[tokio::test]
    async fn test_reload_is_idempotent() {
        let loader = DataLoader::new(StaticSource);
        let mut state = ViewState::new();

        loader.load_into(&mut state).await;
        let first = state.clone();
        let report = loader.load_into(&mut state).await;

        assert!(report.is_complete());
        assert_eq!(state, first);
    }

    #[tokio::test]
    async fn test_partial_arrival_leaves_missing_slots_empty() {
        let loader = DataLoader::new(PartialSource {
            available: vec![GroupKind::Labor, GroupKind::Consumer],
        });
        let mut state = ViewState::new();

        let report = loader.load_into(&mut state).await;

        assert!(!report.is_complete());
        assert_eq!(report.loaded.len(), 2);
        assert_eq!(report.failed.len(), 2);
        assert!(state.groups().is_loaded(GroupKind::Labor));
        assert!(state.groups().is_loaded(GroupKind::Consumer));
        assert!(!state.groups().is_loaded(GroupKind::Delivery));
        assert!(!state.groups().is_loaded(GroupKind::Environment));
    }

    #[tokio::test]
    async fn test_failed_reload_drops_previous_values() {
        let mut state = ViewState::new();
        DataLoader::new(StaticSource).load_into(&mut state).await;
        assert!(state.groups().is_complete());

        let down = DataLoader::new(PartialSource { available: vec![] });
        let report = down.load_into(&mut state).await;
        assert_eq!(report.failed.len(), 4);

        state.select(Tab::Data);
        let ContentBlock::Data(block) = render_state(&state) else {
            panic!("expected data block");
        };
        for card in &block.cards {
            assert_eq!(card.body, CardBody::Loading, "{} card", card.kind);
        }
    }

    #[tokio::test]
    async fn test_partial_reload_keeps_only_fresh_groups() {
        let mut state = ViewState::new();
        DataLoader::new(StaticSource).load_into(&mut state).await;

        DataLoader::new(PartialSource {
            available: vec![GroupKind::Environment],
        })
        .load_into(&mut state)
        .await;

        assert!(state.groups().is_loaded(GroupKind::Environment));
        assert!(!state.groups().is_loaded(GroupKind::Delivery));
        assert!(!state.groups().is_loaded(GroupKind::Consumer));
        assert!(!state.groups().is_loaded(GroupKind::Labor));
    }

    #[tokio::test]
    async fn test_wrong_group_is_rejected() {
        let loader = DataLoader::new(MislabelledSource);
        let mut state = ViewState::new();

        let report = loader.load_into(&mut state).await;

        assert_eq!(report.loaded, vec![GroupKind::Delivery]);
        assert_eq!(report.failed.len(), 3);
        assert!(matches!(report.failed[0].1, SourceError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_sink_sees_each_group_once() {
        let loader = DataLoader::new(StaticSource);
        let mut seen = Vec::new();

        loader.load(|update| seen.push(update.kind())).await;

        seen.sort_by_key(|kind| kind.slug());
        let mut expected = GroupKind::ALL.to_vec();
        expected.sort_by_key(|kind| kind.slug());
        assert_eq!(seen, expected);
    }
}
