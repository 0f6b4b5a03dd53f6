//! Metric groups
//!
//! The four sibling groups shown on the dashboard (delivery, consumer,
//! environment, labor). Each group is a flat set of named values; field
//! names on the wire are camelCase, matching the provider API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::content::Tone;
use super::error::GroupParseError;
use super::format;

/// Identity of a metric group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Delivery,
    Consumer,
    Environment,
    Labor,
}

impl GroupKind {
    /// All groups in display order
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Delivery,
        GroupKind::Consumer,
        GroupKind::Environment,
        GroupKind::Labor,
    ];

    /// URL-safe identifier
    pub fn slug(self) -> &'static str {
        match self {
            GroupKind::Delivery => "delivery",
            GroupKind::Consumer => "consumer",
            GroupKind::Environment => "environment",
            GroupKind::Labor => "labor",
        }
    }

    /// Card heading
    pub fn title(self) -> &'static str {
        match self {
            GroupKind::Delivery => "Delivery Performance",
            GroupKind::Consumer => "Consumer Behavior",
            GroupKind::Environment => "Environmental Impact",
            GroupKind::Labor => "Labor Conditions",
        }
    }

    /// Accent used for the card border
    pub fn tone(self) -> Tone {
        match self {
            GroupKind::Delivery => Tone::Secondary,
            GroupKind::Consumer => Tone::Accent,
            GroupKind::Environment => Tone::Success,
            GroupKind::Labor => Tone::Danger,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GroupKind {
    type Err = GroupParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GroupParseError(s.to_string()))
    }
}

/// How a value is rendered next to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// `12.5 mins`
    Minutes,
    /// `38%`
    Percent,
    /// `12,543`
    Count,
    /// `8.7 tons`
    Tons,
    /// `7.4/10`
    Score,
    /// `4.2`
    Plain,
}

impl Unit {
    /// Render a value in this unit
    pub fn display(self, value: f64) -> String {
        match self {
            Unit::Minutes => format!("{} mins", format::number(value)),
            Unit::Percent => format!("{}%", format::number(value)),
            Unit::Count => format::grouped(value),
            Unit::Tons => format!("{} tons", format::number(value)),
            Unit::Score => format!("{}/10", format::number(value)),
            Unit::Plain => format::number(value),
        }
    }
}

/// A single labelled value ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub unit: Unit,
    pub display: String,
}

impl MetricField {
    fn new(key: &'static str, label: &'static str, value: f64, unit: Unit) -> Self {
        Self {
            key,
            label,
            value,
            unit,
            display: unit.display(value),
        }
    }
}

/// Delivery performance metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryMetrics {
    pub avg_delivery_time: f64,
    pub orders_today: f64,
    pub on_time_rate: f64,
    pub delivery_delay: f64,
    pub customer_complaints: f64,
}

impl DeliveryMetrics {
    pub fn fields(&self) -> Vec<MetricField> {
        vec![
            MetricField::new(
                "avgDeliveryTime",
                "Avg. Delivery Time",
                self.avg_delivery_time,
                Unit::Minutes,
            ),
            MetricField::new("ordersToday", "Orders Today", self.orders_today, Unit::Count),
            MetricField::new("onTimeRate", "On-time Rate", self.on_time_rate, Unit::Percent),
            MetricField::new(
                "deliveryDelay",
                "Delivery Delays",
                self.delivery_delay,
                Unit::Percent,
            ),
            MetricField::new(
                "customerComplaints",
                "Customer Complaints",
                self.customer_complaints,
                Unit::Count,
            ),
        ]
    }
}

/// Consumer behavior metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerMetrics {
    pub avg_orders_per_user: f64,
    pub impulse_purchase_rate: f64,
    pub expect_fast_delivery: f64,
    pub immediate_need: f64,
    pub instant_gratification: f64,
    pub ordering_frequency: f64,
    pub speed_expectation: f64,
}

impl ConsumerMetrics {
    pub fn fields(&self) -> Vec<MetricField> {
        vec![
            MetricField::new(
                "avgOrdersPerUser",
                "Avg. Orders per User",
                self.avg_orders_per_user,
                Unit::Plain,
            ),
            MetricField::new(
                "impulsePurchaseRate",
                "Impulse Purchases",
                self.impulse_purchase_rate,
                Unit::Percent,
            ),
            MetricField::new(
                "expectFastDelivery",
                "Expect 10min Delivery",
                self.expect_fast_delivery,
                Unit::Percent,
            ),
            MetricField::new("immediateNeed", "Immediate Need", self.immediate_need, Unit::Percent),
            MetricField::new(
                "instantGratification",
                "Instant Gratification",
                self.instant_gratification,
                Unit::Percent,
            ),
            MetricField::new(
                "orderingFrequency",
                "Ordering Frequency",
                self.ordering_frequency,
                Unit::Plain,
            ),
            MetricField::new(
                "speedExpectation",
                "Speed Expectation",
                self.speed_expectation,
                Unit::Score,
            ),
        ]
    }
}

/// Environmental cost metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentMetrics {
    pub co2_emissions: f64,
    pub packaging_waste: f64,
    pub ev_fleet_percentage: f64,
    pub delivery_trips: f64,
    pub environmental_degradation: f64,
}

impl EnvironmentMetrics {
    pub fn fields(&self) -> Vec<MetricField> {
        vec![
            MetricField::new("co2Emissions", "CO2 Emissions (kg)", self.co2_emissions, Unit::Count),
            MetricField::new("packagingWaste", "Packaging Waste", self.packaging_waste, Unit::Tons),
            MetricField::new("deliveryTrips", "Delivery Trips", self.delivery_trips, Unit::Count),
            MetricField::new(
                "environmentalDegradation",
                "Environmental Degradation",
                self.environmental_degradation,
                Unit::Score,
            ),
            MetricField::new(
                "evFleetPercentage",
                "EV Fleet Share",
                self.ev_fleet_percentage,
                Unit::Percent,
            ),
        ]
    }
}

/// Labor condition metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborMetrics {
    pub avg_time_pressure: f64,
    pub turnover_rate: f64,
    pub accidents_this_month: f64,
    pub worker_stress: f64,
    pub overspeeding_incidents: f64,
    pub gig_worker_turnover: f64,
}

impl LaborMetrics {
    pub fn fields(&self) -> Vec<MetricField> {
        vec![
            MetricField::new(
                "avgTimePressure",
                "Avg. Delivery Time Pressure",
                self.avg_time_pressure,
                Unit::Score,
            ),
            MetricField::new(
                "turnoverRate",
                "Monthly Turnover Rate",
                self.turnover_rate,
                Unit::Percent,
            ),
            MetricField::new(
                "accidentsThisMonth",
                "Reported Accidents",
                self.accidents_this_month,
                Unit::Plain,
            ),
            MetricField::new(
                "workerStress",
                "Worker Stress Level",
                self.worker_stress,
                Unit::Score,
            ),
            MetricField::new(
                "overspeedingIncidents",
                "Overspeeding Incidents",
                self.overspeeding_incidents,
                Unit::Plain,
            ),
            MetricField::new(
                "gigWorkerTurnover",
                "Gig Worker Turnover",
                self.gig_worker_turnover,
                Unit::Percent,
            ),
        ]
    }
}

/// One loaded metric group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "group", content = "metrics", rename_all = "lowercase")]
pub enum MetricGroup {
    Delivery(DeliveryMetrics),
    Consumer(ConsumerMetrics),
    Environment(EnvironmentMetrics),
    Labor(LaborMetrics),
}

impl MetricGroup {
    pub fn kind(&self) -> GroupKind {
        match self {
            MetricGroup::Delivery(_) => GroupKind::Delivery,
            MetricGroup::Consumer(_) => GroupKind::Consumer,
            MetricGroup::Environment(_) => GroupKind::Environment,
            MetricGroup::Labor(_) => GroupKind::Labor,
        }
    }

    pub fn fields(&self) -> Vec<MetricField> {
        match self {
            MetricGroup::Delivery(m) => m.fields(),
            MetricGroup::Consumer(m) => m.fields(),
            MetricGroup::Environment(m) => m.fields(),
            MetricGroup::Labor(m) => m.fields(),
        }
    }
}

/// Outcome of one group request, as applied to its slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotUpdate {
    /// The group arrived
    Filled(MetricGroup),
    /// The request failed; any earlier value is dropped
    Cleared(GroupKind),
}

impl SlotUpdate {
    pub fn kind(&self) -> GroupKind {
        match self {
            SlotUpdate::Filled(group) => group.kind(),
            SlotUpdate::Cleared(kind) => *kind,
        }
    }
}

/// The four group slots, each independently empty until its data arrives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricGroups {
    pub delivery: Option<DeliveryMetrics>,
    pub consumer: Option<ConsumerMetrics>,
    pub environment: Option<EnvironmentMetrics>,
    pub labor: Option<LaborMetrics>,
}

impl MetricGroups {
    /// Store a group in its slot, replacing any previous value
    pub fn apply(&mut self, group: MetricGroup) {
        match group {
            MetricGroup::Delivery(m) => self.delivery = Some(m),
            MetricGroup::Consumer(m) => self.consumer = Some(m),
            MetricGroup::Environment(m) => self.environment = Some(m),
            MetricGroup::Labor(m) => self.labor = Some(m),
        }
    }

    /// Empty a slot so it renders as not loaded
    pub fn clear(&mut self, kind: GroupKind) {
        match kind {
            GroupKind::Delivery => self.delivery = None,
            GroupKind::Consumer => self.consumer = None,
            GroupKind::Environment => self.environment = None,
            GroupKind::Labor => self.labor = None,
        }
    }

    /// Fill or empty a slot
    pub fn record(&mut self, update: SlotUpdate) {
        match update {
            SlotUpdate::Filled(group) => self.apply(group),
            SlotUpdate::Cleared(kind) => self.clear(kind),
        }
    }

    pub fn is_loaded(&self, kind: GroupKind) -> bool {
        match kind {
            GroupKind::Delivery => self.delivery.is_some(),
            GroupKind::Consumer => self.consumer.is_some(),
            GroupKind::Environment => self.environment.is_some(),
            GroupKind::Labor => self.labor.is_some(),
        }
    }

    pub fn is_complete(&self) -> bool {
        GroupKind::ALL.into_iter().all(|kind| self.is_loaded(kind))
    }

    /// Owned copy of a slot, if filled
    pub fn get(&self, kind: GroupKind) -> Option<MetricGroup> {
        match kind {
            GroupKind::Delivery => self.delivery.clone().map(MetricGroup::Delivery),
            GroupKind::Consumer => self.consumer.clone().map(MetricGroup::Consumer),
            GroupKind::Environment => self.environment.clone().map(MetricGroup::Environment),
            GroupKind::Labor => self.labor.clone().map(MetricGroup::Labor),
        }
    }
}
