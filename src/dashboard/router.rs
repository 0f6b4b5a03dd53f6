//! Tab Router
//!
//! Pure projection from (active tab, metric slots) to the content block
//! that tab shows. Every block checks each metric slot on its own and
//! substitutes a placeholder for a slot that has not arrived yet.

use serde::Serialize;

use super::chart::{self, ChartConfig};
use super::content::{
    self, Archetype, ChallengeArea, FeedbackLoop, IcebergLevel, LeveragePoint, Polarity,
    RoadmapPhase, StructuralSolution, Tone, VariableGroup,
};
use super::format;
use super::metrics::{GroupKind, MetricField, MetricGroups};
use super::state::{Tab, ViewState};

/// Shown in a metric card whose group has not loaded
pub const LOADING_PLACEHOLDER: &str = "Loading data...";

/// Shown in a summary tile whose group has not loaded
pub const MISSING_VALUE: &str = "--";

/// A control inside a content block that switches tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabAction {
    pub label: &'static str,
    pub target: Tab,
}

/// Headline number on the overview tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTile {
    pub label: &'static str,
    pub value: String,
    pub loaded: bool,
}

impl SummaryTile {
    fn new(label: &'static str, value: Option<String>, suffix: &str) -> Self {
        Self {
            label,
            loaded: value.is_some(),
            value: format!("{}{}", value.as_deref().unwrap_or(MISSING_VALUE), suffix),
        }
    }

    /// `Label: value`
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "fields", rename_all = "lowercase")]
pub enum CardBody {
    Loading,
    Loaded(Vec<MetricField>),
}

/// Detail card for one metric group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub kind: GroupKind,
    pub title: &'static str,
    pub tone: Tone,
    pub body: CardBody,
}

impl MetricCard {
    fn for_slot(kind: GroupKind, groups: &MetricGroups) -> Self {
        let body = match groups.get(kind) {
            Some(group) => CardBody::Loaded(group.fields()),
            None => CardBody::Loading,
        };
        Self {
            kind,
            title: kind.title(),
            tone: kind.tone(),
            body,
        }
    }

    /// (label, text) rows, or the placeholder alone
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match &self.body {
            CardBody::Loaded(fields) => fields
                .iter()
                .map(|f| (f.label, f.display.clone()))
                .collect(),
            CardBody::Loading => vec![("", LOADING_PLACEHOLDER.to_string())],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewBlock {
    pub question: &'static str,
    pub introduction: &'static [&'static str],
    pub summary: Vec<SummaryTile>,
    pub challenges: &'static [ChallengeArea],
    pub actions: Vec<TabAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataBlock {
    pub heading: &'static str,
    pub cards: Vec<MetricCard>,
    pub charts: Vec<ChartConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisBlock {
    pub cld_intro: &'static str,
    pub key_variables: &'static [VariableGroup],
    pub reinforcing: Vec<FeedbackLoop>,
    pub balancing: Vec<FeedbackLoop>,
    pub archetypes_intro: &'static str,
    pub archetypes: &'static [Archetype],
    pub leverage_intro: &'static str,
    pub leverage_points: &'static [LeveragePoint],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionsBlock {
    pub iceberg: &'static [IcebergLevel],
    pub solutions: &'static [StructuralSolution],
    pub roadmap: &'static [RoadmapPhase],
    pub actions: Vec<TabAction>,
}

/// Renderable content for one tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum ContentBlock {
    Overview(OverviewBlock),
    Data(DataBlock),
    Analysis(AnalysisBlock),
    Solutions(SolutionsBlock),
}

impl ContentBlock {
    /// The tab this block belongs to
    pub fn tab(&self) -> Tab {
        match self {
            ContentBlock::Overview(_) => Tab::Overview,
            ContentBlock::Data(_) => Tab::Data,
            ContentBlock::Analysis(_) => Tab::Analysis,
            ContentBlock::Solutions(_) => Tab::Solutions,
        }
    }
}

/// Map a tab and the current metric slots to its content
pub fn render(tab: Tab, groups: &MetricGroups) -> ContentBlock {
    match tab {
        Tab::Overview => ContentBlock::Overview(overview(groups)),
        Tab::Data => ContentBlock::Data(data(groups)),
        Tab::Analysis => ContentBlock::Analysis(analysis()),
        Tab::Solutions => ContentBlock::Solutions(solutions()),
    }
}

/// Content for the state's active tab
pub fn render_state(state: &ViewState) -> ContentBlock {
    render(state.active_tab(), state.groups())
}

fn overview(groups: &MetricGroups) -> OverviewBlock {
    let summary = vec![
        SummaryTile::new(
            "Avg. Delivery Time",
            groups.delivery.as_ref().map(|d| format::number(d.avg_delivery_time)),
            " mins",
        ),
        SummaryTile::new(
            "Impulse Purchases",
            groups.consumer.as_ref().map(|c| format::number(c.impulse_purchase_rate)),
            "%",
        ),
        SummaryTile::new(
            "CO2 Emissions",
            groups.environment.as_ref().map(|e| format::grouped(e.co2_emissions)),
            " kg",
        ),
        SummaryTile::new(
            "Worker Turnover",
            groups.labor.as_ref().map(|l| format::number(l.turnover_rate)),
            "%",
        ),
    ];

    OverviewBlock {
        question: content::RESEARCH_QUESTION,
        introduction: content::INTRODUCTION,
        summary,
        challenges: content::CHALLENGES,
        actions: vec![
            TabAction {
                label: "View Data Insights",
                target: Tab::Data,
            },
            TabAction {
                label: "See Proposed Solutions",
                target: Tab::Solutions,
            },
        ],
    }
}

fn data(groups: &MetricGroups) -> DataBlock {
    DataBlock {
        heading: "Real-time Quick Commerce Metrics",
        cards: GroupKind::ALL
            .into_iter()
            .map(|kind| MetricCard::for_slot(kind, groups))
            .collect(),
        charts: chart::trend_charts().into(),
    }
}

fn analysis() -> AnalysisBlock {
    AnalysisBlock {
        cld_intro: content::CLD_INTRO,
        key_variables: content::KEY_VARIABLES,
        reinforcing: content::loops(Polarity::Reinforcing).copied().collect(),
        balancing: content::loops(Polarity::Balancing).copied().collect(),
        archetypes_intro: content::ARCHETYPES_INTRO,
        archetypes: content::ARCHETYPES,
        leverage_intro: content::LEVERAGE_INTRO,
        leverage_points: content::LEVERAGE_POINTS,
    }
}

fn solutions() -> SolutionsBlock {
    SolutionsBlock {
        iceberg: content::ICEBERG,
        solutions: content::STRUCTURAL_SOLUTIONS,
        roadmap: content::ROADMAP,
        actions: vec![
            TabAction {
                label: "Revisit System Analysis",
                target: Tab::Analysis,
            },
            TabAction {
                label: "Back to Overview",
                target: Tab::Overview,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::loader::StaticSource;
    use crate::dashboard::metrics::MetricGroup;

    #[test]
    fn test_each_tab_maps_to_its_block() {
        let groups = StaticSource::snapshot();
        for tab in Tab::ALL {
            assert_eq!(render(tab, &groups).tab(), tab);
        }
    }

    #[test]
    fn test_initial_state_renders_overview() {
        let block = render_state(&ViewState::new());
        assert!(matches!(block, ContentBlock::Overview(_)));
    }

    #[test]
    fn test_overview_summary_loaded() {
        let ContentBlock::Overview(block) = render(Tab::Overview, &StaticSource::snapshot()) else {
            panic!("expected overview block");
        };
        let lines: Vec<_> = block.summary.iter().map(SummaryTile::line).collect();
        assert_eq!(
            lines,
            vec![
                "Avg. Delivery Time: 12.5 mins",
                "Impulse Purchases: 38%",
                "CO2 Emissions: 12,450 kg",
                "Worker Turnover: 22%",
            ]
        );
        assert!(block.summary.iter().all(|t| t.loaded));
    }

    #[test]
    fn test_overview_summary_placeholders_per_slot() {
        let mut groups = MetricGroups::default();
        groups.apply(MetricGroup::Consumer(StaticSource::consumer()));

        let ContentBlock::Overview(block) = render(Tab::Overview, &groups) else {
            panic!("expected overview block");
        };
        assert_eq!(block.summary[0].value, "-- mins");
        assert_eq!(block.summary[1].value, "38%");
        assert_eq!(block.summary[2].value, "-- kg");
        assert_eq!(block.summary[3].value, "--%");
        assert!(!block.summary[0].loaded);
        assert!(block.summary[1].loaded);
    }

    #[test]
    fn test_overview_actions() {
        let ContentBlock::Overview(block) = render(Tab::Overview, &MetricGroups::default()) else {
            panic!("expected overview block");
        };
        assert_eq!(block.actions[0].label, "View Data Insights");
        assert_eq!(block.actions[0].target, Tab::Data);
        assert_eq!(block.actions[1].target, Tab::Solutions);
    }

    #[test]
    fn test_data_cards_before_load() {
        let ContentBlock::Data(block) = render(Tab::Data, &MetricGroups::default()) else {
            panic!("expected data block");
        };
        assert_eq!(block.cards.len(), 4);
        for card in &block.cards {
            assert_eq!(card.body, CardBody::Loading);
            assert_eq!(card.rows(), vec![("", LOADING_PLACEHOLDER.to_string())]);
        }
        assert_eq!(block.charts.len(), 2);
    }

    #[test]
    fn test_data_cards_mixed_slots() {
        let mut groups = MetricGroups::default();
        groups.apply(MetricGroup::Environment(StaticSource::environment()));

        let ContentBlock::Data(block) = render(Tab::Data, &groups) else {
            panic!("expected data block");
        };
        let kinds: Vec<_> = block.cards.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, GroupKind::ALL.to_vec());
        assert_eq!(block.cards[0].body, CardBody::Loading);
        assert_eq!(block.cards[2].rows()[0], ("CO2 Emissions (kg)", "12,450".to_string()));
        assert_eq!(block.cards[3].body, CardBody::Loading);
    }

    #[test]
    fn test_data_cards_after_load() {
        let ContentBlock::Data(block) = render(Tab::Data, &StaticSource::snapshot()) else {
            panic!("expected data block");
        };
        let delivery = block.cards[0].rows();
        assert_eq!(delivery[0], ("Avg. Delivery Time", "12.5 mins".to_string()));
        assert_eq!(delivery[1], ("Orders Today", "12,543".to_string()));
        assert_eq!(delivery[2], ("On-time Rate", "87%".to_string()));

        let labor = block.cards[3].rows();
        assert_eq!(labor[0], ("Avg. Delivery Time Pressure", "7.8/10".to_string()));
        assert_eq!(labor[2], ("Reported Accidents", "14".to_string()));
    }

    #[test]
    fn test_analysis_block() {
        let ContentBlock::Analysis(block) = render(Tab::Analysis, &MetricGroups::default()) else {
            panic!("expected analysis block");
        };
        assert_eq!(block.reinforcing.len(), 3);
        assert_eq!(block.balancing.len(), 2);
        assert_eq!(block.reinforcing[0].title, "Instant Gratification Loop");
        assert_eq!(block.leverage_points.len(), 5);
    }

    #[test]
    fn test_solutions_block_has_three_phases() {
        let ContentBlock::Solutions(block) = render(Tab::Solutions, &MetricGroups::default()) else {
            panic!("expected solutions block");
        };
        assert_eq!(block.roadmap.len(), 3);
        assert!(block.actions.iter().any(|a| a.target == Tab::Overview));
    }

    #[test]
    fn test_block_serializes_with_tab_tag() {
        let json = serde_json::to_value(render(Tab::Data, &MetricGroups::default())).unwrap();
        assert_eq!(json["tab"], "data");
        assert_eq!(json["cards"][0]["body"]["status"], "loading");
    }
}
