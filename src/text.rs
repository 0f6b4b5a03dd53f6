//! Plain-text rendering
//!
//! Terminal view of a [`ContentBlock`], used by the CLI.

use std::fmt::Write;

use crate::dashboard::content::{self, FeedbackLoop};
use crate::dashboard::router::LOADING_PLACEHOLDER;
use crate::dashboard::{CardBody, ChartConfig, ContentBlock, Tab, TabAction};

/// Render the page header, tab bar and the block
pub fn render_page(block: &ContentBlock) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", content::TITLE);
    let _ = writeln!(out, "{}", content::SUBTITLE);
    let _ = writeln!(out, "{}", tab_bar(block.tab()));
    let _ = writeln!(out);
    out.push_str(&render_block(block));
    out
}

/// Tab bar with the active tab bracketed
pub fn tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render only the block body
pub fn render_block(block: &ContentBlock) -> String {
    let mut out = String::new();

    match block {
        ContentBlock::Overview(b) => {
            section(&mut out, "Research Question");
            let _ = writeln!(out, "{}", b.question);
            for paragraph in b.introduction {
                let _ = writeln!(out, "\n{}", paragraph);
            }

            section(&mut out, "Key Metrics at a Glance");
            for tile in &b.summary {
                let _ = writeln!(out, "  {}", tile.line());
            }

            section(&mut out, "The Quick Commerce Challenge");
            for area in b.challenges {
                let _ = writeln!(out, "  {}: {}", area.title, area.summary);
            }

            actions(&mut out, &b.actions);
        }
        ContentBlock::Data(b) => {
            section(&mut out, b.heading);
            for card in &b.cards {
                let _ = writeln!(out, "\n  {}", card.title);
                match &card.body {
                    CardBody::Loaded(fields) => {
                        for field in fields {
                            let _ = writeln!(out, "    {:<30} {}", field.label, field.display);
                        }
                    }
                    CardBody::Loading => {
                        let _ = writeln!(out, "    {}", LOADING_PLACEHOLDER);
                    }
                }
            }

            section(&mut out, "Trend Analysis");
            for chart in &b.charts {
                chart_table(&mut out, chart);
            }
        }
        ContentBlock::Analysis(b) => {
            section(&mut out, "System Dynamics Analysis");
            let _ = writeln!(out, "{}", b.cld_intro);

            section(&mut out, "Key Variables in the System");
            for group in b.key_variables {
                let _ = writeln!(out, "  {}", group.title);
                for variable in group.variables {
                    let _ = writeln!(out, "    • {}", variable);
                }
            }

            section(&mut out, "Reinforcing Loops (Growth Drivers)");
            feedback_loops(&mut out, &b.reinforcing);
            section(&mut out, "Balancing Loops (System Limits)");
            feedback_loops(&mut out, &b.balancing);

            section(&mut out, "System Archetypes in Quick Commerce");
            let _ = writeln!(out, "{}", b.archetypes_intro);
            for archetype in b.archetypes {
                let _ = writeln!(out, "\n  {}\n    {}", archetype.title, archetype.description);
            }

            section(&mut out, "Leverage Points Analysis");
            let _ = writeln!(out, "{}", b.leverage_intro);
            for point in b.leverage_points {
                let _ = writeln!(out, "\n  {} ({})", point.point, point.category);
                let _ = writeln!(out, "    Why: {}", point.rationale);
                let _ = writeln!(out, "    Impact: {}", point.expected_impact);
            }
        }
        ContentBlock::Solutions(b) => {
            section(&mut out, "Structural Analysis");
            for level in b.iceberg {
                let _ = writeln!(out, "  {}", level.title);
                for item in level.observations {
                    let _ = writeln!(out, "    • {}", item);
                }
            }

            section(&mut out, "Proposed Structural Solutions");
            for (i, solution) in b.solutions.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {}\n     {}",
                    i + 1,
                    solution.title,
                    solution.description
                );
            }

            section(&mut out, "Implementation Roadmap");
            for phase in b.roadmap {
                let _ = writeln!(out, "  ({}) {}", phase.step, phase.title);
                for action in phase.actions {
                    let _ = writeln!(out, "      - {}", action);
                }
            }

            actions(&mut out, &b.actions);
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "=".repeat(title.chars().count()));
}

fn feedback_loops(out: &mut String, loops: &[FeedbackLoop]) {
    for l in loops {
        let _ = writeln!(out, "  {} – {}", l.code, l.title);
        let _ = writeln!(out, "    {}", l.chain);
        let _ = writeln!(out, "    {}", l.note);
    }
}

fn actions(out: &mut String, actions: &[TabAction]) {
    if actions.is_empty() {
        return;
    }
    let _ = writeln!(out);
    for action in actions {
        let _ = writeln!(out, "  -> {} (qc-dash show --tab {})", action.label, action.target);
    }
}

fn chart_table(out: &mut String, chart: &ChartConfig) {
    let _ = writeln!(out, "\n  {} ({:?})", chart.title, chart.kind);
    let _ = write!(out, "    {:<6}", "");
    for ds in &chart.data.datasets {
        let _ = write!(out, " {:>26}", ds.label);
    }
    let _ = writeln!(out);
    for (i, label) in chart.data.labels.iter().enumerate() {
        let _ = write!(out, "    {:<6}", label);
        for ds in &chart.data.datasets {
            let value = ds.data.get(i).copied().unwrap_or_default();
            let _ = write!(out, " {:>26}", crate::dashboard::format::number(value));
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{render, MetricGroups, StaticSource};

    #[test]
    fn test_tab_bar_marks_active() {
        let bar = tab_bar(Tab::Analysis);
        assert!(bar.contains("[System Analysis]"));
        assert!(bar.contains(" Overview "));
    }

    #[test]
    fn test_overview_text() {
        let text = render_page(&render(Tab::Overview, &StaticSource::snapshot()));
        assert!(text.contains("Avg. Delivery Time: 12.5 mins"));
        assert!(text.contains("CO2 Emissions: 12,450 kg"));
        assert!(text.contains("View Data Insights"));
    }

    #[test]
    fn test_data_text_before_load() {
        let text = render_block(&render(Tab::Data, &MetricGroups::default()));
        assert_eq!(text.matches("Loading data...").count(), 4);
        assert!(!text.contains("undefined"));
        assert!(text.contains("Jul"));
    }

    #[test]
    fn test_solutions_text() {
        let text = render_block(&render(Tab::Solutions, &MetricGroups::default()));
        assert!(text.contains("Short-term (0-6 months)"));
        assert!(text.contains("Long-term (18+ months)"));
    }
}
