//! Static narrative content
//!
//! Copy for the overview, analysis and solutions tabs. Nothing here is
//! derived from metric data.

use serde::Serialize;

/// Palette tag; the client maps each one to its own colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Danger,
    Success,
    Warning,
}

/// Loop polarity in a causal loop diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Reinforcing,
    Balancing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChallengeArea {
    pub title: &'static str,
    pub summary: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableGroup {
    pub title: &'static str,
    pub variables: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackLoop {
    pub code: &'static str,
    pub title: &'static str,
    pub polarity: Polarity,
    pub chain: &'static str,
    pub note: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

/// One row of the leverage points table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeveragePoint {
    pub point: &'static str,
    pub category: &'static str,
    pub rationale: &'static str,
    pub expected_impact: &'static str,
}

/// A level of the iceberg model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IcebergLevel {
    pub title: &'static str,
    pub observations: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructuralSolution {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub step: u8,
    pub title: &'static str,
    pub actions: &'static [&'static str],
}

pub const TITLE: &str = "Quick Commerce Dynamics";
pub const SUBTITLE: &str = "Group 117 - Systems Thinking Project";
pub const DESCRIPTION: &str = "Analyzing the impact of quick commerce in India";

pub const RESEARCH_QUESTION: &str = "How is 10-minute delivery changing consumer behavior, and what are the trade-offs in terms of environmental cost and labour conditions?";

pub const INTRODUCTION: &[&str] = &[
    "Quick commerce refers to online retail models promising delivery in about 10 minutes, enabled by networks of urban \"dark stores\" and delivery riders. Companies like Blinkit, Zepto, and Swiggy Instamart are competing to serve India's 1.4 billion consumers with lightning-fast convenience.",
    "However, this convenience has hidden costs. Ultra-fast delivery reshapes consumer behavior (more impulse buying and higher speed expectations), strains delivery workers (pressure and accidents), and increases environmental impacts (frequent trips, emissions, and waste).",
];

pub const CHALLENGES: &[ChallengeArea] = &[
    ChallengeArea {
        title: "Consumer Behavior",
        summary: "Increased impulse buying, higher speed expectations, reduced planning habits",
        tone: Tone::Secondary,
    },
    ChallengeArea {
        title: "Labor Conditions",
        summary: "Worker stress, time pressure, risk-taking behavior, high turnover",
        tone: Tone::Danger,
    },
    ChallengeArea {
        title: "Environmental Impact",
        summary: "Increased emissions, packaging waste, energy consumption",
        tone: Tone::Success,
    },
];

pub const CLD_INTRO: &str = "Our Causal Loop Diagram (CLD) shows how variables influence each other through feedback loops, including variables from three circles: Consumer Behavior, Labor Conditions, and Environmental Cost.";

pub const KEY_VARIABLES: &[VariableGroup] = &[
    VariableGroup {
        title: "Consumer Behavior",
        variables: &[
            "Immediate Need for Product",
            "Instant Gratification",
            "Impulse Buying",
            "Ordering Frequency",
            "Speed Expectation",
            "Customer Dissatisfaction",
        ],
    },
    VariableGroup {
        title: "Labor Conditions",
        variables: &[
            "Delivery Time Pressure",
            "Worker Stress & Fatigue",
            "Overspeeding / Accidents",
            "Gig Worker Turnover",
        ],
    },
    VariableGroup {
        title: "Environmental Cost",
        variables: &[
            "Number of Delivery Trips",
            "Delivery Vehicle Emissions",
            "Packaging Waste",
            "Environmental Degradation",
        ],
    },
];

pub const FEEDBACK_LOOPS: &[FeedbackLoop] = &[
    FeedbackLoop {
        code: "R1",
        title: "Instant Gratification Loop",
        polarity: Polarity::Reinforcing,
        chain: "Faster delivery → more impulse buying → increased ordering frequency → higher speed expectations → more demand for 10-min delivery",
        note: "Consumers shift from planned shopping to buying on the go, creating a cycle of demand.",
        tone: Tone::Accent,
    },
    FeedbackLoop {
        code: "R2",
        title: "Speed Expectation Spiral",
        polarity: Polarity::Reinforcing,
        chain: "Rising consumer speed expectations → platforms build more dark stores and logistics → expands 10-min coverage → reinforces speed as a norm.",
        note: "Triggers a competitive \"arms race\" where companies must keep speeding up to retain users.",
        tone: Tone::Success,
    },
    FeedbackLoop {
        code: "R3",
        title: "Environmental Impact Loop",
        polarity: Polarity::Reinforcing,
        chain: "More quick orders → more delivery trips and packaging → higher emissions and waste → worsened environmental degradation.",
        note: "Unchecked growth leads to ecological consequences.",
        tone: Tone::Warning,
    },
    FeedbackLoop {
        code: "B1",
        title: "Customer Satisfaction Balancer",
        polarity: Polarity::Balancing,
        chain: "Pressure to deliver faster → overspeeding and rider fatigue → increased accidents and delivery delays → customer dissatisfaction → reduced demand.",
        note: "This loop tempers growth by showing how excessive speed harms service quality and trust.",
        tone: Tone::Danger,
    },
    FeedbackLoop {
        code: "B2",
        title: "Regulatory Backlash Loop",
        polarity: Polarity::Balancing,
        chain: "Environmental degradation → public concern → government regulations → constraints on quick commerce → reduced environmental impact.",
        note: "Potential future balancing mechanism as impacts become more visible.",
        tone: Tone::Secondary,
    },
];

pub const ARCHETYPES_INTRO: &str = "We observe familiar system archetypes in quick commerce that help explain the systemic challenges and potential pitfalls:";

pub const ARCHETYPES: &[Archetype] = &[
    Archetype {
        title: "Tragedy of the Commons",
        description: "Multiple platforms over-exploit shared resources (road space, labor). Each adds more riders and dark stores to win market share, collectively causing congestion and pollution.",
        tone: Tone::Warning,
    },
    Archetype {
        title: "Fixes that Fail",
        description: "Symptomatic fixes (like adding more dark stores or riders) may solve delivery delays temporarily but worsen congestion and emissions. Each quick fix leads to unintended side effects that undermine the solution.",
        tone: Tone::Danger,
    },
    Archetype {
        title: "Shifting the Burden",
        description: "Relying on ultra-fast delivery is a short-term fix that diverts attention from deeper issues. Platforms invest in technology to deliver faster instead of addressing root causes like inefficient urban planning or consumption habits.",
        tone: Tone::Secondary,
    },
    Archetype {
        title: "Success to the Successful",
        description: "Large platforms that deliver faster capture more customers, pushing smaller retailers aside. This self-reinforcing dynamic concentrates market power and makes the fast model even stronger over time.",
        tone: Tone::Accent,
    },
];

pub const LEVERAGE_INTRO: &str = "Leverage points are places in a system where a small change can have large effects. Based on Meadows' framework, we have identified key intervention points.";

pub const LEVERAGE_POINTS: &[LeveragePoint] = &[
    LeveragePoint {
        point: "Minimum order value / delivery fees",
        category: "Numbers-Constants and Parameters",
        rationale: "Discourages small orders and spreads demand",
        expected_impact: "Fewer trivial deliveries; more efficient routes",
    },
    LeveragePoint {
        point: "Dark store locations & routes",
        category: "Material flows",
        rationale: "Optimizes logistics and reduces travel distance",
        expected_impact: "Lower emissions; less traffic congestion",
    },
    LeveragePoint {
        point: "Transparent impact information",
        category: "Information flows",
        rationale: "Informs consumers of carbon footprint and labor costs",
        expected_impact: "Shifts choices toward eco-friendly options",
    },
    LeveragePoint {
        point: "Stricter labor and packaging rules",
        category: "Rules-Incentives, Punishments, Constraints",
        rationale: "Protects workers and environment (e.g., enforce breaks, ban plastics)",
        expected_impact: "Fewer accidents; less waste",
    },
    LeveragePoint {
        point: "Goal shift to sustainable convenience",
        category: "Goals-The Purpose",
        rationale: "Changes company objectives beyond just speed",
        expected_impact: "Balances growth with social & environmental goals",
    },
];

pub const ICEBERG: &[IcebergLevel] = &[
    IcebergLevel {
        title: "Event Level",
        observations: &[
            "Groceries delivered in 10 minutes",
            "More dark stores and delivery fleets",
            "City congestion rises",
            "Workers report rushed rides and accidents",
        ],
    },
    IcebergLevel {
        title: "Pattern Level",
        observations: &[
            "Growing demand for instant delivery",
            "Rising traffic, pollution, and worker stress",
            "Increased corporate focus on faster logistics",
            "Gradual rise in public concern",
        ],
    },
    IcebergLevel {
        title: "Structure Level",
        observations: &[
            "Speed prioritized over safety/sustainability",
            "Incentives push risky worker behavior",
            "Consumers expect fast service",
            "Weak labor and environmental regulations",
            "Low transparency into true costs",
        ],
    },
];

pub const STRUCTURAL_SOLUTIONS: &[StructuralSolution] = &[
    StructuralSolution {
        title: "Redefine System Goals",
        description: "Shift from \"fastest delivery\" to \"sustainable convenience,\" balancing speed with worker well-being and environmental health.",
    },
    StructuralSolution {
        title: "Change Rules & Incentives",
        description: "Implement pricing that reflects social costs (e.g., higher fees for tiny orders) and enforce labor and environmental regulations. Incentivize bulk or off-peak deliveries to reduce strain.",
    },
    StructuralSolution {
        title: "Increase Transparency",
        description: "Show consumers the carbon footprint and labor conditions of each order (e.g., via app data), empowering informed choices.",
    },
    StructuralSolution {
        title: "Optimize Infrastructure",
        description: "Support local stores joining quick-commerce platforms and redesign delivery networks (smarter dark store placement, dedicated EV fleets) to lower travel distance and energy use.",
    },
    StructuralSolution {
        title: "Shift Consumer Mindsets",
        description: "Promote values of responsible consumption over instant gratification through education and campaigns (encourage planning and reduce impulse buys).",
    },
];

pub const ROADMAP: &[RoadmapPhase] = &[
    RoadmapPhase {
        step: 1,
        title: "Short-term (0-6 months)",
        actions: &[
            "Implement minimum order values and dynamic delivery fees",
            "Improve rider safety equipment and training",
            "Launch consumer awareness campaigns about impacts",
            "Pilot carbon footprint labeling on orders",
        ],
    },
    RoadmapPhase {
        step: 2,
        title: "Medium-term (6-18 months)",
        actions: &[
            "Optimize dark store locations using data analytics",
            "Transition 30-50% of fleet to electric vehicles",
            "Implement transparent impact reporting in apps",
            "Develop sustainable packaging alternatives",
            "Establish industry-wide labor standards",
        ],
    },
    RoadmapPhase {
        step: 3,
        title: "Long-term (18+ months)",
        actions: &[
            "Advocate for policy changes and urban planning adjustments",
            "Scale EV fleet to 80-100% coverage",
            "Establish circular economy for packaging",
            "Develop industry-wide sustainability standards",
            "Integrate with public transportation for last-mile delivery",
        ],
    },
];

/// Loops of one polarity, in diagram order
pub fn loops(polarity: Polarity) -> impl Iterator<Item = &'static FeedbackLoop> {
    FEEDBACK_LOOPS.iter().filter(move |l| l.polarity == polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_split() {
        let reinforcing: Vec<_> = loops(Polarity::Reinforcing).map(|l| l.code).collect();
        let balancing: Vec<_> = loops(Polarity::Balancing).map(|l| l.code).collect();
        assert_eq!(reinforcing, vec!["R1", "R2", "R3"]);
        assert_eq!(balancing, vec!["B1", "B2"]);
    }

    #[test]
    fn test_roadmap_phases_are_numbered_in_order() {
        let steps: Vec<_> = ROADMAP.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn test_tables_are_populated() {
        assert_eq!(LEVERAGE_POINTS.len(), 5);
        assert_eq!(ARCHETYPES.len(), 4);
        assert_eq!(ICEBERG.len(), 3);
        assert_eq!(STRUCTURAL_SOLUTIONS.len(), 5);
        assert_eq!(KEY_VARIABLES.len(), 3);
    }
}
