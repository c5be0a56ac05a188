use crate::page::Comparison;
use crate::page::Impact;
use crate::page::PageContent;
use crate::page::Scorecard;
use crate::page::Toolkit;
use crate::page::Vision;
use crate::prose::CallToAction;
use crate::prose::Footer;
use crate::prose::Header;
use crate::prose::Inline;
use crate::prose::Link;
use crate::prose::LinkStyle;
use crate::prose::ListItem;
use crate::prose::Protocol;
use crate::prose::SampleOutput;
use crate::record::ComparisonMetric;
use crate::record::ImpactItem;
use crate::record::Phase;
use crate::record::ScorecardRow;
use crate::record::ToolkitRow;
use crate::record::VisionPoint;
use crate::table::TableSource;

const INTRO: &[Inline] = &[
    Inline::Text("Training and inference of AI models consume "),
    Inline::Highlight("energy, water, and materials"),
    Inline::Text(", often without real-time visibility. "),
    Inline::Strong("Green Lens"),
    Inline::Text(" addresses this by measuring, analyzing, and reporting AI's environmental impact "),
    Inline::Strong("per query, per task, and across lifecycle stages"),
    Inline::Text("."),
];

const VISION_POINTS: &[VisionPoint] = &[
    VisionPoint {
        title: "📊 Accurate Assessment",
        description: "Carbon, water, and material footprint measurement",
    },
    VisionPoint {
        title: "🔄 Comparability",
        description: "Across models, infrastructures, and geographies",
    },
    VisionPoint {
        title: "💡 Actionable Insights",
        description: "Reduce environmental impact with recommendations",
    },
    VisionPoint {
        title: "🚀 Wide Adoption",
        description: "For AI companies, developers, and regulators",
    },
];

const PROTOCOL_ITEMS: &[ListItem] = &[
    ListItem::leaf("Embedded telemetry in ML frameworks (PyTorch, TensorFlow, JAX)"),
    ListItem::leaf("Tracks energy, carbon, and water footprints per query, per inference, and per training run"),
    ListItem::leaf("Allocates environmental impact in shared/multi-tenant systems"),
    ListItem {
        text: "Standardizes functional units for comparability:",
        children: &[
            "LLMs: per 1M tokens",
            "Vision models: per 1,000 images",
            "Recommendation systems: per user/day",
        ],
    },
    ListItem::leaf("Provides user-facing \"carbon & water labels\" to raise awareness"),
];

const TOOLKIT_ROWS: &[ToolkitRow] = &[
    ToolkitRow {
        focus_area: "Carbon Footprint",
        method: "Live GPU/CPU telemetry → CO₂eq conversion",
        deliverable: "Per-query emissions logging",
        novelty: "Real-time, per-query metrics",
    },
    ToolkitRow {
        focus_area: "Water Footprint",
        method: "Energy × WUE × Geo-Aware Index",
        deliverable: "Per-query water consumption",
        novelty: "Reflects water scarcity context",
    },
    ToolkitRow {
        focus_area: "Real-Time Monitoring",
        method: "JSON/CSV logs + live plots",
        deliverable: "Live dashboard",
        novelty: "Instant environmental insights",
    },
    ToolkitRow {
        focus_area: "Optimization Insights",
        method: "Rule-based recommendations",
        deliverable: "Energy/water reduction tips",
        novelty: "Actionable sustainability improvements",
    },
    ToolkitRow {
        focus_area: "Lifecycle Assessment",
        method: "Training + inference + data + hardware",
        deliverable: "Sustainability Scorecard",
        novelty: "Full lifecycle per-unit impact",
    },
    ToolkitRow {
        focus_area: "Comparative Analysis",
        method: "AI vs AI or AI vs non-AI",
        deliverable: "Side-by-side scorecards",
        novelty: "Informed trade-off evaluation",
    },
];

const PER_QUERY_SAMPLE: &str = "Query: \"Translate 1000 sentences from English → French\"
Elapsed Time: 0.37 sec
Energy: 0.005 kWh
Carbon: 0.002 kg CO₂eq
Water: 0.009 L
Recommendation: Use distilled model to save ~0.001 kg CO₂eq per 1000 tokens";

const SCORECARD_ROWS: &[ScorecardRow] = &[
    ScorecardRow {
        phase: Phase::Training,
        energy_kwh: 12.5,
        carbon_kg: 5.2,
        water_l: 22.5,
        per_unit: "0.10 / 1M tokens",
    },
    ScorecardRow {
        phase: Phase::Inference,
        energy_kwh: 3.1,
        carbon_kg: 1.4,
        water_l: 4.8,
        per_unit: "0.02 / 1M tokens",
    },
    ScorecardRow {
        phase: Phase::Total,
        energy_kwh: 15.6,
        carbon_kg: 6.6,
        water_l: 27.3,
        per_unit: "—",
    },
];

const COMPARISON_METRICS: &[ComparisonMetric] = &[
    ComparisonMetric::current("Granularity: Aggregated metrics only"),
    ComparisonMetric::current("Carbon: Estimates, no geo-adjustment"),
    ComparisonMetric::current("Water: Rarely included"),
    ComparisonMetric::current("Lifecycle: Partial coverage"),
    ComparisonMetric::current("User Awareness: None"),
    ComparisonMetric::current("Comparability: Inconsistent units"),
    ComparisonMetric::current("Insights: Rare recommendations"),
    ComparisonMetric::current("Benchmarking: Fragmented"),
    ComparisonMetric::green_lens("Granularity: Real-time, per-query"),
    ComparisonMetric::green_lens("Carbon: Accurate + location-aware"),
    ComparisonMetric::green_lens("Water: WUE + scarcity index"),
    ComparisonMetric::green_lens("Lifecycle: Full coverage"),
    ComparisonMetric::green_lens("User Awareness: Carbon & water labels"),
    ComparisonMetric::green_lens("Comparability: Standardized units"),
    ComparisonMetric::green_lens("Insights: Automated optimization"),
    ComparisonMetric::green_lens("Benchmarking: Universal suite"),
];

const IMPACT_ITEMS: &[ImpactItem] = &[
    ImpactItem {
        icon: "💡",
        title: "Innovation",
        description: "First real-time per-query AI footprint toolkit",
    },
    ImpactItem {
        icon: "🎯",
        title: "Accuracy",
        description: "Telemetry-driven, not proxy estimates",
    },
    ImpactItem {
        icon: "⚡",
        title: "Feasibility",
        description: "Lightweight Python, cloud-agnostic",
    },
    ImpactItem {
        icon: "🌍",
        title: "Impact",
        description: "Enables sustainable AI decisions",
    },
    ImpactItem {
        icon: "📢",
        title: "Awareness",
        description: "Increases carbon & water literacy",
    },
];

impl PageContent {
    /// The content of the Green Lens page.
    pub const fn green_lens() -> PageContent {
        PageContent {
            page_title: "Green Lens - AI Sustainability Toolkit",
            header: Header {
                glyph: "🌱",
                title: "Green Lens",
                taglines: [
                    "Real-Time AI Sustainability Toolkit",
                    "Transforming AI Development with Transparent Environmental Insights",
                ],
                lead: "AI is accelerating global innovation—but comes with hidden environmental costs.",
                intro: INTRO,
            },
            vision: Vision {
                heading: "Our Vision",
                points: VISION_POINTS,
            },
            protocol: Protocol {
                heading: "Key Innovation: AITP Protocol",
                name: "AI Telemetry & Sustainability Protocol",
                intro: "Green Lens introduces AITP, a new standard for real-time AI sustainability:",
                items: PROTOCOL_ITEMS,
            },
            toolkit: Toolkit {
                heading: "Toolkit Overview",
                rows: TableSource::Rows(TOOLKIT_ROWS),
            },
            sample_output: SampleOutput {
                heading: "Sample Output",
                title: "Per-Query Footprint",
                text: PER_QUERY_SAMPLE,
            },
            scorecard: Scorecard {
                title: "Sustainability Scorecard",
                rows: TableSource::Rows(SCORECARD_ROWS),
            },
            comparison: Comparison {
                heading: "Current Solutions vs Green Lens",
                current_title: "❌ Current Tools",
                green_lens_title: "✅ Green Lens",
                metrics: COMPARISON_METRICS,
            },
            impact: Impact {
                heading: "Why Green Lens Matters",
                items: IMPACT_ITEMS,
            },
            call_to_action: CallToAction {
                heading: "Ready to Try Green Lens?",
                text: "Experience our prototype and see real-time AI sustainability in action",
                links: [
                    Link {
                        label: "View Prototype",
                        href: "#",
                        style: LinkStyle::Primary,
                    },
                    Link {
                        label: "Read Documentation",
                        href: "#",
                        style: LinkStyle::Secondary,
                    },
                ],
            },
            footer: Footer {
                lines: [
                    "🌱 Green Lens - Making AI Sustainable, One Query at a Time",
                    "Built for positive environmental impact",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::record::Side;
    use crate::table::TableRecord;

    #[test]
    fn every_table_is_rectangular() {
        let content = PageContent::green_lens();
        let tables = content.tables().expect("shipped tables are well formed");

        for table in tables {
            for row in table.rows() {
                assert_eq!(table.columns().len(), row.len(), "table `{}`", table.name());
            }
        }
    }

    #[test]
    fn record_cells_match_their_schema() {
        for row in TOOLKIT_ROWS {
            assert_eq!(ToolkitRow::schema().len(), row.cells().len());
        }

        for row in SCORECARD_ROWS {
            assert_eq!(ScorecardRow::schema().len(), row.cells().len());
        }
    }

    #[test]
    fn scorecard_total_is_the_sum_of_the_phases() {
        let [training, inference, total] = SCORECARD_ROWS else {
            panic!("the scorecard must have exactly three rows");
        };

        assert_eq!(Phase::Training, training.phase);
        assert_eq!(Phase::Inference, inference.phase);
        assert_eq!(Phase::Total, total.phase);

        assert_relative_eq!(total.energy_kwh, training.energy_kwh + inference.energy_kwh, epsilon = 1e-9);
        assert_relative_eq!(total.carbon_kg, training.carbon_kg + inference.carbon_kg, epsilon = 1e-9);
        assert_relative_eq!(total.water_l, training.water_l + inference.water_l, epsilon = 1e-9);
    }

    #[test]
    fn comparison_panels_hold_eight_bullets_each() {
        let comparison = PageContent::green_lens().comparison;

        assert_eq!(8, comparison.panel(Side::Current).count());
        assert_eq!(8, comparison.panel(Side::GreenLens).count());
        assert_eq!(
            Some("Granularity: Aggregated metrics only"),
            comparison.panel(Side::Current).next().map(|m| m.label)
        );
        assert_eq!(
            Some("Benchmarking: Universal suite"),
            comparison.panel(Side::GreenLens).last().map(|m| m.label)
        );
    }

    #[test]
    fn section_sizes() {
        let content = PageContent::green_lens();

        assert_eq!(4, content.vision.points.len());
        assert_eq!(Ok(6), content.toolkit.table().map(|t| t.rows().len()));
        assert_eq!(Ok(3), content.scorecard.table().map(|t| t.rows().len()));
        assert_eq!(5, content.impact.items.len());
        assert_eq!(5, content.protocol.items.len());
    }

    #[test]
    fn content_serializes_to_json() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(PageContent::green_lens())?;

        assert_eq!("Green Lens", json["header"]["title"]);
        assert_eq!("greenlens", json["comparison"]["metrics"][8]["side"]);
        assert_eq!(15.6, json["scorecard"]["rows"][2]["energy_kwh"]);
        assert_eq!("highlight", json["header"]["intro"][1]["kind"]);

        Ok(())
    }
}
