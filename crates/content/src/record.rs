//! Structured records that drive the tables and lists of the page.

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::table::Cell;
use crate::table::Column;
use crate::table::TableRecord;

/// A headline goal of the product, shown as one column of the vision row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisionPoint {
    /// The short title, prefixed with its glyph.
    pub title: &'static str,
    /// A one-line description.
    pub description: &'static str,
}

/// A row of the toolkit overview table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolkitRow {
    /// The area the toolkit covers.
    pub focus_area: &'static str,
    /// How the area is covered.
    pub method: &'static str,
    /// What the user gets.
    pub deliverable: &'static str,
    /// What is new about it.
    pub novelty: &'static str,
}

impl TableRecord for ToolkitRow {
    const NAME: &'static str = "toolkit";

    fn schema() -> Vec<Column> {
        vec![
            Column::text("Focus Area"),
            Column::text("Method"),
            Column::text("Deliverable"),
            Column::text("Novelty"),
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.focus_area),
            Cell::from(self.method),
            Cell::from(self.deliverable),
            Cell::from(self.novelty),
        ]
    }
}

/// A lifecycle phase of the sample scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Model training.
    Training,
    /// Model inference.
    Inference,
    /// The sum of the preceding phases.
    Total,
}

impl Phase {
    /// The label shown in the scorecard.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Training => "Training",
            Phase::Inference => "Inference",
            Phase::Total => "Total",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A row of the sample sustainability scorecard.
///
/// The values are illustrative fixtures. The `Total` row is written out
/// literally and is expected to equal the sum of the other rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScorecardRow {
    /// The lifecycle phase.
    pub phase: Phase,
    /// Energy in kWh.
    pub energy_kwh: f64,
    /// Carbon in kg CO₂eq.
    pub carbon_kg: f64,
    /// Water in litres.
    pub water_l: f64,
    /// The per-unit figure, already formatted.
    pub per_unit: &'static str,
}

impl TableRecord for ScorecardRow {
    const NAME: &'static str = "scorecard";

    fn schema() -> Vec<Column> {
        vec![
            Column::text("Phase"),
            Column::number("Energy (kWh)"),
            Column::number("Carbon (kg CO₂eq)"),
            Column::number("Water (L)"),
            Column::text("Per-Unit"),
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.phase.label()),
            Cell::from(self.energy_kwh),
            Cell::from(self.carbon_kg),
            Cell::from(self.water_l),
            Cell::from(self.per_unit),
        ]
    }
}

/// The side of the comparison a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Existing tooling.
    Current,
    /// The proposed product.
    GreenLens,
}

/// A single bullet of the comparison section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonMetric {
    /// The bullet text.
    pub label: &'static str,
    /// The panel the bullet is shown in.
    pub side: Side,
}

impl ComparisonMetric {
    /// A bullet of the current-tools panel.
    pub const fn current(label: &'static str) -> ComparisonMetric {
        Self {
            label,
            side: Side::Current,
        }
    }

    /// A bullet of the Green Lens panel.
    pub const fn green_lens(label: &'static str) -> ComparisonMetric {
        Self {
            label,
            side: Side::GreenLens,
        }
    }
}

/// A card of the impact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactItem {
    /// A single glyph.
    pub icon: &'static str,
    /// The card title.
    pub title: &'static str,
    /// The card text.
    pub description: &'static str,
}
