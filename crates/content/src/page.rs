//! The complete content of the page, grouped by section.

use serde::Serialize;

use crate::error::Result;
use crate::prose::CallToAction;
use crate::prose::Footer;
use crate::prose::Header;
use crate::prose::Protocol;
use crate::prose::SampleOutput;
use crate::record::ComparisonMetric;
use crate::record::ImpactItem;
use crate::record::ScorecardRow;
use crate::record::Side;
use crate::record::ToolkitRow;
use crate::record::VisionPoint;
use crate::table::Table;
use crate::table::TableSource;

/// Everything shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageContent {
    /// The document title.
    pub page_title: &'static str,
    /// The header and introduction.
    pub header: Header,
    /// The vision points.
    pub vision: Vision,
    /// The protocol description.
    pub protocol: Protocol,
    /// The toolkit overview.
    pub toolkit: Toolkit,
    /// The per-query sample.
    pub sample_output: SampleOutput,
    /// The sample scorecard.
    pub scorecard: Scorecard,
    /// The two-panel comparison.
    pub comparison: Comparison,
    /// The impact cards.
    pub impact: Impact,
    /// The call-to-action panel.
    pub call_to_action: CallToAction,
    /// The footer.
    pub footer: Footer,
}

impl PageContent {
    /// Builds every table of the page, in display order.
    pub fn tables(&self) -> Result<Vec<Table>> {
        Ok(vec![self.toolkit.table()?, self.scorecard.table()?])
    }
}

/// The vision section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vision {
    /// The section heading.
    pub heading: &'static str,
    /// One point per column.
    pub points: &'static [VisionPoint],
}

/// The toolkit overview section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toolkit {
    /// The section heading.
    pub heading: &'static str,
    /// The table data.
    pub rows: TableSource<ToolkitRow>,
}

impl Toolkit {
    /// Builds the toolkit table.
    pub fn table(&self) -> Result<Table> {
        self.rows.table()
    }
}

/// The sample scorecard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scorecard {
    /// The sub-heading above the table.
    pub title: &'static str,
    /// The table data, ending with the total.
    pub rows: TableSource<ScorecardRow>,
}

impl Scorecard {
    /// Builds the scorecard table.
    pub fn table(&self) -> Result<Table> {
        self.rows.table()
    }
}

/// The comparison section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// The section heading.
    pub heading: &'static str,
    /// The title of the current-tools panel.
    pub current_title: &'static str,
    /// The title of the Green Lens panel.
    pub green_lens_title: &'static str,
    /// The bullets of both panels, in declaration order.
    pub metrics: &'static [ComparisonMetric],
}

impl Comparison {
    /// The title of the panel for `side`.
    pub fn title(&self, side: Side) -> &'static str {
        match side {
            Side::Current => self.current_title,
            Side::GreenLens => self.green_lens_title,
        }
    }

    /// The bullets of the panel for `side`, in declaration order.
    pub fn panel(&self, side: Side) -> impl Iterator<Item = &'static ComparisonMetric> {
        self.metrics.iter().filter(move |metric| metric.side == side)
    }
}

/// The impact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Impact {
    /// The section heading.
    pub heading: &'static str,
    /// One card per item.
    pub items: &'static [ImpactItem],
}
