//! The layout script of the page.
//!
//! [compose] arranges the content definitions into a [View], an element tree
//! whose sections follow a fixed order:
//!
//! header → vision → protocol → toolkit → sample output → scorecard →
//! comparison → impact → call to action → footer
//!
//! Tables are built and validated while composing, so a malformed table
//! stops the render before any markup is emitted.

pub mod element;
pub mod section;
pub mod view;

use greenlens_content::DataShapeError;
use greenlens_content::PageContent;
use greenlens_content::Table;
use greenlens_content::page::Comparison;
use greenlens_content::page::Impact;
use greenlens_content::page::Vision;
use greenlens_content::prose::CallToAction;
use greenlens_content::prose::Footer;
use greenlens_content::prose::Header;
use greenlens_content::prose::Inline;
use greenlens_content::prose::ListItem;
use greenlens_content::prose::Protocol;
use greenlens_content::prose::SampleOutput;
use greenlens_content::record::Side;
use tracing::debug;

use crate::id::Id;
use crate::layout::element::Card;
use crate::layout::element::CodeBlock;
use crate::layout::element::Columns;
use crate::layout::element::Heading;
use crate::layout::element::Links;
use crate::layout::element::List;
use crate::layout::element::Panel;
use crate::layout::element::Paragraph;
use crate::layout::section::Section;
use crate::layout::section::SectionKind;
use crate::layout::view::View;

/// A node of the element tree.
#[derive(Debug, Clone)]
pub enum ElementKind {
    /// A large decorative glyph.
    Glyph(&'static str),
    /// A heading.
    Heading(Heading),
    /// A paragraph.
    Paragraph(Paragraph),
    /// Equal-width columns.
    Columns(Columns),
    /// A bullet list.
    List(List),
    /// A validated data table.
    Table(Table),
    /// A preformatted block.
    Code(CodeBlock),
    /// A styled container.
    Panel(Panel),
    /// An icon card.
    Card(Card),
    /// A row of link buttons.
    Links(Links),
}

/// Composes the page from its content.
pub fn compose(content: &PageContent) -> Result<View, DataShapeError> {
    let toolkit = content.toolkit.table()?;
    let scorecard = content.scorecard.table()?;

    let view = View::new(content.page_title)
        .add(header(&content.header))
        .add(vision(&content.vision))
        .add(protocol(&content.protocol))
        .add(
            Section::new(Id::new("toolkit"))
                .add(ElementKind::Heading(Heading::new(2, content.toolkit.heading)))
                .add(ElementKind::Table(toolkit)),
        )
        .add(sample_output(&content.sample_output))
        .add(
            Section::new(Id::new("scorecard"))
                .add(ElementKind::Heading(Heading::new(3, content.scorecard.title)))
                .add(ElementKind::Table(scorecard)),
        )
        .add(comparison(&content.comparison))
        .add(impact(&content.impact))
        .add(call_to_action(&content.call_to_action))
        .add(footer(&content.footer));

    for section in &view.sections {
        debug!(
            section = %section.id(),
            elements = section.elements.len(),
            "composed section"
        );
    }

    Ok(view)
}

fn header(header: &Header) -> Section {
    let [first, second] = header.taglines;

    Section::new(Id::new("header"))
        .kind(SectionKind::Header)
        .add(ElementKind::Glyph(header.glyph))
        .add(ElementKind::Heading(
            Heading::new(1, header.title).class("centered"),
        ))
        .add(ElementKind::Paragraph(Paragraph::text(first).class("tagline")))
        .add(ElementKind::Paragraph(Paragraph::text(second).class("tagline")))
        .add(ElementKind::Heading(Heading::new(3, header.lead)))
        .add(ElementKind::Paragraph(Paragraph::new(header.intro)))
}

// One column per point; the column count follows the content.
fn vision(vision: &Vision) -> Section {
    let columns = vision.points.iter().fold(Columns::new(), |columns, point| {
        columns.add(vec![
            ElementKind::Heading(Heading::new(4, point.title)),
            ElementKind::Paragraph(Paragraph::text(point.description)),
        ])
    });

    Section::new(Id::new("vision"))
        .add(ElementKind::Heading(Heading::new(2, vision.heading)))
        .add(ElementKind::Columns(columns))
}

fn protocol(protocol: &Protocol) -> Section {
    Section::new(Id::new("protocol"))
        .add(ElementKind::Heading(Heading::new(2, protocol.heading)))
        .add(ElementKind::Paragraph(Paragraph::new(&[Inline::Strong(
            protocol.name,
        )])))
        .add(ElementKind::Paragraph(Paragraph::text(protocol.intro)))
        .add(ElementKind::List(List::new(protocol.items.iter().copied())))
}

fn sample_output(sample: &SampleOutput) -> Section {
    Section::new(Id::new("sample-output"))
        .add(ElementKind::Heading(Heading::new(2, sample.heading)))
        .add(ElementKind::Heading(Heading::new(3, sample.title)))
        .add(ElementKind::Code(CodeBlock { text: sample.text }))
}

fn comparison(comparison: &Comparison) -> Section {
    let panel = |side: Side, class: &'static str| {
        let items = comparison
            .panel(side)
            .map(|metric| ListItem::leaf(metric.label));

        ElementKind::Panel(
            Panel::new(class)
                .add(ElementKind::Heading(Heading::new(3, comparison.title(side))))
                .add(ElementKind::List(List::new(items))),
        )
    };

    let columns = Columns::new()
        .add(vec![panel(Side::Current, "comparison-card current")])
        .add(vec![panel(Side::GreenLens, "comparison-card greenlens")]);

    Section::new(Id::new("comparison"))
        .add(ElementKind::Heading(Heading::new(2, comparison.heading)))
        .add(ElementKind::Columns(columns))
}

fn impact(impact: &Impact) -> Section {
    impact.items.iter().fold(
        Section::new(Id::new("impact"))
            .add(ElementKind::Heading(Heading::new(2, impact.heading))),
        |section, item| {
            section.add(ElementKind::Card(Card {
                icon: item.icon,
                title: item.title,
                description: item.description,
            }))
        },
    )
}

fn call_to_action(call_to_action: &CallToAction) -> Section {
    Section::new(Id::new("call-to-action")).add(ElementKind::Panel(
        Panel::new("call-to-action")
            .add(ElementKind::Heading(Heading::new(2, call_to_action.heading)))
            .add(ElementKind::Paragraph(Paragraph::text(call_to_action.text)))
            .add(ElementKind::Links(Links {
                links: call_to_action.links.to_vec(),
            })),
    ))
}

fn footer(footer: &Footer) -> Section {
    footer.lines.into_iter().fold(
        Section::new(Id::new("footer")).kind(SectionKind::Footer),
        |section, line| section.add(ElementKind::Paragraph(Paragraph::text(line))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION_ORDER: [&str; 10] = [
        "header",
        "vision",
        "protocol",
        "toolkit",
        "sample-output",
        "scorecard",
        "comparison",
        "impact",
        "call-to-action",
        "footer",
    ];

    #[test]
    fn sections_follow_the_fixed_order() -> Result<(), DataShapeError> {
        let view = compose(&PageContent::green_lens())?;
        let ids: Vec<&str> = view.sections.iter().map(|s| s.id().as_str()).collect();

        assert_eq!(SECTION_ORDER.to_vec(), ids);
        assert_eq!(SectionKind::Header, view.sections[0].kind);
        assert_eq!(SectionKind::Footer, view.sections[9].kind);

        Ok(())
    }

    #[test]
    fn vision_has_one_column_per_point() -> Result<(), DataShapeError> {
        let content = PageContent::green_lens();
        let view = compose(&content)?;
        let section = view.section("vision").expect("vision section");

        let columns = section
            .elements
            .iter()
            .find_map(|e| match e {
                ElementKind::Columns(c) => Some(c),
                _ => None,
            })
            .expect("vision columns");

        assert_eq!(content.vision.points.len(), columns.columns.len());

        Ok(())
    }

    #[test]
    fn tables_are_composed_in_place() -> Result<(), DataShapeError> {
        let view = compose(&PageContent::green_lens())?;

        for (id, name) in [("toolkit", "toolkit"), ("scorecard", "scorecard")] {
            let section = view.section(id).expect("table section");
            let table = section.elements.iter().find_map(|e| match e {
                ElementKind::Table(t) => Some(t),
                _ => None,
            });

            assert_eq!(Some(name), table.map(|t| t.name()));
        }

        Ok(())
    }
}
