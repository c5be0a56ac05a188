use greenlens_content::DataShapeError;
use greenlens_content::PageContent;
use greenlens_content::record::Side;
use greenlens_content::table::Column;
use greenlens_content::table::ColumnValues;
use greenlens_content::table::TableSource;
use greenlens_content::table::Values;
use greenlens_vis::PageReport;
use greenlens_vis::Theme;
use greenlens_vis::error::VisError;
use greenlens_vis::render::OutputStream;
use greenlens_vis::render::error::RenderError;
use greenlens_vis::render::escape;

fn render() -> String {
    PageReport::default().render().expect("the shipped page renders")
}

fn section<'a>(html: &'a str, id: &str) -> &'a str {
    let open = format!(r#"id="{id}">"#);
    let start = html.find(&open).expect("section is present") + open.len();
    let end = html[start..].find("</section>").expect("section is closed");
    &html[start..start + end]
}

fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render(), render());
}

#[test]
fn sections_appear_in_display_order() {
    let html = render();
    let anchors = [
        r#"<header id="header">"#,
        r#"<section id="vision">"#,
        r#"<section id="protocol">"#,
        r#"<section id="toolkit">"#,
        r#"<section id="sample-output">"#,
        r#"<section id="scorecard">"#,
        r#"<section id="comparison">"#,
        r#"<section id="impact">"#,
        r#"<section id="call-to-action">"#,
        r#"<footer id="footer">"#,
    ];

    let positions: Vec<usize> = anchors
        .iter()
        .map(|anchor| html.find(anchor).unwrap_or_else(|| panic!("missing {anchor}")))
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn vision_renders_one_column_per_point() {
    let html = render();
    let vision = section(&html, "vision");
    let points = PageContent::green_lens().vision.points.len();

    assert_eq!(4, points);
    assert_eq!(points, vision.matches(r#"<div class="column">"#).count());
    assert!(vision.contains("grid-template-columns: repeat(4, 1fr);"));
}

#[test]
fn comparison_panels_render_eight_bullets_in_order() {
    let html = render();
    let comparison = section(&html, "comparison");
    let content = PageContent::green_lens().comparison;

    let current_start = comparison
        .find(r#"<div class="comparison-card current">"#)
        .expect("current panel");
    let green_lens_start = comparison
        .find(r#"<div class="comparison-card greenlens">"#)
        .expect("green lens panel");

    assert!(current_start < green_lens_start);

    let panels = [
        (Side::Current, &comparison[current_start..green_lens_start]),
        (Side::GreenLens, &comparison[green_lens_start..]),
    ];

    for (side, panel) in panels {
        assert_eq!(8, panel.matches("<li>").count());

        let positions: Vec<usize> = content
            .panel(side)
            .map(|metric| {
                let item = format!("<li>{}</li>", escape(metric.label));
                panel.find(&item).expect("bullet is in its panel")
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn panels_are_styled_differently() {
    let html = render();

    assert!(html.contains(".comparison-card.current {"));
    assert!(html.contains(".comparison-card.greenlens {"));
    assert!(html.contains("border: 2px solid #ef5350;"));
    assert!(html.contains("border: 2px solid #4caf50;"));
}

#[test]
fn sample_output_is_shown_verbatim() {
    let html = render();
    let sample = PageContent::green_lens().sample_output.text;

    let open = r#"<pre class="code-block"><code>"#;
    let start = html.find(open).expect("code block") + open.len();
    let end = html[start..].find("</code></pre>").expect("closed code block");
    let shown = &html[start..start + end];

    assert_eq!(escape(sample), shown);
    assert_eq!(sample, unescape(shown));
}

#[test]
fn scorecard_shows_literal_values() {
    let html = render();
    let scorecard = section(&html, "scorecard");

    for value in ["12.5", "3.1", "15.6", "5.2", "1.4", "6.6", "22.5", "4.8", "27.3"] {
        assert!(
            scorecard.contains(&format!(r#"<td class="num">{value}</td>"#)),
            "missing {value}"
        );
    }

    assert_eq!(4, scorecard.matches("<tr>").count());
}

#[test]
fn impact_items_render_as_cards() {
    let html = render();
    let impact = section(&html, "impact");

    assert_eq!(5, impact.matches(r#"<div class="impact-item">"#).count());
    assert!(impact.contains(
        r#"<div class="impact-icon">🌍</div><h4>Impact</h4><p>Enables sustainable AI decisions</p>"#
    ));
}

#[test]
fn call_to_action_has_two_links() {
    let html = render();
    let call_to_action = section(&html, "call-to-action");

    assert!(call_to_action.contains(r##"<a class="button button-primary" href="#">View Prototype</a>"##));
    assert!(call_to_action.contains(r##"<a class="button button-secondary" href="#">Read Documentation</a>"##));
    assert_eq!(2, call_to_action.matches("<a ").count());
}

#[test]
fn theme_only_changes_the_stylesheet() {
    let mut theme = Theme::default();
    theme.heading_color = String::from("#123456");

    let themed = PageReport::new(PageContent::green_lens(), theme)
        .render()
        .expect("themed page renders");
    let plain = render();

    assert_ne!(plain, themed);
    assert!(themed.contains("color: #123456;"));

    let body = |html: &str| html[html.find("<body>").expect("body")..].to_owned();
    assert_eq!(body(&plain), body(&themed));
}

#[derive(Default)]
struct Recorder {
    writes: Vec<String>,
}

impl OutputStream for Recorder {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.writes.push(data.to_owned());
        Ok(())
    }
}

#[test]
fn write_to_emits_the_finished_document_at_once() -> Result<(), VisError> {
    let report = PageReport::default();
    let mut recorder = Recorder::default();

    report.write_to(&mut recorder)?;

    assert_eq!(vec![report.render()?], recorder.writes);

    Ok(())
}

const RAGGED_SCORECARD: &[ColumnValues] = &[
    ColumnValues::text("Phase", &["Training", "Inference", "Total"]),
    ColumnValues::number("Energy (kWh)", &[12.5, 3.1]),
];

const MISTYPED_TOOLKIT: &[ColumnValues] = &[
    ColumnValues::text("Focus Area", &["Carbon Footprint"]),
    ColumnValues {
        column: Column::text("Method"),
        values: Values::Number(&[0.5]),
    },
];

#[test]
fn ragged_table_aborts_the_render_without_output() {
    let mut content = PageContent::green_lens();
    content.scorecard.rows = TableSource::Columns(RAGGED_SCORECARD);

    let report = PageReport::new(content, Theme::default());
    let mut recorder = Recorder::default();

    let result = report.write_to(&mut recorder);

    assert!(matches!(
        result,
        Err(VisError::DataShape(DataShapeError::RaggedColumn {
            expected: 3,
            found: 2,
            ..
        }))
    ));
    assert!(recorder.writes.is_empty());
}

#[test]
fn mistyped_table_aborts_the_render() {
    let mut content = PageContent::green_lens();
    content.toolkit.rows = TableSource::Columns(MISTYPED_TOOLKIT);

    let error = PageReport::new(content, Theme::default())
        .render()
        .unwrap_err();

    assert!(matches!(
        error,
        VisError::DataShape(DataShapeError::TypeMismatch { row: 0, .. })
    ));
    assert!(error.to_string().contains("table `toolkit`"));
}

#[test]
fn columnar_tables_render_like_records() -> Result<(), VisError> {
    const SCORECARD: &[ColumnValues] = &[
        ColumnValues::text("Phase", &["Training", "Inference", "Total"]),
        ColumnValues::number("Energy (kWh)", &[12.5, 3.1, 15.6]),
        ColumnValues::number("Carbon (kg CO₂eq)", &[5.2, 1.4, 6.6]),
        ColumnValues::number("Water (L)", &[22.5, 4.8, 27.3]),
        ColumnValues::text("Per-Unit", &["0.10 / 1M tokens", "0.02 / 1M tokens", "—"]),
    ];

    let mut content = PageContent::green_lens();
    content.scorecard.rows = TableSource::Columns(SCORECARD);

    let columnar = PageReport::new(content, Theme::default()).render()?;

    assert_eq!(render(), columnar);

    Ok(())
}
