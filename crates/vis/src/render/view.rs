//! [Render] implementations for the element tree.

use greenlens_content::Table;
use greenlens_content::prose::Inline;
use greenlens_content::prose::LinkStyle;
use greenlens_content::table::CellKind;

use crate::layout::ElementKind;
use crate::layout::element::Card;
use crate::layout::element::CodeBlock;
use crate::layout::element::Columns;
use crate::layout::element::Heading;
use crate::layout::element::Links;
use crate::layout::element::List;
use crate::layout::element::Panel;
use crate::layout::element::Paragraph;
use crate::layout::section::Section;
use crate::layout::view::View;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::error::RenderError;
use crate::render::escape;

impl Render for ElementKind {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        match self {
            ElementKind::Glyph(glyph) => {
                output.write(&format!(r#"<div class="glyph">{}</div>"#, escape(glyph)))
            }
            ElementKind::Heading(h) => h.render(output),
            ElementKind::Paragraph(p) => p.render(output),
            ElementKind::Columns(c) => c.render(output),
            ElementKind::List(l) => l.render(output),
            ElementKind::Table(t) => t.render(output),
            ElementKind::Code(c) => c.render(output),
            ElementKind::Panel(p) => p.render(output),
            ElementKind::Card(c) => c.render(output),
            ElementKind::Links(l) => l.render(output),
        }
    }
}

// The document shell is added by the template; a view renders only the body.
impl Render for View {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        for section in &self.sections {
            section.render(output)?;
        }

        Ok(())
    }
}

impl Render for Section {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let id = self.id();
        let tag = self.kind.tag();
        output.write(&format!(r#"<{tag} id="{id}">"#))?;

        for element in &self.elements {
            element.render(output)?;
        }

        output.write(&format!("</{tag}>\n"))
    }
}

impl Render for Heading {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let level = self.level;
        let class = class_attr(self.class);
        let text = escape(self.text);

        output.write(&format!("<h{level}{class}>{text}</h{level}>"))
    }
}

impl Render for Paragraph {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write(&format!("<p{}>", class_attr(self.class)))?;

        for run in &self.runs {
            run.render(output)?;
        }

        output.write("</p>")
    }
}

impl Render for Inline {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        match self {
            Inline::Text(text) => output.write(&escape(text)),
            Inline::Strong(text) => output.write(&format!("<strong>{}</strong>", escape(text))),
            Inline::Highlight(text) => {
                output.write(&format!(r#"<span class="highlight">{}</span>"#, escape(text)))
            }
        }
    }
}

impl Render for Columns {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        let count = self.columns.len();
        output.write(&format!(
            r#"<div class="columns" style="grid-template-columns: repeat({count}, 1fr);">"#
        ))?;

        for column in &self.columns {
            output.write(r#"<div class="column">"#)?;

            for element in column {
                element.render(output)?;
            }

            output.write("</div>")?;
        }

        output.write("</div>")
    }
}

impl Render for List {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write("<ul>")?;

        for item in &self.items {
            output.write(&format!("<li>{}", escape(item.text)))?;

            if !item.children.is_empty() {
                output.write("<ul>")?;

                for child in item.children {
                    output.write(&format!("<li>{}</li>", escape(child)))?;
                }

                output.write("</ul>")?;
            }

            output.write("</li>")?;
        }

        output.write("</ul>")
    }
}

impl Render for Table {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write(&format!(
            r#"<table class="data-table" data-table="{}"><thead><tr>"#,
            escape(self.name())
        ))?;

        for column in self.columns() {
            output.write(&format!("<th>{}</th>", escape(column.header)))?;
        }

        output.write("</tr></thead><tbody>")?;

        for row in self.rows() {
            output.write("<tr>")?;

            for (cell, column) in row.iter().zip(self.columns()) {
                let class = match column.kind {
                    CellKind::Text => "",
                    CellKind::Number => r#" class="num""#,
                };

                output.write(&format!("<td{class}>{}</td>", escape(&cell.to_string())))?;
            }

            output.write("</tr>")?;
        }

        output.write("</tbody></table>")
    }
}

impl Render for CodeBlock {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write(&format!(
            r#"<pre class="code-block"><code>{}</code></pre>"#,
            escape(self.text)
        ))
    }
}

impl Render for Panel {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write(&format!(r#"<div class="{}">"#, escape(self.class)))?;

        for element in &self.elements {
            element.render(output)?;
        }

        output.write("</div>")
    }
}

impl Render for Card {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write(&format!(
            r#"<div class="impact-item"><div class="impact-icon">{icon}</div><h4>{title}</h4><p>{description}</p></div>"#,
            icon = escape(self.icon),
            title = escape(self.title),
            description = escape(self.description),
        ))
    }
}

impl Render for Links {
    fn render<R>(&self, output: &mut R) -> Result<(), RenderError>
    where
        R: OutputStream,
    {
        output.write(r#"<div class="actions">"#)?;

        for link in &self.links {
            let style = match link.style {
                LinkStyle::Primary => "button-primary",
                LinkStyle::Secondary => "button-secondary",
            };

            output.write(&format!(
                r#"<a class="button {style}" href="{href}">{label}</a>"#,
                href = escape(link.href),
                label = escape(link.label),
            ))?;
        }

        output.write("</div>")
    }
}

fn class_attr(class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#" class="{}""#, escape(class)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use greenlens_content::prose::ListItem;
    use greenlens_content::table::Cell;
    use greenlens_content::table::Column;

    use super::*;

    fn render<T: Render>(element: &T) -> String {
        let mut buffer = String::new();
        element.render(&mut buffer).expect("rendering into a string");
        buffer
    }

    #[test]
    fn paragraph_renders_inline_runs() {
        let paragraph = Paragraph::new(&[
            Inline::Text("uses "),
            Inline::Highlight("energy"),
            Inline::Text(" & "),
            Inline::Strong("water"),
        ]);

        assert_eq!(
            r#"<p>uses <span class="highlight">energy</span> &amp; <strong>water</strong></p>"#,
            render(&paragraph)
        );
    }

    #[test]
    fn list_renders_nested_items() {
        let list = List::new([
            ListItem::leaf("first"),
            ListItem {
                text: "units:",
                children: &["LLMs", "images"],
            },
        ]);

        assert_eq!(
            "<ul><li>first</li><li>units:<ul><li>LLMs</li><li>images</li></ul></li></ul>",
            render(&list)
        );
    }

    #[test]
    fn table_marks_numeric_cells() {
        let table = Table::new(
            "energy",
            vec![Column::text("Phase"), Column::number("Energy (kWh)")],
            vec![vec![Cell::from("Total"), Cell::from(15.6)]],
        )
        .expect("valid table");

        assert_eq!(
            concat!(
                r#"<table class="data-table" data-table="energy"><thead><tr>"#,
                "<th>Phase</th><th>Energy (kWh)</th></tr></thead><tbody>",
                r#"<tr><td>Total</td><td class="num">15.6</td></tr>"#,
                "</tbody></table>"
            ),
            render(&table)
        );
    }

    #[test]
    fn columns_render_one_child_per_column() {
        let columns = Columns::new()
            .add(vec![ElementKind::Glyph("a")])
            .add(vec![ElementKind::Glyph("b")])
            .add(vec![]);

        let html = render(&columns);

        assert!(html.starts_with(
            r#"<div class="columns" style="grid-template-columns: repeat(3, 1fr);">"#
        ));
        assert_eq!(3, html.matches(r#"<div class="column">"#).count());
    }

    #[test]
    fn code_block_is_escaped_but_otherwise_verbatim() {
        let code = CodeBlock {
            text: "a < b\n  indented\n",
        };

        assert_eq!(
            "<pre class=\"code-block\"><code>a &lt; b\n  indented\n</code></pre>",
            render(&code)
        );
    }
}
