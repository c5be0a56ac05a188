use serde::Serialize;
use tinytemplate::TinyTemplate;
use tinytemplate::error::Error;

const INDEX_TEMPLATE_NAME: &str = "index";

/// Wraps a rendered body into the HTML document shell.
pub(crate) struct TemplateEngine {
    template: TinyTemplate<'static>,
}

impl TemplateEngine {
    pub(crate) fn new() -> Result<TemplateEngine, Error> {
        let mut template = TinyTemplate::new();
        template.add_template(
            INDEX_TEMPLATE_NAME,
            include_str!("./template/index.html.tt"),
        )?;

        Ok(Self { template })
    }

    pub(crate) fn render(&self, context: &Context<'_>) -> Result<String, Error> {
        self.template.render(INDEX_TEMPLATE_NAME, context)
    }
}

// The title is escaped by the template; the stylesheet and body are markup.
#[derive(Serialize)]
pub(crate) struct Context<'a> {
    title: &'a str,
    stylesheet: &'a str,
    body: &'a str,
}

impl<'a> Context<'a> {
    pub(crate) fn new(title: &'a str, stylesheet: &'a str, body: &'a str) -> Context<'a> {
        Self {
            title,
            stylesheet,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_body_in_document_shell() -> Result<(), Error> {
        let engine = TemplateEngine::new()?;
        let context = Context::new("Tea & Cake", "p { color: red; }", "<p>hello</p>\n");

        let document = engine.render(&context)?;

        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<title>Tea &amp; Cake</title>"));
        assert!(document.contains("p { color: red; }"));
        assert!(document.contains("<p>hello</p>"));
        assert!(document.trim_end().ends_with("</html>"));

        Ok(())
    }
}
