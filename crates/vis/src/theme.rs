//! The visual theme of the page.
//!
//! A [Theme] is an ordinary value handed to the renderer. The stylesheet is
//! derived from it deterministically, so two renders with equal themes emit
//! identical CSS.

use std::fmt::Display;
use std::fmt::Formatter;

/// A two-stop CSS linear gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    /// The gradient angle in degrees.
    pub angle: u16,
    /// The color at 0%.
    pub from: String,
    /// The color at 100%.
    pub to: String,
}

impl Gradient {
    /// Creates a gradient from `from` to `to` at the given angle.
    pub fn new(angle: u16, from: &str, to: &str) -> Gradient {
        Self {
            angle,
            from: from.to_owned(),
            to: to.to_owned(),
        }
    }
}

impl Display for Gradient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "linear-gradient({angle}deg, {from} 0%, {to} 100%)",
            angle = self.angle,
            from = self.from,
            to = self.to
        )
    }
}

/// The colors of a comparison panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelStyle {
    /// The panel background.
    pub background: Gradient,
    /// The panel border color.
    pub border: String,
}

/// The colors and font of the preformatted sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStyle {
    /// The block background.
    pub background: String,
    /// The text color.
    pub foreground: String,
    /// The monospace font stack.
    pub font_family: String,
}

/// Colors, gradients and fonts applied uniformly to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The body font stack.
    pub font_family: String,
    /// The body text color.
    pub text_color: String,
    /// The heading color.
    pub heading_color: String,
    /// The color of taglines and the footer.
    pub muted_color: String,
    /// The page background.
    pub background: Gradient,
    /// The background of highlighted text.
    pub highlight: Gradient,
    /// The current-tools panel.
    pub current_panel: PanelStyle,
    /// The Green Lens panel.
    pub green_lens_panel: PanelStyle,
    /// The impact card background.
    pub impact_background: Gradient,
    /// The call-to-action panel background.
    pub call_to_action_background: Gradient,
    /// The preformatted sample.
    pub code: CodeStyle,
    /// The primary link button.
    pub primary_button: Gradient,
    /// The secondary link button.
    pub secondary_button: Gradient,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: String::from(
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
            text_color: String::from("#2d3748"),
            heading_color: String::from("#1a5a3a"),
            muted_color: String::from("#5a6c7d"),
            background: Gradient::new(135, "#f5f7fa", "#e8f5e9"),
            highlight: Gradient::new(120, "#4caf50", "#81c784"),
            current_panel: PanelStyle {
                background: Gradient::new(135, "#ffebee", "#fce4ec"),
                border: String::from("#ef5350"),
            },
            green_lens_panel: PanelStyle {
                background: Gradient::new(135, "#e8f5e9", "#c8e6c9"),
                border: String::from("#4caf50"),
            },
            impact_background: Gradient::new(135, "#e3f2fd", "#f3f7fd"),
            call_to_action_background: Gradient::new(135, "#e8f5e9", "#c8e6c9"),
            code: CodeStyle {
                background: String::from("#1e1e1e"),
                foreground: String::from("#d4d4d4"),
                font_family: String::from("'Courier New', monospace"),
            },
            primary_button: Gradient::new(135, "#4caf50", "#45a049"),
            secondary_button: Gradient::new(135, "#2196f3", "#1976d2"),
        }
    }
}

impl Theme {
    /// Produces the stylesheet of the page.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"body {{
    font-family: {font_family};
    line-height: 1.6;
    color: {text_color};
    background: {background};
    margin: 0;
}}
.page {{
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 24px;
}}
h1, h2, h3, h4 {{
    color: {heading_color};
}}
.centered {{
    text-align: center;
}}
.glyph {{
    text-align: center;
    margin-top: 40px;
    font-size: 2.5rem;
}}
.tagline {{
    text-align: center;
    font-size: 1.2rem;
    color: {muted_color};
}}
.highlight {{
    background: {highlight};
    padding: 2px 8px;
    border-radius: 4px;
    color: white;
    font-weight: 600;
}}
.columns {{
    display: grid;
    gap: 24px;
}}
.data-table {{
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 20px;
}}
.data-table th, .data-table td {{
    padding: 8px 12px;
    border-bottom: 1px solid #d9e2ec;
    text-align: left;
}}
.data-table td.num {{
    text-align: right;
    font-variant-numeric: tabular-nums;
}}
.comparison-card {{
    padding: 25px;
    border-radius: 10px;
    margin-bottom: 20px;
}}
.comparison-card.current {{
    background: {current_background};
    border: 2px solid {current_border};
}}
.comparison-card.greenlens {{
    background: {green_lens_background};
    border: 2px solid {green_lens_border};
}}
.impact-item {{
    text-align: center;
    padding: 25px;
    background: {impact_background};
    border-radius: 10px;
    margin-bottom: 20px;
}}
.impact-icon {{
    font-size: 2.5rem;
}}
.code-block {{
    background: {code_background};
    color: {code_foreground};
    padding: 25px;
    border-radius: 8px;
    font-family: {code_font_family};
    font-size: 0.9rem;
    overflow-x: auto;
    line-height: 1.5;
    margin-bottom: 20px;
}}
.call-to-action {{
    text-align: center;
    background: {call_to_action_background};
    padding: 40px;
    border-radius: 10px;
}}
.call-to-action p {{
    margin: 20px 0;
    font-size: 1.1rem;
}}
.button {{
    display: inline-block;
    padding: 15px 40px;
    color: white;
    text-decoration: none;
    border-radius: 30px;
    margin: 10px;
}}
.button-primary {{
    background: {primary_button};
}}
.button-secondary {{
    background: {secondary_button};
}}
footer {{
    text-align: center;
    padding: 40px 0;
    color: {muted_color};
}}"#,
            font_family = self.font_family,
            text_color = self.text_color,
            heading_color = self.heading_color,
            muted_color = self.muted_color,
            background = self.background,
            highlight = self.highlight,
            current_background = self.current_panel.background,
            current_border = self.current_panel.border,
            green_lens_background = self.green_lens_panel.background,
            green_lens_border = self.green_lens_panel.border,
            impact_background = self.impact_background,
            code_background = self.code.background,
            code_foreground = self.code.foreground,
            code_font_family = self.code.font_family,
            call_to_action_background = self.call_to_action_background,
            primary_button = self.primary_button,
            secondary_button = self.secondary_button,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_displays_as_css() {
        let gradient = Gradient::new(135, "#f5f7fa", "#e8f5e9");

        assert_eq!(
            "linear-gradient(135deg, #f5f7fa 0%, #e8f5e9 100%)",
            gradient.to_string()
        );
    }

    #[test]
    fn panels_are_visually_distinct() {
        let theme = Theme::default();

        assert_ne!(theme.current_panel, theme.green_lens_panel);
    }

    #[test]
    fn stylesheet_uses_theme_values() {
        let mut theme = Theme::default();
        theme.heading_color = String::from("#000001");

        let stylesheet = theme.stylesheet();

        assert!(stylesheet.contains("color: #000001;"));
        assert!(stylesheet.contains("border: 2px solid #ef5350;"));
        assert!(stylesheet.contains("border: 2px solid #4caf50;"));
        assert_eq!(stylesheet, theme.stylesheet());
    }
}
