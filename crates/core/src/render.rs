//! Renders a [`ThemeConfig`] as a CommonJS Tailwind config module.

use std::fmt::Write as _;

use reduce_theme_tokens::{Category, Surface, ThemeDomain};

use crate::config::ThemeConfig;

const INDENT: &str = "  ";

/// Render the document as `tailwind.config.js` source.
///
/// The layout matches the hand-written file the palette was authored in,
/// so the default document renders byte-for-byte identical to it.
pub fn render_config_module(config: &ThemeConfig) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("/** @type {import('tailwindcss').Config} */\n");
    out.push_str("module.exports = {\n");

    let content: Vec<String> = config.content.iter().map(|glob| js_string(glob)).collect();
    line(&mut out, 1, &format!("content: [{}],", content.join(", ")));

    line(&mut out, 1, "theme: {");
    line(&mut out, 2, "extend: {");
    line(&mut out, 3, "colors: {");
    let colors = config.colors();
    for surface in Surface::ALL {
        push_domain(&mut out, *surface, colors.domain(*surface));
    }
    line(&mut out, 3, "}");
    line(&mut out, 2, "},");
    line(&mut out, 1, "},");

    let plugins: Vec<String> = config
        .plugins
        .iter()
        .map(|name| format!("require({})", js_string(name)))
        .collect();
    line(&mut out, 1, &format!("plugins: [{}],", plugins.join(", ")));

    out.push_str("}\n");
    out
}

fn push_domain(out: &mut String, surface: Surface, domain: &ThemeDomain) {
    line(out, 4, &format!("{surface}: {{"));
    for category in Category::ALL {
        line(out, 5, &format!("{category}: {{"));
        for (role, color) in domain.group(*category) {
            line(out, 6, &format!("{role}: \"{color}\","));
        }
        line(out, 5, "},");
    }
    line(out, 4, "},");
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{}{text}", INDENT.repeat(depth));
}

/// Quote `text` as a double-quoted string literal. JSON string syntax is
/// valid JavaScript.
fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
