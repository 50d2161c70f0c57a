use std::io::Write;

use anyhow::Result;
use crossterm::style::{Color, Stylize};
use reduce_theme_core::{ThemeConfig, render_config_module};
use reduce_theme_tokens::{HexColor, ThemeTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DumpFormat {
    Json,
    Toml,
    /// CommonJS `tailwind.config.js` module.
    Js,
}

fn to_terminal_color(color: HexColor) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// One `path color` line per token. `dashed` switches to class keys;
/// `swatch` prefixes each line with a truecolor block.
pub fn write_entries(
    out: &mut impl Write,
    table: &ThemeTable,
    dashed: bool,
    swatch: bool,
) -> Result<()> {
    for (path, color) in table.entries() {
        let key = if dashed {
            path.class_key()
        } else {
            path.to_string()
        };
        if swatch {
            write!(out, "{} ", "  ".on(to_terminal_color(color)))?;
        }
        writeln!(out, "{key} {color}")?;
    }
    Ok(())
}

pub fn write_dump(out: &mut impl Write, config: &ThemeConfig, format: DumpFormat) -> Result<()> {
    let text = match format {
        DumpFormat::Json => {
            let mut json = config.to_json_pretty()?;
            json.push('\n');
            json
        }
        DumpFormat::Toml => config.to_toml_string()?,
        DumpFormat::Js => render_config_module(config),
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}
