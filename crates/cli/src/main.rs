mod output;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reduce_theme_core::ThemeConfig;
use reduce_theme_tokens::TokenPath;
use tracing::debug;
use tracing_subscriber::prelude::*;

use crate::output::DumpFormat;

#[derive(Parser, Debug)]
#[command(name = "reduce-theme", about = "Inspect the reduce color palette", version)]
struct Cli {
    /// Theme document (.json or .toml) to read instead of the built-in palette
    #[arg(long, global = true, env = "REDUCE_THEME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the color at a path such as `button.foreground.active`
    Get {
        /// Dotted or dashed token path
        path: String,
    },
    /// Print every token and its color
    List {
        /// Print class keys (`button-foreground-active`) instead of dotted paths
        #[arg(long)]
        dashed: bool,
        /// Prefix each line with a color block (needs a truecolor terminal)
        #[arg(long)]
        swatch: bool,
    },
    /// Print the whole theme document
    Dump {
        #[arg(long, value_enum, default_value_t = DumpFormat::Json)]
        format: DumpFormat,
    },
    /// Check that a theme document parses
    Check {
        /// Document to check (.json or .toml)
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut out = std::io::stdout().lock();
    run(&mut out, cli.config.as_deref(), cli.command)
}

fn load_config(path: Option<&Path>) -> Result<ThemeConfig> {
    match path {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("failed to load theme document {}", path.display())),
        None => {
            debug!("using built-in palette");
            Ok(ThemeConfig::default())
        }
    }
}

fn run(out: &mut impl Write, config_path: Option<&Path>, command: Command) -> Result<()> {
    match command {
        Command::Get { path } => {
            let token: TokenPath = path
                .parse()
                .with_context(|| format!("{path:?} is not a declared token"))?;
            let config = load_config(config_path)?;
            writeln!(out, "{}", config.colors().get(token))?;
        }
        Command::List { dashed, swatch } => {
            let config = load_config(config_path)?;
            output::write_entries(out, config.colors(), dashed, swatch)?;
        }
        Command::Dump { format } => {
            let config = load_config(config_path)?;
            output::write_dump(out, &config, format)?;
        }
        Command::Check { file } => {
            let config = ThemeConfig::load(&file)
                .with_context(|| format!("{} is not a valid theme document", file.display()))?;
            let tokens = config.colors().entries().count();
            writeln!(out, "{}: ok ({tokens} tokens)", file.display())?;
        }
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
