use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use seikyo_config::Config;
use seikyo_engine::{RenderOptions, io};
use std::{io::stdout, path::PathBuf};

mod commands;
mod reader;
mod styling;

/// Reader for annotated scripture records
#[derive(Debug, Parser)]
#[command(name = "seikyo", version, about)]
struct Cli {
    /// Data directory (`<category>/<id>.json`); overrides the config file
    #[arg(long, global = true, value_name = "DIR")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List categories and their scriptures
    List,
    /// Open the terminal reader
    Read {
        category: Option<String>,
        id: Option<String>,
        chapter: Option<String>,
    },
    /// Print one rendered chapter
    Show {
        category: String,
        id: String,
        chapter: String,
        /// Emit HTML instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Search chapter bodies for an exact substring
    Search { query: String },
    /// Convert a plain-text source into a JSON record
    Convert {
        input: PathBuf,
        /// Output file (default: input with a .json extension)
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };
    let opts = config
        .as_ref()
        .map(|c| RenderOptions {
            show_readings: c.show_readings,
            show_glossary: c.show_glossary,
        })
        .unwrap_or_default();

    match cli.command {
        Command::Convert { input, output } => commands::convert(&input, output.as_deref()),
        Command::List => {
            let data = resolve_data_path(cli.data, config.as_ref())?;
            commands::list(&data, &mut stdout())
        }
        Command::Show {
            category,
            id,
            chapter,
            html,
        } => {
            let data = resolve_data_path(cli.data, config.as_ref())?;
            commands::show(&data, &category, &id, &chapter, html, opts, &mut stdout())
        }
        Command::Search { query } => {
            let data = resolve_data_path(cli.data, config.as_ref())?;
            commands::search(&data, &query, &mut stdout())
        }
        Command::Read {
            category,
            id,
            chapter,
        } => {
            let data = resolve_data_path(cli.data, config.as_ref())?;
            let category = category
                .or_else(|| config.as_ref().and_then(|c| c.default_category.clone()))
                .context("No category given and no default_category in the config file")?;
            let id = id
                .or_else(|| config.as_ref().and_then(|c| c.default_scripture.clone()))
                .context("No scripture given and no default_scripture in the config file")?;
            let scripture = io::load_scripture(&data, &category, &id)?;
            reader::run(scripture, chapter.as_deref(), opts)
        }
    }
}

/// `--data` wins over the config file's `data_path`.
fn resolve_data_path(flag: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    let (data, from_config) = match (flag, config) {
        (Some(path), _) => (path, false),
        (None, Some(config)) => (config.data_path.clone(), true),
        (None, None) => bail!(
            "No data directory given. Pass --data <DIR> or create a config file at {}",
            Config::config_path().display()
        ),
    };

    if let Err(e) = io::validate_data_dir(&data) {
        let source = if from_config {
            format!(" from config file '{}'", Config::config_path().display())
        } else {
            String::new()
        };
        bail!("Data path '{}'{source} is invalid: {e}", data.display());
    }
    Ok(data)
}
