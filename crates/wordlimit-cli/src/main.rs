mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordlimit")]
#[command(version, about = "Word limits for textarea form fields", long_about = None)]
struct Cli {
    /// Config file (defaults to ./wordlimit.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log validation and rendering decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate text against a textarea tag
    Check {
        /// Form tag, e.g. "textarea* msg maxlength:100 maxlengthwords:true"
        #[arg(short, long)]
        tag: String,

        #[command(flatten)]
        input: InputArgs,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the textarea markup for a tag
    Render {
        /// Form tag, e.g. "textarea msg placeholder \"Say something\""
        #[arg(short, long)]
        tag: String,

        /// Previously submitted value to redisplay
        #[arg(long)]
        value: Option<String>,

        /// Validation error to show next to the field
        #[arg(long)]
        error: Option<String>,

        /// Print the attribute set as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// Count words and characters
    Count {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Text to check
    #[arg(long, conflicts_with = "file")]
    value: Option<String>,

    /// Read the text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { tag, input, json } => {
            if !commands::check::execute(&config, &tag, &input, json)? {
                std::process::exit(1);
            }
        }
        Commands::Render {
            tag,
            value,
            error,
            json,
        } => {
            commands::render::execute(&config, &tag, value, error, json)?;
        }
        Commands::Count { input } => {
            commands::count::execute(&input)?;
        }
    }

    Ok(())
}
