//! numwords command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

mod commands;
mod logging;

use logging::LogFormat;

/// Spell numbers as words
#[derive(Debug, Parser)]
#[command(name = "numwords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a number to words
    Convert {
        /// Decimal literal, e.g. 42, -1.5, 1e21
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Language tag (en, en-gb, ru, es, de, ko, zu)
        #[arg(long, default_value = "en")]
        lang: String,

        /// Read the decimal mark as "comma" instead of the language default
        #[arg(long)]
        comma: bool,

        /// Word placed before negative numbers
        #[arg(long)]
        negative_prefix: Option<String>,

        /// Grammatical class to agree with (m, f, n, class6, ...)
        #[arg(long)]
        class: Option<String>,

        /// Text printed instead of failing on unconvertible input
        #[arg(long)]
        fallback: Option<String>,

        /// JSON file with conversion options
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Spell an amount in the language's currency
    Currency {
        /// Amount, e.g. 12.50
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Language tag
        #[arg(long, default_value = "en")]
        lang: String,

        /// Truncate to two sub-unit digits instead of rounding
        #[arg(long)]
        no_round: bool,
    },

    /// Spell a calendar year
    Year {
        /// Year; negative years are before the common era
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Language tag
        #[arg(long, default_value = "en")]
        lang: String,

        /// Add the era word to positive years too
        #[arg(long)]
        era: bool,
    },

    /// List supported languages
    Langs,

    /// Show version and build info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level, cli.log_format);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting numwords CLI");

    match cli.command {
        Commands::Convert {
            value,
            lang,
            comma,
            negative_prefix,
            class,
            fallback,
            options,
        } => {
            commands::convert::run(commands::convert::ConvertOptions {
                value,
                lang,
                comma,
                negative_prefix,
                class,
                fallback,
                options_file: options,
            })
            .context("conversion failed")?;
        }
        Commands::Currency {
            value,
            lang,
            no_round,
        } => {
            commands::currency::run(&value, &lang, !no_round)
                .context("currency conversion failed")?;
        }
        Commands::Year { value, lang, era } => {
            commands::year::run(&value, &lang, era).context("year conversion failed")?;
        }
        Commands::Langs => {
            commands::langs::run().context("listing languages failed")?;
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
