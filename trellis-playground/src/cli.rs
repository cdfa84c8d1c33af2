//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use trellis::prelude::ComboboxVariant;
use trellis_playground::{LogLevel, ThemeMode};

#[derive(Debug, Parser)]
#[command(
    name = "trellis",
    version,
    about = "Playground for accessible headless widgets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Colour scheme (overrides settings).
    #[arg(long, value_enum, global = true)]
    pub theme: Option<ThemeMode>,

    /// Log level for latest.log (overrides settings).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Variant for the `combobox` demo (overrides settings).
    #[arg(long, value_enum, global = true)]
    pub variant: Option<VariantArg>,

    /// Fixed "today" as YYYY-MM-DD (overrides settings).
    #[arg(long, value_name = "DATE", global = true)]
    pub today: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the demo catalogue.
    List,

    /// Print the markup of a demo's initial state.
    Show {
        demo: String,
    },

    /// Replay a scenario file.
    Run {
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,
    },

    /// Drive a demo with the keyboard.
    Interactive {
        demo: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Simple,
    Activedescendant,
    Tabindex,
}

impl From<VariantArg> for ComboboxVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Simple => ComboboxVariant::Simple,
            VariantArg::Activedescendant => ComboboxVariant::ActiveDescendant,
            VariantArg::Tabindex => ComboboxVariant::RovingTabindex,
        }
    }
}
