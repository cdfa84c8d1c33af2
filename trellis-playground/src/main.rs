//! trellis playground binary.

mod cli;

use std::fs::File;
use std::io::IsTerminal;

use clap::Parser;
use simplelog::{Config, WriteLogger};
use trellis_playground::{
    CATALOGUE, Demo, DemoOptions, PlaygroundError, Renderer, Scenario, Settings, interactive,
    paths, scenario, settings,
};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PlaygroundError> {
    let mut settings = Settings::load()?;
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    if let Some(variant) = cli.variant {
        settings.combobox_variant = variant.into();
    }
    if let Some(today) = &cli.today {
        settings.today = Some(settings::parse_date(today)?);
    }

    init_logging(&settings)?;
    log::info!("[main] {:?}", settings);

    let renderer = Renderer::new(settings.theme).with_color(std::io::stdout().is_terminal());
    let options = DemoOptions {
        today: settings.today(),
        variant: settings.combobox_variant,
    };

    match cli.command {
        Command::List => {
            let width = CATALOGUE.iter().map(|info| info.name.len()).max().unwrap_or(0);
            for info in CATALOGUE {
                println!("{:width$}  {}", info.name, info.summary, width = width);
            }
        }
        Command::Show { demo } => {
            let demo = Demo::build(&demo, &options)?;
            print!("{}", demo.page().markup());
        }
        Command::Run { scenario: path } => {
            let script = Scenario::load(&path)?;
            let options = DemoOptions {
                today: script.today.unwrap_or(options.today),
                ..options
            };
            let mut demo = Demo::build(&script.demo, &options)?;
            for line in scenario::replay(&mut demo, &script.steps, &renderer)? {
                println!("{}", line);
            }
        }
        Command::Interactive { demo } => {
            let mut demo = Demo::build(&demo, &options)?;
            interactive::run(&mut demo, &renderer.with_color(true))?;
        }
    }
    Ok(())
}

/// Log into `latest.log` in the cache directory, archiving older runs.
fn init_logging(settings: &Settings) -> Result<(), PlaygroundError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();
    let file = File::create(&path)?;
    WriteLogger::init(settings.log_level.filter(), Config::default(), file)?;
    Ok(())
}
