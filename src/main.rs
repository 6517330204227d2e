//! paramtree CLI
//!
//! Usage: paramtree <COMMAND>
//!
//! Commands:
//!   select  Choose parameter values, interactively or with --pick
//!   show    Render the parameter tree of a definition file
//!   groups  List the exclusive choice groups of a definition file

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use paramtree::config::{Config, ConfigWarning};
use paramtree::presentation::{Cli, Commands};
use paramtree::ui::context::UiContext;
use paramtree::ui::error::print_error;
use paramtree::ui::theme::{icons, icons_ascii, pick};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = command_name(&cli.command);
    let (config, warnings) = match Config::load_layered(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            // Report with built-in defaults; CLI flags still apply
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.ascii, &Config::default());
            print_error(&err.into(), command, &ui);
            std::process::exit(1);
        }
    };
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.ascii, &config);
    print_config_warnings(&warnings, ui.unicode);

    if let Err(err) = run(cli.command, &ui, &config) {
        print_error(&err, command, &ui);
        std::process::exit(1);
    }
}

fn run(command: Commands, ui: &UiContext, config: &Config) -> Result<()> {
    match command {
        Commands::Select {
            file,
            picks,
            cancel,
            fail_on_cancel,
            expand_all,
        } => commands::cmd_select(
            &commands::SelectArgs {
                file,
                picks,
                cancel,
                fail_on_cancel,
                expand_all,
            },
            ui,
            config,
        ),
        Commands::Show { file } => commands::cmd_show(&file, ui),
        Commands::Groups { file } => commands::cmd_groups(&file, ui),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Select { .. } => "select",
        Commands::Show { .. } => "show",
        Commands::Groups { .. } => "groups",
    }
}

/// Log level from `-v` count; `RUST_LOG` wins when set
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("paramtree={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    let icon = pick(unicode, icons::WARNING, icons_ascii::WARNING);
    for warning in warnings {
        eprintln!("{} {}", icon, warning);
    }
}
