use anyhow::Result;

use product_catalog::cli::{Cli, Command};
use product_catalog::{
    build_config, handle_browse, handle_completions, handle_list, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli);
    match &cli.command {
        Command::Browse => handle_browse(config),
        Command::List { query, pages } => handle_list(config, *pages, query.clone()),
        Command::Serve { port } => handle_serve(config, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
