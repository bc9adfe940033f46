pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod pagination;
pub mod render;
pub mod services;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::sync::Arc;

use crate::api::FakeStoreClient;
use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::services::browse::BrowseService;
use crate::services::list::ListService;
use crate::services::server::ServerService;
use crate::view::ViewHistory;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(cli: &Cli) -> AppConfig {
    AppConfig::new()
        .with_endpoint(cli.endpoint.clone())
        .with_page_size(cli.page_size.map(usize::from))
}

pub fn handle_browse(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let source = Arc::new(FakeStoreClient::new(&config.catalog)?);
        let service = BrowseService::new(source, config.pagination());
        service.run().await
    })
}

pub fn handle_list(config: AppConfig, pages: usize, query: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let source = Arc::new(FakeStoreClient::new(&config.catalog)?);
        let history = match query {
            Some(query) => ViewHistory::searched(query, pages, pages),
            None => ViewHistory::paged(pages),
        };
        let service = ListService::new(source, config.pagination(), history);
        if !service.run(&mut std::io::stdout()).await? {
            anyhow::bail!("Could not load the catalog from {}", config.catalog.endpoint);
        }
        Ok(())
    })
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
