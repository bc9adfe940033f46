use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse the fake store product catalog")]
pub struct Cli {
    /// Catalog endpoint returning a JSON array of products
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Products revealed per page (defaults to 10)
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Browse the catalog interactively in the terminal
    Browse,
    /// Print the catalog once
    List {
        /// Filter titles by this text
        #[arg(short, long)]
        query: Option<String>,
        /// Number of pages to reveal
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// Serve the catalog view as an HTML page
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "product_catalog",
            "list",
            "--query",
            "jacket",
            "--pages",
            "2",
            "--page-size",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.page_size, Some(5));
        assert_eq!(
            cli.command,
            Command::List {
                query: Some("jacket".to_string()),
                pages: 2
            }
        );
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let result = Cli::try_parse_from(["product_catalog", "--page-size", "0", "browse"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["product_catalog", "serve"]).unwrap();

        assert_eq!(cli.command, Command::Serve { port: 3000 });
        assert!(cli.endpoint.is_none());
    }
}
