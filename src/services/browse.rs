use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::pagination::PaginationConfig;
use crate::render::terminal::render;
use crate::view::{CatalogSource, CatalogView};

const HELP: &str = "\
Commands:
  more, m            load the next page
  search <text>      filter by title (`/text` works too, `search` alone clears)
  clear              clear the search
  help, ?            show this help
  quit, q            leave";

/// A line typed into the terminal browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    LoadMore,
    Search(String),
    Help,
    Quit,
}

impl InputEvent {
    /// Returns `None` for blank or unknown lines
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Some(text) = line.strip_prefix('/') {
            return Some(InputEvent::Search(text.to_string()));
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "more" | "m" if rest.is_empty() => Some(InputEvent::LoadMore),
            "search" | "s" => Some(InputEvent::Search(rest.to_string())),
            "clear" => Some(InputEvent::Search(String::new())),
            "help" | "?" => Some(InputEvent::Help),
            "quit" | "q" | "exit" => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

enum Tick {
    Loaded,
    Input(Option<String>),
}

/// Interactive terminal view over one mounted catalog
pub struct BrowseService<S> {
    source: Arc<S>,
    config: PaginationConfig,
}

impl<S: CatalogSource> BrowseService<S> {
    pub fn new(source: Arc<S>, config: PaginationConfig) -> Self {
        Self { source, config }
    }

    pub async fn run(&self) -> Result<()> {
        let input = BufReader::new(tokio::io::stdin());
        let mut out = std::io::stdout();
        self.run_session(input, &mut out).await
    }

    /// Input keeps being read while the catalog loads. Ends on `quit` or end of input.
    pub async fn run_session<R, W>(&self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut view = CatalogView::new(self.config);
        view.mount(self.source.clone());
        write_view(out, &view)?;

        let mut lines = input.lines();
        loop {
            let tick = tokio::select! {
                _ = view.wait_for_load(), if view.is_loading() => Tick::Loaded,
                line = lines.next_line() => Tick::Input(line.context("Failed to read input")?),
            };

            let line = match tick {
                Tick::Loaded => {
                    write_view(out, &view)?;
                    continue;
                }
                Tick::Input(None) => break,
                Tick::Input(Some(line)) => line,
            };

            match InputEvent::parse(&line) {
                Some(InputEvent::Quit) => break,
                Some(event) => handle_event(&mut view, &event, out)?,
                None if line.trim().is_empty() => {}
                None => writeln!(out, "Unknown command {:?}, type `help`", line.trim())?,
            }
        }

        info!("Leaving catalog browser");
        Ok(())
    }
}

/// Apply one event to the view and print the result
pub fn handle_event<W: Write>(
    view: &mut CatalogView,
    event: &InputEvent,
    out: &mut W,
) -> Result<()> {
    if *event == InputEvent::Help {
        writeln!(out, "{}", HELP)?;
        return Ok(());
    }

    let Some(listing) = view.listing_mut() else {
        debug!("Ignoring {:?}, catalog not ready", event);
        return write_view(out, view);
    };

    match event {
        InputEvent::LoadMore if !listing.has_more() => {
            writeln!(out, "Nothing more to load")?;
            return Ok(());
        }
        InputEvent::LoadMore => listing.advance(),
        InputEvent::Search(text) => listing.on_query_change(text.as_str()),
        InputEvent::Help | InputEvent::Quit => {}
    }
    write_view(out, view)
}

fn write_view<W: Write>(out: &mut W, view: &CatalogView) -> Result<()> {
    out.write_all(render(view.state()).as_bytes())?;
    out.flush()?;
    Ok(())
}
