use {
  action::Action,
  anyhow::Context,
  app::App,
  arguments::Arguments,
  clap::{Parser, Subcommand},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  filter::search_stories,
  list_view::ListView,
  load_state::LoadState,
  logging::LogTarget,
  mode::Mode,
  object_id::ObjectId,
  pending_search::PendingSearch,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
  },
  search_input::SearchInput,
  search_response::SearchResponse,
  search_store::SearchStore,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    fmt::{self, Display},
    fs,
    io::{self, IsTerminal, Stdout},
    mem,
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  story::Story,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{Level, debug, info, trace, warn},
  transient_message::TransientMessage,
  utils::{deserialize_null_default, format_comments, format_points, truncate},
};

mod action;
mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod effect;
mod event;
mod filter;
mod list_view;
mod load_state;
mod logging;
mod mode;
mod object_id;
mod pending_search;
mod replay;
mod search_input;
mod search_response;
mod search_store;
mod state;
mod story;
mod transient_message;
mod utils;

const TITLE: &str = "My Hacker Stories";

const REMOTE_STATUS: &str = "type to edit • enter search • ↑/↓ select • del dismiss • ctrl+o open • esc quit";

const LOCAL_STATUS: &str =
  "type to filter • ↑/↓ select • del dismiss • ctrl+o open • esc quit";

const LOADING_BANNER: &str = "Loading ...";
const ERROR_BANNER: &str = "Something went wrong ...";

const BASE_INDENT: &str = " ";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

#[tokio::main]
async fn main() {
  if let Err(error) = Arguments::parse().run() {
    let use_color = io::stderr().is_terminal();

    let label = |text: &str| {
      if use_color {
        text.bold().red().to_string()
      } else {
        text.to_string()
      }
    };

    eprintln!("{} {error}", label("error:"));

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("{}", label("because:"));
      }

      eprintln!("{} {error}", label("-"));
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("{}", label("backtrace:"));
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
