use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-stories",
  version,
  about = "Search, filter and dismiss Hacker News stories"
)]
pub(crate) struct Arguments {
  /// Search endpoint, queried as `<URL>?query=<term>`
  #[arg(
    long,
    env = "HN_STORIES_ENDPOINT",
    default_value = Client::DEFAULT_ENDPOINT,
    value_name = "URL"
  )]
  endpoint: String,
  /// Append log output to this file
  #[arg(long = "log-file", env = "HN_STORIES_LOG_FILE", value_name = "PATH")]
  log_file: Option<PathBuf>,
  /// Minimum level of logged events
  #[arg(long = "log-level", default_value = "info", value_name = "LEVEL")]
  log_level: Level,
  /// Filter a built-in set of stories locally instead of searching
  #[arg(long)]
  offline: bool,
  #[command(subcommand)]
  operation: Option<Operation>,
  /// File holding the last typed search term
  #[arg(long, env = "HN_STORIES_STORAGE_FILE", value_name = "PATH")]
  storage: Option<PathBuf>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub(crate) enum Operation {
  /// Apply a JSON array of transitions to an empty state and print the result
  Replay {
    #[arg(value_name = "FILE")]
    script: PathBuf,
  },
}

impl Arguments {
  fn log_target(&self) -> LogTarget {
    match (&self.log_file, &self.operation) {
      (Some(path), _) => LogTarget::File(path.clone()),
      (None, Some(_)) => LogTarget::Stderr,
      (None, None) => LogTarget::Disabled,
    }
  }

  fn mode(&self) -> Mode {
    if self.offline {
      Mode::Local
    } else {
      Mode::Remote
    }
  }

  pub(crate) fn run(self) -> Result {
    logging::init(self.log_level, self.log_target())?;

    if let Some(Operation::Replay { script }) = &self.operation {
      return replay::run(script);
    }

    let mode = self.mode();

    let storage = match self.storage {
      Some(path) => path,
      None => SearchStore::default_path()?,
    };

    let search_store =
      SearchStore::load(storage).context("could not load saved search")?;

    let client = Client::new(self.endpoint);

    info!(
      ?mode,
      endpoint = client.endpoint(),
      storage = %search_store.path().display(),
      "starting"
    );

    let items = match mode {
      Mode::Local => Story::built_in(),
      Mode::Remote => Vec::new(),
    };

    let state = State::new(mode, search_store, items);

    let mut app = App::new(client, state);

    let mut terminal = initialize_terminal()?;

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;

    result
  }
}
