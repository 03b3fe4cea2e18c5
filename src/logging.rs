use {
  super::*,
  std::{fs::OpenOptions, sync::Mutex},
  tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
  },
};

/// Where log events end up. The terminal UI owns stdout and stderr while it
/// runs, so it only logs when pointed at a file.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LogTarget {
  Disabled,
  File(PathBuf),
  Stderr,
}

/// `RUST_LOG` wins when set; otherwise dependencies stay at `warn` and this
/// crate logs at `level`.
fn filter(level: Level) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    let level = level.as_str().to_lowercase();
    EnvFilter::new(format!("warn,hn_stories={level}"))
  })
}

pub(crate) fn init(level: Level, target: LogTarget) -> Result {
  match target {
    LogTarget::Disabled => {}
    LogTarget::File(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| {
          format!("could not open log file `{}`", path.display())
        })?;

      tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;
    }
    LogTarget::Stderr => {
      tracing_subscriber::registry()
        .with(filter(level))
        .with(
          fmt::layer()
            .with_ansi(io::stderr().is_terminal())
            .with_writer(io::stderr),
        )
        .try_init()?;
    }
  }

  Ok(())
}
