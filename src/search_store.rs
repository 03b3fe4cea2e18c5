use super::*;

#[derive(Default, Deserialize, Serialize)]
struct Stored {
  #[serde(default)]
  search: String,
}

/// Durable home of the last typed search term, kept under the single key
/// `search` in a small JSON file.
#[derive(Debug)]
pub(crate) struct SearchStore {
  path: PathBuf,
  term: String,
}

impl SearchStore {
  pub(crate) fn default_path() -> Result<PathBuf> {
    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("hn-stories").join("storage.json"))
  }

  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn load(path: PathBuf) -> Result<Self> {
    let term = if path.exists() {
      let data = fs::read(&path)
        .with_context(|| format!("could not read `{}`", path.display()))?;

      Self::parse(&path, &data)
    } else {
      String::new()
    };

    debug!(path = %path.display(), term = %term, "loaded search term");

    Ok(Self { path, term })
  }

  /// An unreadable file only costs the saved term, never startup.
  fn parse(path: &Path, data: &[u8]) -> String {
    if data.is_empty() {
      return String::new();
    }

    match serde_json::from_slice::<Stored>(data) {
      Ok(stored) => stored.search,
      Err(error) => {
        warn!(
          path = %path.display(),
          "ignoring unreadable saved search: {error}"
        );
        String::new()
      }
    }
  }

  pub(crate) fn path(&self) -> &Path {
    &self.path
  }

  /// Writes a sibling file first and renames it into place, so a reader
  /// sees either the previous term or the new one.
  fn persist(&self, term: &str) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(&Stored {
      search: term.to_string(),
    })?;

    let staging = self.path.with_extension("json.tmp");

    fs::write(&staging, serialized)
      .with_context(|| format!("could not write `{}`", staging.display()))?;

    fs::rename(&staging, &self.path).with_context(|| {
      format!("could not replace `{}`", self.path.display())
    })?;

    Ok(())
  }

  pub(crate) fn save(&mut self, term: &str) -> Result {
    if self.term == term {
      return Ok(());
    }

    trace!(term, "saving search term");

    self.persist(term)?;

    term.clone_into(&mut self.term);

    Ok(())
  }

  pub(crate) fn term(&self) -> &str {
    &self.term
  }
}
