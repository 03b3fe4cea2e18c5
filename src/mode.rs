use super::*;

/// Where the displayed stories come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
  /// Built-in stories filtered by title as the query is typed.
  Local,
  /// Stories returned by the search endpoint for the submitted query.
  Remote,
}

impl Mode {
  pub(crate) fn status(self) -> &'static str {
    match self {
      Mode::Local => LOCAL_STATUS,
      Mode::Remote => REMOTE_STATUS,
    }
  }
}
