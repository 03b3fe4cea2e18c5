/// The locally-typed query. Editing it never touches the network; only
/// [`SearchInput::submission`] hands a query to the fetch cycle.
pub(crate) struct SearchInput {
  buffer: String,
}

impl SearchInput {
  pub(crate) fn buffer(&self) -> &str {
    &self.buffer
  }

  pub(crate) fn new(seed: &str) -> Self {
    Self {
      buffer: seed.to_string(),
    }
  }

  pub(crate) fn pop(&mut self) -> bool {
    self.buffer.pop().is_some()
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Search: {}", self.buffer)
  }

  pub(crate) fn push(&mut self, ch: char) {
    self.buffer.push(ch);
  }

  /// The query to fetch, or `None` when there is nothing to submit.
  pub(crate) fn submission(&self) -> Option<String> {
    let query = self.buffer.trim();

    (!query.is_empty()).then(|| query.to_string())
  }
}
