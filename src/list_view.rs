/// Selection and scroll position over a list whose items live elsewhere.
/// Every accessor takes the current length, so the cursor stays valid when
/// the list shrinks underneath it.
#[derive(Default)]
pub(crate) struct ListView {
  offset: usize,
  selected: usize,
}

impl ListView {
  pub(crate) fn offset(&self, len: usize) -> usize {
    if len == 0 {
      0
    } else {
      self.offset.min(self.selected_index(len).unwrap_or(0))
    }
  }

  pub(crate) fn selected_index(&self, len: usize) -> Option<usize> {
    if len == 0 {
      None
    } else {
      Some(self.selected.min(len.saturating_sub(1)))
    }
  }

  pub(crate) fn set_offset(&mut self, offset: usize, len: usize) {
    self.offset = offset.min(len.saturating_sub(1));
  }

  pub(crate) fn set_selected(&mut self, index: usize, len: usize) {
    self.selected = index.min(len.saturating_sub(1));
  }
}
