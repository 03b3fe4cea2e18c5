use super::*;

/// Items plus loading and error flags. The flags are independent: nothing
/// here forbids both being set, the reducer just never produces that from
/// the initial state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoadState {
  pub(crate) is_error: bool,
  pub(crate) is_loading: bool,
  pub(crate) items: Vec<Story>,
}

impl LoadState {
  pub(crate) fn new(items: Vec<Story>) -> Self {
    Self {
      is_error: false,
      is_loading: false,
      items,
    }
  }

  /// Applies one transition, consuming the previous state.
  #[must_use]
  pub(crate) fn reduce(self, action: Action) -> Self {
    let Self {
      is_error,
      is_loading,
      items,
    } = self;

    match action {
      Action::FetchFailure => Self {
        is_error: true,
        is_loading: false,
        items,
      },
      Action::FetchInit => Self {
        is_error: false,
        is_loading: true,
        items,
      },
      Action::FetchSuccess(items) => Self {
        is_error: false,
        is_loading: false,
        items,
      },
      Action::RemoveItem(id) => Self {
        is_error,
        is_loading,
        items: items
          .into_iter()
          .filter(|story| story.object_id != id)
          .collect(),
      },
    }
  }
}
