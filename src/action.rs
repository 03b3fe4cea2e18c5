use super::*;

/// A transition event for [`LoadState`].
///
/// Decoding is strict: an object whose `type` is not one of the four known
/// transitions is rejected, so a script can never slip an unrecognized event
/// past the reducer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(
  tag = "type",
  content = "payload",
  rename_all = "SCREAMING_SNAKE_CASE",
  deny_unknown_fields
)]
pub(crate) enum Action {
  FetchFailure,
  FetchInit,
  FetchSuccess(Vec<Story>),
  RemoveItem(ObjectId),
}

impl Action {
  pub(crate) fn decode_script(script: &str) -> Result<Vec<Action>> {
    let values = serde_json::from_str::<Vec<Value>>(script)
      .context("action script must be a JSON array")?;

    values
      .into_iter()
      .enumerate()
      .map(|(index, value)| {
        Action::deserialize(value)
          .with_context(|| format!("action {index} is not a known transition"))
      })
      .collect()
  }

  pub(crate) fn name(&self) -> &'static str {
    match self {
      Action::FetchFailure => "FETCH_FAILURE",
      Action::FetchInit => "FETCH_INIT",
      Action::FetchSuccess(_) => "FETCH_SUCCESS",
      Action::RemoveItem(_) => "REMOVE_ITEM",
    }
  }
}
