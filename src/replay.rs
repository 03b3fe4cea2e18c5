use super::*;

pub(crate) fn replay(actions: Vec<Action>) -> LoadState {
  actions
    .into_iter()
    .fold(LoadState::default(), |state, action| {
      trace!(action = action.name(), "replaying transition");
      state.reduce(action)
    })
}

pub(crate) fn run(script: &Path) -> Result {
  let source = fs::read_to_string(script).with_context(|| {
    format!("could not read action script `{}`", script.display())
  })?;

  let actions = Action::decode_script(&source)?;

  info!(count = actions.len(), "replaying action script");

  let state = replay(actions);

  println!("{}", serde_json::to_string_pretty(&state)?);

  Ok(())
}
