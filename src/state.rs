use super::*;

pub(crate) struct State {
  list_height: usize,
  load_state: LoadState,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_search: Option<PendingSearch>,
  search_input: SearchInput,
  search_store: SearchStore,
  transient_message: Option<TransientMessage>,
  view: ListView,
}

impl State {
  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn dismiss_selected(&mut self) {
    let Some(story) = self.selected_story() else {
      return;
    };

    let (id, title) = (story.object_id.clone(), truncate(&story.title, 40));

    debug!(%id, "dismissing story");

    self.dispatch(Action::RemoveItem(id));

    self.set_transient_message(format!("Dismissed \"{title}\""));
  }

  fn dispatch(&mut self, action: Action) {
    trace!(action = action.name(), "applying transition");

    self.load_state = mem::take(&mut self.load_state).reduce(action);
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Backspace => self.pop_query_char()?,
      Command::Dismiss => self.dismiss_selected(),
      Command::Input(ch) => self.push_query_char(ch)?,
      Command::None => {}
      Command::OpenSelected => self.open_selected(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::Quit => {
        should_exit = true;
      }
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::Submit => self.submit(),
    }

    Ok(CommandDispatch {
      effects: mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  /// Stories as they should be listed: filtered by the typed query in the
  /// local mode, exactly as fetched in the remote one.
  pub(crate) fn displayed(&self) -> Vec<&Story> {
    match self.mode {
      Mode::Local => {
        search_stories(&self.load_state.items, self.search_input.buffer())
          .collect()
      }
      Mode::Remote => self.load_state.items.iter().collect(),
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stories { request_id, result } => {
        let Some(pending) = self.pending_search.as_ref() else {
          debug!(request_id, "ignoring response without a pending search");
          return;
        };

        if pending.request_id != request_id {
          debug!(
            request_id,
            current = pending.request_id,
            "ignoring response for superseded search"
          );
          return;
        }

        let Some(pending) = self.pending_search.take() else {
          return;
        };

        match result {
          Ok(stories) => {
            let result_count = stories.len();

            info!(query = %pending.query, result_count, "search finished");

            self.dispatch(Action::FetchSuccess(stories));

            self.view = ListView::default();

            let truncated = truncate(&pending.query, 40);

            self.message = match result_count {
              0 => format!("No stories for \"{truncated}\""),
              1 => format!("Found 1 story for \"{truncated}\""),
              _ => format!("Found {result_count} stories for \"{truncated}\""),
            };
          }
          Err(error) => {
            warn!(query = %pending.query, "search failed: {error:#}");

            self.dispatch(Action::FetchFailure);

            self.message = self.mode.status().into();
          }
        }
      }
    }
  }

  pub(crate) fn load_state(&self) -> &LoadState {
    &self.load_state
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> Mode {
    self.mode
  }

  pub(crate) fn new(
    mode: Mode,
    search_store: SearchStore,
    items: Vec<Story>,
  ) -> Self {
    Self {
      list_height: 0,
      load_state: LoadState::new(items),
      message: mode.status().into(),
      mode,
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_search: None,
      search_input: SearchInput::new(search_store.term()),
      search_store,
      transient_message: None,
      view: ListView::default(),
    }
  }

  fn open_selected(&mut self) {
    if let Some(story) = self.selected_story() {
      let url = story.resolved_url();

      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn page_down(&mut self) {
    let current = self.selected_or_first();

    self.select_index(current.saturating_add(self.page_jump()));
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  fn page_up(&mut self) {
    let current = self.selected_or_first();

    self.select_index(current.saturating_sub(self.page_jump()));
  }

  fn pop_query_char(&mut self) -> Result {
    if self.search_input.pop() {
      self.query_changed()?;
    }

    Ok(())
  }

  fn push_query_char(&mut self, ch: char) -> Result {
    self.search_input.push(ch);

    self.query_changed()
  }

  fn query_changed(&mut self) -> Result {
    if self.mode == Mode::Local {
      self.view = ListView::default();
    }

    self
      .search_store
      .save(self.search_input.buffer())
      .context("could not save search term")
  }

  pub(crate) fn search_input(&self) -> &SearchInput {
    &self.search_input
  }

  fn select_index(&mut self, target: usize) {
    let len = self.displayed().len();

    self.view.set_selected(target, len);
  }

  fn select_next(&mut self) {
    let current = self.selected_or_first();

    self.select_index(current.saturating_add(1));
  }

  fn select_previous(&mut self) {
    let current = self.selected_or_first();

    self.select_index(current.saturating_sub(1));
  }

  fn selected_or_first(&self) -> usize {
    self
      .view
      .selected_index(self.displayed().len())
      .unwrap_or(0)
  }

  pub(crate) fn selected_story(&self) -> Option<&Story> {
    let displayed = self.displayed();

    self
      .view
      .selected_index(displayed.len())
      .and_then(|index| displayed.get(index).copied())
  }

  /// Selected row and scroll offset for the list as currently displayed.
  pub(crate) fn selection(&self) -> (Option<usize>, usize) {
    let len = self.displayed().len();

    (self.view.selected_index(len), self.view.offset(len))
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    let len = self.displayed().len();

    self.view.set_offset(offset, len);
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let restore = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.restore().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), restore));

    self.message = message;
  }

  /// The command to run once at startup: a remote session seeded with a
  /// stored term searches for it straight away.
  pub(crate) fn startup_command(&self) -> Command {
    if self.mode == Mode::Remote && self.search_input.submission().is_some() {
      Command::Submit
    } else {
      Command::None
    }
  }

  fn submit(&mut self) {
    if self.mode == Mode::Local {
      return;
    }

    let Some(query) = self.search_input.submission() else {
      return;
    };

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    info!(query = %query, request_id, "submitting search");

    self.dispatch(Action::FetchInit);

    self.pending_search = Some(PendingSearch {
      query: query.clone(),
      request_id,
    });

    self.transient_message = None;

    self.message = format!("Searching for \"{}\"...", truncate(&query, 40));

    self
      .pending_effects
      .push(Effect::FetchStories { query, request_id });
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired_at(Instant::now()) {
        self.message = transient.restore().to_string();
        self.transient_message = None;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::sync::atomic::{AtomicUsize, Ordering},
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn store_with(term: &str) -> SearchStore {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    let path = env::temp_dir()
      .join(format!("hn_stories_state_{}_{unique}", std::process::id()))
      .join("storage.json");

    let mut store = SearchStore::load(path).expect("load store");

    if !term.is_empty() {
      store.save(term).expect("seed store");
    }

    store
  }

  fn local_state() -> State {
    State::new(Mode::Local, store_with(""), Story::built_in())
  }

  fn remote_state(term: &str) -> State {
    State::new(Mode::Remote, store_with(term), Vec::new())
  }

  fn run(state: &mut State, command: Command) -> CommandDispatch {
    state.dispatch_command(command).expect("dispatch succeeds")
  }

  fn type_text(state: &mut State, text: &str) {
    for ch in text.chars() {
      run(state, Command::Input(ch));
    }
  }

  fn titles(state: &State) -> Vec<&str> {
    state
      .displayed()
      .into_iter()
      .map(|story| story.title.as_str())
      .collect()
  }

  #[test]
  fn submit_emits_one_fetch_and_starts_loading() {
    let mut state = remote_state("");

    type_text(&mut state, "rust");

    let dispatch = run(&mut state, Command::Submit);

    assert!(!dispatch.should_exit);
    assert_eq!(
      dispatch.effects,
      vec![Effect::FetchStories {
        query: "rust".to_string(),
        request_id: 0,
      }]
    );
    assert!(state.load_state().is_loading);
    assert!(!state.load_state().is_error);
    assert_eq!(state.message(), "Searching for \"rust\"...");
  }

  #[test]
  fn typing_alone_never_fetches() {
    let mut state = remote_state("");

    for ch in "react".chars() {
      assert!(run(&mut state, Command::Input(ch)).effects.is_empty());
    }

    assert!(!state.load_state().is_loading);
  }

  #[test]
  fn blank_query_is_not_submitted() {
    let mut state = remote_state("");

    type_text(&mut state, "  ");

    assert!(run(&mut state, Command::Submit).effects.is_empty());
    assert!(!state.load_state().is_loading);
  }

  #[test]
  fn successful_response_replaces_items() {
    let mut state = remote_state("");

    type_text(&mut state, "x");
    run(&mut state, Command::Submit);

    state.handle_event(Event::Stories {
      request_id: 0,
      result: Ok(vec![Story::titled(9, "X")]),
    });

    assert_eq!(
      state.load_state(),
      &LoadState::new(vec![Story::titled(9, "X")])
    );
    assert_eq!(state.message(), "Found 1 story for \"x\"");
  }

  #[test]
  fn failed_response_flags_error_and_keeps_items() {
    let mut state = remote_state("");

    type_text(&mut state, "x");
    run(&mut state, Command::Submit);
    state.handle_event(Event::Stories {
      request_id: 0,
      result: Ok(vec![Story::titled(1, "Redux")]),
    });

    run(&mut state, Command::Submit);
    state.handle_event(Event::Stories {
      request_id: 1,
      result: Err(anyhow::anyhow!("connection reset")),
    });

    assert!(state.load_state().is_error);
    assert!(!state.load_state().is_loading);
    assert_eq!(titles(&state), vec!["Redux"]);
  }

  #[test]
  fn superseded_response_is_discarded() {
    let mut state = remote_state("");

    type_text(&mut state, "a");
    run(&mut state, Command::Submit);
    type_text(&mut state, "b");
    run(&mut state, Command::Submit);

    state.handle_event(Event::Stories {
      request_id: 0,
      result: Ok(vec![Story::titled(1, "stale")]),
    });

    assert!(state.load_state().is_loading);
    assert!(state.displayed().is_empty());

    state.handle_event(Event::Stories {
      request_id: 1,
      result: Ok(vec![Story::titled(2, "fresh")]),
    });

    state.handle_event(Event::Stories {
      request_id: 0,
      result: Ok(vec![Story::titled(1, "stale")]),
    });

    assert!(!state.load_state().is_loading);
    assert_eq!(titles(&state), vec!["fresh"]);
  }

  #[test]
  fn startup_submits_stored_term_in_remote_mode() {
    let mut state = remote_state("redux");

    assert_eq!(state.search_input().buffer(), "redux");
    assert_eq!(state.startup_command(), Command::Submit);

    let command = state.startup_command();

    let dispatch = run(&mut state, command);

    assert_eq!(dispatch.effects.len(), 1);
    assert_eq!(remote_state("").startup_command(), Command::None);
  }

  #[test]
  fn local_mode_filters_while_typing() {
    let mut state = local_state();

    assert_eq!(titles(&state).len(), 4);

    type_text(&mut state, "redux");

    assert_eq!(titles(&state), vec!["Redux"]);

    run(&mut state, Command::Backspace);
    run(&mut state, Command::Backspace);
    run(&mut state, Command::Backspace);

    assert_eq!(titles(&state), vec!["React", "Redux"]);
  }

  #[test]
  fn local_mode_never_fetches() {
    let mut state = local_state();

    type_text(&mut state, "react");

    assert!(run(&mut state, Command::Submit).effects.is_empty());
    assert_eq!(state.startup_command(), Command::None);
  }

  #[test]
  fn every_edit_is_persisted() {
    let mut state = local_state();

    type_text(&mut state, "ang");

    let path = state.search_store.path().to_path_buf();

    assert_eq!(SearchStore::load(path.clone()).unwrap().term(), "ang");

    run(&mut state, Command::Backspace);

    assert_eq!(SearchStore::load(path).unwrap().term(), "an");
  }

  #[test]
  fn dismiss_removes_selected_story() {
    let mut state = local_state();

    run(&mut state, Command::SelectNext);
    run(&mut state, Command::Dismiss);

    assert_eq!(titles(&state), vec!["React", "Javascript", "Angular"]);
    assert_eq!(state.message(), "Dismissed \"Redux\"");
    assert_eq!(
      state.selected_story().map(|story| story.title.as_str()),
      Some("Javascript")
    );
  }

  #[test]
  fn dismiss_uses_filtered_selection() {
    let mut state = local_state();

    type_text(&mut state, "angular");
    run(&mut state, Command::Dismiss);

    assert!(titles(&state).is_empty());

    for _ in 0.."angular".len() {
      run(&mut state, Command::Backspace);
    }

    assert_eq!(titles(&state), vec!["React", "Redux", "Javascript"]);
  }

  #[test]
  fn dismiss_after_remote_fetch_removes_story() {
    let mut state = remote_state("");

    type_text(&mut state, "react");
    run(&mut state, Command::Submit);

    state.handle_event(Event::Stories {
      request_id: 0,
      result: Ok(vec![Story::titled(0, "React"), Story::titled(1, "Redux")]),
    });

    run(&mut state, Command::Dismiss);

    assert_eq!(titles(&state), vec!["Redux"]);
    assert!(!state.load_state().is_loading);
    assert!(!state.load_state().is_error);

    run(&mut state, Command::Dismiss);

    assert!(state.displayed().is_empty());
    assert!(run(&mut state, Command::Dismiss).effects.is_empty());
  }

  #[test]
  fn dismiss_on_empty_list_is_a_no_op() {
    let mut state = remote_state("");

    run(&mut state, Command::Dismiss);

    assert_eq!(state.load_state(), &LoadState::default());
  }

  #[test]
  fn selection_is_clamped_to_last_row() {
    let mut state = local_state();

    run(&mut state, Command::SelectLast);

    assert_eq!(state.selection(), (Some(3), 0));

    run(&mut state, Command::SelectNext);

    assert_eq!(state.selection().0, Some(3));

    run(&mut state, Command::SelectFirst);

    assert_eq!(state.selection().0, Some(0));
  }

  #[test]
  fn open_selected_emits_url() {
    let mut state = local_state();

    let dispatch = run(&mut state, Command::OpenSelected);

    assert_eq!(
      dispatch.effects,
      vec![Effect::OpenUrl {
        url: "https://reactjs.org/".to_string(),
      }]
    );
  }

  #[test]
  fn quit_requests_exit() {
    let mut state = local_state();

    assert!(run(&mut state, Command::Quit).should_exit);
  }

  #[test]
  fn stacked_transient_messages_restore_original_status() {
    let mut state = local_state();

    state.set_transient_message("first".into());
    state.set_transient_message("second".into());

    assert_eq!(state.message(), "second");

    state.update_transient_message();

    assert_eq!(state.message(), "second");
    assert_eq!(
      state.transient_message.as_ref().map(TransientMessage::restore),
      Some(LOCAL_STATUS)
    );
  }

  #[test]
  fn replaced_message_drops_transient() {
    let mut state = local_state();

    state.set_transient_message("saved".into());
    state.message = "something else".into();

    state.update_transient_message();

    assert!(state.transient_message.is_none());
  }
}
