use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn apply(&mut self, command: Command) -> bool {
    match self.state.dispatch_command(command) {
      Ok(dispatch) => {
        for effect in dispatch.effects {
          self.execute_effect(effect);
        }

        dispatch.should_exit
      }
      Err(error) => {
        self.state.clear_pending_effects();
        self.state.set_transient_message(format!("error: {error}"));
        false
      }
    }
  }

  fn banner(load_state: &LoadState) -> Line<'static> {
    let mut spans = Vec::new();

    if load_state.is_loading {
      spans.push(Span::styled(
        LOADING_BANNER,
        Style::default().fg(Color::Yellow),
      ));
    }

    if load_state.is_error {
      if !spans.is_empty() {
        spans.push(Span::raw(" "));
      }

      spans.push(Span::styled(
        ERROR_BANNER,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
      ));
    }

    Line::from(spans)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[3].height as usize);

    frame.render_widget(
      Paragraph::new(Span::styled(
        TITLE,
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )),
      layout[0],
    );

    let input = self.state.search_input();

    let cursor_offset =
      u16::try_from(input.prompt().chars().count()).unwrap_or(u16::MAX);

    frame.render_widget(
      Paragraph::new(Line::from(vec![
        Span::styled("Search:", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(input.buffer().to_string()),
      ])),
      layout[1],
    );

    frame.set_cursor_position((
      layout[1]
        .x
        .saturating_add(cursor_offset)
        .min(layout[1].right().saturating_sub(1)),
      layout[1].y,
    ));

    let load_state = self.state.load_state();

    frame.render_widget(Paragraph::new(Self::banner(load_state)), layout[2]);

    let is_loading = load_state.is_loading;

    let (selected_index, offset) = self.state.selection();

    let displayed = self.state.displayed();

    let list_items: Vec<ListItem> = if displayed.is_empty() {
      let text = match self.state.mode() {
        Mode::Local => "No stories match your search.",
        Mode::Remote if is_loading => "Searching...",
        Mode::Remote => "No stories yet. Type a query and press enter.",
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      displayed
        .into_iter()
        .map(Self::story_list_item)
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[3], &mut list_state);

    self.state.set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[4]);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchStories { query, request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let result = client.search_stories(&query).await;

          if sender.send(Event::Stories { request_id, result }).is_err() {
            debug!(request_id, "response arrived after shutdown");
          }
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          warn!(url, "could not open link: {error}");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    let startup = self.state.startup_command();

    self.apply(startup);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      if self.apply(Command::from_key(key)) {
        break;
      }
    }

    Ok(())
  }

  fn story_list_item(story: &Story) -> ListItem<'static> {
    ListItem::new(vec![
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(story.title.clone(), Style::default().fg(Color::White)),
      ]),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(story.detail(), Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ])
  }
}
