use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Backspace,
  Dismiss,
  Input(char),
  None,
  OpenSelected,
  PageDown,
  PageUp,
  Quit,
  SelectFirst,
  SelectLast,
  SelectNext,
  SelectPrevious,
  Submit,
}

impl Command {
  /// The input line always has focus, so plain characters are text and
  /// everything else is bound to a non-printing key or a control chord.
  pub(crate) fn from_key(key: KeyEvent) -> Self {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Esc => Command::Quit,
      KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::Quit
      }
      KeyCode::Char('x') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::Dismiss
      }
      KeyCode::Char('o') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::OpenSelected
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Char(ch) => {
        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          Command::None
        } else {
          Command::Input(ch)
        }
      }
      KeyCode::Backspace => Command::Backspace,
      KeyCode::Delete => Command::Dismiss,
      KeyCode::Enter => Command::Submit,
      KeyCode::Down => Command::SelectNext,
      KeyCode::Up => Command::SelectPrevious,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Home => Command::SelectFirst,
      KeyCode::End => Command::SelectLast,
      _ => Command::None,
    }
  }
}
