use super::*;

/// A status line that reverts to `restore` once its time is up.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  restore: String,
  text: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(text: String, restore: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::LIFETIME,
      restore,
      text,
    }
  }

  pub(crate) fn restore(&self) -> &str {
    &self.restore
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}
