use super::*;

/// Stories whose title contains `term`, ignoring case. The returned iterator
/// borrows `stories` but owns its copy of the term, so it can be cloned and
/// restarted freely.
pub(crate) fn search_stories<'a>(
  stories: &'a [Story],
  term: &str,
) -> impl Iterator<Item = &'a Story> + Clone + use<'a> {
  let needle = term.to_lowercase();

  stories
    .iter()
    .filter(move |story| story.title.to_lowercase().contains(&needle))
}
