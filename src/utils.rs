use super::*;

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn format_comments(count: u64) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}
