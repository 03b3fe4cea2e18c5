use super::*;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Story {
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) author: String,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) num_comments: u64,
  #[serde(rename = "objectID")]
  pub(crate) object_id: ObjectId,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) points: i64,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) title: String,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) url: String,
}

impl Story {
  /// Stories shown by the offline variant, before any dismissals.
  pub(crate) fn built_in() -> Vec<Story> {
    [
      ("React", "Manish", 3, 4, 0),
      ("Redux", "Kumar", 2, 5, 1),
      ("Javascript", "Champak", 8, 3, 2),
      ("Angular", "Borah", 7, 2, 4),
    ]
    .into_iter()
    .map(|(title, author, num_comments, points, id)| Story {
      author: author.to_string(),
      num_comments,
      object_id: ObjectId::new(id),
      points,
      title: title.to_string(),
      url: "https://reactjs.org/".to_string(),
    })
    .collect()
  }

  pub(crate) fn detail(&self) -> String {
    let author = if self.author.is_empty() {
      "unknown"
    } else {
      &self.author
    };

    format!(
      "{} by {author} • {}",
      format_points(self.points),
      format_comments(self.num_comments)
    )
  }

  pub(crate) fn resolved_url(&self) -> String {
    if self.url.is_empty() {
      format!("https://news.ycombinator.com/item?id={}", self.object_id)
    } else {
      self.url.clone()
    }
  }

  #[cfg(test)]
  pub(crate) fn titled(id: u64, title: &str) -> Self {
    Story {
      author: String::new(),
      num_comments: 0,
      object_id: ObjectId::new(id),
      points: 0,
      title: title.to_string(),
      url: String::new(),
    }
  }
}
