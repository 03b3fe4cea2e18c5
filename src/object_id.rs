use super::*;

/// Identity of a story. The search API sends `objectID` as a string, while
/// hand-written data often uses plain numbers. The two spellings are merged
/// on purpose: `1` and `"1"` name the same story, so a removal script can
/// write either form against fetched results.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct ObjectId(String);

impl<'de> Deserialize<'de> for ObjectId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    match Value::deserialize(deserializer)? {
      Value::String(s) => Ok(Self(s)),
      Value::Number(n) => Ok(Self(n.to_string())),
      Value::Null => Err(de::Error::invalid_type(
        Unexpected::Unit,
        &"string or number",
      )),
      Value::Bool(b) => Err(de::Error::invalid_type(
        Unexpected::Bool(b),
        &"string or number",
      )),
      Value::Array(_) => Err(de::Error::invalid_type(
        Unexpected::Seq,
        &"string or number",
      )),
      Value::Object(_) => Err(de::Error::invalid_type(
        Unexpected::Map,
        &"string or number",
      )),
    }
  }
}

impl Display for ObjectId {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl ObjectId {
  pub(crate) fn new(id: impl ToString) -> Self {
    Self(id.to_string())
  }
}
