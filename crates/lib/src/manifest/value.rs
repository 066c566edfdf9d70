//! Typed property-list values.
//!
//! Manifest values are decoded into a closed [`Value`] enum instead of being
//! handled dynamically, so every supported kind is matched exhaustively and
//! anything else is rejected with [`ManifestError::Malformed`] at load time.
//!
//! Dictionaries use [`BTreeMap`] so the rewritten manifest has a
//! deterministic key order.

use std::collections::BTreeMap;
use std::time::SystemTime;

use super::ManifestError;

/// A property-list dictionary.
pub type Dictionary = BTreeMap<String, Value>;

/// A property-list value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  String(String),
  Integer(i64),
  Real(f64),
  Boolean(bool),
  Date(SystemTime),
  Data(Vec<u8>),
  Array(Vec<Value>),
  Dictionary(Dictionary),
}

impl Value {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_array(&self) -> Option<&[Value]> {
    match self {
      Value::Array(items) => Some(items),
      _ => None,
    }
  }

  pub fn as_dictionary(&self) -> Option<&Dictionary> {
    match self {
      Value::Dictionary(dict) => Some(dict),
      _ => None,
    }
  }

  /// Build an array of strings.
  pub fn string_array<I, S>(items: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Value::Array(items.into_iter().map(|s| Value::String(s.into())).collect())
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::String(value.to_string())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::String(value)
  }
}

impl From<Dictionary> for Value {
  fn from(value: Dictionary) -> Self {
    Value::Dictionary(value)
  }
}

/// Decode a parsed property list into a root dictionary.
pub fn decode_root(value: plist::Value) -> Result<Dictionary, ManifestError> {
  match decode(value, "")? {
    Value::Dictionary(dict) => Ok(dict),
    _ => Err(ManifestError::Malformed("root object is not a dictionary".to_string())),
  }
}

fn decode(value: plist::Value, path: &str) -> Result<Value, ManifestError> {
  let unsupported = |kind: &str| {
    let location = if path.is_empty() { "<root>" } else { path };
    ManifestError::Malformed(format!("unsupported {kind} value at {location}"))
  };

  let decoded = match value {
    plist::Value::String(s) => Value::String(s),
    plist::Value::Boolean(b) => Value::Boolean(b),
    plist::Value::Real(r) => Value::Real(r),
    plist::Value::Integer(i) => Value::Integer(i.as_signed().ok_or_else(|| unsupported("integer"))?),
    plist::Value::Date(d) => Value::Date(SystemTime::from(d)),
    plist::Value::Data(bytes) => Value::Data(bytes),
    plist::Value::Array(items) => Value::Array(
      items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode(item, &format!("{path}[{index}]")))
        .collect::<Result<_, _>>()?,
    ),
    plist::Value::Dictionary(dict) => {
      let mut decoded = Dictionary::new();
      for (key, item) in dict {
        let child_path = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };
        decoded.insert(key, decode(item, &child_path)?);
      }
      Value::Dictionary(decoded)
    }
    _ => return Err(unsupported("non-standard")),
  };

  Ok(decoded)
}

impl From<Value> for plist::Value {
  fn from(value: Value) -> Self {
    match value {
      Value::String(s) => plist::Value::String(s),
      Value::Integer(i) => plist::Value::Integer(i.into()),
      Value::Real(r) => plist::Value::Real(r),
      Value::Boolean(b) => plist::Value::Boolean(b),
      Value::Date(d) => plist::Value::Date(d.into()),
      Value::Data(bytes) => plist::Value::Data(bytes),
      Value::Array(items) => plist::Value::Array(items.into_iter().map(plist::Value::from).collect()),
      Value::Dictionary(dict) => {
        let mut encoded = plist::Dictionary::new();
        for (key, item) in dict {
          encoded.insert(key, plist::Value::from(item));
        }
        plist::Value::Dictionary(encoded)
      }
    }
  }
}
