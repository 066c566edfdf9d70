//! Image variants declared by an icon-set descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target device class of an image variant.
///
/// Descriptors may name idioms this tool does not scope (`ios-marketing`,
/// `watch`, `universal`, ...). Those are kept verbatim as [`Idiom::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Idiom {
  Phone,
  Pad,
  Other(String),
}

impl Idiom {
  pub fn as_str(&self) -> &str {
    match self {
      Idiom::Phone => "iphone",
      Idiom::Pad => "ipad",
      Idiom::Other(name) => name,
    }
  }

  /// Suffix appended to destination file names for this idiom.
  pub fn file_suffix(&self) -> &'static str {
    match self {
      Idiom::Pad => "~ipad",
      _ => "",
    }
  }
}

impl From<String> for Idiom {
  fn from(value: String) -> Self {
    match value.as_str() {
      "iphone" => Idiom::Phone,
      "ipad" => Idiom::Pad,
      _ => Idiom::Other(value),
    }
  }
}

impl From<Idiom> for String {
  fn from(idiom: Idiom) -> Self {
    idiom.as_str().to_string()
  }
}

impl fmt::Display for Idiom {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Pixel density multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scale {
  #[default]
  #[serde(rename = "1x")]
  One,
  #[serde(rename = "2x")]
  Two,
  #[serde(rename = "3x")]
  Three,
}

impl Scale {
  pub fn as_str(self) -> &'static str {
    match self {
      Scale::One => "1x",
      Scale::Two => "2x",
      Scale::Three => "3x",
    }
  }

  /// Suffix appended to destination file names: empty for 1x, `@2x`/`@3x` otherwise.
  pub fn file_suffix(self) -> String {
    match self {
      Scale::One => String::new(),
      other => format!("@{}", other.as_str()),
    }
  }
}

impl fmt::Display for Scale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One raster variant of an icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconImage {
  /// Image file name inside the icon-set folder.
  pub filename: String,
  pub idiom: Idiom,
  /// Nominal point size, kept verbatim (e.g. `"29x29"`, `"83.5x83.5"`).
  pub size: String,
  pub scale: Scale,
}

/// Parsed `Contents.json` of an icon set.
#[derive(Debug, Deserialize)]
pub(crate) struct Descriptor {
  pub images: Vec<DescriptorImage>,
}

/// Image entry as written in the descriptor. Slots without a file are allowed.
#[derive(Debug, Deserialize)]
pub(crate) struct DescriptorImage {
  #[serde(default)]
  pub filename: Option<String>,
  pub idiom: Idiom,
  pub size: String,
  #[serde(default)]
  pub scale: Scale,
}

impl DescriptorImage {
  /// Convert to an [`IconImage`], dropping slots with no file name.
  pub fn into_icon_image(self) -> Option<IconImage> {
    let filename = self.filename.filter(|name| !name.is_empty())?;
    Some(IconImage {
      filename,
      idiom: self.idiom,
      size: self.size,
      scale: self.scale,
    })
  }
}
