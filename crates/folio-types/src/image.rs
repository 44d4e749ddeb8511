use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::split_name;
use crate::error::{NameError, NameResult};

/// A validated image name: a flat basename plus a `.jpg` extension
/// (matched case-insensitively, stored as submitted).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageName {
    raw: String,
}

impl ImageName {
    /// Parse and validate a submitted image name.
    pub fn parse(raw: &str) -> NameResult<Self> {
        let (_, ext) = split_name(raw)?;
        if !ext.eq_ignore_ascii_case("jpg") {
            return Err(NameError::InvalidImageExtension);
        }
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// The name exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The content type the image is served with.
    pub fn content_type(&self) -> &'static str {
        "image/jpeg"
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for ImageName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for ImageName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
