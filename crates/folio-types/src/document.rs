use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NameError, NameResult};

/// How a document's content is interpreted, derived once from the
/// extension when the name is parsed.
///
/// The set is closed: a `DocumentName` can only ever carry one of these two
/// kinds, so downstream rendering matches exhaustively and can never fall
/// through on an unrecognized extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentKind {
    /// A `.md` file, rendered to HTML.
    Markdown,
    /// A `.txt` file, served verbatim as plain text.
    PlainText,
}

impl DocumentKind {
    /// Derive the kind from a lowercased extension (without the dot).
    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "md" => Some(Self::Markdown),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// A validated document name: a flat basename plus a `.md` or `.txt`
/// extension (matched case-insensitively, stored as submitted).
///
/// Parsing is the single validation step. Holding a `DocumentName` is proof
/// the name is non-empty, free of path separators, and carries a supported
/// extension, so stores join it onto their directory without re-checking.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentName {
    raw: String,
    kind: DocumentKind,
}

impl DocumentName {
    /// Parse and validate a submitted name.
    pub fn parse(raw: &str) -> NameResult<Self> {
        let (_, ext) = split_name(raw)?;
        let kind = DocumentKind::from_extension(&ext.to_ascii_lowercase())
            .ok_or(NameError::InvalidDocumentExtension)?;
        Ok(Self {
            raw: raw.to_string(),
            kind,
        })
    }

    /// The name exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// How this document's content is interpreted.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The name without its extension.
    pub fn basename(&self) -> &str {
        let dot = self.raw.rfind('.').unwrap_or(self.raw.len());
        &self.raw[..dot]
    }

    /// The extension including the leading dot, in its original case.
    pub fn extension(&self) -> &str {
        let dot = self.raw.rfind('.').unwrap_or(self.raw.len());
        &self.raw[dot..]
    }

    /// The name a duplicate of this document receives:
    /// `{basename}_copy{extension}`.
    ///
    /// Derivation always starts from the current basename, so duplicating
    /// `a_copy.md` yields `a_copy_copy.md`. The extension is carried over
    /// unchanged, which keeps the result valid by construction.
    pub fn duplicate(&self) -> DocumentName {
        Self {
            raw: format!("{}_copy{}", self.basename(), self.extension()),
            kind: self.kind,
        }
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for DocumentName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for DocumentName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Split a submitted name into basename and extension (with the dot).
///
/// Rejects empty names and names with path separators or traversal
/// components. A leading dot does not start an extension (`.md` is a
/// dotfile with no extension, not a markdown file), matching the usual
/// basename/extname split.
pub(crate) fn split_name(raw: &str) -> NameResult<(&str, &str)> {
    if raw.is_empty() {
        return Err(NameError::Empty);
    }
    if raw.contains('/') || raw.contains('\\') || raw.split('.').all(str::is_empty) {
        return Err(NameError::InvalidCharacter);
    }
    match raw.rfind('.') {
        Some(dot) if dot > 0 => Ok((&raw[..dot], &raw[dot + 1..])),
        _ => Ok((raw, "")),
    }
}
