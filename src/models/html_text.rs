use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};

/// Text the platform returns HTML-entity-escaped, stored decoded.
///
/// Every write goes through [`HtmlText::new`], which decodes entities
/// exactly once. Text without entity sequences passes through unchanged,
/// so constructing from already-decoded text is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HtmlText(String);

impl HtmlText {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(html_escape::decode_html_entities(raw.as_ref()).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for HtmlText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HtmlText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HtmlText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for HtmlText {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl<'de> Deserialize<'de> for HtmlText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}
