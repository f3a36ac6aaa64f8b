//! Front-matter splitting and decoding.
//!
//! A content file may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Getting Started
//! category: Guides
//! ---
//! # Body starts here
//! ```
//!
//! Files without an opening fence, or without a closing one, have no front
//! matter and the whole text is the body.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

const FENCE: &str = "---";

/// Metadata keys recognized in front matter. Unknown keys are ignored.
///
/// Scalar values of any YAML type are kept as text; empty strings and `null`
/// become `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub read_time: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub icon_color: Option<String>,
}

/// A content file split into its two parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Raw YAML between the fences, if the file has front matter.
    pub front_matter: Option<&'a str>,
    pub body: &'a str,
}

/// Splits a content file into raw front matter and body.
///
/// The body starts on the line after the closing fence. CRLF line endings and
/// a leading byte-order mark are tolerated.
pub fn split_document(text: &str) -> SplitDocument<'_> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let no_front_matter = SplitDocument {
        front_matter: None,
        body: text,
    };

    let mut lines = text.split_inclusive('\n');
    let Some(opening) = lines.next() else {
        return no_front_matter;
    };
    if opening.trim_end() != FENCE {
        return no_front_matter;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            return SplitDocument {
                front_matter: Some(&text[yaml_start..offset]),
                body: &text[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    no_front_matter
}

/// Decodes raw front-matter YAML.
///
/// An empty block decodes to empty metadata.
///
/// # Errors
///
/// Returns the YAML error if the block is not a mapping or a recognized key
/// holds a sequence or mapping.
pub fn parse_front_matter(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar value, got {:?}",
            other
        ))),
    }
}
