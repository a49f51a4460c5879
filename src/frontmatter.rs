//! YAML frontmatter parsing for journal markdown files.
//!
//! A file beginning with a `---` marker line, YAML key-value lines, and a
//! closing `---` line yields that block as structured metadata and everything
//! after as the body. Files without such a block (or with an unterminated
//! one) yield empty metadata and the full text as body.

use serde::de::Error as _;
use serde_yaml::{Mapping, Value};

use crate::Result;

/// A markdown file split into frontmatter metadata and body text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Parsed frontmatter, arbitrary scalar/array values keyed by string
    pub metadata: Mapping,
    /// Everything after the closing marker, verbatim
    pub body: String,
}

impl Document {
    /// Looks up a scalar field as a string. Numbers and booleans are
    /// stringified; sequences and mappings are not.
    pub fn str_field(&self, key: &str) -> Option<String> {
        match self.metadata.get(Value::from(key))? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Looks up a field as a list of strings. Missing fields and non-sequence
    /// values yield an empty list.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.metadata.get(Value::from(key)) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Parses raw file text into frontmatter metadata and body.
///
/// Malformed YAML inside a well-delimited block is an error; callers skip the
/// offending file rather than aborting the batch.
pub fn parse(text: &str) -> Result<Document> {
    let Some((raw_yaml, body)) = split(text) else {
        return Ok(Document {
            metadata: Mapping::new(),
            body: text.to_string(),
        });
    };

    if raw_yaml.trim().is_empty() {
        return Ok(Document {
            metadata: Mapping::new(),
            body: body.to_string(),
        });
    }

    let metadata = match serde_yaml::from_str::<Value>(raw_yaml)? {
        Value::Mapping(map) => map,
        // An empty block parses as null; anything else is not key-value metadata
        Value::Null => Mapping::new(),
        other => {
            return Err(serde_yaml::Error::custom(format!(
                "expected a key-value mapping, got {}",
                value_kind(&other)
            ))
            .into())
        }
    };

    Ok(Document {
        metadata,
        body: body.to_string(),
    })
}

/// Splits text into (yaml, body) when a complete delimited block is present.
fn split(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---")?;
    // The opening marker must be a line of its own
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;

    for (offset, line) in line_offsets(rest) {
        if line.trim_end_matches('\r') == "---" {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..]
                .strip_prefix('\n')
                .unwrap_or("");
            return Some((yaml, body));
        }
    }
    None
}

/// Iterates `(byte offset, line without trailing newline)` pairs.
fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        (start, raw.strip_suffix('\n').unwrap_or(raw))
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_metadata_and_body() {
        let doc = parse(
            "---\ntype: idea\ncreatedAt: 2024-03-05T08:15:00Z\ntags: [spark, later]\n---\nA thought.\n",
        )
        .expect("parse");

        assert_eq!(doc.str_field("type").as_deref(), Some("idea"));
        assert_eq!(
            doc.str_field("createdAt").as_deref(),
            Some("2024-03-05T08:15:00Z")
        );
        assert_eq!(doc.string_list("tags"), vec!["spark", "later"]);
        assert_eq!(doc.body, "A thought.\n");
    }

    #[test]
    fn text_without_marker_is_all_body() {
        let doc = parse("# Heading\n\nJust text.").expect("parse");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "# Heading\n\nJust text.");
    }

    #[test]
    fn unterminated_block_is_all_body() {
        let text = "---\ntype: idea\nno closing marker";
        let doc = parse(text).expect("parse");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, text);
    }

    #[test]
    fn empty_block_yields_empty_metadata() {
        let doc = parse("---\n---\nbody only").expect("parse");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body only");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(parse("---\ntype: [unclosed\n---\nbody").is_err());
    }

    #[test]
    fn non_mapping_block_is_an_error() {
        assert!(parse("---\n- just\n- a list\n---\nbody").is_err());
    }

    #[test]
    fn crlf_markers_are_accepted() {
        let doc = parse("---\r\ntype: dark\r\ncreatedAt: 2024-01-01T00:00:00Z\r\n---\r\nhidden")
            .expect("parse");
        assert_eq!(doc.str_field("type").as_deref(), Some("dark"));
        assert_eq!(doc.body, "hidden");
    }

    #[test]
    fn scalar_fields_are_stringified() {
        let doc = parse("---\nid: 42\npinned: true\n---\n").expect("parse");
        assert_eq!(doc.str_field("id").as_deref(), Some("42"));
        assert_eq!(doc.str_field("pinned").as_deref(), Some("true"));
        assert_eq!(doc.str_field("missing"), None);
    }
}
