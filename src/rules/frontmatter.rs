//! YAML frontmatter to Logseq page properties.

use crate::error::{ConvertError, Result};
use serde_yaml::Value;

/// A single page property: a name and its (possibly multiple) values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub values: Vec<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Split off a leading `---`-delimited frontmatter block and parse it into
/// page properties. Returns the properties and the remaining body.
///
/// The closing delimiter must be a line that is exactly `---` (a trailing
/// newline is optional at end-of-file). Without one the document has no
/// frontmatter and is returned unchanged.
pub fn extract_properties(content: &str) -> Result<(Vec<Property>, &str)> {
    let Some(rest) = content.strip_prefix("---\n") else {
        return Ok((Vec::new(), content));
    };
    // A closing delimiter directly after the opener is an empty block.
    if let Some(after) = rest.strip_prefix("---\n") {
        return Ok((Vec::new(), after));
    }
    if rest == "---" {
        return Ok((Vec::new(), ""));
    }
    let Some(end) = find_closing_delimiter(rest) else {
        return Ok((Vec::new(), content));
    };
    let yaml = &rest[..end];
    let after = &rest[end + 4..];
    let body = after.strip_prefix('\n').unwrap_or(after);

    let parsed: Value = serde_yaml::from_str(yaml)?;
    let mapping = match parsed {
        Value::Mapping(mapping) => mapping,
        // An empty frontmatter block carries no properties.
        Value::Null => return Ok((Vec::new(), body)),
        _ => {
            return Err(ConvertError::InvalidFrontmatter(
                "frontmatter is not a key-value mapping".to_string(),
            ))
        }
    };

    let mut properties = Vec::new();
    for (key, value) in mapping {
        let Value::String(raw_name) = key else {
            return Err(ConvertError::InvalidFrontmatter(format!(
                "non-string frontmatter key: {key:?}"
            )));
        };
        let Some(name) = property_name(&raw_name) else {
            continue;
        };
        // YAML number resolution normalizes notation (1.50 parses to 1.5);
        // scalar values are re-read from the source text to keep them as
        // written.
        let mut values = match (&value, raw_scalar(yaml, &raw_name)) {
            (Value::Number(_) | Value::Bool(_), Some(raw)) => vec![raw.to_string()],
            _ => match property_values(&name, &value)? {
                Some(values) => values,
                None => continue,
            },
        };
        if name == "created" {
            // Creation dates become page references so daily journals link
            // back to the pages created that day.
            for v in &mut values {
                *v = format!("[[{v}]]");
            }
        }
        properties.push(Property::new(name, values));
    }
    Ok((properties, body))
}

/// Byte offset in `rest` of the `\n---` starting a line that is exactly
/// `---`, either newline-terminated or at end-of-file.
fn find_closing_delimiter(rest: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = rest[from..].find("\n---") {
        let at = from + found;
        let after = &rest[at + 4..];
        if after.is_empty() || after.starts_with('\n') {
            return Some(at);
        }
        from = at + 1;
    }
    None
}

/// The source text of a top-level scalar value, with any trailing comment
/// removed.
fn raw_scalar<'a>(yaml: &'a str, key: &str) -> Option<&'a str> {
    for line in yaml.lines() {
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix(':') else {
            continue;
        };
        let value = match value.find(" #") {
            Some(comment) => &value[..comment],
            None => value,
        };
        let value = value.trim();
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Map an Obsidian frontmatter key to a Logseq property name, or drop it.
fn property_name(raw: &str) -> Option<String> {
    match raw {
        // Logseq derives the title from the file name.
        "title" => None,
        "aliases" => Some("alias".to_string()),
        "tag" => Some("tags".to_string()),
        _ => Some(
            raw.split_whitespace()
                .collect::<Vec<_>>()
                .join("-"),
        ),
    }
}

/// Flatten a YAML value into property value strings. `None` means the
/// property is omitted entirely (null or empty values).
fn property_values(name: &str, value: &Value) -> Result<Option<Vec<String>>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(vec![b.to_string()])),
        Value::Number(n) => Ok(Some(vec![n.to_string()])),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(vec![s.clone()])),
        Value::Sequence(items) => {
            let mut values = Vec::new();
            for item in items {
                if let Some(mut vs) = property_values(name, item)? {
                    values.append(&mut vs);
                }
            }
            if values.is_empty() {
                Ok(None)
            } else {
                Ok(Some(values))
            }
        }
        Value::Mapping(_) | Value::Tagged(_) => Err(ConvertError::InvalidFrontmatter(format!(
            "property '{name}' has a nested value"
        ))),
    }
}

/// Render properties as `key:: value` lines.
pub fn format_properties(properties: &[Property]) -> String {
    properties
        .iter()
        .map(|p| format!("{}:: {}", p.name, p.values.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_frontmatter() {
        let (props, body) = extract_properties("just a body").unwrap();
        assert!(props.is_empty());
        assert_eq!(body, "just a body");
    }

    #[test]
    fn test_scalar_and_list_values() {
        let input = "---\nauthor: someone\ntags:\n  - a\n  - b\n---\nbody";
        let (props, body) = extract_properties(input).unwrap();
        assert_eq!(body, "body");
        assert_eq!(props[0], Property::new("author", vec!["someone".into()]));
        assert_eq!(props[1], Property::new("tags", vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_key_renames_and_drops() {
        let input = "---\ntitle: Gone\naliases: [one, two]\ntag: [x]\nmy key: v\n---\n";
        let (props, _) = extract_properties(input).unwrap();
        let names: Vec<&str> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alias", "tags", "my-key"]);
        assert_eq!(props[0].values, vec!["one", "two"]);
    }

    #[test]
    fn test_created_becomes_page_reference() {
        let input = "---\ncreated: 2024-01-01\n---\n";
        let (props, _) = extract_properties(input).unwrap();
        assert_eq!(props[0], Property::new("created", vec!["[[2024-01-01]]".into()]));
    }

    #[test]
    fn test_null_and_empty_values_omitted() {
        let input = "---\nempty:\nblank: \"\"\nkept: yes\n---\n";
        let (props, _) = extract_properties(input).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "kept");
    }

    #[test]
    fn test_nested_mapping_rejected() {
        let input = "---\nouter:\n  inner: v\n---\n";
        assert!(matches!(
            extract_properties(input),
            Err(ConvertError::InvalidFrontmatter(_))
        ));
    }

    #[test]
    fn test_empty_frontmatter() {
        let (props, body) = extract_properties("---\n---\nbody").unwrap();
        assert!(props.is_empty());
        assert_eq!(body, "body");

        let (props, body) = extract_properties("---\n\n---\nbody").unwrap();
        assert!(props.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_closing_delimiter_at_eof() {
        let (props, body) = extract_properties("---\nkey: v\n---").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(body, "");
    }

    #[test]
    fn test_unterminated_frontmatter_fails_open() {
        let input = "---\nJust a note that happens to start with a rule";
        let (props, body) = extract_properties(input).unwrap();
        assert!(props.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn test_closing_delimiter_must_be_exact() {
        // Lines that merely start with --- do not close the block.
        let input = "---\nkey: value\n---- dashes\nno real closer";
        let (props, body) = extract_properties(input).unwrap();
        assert!(props.is_empty());
        assert_eq!(body, input);

        let (props, body) = extract_properties("---\nsep: a --- b\n---\nbody").unwrap();
        assert_eq!(props[0], Property::new("sep", vec!["a --- b".into()]));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_numeric_scalars_keep_their_notation() {
        let input = "---\nversion: 1.50\nbuild: 007\n---\n";
        let (props, _) = extract_properties(input).unwrap();
        assert_eq!(props[0], Property::new("version", vec!["1.50".into()]));
        assert_eq!(props[1], Property::new("build", vec!["007".into()]));
    }

    #[test]
    fn test_format_properties() {
        let props = vec![
            Property::new("alias", vec!["a".into(), "b".into()]),
            Property::new("tags", vec!["t".into()]),
        ];
        assert_eq!(format_properties(&props), "alias:: a, b\ntags:: t");
    }
}
