//! `.env` assignment parsing.
//!
//! The environment-file check decides pass/fail by plain substring search.
//! This parser only backs the extra warnings: it reads `KEY=value` lines so
//! the check can tell a key that is actually assigned from one that merely
//! shows up in a comment or inside another name.

use std::collections::HashMap;

/// `KEY=value` assignments read from an env file.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
///
/// # Example
///
/// ```
/// use botcheck::config::EnvAssignments;
///
/// let content = r#"
/// # Discord
/// DISCORD_TOKEN="abc.def"
/// PREFIX=
/// "#;
///
/// let env = EnvAssignments::parse(content);
/// assert_eq!(env.get("DISCORD_TOKEN"), Some("abc.def"));
/// assert_eq!(env.get("PREFIX"), Some(""));
/// assert_eq!(env.get("OWNER_ID"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvAssignments {
    values: HashMap<String, String>,
}

impl EnvAssignments {
    /// Parse env file content. Lines that are not assignments are ignored.
    pub fn parse(content: &str) -> Self {
        let values = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect();

        Self { values }
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::unquote(value.trim()).to_string()))
    }

    fn unquote(value: &str) -> &str {
        let quoted = value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')));
        if quoted {
            &value[1..value.len() - 1]
        } else {
            value
        }
    }

    /// Value assigned to a key, if the key has an assignment line.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether no assignments were found.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
