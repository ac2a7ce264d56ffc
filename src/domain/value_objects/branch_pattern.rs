//! Branch pattern value object
//!
//! A configured pattern is one of three shapes resolved through a single
//! matcher: a shell-style glob (anchored, `*` spans any run of characters),
//! a native regular expression, or a literal branch name. The shape is
//! fixed at deserialization time, not inspected at match time.

use regex::Regex;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{SwitchyardError, SwitchyardResult};

/// A branch matching pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    /// Shell-style glob, matched against the whole branch name.
    Glob(String),
    /// Native regular expression, matched as written (author anchors).
    Regex(String),
    /// Exact branch name.
    Literal(String),
}

impl PatternSpec {
    /// Build from a bare string: glob when it contains `*`, literal otherwise.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.contains('*') {
            PatternSpec::Glob(raw)
        } else {
            PatternSpec::Literal(raw)
        }
    }

    /// Check whether a branch name matches this pattern.
    ///
    /// An invalid regular expression is a configuration error.
    pub fn matches(&self, branch_name: &str) -> SwitchyardResult<bool> {
        match self {
            PatternSpec::Literal(expected) => Ok(branch_name == expected),
            PatternSpec::Glob(glob) => {
                let regex = compile(&glob_to_regex(glob))?;
                Ok(regex.is_match(branch_name))
            }
            PatternSpec::Regex(pattern) => {
                let regex = compile(pattern)?;
                Ok(regex.is_match(branch_name))
            }
        }
    }
}

/// Translate a glob into an anchored full-string regex.
fn glob_to_regex(glob: &str) -> String {
    let mut pattern = String::with_capacity(glob.len() + 4);
    pattern.push('^');
    for (i, part) in glob.split('*').enumerate() {
        if i > 0 {
            pattern.push_str(".*");
        }
        pattern.push_str(&regex::escape(part));
    }
    pattern.push('$');
    pattern
}

fn compile(pattern: &str) -> SwitchyardResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        SwitchyardError::configuration(format!("invalid branch pattern '{pattern}': {e}"))
    })
}

impl<'de> Deserialize<'de> for PatternSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum PatternSpecDe {
            Raw(String),
            Tagged { regex: String },
        }

        match PatternSpecDe::deserialize(deserializer)? {
            PatternSpecDe::Raw(raw) => Ok(PatternSpec::from_raw(raw)),
            PatternSpecDe::Tagged { regex } => Ok(PatternSpec::Regex(regex)),
        }
    }
}

impl Serialize for PatternSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatternSpec::Glob(raw) | PatternSpec::Literal(raw) => serializer.serialize_str(raw),
            PatternSpec::Regex(pattern) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("regex", pattern)?;
                map.end()
            }
        }
    }
}
