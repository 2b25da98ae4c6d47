//! The `name[=value]` override syntax.
//!
//! An override token is an option name, optionally followed by `=` and a
//! value passed verbatim (no shell-style quoting rules apply). `name=` is
//! the explicit empty string, distinct from omitting the value entirely.
//! Parsing is pure; name resolution against the schema happens when the
//! resolver applies the token.

use option_schema_core::RawValue;

/// One parsed override token.
///
/// # Examples
///
/// ```
/// use option_schema_resolve::SetSpec;
///
/// let spec = SetSpec::parse("listen_host=127.0.0.1");
/// assert_eq!(spec.name(), "listen_host");
/// assert_eq!(spec.value(), Some("127.0.0.1"));
///
/// // Value omitted entirely.
/// let spec = SetSpec::parse("anticache");
/// assert_eq!(spec.value(), None);
///
/// // Explicit empty string is not an omission.
/// let spec = SetSpec::parse("stickycookie=");
/// assert_eq!(spec.value(), Some(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSpec {
    name: String,
    value: Option<String>,
}

impl SetSpec {
    /// Parses a token, splitting on the first `=` only; anything after it
    /// is the verbatim value.
    pub fn parse(token: &str) -> Self {
        match token.split_once('=') {
            Some((name, value)) => Self {
                name: name.to_string(),
                value: Some(value.to_string()),
            },
            None => Self {
                name: token.to_string(),
                value: None,
            },
        }
    }

    /// Option name as written (not yet canonicalized).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The verbatim value, or `None` when it was omitted.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The token's value as captured raw input.
    pub fn raw_value(&self) -> RawValue {
        match &self.value {
            Some(value) => RawValue::Text(value.clone()),
            None => RawValue::Omitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_first_equals_only() {
        let spec = SetSpec::parse("upstream_auth=user=pa=ss");
        assert_eq!(spec.name(), "upstream_auth");
        assert_eq!(spec.value(), Some("user=pa=ss"));
    }

    #[test]
    fn test_bare_name_is_omission() {
        let spec = SetSpec::parse("ssl_insecure");
        assert_eq!(spec.name(), "ssl_insecure");
        assert_eq!(spec.raw_value(), RawValue::Omitted);
    }

    #[test]
    fn test_trailing_equals_is_explicit_empty() {
        let spec = SetSpec::parse("listen_host=");
        assert_eq!(spec.raw_value(), RawValue::Text(String::new()));
    }
}
