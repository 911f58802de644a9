//! Key-value substitution for the HTML form templates.
//!
//! Templates use `{name}` placeholders. The recognized name set per
//! template kind is fixed and validated at configuration-load time, so
//! render never has to report a template-author error.

use crate::error::ConfigError;

/// Substitute the given fields into a template.
///
/// Only the listed names are replaced; anything else is left verbatim.
pub fn substitute(template: &str, fields: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in fields {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Placeholder names appearing in a template, in order of appearance.
///
/// A placeholder is `{` + an ASCII identifier + `}`; anything else between
/// braces is treated as literal text.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        rest = &rest[open + 1..];
        let Some(close) = rest.find('}') else { break };
        let name = &rest[..close];
        if !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            names.push(name.to_string());
            rest = &rest[close + 1..];
        }
    }
    names
}

/// Reject placeholders outside the allowed set for a template kind.
pub fn validate_placeholders(
    template: &str,
    allowed: &[&str],
    template_name: &'static str,
) -> Result<(), ConfigError> {
    for name in placeholders(template) {
        if !allowed.contains(&name.as_str()) {
            return Err(ConfigError::UnknownPlaceholder {
                template: template_name,
                name,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_all_occurrences() {
        let out = substitute("{key}-{key} {display}", &[("key", "a"), ("display", "A")]);
        assert_eq!(out, "a-a A");
    }

    #[test]
    fn placeholders_skips_non_identifiers() {
        let names = placeholders("<option value=\"{key}\" {first}>{display}</option> { not one }");
        assert_eq!(names, vec!["key", "first", "display"]);
    }

    #[test]
    fn validate_rejects_unknown_names() {
        let err = validate_placeholders("{key} {oops}", &["key"], "profile_option").unwrap_err();
        match err {
            ConfigError::UnknownPlaceholder { template, name } => {
                assert_eq!(template, "profile_option");
                assert_eq!(name, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_accepts_defaults() {
        validate_placeholders("{display} {key} {type} {first}", &["display", "key", "type", "first"], "profile_option")
            .unwrap();
    }
}
