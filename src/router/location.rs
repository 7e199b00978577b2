use std::fmt;

/// A normalized pathname.
///
/// Parsing never fails: scheme and authority, query string and fragment are
/// dropped, a leading `/` is enforced and trailing slashes are removed (the
/// root stays `/`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pathname: String,
}

impl Location {
    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
        }
    }

    pub fn parse(input: &str) -> Self {
        let mut raw = input.trim();
        if let Some(end) = raw.find(['?', '#']) {
            raw = &raw[..end];
        }
        if let Some(rest) = strip_scheme(raw) {
            raw = rest.find('/').map(|idx| &rest[idx..]).unwrap_or("/");
        }

        let mut pathname = String::with_capacity(raw.len() + 1);
        if !raw.starts_with('/') {
            pathname.push('/');
        }
        pathname.push_str(raw);
        while pathname.len() > 1 && pathname.ends_with('/') {
            pathname.pop();
        }
        Self { pathname }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

}

/// Returns what follows `scheme://` when `input` is an absolute URL.
///
/// Only a leading `[A-Za-z][A-Za-z0-9+.-]*://` counts, so a path that merely
/// contains `://` is left alone.
fn strip_scheme(input: &str) -> Option<&str> {
    let (scheme, rest) = input.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '.' | '-'));
    valid.then_some(rest)
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for Location {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pathname)
    }
}
