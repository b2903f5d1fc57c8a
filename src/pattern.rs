use crate::router::RouterError;

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use regex::Regex;
use smallvec::SmallVec;

/// A route pattern: a regex fragment matched against the whole path.
#[derive(Clone)]
pub struct Pattern {
    source: Box<str>,
    regex: Regex,
}

impl Pattern {
    /// Matches any path. Used when an error handler is registered without a pattern.
    pub const CATCH_ALL: &'static str = ".*";

    /// Compiles `source` anchored at both ends.
    ///
    /// The fragment must be a valid regex on its own, so it cannot close the
    /// anchoring group early (e.g. `/a)|(?:/b`).
    pub fn new(source: &str) -> Result<Self, RouterError> {
        let invalid = |e| RouterError::InvalidPattern {
            pattern: source.to_owned(),
            source: e,
        };
        Regex::new(source).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{})$", source)).map_err(invalid)?;
        Ok(Self {
            source: source.into(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Recompiles `base + self` as a new pattern.
    pub fn prefixed(&self, base: &str) -> Result<Self, RouterError> {
        let mut source = String::with_capacity(base.len() + self.source.len());
        source.push_str(base);
        source.push_str(&self.source);
        Self::new(&source)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn captures<'p>(&self, path: &'p str) -> Option<Params<'_, 'p>> {
        let caps = self.regex.captures(path)?;
        let values = caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect();
        Some(Params {
            regex: Some(&self.regex),
            values,
        })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Groups captured by a matched pattern, in capture order.
///
/// The whole match is not included. A group that took no part in the match
/// is `None`.
#[derive(Debug, Clone, Default)]
pub struct Params<'r, 'p> {
    regex: Option<&'r Regex>,
    values: SmallVec<[Option<&'p str>; 8]>,
}

impl<'r, 'p> Params<'r, 'p> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<&'p str> {
        self.values.get(index).copied().flatten()
    }

    pub fn parse<T: FromStr>(&self, index: usize) -> Option<Result<T, T::Err>> {
        self.get(index).map(T::from_str)
    }

    /// Looks up a named group, e.g. `(?P<id>[0-9]+)`.
    pub fn name(&self, name: &str) -> Option<&'p str> {
        let regex = self.regex?;
        let pos = regex
            .capture_names()
            .skip(1)
            .position(|n| n == Some(name))?;
        self.get(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&'p str>> + '_ {
        self.values.iter().copied()
    }

    pub fn to_owned_vec(&self) -> Vec<Option<String>> {
        self.iter().map(|v| v.map(str::to_owned)).collect()
    }
}

impl<'p> Deref for Params<'_, 'p> {
    type Target = [Option<&'p str>];
    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_both_ends() {
        let p = Pattern::new("/users/([0-9]+)").unwrap();
        assert!(p.is_match("/users/42"));
        assert!(!p.is_match("/users/42/posts"));
        assert!(!p.is_match("/api/users/42"));

        let alt = Pattern::new("/a|/b").unwrap();
        assert!(alt.is_match("/a"));
        assert!(!alt.is_match("/a/x"));
        assert!(!alt.is_match("/x/b"));
    }

    #[test]
    fn fragment_cannot_escape_anchors() {
        assert!(Pattern::new("/a)|(?:/b").is_err());
        assert!(Pattern::new("/admin)|(?:/public").is_err());
        assert!(Pattern::new("/x").unwrap().prefixed("/a)|(?:").is_err());
    }

    #[test]
    fn captures_are_positional() {
        let p = Pattern::new("/u/([^/]+)/p/(?P<pid>[0-9]+)(/edit)?").unwrap();
        let params = p.captures("/u/asd/p/12").unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get(0), Some("asd"));
        assert_eq!(params.get(1), Some("12"));
        assert_eq!(params.get(2), None);
        assert_eq!(params.name("pid"), Some("12"));
        assert_eq!(params.parse::<u32>(1), Some(Ok(12)));
        assert!(params.name("nope").is_none());
    }

    #[test]
    fn prefix_is_plain_concatenation() {
        let p = Pattern::new("/widgets").unwrap().prefixed("/api").unwrap();
        assert_eq!(p.as_str(), "/api/widgets");
        assert!(p.is_match("/api/widgets"));

        assert!(Pattern::new("/x").unwrap().prefixed("(").is_err());
        assert!(Pattern::new("(").is_err());
    }
}
