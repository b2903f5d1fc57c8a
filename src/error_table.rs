use crate::pattern::{Params, Pattern};
use crate::router::RouterError;

use std::collections::BTreeMap;

/// Error handlers keyed by status code, then by pattern.
///
/// Within one status code, patterns are tried in registration order and
/// the first one matching the path wins.
#[derive(Debug, Clone)]
pub struct ErrorTable<T> {
    by_status: BTreeMap<u16, Vec<(Pattern, T)>>,
}

impl<T> Default for ErrorTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ErrorTable<T> {
    pub fn new() -> Self {
        Self {
            by_status: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_status.is_empty()
    }

    /// Registers `data` for `status` on paths matching `pattern`, or on every
    /// path when `pattern` is `None`.
    pub fn register(
        &mut self,
        status: u16,
        pattern: Option<&str>,
        data: T,
    ) -> Result<(), RouterError> {
        let pattern = Pattern::new(pattern.unwrap_or(Pattern::CATCH_ALL))?;
        self.push(status, pattern, data);
        Ok(())
    }

    pub fn resolve<'s, 'p>(
        &'s self,
        status: u16,
        path: &'p str,
    ) -> Option<(&'s Pattern, &'s T, Params<'s, 'p>)> {
        self.by_status.get(&status)?.iter().find_map(|(pattern, data)| {
            pattern
                .captures(path)
                .map(|params| (pattern, data, params))
        })
    }

    pub fn prefixed(self, base: &str) -> Result<Self, RouterError> {
        let mut table = Self::new();
        for (status, handlers) in self.by_status {
            for (pattern, data) in handlers {
                table.push(status, pattern.prefixed(base)?, data);
            }
        }
        Ok(table)
    }

    /// Appends every handler after the target's handlers of the same status.
    pub fn merge_into(self, target: &mut Self) {
        for (status, handlers) in self.by_status {
            for (pattern, data) in handlers {
                target.push(status, pattern, data);
            }
        }
    }

    fn push(&mut self, status: u16, pattern: Pattern, data: T) {
        let handlers = self.by_status.entry(status).or_insert_with(Vec::new);
        match handlers.iter_mut().find(|(p, _)| p.as_str() == pattern.as_str()) {
            Some((_, slot)) => *slot = data,
            None => handlers.push((pattern, data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registered_wins_per_status() {
        let mut table = ErrorTable::new();
        assert!(table.is_empty());
        table.register(404, Some("/admin/.*"), 1).unwrap();
        table.register(404, None, 2).unwrap();
        table.register(404, Some("/admin/(secret)"), 3).unwrap();
        table.register(500, Some("/admin/.*"), 4).unwrap();

        assert_eq!(*table.resolve(404, "/admin/secret").unwrap().1, 1);
        assert_eq!(*table.resolve(404, "/public").unwrap().1, 2);
        assert_eq!(*table.resolve(500, "/admin/x").unwrap().1, 4);
        assert!(table.resolve(500, "/public").is_none());
        assert!(table.resolve(403, "/admin/x").is_none());
        assert!(!table.is_empty());
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut table = ErrorTable::new();
        table.register(404, Some("/a.*"), 1).unwrap();
        table.register(404, Some("/ab"), 2).unwrap();
        table.register(404, Some("/a.*"), 3).unwrap();
        assert_eq!(*table.resolve(404, "/ab").unwrap().1, 3);
    }

    #[test]
    fn catch_all_is_scoped_by_prefix() {
        let mut child = ErrorTable::new();
        child.register(404, None, 1).unwrap();

        let mut parent = ErrorTable::new();
        parent.register(404, Some("/static/.*"), 2).unwrap();
        child.prefixed("/api").unwrap().merge_into(&mut parent);
        parent.register(404, None, 3).unwrap();

        let (pattern, data, _) = parent.resolve(404, "/api/missing").unwrap();
        assert_eq!(pattern.as_str(), "/api.*");
        assert_eq!(*data, 1);
        assert_eq!(*parent.resolve(404, "/static/x").unwrap().1, 2);
        assert_eq!(*parent.resolve(404, "/else").unwrap().1, 3);
    }
}
