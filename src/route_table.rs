use crate::method::{Method, MethodSet};
use crate::pattern::{Params, Pattern};
use crate::router::RouterError;
use crate::strmap::StrMap;

/// Handlers of one pattern, one slot per verb.
#[derive(Debug, Clone)]
pub struct VerbMap<T> {
    slots: [Option<T>; 7],
}

impl<T> Default for VerbMap<T> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<T> VerbMap<T> {
    pub fn get(&self, method: Method) -> Option<&T> {
        self.slots[method.index()].as_ref()
    }

    /// Returns the handler that was replaced, if any.
    pub fn insert(&mut self, method: Method, data: T) -> Option<T> {
        self.slots[method.index()].replace(data)
    }

    pub fn allowed(&self) -> MethodSet {
        Method::universe().filter(|&m| self.get(m).is_some()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Method, &T)> + '_ {
        Method::universe().filter_map(move |m| self.get(m).map(|t| (m, t)))
    }

    fn extend(&mut self, other: VerbMap<T>) {
        let VerbMap { mut slots } = other;
        for (dst, src) in self.slots.iter_mut().zip(slots.iter_mut()) {
            if let Some(data) = src.take() {
                *dst = Some(data);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    pattern: Pattern,
    verbs: VerbMap<T>,
}

impl<T> RouteEntry<T> {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn verbs(&self) -> &VerbMap<T> {
        &self.verbs
    }
}

/// Patterns in registration order, each with its verb map.
///
/// Pattern sources are unique keys; registering an existing pattern again
/// writes into its verb map and keeps its position.
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    index: StrMap<usize>,
    entries: Vec<RouteEntry<T>>,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self {
            index: StrMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn register(&mut self, pattern: &str, method: Method, data: T) -> Result<(), RouterError> {
        let verbs = self.entry(pattern)?;
        verbs.insert(method, data);
        Ok(())
    }

    /// Rewrites every pattern as `base + pattern`, keeping the order.
    pub fn prefixed(self, base: &str) -> Result<Self, RouterError> {
        let mut table = Self::new();
        for entry in self.entries {
            let pattern = entry.pattern.prefixed(base)?;
            table.push_entry(pattern, entry.verbs);
        }
        Ok(table)
    }

    /// Appends all entries after the ones already in `target`.
    pub fn merge_into(self, target: &mut Self) {
        for entry in self.entries {
            target.push_entry(entry.pattern, entry.verbs);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<T>> + Clone + '_ {
        self.entries.iter()
    }

    /// The first entry whose pattern matches `path`, with its captures.
    pub fn find<'s, 'p>(&'s self, path: &'p str) -> Option<(&'s RouteEntry<T>, Params<'s, 'p>)> {
        self.entries
            .iter()
            .find_map(|e| e.pattern.captures(path).map(|params| (e, params)))
    }

    fn entry(&mut self, pattern: &str) -> Result<&mut VerbMap<T>, RouterError> {
        let found = self.index.find(pattern).copied();
        let i = match found {
            Some(i) => i,
            None => {
                let compiled = Pattern::new(pattern)?;
                self.push_entry(compiled, VerbMap::default())
            }
        };
        Ok(&mut self.entries[i].verbs)
    }

    fn push_entry(&mut self, pattern: Pattern, verbs: VerbMap<T>) -> usize {
        let next = self.entries.len();
        let i = *self.index.find_or_insert_with(pattern.as_str(), || next);
        if i == next {
            self.entries.push(RouteEntry { pattern, verbs });
        } else {
            self.entries[i].verbs.extend(verbs);
        }
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(table: &RouteTable<u32>) -> Vec<&str> {
        table.entries().map(|e| e.pattern().as_str()).collect()
    }

    #[test]
    fn keeps_registration_order() {
        let mut table = RouteTable::new();
        table.register("/b", Method::Get, 1).unwrap();
        table.register("/a", Method::Get, 2).unwrap();
        table.register("/b", Method::Post, 3).unwrap();
        assert_eq!(order(&table), ["/b", "/a"]);

        let b = table.entries().next().unwrap();
        assert_eq!(b.verbs().allowed(), MethodSet::GET | MethodSet::POST);
    }

    #[test]
    fn last_write_wins() {
        let mut table = RouteTable::new();
        table.register("/a", Method::Get, 1).unwrap();
        table.register("/b", Method::Get, 2).unwrap();
        table.register("/a", Method::Get, 3).unwrap();
        assert_eq!(order(&table), ["/a", "/b"]);
        let (e, _) = table.find("/a").unwrap();
        assert_eq!(e.verbs().get(Method::Get), Some(&3));
    }

    #[test]
    fn prefix_and_merge() {
        let mut parent = RouteTable::new();
        parent.register("/x", Method::Get, 1).unwrap();

        let mut child = RouteTable::new();
        child.register("/widgets", Method::Get, 2).unwrap();
        child.register("/x", Method::Put, 3).unwrap();
        child.prefixed("/api").unwrap().merge_into(&mut parent);

        parent.register("/y", Method::Get, 4).unwrap();
        assert_eq!(order(&parent), ["/x", "/api/widgets", "/api/x", "/y"]);
    }

    #[test]
    fn merge_onto_existing_pattern() {
        let mut parent = RouteTable::new();
        parent.register("/a", Method::Get, 1).unwrap();
        parent.register("/b", Method::Get, 2).unwrap();

        let mut child = RouteTable::new();
        child.register("/a", Method::Get, 10).unwrap();
        child.register("/a", Method::Delete, 11).unwrap();
        child.merge_into(&mut parent);

        assert_eq!(order(&parent), ["/a", "/b"]);
        let (e, _) = parent.find("/a").unwrap();
        assert_eq!(e.verbs().get(Method::Get), Some(&10));
        assert_eq!(e.verbs().get(Method::Delete), Some(&11));
    }

    #[test]
    fn find_is_first_match() {
        let mut table = RouteTable::new();
        table.register("/users/(.*)", Method::Get, 1).unwrap();
        table.register("/users/([0-9]+)", Method::Get, 2).unwrap();
        let (e, params) = table.find("/users/42").unwrap();
        assert_eq!(e.verbs().get(Method::Get), Some(&1));
        assert_eq!(params.get(0), Some("42"));
        assert!(table.find("/other").is_none());
    }

    #[test]
    fn invalid_pattern() {
        let mut table: RouteTable<u32> = RouteTable::new();
        assert!(table.register("/a/(", Method::Get, 1).is_err());
        assert!(table.register("/admin)|(?:/public", Method::Get, 2).is_err());
        assert!(table.is_empty());
        assert!(table.find("/adminXYZ/zzz").is_none());
    }
}
