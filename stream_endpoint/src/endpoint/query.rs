use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::util::format_query;

/// Thread-safe, insertion-ordered store of query parameters.
///
/// Every call takes the lock once, so each insert/remove/read is atomic on
/// its own. Nothing spans two calls.
#[derive(Debug, Default)]
pub struct QueryParams {
    inner: RwLock<IndexMap<String, String>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`. An overwrite keeps the key's position.
    pub fn insert(&self, name: &str, value: &str) {
        self.inner
            .write()
            .insert(name.to_string(), value.to_string());
    }

    /// Remove `name`, returning its value. Absent keys are ignored.
    pub fn remove(&self, name: &str) -> Option<String> {
        self.inner.write().shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.inner.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the current entries, in order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// The `k=v&k2=v2` form of the current entries.
    pub fn to_query_string(&self) -> String {
        format_query(&self.inner.read())
    }
}

impl Clone for QueryParams {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let params = QueryParams::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("a", "3");
        assert_eq!(params.to_query_string(), "a=3&b=2");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_remove_closes_gap() {
        let params = QueryParams::new();
        params.insert("a", "1");
        params.insert("b", "2");
        params.insert("c", "3");
        assert_eq!(params.remove("b").as_deref(), Some("2"));
        assert_eq!(params.to_query_string(), "a=1&c=3");
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let params = QueryParams::new();
        params.insert("a", "1");
        assert!(params.remove("zzz").is_none());
        assert_eq!(params.entries(), vec![("a".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_clone_is_detached() {
        let params = QueryParams::new();
        params.insert("a", "1");
        let copy = params.clone();
        params.insert("b", "2");
        assert!(!copy.contains("b"));
        assert_eq!(copy.get("a").as_deref(), Some("1"));
    }
}
