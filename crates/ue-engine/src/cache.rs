//! Single-entry memo keyed on the selected prefecture.

/// Holds the value computed for the most recent key.
///
/// Asking for the same key again returns the stored value; a different key
/// replaces it.  Nothing expires on its own.
#[derive(Debug)]
pub struct PrefectureCache<T> {
    entry:  Option<(String, T)>,
    hits:   u64,
    misses: u64,
}

impl<T> Default for PrefectureCache<T> {
    fn default() -> Self {
        Self { entry: None, hits: 0, misses: 0 }
    }
}

impl<T> PrefectureCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&str> {
        self.entry.as_ref().map(|(k, _)| k.as_str())
    }

    /// The stored value if it was computed for `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entry.as_ref().filter(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The stored value regardless of key.
    pub fn current(&self) -> Option<&T> {
        self.entry.as_ref().map(|(_, v)| v)
    }

    pub fn get_or_insert_with(&mut self, key: &str, compute: impl FnOnce() -> T) -> &T {
        if self.key() == Some(key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (key.to_owned(), compute()));
        value
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) -> &T {
        self.misses += 1;
        let (_, value) = self.entry.insert((key.into(), value));
        value
    }

    /// Drop the stored value so the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
