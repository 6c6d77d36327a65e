use crate::category::{classify, Category};

/// In-memory owner of the five category buckets.
///
/// Buckets preserve insertion order and the store never removes entries, so
/// a bucket reads back exactly as its links arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkStore {
    buckets: [Vec<String>; Category::ALL.len()],
}

impl LinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `link` and append it to the owning bucket.
    ///
    /// Exactly one bucket grows by one element per call.
    pub fn insert(&mut self, link: impl Into<String>) -> Category {
        let link = link.into();
        let category = classify(&link);
        self.buckets[category.index()].push(link);
        category
    }

    /// Links stored for `category`, in insertion order.
    pub fn links(&self, category: Category) -> &[String] {
        &self.buckets[category.index()]
    }

    /// Total number of stored links across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
