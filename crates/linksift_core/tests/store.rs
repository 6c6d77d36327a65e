use linksift_core::{Category, LinkStore};
use pretty_assertions::assert_eq;

#[test]
fn new_store_is_empty() {
    let store = LinkStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    for category in Category::ALL {
        assert_eq!(store.links(category), &[] as &[String]);
    }
}

#[test]
fn insert_appends_to_exactly_one_bucket() {
    let mut store = LinkStore::new();
    let category = store.insert("http://goodreads.com/book/42");

    assert_eq!(category, Category::Goodreads);
    assert_eq!(store.len(), 1);
    assert_eq!(store.links(Category::Goodreads), ["http://goodreads.com/book/42"]);
    assert!(store.links(Category::Other).is_empty());
}

#[test]
fn buckets_preserve_insertion_order() {
    let mut store = LinkStore::new();
    for link in [
        "http://twitter.com/a",
        "http://youtube.com/b",
        "http://example.com/c",
        "http://twitter.com/d",
    ] {
        store.insert(link);
    }

    assert_eq!(
        store.links(Category::Twitter),
        ["http://twitter.com/a", "http://twitter.com/d"]
    );
    assert_eq!(store.links(Category::YouTube), ["http://youtube.com/b"]);
    assert_eq!(store.links(Category::Other), ["http://example.com/c"]);
    assert!(store.links(Category::Wikipedia).is_empty());
    assert!(store.links(Category::Goodreads).is_empty());
}

#[test]
fn duplicates_are_kept() {
    let mut store = LinkStore::new();
    store.insert("http://twitter.com/a");
    store.insert("http://twitter.com/a");

    assert_eq!(
        store.links(Category::Twitter),
        ["http://twitter.com/a", "http://twitter.com/a"]
    );
}
