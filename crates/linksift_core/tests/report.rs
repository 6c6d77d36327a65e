use linksift_core::{render_report, LinkStore};
use pretty_assertions::assert_eq;

#[test]
fn empty_store_renders_all_headers() {
    let report = render_report(&LinkStore::new());
    assert_eq!(
        report,
        "Twitter Links:\nYouTube Links:\nWikipedia Links:\nGoodreads Links:\nOther Links:\n"
    );
}

#[test]
fn links_render_under_their_section_in_insertion_order() {
    let mut store = LinkStore::new();
    store.insert("http://youtube.com/first");
    store.insert("http://youtube.com/second");
    store.insert("http://example.com/x");

    let report = render_report(&store);
    assert_eq!(
        report,
        "Twitter Links:\n\
         YouTube Links:\n\
         http://youtube.com/first\n\
         http://youtube.com/second\n\
         Wikipedia Links:\n\
         Goodreads Links:\n\
         Other Links:\n\
         http://example.com/x\n"
    );
}

#[test]
fn rendering_does_not_mutate_the_store() {
    let mut store = LinkStore::new();
    store.insert("http://wikipedia.org/Z");
    let before = store.clone();

    let _ = render_report(&store);
    assert_eq!(store, before);
}
