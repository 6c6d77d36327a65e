use crate::category::Category;
use crate::store::LinkStore;

/// Render the report: five sections in fixed category order, each a header
/// line followed by one line per stored link in bucket order.
///
/// Pure read access; the store is never mutated.
pub fn render_report(store: &LinkStore) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        out.push_str(category.header());
        out.push('\n');
        for link in store.links(category) {
            out.push_str(link);
            out.push('\n');
        }
    }
    out
}
