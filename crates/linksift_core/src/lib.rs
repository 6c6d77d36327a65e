//! Linksift core: category rules, link store, and report rendering.
mod category;
mod report;
mod store;

pub use category::{classify, classify_with, Category, CategoryRule, CATEGORY_RULES};
pub use report::render_report;
pub use store::LinkStore;
