/// Classification bucket for an extracted link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Twitter,
    YouTube,
    Wikipedia,
    Goodreads,
    Other,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 5] = [
        Category::Twitter,
        Category::YouTube,
        Category::Wikipedia,
        Category::Goodreads,
        Category::Other,
    ];

    /// Header line for this category's report section.
    pub fn header(self) -> &'static str {
        match self {
            Category::Twitter => "Twitter Links:",
            Category::YouTube => "YouTube Links:",
            Category::Wikipedia => "Wikipedia Links:",
            Category::Goodreads => "Goodreads Links:",
            Category::Other => "Other Links:",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Twitter => 0,
            Category::YouTube => 1,
            Category::Wikipedia => 2,
            Category::Goodreads => 3,
            Category::Other => 4,
        }
    }
}

/// One substring rule: a link containing `needle` belongs to `category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub category: Category,
    pub needle: &'static str,
}

/// The substring rules, in priority order. The first matching rule wins;
/// links matching none of them fall through to [`Category::Other`].
pub const CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        category: Category::Twitter,
        needle: "twitter",
    },
    CategoryRule {
        category: Category::YouTube,
        needle: "youtube",
    },
    CategoryRule {
        category: Category::Wikipedia,
        needle: "wikipedia",
    },
    CategoryRule {
        category: Category::Goodreads,
        needle: "goodreads",
    },
];

/// Classify a link against an explicit rule list.
///
/// Needles are matched as case-sensitive literal substrings anywhere in the
/// link; no URL parsing is performed.
pub fn classify_with(rules: &[CategoryRule], link: &str) -> Category {
    rules
        .iter()
        .find(|rule| link.contains(rule.needle))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}

/// Classify a link with the standard rule table.
pub fn classify(link: &str) -> Category {
    classify_with(&CATEGORY_RULES, link)
}
