//! Category presentation lookup.
//!
//! Categories are free-text keys, so styling is a table lookup with a
//! default fallback. Adding a category means adding a row here.

/// How a category is decorated when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Emoji shown before the category label.
    pub icon: &'static str,
    /// CSS color for the category badge.
    pub color: &'static str,
}

/// Style used for any category missing from [`CATEGORY_STYLES`].
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    icon: "📋",
    color: "#6b7280",
};

/// Known categories and their styles.
pub const CATEGORY_STYLES: &[(&str, CategoryStyle)] = &[
    ("形態測定", CategoryStyle { icon: "📏", color: "#0ea5e9" }),
    ("関節可動域", CategoryStyle { icon: "🦴", color: "#8b5cf6" }),
    ("筋力", CategoryStyle { icon: "💪", color: "#f97316" }),
    ("感覚", CategoryStyle { icon: "✋", color: "#14b8a6" }),
    ("疼痛", CategoryStyle { icon: "⚡", color: "#ef4444" }),
    ("循環・呼吸", CategoryStyle { icon: "❤️", color: "#e11d48" }),
    ("バランス", CategoryStyle { icon: "⚖️", color: "#6366f1" }),
    ("歩行", CategoryStyle { icon: "🚶", color: "#22c55e" }),
    ("ADL", CategoryStyle { icon: "🏠", color: "#eab308" }),
    ("精神・認知", CategoryStyle { icon: "🧠", color: "#ec4899" }),
    ("運動麻痺", CategoryStyle { icon: "🦾", color: "#a855f7" }),
];

/// Look up the style for `category`, falling back to [`DEFAULT_STYLE`].
pub fn category_style(category: &str) -> CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_STYLE, |(_, style)| *style)
}
