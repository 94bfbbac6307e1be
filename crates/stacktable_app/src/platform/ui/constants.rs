/// Column headings in display order.
pub const COLUMN_HEADERS: [&str; 4] = ["Title", "Views", "Score", "Link"];

/// Key hints shown next to the filter line.
pub const KEY_HINTS: &str = "q quit | s sort | o order | n/p page | r refresh | / filter";
