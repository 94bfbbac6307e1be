use crate::{QuestionRow, SortDirection, SortField};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Rows after the client-side title filter.
    pub rows: Vec<QuestionRow>,
    /// Total result count reported by the endpoint, across all pages.
    pub results_length: u32,
    pub page_index: u32,
    pub page_count: u32,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub is_loading: bool,
    pub is_rate_limit_reached: bool,
    pub filter: String,
    pub dirty: bool,
}
