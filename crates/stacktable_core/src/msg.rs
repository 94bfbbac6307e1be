#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The table is mounted and should load its first page.
    Ready,
    /// Restore persisted sort preferences; applied before the first fetch.
    RestorePreferences {
        sort_field: crate::SortField,
        sort_direction: crate::SortDirection,
    },
    /// User selected a different sort field.
    SortFieldChanged(crate::SortField),
    /// User cycled the sort direction.
    SortDirectionChanged(crate::SortDirection),
    /// User moved to another page (0-based index).
    PageChanged(u32),
    /// User asked to reload the current page.
    RefreshRequested,
    /// User edited the client-side title filter.
    FilterChanged(String),
    /// A fetch finished. `None` is the absorbed-failure sentinel.
    FetchCompleted {
        request_id: crate::RequestId,
        page: Option<crate::PageResult>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
