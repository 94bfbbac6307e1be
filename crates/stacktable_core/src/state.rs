use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Rows requested per page; fixed by the search endpoint contract.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Activity,
    Votes,
    Creation,
    Hot,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Activity => "activity",
            SortField::Votes => "votes",
            SortField::Creation => "creation",
            SortField::Hot => "hot",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortField::Activity => SortField::Votes,
            SortField::Votes => SortField::Creation,
            SortField::Creation => SortField::Hot,
            SortField::Hot => SortField::Activity,
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "activity" => Some(SortField::Activity),
            "votes" => Some(SortField::Votes),
            "creation" => Some(SortField::Creation),
            "hot" => Some(SortField::Hot),
            _ => None,
        }
    }
}

/// Sort direction with the three-state header cycle: none -> asc -> desc.
/// `None` serializes as an empty `order` parameter on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::None => "",
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortDirection::None => SortDirection::Asc,
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::None,
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "" => Some(SortDirection::None),
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Sort and paging state driving the next fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryState {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub page_index: u32,
}

/// One displayed record. Fields are kept as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub title: String,
    pub view_count: String,
    pub score: String,
    pub link: String,
}

/// A successfully decoded page: the rows plus the endpoint's total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub rows: Vec<QuestionRow>,
    pub total: u32,
}

/// Exactly one of these holds at any observation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: QueryState,
    phase: FetchPhase,
    rows: Vec<QuestionRow>,
    results_length: u32,
    filter: String,
    last_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = if self.filter.is_empty() {
            self.rows.clone()
        } else {
            let needle = self.filter.to_lowercase();
            self.rows
                .iter()
                .filter(|row| row.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        AppViewModel {
            rows,
            results_length: self.results_length,
            page_index: self.query.page_index,
            page_count: self.page_count(),
            sort_field: self.query.sort_field,
            sort_direction: self.query.sort_direction,
            is_loading: self.phase == FetchPhase::Loading,
            is_rate_limit_reached: self.phase == FetchPhase::Failed,
            filter: self.filter.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn restore_sort(&mut self, field: SortField, direction: SortDirection) {
        self.query.sort_field = field;
        self.query.sort_direction = direction;
        self.dirty = true;
    }

    pub(crate) fn set_sort_field(&mut self, field: SortField) -> bool {
        if self.query.sort_field == field {
            return false;
        }
        self.query.sort_field = field;
        // Any sort change starts over from the first page.
        self.query.page_index = 0;
        true
    }

    pub(crate) fn set_sort_direction(&mut self, direction: SortDirection) -> bool {
        if self.query.sort_direction == direction {
            return false;
        }
        self.query.sort_direction = direction;
        self.query.page_index = 0;
        true
    }

    /// Clamps to the pages implied by the last known total. Returns false
    /// when the clamped target is already the current page.
    pub(crate) fn set_page_index(&mut self, page_index: u32) -> bool {
        let clamped = page_index.min(self.max_page_index());
        if self.query.page_index == clamped {
            return false;
        }
        self.query.page_index = clamped;
        true
    }

    pub(crate) fn set_filter(&mut self, filter: String) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.dirty = true;
        true
    }

    /// Allocates the next request id and marks it as the only one whose
    /// completion will be applied.
    pub(crate) fn begin_fetch(&mut self) -> (RequestId, QueryState) {
        self.last_request_id += 1;
        self.in_flight = Some(self.last_request_id);
        self.phase = FetchPhase::Loading;
        self.dirty = true;
        (self.last_request_id, self.query)
    }

    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn apply_page(&mut self, page: PageResult) {
        self.rows = page.rows;
        self.results_length = page.total;
        self.phase = FetchPhase::Loaded;
        self.in_flight = None;
        self.dirty = true;
    }

    /// The failure sentinel clears the rows but leaves `results_length`
    /// alone so the paging bounds survive a transient error.
    pub(crate) fn apply_failure(&mut self) {
        self.rows = Vec::new();
        self.phase = FetchPhase::Failed;
        self.in_flight = None;
        self.dirty = true;
    }

    fn page_count(&self) -> u32 {
        self.results_length.div_ceil(PAGE_SIZE)
    }

    fn max_page_index(&self) -> u32 {
        self.page_count().saturating_sub(1)
    }
}
