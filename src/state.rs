use crate::data::filter::{filtered_indices, StoryFilter};
use crate::data::model::StoryTable;
use crate::data::stats::{ComparativeCounts, DashboardCounts};
use crate::query::{self, QueryResult};

// ---------------------------------------------------------------------------
// Comparison mode
// ---------------------------------------------------------------------------

/// Which dashboard the central panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComparisonMode {
    #[default]
    None,
    SingleMonth,
    Comparative,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 3] = [
        ComparisonMode::None,
        ComparisonMode::SingleMonth,
        ComparisonMode::Comparative,
    ];

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMode::None => "None",
            ComparisonMode::SingleMonth => "Single Month",
            ComparisonMode::Comparative => "Comparative Analysis",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Every selection setter recomputes the affected counts synchronously, so
/// one user interaction maps to one filter-and-aggregate pass.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<StoryTable>,

    /// Which dashboard is shown.
    pub mode: ComparisonMode,

    /// Single-month view: the selected month.
    pub selected_month: Option<String>,

    /// Single-month view: the selected category; `None` means "All".
    pub selected_category: Option<String>,

    /// Comparative view: the two months under comparison.
    pub month_a: Option<String>,
    pub month_b: Option<String>,

    /// Counts behind the single-month charts (recomputed on selection).
    pub single: Option<DashboardCounts>,

    /// Counts behind the comparative charts (recomputed on selection).
    pub comparative: Option<ComparativeCounts>,

    /// Free-text query input.
    pub query_input: String,

    /// Result of the last submitted query.
    pub query_result: Option<QueryResult>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            mode: ComparisonMode::default(),
            selected_month: None,
            selected_category: None,
            month_a: None,
            month_b: None,
            single: None,
            comparative: None,
            query_input: String::new(),
            query_result: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the selections to defaults.
    pub fn set_dataset(&mut self, dataset: StoryTable) {
        self.selected_month = dataset.months.first().cloned();
        self.selected_category = None;
        self.month_a = dataset.months.first().cloned();
        self.month_b = dataset.months.get(1).or(dataset.months.first()).cloned();
        self.query_result = None;
        self.status_message = None;
        self.dataset = Some(dataset);
        self.refresh();
    }

    /// Switch dashboards.
    pub fn set_mode(&mut self, mode: ComparisonMode) {
        self.mode = mode;
        self.refresh();
    }

    pub fn select_month(&mut self, month: String) {
        self.selected_month = Some(month);
        self.refresh();
    }

    /// `None` selects "All" categories.
    pub fn select_category(&mut self, category: Option<String>) {
        self.selected_category = category;
        self.refresh();
    }

    pub fn select_month_a(&mut self, month: String) {
        self.month_a = Some(month);
        self.refresh();
    }

    pub fn select_month_b(&mut self, month: String) {
        self.month_b = Some(month);
        self.refresh();
    }

    /// Recompute the counts for the active mode from the current selections.
    pub fn refresh(&mut self) {
        self.single = None;
        self.comparative = None;
        let Some(table) = &self.dataset else {
            return;
        };

        match self.mode {
            ComparisonMode::None => {}
            ComparisonMode::SingleMonth => {
                if let Some(month) = &self.selected_month {
                    let filter = StoryFilter {
                        month: Some(month.clone()),
                        category: self.selected_category.clone(),
                        ..StoryFilter::default()
                    };
                    let rows = filtered_indices(table, &filter);
                    self.single = Some(DashboardCounts::compute(table, &rows));
                }
            }
            ComparisonMode::Comparative => {
                if let (Some(a), Some(b)) = (&self.month_a, &self.month_b) {
                    let rows_a = filtered_indices(table, &StoryFilter::by_month(a.clone()));
                    let rows_b = filtered_indices(table, &StoryFilter::by_month(b.clone()));
                    self.comparative =
                        Some(ComparativeCounts::compute(table, &rows_a, &rows_b, a, b));
                }
            }
        }
    }

    /// Run the current query text against the full table.
    pub fn run_query(&mut self) {
        let Some(table) = &self.dataset else {
            self.status_message = Some("No dataset loaded.".to_string());
            return;
        };
        self.query_result = Some(query::dispatch(table, &self.query_input));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
