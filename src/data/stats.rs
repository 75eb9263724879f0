use std::collections::HashMap;

use super::model::{Field, StoryTable};

/// How many themes the dashboards keep per view.
pub const TOP_THEMES: usize = 10;

// ---------------------------------------------------------------------------
// FrequencyCount – value → occurrence count, descending
// ---------------------------------------------------------------------------

/// Occurrence counts of a column's distinct values within one view.
///
/// Entries are ordered by descending count; ties keep the first-appearance
/// order of the values in the view (stable, not alphabetical).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyCount {
    pub entries: Vec<(String, u64)>,
}

impl FrequencyCount {
    /// Number of distinct values counted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view contained no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of rows in the counted view.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// The count recorded for `value`, 0 if absent.
    pub fn count_for(&self, value: &str) -> u64 {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Count occurrences of each distinct value of `field` among `rows`.
pub fn count_by(table: &StoryTable, rows: &[usize], field: Field) -> FrequencyCount {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for &i in rows {
        let value = field.value(&table.stories[i]);
        match counts.get_mut(value) {
            Some(n) => *n += 1,
            None => {
                counts.insert(value, 1);
                order.push(value);
            }
        }
    }

    let mut entries: Vec<(String, u64)> = order
        .into_iter()
        .map(|v| (v.to_string(), counts[v]))
        .collect();
    // Stable sort: ties keep first-appearance order.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    FrequencyCount { entries }
}

/// The `n` highest-count entries of [`count_by`]; ties at the cutoff are
/// resolved in favour of values seen earlier in the view.
pub fn count_by_top_n(table: &StoryTable, rows: &[usize], field: Field, n: usize) -> FrequencyCount {
    let mut counts = count_by(table, rows, field);
    counts.entries.truncate(n);
    counts
}

// ---------------------------------------------------------------------------
// PairedFrequencyCount – value → (count A, count B) across two views
// ---------------------------------------------------------------------------

/// Counts of the same column across two labelled views.
///
/// The entry set is the union of both sides' values, with 0 filled in where a
/// value is absent on one side. Side A's entries come first (in A's order),
/// followed by B-only values in B's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedFrequencyCount {
    pub label_a: String,
    pub label_b: String,
    pub entries: Vec<(String, u64, u64)>,
}

impl PairedFrequencyCount {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The (A, B) counts recorded for `value`, (0, 0) if absent.
    pub fn counts_for(&self, value: &str) -> (u64, u64) {
        self.entries
            .iter()
            .find(|(v, _, _)| v == value)
            .map(|(_, a, b)| (*a, *b))
            .unwrap_or((0, 0))
    }
}

/// Pair two already-computed counts over the union of their values.
pub fn compare_counts(
    a: &FrequencyCount,
    b: &FrequencyCount,
    label_a: impl Into<String>,
    label_b: impl Into<String>,
) -> PairedFrequencyCount {
    let mut entries: Vec<(String, u64, u64)> = a
        .entries
        .iter()
        .map(|(v, n)| (v.clone(), *n, 0))
        .collect();

    let position: HashMap<&str, usize> = a
        .entries
        .iter()
        .enumerate()
        .map(|(i, (v, _))| (v.as_str(), i))
        .collect();

    for (value, n) in &b.entries {
        match position.get(value.as_str()) {
            Some(&i) => entries[i].2 = *n,
            None => entries.push((value.clone(), 0, *n)),
        }
    }

    PairedFrequencyCount {
        label_a: label_a.into(),
        label_b: label_b.into(),
        entries,
    }
}

/// Count `field` in both views and pair the results.
pub fn compare_count_by(
    table: &StoryTable,
    rows_a: &[usize],
    rows_b: &[usize],
    field: Field,
    label_a: impl Into<String>,
    label_b: impl Into<String>,
) -> PairedFrequencyCount {
    compare_counts(
        &count_by(table, rows_a, field),
        &count_by(table, rows_b, field),
        label_a,
        label_b,
    )
}

// ---------------------------------------------------------------------------
// Dashboard bundles – the four counts each view renders
// ---------------------------------------------------------------------------

/// The four counts behind the single-month dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCounts {
    pub categories: FrequencyCount,
    pub tonality: FrequencyCount,
    pub media_types: FrequencyCount,
    pub top_themes: FrequencyCount,
}

impl DashboardCounts {
    pub fn compute(table: &StoryTable, rows: &[usize]) -> Self {
        DashboardCounts {
            categories: count_by(table, rows, Field::Category),
            tonality: count_by(table, rows, Field::Tonality),
            media_types: count_by(table, rows, Field::MediaType),
            top_themes: count_by_top_n(table, rows, Field::Theme, TOP_THEMES),
        }
    }
}

/// The four paired counts behind the two-month comparison dashboard.
///
/// Themes are restricted to each side's top 10 *before* pairing, so a theme
/// inside one side's top 10 but outside the other's shows 0 for the other
/// side even when its true count there is nonzero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparativeCounts {
    pub categories: PairedFrequencyCount,
    pub tonality: PairedFrequencyCount,
    pub media_types: PairedFrequencyCount,
    pub top_themes: PairedFrequencyCount,
}

impl ComparativeCounts {
    pub fn compute(
        table: &StoryTable,
        rows_a: &[usize],
        rows_b: &[usize],
        label_a: &str,
        label_b: &str,
    ) -> Self {
        ComparativeCounts {
            categories: compare_count_by(table, rows_a, rows_b, Field::Category, label_a, label_b),
            tonality: compare_count_by(table, rows_a, rows_b, Field::Tonality, label_a, label_b),
            media_types: compare_count_by(
                table,
                rows_a,
                rows_b,
                Field::MediaType,
                label_a,
                label_b,
            ),
            top_themes: compare_counts(
                &count_by_top_n(table, rows_a, Field::Theme, TOP_THEMES),
                &count_by_top_n(table, rows_b, Field::Theme, TOP_THEMES),
                label_a,
                label_b,
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, StoryFilter};
    use crate::data::model::Story;

    fn story(month: &str, category: &str, tonality: &str, media_type: &str, theme: &str) -> Story {
        Story {
            month: month.to_string(),
            category: category.to_string(),
            tonality: tonality.to_string(),
            media_type: media_type.to_string(),
            theme: theme.to_string(),
        }
    }

    fn sample_table() -> StoryTable {
        StoryTable::from_stories(vec![
            story("January", "Health", "Positive", "TV", "Vaccines"),
            story("January", "Health", "Negative", "Radio", "Vaccines"),
            story("January", "Education", "Neutral", "TV", "Schools"),
            story("February", "Health", "Positive", "Print", "Clinics"),
            story("February", "Economy", "Negative", "TV", "Inflation"),
        ])
    }

    // ── count_by ──────────────────────────────────────────────────────────────

    #[test]
    fn test_count_by_totals_match_view_length() {
        let table = sample_table();
        let rows = table.all_rows();
        for field in crate::data::model::REQUIRED_FIELDS {
            let counts = count_by(&table, &rows, field);
            assert_eq!(counts.total() as usize, rows.len());
        }
    }

    #[test]
    fn test_count_by_descending_order() {
        let table = sample_table();
        let counts = count_by(&table, &table.all_rows(), Field::Category);
        assert_eq!(counts.entries[0], ("Health".to_string(), 3));
        let values: Vec<u64> = counts.entries.iter().map(|(_, n)| *n).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(values, sorted);
    }

    #[test]
    fn test_count_by_ties_keep_first_appearance_order() {
        let table = sample_table();
        let counts = count_by(&table, &table.all_rows(), Field::Category);
        // Education and Economy both count 1; Education appeared first.
        assert_eq!(
            counts.entries,
            vec![
                ("Health".to_string(), 3),
                ("Education".to_string(), 1),
                ("Economy".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_count_by_empty_view() {
        let table = sample_table();
        let counts = count_by(&table, &[], Field::Category);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_count_by_on_filtered_view() {
        let table = sample_table();
        let rows = filtered_indices(&table, &StoryFilter::by_month("January"));
        let counts = count_by(&table, &rows, Field::Category);
        assert_eq!(counts.count_for("Health"), 2);
        assert_eq!(counts.count_for("Education"), 1);
        assert_eq!(counts.count_for("Economy"), 0);
    }

    // ── count_by_top_n ────────────────────────────────────────────────────────

    #[test]
    fn test_top_n_limits_and_keeps_the_heaviest() {
        let table = sample_table();
        let rows = table.all_rows();
        let top = count_by_top_n(&table, &rows, Field::Category, 1);
        assert_eq!(top.entries, vec![("Health".to_string(), 3)]);

        let full = count_by(&table, &rows, Field::Category);
        let cutoff = top.entries.last().map(|(_, n)| *n).unwrap_or(0);
        for (_, n) in &full.entries[top.len()..] {
            assert!(*n <= cutoff);
        }
    }

    #[test]
    fn test_top_n_larger_than_distinct_values() {
        let table = sample_table();
        let top = count_by_top_n(&table, &table.all_rows(), Field::Tonality, 10);
        assert_eq!(top.len(), 3);
    }

    // ── compare_counts ────────────────────────────────────────────────────────

    #[test]
    fn test_compare_unions_values_and_zero_fills() {
        let table = sample_table();
        let jan = filtered_indices(&table, &StoryFilter::by_month("January"));
        let feb = filtered_indices(&table, &StoryFilter::by_month("February"));
        let paired = compare_count_by(
            &table,
            &jan,
            &feb,
            Field::Category,
            "January",
            "February",
        );

        assert_eq!(paired.counts_for("Health"), (2, 1));
        assert_eq!(paired.counts_for("Education"), (1, 0));
        assert_eq!(paired.counts_for("Economy"), (0, 1));
        assert_eq!(paired.len(), 3);
    }

    #[test]
    fn test_compare_with_one_empty_side() {
        let table = sample_table();
        let jan = filtered_indices(&table, &StoryFilter::by_month("January"));
        let paired = compare_count_by(&table, &jan, &[], Field::Tonality, "January", "December");

        assert_eq!(paired.len(), 3);
        for (_, _, b) in &paired.entries {
            assert_eq!(*b, 0);
        }
    }

    #[test]
    fn test_compare_both_sides_empty() {
        let table = sample_table();
        let paired = compare_count_by(&table, &[], &[], Field::Theme, "a", "b");
        assert!(paired.is_empty());
    }

    // ── dashboard bundles ─────────────────────────────────────────────────────

    #[test]
    fn test_dashboard_counts_cover_all_four_charts() {
        let table = sample_table();
        let rows = filtered_indices(&table, &StoryFilter::by_month("January"));
        let dash = DashboardCounts::compute(&table, &rows);

        assert_eq!(dash.categories.total(), 3);
        assert_eq!(dash.tonality.total(), 3);
        assert_eq!(dash.media_types.count_for("TV"), 2);
        assert_eq!(dash.top_themes.count_for("Vaccines"), 2);
        assert!(dash.top_themes.len() <= TOP_THEMES);
    }

    #[test]
    fn test_dashboard_counts_empty_view() {
        let table = sample_table();
        let dash = DashboardCounts::compute(&table, &[]);
        assert!(dash.categories.is_empty());
        assert!(dash.tonality.is_empty());
        assert!(dash.media_types.is_empty());
        assert!(dash.top_themes.is_empty());
    }

    #[test]
    fn test_comparative_counts_pair_per_side_top_themes() {
        // Theme "t11" ranks 11th on side A but 1st on side B; A's column for
        // it must read 0 because pairing happens after each side's cutoff.
        let mut stories = Vec::new();
        for i in 0..TOP_THEMES {
            // Two stories per theme keeps t0..t9 above the cutoff on side A.
            for _ in 0..2 {
                stories.push(story("January", "Health", "Neutral", "TV", &format!("t{i}")));
            }
        }
        stories.push(story("January", "Health", "Neutral", "TV", "t11"));
        stories.push(story("February", "Health", "Neutral", "TV", "t11"));
        let table = StoryTable::from_stories(stories);

        let jan = filtered_indices(&table, &StoryFilter::by_month("January"));
        let feb = filtered_indices(&table, &StoryFilter::by_month("February"));
        let comp = ComparativeCounts::compute(&table, &jan, &feb, "January", "February");

        assert_eq!(comp.top_themes.counts_for("t11"), (0, 1));
        assert_eq!(comp.top_themes.counts_for("t0"), (2, 0));
    }

    #[test]
    fn test_comparative_counts_scenario() {
        let table = StoryTable::from_stories(vec![
            story("January", "Health", "Positive", "TV", "a"),
            story("January", "Health", "Negative", "Radio", "b"),
            story("January", "Education", "Neutral", "TV", "c"),
            story("February", "Health", "Positive", "Print", "d"),
        ]);
        let jan = filtered_indices(&table, &StoryFilter::by_month("January"));
        let feb = filtered_indices(&table, &StoryFilter::by_month("February"));
        let comp = ComparativeCounts::compute(&table, &jan, &feb, "January", "February");

        assert_eq!(comp.categories.counts_for("Health"), (2, 1));
        assert_eq!(comp.categories.counts_for("Education"), (1, 0));
        assert_eq!(comp.categories.label_a, "January");
        assert_eq!(comp.categories.label_b, "February");
    }
}
