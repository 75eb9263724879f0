use super::model::{Story, StoryTable};

// ---------------------------------------------------------------------------
// Filter predicate: optional equality constraint per column
// ---------------------------------------------------------------------------

/// A conjunction of per-column equality constraints.
///
/// `None` means "no constraint on that column". The UI's "All" dropdown entry
/// never reaches this type; it is mapped to `None` by the caller, so a real
/// data value literally named "All" still filters correctly.
///
/// Comparisons are case-sensitive exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    pub month: Option<String>,
    pub category: Option<String>,
    pub tonality: Option<String>,
    pub media_type: Option<String>,
    pub theme: Option<String>,
}

impl StoryFilter {
    /// Constrain only the month column.
    pub fn by_month(month: impl Into<String>) -> Self {
        StoryFilter {
            month: Some(month.into()),
            ..StoryFilter::default()
        }
    }

    /// Constrain only the media-type column.
    pub fn by_media_type(media_type: impl Into<String>) -> Self {
        StoryFilter {
            media_type: Some(media_type.into()),
            ..StoryFilter::default()
        }
    }

    /// Constrain only the tonality column.
    pub fn by_tonality(tonality: impl Into<String>) -> Self {
        StoryFilter {
            tonality: Some(tonality.into()),
            ..StoryFilter::default()
        }
    }

    /// Whether a story satisfies every active constraint.
    pub fn matches(&self, story: &Story) -> bool {
        fn check(constraint: &Option<String>, value: &str) -> bool {
            match constraint {
                Some(wanted) => wanted == value,
                None => true,
            }
        }

        check(&self.month, &story.month)
            && check(&self.category, &story.category)
            && check(&self.tonality, &story.tonality)
            && check(&self.media_type, &story.media_type)
            && check(&self.theme, &story.theme)
    }
}

/// Return indices of stories that pass all active constraints, in table order.
///
/// Pure and recomputed per request; an empty result is valid and flows
/// through aggregation as empty counts.
pub fn filtered_indices(table: &StoryTable, filter: &StoryFilter) -> Vec<usize> {
    table
        .stories
        .iter()
        .enumerate()
        .filter(|(_, story)| filter.matches(story))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Story;

    fn story(month: &str, category: &str, tonality: &str, media_type: &str) -> Story {
        Story {
            month: month.to_string(),
            category: category.to_string(),
            tonality: tonality.to_string(),
            media_type: media_type.to_string(),
            theme: "theme".to_string(),
        }
    }

    fn sample_table() -> StoryTable {
        StoryTable::from_stories(vec![
            story("January", "Health", "Positive", "TV"),
            story("January", "Education", "Negative", "Radio"),
            story("February", "Health", "Neutral", "Print"),
            story("February", "Health", "Negative", "TV"),
        ])
    }

    #[test]
    fn test_unconstrained_filter_returns_every_row() {
        let table = sample_table();
        let all = filtered_indices(&table, &StoryFilter::default());
        assert_eq!(all, table.all_rows());
    }

    #[test]
    fn test_single_constraint() {
        let table = sample_table();
        let rows = filtered_indices(&table, &StoryFilter::by_month("January"));
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn test_conjunction_of_constraints() {
        let table = sample_table();
        let filter = StoryFilter {
            month: Some("February".to_string()),
            category: Some("Health".to_string()),
            ..StoryFilter::default()
        };
        assert_eq!(filtered_indices(&table, &filter), vec![2, 3]);

        let narrower = StoryFilter {
            tonality: Some("Negative".to_string()),
            ..filter
        };
        assert_eq!(filtered_indices(&table, &narrower), vec![3]);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let table = sample_table();
        let rows = filtered_indices(&table, &StoryFilter::by_month("january"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let table = sample_table();
        let rows = filtered_indices(&table, &StoryFilter::by_month("December"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let table = sample_table();
        let filter = StoryFilter::by_month("January");
        let first = filtered_indices(&table, &filter);
        let second = filtered_indices(&table, &filter);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_is_a_plain_value_not_a_wildcard() {
        let table = StoryTable::from_stories(vec![
            story("January", "All", "Positive", "TV"),
            story("January", "Health", "Positive", "TV"),
        ]);
        let filter = StoryFilter {
            category: Some("All".to_string()),
            ..StoryFilter::default()
        };
        assert_eq!(filtered_indices(&table, &filter), vec![0]);
    }
}
