use crate::data::filter::{filtered_indices, StoryFilter};
use crate::data::model::{Field, StoryTable};
use crate::data::stats::{count_by_top_n, FrequencyCount};

/// Shown when a query matches none of the recognized phrases.
pub const HELP_MESSAGE: &str = "Please enter a valid query. For example: \
'highest number of stories', 'top 10 TV stations', 'top 10 radio stations', \
'top 10 print media', 'top 10 negative stories'.";

// ---------------------------------------------------------------------------
// QueryCommand – the recognized analytics queries
// ---------------------------------------------------------------------------

/// The fixed set of text queries the dashboard answers.
///
/// Matching is case-insensitive but otherwise exact: no trimming, no fuzzy
/// tolerance. Each command runs one canned aggregation over the full table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryCommand {
    HighestStoryCount,
    TopTvStations,
    TopRadioStations,
    TopPrintMedia,
    TopNegativeStories,
}

impl QueryCommand {
    pub const ALL: [QueryCommand; 5] = [
        QueryCommand::HighestStoryCount,
        QueryCommand::TopTvStations,
        QueryCommand::TopRadioStations,
        QueryCommand::TopPrintMedia,
        QueryCommand::TopNegativeStories,
    ];

    /// The literal phrase (lowercased form) that triggers this command.
    pub fn phrase(&self) -> &'static str {
        match self {
            QueryCommand::HighestStoryCount => "highest number of stories",
            QueryCommand::TopTvStations => "top 10 tv stations",
            QueryCommand::TopRadioStations => "top 10 radio stations",
            QueryCommand::TopPrintMedia => "top 10 print media",
            QueryCommand::TopNegativeStories => "top 10 negative stories",
        }
    }

    /// Heading shown above the command's result table.
    pub fn heading(&self) -> &'static str {
        match self {
            QueryCommand::HighestStoryCount => "Category with Highest Number of Stories",
            QueryCommand::TopTvStations => "Top 10 TV Stations",
            QueryCommand::TopRadioStations => "Top 10 Radio Stations",
            QueryCommand::TopPrintMedia => "Top 10 Print Media",
            QueryCommand::TopNegativeStories => "Top 10 Negative Stories",
        }
    }

    /// Resolve a free-text query to a command, if it matches a phrase.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.to_lowercase();
        QueryCommand::ALL
            .into_iter()
            .find(|cmd| cmd.phrase() == normalized)
    }

    /// Run the command's aggregation over the full table.
    pub fn run(&self, table: &StoryTable) -> FrequencyCount {
        match self {
            QueryCommand::HighestStoryCount => {
                count_by_top_n(table, &table.all_rows(), Field::Category, 1)
            }
            QueryCommand::TopTvStations => media_type_report(table, "TV"),
            QueryCommand::TopRadioStations => media_type_report(table, "Radio"),
            QueryCommand::TopPrintMedia => media_type_report(table, "Print"),
            QueryCommand::TopNegativeStories => {
                let rows = filtered_indices(table, &StoryFilter::by_tonality("Negative"));
                count_by_top_n(table, &rows, Field::Tonality, 10)
            }
        }
    }
}

/// Count stories of one media type.
///
/// Counting the column the view was filtered on collapses to a single bucket
/// holding the view's row count; the dataset carries no station or outlet
/// column that would allow a finer breakdown.
fn media_type_report(table: &StoryTable, media_type: &str) -> FrequencyCount {
    let rows = filtered_indices(table, &StoryFilter::by_media_type(media_type));
    count_by_top_n(table, &rows, Field::MediaType, 10)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Outcome of one query submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// A recognized query and its aggregation.
    Report {
        heading: &'static str,
        counts: FrequencyCount,
    },
    /// Input matched no phrase; the UI shows [`HELP_MESSAGE`].
    Unrecognized,
}

/// Match `input` against the recognized phrases and run the aggregation.
pub fn dispatch(table: &StoryTable, input: &str) -> QueryResult {
    match QueryCommand::parse(input) {
        Some(cmd) => QueryResult::Report {
            heading: cmd.heading(),
            counts: cmd.run(table),
        },
        None => QueryResult::Unrecognized,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
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
            story("February", "Economy", "Negative", "Print", "Inflation"),
        ])
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            QueryCommand::parse("Top 10 TV Stations"),
            Some(QueryCommand::TopTvStations)
        );
        assert_eq!(
            QueryCommand::parse("top 10 tv stations"),
            Some(QueryCommand::TopTvStations)
        );
        assert_eq!(
            QueryCommand::parse("HIGHEST NUMBER OF STORIES"),
            Some(QueryCommand::HighestStoryCount)
        );
    }

    #[test]
    fn test_parse_requires_exact_phrase() {
        assert_eq!(QueryCommand::parse("banana"), None);
        assert_eq!(QueryCommand::parse(" top 10 tv stations"), None);
        assert_eq!(QueryCommand::parse("top 10 tv stations please"), None);
    }

    #[test]
    fn test_case_variants_dispatch_identically() {
        let table = sample_table();
        assert_eq!(
            dispatch(&table, "Top 10 TV Stations"),
            dispatch(&table, "top 10 tv stations")
        );
    }

    #[test]
    fn test_dispatch_unrecognized() {
        let table = sample_table();
        assert_eq!(dispatch(&table, "banana"), QueryResult::Unrecognized);
    }

    #[test]
    fn test_highest_story_count() {
        let table = sample_table();
        let QueryResult::Report { heading, counts } = dispatch(&table, "highest number of stories")
        else {
            panic!("expected a report");
        };
        assert_eq!(heading, "Category with Highest Number of Stories");
        assert_eq!(counts.entries, vec![("Health".to_string(), 2)]);
    }

    #[test]
    fn test_media_type_report_collapses_to_one_bucket() {
        let table = sample_table();
        let QueryResult::Report { counts, .. } = dispatch(&table, "top 10 tv stations") else {
            panic!("expected a report");
        };
        assert_eq!(counts.entries, vec![("TV".to_string(), 2)]);
    }

    #[test]
    fn test_negative_stories_report() {
        let table = sample_table();
        let QueryResult::Report { counts, .. } = dispatch(&table, "top 10 negative stories") else {
            panic!("expected a report");
        };
        assert_eq!(counts.entries, vec![("Negative".to_string(), 2)]);
    }

    #[test]
    fn test_reports_on_empty_table() {
        let table = StoryTable::from_stories(Vec::new());
        for cmd in QueryCommand::ALL {
            assert!(cmd.run(&table).is_empty());
        }
    }

    #[test]
    fn test_help_message_lists_every_phrase() {
        // The phrases appear in the help text (case-insensitively).
        let help = HELP_MESSAGE.to_lowercase();
        for cmd in QueryCommand::ALL {
            assert!(help.contains(cmd.phrase()));
        }
    }
}
