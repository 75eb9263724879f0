use serde::Deserialize;

// ---------------------------------------------------------------------------
// Story – one row of the dataset
// ---------------------------------------------------------------------------

/// A single media story (one row of the source table).
///
/// All fields are free-form strings taken verbatim from the dataset. Columns
/// beyond these five may exist in the source file and are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Story {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Tonality")]
    pub tonality: String,
    #[serde(rename = "Media Type")]
    pub media_type: String,
    #[serde(rename = "Theme")]
    pub theme: String,
}

// ---------------------------------------------------------------------------
// Field – a named story column
// ---------------------------------------------------------------------------

/// Selector for one of the five story columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Month,
    Category,
    Tonality,
    MediaType,
    Theme,
}

impl Field {
    /// The column header as it appears in source files.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Month => "Month",
            Field::Category => "Category",
            Field::Tonality => "Tonality",
            Field::MediaType => "Media Type",
            Field::Theme => "Theme",
        }
    }

    /// Read this field's value from a story.
    pub fn value<'a>(&self, story: &'a Story) -> &'a str {
        match self {
            Field::Month => &story.month,
            Field::Category => &story.category,
            Field::Tonality => &story.tonality,
            Field::MediaType => &story.media_type,
            Field::Theme => &story.theme,
        }
    }
}

/// Columns every dataset must provide.
pub const REQUIRED_FIELDS: [Field; 5] = [
    Field::Month,
    Field::Category,
    Field::Tonality,
    Field::MediaType,
    Field::Theme,
];

// ---------------------------------------------------------------------------
// StoryTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset, read-only after construction.
///
/// `months` and `categories` hold the distinct values of those columns in
/// first-appearance order, matching the order rows arrive from the source;
/// the UI dropdowns list them as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryTable {
    pub stories: Vec<Story>,
    pub months: Vec<String>,
    pub categories: Vec<String>,
}

impl StoryTable {
    /// Build the table and its distinct-value indices from loaded rows.
    pub fn from_stories(stories: Vec<Story>) -> Self {
        let months = distinct_values(&stories, Field::Month);
        let categories = distinct_values(&stories, Field::Category);
        StoryTable {
            stories,
            months,
            categories,
        }
    }

    /// Number of stories.
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Indices of every row, in table order.
    pub fn all_rows(&self) -> Vec<usize> {
        (0..self.stories.len()).collect()
    }
}

/// Distinct values of `field` in first-appearance order.
pub fn distinct_values(stories: &[Story], field: Field) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for story in stories {
        let value = field.value(story);
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn story(
        month: &str,
        category: &str,
        tonality: &str,
        media_type: &str,
        theme: &str,
    ) -> Story {
        Story {
            month: month.to_string(),
            category: category.to_string(),
            tonality: tonality.to_string(),
            media_type: media_type.to_string(),
            theme: theme.to_string(),
        }
    }

    #[test]
    fn test_field_value_reads_each_column() {
        let s = story("January", "Health", "Positive", "TV", "Vaccines");
        assert_eq!(Field::Month.value(&s), "January");
        assert_eq!(Field::Category.value(&s), "Health");
        assert_eq!(Field::Tonality.value(&s), "Positive");
        assert_eq!(Field::MediaType.value(&s), "TV");
        assert_eq!(Field::Theme.value(&s), "Vaccines");
    }

    #[test]
    fn test_distinct_values_keeps_first_appearance_order() {
        let stories = vec![
            story("March", "Health", "Positive", "TV", "a"),
            story("January", "Education", "Negative", "Radio", "b"),
            story("March", "Health", "Neutral", "Print", "c"),
        ];
        let table = StoryTable::from_stories(stories);
        assert_eq!(table.months, vec!["March", "January"]);
        assert_eq!(table.categories, vec!["Health", "Education"]);
    }

    #[test]
    fn test_all_rows_covers_the_table() {
        let table = StoryTable::from_stories(vec![
            story("January", "Health", "Positive", "TV", "a"),
            story("February", "Health", "Positive", "TV", "b"),
        ]);
        assert_eq!(table.all_rows(), vec![0, 1]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = StoryTable::from_stories(Vec::new());
        assert!(table.is_empty());
        assert!(table.months.is_empty());
        assert!(table.categories.is_empty());
    }
}
