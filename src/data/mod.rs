/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → StoryTable (memoized for the default path)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ StoryTable  │  Vec<Story>, distinct month/category lists
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply equality predicates → row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  frequency counts, paired counts, dashboard bundles
///   └──────────┘
/// ```
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
