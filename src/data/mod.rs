/// Data layer: core types, loading, filtering and summaries.
///
/// Architecture:
/// ```text
///        .csv
///          │
///          ▼
///   ┌──────────┐
///   │  loader  │  validate headers, parse → Dataset
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │  filter  │  region / range predicates, per-region aggregation
///   └──────────┘
///          │
///          ▼
///   ┌──────────┐
///   │ summary  │  stats → metrics, insight sentences
///   └──────────┘
///          │
///          ▼
///   pipeline::{BubbleView, BarView}   one per tab
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
pub mod summary;
