/// Data layer: core types, loading, and component selection.
///
/// Architecture:
/// ```text
///  SIMULATION_PROGRESS_OUT.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  line → Record   (literal: safe vector parser)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SeriesColumns │  time / points / caps / pps + component-major matrix
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  visible vector components
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod literal;
pub mod loader;
pub mod model;
