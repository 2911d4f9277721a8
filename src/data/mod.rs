/// Data layer: core types, loading, and reshaping.
///
/// Architecture:
/// ```text
///  hitters_2017_2018.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → strip '%' → add HRRate
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ BattingTable  │  Vec<SeasonRecord>, column names
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  pivot    │  player × season → paired vectors per stat
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod pivot;
