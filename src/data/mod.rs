/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  x_train.csv + y_train.csv       training_log.csv / .json
///        │                                │
///        ▼                                ▼
///   ┌──────────┐                     ┌──────────┐
///   │  loader   │                    │  loader   │
///   └──────────┘                     └──────────┘
///        │                                │
///        ▼                                ▼
///   ┌───────────────┐               ┌─────────────┐
///   │ LabeledPoints  │              │ TrainingLog │
///   └───────────────┘               └─────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ partition  │  split by label → label-0 / label-1 groups
///   └───────────┘
/// ```
pub mod loader;
pub mod model;
