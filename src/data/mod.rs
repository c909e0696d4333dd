// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// File-level transforms from spreadsheet exports to the split
// files the trainer reads.
//
//   *.csv exports
//       │
//       ▼
//   csv_export    → one JSON array per CSV, header-keyed objects
//       │
//       ▼
//   normalizer    → URL/Heading/Content → question/answer (in place)
//       │
//       ▼
//   combiner      → train/test files concatenated into one corpus
//       │
//       ▼
//   splitter      → contiguous 80/10/10 train/val/test slices
//       │
//       ▼
//   alpaca        → optional Alpaca-format copies for the trainer
//
// loader holds the shared JSON read/write helpers and error
// holds the per-file failure taxonomy.

/// Per-file error taxonomy
pub mod error;

/// JSON array read/write helpers
pub mod loader;

/// CSV → JSON conversion
pub mod csv_export;

/// Raw key renaming
pub mod normalizer;

/// Concatenation of partition files
pub mod combiner;

/// Deterministic 80/10/10 splitting
pub mod splitter;

/// Alpaca instruction-format export
pub mod alpaca;
