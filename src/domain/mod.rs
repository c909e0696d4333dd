// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of the pipeline.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenizer or model types
//   - Only plain Rust structs, enums, functions, and traits
//
// Everything here can be unit tested without a checkpoint
// directory or any data files on disk.

// A question/answer record and its Alpaca export shape
pub mod record;

// Prompt strings used for training, profiling and inference
pub mod prompt;

// Descriptive statistics over token counts
pub mod length_stats;

// Core abstractions (traits) that other layers implement
pub mod traits;
