// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns the other layers lean on:
//
//   tokenizer_store.rs — loads the checkpoint's tokenizer.json
//                        and adapts it to the TokenCounter
//                        trait from the domain layer.
//
//   file_select.rs     — finds the dataset files a command
//                        should touch by glob pattern inside
//                        a data directory.

/// Tokenizer loading
pub mod tokenizer_store;

/// Glob-based dataset file discovery
pub mod file_select;
