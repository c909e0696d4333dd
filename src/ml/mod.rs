// ============================================================
// Layer 5 — ML Layer
// ============================================================
// Everything that talks to a tokenizer or a language model,
// always through the domain traits (TokenCounter,
// TextGenerator) so this layer never names a concrete runtime.
//
//   profiler.rs   — token-length statistics over a corpus and
//                   the max_length recommendation
//
//   inferencer.rs — the question → answer operation around a
//                   loaded generator handle

/// Token-length profiling
pub mod profiler;

/// Prompting and answer extraction around a text generator
pub mod inferencer;
