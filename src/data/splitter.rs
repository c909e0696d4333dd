// ============================================================
// Layer 4 — Train/Validation/Test Splitter
// ============================================================
// Partitions a corpus into three contiguous slices at 80/10/10.
//
// No shuffling: membership is decided purely by position, so
// the same input order always produces the same split.
//
// Sizes:
//   val   = round(0.1 * n)
//   test  = round(0.1 * n)
//   train = n - val - test
//
// Rounding is half-to-even on the f64 products, so n = 5 gives
// val = round(0.5) = 0. Starting from round(0.8 * n) and nudging
// train until the three sizes sum to n lands on the same train
// size; val and test are never adjusted.
//
// Example: n = 3 → raw (2.4, 0.3, 0.3) → (2, 0, 0) → (3, 0, 0)

use crate::data::error::{DatasetError, Result};

pub const TRAIN_FRACTION: f64 = 0.8;
pub const VAL_FRACTION: f64 = 0.1;
pub const TEST_FRACTION: f64 = 0.1;

/// Slice sizes for a corpus of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSizes {
    pub train: usize,
    pub val:   usize,
    pub test:  usize,
}

impl SplitSizes {
    pub fn for_total(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(DatasetError::EmptyCorpus);
        }
        let n = total as f64;
        let val  = (n * VAL_FRACTION).round_ties_even() as usize;
        let test = (n * TEST_FRACTION).round_ties_even() as usize;

        let mut train = (n * TRAIN_FRACTION).round_ties_even() as usize;
        while train + val + test > total {
            train -= 1;
        }
        while train + val + test < total {
            train += 1;
        }

        Ok(Self { train, val, test })
    }

    pub fn total(&self) -> usize {
        self.train + self.val + self.test
    }
}

/// The three ordered partitions of a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    pub train: Vec<T>,
    pub val:   Vec<T>,
    pub test:  Vec<T>,
}

impl<T> Split<T> {
    /// (label, slice) pairs in train, val, test order.
    pub fn parts(&self) -> [(&'static str, &[T]); 3] {
        [
            ("train", self.train.as_slice()),
            ("val", self.val.as_slice()),
            ("test", self.test.as_slice()),
        ]
    }
}

/// Split `items` contiguously into train `[0,t)`, val `[t,t+v)`, test `[t+v,n)`.
/// Refuses an empty corpus.
pub fn split_80_10_10<T>(mut items: Vec<T>) -> Result<Split<T>> {
    let sizes = SplitSizes::for_total(items.len())?;

    // split_off(k) keeps [0,k) in place and returns [k,..)
    let mut rest = items.split_off(sizes.train);
    let test     = rest.split_off(sizes.val);

    tracing::debug!(
        "Dataset split: {} train, {} val, {} test",
        items.len(),
        rest.len(),
        test.len(),
    );

    Ok(Split { train: items, val: rest, test })
}
