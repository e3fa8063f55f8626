//! Distance heap: array-backed binary min-heap over taxi distances.
//!
//! The root always holds the nearest taxi. Elements live in complete-binary-tree
//! layout inside a `Vec<f64>`:
//!
//! - parent of `i` is `(i - 1) / 2`
//! - children of `i` are `2i + 1` and `2i + 2`
//!
//! Keys are only ever decreased (taxis get closer), so [DistanceHeap::decrease_key]
//! repairs upward only. Decreased keys are clamped at zero because a distance
//! cannot be negative.

use thiserror::Error;

/// Errors reported by [DistanceHeap].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HeapError {
    /// Extraction attempted on an empty heap.
    #[error("heap underflow: no taxi available to extract")]
    Underflow,
    /// Decrease-key addressed a slot that does not exist.
    #[error("index {index} out of range for heap of size {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Largest number of slots reserved up front from a capacity hint.
pub const MAX_PREALLOCATED: usize = 1 << 20;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[derive(Debug, Clone, Default)]
pub struct DistanceHeap {
    elements: Vec<f64>,
}

impl DistanceHeap {
    /// Creates an empty heap with room for `capacity_hint` distances.
    ///
    /// The hint is best-effort: it is capped at [MAX_PREALLOCATED] and a failed
    /// reservation is ignored, so any hint (0 or `usize::MAX`) yields a usable heap.
    pub fn new(capacity_hint: usize) -> Self {
        let mut elements = Vec::new();
        let _ = elements.try_reserve(capacity_hint.min(MAX_PREALLOCATED));
        Self { elements }
    }

    /// Number of distances currently stored.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Nearest distance without removing it.
    pub fn peek(&self) -> Option<f64> {
        self.elements.first().copied()
    }

    /// Backing storage in heap layout.
    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    /// Appends `value` and sifts it up until its parent is not larger.
    pub fn insert(&mut self, value: f64) {
        debug_assert!(value >= 0.0, "distances must be non-negative, got {value}");
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the smallest distance.
    ///
    /// # Errors
    ///
    /// [HeapError::Underflow] when the heap is empty.
    pub fn extract_min(&mut self) -> Result<f64, HeapError> {
        let last = self.elements.pop().ok_or(HeapError::Underflow)?;
        if self.elements.is_empty() {
            return Ok(last);
        }
        let min = std::mem::replace(&mut self.elements[0], last);
        self.sift_down(0);
        Ok(min)
    }

    /// Reduces the distance at `index` by `amount`, clamping at zero, then
    /// restores heap order towards the root.
    ///
    /// # Errors
    ///
    /// [HeapError::OutOfRange] when `index >= size()`. The heap is left untouched.
    pub fn decrease_key(&mut self, index: usize, amount: f64) -> Result<(), HeapError> {
        debug_assert!(amount >= 0.0, "decrease amount must be non-negative, got {amount}");
        let len = self.elements.len();
        let slot = self
            .elements
            .get_mut(index)
            .ok_or(HeapError::OutOfRange { index, len })?;

        if *slot - amount < 0.0 {
            *slot = 0.0;
        } else {
            *slot -= amount;
        }

        self.sift_up(index);
        Ok(())
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 && self.elements[index] < self.elements[parent(index)] {
            let p = parent(index);
            self.elements.swap(index, p);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            // Left is tested first and right must be strictly smaller than the
            // minimum so far, so equal children promote the left one.
            if left < len && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < len && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}
