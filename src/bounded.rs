//! Self-normalizing numeric values
//!
//! [`BoundedValue`] stores a number that is re-normalized into its range on
//! every write. Two modes are supported:
//!
//! - [`BoundMode::Wrap`]: cyclic quantities such as the turtle heading.
//!   `set(v)` stores `((v - min) mod (max - min)) + min`, so the value always
//!   lies in `[min, max)`.
//! - [`BoundMode::Clamp`]: saturating quantities such as the angle step or
//!   the selected model index. Values below `min` become `min`, values above
//!   `max` become `max`.
//!
//! The same type backs all three quantities; only the mode and bounds differ.

use std::ops::{Add, Rem, Sub};

/// How out-of-range writes are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundMode {
    Wrap,
    Clamp,
}

/// Numeric types a [`BoundedValue`] can hold
///
/// Blanket-implemented for every `Copy` type with ordering and the basic
/// arithmetic operators, which covers `f64` and the signed integers.
pub trait Bounded:
    Copy + PartialOrd + Default + Add<Output = Self> + Sub<Output = Self> + Rem<Output = Self>
{
}

impl<T> Bounded for T where
    T: Copy + PartialOrd + Default + Add<Output = T> + Sub<Output = T> + Rem<Output = T>
{
}

/// A number confined to `[min, max)` (wrap) or `[min, max]` (clamp)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedValue<T: Bounded> {
    min: T,
    max: T,
    mode: BoundMode,
    value: T,
}

impl<T: Bounded> BoundedValue<T> {
    /// Create a bounded value, normalizing `initial` into range
    pub fn new(min: T, max: T, initial: T, mode: BoundMode) -> Self {
        let mut bounded = BoundedValue {
            min,
            max,
            mode,
            value: min,
        };
        bounded.set(initial);
        bounded
    }

    /// Create a value that wraps around `[min, max)`
    pub fn wrapping(min: T, max: T, initial: T) -> Self {
        Self::new(min, max, initial, BoundMode::Wrap)
    }

    /// Create a value that saturates at `min` and `max`
    pub fn clamped(min: T, max: T, initial: T) -> Self {
        Self::new(min, max, initial, BoundMode::Clamp)
    }

    /// The stored, already-normalized value
    pub fn get(&self) -> T {
        self.value
    }

    /// Normalize `value` and store it
    pub fn set(&mut self, value: T) {
        self.value = self.fit(value);
    }

    /// Add `delta` to the current value, then normalize
    pub fn shift(&mut self, delta: T) {
        self.set(self.value + delta);
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn mode(&self) -> BoundMode {
        self.mode
    }

    /// Replace the bounds and re-normalize the current value against them
    pub fn set_bounds(&mut self, min: T, max: T) {
        self.min = min;
        self.max = max;
        self.set(self.value);
    }

    fn fit(&self, v: T) -> T {
        match self.mode {
            BoundMode::Wrap => {
                let zero = T::default();
                let range = self.max - self.min;
                // Empty range: nothing to wrap into
                if !(range > zero) {
                    return self.min;
                }
                // `%` truncates toward zero; fold negative remainders back in
                let mut offset = (v - self.min) % range;
                if offset < zero {
                    offset = offset + range;
                }
                // -0.0 + range can round up to exactly `range` for tiny offsets
                if offset >= range {
                    offset = zero;
                }
                offset + self.min
            }
            BoundMode::Clamp => {
                if v < self.min {
                    self.min
                } else if v > self.max {
                    self.max
                } else {
                    v
                }
            }
        }
    }
}
