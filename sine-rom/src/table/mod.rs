use core::fmt;
use std::f64::consts::PI;

use defmt::Format;

/// Widest sample the `i32` backing store can hold.
pub const MAX_WIDTH: u32 = 32;

/// Rejected `(depth, width)` configuration.
///
/// Construction fails before any table storage is allocated, so a rejected
/// configuration never leaves a partial table behind.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `depth` was 0; a table needs at least one angle step.
    ZeroDepth,
    /// `width` was 0; a sample needs at least one bit.
    ZeroWidth,
    /// `width` exceeds [`MAX_WIDTH`].
    WidthTooLarge { width: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDepth => write!(f, "table depth must be at least 1"),
            Self::ZeroWidth => write!(f, "sample width must be at least 1"),
            Self::WidthTooLarge { width } => {
                write!(f, "sample width {} exceeds the maximum of {}", width, MAX_WIDTH)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Per-entry generation trace handed to the observer hook.
///
/// Purely informational; the observer cannot influence the produced table.
#[derive(Format, Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    /// Angle step, `0..depth`.
    pub index: usize,
    /// `2π · index / depth`.
    pub angle: f64,
    /// `sin(angle)` before scaling.
    pub sine: f64,
    /// `sine · 2^(width-1)` before truncation.
    pub scaled: f64,
    /// The value stored at `table[index]`.
    pub quantized: i32,
}

/// Full-period quantized sine table.
///
/// Entry `i` holds `trunc(sin(2π·i/depth) · 2^(width-1))`, truncated toward
/// zero and clamped at the positive extreme to `2^(width-1) - 1`. The table
/// is immutable after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineTable {
    samples: Vec<i32>,
    width: u32,
}

impl SineTable {
    /// Generate a `depth`-entry table of `width`-bit samples.
    pub fn generate(depth: usize, width: u32) -> Result<Self, ConfigError> {
        Self::generate_with_observer(depth, width, |_| {})
    }

    /// Generate a table, invoking `observer` once per entry in index order.
    ///
    /// The observer sees the intermediate values of every quantization step
    /// and has no effect on the produced table.
    pub fn generate_with_observer(
        depth: usize,
        width: u32,
        mut observer: impl FnMut(TableEntry),
    ) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if width > MAX_WIDTH {
            return Err(ConfigError::WidthTooLarge { width });
        }

        let amplitude = (1i64 << (width - 1)) as f64;
        let max_sample = (1i64 << (width - 1)) - 1;
        let min_sample = -(1i64 << (width - 1));

        let mut samples = Vec::with_capacity(depth);
        for index in 0..depth {
            let angle = 2.0 * PI * index as f64 / depth as f64;
            let sine = angle.sin();
            let scaled = sine * amplitude;
            // Truncate toward zero, then clamp the positive extreme:
            // sin(π/2) scales to exactly 2^(width-1), one past the largest
            // representable positive sample. The negative extreme is already
            // representable, so only the invariant is checked.
            let quantized = (scaled.trunc() as i64).min(max_sample);
            debug_assert!(quantized >= min_sample);
            let quantized = quantized as i32;

            observer(TableEntry {
                index,
                angle,
                sine,
                scaled,
                quantized,
            });
            samples.push(quantized);
        }

        Ok(Self { samples, width })
    }

    /// Number of angle steps covering the full circle.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample bit width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Entry at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.samples.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.samples
    }

    /// Largest representable sample, `2^(width-1) - 1`.
    pub fn max_sample(&self) -> i32 {
        ((1i64 << (self.width - 1)) - 1) as i32
    }

    /// Smallest representable sample, `-2^(width-1)`.
    pub fn min_sample(&self) -> i32 {
        (-(1i64 << (self.width - 1))) as i32
    }
}

impl Format for SineTable {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SineTable(depth={}, width={})",
            self.samples.len(),
            self.width
        )
    }
}
