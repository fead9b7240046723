use core::fmt;

use defmt::Format;

use crate::table::SineTable;

/// An angle index outside `0..depth` was presented to [`SineRom::tick`].
///
/// The failed tick leaves the output register untouched.
#[derive(Format, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub depth: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "angle index {} outside table depth {}",
            self.index, self.depth
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Clocked sine ROM with a registered output port.
///
/// Owns one [`SineTable`] for its entire lifetime. Each [`tick`] models one
/// clock edge: the entry addressed by the presented index is latched into
/// the output register, and [`output`] reads that register. The value read
/// therefore always corresponds to the index presented one tick earlier —
/// the lookup is never combinational.
///
/// Out-of-range indices fail the tick explicitly instead of being left
/// unchecked; this is stricter than a bare memory would be, and it
/// guarantees a contract violation can never corrupt the register.
///
/// The register holds 0 before the first tick. That coincides with
/// `table[0]` (sine of angle 0 truncates to 0) but is a fixed power-on
/// value, not a table read.
///
/// [`tick`]: SineRom::tick
/// [`output`]: SineRom::output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SineRom {
    table: SineTable,
    output: i32,
}

impl SineRom {
    pub fn new(table: SineTable) -> Self {
        Self { table, output: 0 }
    }

    /// Advance one clock edge, presenting `index` as the current angle.
    ///
    /// On success the entry at `index` is latched and becomes visible
    /// through [`output`](SineRom::output). On failure the register keeps
    /// its previous value.
    pub fn tick(&mut self, index: usize) -> Result<(), IndexOutOfRange> {
        let Some(sample) = self.table.get(index) else {
            return Err(IndexOutOfRange {
                index,
                depth: self.table.len(),
            });
        };
        self.output = sample;
        Ok(())
    }

    /// Value registered by the most recent successful tick.
    pub fn output(&self) -> i32 {
        self.output
    }

    /// The table this ROM serves. Read-only.
    pub fn table(&self) -> &SineTable {
        &self.table
    }

    /// Number of addressable angle steps.
    pub fn depth(&self) -> usize {
        self.table.len()
    }

    /// Sample bit width.
    pub fn width(&self) -> u32 {
        self.table.width()
    }
}

impl Format for SineRom {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SineRom(depth={}, width={}, output={})",
            self.table.len(),
            self.table.width(),
            self.output
        )
    }
}
