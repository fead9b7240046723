//! Quantized full-period sine table with a clocked, one-cycle-latency
//! ROM-style lookup.
//!
//! [`SineTable`] is generated once from `(depth, width)` and never mutated;
//! [`SineRom`] owns a table and latches one entry per [`SineRom::tick`],
//! exactly like a synchronous ROM with a registered output port.

pub mod rom;
pub mod table;

pub use rom::{IndexOutOfRange, SineRom};
pub use table::{ConfigError, SineTable, TableEntry};
