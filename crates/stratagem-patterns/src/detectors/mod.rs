//! Pattern detectors — temporal, behavioral, environmental.
//!
//! Each detector returns `Some(Pattern)` only when its evidence floor is
//! cleared; `None` means "not enough signal", never an error.

pub mod behavioral;
pub mod environmental;
pub mod temporal;

pub use behavioral::detect_behavioral;
pub use environmental::detect_environmental;
pub use temporal::detect_temporal;
