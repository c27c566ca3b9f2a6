//! transition latch primitive

pub use crate::latch::{Handler, Latch};

pub mod latch;
