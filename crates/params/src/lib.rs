//! Constant values for the dcurve library

pub mod traditional;
