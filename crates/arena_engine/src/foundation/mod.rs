//! Foundation utilities: math types, frame timing, logging setup.

pub mod logging;
pub mod math;
pub mod time;
