pub mod diff;
pub mod logging;
