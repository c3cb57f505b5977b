//! Usage: Application layer (logging setup, window lifecycle helpers).

pub(crate) mod logging;
pub(crate) mod window;
