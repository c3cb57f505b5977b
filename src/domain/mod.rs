//! Usage: Domain logic (whole-app-state persistence).

pub(crate) mod business_data;
