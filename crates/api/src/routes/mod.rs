//! HTTP route handlers

pub mod doors;
pub mod inputs;
pub mod lane;
pub mod mid;
