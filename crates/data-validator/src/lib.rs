//! Sensor Input Validation
//!
//! Range checks for the values the host feeds into the driver-assistance
//! core. The core itself only compares values; bounds are enforced here.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{InputBounds, SensorUpdate, ValidationResult, Validator};
