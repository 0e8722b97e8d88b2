pub mod options;
pub mod status;

// Re-export the main types commonly used
pub use options::{as_options, YES_NO_OPTIONS};
pub use status::{status_text, Outcome, StatusCode};
