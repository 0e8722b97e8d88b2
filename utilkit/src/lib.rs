//! # utilkit
//!
//! Small helpers shared across services: joining URL paths onto an origin,
//! application status codes, list and text utilities, random strings and a
//! plain HTTP GET client built on `reqwest`.

pub mod client;
pub mod error;
pub mod random;
pub mod slices;
pub mod text;
pub mod types;
pub mod util;

pub use client::*;
pub use error::UtilkitError;
pub use random::{random_string, StringGenerator};
pub use types::*;
pub use util::{is_valid_url, join_url_path, to_url_string};
