mod client;

pub use client::{parse_json_if_ok, read_url, Credentials, FetchClient, FetchConfig};
