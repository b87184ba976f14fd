//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_source;

use quote_machine::config::SourceConfig;
use quote_machine::quote::Quote;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_DOCUMENT: &str = r#"{
    "quotes": [
        {"quoteText": "The only way to do great work is to love what you do.", "quoteAuthor": "Steve Jobs"},
        {"quoteText": "Life is what happens when you're busy making other plans.", "quoteAuthor": "John Lennon"},
        {"quoteText": "Whatever you are, be a good one.", "quoteAuthor": "Abraham Lincoln"}
    ]
}"#;

pub fn sample_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Steve Jobs",
        ),
        Quote::new(
            "Life is what happens when you're busy making other plans.",
            "John Lennon",
        ),
        Quote::new("Whatever you are, be a good one.", "Abraham Lincoln"),
    ]
}

/// Source config pointing at `endpoint` with short timeouts.
pub fn source_config(endpoint: String) -> SourceConfig {
    SourceConfig {
        endpoint,
        request_timeout_seconds: 1,
        connect_timeout_seconds: 1,
    }
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
