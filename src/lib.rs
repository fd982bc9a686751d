//! Puzzlefetch Core Library
//!
//! This library provides the core functionality for the puzzlefetch tool,
//! which extracts scrambled puzzle image URLs from an Apache access log,
//! orders them into assembly order, and downloads the pieces into a
//! directory with a generated HTML index.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`extract`] - Log scanning, URL assembly, deduplication and ordering
//! - [`fetch`] - Sequential HTTP download of the pieces and index rendering
//!
//! The two stages are independent: [`extract::read_urls`] is a pure function
//! from a log file to an ordered URL list, and [`fetch::fetch_and_render`]
//! consumes that list without feeding anything back.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod extract;
pub mod fetch;

// Re-export commonly used types
pub use extract::{ExtractConfig, ExtractError, PuzzleUrl, read_urls};
pub use fetch::{FetchError, HttpClient, fetch_and_render};
