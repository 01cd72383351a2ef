//! AOC HTTP Client Library
//!
//! Blocking client for the Advent of Code website: puzzle input fetching and
//! answer submission with the response classified into a [`SubmissionResult`].
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Answer submission with detailed feedback
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, SubmissionResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let session = "your_session_cookie_here";
//!
//! let input = client.get_input(2024, 1, session)?;
//!
//! match client.submit_answer(2024, 1, 1, "42", session)? {
//!     SubmissionResult::Correct => println!("Correct!"),
//!     SubmissionResult::Incorrect => println!("Incorrect"),
//!     SubmissionResult::AlreadyCompleted => println!("Already done"),
//!     SubmissionResult::Throttled { wait_time } => println!("Throttled: {:?}", wait_time),
//!     SubmissionResult::Unrecognized => println!("Unknown response"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;

pub use client::{AocClient, AocClientBuilder, SubmissionResult};
pub use error::AocError;
