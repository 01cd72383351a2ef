//! Fetch an input and optionally submit an answer
//!
//! Requires a valid session cookie in `AOC_SESSION`.
//!
//! ```bash
//! AOC_SESSION=... cargo run -p aoc-http-client --example basic_usage -- 2023 1 [answer]
//! ```

use aoc_http_client::{AocClient, SubmissionResult};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = std::env::var("AOC_SESSION").map_err(|_| "AOC_SESSION is not set")?;
    let mut args = std::env::args().skip(1);
    let year: u16 = args.next().ok_or("missing year")?.parse()?;
    let day: u8 = args.next().ok_or("missing day")?.parse()?;

    let client = AocClient::builder()
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;

    let input = client.get_input(year, day, &session)?;
    println!("Fetched {} bytes ({} lines)", input.len(), input.lines().count());

    if let Some(answer) = args.next() {
        match client.submit_answer(year, day, 1, &answer, &session)? {
            SubmissionResult::Correct => println!("✓ Correct"),
            SubmissionResult::Incorrect => println!("✗ Incorrect"),
            SubmissionResult::AlreadyCompleted => println!("⏭ Already completed"),
            SubmissionResult::Throttled { wait_time } => println!("⏳ Throttled ({:?})", wait_time),
            SubmissionResult::Unrecognized => println!("? Unrecognized response"),
        }
    }

    Ok(())
}
