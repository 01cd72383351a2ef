//! HTML response parsing utilities

use crate::{SubmissionResult, error::AocError};
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

/// Parser for answer responses with cached regex pattern and selector
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    throttle_regex: OnceCell<Regex>,
    main_selector: OnceCell<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceCell::new(),
            main_selector: OnceCell::new(),
        }
    }

    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex.get_or_init(|| {
            Regex::new(r"You have (.+?) left to wait\.").expect("throttle pattern is valid")
        })
    }

    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").expect("main selector is valid"))
    }

    /// Extract text content from the main element of an HTML document
    pub fn extract_main_text(&self, html: &str) -> Result<String, AocError> {
        let document = Html::parse_document(html);
        let main_element = document
            .select(self.main_selector())
            .next()
            .ok_or(AocError::HtmlParse)?;

        Ok(main_element.text().collect::<String>())
    }

    /// Extract throttle duration from response text
    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let captures = self.throttle_regex().captures(text)?;
        humantime::parse_duration(captures.get(1)?.as_str()).ok()
    }

    /// Classify the text of an answer response
    ///
    /// Only an explicit confirmation counts as correct; text matching none of
    /// the known phrases is `Unrecognized`.
    pub fn parse_submission_response(&self, html: &str) -> Result<SubmissionResult, AocError> {
        let text = self.extract_main_text(html)?;

        if text.contains("That's the right answer") {
            return Ok(SubmissionResult::Correct);
        }
        if text.contains("not the right answer") {
            return Ok(SubmissionResult::Incorrect);
        }
        if text.contains("already complete it") {
            return Ok(SubmissionResult::AlreadyCompleted);
        }
        if text.contains("gave an answer too recently") {
            let wait_time = self.extract_throttle_duration(&text);
            return Ok(SubmissionResult::Throttled { wait_time });
        }

        Ok(SubmissionResult::Unrecognized)
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
