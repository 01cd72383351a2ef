//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::ResponseParser;
use reqwest::header::HeaderValue;
use std::time::Duration;
use zeroize::Zeroize;

/// Result of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Answer was correct
    Correct,
    /// Answer was incorrect
    Incorrect,
    /// Problem was already completed
    AlreadyCompleted,
    /// Submission was throttled
    Throttled {
        /// Optional wait time before next submission
        wait_time: Option<Duration>,
    },
    /// The response matched none of the known outcomes
    Unrecognized,
}

/// The main AOC HTTP client
///
/// Fetches puzzle inputs and submits answers. The session cookie is passed
/// per call so the client itself holds no secret.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let session = "your_session_cookie";
///
/// let input = client.get_input(2024, 1, session)?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new AOC client with rustls-tls configuration and no redirect policy
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the AOC client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Create a secure cookie header value from a session string
    ///
    /// The header is flagged sensitive and the temporary string is zeroized.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, AocError> {
        let mut cookie_string = format!("session={}", session);
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| AocError::ClientInit("Invalid session cookie format".to_string()));
        cookie_string.zeroize();

        let mut sensitive_header = header_value?;
        sensitive_header.set_sensitive(true);
        Ok(sensitive_header)
    }

    /// Build `{base}/{year}/day/{day}/{leaf}`
    fn day_url(&self, year: u16, day: u8, leaf: &str) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), leaf]);
        Ok(url)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.day_url(year, day, "input")?;
        tracing::debug!(%url, "fetching puzzle input");

        let response = self
            .client
            .get(url)
            .header("Cookie", cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| AocError::Encoding)
    }

    /// Submit an answer for a puzzle part
    ///
    /// # Returns
    ///
    /// A `SubmissionResult` classified from the `<main>` text of the response.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error
    /// * `AocError::Encoding` - Response is not valid UTF-8
    /// * `AocError::HtmlParse` - Response has no `<main>` element
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::{AocClient, SubmissionResult};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// match client.submit_answer(2024, 1, 1, "42", "your_session_cookie")? {
    ///     SubmissionResult::Correct => println!("Correct!"),
    ///     other => println!("{:?}", other),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        part: u8,
        answer: &str,
        session: &str,
    ) -> Result<SubmissionResult, AocError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let url = self.day_url(year, day, "answer")?;
        tracing::debug!(%url, part, "submitting answer");

        let form = [("level", part.to_string()), ("answer", answer.to_string())];

        let response = self
            .client
            .post(url)
            .header("Cookie", cookie_header)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        let html = response.text().map_err(|_| AocError::Encoding)?;
        self.parser.parse_submission_response(&html)
    }
}

/// Builder for configuring an AOC HTTP client
///
/// Allows a custom base URL (mock servers in tests) and a custom reqwest
/// client builder. Redirects are always disabled.
#[derive(Debug)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            base_url: None,
            client_builder: None,
        }
    }

    /// Set a custom base URL for the client
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set a custom HTTP client builder
    ///
    /// The redirect policy is overridden to `Policy::none()` regardless of
    /// the provided configuration.
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the AOC client with the configured settings
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AocClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
const USER_AGENT: &str = concat!("aoc-http-client/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn client_for(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::builder().build().unwrap();
        assert_eq!(client.base_url.as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(AocClient::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_input_not_found_status() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2023/day/5/input")
            .with_status(404)
            .expect(1)
            .create();

        let result = client_for(&server).get_input(2023, 5, "abc");
        assert!(matches!(result, Err(AocError::InvalidStatus { .. })));
        mock.assert();
    }

    #[test]
    fn test_session_cookie_sent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2023/day/1/input")
            .match_header("cookie", "session=deadbeef")
            .with_status(200)
            .with_body("1abc2\n")
            .expect(1)
            .create();

        let input = client_for(&server).get_input(2023, 1, "deadbeef").unwrap();
        assert_eq!(input, "1abc2\n");
        mock.assert();
    }

    #[test]
    fn test_redirect_not_followed() {
        let mut server = mockito::Server::new();
        let home = server.mock("GET", "/").with_status(200).expect(0).create();
        let answer = server
            .mock("POST", "/2023/day/1/answer")
            .with_status(302)
            .with_header("location", "/")
            .expect(1)
            .create();

        let result = client_for(&server).submit_answer(2023, 1, 1, "42", "abc");
        assert!(matches!(result, Err(AocError::InvalidStatus { .. })));
        home.assert();
        answer.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_url_construction(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .with_status(200)
                .with_body("test input data")
                .expect(1)
                .create();

            let result = client_for(&server).get_input(year, day, &session);

            mock.assert();
            prop_assert_eq!(result.unwrap(), "test input data");
        }

        #[test]
        fn prop_submission_request_construction(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            part in 1u8..=2u8,
            answer in "[0-9]{1,10}",
        ) {
            let mut server = mockito::Server::new();
            let expected_path = format!("/{}/day/{}/answer", year, day);
            let mock = server.mock("POST", expected_path.as_str())
                .match_body(mockito::Matcher::AllOf(vec![
                    mockito::Matcher::UrlEncoded("level".into(), part.to_string()),
                    mockito::Matcher::UrlEncoded("answer".into(), answer.clone()),
                ]))
                .with_status(200)
                .with_body(r#"<html><body><main>That's the right answer!</main></body></html>"#)
                .expect(1)
                .create();

            let result = client_for(&server).submit_answer(year, day, part, &answer, "abc");

            mock.assert();
            prop_assert_eq!(result.unwrap(), SubmissionResult::Correct);
        }
    }
}
