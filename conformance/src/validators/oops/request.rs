//! OOPS! REST request envelope and HTTP transport.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Public OOPS! REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://oops.linkeddata.es/rest";

/// What the OOPS! API is asked to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OopsRequest {
    /// Serialized RDF/XML ontology, sent inline.
    Content(String),
    /// URL the service fetches the ontology from.
    Uri(String),
}

impl OopsRequest {
    /// Renders the `OOPSRequest` XML envelope.
    ///
    /// Inline content is embedded verbatim; a URI is XML-escaped.
    pub fn to_xml(&self) -> String {
        let (uri, content) = match self {
            OopsRequest::Content(content) => (String::new(), content.as_str()),
            OopsRequest::Uri(uri) => (escape_xml(uri), ""),
        };
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <OOPSRequest>\n\
             <OntologyURI>{uri}</OntologyURI>\n\
             <OntologyContent>{content}</OntologyContent>\n\
             <Pitfalls></Pitfalls>\n\
             <OutputFormat>XML</OutputFormat>\n\
             </OOPSRequest>\n"
        )
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Status and body of an OOPS! answer, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// True for HTTP 200.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Sends a request envelope to the OOPS! API.
pub trait Transport {
    /// Posts `body` as `application/xml` and returns the answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] when no answer arrives in time and
    /// [`Error::Transport`] for any other network failure. Non-200 answers are
    /// not errors at this level.
    fn post(&self, body: &str) -> Result<RawResponse>;
}

/// Blocking HTTP transport with an overall request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl Transport for HttpTransport {
    fn post(&self, body: &str) -> Result<RawResponse> {
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting OOPS request");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/xml")
            .body(body.to_owned())
            .send()
            .map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| self.classify(e))?.to_vec();
        info!("OOPS API answered with status code {status}");
        Ok(RawResponse { status, body })
    }
}
