use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use crate::template::FetchedTemplate;
use log::debug;
use std::time::Duration;
use url::Url;

/// Minimal view of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx status codes.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP GET requests on behalf of the loader.
pub trait HttpClient {
    /// Sends a GET request to `url`.
    ///
    /// Non-success status codes are not errors at this level; only transport
    /// failures are.
    fn get(&self, url: &Url) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by reqwest's blocking client.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        // no timeout: a stalled download blocks until the user interrupts it
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| Error::NetworkError {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &Url) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| Error::NetworkError {
                reason: e.to_string(),
            })?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        let body = if status.is_success() {
            response.text().map_err(|e| Error::NetworkError {
                reason: e.to_string(),
            })?
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

/// Loader for templates served over HTTP(S).
pub struct HttpLoader<'a, S: AsRef<str>> {
    client: &'a dyn HttpClient,
    url: S,
}

impl<'a, S: AsRef<str>> HttpLoader<'a, S> {
    /// Creates a new HttpLoader instance.
    pub fn new(client: &'a dyn HttpClient, url: S) -> Self {
        Self { client, url }
    }
}

impl<S: AsRef<str>> TemplateLoader for HttpLoader<'_, S> {
    /// Downloads the template.
    ///
    /// # Errors
    /// * `Error::InvalidUrlError` if the URL does not parse
    /// * `Error::NetworkError` if the request fails
    /// * `Error::HttpStatusError` if the server answers with a non-2xx status
    fn load(&self) -> Result<FetchedTemplate> {
        let raw = self.url.as_ref();
        let url = Url::parse(raw).map_err(|e| Error::InvalidUrlError {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(&url)?;
        if !response.ok() {
            return Err(Error::HttpStatusError {
                status: response.status,
                status_text: response.status_text,
            });
        }

        Ok(FetchedTemplate::new(response.body))
    }
}
