//! Blocking HTTP implementation of [`Backend`].

use super::Backend;
use crate::config::Config;
use crate::models::{ApiErrorBody, CommandReply, Listing, StatisticsSnapshot};
use crate::services::format::{download_href, encode_component};
use crate::{Error, Result};
use log::debug;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::time::Duration;

/// Talks to the appliance over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client for `config.base_url` using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    fn get(&self, route: &str) -> Result<Response> {
        let url = self.url(route);
        debug!("GET {url}");
        Ok(self.client.get(url).send()?)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
}

/// Error for a non-2xx answer of a JSON endpoint: prefer the `detail` field.
fn api_error(response: Response) -> Error {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map_or_else(|_| format!("HTTP error! Status: {status}"), |b| b.detail);
    Error::Api { status, message }
}

/// Listing errors must carry a `detail`; anything else is a malformed reply.
fn listing_error(response: Response) -> Error {
    let status = response.status().as_u16();
    match response
        .text()
        .map_err(Error::from)
        .and_then(|body| Ok(serde_json::from_str::<ApiErrorBody>(&body)?))
    {
        Ok(body) => Error::Api {
            status,
            message: body.detail,
        },
        Err(e) => e,
    }
}

impl Backend for HttpBackend {
    fn list_files(&self, path: &str) -> Result<Listing> {
        let response = self.get(&format!("/api/files?path={}", encode_component(path)))?;
        if !response.status().is_success() {
            return Err(listing_error(response));
        }
        let listing: Listing = decode(response)?;
        listing.validate()?;
        Ok(listing)
    }

    fn statistics(&self) -> Result<StatisticsSnapshot> {
        let response = self.get("/statistics")?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(Error::Api {
                status,
                message: format!("HTTP error! Status: {status}"),
            });
        }
        let snapshot: StatisticsSnapshot = decode(response)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn start_recording(&self) -> Result<CommandReply> {
        let response = self.get("/record")?;
        if !response.status().is_success() {
            return Err(api_error(response));
        }
        decode(response)
    }

    fn stop_recording(&self) -> Result<CommandReply> {
        let response = self.get("/stoprecord")?;
        if !response.status().is_success() {
            return Err(api_error(response));
        }
        decode(response)
    }

    fn delete_older_than(&self, days: u32) -> Result<String> {
        let url = self.url("/delete");
        debug!("POST {url} days={days}");
        let response = self
            .client
            .post(url)
            .form(&[("days", days.to_string())])
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                message: body,
            })
        }
    }

    fn download(&self, path: &str, sink: &mut dyn Write) -> Result<u64> {
        let mut response = self.get(&download_href(path))?;
        if !response.status().is_success() {
            return Err(api_error(response));
        }
        Ok(response.copy_to(sink)?)
    }
}
