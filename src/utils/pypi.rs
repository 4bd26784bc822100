//! Direct queries against a Python package index (PyPI or a mirror).

use crate::core::types::PackageRecord;
use crate::error::{Result, UnifiedError};
use crate::packages::parsers;
use crate::project_identity;
use crate::ui;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

pub struct PypiClient {
    client: Client,
    base_url: String,
}

impl PypiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(project_identity::user_agent())
            .build()
            .map_err(|e| UnifiedError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exact project lookup via the JSON API; `None` when the index has no such project
    pub fn project(&self, name: &str) -> Result<Option<PackageRecord>> {
        let url = format!("{}/pypi/{}/json", self.base_url, name);
        let response = self.get(&url, &[])?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = read_body(response)?;
                parsers::parse_pypi_project(&body).map(Some)
            }
            status => Err(UnifiedError::NetworkError(format!(
                "{} returned HTTP {}",
                url, status
            ))),
        }
    }

    /// Full-text search through the index's HTML search page
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<PackageRecord>> {
        let url = format!("{}/search/", self.base_url);
        let response = self.get(&url, &[("q", query)])?;

        if !response.status().is_success() {
            return Err(UnifiedError::NetworkError(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let body = read_body(response)?;
        Ok(parsers::parse_pypi_search_html(&body, limit))
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        ui::verbose(&format!("GET {}", url));
        self.client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| UnifiedError::NetworkError(e.to_string()))
    }
}

fn read_body(response: Response) -> Result<String> {
    response
        .text()
        .map_err(|e| UnifiedError::NetworkError(e.to_string()))
}
