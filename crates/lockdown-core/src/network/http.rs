// crates/lockdown-core/src/network/http.rs
use super::schema::{parse_eyeball_body, parse_hegemony_page};
use super::{
    eyeball_url, HegemonyRecord, EYEBALL_SERVICE, EYEBALL_URL_TEMPLATE, HEGEMONY_SERVICE,
    HEGEMONY_URL,
};
use crate::error::{LockdownError, Result};
use crate::model::{Asn, EyeballEntry};
use crate::traits::NetworkSource;
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder};
use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Where the two services live.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Template with `{cc}` and `{top}` placeholders.
    pub eyeball_template: String,
    pub hegemony_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            eyeball_template: EYEBALL_URL_TEMPLATE.to_string(),
            hegemony_url: HEGEMONY_URL.to_string(),
        }
    }
}

/// Blocking, sequential client for both services. No retries.
pub struct HttpNetworkSource {
    client: Client,
    endpoints: Endpoints,
}

impl HttpNetworkSource {
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lockdown-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoints })
    }

    fn get_text(&self, service: &'static str, request: RequestBuilder) -> Result<String> {
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LockdownError::Status {
                service,
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.text()?)
    }
}

impl NetworkSource for HttpNetworkSource {
    fn eyeball_networks(&self, cc: &str, top: usize) -> Result<Vec<EyeballEntry>> {
        let url = eyeball_url(&self.endpoints.eyeball_template, cc, top);
        debug!(%url, "fetching eyeball networks");
        let body = self.get_text(EYEBALL_SERVICE, self.client.get(&url))?;
        parse_eyeball_body(&body, top)
    }

    fn hegemony(&self, origin: Asn, date: NaiveDate) -> Result<Vec<HegemonyRecord>> {
        let day = date.format("%Y-%m-%d").to_string();
        let mut request = self.client.get(&self.endpoints.hegemony_url).query(&[
            ("originasn", origin.to_string()),
            ("af", "4".to_string()),
            ("timebin__gte", day.clone()),
            ("timebin__lte", day),
            ("format", "json".to_string()),
        ]);

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut pages = 0usize;
        loop {
            let body = self.get_text(HEGEMONY_SERVICE, request)?;
            let page = parse_hegemony_page(&body)?;
            pages += 1;
            records.extend(page.results);

            match page.next {
                Some(next) if seen.insert(next.clone()) => request = self.client.get(&next),
                _ => break,
            }
        }
        debug!(origin, pages, records = records.len(), "fetched hegemony scores");
        Ok(records)
    }
}
