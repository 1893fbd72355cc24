//! Fetching record batches from a Socrata open-data endpoint.
//!
//! A batch is one unconditional GET for a fixed borough/species query; the
//! whole result arrives at once and is rendered as a unit. Failure is an
//! explicit state the caller can observe, never a silently empty map.

use crate::{data::record::TreeRecord, MapError, Result};
use futures::FutureExt;
use once_cell::sync::Lazy;
use reqwest::Client;
use tokio::task::JoinHandle;

/// NYC street tree census resource the default query points at.
pub const DEFAULT_ENDPOINT: &str = "https://data.cityofnewyork.us/resource/kyad-zm4j.json";

/// Shared async HTTP client with a crate User-Agent so public data portals
/// don't reject the request. Building the client once reuses the TLS setup
/// and connection pool across fetches.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("arbormap/0.1 (+https://github.com/example/arbormap)")
        .build()
        .expect("failed to build reqwest client")
});

/// One borough/species query against a Socrata tree dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocrataSource {
    pub endpoint: String,
    pub app_token: Option<String>,
    pub borough: String,
    pub species: String,
}

impl Default for SocrataSource {
    /// Red oaks in the Bronx, the query the original map shipped with
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            app_token: None,
            borough: "Bronx".to_string(),
            species: "QURU".to_string(),
        }
    }
}

impl SocrataSource {
    pub fn new(borough: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            borough: borough.into(),
            species: species.into(),
            ..Self::default()
        }
    }

    pub fn with_app_token(mut self, token: impl Into<String>) -> Self {
        self.app_token = Some(token.into());
        self
    }

    /// Assembles the GET URL for this query
    pub fn query_url(&self) -> String {
        let mut url = format!(
            "{}?borough={}&species={}",
            self.endpoint, self.borough, self.species
        );
        if let Some(token) = &self.app_token {
            url.push_str("&$$app_token=");
            url.push_str(token);
        }
        url
    }

    /// One GET against the dataset. The batch is not paginated; the query
    /// is narrow enough that Socrata returns it whole.
    pub async fn fetch(&self) -> Result<Vec<TreeRecord>> {
        let url = self.query_url();
        log::debug!("fetching tree records from {}", url);

        let resp = HTTP_CLIENT.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(MapError::Fetch(format!("HTTP {}", resp.status())));
        }

        let records: Vec<TreeRecord> = resp.json().await?;
        log::info!(
            "fetched {} tree records for {}/{}",
            records.len(),
            self.borough,
            self.species
        );
        Ok(records)
    }

    /// Spawns the fetch on the tokio runtime and returns a pollable handle,
    /// so a render loop can observe pending/ready/failed instead of
    /// blocking. Must be called from within a runtime.
    pub fn fetch_in_background(&self) -> FetchHandle {
        FetchHandle::spawn(self.clone())
    }
}

/// Observable state of a batch fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }
}

/// Handle to a background batch fetch.
pub struct FetchHandle {
    state: FetchState<Vec<TreeRecord>>,
    task: Option<JoinHandle<Result<Vec<TreeRecord>>>>,
}

impl FetchHandle {
    fn spawn(source: SocrataSource) -> Self {
        let task = tokio::spawn(async move { source.fetch().await });
        Self {
            state: FetchState::Pending,
            task: Some(task),
        }
    }

    /// Non-blocking: folds a finished task into the state and returns it.
    /// Stays `Pending` while the request is in flight.
    pub fn poll(&mut self) -> &FetchState<Vec<TreeRecord>> {
        if let Some(task) = self.task.take() {
            if task.is_finished() {
                self.state = match task.now_or_never() {
                    Some(Ok(Ok(records))) => FetchState::Ready(records),
                    Some(Ok(Err(e))) => {
                        log::warn!("tree record fetch failed: {}", e);
                        FetchState::Failed(e.to_string())
                    }
                    Some(Err(e)) => {
                        log::error!("tree record fetch task panicked: {}", e);
                        FetchState::Failed(format!("fetch task panicked: {}", e))
                    }
                    None => FetchState::Failed("finished fetch task yielded no result".to_string()),
                };
            } else {
                self.task = Some(task);
            }
        }
        &self.state
    }

    pub fn state(&self) -> &FetchState<Vec<TreeRecord>> {
        &self.state
    }

    /// Consumes the handle, returning the records if the fetch succeeded
    pub fn into_records(mut self) -> Option<Vec<TreeRecord>> {
        self.poll();
        match self.state {
            FetchState::Ready(records) => Some(records),
            _ => None,
        }
    }
}
