// Data sources for the record set
use doclist_core::Record;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Endpoint serving the full record list
pub const DOCTORS_PATH: &str = "/api/doctors";

/// Failure to obtain the record set
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Invalid record data: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<doclist_core::Error> for FetchError {
    fn from(e: doclist_core::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Something that can produce the full record list
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError>;
}

/// Fetches `GET {base_url}/api/doctors`
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), DOCTORS_PATH);
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        debug!("Fetching records from {}", self.url);
        let response = self.client.get(&self.url).send().await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let records = Record::parse_list(&body)?;
        info!("Fetched {} records from {}", records.len(), self.url);
        Ok(records)
    }
}

/// Reads a JSON array of records from disk on every fetch
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Blocking variant, for callers outside an async context
    pub fn load(&self) -> Result<Vec<Record>, FetchError> {
        let data = std::fs::read(&self.path)?;
        Ok(Record::parse_list(&data)?)
    }
}

impl DataSource for FileSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        let data = tokio::fs::read(&self.path).await?;
        let records = Record::parse_list(&data)?;
        debug!("Loaded {} records from {:?}", records.len(), self.path);
        Ok(records)
    }
}

/// Fixed in-memory record list
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl DataSource for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<Record>, FetchError> {
        Ok(self.records.clone())
    }
}
