//! Network dataset loading (local files + remote fetch with cache).
//!
//! Datasets are JSON documents listing nodes (id, coordinates, prevalence,
//! population, optional state grouping) and roads (endpoint ids, measured
//! distance). They can be read from disk or fetched once over HTTP into a
//! local cache, then validated into a [`RoadNetwork`].

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::graph::{NetworkError, RoadNetwork};

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetNode {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub prevalence: f64,
    pub population: u64,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRoad {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkDataset {
    pub nodes: Vec<DatasetNode>,
    pub roads: Vec<DatasetRoad>,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    Http(reqwest::Error),
    Parse(serde_json::Error),
    Network(NetworkError),
}

impl From<io::Error> for DatasetError {
    fn from(err: io::Error) -> Self {
        DatasetError::Io(err)
    }
}

impl From<reqwest::Error> for DatasetError {
    fn from(err: reqwest::Error) -> Self {
        DatasetError::Http(err)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse(err)
    }
}

impl From<NetworkError> for DatasetError {
    fn from(err: NetworkError) -> Self {
        DatasetError::Network(err)
    }
}

#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub url: String,
    pub data_root: PathBuf,
    pub timeout_secs: u64,
}

impl DatasetConfig {
    pub fn new(url: impl Into<String>, data_root: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            data_root: data_root.into(),
            timeout_secs: 10,
        }
    }

    fn cache_file_name(&self) -> String {
        self.url
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("network.json")
            .to_string()
    }
}

impl NetworkDataset {
    pub fn from_reader(reader: impl io::Read) -> Result<Self, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Fetch and parse the dataset directly, without caching.
    pub fn fetch(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let dataset = client
            .get(&config.url)
            .send()?
            .error_for_status()?
            .json::<NetworkDataset>()?;

        Ok(dataset)
    }

    /// Load from the local cache under `data_root`, downloading once if the
    /// cached copy is missing.
    pub fn ensure(config: &DatasetConfig) -> Result<Self, DatasetError> {
        fs::create_dir_all(&config.data_root)?;

        let cached = config.data_root.join(config.cache_file_name());
        if !cached.exists() {
            info!(url = %config.url, "downloading network dataset");
            download_json(config, &cached)?;
        }

        debug!(path = %cached.display(), "loading network dataset");
        Self::from_path(&cached)
    }

    /// Ids of all nodes grouped under `state`.
    pub fn node_ids_in_state(&self, state: &str) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|node| node.state.as_deref() == Some(state))
            .map(|node| node.id.as_str())
            .collect()
    }

    /// Validate the records into an immutable road network.
    pub fn into_network(self) -> Result<RoadNetwork, NetworkError> {
        let mut builder = RoadNetwork::builder();

        for node in self.nodes {
            builder = builder.node(node.id, (node.lat, node.lon), node.prevalence, node.population);
        }
        for road in self.roads {
            builder = builder.road(road.from, road.to, road.distance_km);
        }

        builder.build()
    }
}

fn download_json(config: &DatasetConfig, dest: &Path) -> Result<(), DatasetError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let response = client.get(&config.url).send()?.error_for_status()?;
    let bytes = response.bytes()?;

    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    writer.write_all(&bytes)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;

    Ok(())
}
