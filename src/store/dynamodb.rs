//! DynamoDB record store
//!
//! The SDK client is built once per process and shared by every store
//! instance. There is no teardown; the client lives as long as the process.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::scan::builders::ScanFluentBuilder;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tracing::{debug, info};

use super::codec::{self, Item};
use super::errors::{StoreError, StoreResult};
use super::record::{Attributes, Movie, ID_FIELD};
use super::RecordStore;

// Global static holding the DynamoDB client (shared across stores)
static DYNAMODB_CLIENT: OnceLock<Arc<Client>> = OnceLock::new();

/// Connection overrides for the shared client.
///
/// Only the options of the first store to initialize the client take effect.
#[derive(Debug, Clone, Default)]
pub struct DynamoOptions {
    /// AWS region (falls back to the environment's default chain)
    pub region: Option<String>,
    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local
    pub endpoint_url: Option<String>,
}

/// Record store backed by a DynamoDB table keyed by `id` (type S)
#[derive(Clone)]
pub struct DynamoStore {
    client: Arc<Client>,
    table_name: String,
}

impl DynamoStore {
    /// Create a store on the shared client, initializing it if needed
    pub async fn new(table_name: impl Into<String>, options: &DynamoOptions) -> StoreResult<Self> {
        let client = shared_client(options).await?;
        Ok(Self::with_client(client, table_name))
    }

    /// Create a store on an explicit client
    pub fn with_client(client: Arc<Client>, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &str) -> Item {
        Item::from([(ID_FIELD.to_string(), AttributeValue::S(id.to_string()))])
    }

    /// Run a scan to completion, following `LastEvaluatedKey` across pages
    async fn scan_pages(&self, scan: ScanFluentBuilder) -> StoreResult<Vec<Attributes>> {
        let mut records = Vec::new();
        let mut start_key: Option<Item> = None;
        let mut pages = 0usize;

        loop {
            let output = scan
                .clone()
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| {
                    StoreError::backend(format!("scan failed: {}", DisplayErrorContext(e)))
                })?;
            pages += 1;

            for item in output.items.unwrap_or_default() {
                records.push(codec::from_item(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        debug!(
            table = %self.table_name,
            pages,
            records = records.len(),
            "scan complete"
        );
        Ok(records)
    }
}

/// Returns the process-wide client, building it on first use
async fn shared_client(options: &DynamoOptions) -> StoreResult<Arc<Client>> {
    if let Some(client) = DYNAMODB_CLIENT.get() {
        debug!("Reusing existing DynamoDB client");
        return Ok(client.clone());
    }

    info!("Initializing new DynamoDB client");
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &options.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &options.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let config = loader.load().await;
    let new_client = Arc::new(Client::new(&config));

    match DYNAMODB_CLIENT.set(new_client.clone()) {
        Ok(()) => {
            info!("DynamoDB client initialized");
            Ok(new_client)
        }
        // Another task initialized it first
        Err(_) => DYNAMODB_CLIENT
            .get()
            .cloned()
            .ok_or_else(|| {
                StoreError::backend("DynamoDB client not initialized despite concurrent set")
            }),
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn get(&self, id: &str) -> StoreResult<Option<Movie>> {
        debug!(table = %self.table_name, id, "get_item");
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(id)))
            .send()
            .await
            .map_err(|e| {
                StoreError::backend(format!("get_item failed: {}", DisplayErrorContext(e)))
            })?;

        match output.item {
            Some(item) => Ok(Some(Movie::try_from(codec::from_item(item)?)?)),
            None => Ok(None),
        }
    }

    async fn put(&self, movie: Movie) -> StoreResult<Movie> {
        debug!(table = %self.table_name, id = movie.id(), "put_item");
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(codec::to_item(movie.attributes())))
            .send()
            .await
            .map_err(|e| {
                StoreError::backend(format!("put_item failed: {}", DisplayErrorContext(e)))
            })?;
        Ok(movie)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!(table = %self.table_name, id, "delete_item");
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(Self::key(id)))
            .send()
            .await
            .map_err(|e| {
                StoreError::backend(format!("delete_item failed: {}", DisplayErrorContext(e)))
            })?;
        Ok(())
    }

    async fn scan_all(&self) -> StoreResult<Vec<Movie>> {
        let scan = self.client.scan().table_name(&self.table_name);
        self.scan_pages(scan)
            .await?
            .into_iter()
            .map(Movie::try_from)
            .collect()
    }

    async fn scan_filtered(
        &self,
        field: &str,
        value: &str,
        projection: &[&str],
    ) -> StoreResult<Vec<Attributes>> {
        let mut scan = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("#f = :v")
            .expression_attribute_names("#f", field)
            .expression_attribute_values(":v", AttributeValue::S(value.to_string()));

        if !projection.is_empty() {
            let mut placeholders = Vec::with_capacity(projection.len());
            for (i, name) in projection.iter().enumerate() {
                let placeholder = format!("#p{}", i);
                scan = scan.expression_attribute_names(placeholder.clone(), *name);
                placeholders.push(placeholder);
            }
            scan = scan.projection_expression(placeholders.join(", "));
        }

        self.scan_pages(scan).await
    }
}
