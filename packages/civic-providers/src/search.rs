use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result};
use civic_config::Search;
use civic_domain::{CanonicalItem, record::RawRecord, relevance};

pub const COLLECTION: &str = "IW_SERVICE";
pub const SORT_FIELD: &str = "RANK/DESC,DATE/DESC";

// The endpoint has shipped the result list under either key.
const RESULT_LIST_POINTERS: [&str; 2] = ["/resultList", "/data/resultList"];

#[derive(Clone, Debug)]
pub struct SearchClient {
	client: Client,
	endpoint: String,
	list_count: u32,
}
impl SearchClient {
	pub fn new(cfg: &Search) -> Result<Self> {
		let mut builder = Client::builder();

		if let Some(timeout_ms) = cfg.timeout_ms {
			builder = builder.timeout(Duration::from_millis(timeout_ms));
		}

		Ok(Self {
			client: builder.build()?,
			endpoint: cfg.endpoint.clone(),
			list_count: cfg.list_count,
		})
	}

	pub async fn search(&self, query: &str, strict: bool) -> Vec<CanonicalItem> {
		tracing::debug!(query, strict, "Searching external service.");

		match self.fetch_records(query).await {
			Ok(records) => relevance::select_matches(&records, query, strict),
			Err(err) => {
				tracing::warn!(error = %err, query, "External search failed.");

				Vec::new()
			},
		}
	}

	pub async fn fetch_records(&self, query: &str) -> Result<Vec<RawRecord>> {
		let res = self
			.client
			.post(self.endpoint.as_str())
			.json(&build_payload(query, self.list_count))
			.send()
			.await?;
		let status = res.status();

		if !status.is_success() {
			return Err(Error::Status { status });
		}

		let bytes = res.bytes().await?;
		let json: Value = serde_json::from_slice(&bytes)?;

		Ok(parse_records(&json))
	}
}

pub fn build_payload(query: &str, list_count: u32) -> Value {
	serde_json::json!({
		"query": query,
		"startCount": "0",
		"listCount": list_count,
		"collections": COLLECTION,
		"sortField": SORT_FIELD,
		"docId": "",
	})
}

pub fn parse_records(json: &Value) -> Vec<RawRecord> {
	RESULT_LIST_POINTERS
		.iter()
		.filter_map(|pointer| json.pointer(pointer).and_then(Value::as_array))
		.find(|list| !list.is_empty())
		.map(|list| list.iter().filter_map(|record| record.as_object().cloned()).collect())
		.unwrap_or_default()
}
