use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	pub mcp_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Search {
	/// External search endpoint. Receives one POST per query.
	pub endpoint: String,
	/// Sent as `listCount`; the number of raw records requested per query.
	#[serde(default = "default_list_count")]
	pub list_count: u32,
	/// Optional. No client-side timeout is applied when absent.
	pub timeout_ms: Option<u64>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_list_count() -> u32 {
	10
}
