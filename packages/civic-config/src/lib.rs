mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Search, Service};

use std::{fs, net::SocketAddr, path::Path};

pub const MAX_LIST_COUNT: u32 = 100;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } =>
			Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.mcp_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.mcp_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.mcp_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.mcp_bind must be a valid socket address.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.search.endpoint.is_empty() {
		return Err(Error::Validation {
			message: "search.endpoint must be non-empty.".to_string(),
		});
	}
	if !(cfg.search.endpoint.starts_with("http://") || cfg.search.endpoint.starts_with("https://"))
	{
		return Err(Error::Validation {
			message: "search.endpoint must be an http:// or https:// URL.".to_string(),
		});
	}
	if !(1..=MAX_LIST_COUNT).contains(&cfg.search.list_count) {
		return Err(Error::Validation {
			message: format!("search.list_count must be in the range 1-{MAX_LIST_COUNT}."),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.mcp_bind = cfg.service.mcp_bind.trim().to_string();
	cfg.search.endpoint = cfg.search.endpoint.trim().to_string();

	if cfg.search.timeout_ms == Some(0) {
		cfg.search.timeout_ms = None;
	}
}
