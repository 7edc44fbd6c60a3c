pub mod resolve;

mod error;

pub use error::{Error, Result};
pub use resolve::{NO_RESULTS_REPLY, ResolveResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use civic_config::Config;
use civic_domain::CanonicalItem;
use civic_providers::SearchClient;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One external search per query. Implementations never fail: an unusable response is an
/// empty match list.
pub trait SearchProvider
where
	Self: Send + Sync,
{
	fn search<'a>(&'a self, query: &'a str, strict: bool) -> BoxFuture<'a, Vec<CanonicalItem>>;
}

#[derive(Clone)]
pub struct CivicService {
	pub provider: Arc<dyn SearchProvider>,
}
impl CivicService {
	pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
		Self { provider }
	}

	pub fn from_config(cfg: &Config) -> Result<Self> {
		let client = SearchClient::new(&cfg.search)?;

		Ok(Self::new(Arc::new(client)))
	}
}

impl SearchProvider for SearchClient {
	fn search<'a>(&'a self, query: &'a str, strict: bool) -> BoxFuture<'a, Vec<CanonicalItem>> {
		Box::pin(SearchClient::search(self, query, strict))
	}
}
