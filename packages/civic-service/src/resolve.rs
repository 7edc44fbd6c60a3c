use std::collections::HashSet;

use serde::Serialize;

use crate::CivicService;
use civic_domain::{CanonicalItem, MatchKey, QueryInput, link, query, reply};

pub const NO_RESULTS_REPLY: &str = "검색 결과가 없습니다.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolveResponse {
	pub message: String,
	pub reply: String,
	pub matches: Vec<CanonicalItem>,
	#[serde(skip)]
	pub no_results: bool,
}

impl CivicService {
	pub async fn resolve(&self, input: &QueryInput) -> Vec<CanonicalItem> {
		let plan = query::extract_queries(input);
		let mut seen: HashSet<MatchKey> = HashSet::new();
		let mut merged = Vec::new();

		for planned in &plan.queries {
			for mut item in self.provider.search(&planned.text, plan.strict).await {
				if !seen.insert(item.match_key()) {
					continue;
				}

				if item.required_documents.is_none() {
					item.required_documents = planned.required_documents.clone();
				}

				merged.push(item);
			}
		}

		tracing::info!(
			queries = plan.queries.len(),
			strict = plan.strict,
			matches = merged.len(),
			"Resolved service query."
		);

		merged
			.into_iter()
			.map(|item| {
				let title = item.title.clone();

				link::ensure_links(item, &title)
			})
			.collect()
	}

	pub async fn respond(&self, input: &QueryInput) -> ResolveResponse {
		let matches = self.resolve(input).await;

		if matches.is_empty() {
			return ResolveResponse {
				message: input.message.clone(),
				reply: NO_RESULTS_REPLY.to_string(),
				matches,
				no_results: true,
			};
		}

		ResolveResponse {
			message: input.message.clone(),
			reply: reply::compose(&input.message, &matches),
			matches,
			no_results: false,
		}
	}
}
