use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct QueryInput {
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub documents: Option<Vec<String>>,
	#[serde(default)]
	pub items: Option<Vec<ItemInput>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ItemInput {
	Text(String),
	Service(ServiceInput),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceInput {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub summary: Option<String>,
	#[serde(default)]
	pub required_documents: Option<Vec<String>>,
	#[serde(default)]
	pub links: Option<Vec<LinkInput>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkInput {
	#[serde(default)]
	pub label: Option<String>,
	pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
	pub text: String,
	pub required_documents: Option<Vec<String>>,
}
impl Query {
	fn text(text: &str) -> Self {
		Self { text: text.to_string(), required_documents: None }
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryPlan {
	pub queries: Vec<Query>,
	pub strict: bool,
}
impl QueryPlan {
	pub fn texts(&self) -> Vec<&str> {
		self.queries.iter().map(|query| query.text.as_str()).collect()
	}
}

/// Selects the query source and matching mode for `input`.
///
/// Precedence is `items`, then `documents`, then `message`; the first source that yields at
/// least one non-blank query wins. Matching is strict whenever the caller sent `items` or
/// `documents` at all, even if they yielded nothing.
pub fn extract_queries(input: &QueryInput) -> QueryPlan {
	let strict = input.items.is_some() || input.documents.is_some();
	let queries = input
		.items
		.as_deref()
		.map(queries_from_items)
		.filter(|queries| !queries.is_empty())
		.or_else(|| {
			input
				.documents
				.as_deref()
				.map(queries_from_documents)
				.filter(|queries| !queries.is_empty())
		})
		.unwrap_or_else(|| queries_from_message(&input.message));

	QueryPlan { queries, strict }
}

fn queries_from_items(items: &[ItemInput]) -> Vec<Query> {
	items
		.iter()
		.filter_map(|item| match item {
			ItemInput::Text(text) => non_blank(text).map(Query::text),
			ItemInput::Service(service) =>
				service.title.as_deref().and_then(non_blank).map(|title| Query {
					text: title.to_string(),
					required_documents: service
						.required_documents
						.clone()
						.filter(|documents| !documents.is_empty()),
				}),
		})
		.collect()
}

fn queries_from_documents(documents: &[String]) -> Vec<Query> {
	documents.iter().filter_map(|document| non_blank(document)).map(Query::text).collect()
}

fn queries_from_message(message: &str) -> Vec<Query> {
	non_blank(message).map(Query::text).into_iter().collect()
}

fn non_blank(text: &str) -> Option<&str> {
	let trimmed = text.trim();

	if trimmed.is_empty() { None } else { Some(trimmed) }
}
