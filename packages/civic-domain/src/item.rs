use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
	pub label: String,
	pub url: String,
}
impl Link {
	pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
		Self { label: label.into(), url: url.into() }
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalItem {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub summary: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub required_documents: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub links: Option<Vec<Link>>,
}
impl CanonicalItem {
	pub fn first_link_url(&self) -> Option<&str> {
		self.links.as_deref().and_then(|links| links.first()).map(|link| link.url.as_str())
	}

	pub fn match_key(&self) -> MatchKey {
		MatchKey {
			title: self.title.clone(),
			first_link_url: self.first_link_url().unwrap_or_default().to_string(),
		}
	}

	pub fn has_links(&self) -> bool {
		self.links.as_ref().is_some_and(|links| !links.is_empty())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchKey {
	pub title: String,
	pub first_link_url: String,
}
