use url::form_urlencoded;

use crate::{
	CANONICAL_ORIGIN, CanonicalItem, Link, PORTAL_SEARCH_LINK_LABEL, SEARCH_PORTAL_QUERY_PARAM,
	SEARCH_PORTAL_URL,
};

pub fn normalize_url(raw: Option<&str>) -> Option<String> {
	let value = raw?.trim();

	if value.is_empty() {
		return None;
	}
	if value.starts_with("http://") || value.starts_with("https://") {
		return Some(value.to_string());
	}
	if value.starts_with("//") {
		return Some(format!("https:{value}"));
	}
	if value.starts_with('/') {
		return Some(format!("{CANONICAL_ORIGIN}{value}"));
	}

	Some(format!("{CANONICAL_ORIGIN}/{value}"))
}

pub fn portal_search_url(query_text: &str) -> String {
	let encoded: String = form_urlencoded::byte_serialize(query_text.as_bytes()).collect();

	format!("{SEARCH_PORTAL_URL}?{SEARCH_PORTAL_QUERY_PARAM}={encoded}")
}

pub fn ensure_links(mut item: CanonicalItem, query_text: &str) -> CanonicalItem {
	if item.has_links() {
		return item;
	}

	item.links = Some(vec![Link::new(PORTAL_SEARCH_LINK_LABEL, portal_search_url(query_text))]);

	item
}
