use serde_json::{Map, Value};

use crate::{
	CanonicalItem, FALLBACK_TITLE, Link, PORTAL_LINK_LABEL, link::normalize_url, text::sanitize,
};

pub type RawRecord = Map<String, Value>;

// Candidate source fields, highest priority first. Adding a new field variant of the external
// service means adding it to the matching list.
pub const TITLE_FIELDS: [&str; 4] = ["TITLE", "SERVICE_NM", "SVC_NM", "NAME"];
pub const SUMMARY_FIELDS: [&str; 3] = ["CONTENT", "SUMMARY", "DESCRIPTION"];
pub const URL_FIELDS: [&str; 5] = ["GOV24_URL", "DETAIL_URL", "SERVICE_URL", "URL", "LINK"];
pub const ID_FIELDS: [&str; 3] = ["DOCID", "SVC_ID", "ID"];

pub const DETAIL_URL_FIELD: &str = URL_FIELDS[0];

pub fn map_record(raw: &RawRecord) -> CanonicalItem {
	let title = first_sanitized(raw, &TITLE_FIELDS).unwrap_or_else(|| FALLBACK_TITLE.to_string());
	let summary = first_sanitized(raw, &SUMMARY_FIELDS);
	let links = first_raw(raw, &URL_FIELDS)
		.and_then(|url| normalize_url(Some(url.as_str())))
		.map(|url| vec![Link::new(PORTAL_LINK_LABEL, url)]);
	let id = first_raw(raw, &ID_FIELDS);

	CanonicalItem { id, title, summary, required_documents: None, links }
}

pub fn has_detail_url(raw: &RawRecord) -> bool {
	field_text(raw, DETAIL_URL_FIELD).is_some_and(|value| !value.trim().is_empty())
}

fn first_sanitized(raw: &RawRecord, fields: &[&str]) -> Option<String> {
	fields
		.iter()
		.map(|field| sanitize(field_text(raw, field).as_deref()))
		.find(|value| !value.is_empty())
}

fn first_raw(raw: &RawRecord, fields: &[&str]) -> Option<String> {
	fields
		.iter()
		.filter_map(|field| field_text(raw, field))
		.map(|value| value.trim().to_string())
		.find(|value| !value.is_empty())
}

fn field_text(raw: &RawRecord, field: &str) -> Option<String> {
	match raw.get(field)? {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		_ => None,
	}
}
