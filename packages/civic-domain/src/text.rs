use std::sync::LazyLock;

use regex::Regex;

static TAG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"<[^>]*>").ok());

// Decoded in order, so `&amp;lt;` ends up as `<`.
const ENTITIES: [(&str, &str); 5] =
	[("&amp;", "&"), ("&lt;", "<"), ("&gt;", ">"), ("&quot;", "\""), ("&#39;", "'")];

pub fn sanitize(raw: Option<&str>) -> String {
	let Some(raw) = raw else { return String::new() };
	let mut text = match TAG_PATTERN.as_ref() {
		Some(pattern) => pattern.replace_all(raw, "").into_owned(),
		None => raw.to_string(),
	};

	for (entity, literal) in ENTITIES {
		if text.contains(entity) {
			text = text.replace(entity, literal);
		}
	}

	text.trim().to_string()
}
