use std::collections::HashSet;

use crate::{
	CanonicalItem, MatchKey,
	record::{RawRecord, has_detail_url, map_record},
};

pub const MAX_MATCHES_PER_QUERY: usize = 1;

pub fn select_matches(records: &[RawRecord], query: &str, strict: bool) -> Vec<CanonicalItem> {
	let eligible: Vec<CanonicalItem> = records
		.iter()
		.filter(|raw| has_detail_url(raw))
		.map(map_record)
		.filter(|item| !item.title.is_empty())
		.collect();
	let needle = query.to_lowercase();
	// Titles are sanitized once by `map_record`; the filter sees the displayed title.
	let mut matches =
		dedup(eligible.iter().filter(|item| item.title.to_lowercase().contains(&needle)));

	if matches.is_empty() && !strict {
		matches = dedup(eligible.iter());
	}

	matches.truncate(MAX_MATCHES_PER_QUERY);

	matches
}

fn dedup<'a>(items: impl Iterator<Item = &'a CanonicalItem>) -> Vec<CanonicalItem> {
	let mut seen: HashSet<MatchKey> = HashSet::new();

	items.filter(|item| seen.insert(item.match_key())).cloned().collect()
}
