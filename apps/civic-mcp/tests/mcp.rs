use rmcp::model::JsonObject;
use serde_json::Value;

use civic_domain::{CanonicalItem, ItemInput, Link};
use civic_mcp::server::{parse_query_input, tool_result};
use civic_service::{NO_RESULTS_REPLY, ResolveResponse};

fn params(value: Value) -> JsonObject {
	value.as_object().cloned().expect("Params must be an object.")
}

#[test]
fn parses_all_input_shapes() {
	let input = parse_query_input(params(serde_json::json!({
		"message": " 이사했어요 ",
		"documents": ["주민등록등본"],
		"items": ["전입신고", { "title": "확정일자", "required_documents": ["임대차계약서"] }]
	})))
	.expect("Params must parse.");

	assert_eq!(input.message, "이사했어요");
	assert_eq!(input.documents, Some(vec!["주민등록등본".to_string()]));

	let items = input.items.expect("items");

	assert_eq!(items[0], ItemInput::Text("전입신고".to_string()));
	let ItemInput::Service(service) = &items[1] else { panic!("expected a structured item") };

	assert_eq!(service.title.as_deref(), Some("확정일자"));
	assert_eq!(service.required_documents, Some(vec!["임대차계약서".to_string()]));
}

#[test]
fn null_sources_are_absent() {
	let input = parse_query_input(params(serde_json::json!({
		"message": "여권",
		"documents": null,
		"items": null
	})))
	.expect("Params must parse.");

	assert_eq!(input.documents, None);
	assert!(input.items.is_none());
}

#[test]
fn rejects_missing_or_blank_message() {
	assert!(parse_query_input(params(serde_json::json!({ "documents": ["a"] }))).is_err());
	assert!(parse_query_input(params(serde_json::json!({ "message": "  " }))).is_err());
	assert!(parse_query_input(params(serde_json::json!({ "message": 3 }))).is_err());
}

#[test]
fn rejects_malformed_sources() {
	assert!(
		parse_query_input(params(serde_json::json!({ "message": "a", "documents": "b" }))).is_err()
	);
	assert!(
		parse_query_input(params(serde_json::json!({ "message": "a", "documents": [1] }))).is_err()
	);
	assert!(
		parse_query_input(params(serde_json::json!({ "message": "a", "items": [true] }))).is_err()
	);
}

#[test]
fn matches_are_structured_success() {
	let response = ResolveResponse {
		message: "등본".to_string(),
		reply: "reply".to_string(),
		matches: vec![CanonicalItem {
			title: "주민등록등본 발급".to_string(),
			links: Some(vec![Link::new("정부24 바로가기", "https://www.gov.kr/svc/123")]),
			..Default::default()
		}],
		no_results: false,
	};
	let result = tool_result(&response).expect("Result must encode.");

	assert_ne!(result.is_error, Some(true));
	assert_eq!(
		result.structured_content.as_ref().and_then(|content| content.get("reply")),
		Some(&Value::String("reply".to_string()))
	);
}

#[test]
fn empty_resolution_is_flagged() {
	let response = ResolveResponse {
		message: "서류".to_string(),
		reply: NO_RESULTS_REPLY.to_string(),
		matches: Vec::new(),
		no_results: true,
	};
	let result = tool_result(&response).expect("Result must encode.");

	assert_eq!(result.is_error, Some(true));
	assert_eq!(
		result.structured_content,
		Some(serde_json::json!({ "message": "서류", "reply": "검색 결과가 없습니다.", "matches": [] }))
	);
}
