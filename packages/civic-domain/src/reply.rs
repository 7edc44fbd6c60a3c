use crate::CanonicalItem;

pub const NO_MATCH_REPLY: &str = "요청하신 내용과 일치하는 정부 서비스를 찾지 못했습니다.\n\
	필요한 민원이나 서류를 조금 더 구체적으로 알려 주세요. (예: \"주민등록등본 발급\")";
pub const REPLY_HEADER: &str = "요청하신 내용과 관련된 정부 서비스를 찾았습니다.";
pub const REPLY_CLOSING: &str =
	"상황을 조금 더 알려 주시면 필요한 서류와 절차를 더 정확히 안내해 드릴게요.";

// Every line is a fixed template; the caller's message does not change the text.
pub fn compose(_message: &str, items: &[CanonicalItem]) -> String {
	if items.is_empty() {
		return NO_MATCH_REPLY.to_string();
	}

	let mut lines = vec![REPLY_HEADER.to_string()];

	for (index, item) in items.iter().enumerate() {
		lines.push(String::new());
		lines.push(format!("{}. {}", index + 1, item.title));

		if let Some(summary) = item.summary.as_deref() {
			lines.push(format!("   - 안내: {summary}"));
		}
		if let Some(documents) = item.required_documents.as_deref()
			&& !documents.is_empty()
		{
			lines.push(format!("   - 필요 서류: {}", documents.join(", ")));
		}
		if let Some(links) = item.links.as_deref()
			&& !links.is_empty()
		{
			lines.push("   - 바로가기:".to_string());

			for link in links {
				lines.push(format!("     {}: {}", link.label, link.url));
			}
		}
	}

	lines.push(String::new());
	lines.push(REPLY_CLOSING.to_string());

	lines.join("\n")
}
