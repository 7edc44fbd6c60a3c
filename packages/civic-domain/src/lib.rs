pub mod item;
pub mod link;
pub mod query;
pub mod record;
pub mod relevance;
pub mod reply;
pub mod text;

pub use item::{CanonicalItem, Link, MatchKey};
pub use query::{ItemInput, LinkInput, Query, QueryInput, QueryPlan, ServiceInput};

pub const CANONICAL_ORIGIN: &str = "https://www.gov.kr";
pub const SEARCH_PORTAL_URL: &str = "https://www.gov.kr/search";
pub const SEARCH_PORTAL_QUERY_PARAM: &str = "srhQuery";

pub const FALLBACK_TITLE: &str = "정부 서비스";
pub const PORTAL_LINK_LABEL: &str = "정부24 바로가기";
pub const PORTAL_SEARCH_LINK_LABEL: &str = "정부24 검색";
