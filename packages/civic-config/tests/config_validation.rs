use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use civic_config::Error;

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let table = root
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Sample config must include the requested section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be after the Unix epoch.")
		.as_nanos();
	let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("civic_config_test_{nanos}_{seq}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn expect_validation(payload: String, needle: &str) {
	let path = write_temp_config(payload);
	let result = civic_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	match result {
		Err(Error::Validation { message }) =>
			assert!(message.contains(needle), "Unexpected validation message: {message}"),
		other => panic!("Expected validation error containing {needle}, got {other:?}"),
	}
}

#[test]
fn sample_config_loads() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let cfg = civic_config::load(&path).expect("Sample config must load.");

	fs::remove_file(&path).expect("Failed to remove test config.");

	assert_eq!(cfg.service.mcp_bind, "127.0.0.1:8787");
	assert_eq!(cfg.search.list_count, 10);
	assert_eq!(cfg.search.timeout_ms, Some(10_000));
}

#[test]
fn defaults_apply_when_optional_keys_are_missing() {
	let cfg = civic_config::parse(
		"[service]\nmcp_bind = \"127.0.0.1:9000\"\n\n[search]\nendpoint = \" https://example.go.kr/api \"\n",
	)
	.expect("Minimal config must parse.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.search.list_count, 10);
	assert_eq!(cfg.search.timeout_ms, None);
	assert_eq!(cfg.search.endpoint, "https://example.go.kr/api");
}

#[test]
fn zero_timeout_means_no_timeout() {
	let cfg = civic_config::parse(&sample_with("search", "timeout_ms", Value::Integer(0)))
		.expect("Config must parse.");

	assert_eq!(cfg.search.timeout_ms, None);
}

#[test]
fn rejects_invalid_mcp_bind() {
	expect_validation(
		sample_with("service", "mcp_bind", Value::String("localhost".to_string())),
		"service.mcp_bind",
	);
}

#[test]
fn rejects_blank_log_level() {
	expect_validation(
		sample_with("service", "log_level", Value::String("  ".to_string())),
		"service.log_level must be non-empty",
	);
}

#[test]
fn rejects_blank_endpoint() {
	expect_validation(
		sample_with("search", "endpoint", Value::String(" ".to_string())),
		"search.endpoint must be non-empty",
	);
}

#[test]
fn rejects_non_http_endpoint() {
	expect_validation(
		sample_with("search", "endpoint", Value::String("ftp://example.go.kr".to_string())),
		"search.endpoint",
	);
}

#[test]
fn rejects_out_of_range_list_count() {
	expect_validation(sample_with("search", "list_count", Value::Integer(0)), "search.list_count");
	expect_validation(
		sample_with("search", "list_count", Value::Integer(101)),
		"search.list_count",
	);
}

#[test]
fn missing_file_is_read_error() {
	let path = env::temp_dir().join("civic_config_test_missing.toml");
	let err = civic_config::load(&path).expect_err("Missing file must fail.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn parse_errors_carry_the_path() {
	let path = write_temp_config("[service\n".to_string());
	let err = civic_config::load(&path).expect_err("Broken TOML must fail.");

	fs::remove_file(&path).expect("Failed to remove test config.");

	match err {
		Error::ParseConfig { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("Expected parse error, got {other:?}"),
	}
}
