use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use color_eyre::Result;
use rmcp::{
	ErrorData, ServerHandler,
	handler::server::router::tool::ToolRouter,
	model::{CallToolResult, JsonObject, ServerCapabilities, ServerInfo},
	transport::streamable_http_server::{
		StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
	},
};
use serde_json::Value;
use tokio::net::TcpListener;

use civic_domain::{ItemInput, QueryInput, ServiceInput};
use civic_service::{CivicService, ResolveResponse};

pub const TOOL_SERVICES_RESOLVE: &str = "civic_services_resolve";

#[derive(Clone)]
struct CivicMcp {
	service: CivicService,
	tool_router: ToolRouter<Self>,
}
impl CivicMcp {
	fn new(service: CivicService) -> Self {
		Self { service, tool_router: Self::tool_router() }
	}
}

#[rmcp::tool_router]
impl CivicMcp {
	#[rmcp::tool(
		name = "civic_services_resolve",
		description = "Find government services (Gov24) matching a civic request, a list of required documents, or known service items. Returns a reply message and the matched services with links.",
		input_schema = services_resolve_schema()
	)]
	async fn civic_services_resolve(
		&self,
		params: JsonObject,
	) -> Result<CallToolResult, ErrorData> {
		let input = parse_query_input(params)?;
		let response = self.service.respond(&input).await;

		tool_result(&response)
	}
}

#[rmcp::tool_handler]
impl ServerHandler for CivicMcp {
	fn get_info(&self) -> ServerInfo {
		ServerInfo {
			instructions: Some(
				"Resolves Korean civic-service requests into Gov24 service records with links."
					.to_string(),
			),
			capabilities: ServerCapabilities::builder().enable_tools().build(),
			..Default::default()
		}
	}
}

pub async fn serve_mcp(bind_addr: SocketAddr, service: CivicService) -> Result<()> {
	let session_manager: Arc<LocalSessionManager> = Default::default();
	let mcp_service = StreamableHttpService::new(
		move || Ok(CivicMcp::new(service.clone())),
		session_manager,
		StreamableHttpServerConfig::default(),
	);
	let router = Router::new().fallback_service(mcp_service);
	let listener = TcpListener::bind(bind_addr).await?;

	tracing::info!(%bind_addr, "MCP server listening.");

	axum::serve(listener, router).await?;

	Ok(())
}

pub fn parse_query_input(mut params: JsonObject) -> Result<QueryInput, ErrorData> {
	let message = take_required_string(&mut params, "message")?;
	let documents = take_documents(&mut params)?;
	let items = take_items(&mut params)?;

	Ok(QueryInput { message, documents, items })
}

pub fn tool_result(response: &ResolveResponse) -> Result<CallToolResult, ErrorData> {
	let payload = serde_json::to_value(response).map_err(|err| {
		ErrorData::internal_error(format!("Failed to encode resolve response: {err}"), None)
	})?;

	if response.no_results {
		Ok(CallToolResult::structured_error(payload))
	} else {
		Ok(CallToolResult::structured(payload))
	}
}

fn take_required_string(params: &mut JsonObject, key: &str) -> Result<String, ErrorData> {
	let value = params
		.remove(key)
		.ok_or_else(|| ErrorData::invalid_params(format!("{key} is required."), None))?;
	let text = value
		.as_str()
		.ok_or_else(|| ErrorData::invalid_params(format!("{key} must be a string."), None))?
		.trim();

	if text.is_empty() {
		return Err(ErrorData::invalid_params(format!("{key} must be non-empty."), None));
	}

	Ok(text.to_string())
}

fn take_documents(params: &mut JsonObject) -> Result<Option<Vec<String>>, ErrorData> {
	let Some(values) = take_optional_array(params, "documents")? else { return Ok(None) };
	let documents = values
		.into_iter()
		.map(|value| match value {
			Value::String(text) => Ok(text),
			_ => Err(ErrorData::invalid_params("documents must contain only strings.", None)),
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(Some(documents))
}

fn take_items(params: &mut JsonObject) -> Result<Option<Vec<ItemInput>>, ErrorData> {
	let Some(values) = take_optional_array(params, "items")? else { return Ok(None) };
	let items = values
		.into_iter()
		.map(|value| match value {
			Value::String(text) => Ok(ItemInput::Text(text)),
			Value::Object(_) => serde_json::from_value::<ServiceInput>(value)
				.map(ItemInput::Service)
				.map_err(|err| ErrorData::invalid_params(format!("Invalid item: {err}"), None)),
			_ => Err(ErrorData::invalid_params("items must contain strings or objects.", None)),
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(Some(items))
}

fn take_optional_array(
	params: &mut JsonObject,
	key: &str,
) -> Result<Option<Vec<Value>>, ErrorData> {
	match params.remove(key) {
		None | Some(Value::Null) => Ok(None),
		Some(Value::Array(values)) => Ok(Some(values)),
		Some(_) => Err(ErrorData::invalid_params(format!("{key} must be an array."), None)),
	}
}

fn services_resolve_schema() -> Arc<JsonObject> {
	Arc::new(rmcp::object!({
		"type": "object",
		"additionalProperties": false,
		"required": ["message"],
		"properties": {
			"message": {
				"type": "string",
				"minLength": 1,
				"description": "The user's request in natural language."
			},
			"documents": {
				"type": "array",
				"items": { "type": "string" },
				"description": "Names of documents the user needs, one query each."
			},
			"items": {
				"type": "array",
				"description": "Known services, one query each. Takes precedence over documents.",
				"items": {
					"anyOf": [
						{ "type": "string" },
						{
							"type": "object",
							"required": ["title"],
							"properties": {
								"id": { "type": "string" },
								"title": { "type": "string" },
								"summary": { "type": "string" },
								"required_documents": {
									"type": "array",
									"items": { "type": "string" }
								},
								"links": {
									"type": "array",
									"items": {
										"type": "object",
										"required": ["url"],
										"properties": {
											"label": { "type": "string" },
											"url": { "type": "string" }
										}
									}
								}
							}
						}
					]
				}
			}
		}
	}))
}
