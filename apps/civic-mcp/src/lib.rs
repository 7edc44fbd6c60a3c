pub mod server;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use civic_service::CivicService;

#[derive(Debug, Parser)]
#[command(
	version = civic_cli::VERSION,
	rename_all = "kebab",
	styles = civic_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> Result<()> {
	let config = civic_config::load(&args.config)?;

	init_tracing(&config);

	let bind_addr: SocketAddr = config
		.service
		.mcp_bind
		.parse()
		.map_err(|err| eyre::eyre!("service.mcp_bind must be a valid socket address: {err}"))?;
	let service = CivicService::from_config(&config)?;

	server::serve_mcp(bind_addr, service).await
}

fn init_tracing(config: &civic_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
