use clap::Parser;

use civic_mcp::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Args::parse();

	civic_mcp::run(args).await
}
