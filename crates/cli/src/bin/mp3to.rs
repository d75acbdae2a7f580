use clap::Parser;
use tracing::error;

use audioconv_cli::{init_tracing, run, Mp3ToCli};

#[tokio::main]
async fn main() {
    let cli = Mp3ToCli::parse();
    init_tracing();

    match run(cli.into()).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}
