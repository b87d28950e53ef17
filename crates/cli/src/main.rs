//! ParseBench CLI entry point.

#[tokio::main]
async fn main() {
    if let Err(e) = parsebench_cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
