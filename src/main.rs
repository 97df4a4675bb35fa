use clap::Parser;
use parkfactor_processor::cli::{run, Cli};
use parkfactor_processor::models::ErrorReport;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        // Whole-run failure: emit the error document on stderr and signal
        // a non-zero exit. Per-stadium failures never reach this point.
        let doc = ErrorReport::new(e.to_string());
        match serde_json::to_string_pretty(&doc) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{{\"error\": \"{}\"}}", e),
        }
        std::process::exit(1);
    }
}
