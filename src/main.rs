#[tokio::main]
async fn main() {
    // Config errors surface before the subscriber is installed.
    if let Err(e) = triage_lib::run().await {
        eprintln!("{} failed: {e}", triage_lib::config::APP_NAME);
        std::process::exit(1);
    }
}
