#[tokio::main]
async fn main() {
    if let Err(e) = hemascan_lib::run().await {
        eprintln!("hemascan: {e}");
        std::process::exit(1);
    }
}
