//! `userapp` 바이너리 진입점.

use userapp_cli::interface::cli::{AppComposition, Cli};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match userapp_cli::run(&composition, action).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("(error) {err:#}");
            std::process::exit(1);
        }
    }
}
