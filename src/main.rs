use std::process::ExitCode;

use service_d::config::Settings;
use service_d::telemetry::{get_subscriber, init_subscriber};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber("service-d", "info", std::io::stdout);
    if let Err(e) = init_subscriber(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(func = "Settings::from_env()", error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = match service_d::app(&settings) {
        Ok(app) => app,
        Err(e) => {
            error!(func = e.operation(), error = %e, "Failed to build application");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(&settings.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(func = "TcpListener::bind()", error = %e, addr = %settings.listen_addr, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %settings.listen_addr, "Server starting");

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        error!(func = "axum::serve()", error = %e, "Server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
