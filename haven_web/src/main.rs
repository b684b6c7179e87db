use std::error::Error;
use std::net::SocketAddr;

use axum_server::tls_rustls::RustlsConfig;
use haven::HavenConfig;
use tracing::{error, info, Level};

mod routes;

#[tokio::main]
async fn main() {
    match HavenConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = serve(&config).await {
                error!("application error: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("application error: {}", error);
        }
    }
}

async fn serve(config: &HavenConfig) -> Result<(), Box<dyn Error>> {
    let addr: SocketAddr = config.server.addr.parse()?;
    let app = routes::router();
    info!("serving the Azure Haven site on {}", addr);
    match &config.server.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.certificate, &tls.private_key).await?;
            axum_server::bind_rustls(addr, rustls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
        }
    }
    Ok(())
}
