use std::sync::Arc;

use anyhow::Context;
use salvo::conn::rustls::{Keycert, RustlsConfig};
use salvo::prelude::*;
use salvo::server::ServerHandle;
use tokio::signal;
use tracing::info;

mod hoops;
mod models;
mod routers;

mod core;
mod infrastructure;
mod interface;

use crate::core::services::NewsGateway;
use crate::infrastructure::external::GNewsAdapter;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls crypto provider"))?;
    crate::infrastructure::config::init();
    let config = crate::infrastructure::config::get();

    let _guard = crate::infrastructure::log::init(&config.log)?;
    tracing::info!("log level: {}", &config.log.filter_level);

    let adapter = GNewsAdapter::new(&config.gnews).context("failed to build upstream client")?;
    info!(upstream = ?config.gnews, "news gateway configured");
    let service = routers::service(NewsGateway::new(Arc::new(adapter)));

    let listen_addr = &config.listen_addr;
    info!("📖 Open API Page: /scalar on {}", listen_addr);
    if let Some(tls) = &config.tls {
        let cert = std::fs::read(&tls.cert).with_context(|| format!("cert file not found: {}", tls.cert))?;
        let key = std::fs::read(&tls.key).with_context(|| format!("key file not found: {}", tls.key))?;
        let rustls = RustlsConfig::new(Keycert::new().cert(cert).key(key));
        info!("🔄 listen on https://{}", listen_addr);
        let acceptor = TcpListener::new(listen_addr.as_str()).rustls(rustls).bind().await;
        let server = Server::new(acceptor);
        tokio::spawn(shutdown_signal(server.handle()));
        server.serve(service).await;
    } else {
        info!("🔄 listen on http://{}", listen_addr);
        let acceptor = TcpListener::new(listen_addr.as_str()).bind().await;
        let server = Server::new(acceptor);
        tokio::spawn(shutdown_signal(server.handle()));
        server.serve(service).await;
    }
    Ok(())
}

async fn shutdown_signal(handle: ServerHandle) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("ctrl_c signal received"),
        _ = terminate => info!("terminate signal received"),
    }
    handle.stop_graceful(std::time::Duration::from_secs(60));
}
