mod config;
mod handler;
mod page;


use anyhow::Context;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{error, info};
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::handler::{handle_request, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = ServiceConfig::load()?;
    let addr = config.bind_addr;
    info!(
        "report file: {}, out-of-range policy: {:?}",
        config.report_path.display(),
        config.out_of_range
    );
    let state = AppState::new(config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("stress-service listening on http://{}", addr);

    loop {
        let (stream, peer) = listener.accept().await?;
        let state = state.clone();

        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            if let Err(e) = http1::Builder::new()
                .serve_connection(io, service_fn(move |req| handle_request(state.clone(), req)))
                .await
            {
                error!("connection error from {}: {:?}", peer, e);
            }
        });
    }
}
