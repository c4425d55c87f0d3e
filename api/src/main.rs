use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use clap::Parser;
use mealplanner_api::{
    application::http::server::http_server::{router, state},
    args::Args,
    logger::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let ip: IpAddr = args
        .server
        .host
        .parse()
        .with_context(|| format!("invalid HOST {:?}, expected an IP address", args.server.host))?;
    let addr = SocketAddr::new(ip, args.server.port);

    let state = state(args.clone()).await?;
    let router = router(state)?;

    info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
