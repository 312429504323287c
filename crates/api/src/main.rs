#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    // The store handle is created here, once, and injected into the router;
    // request handlers never open connections themselves.
    let config = stockroom_store::StoreConfig::from_env();
    let store = stockroom_store::connect(&config)?;

    let app = stockroom_api::app::build_app(store);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8081);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
