use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayline_directions_stub::{AppState, canned::Catalog, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayline_directions_stub=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = Catalog::embedded().expect("parse embedded place catalog");
    tracing::info!("loaded {} canned places", catalog.place_count());

    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("WAYLINE_STUB_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .expect("valid socket address");
    tracing::info!("starting directions stub on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
