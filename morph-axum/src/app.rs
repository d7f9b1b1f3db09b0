use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use morph_core::Resizer;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::MorphAxumState;

#[derive(Clone)]
pub struct AxumApp {
    pub resizer: Arc<Resizer>,
    pub router: Router<()>,
}

impl AxumApp {
    pub fn new(resizer: Resizer) -> Self {
        let state = MorphAxumState::new(resizer);
        let resizer = Arc::clone(&state.resizer);

        let router = Router::new()
            .route("/health", get(routes::health))
            .route("/", get(routes::resize_root))
            .route("/{*key}", get(routes::resize))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            );

        Self { resizer, router }
    }

    pub async fn listen<A>(self, addr: A) -> anyhow::Result<()>
    where
        A: ToSocketAddrs,
    {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "morph listening");
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

pub fn axum(resizer: Resizer) -> AxumApp {
    AxumApp::new(resizer)
}
