use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::{get, post},
    serve, Json, Router,
};
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::application::order_service::{OrderCreateRequest, OrderService};
use crate::application::product_service::ProductService;
use crate::application::response::{OrderResponse, ProductResponse};
use crate::errors::AppError;
use cafe_types::ports::{OrderRepository, ProductRepository};

#[derive(Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: String,
}

struct AppState<P: ProductRepository, O: OrderRepository> {
    products: Arc<ProductService<P>>,
    orders: Arc<OrderService<P, O>>,
}

impl<P: ProductRepository, O: OrderRepository> Clone for AppState<P, O> {
    fn clone(&self) -> Self {
        Self {
            products: self.products.clone(),
            orders: self.orders.clone(),
        }
    }
}

pub struct HttpServer<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    state: AppState<P, O>,
    pub config: HttpServerConfig,
}

impl<P, O> HttpServer<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub async fn new(
        products: ProductService<P>,
        orders: OrderService<P, O>,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            state: AppState {
                products: Arc::new(products),
                orders: Arc::new(orders),
            },
            config,
        })
    }

    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        Router::new()
            .route("/health", get(health))
            .route(
                "/api/v1/products/selling",
                get(get_selling_products::<P, O>),
            )
            .route("/api/v1/orders/new", post(create_order::<P, O>))
            .fallback(not_found)
            .layer(trace_layer)
            .with_state(self.state.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}

async fn get_selling_products<P, O>(
    State(state): State<AppState<P, O>>,
) -> Result<Json<Vec<ProductResponse>>, AppError>
where
    P: ProductRepository,
    O: OrderRepository,
{
    let products = state.products.get_selling_products().await?;
    Ok(Json(products))
}

async fn create_order<P, O>(
    State(state): State<AppState<P, O>>,
    Json(payload): Json<OrderCreateRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), AppError>
where
    P: ProductRepository,
    O: OrderRepository,
{
    let order = state.orders.create_order(payload, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
