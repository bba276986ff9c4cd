//! HTTP server setup and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::repository::{
    MemoryMenuItemRepository, MemoryOrderRepository, MemoryPaymentMethodRepository,
    MemoryRestaurantRepository, MemoryUserRepository,
};
use crate::seed::seed_database;
use crate::service::{
    AuthService, CatalogService, OrderService, PaymentMethodService, UserService,
};
use anyhow::Result;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub jwt_manager: JwtManager,
    pub auth_service: Arc<AuthService<MemoryUserRepository>>,
    pub user_service: Arc<UserService<MemoryUserRepository>>,
    pub catalog_service: Arc<CatalogService<MemoryRestaurantRepository, MemoryMenuItemRepository>>,
    pub order_service: Arc<
        OrderService<MemoryOrderRepository, MemoryMenuItemRepository, MemoryRestaurantRepository>,
    >,
    pub payment_method_service: Arc<PaymentMethodService<MemoryPaymentMethodRepository>>,
    pub user_repo: Arc<MemoryUserRepository>,
    pub restaurant_repo: Arc<MemoryRestaurantRepository>,
    pub menu_item_repo: Arc<MemoryMenuItemRepository>,
    pub payment_method_repo: Arc<MemoryPaymentMethodRepository>,
}

impl AppState {
    /// Wire up repositories and services from configuration
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let jwt_manager = JwtManager::new(config.jwt.clone());

        let user_repo = Arc::new(MemoryUserRepository::new());
        let restaurant_repo = Arc::new(MemoryRestaurantRepository::new());
        let menu_item_repo = Arc::new(MemoryMenuItemRepository::new());
        let order_repo = Arc::new(MemoryOrderRepository::new());
        let payment_method_repo = Arc::new(MemoryPaymentMethodRepository::new());

        let auth_service = Arc::new(AuthService::new(user_repo.clone(), jwt_manager.clone()));
        let user_service = Arc::new(UserService::new(user_repo.clone()));
        let catalog_service = Arc::new(CatalogService::new(
            restaurant_repo.clone(),
            menu_item_repo.clone(),
        ));
        let order_service = Arc::new(OrderService::new(
            order_repo,
            menu_item_repo.clone(),
            restaurant_repo.clone(),
        ));
        let payment_method_service =
            Arc::new(PaymentMethodService::new(payment_method_repo.clone()));

        Self {
            config,
            jwt_manager,
            auth_service,
            user_service,
            catalog_service,
            order_service,
            payment_method_service,
            user_repo,
            restaurant_repo,
            menu_item_repo,
            payment_method_repo,
        }
    }

    /// Seed reference data if enabled and the store is empty
    pub async fn seed(&self) -> crate::error::Result<()> {
        seed_database(
            self.user_repo.as_ref(),
            self.restaurant_repo.as_ref(),
            self.menu_item_repo.as_ref(),
            self.payment_method_repo.as_ref(),
        )
        .await
    }
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/", get(api::health::root))
        .route("/api/health", get(api::health::health))
        // Auth
        .route("/api/auth/register", post(api::auth::register))
        .route("/api/auth/login", post(api::auth::login))
        .route("/api/auth/me", get(api::auth::me))
        // Users
        .route("/api/users", get(api::user::list))
        // Restaurants
        .route("/api/restaurants", get(api::restaurant::list))
        .route("/api/restaurants/{id}", get(api::restaurant::get))
        .route("/api/restaurants/{id}/menu", get(api::restaurant::menu))
        // Orders
        .route(
            "/api/orders",
            post(api::order::create).get(api::order::list),
        )
        .route("/api/orders/{id}", get(api::order::get))
        .route("/api/orders/{id}/checkout", post(api::order::checkout))
        .route("/api/orders/{id}/cancel", put(api::order::cancel))
        // Payment methods
        .route(
            "/api/payment-methods",
            get(api::payment_method::list).post(api::payment_method::create),
        )
        .route(
            "/api/payment-methods/{id}",
            put(api::payment_method::update).delete(api::payment_method::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(config);

    if state.config.seed.enabled {
        state.seed().await?;
    }

    let http_addr = state.config.http_addr();
    let app = build_router(state);

    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
