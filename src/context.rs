use std::sync::Arc;

use crate::api::{ApiClient, CartApi, DeliveryApi, OrdersApi};
use crate::auth::{AuthStateProviderTrait, SessionAuthProvider};
use crate::cart::{CartService, CartServiceTrait, LocalCartRepository, RemoteCartRepository};
use crate::db;
use crate::delivery::DeliveryService;
use crate::errors::Result;
use crate::orders::OrderService;
use crate::storage::AppStorageRepository;

/// Everything the app needs, wired once at startup.
pub struct ServiceContext {
    pub auth_provider: Arc<SessionAuthProvider>,
    pub api_client: ApiClient,

    // Services
    pub cart_service: Arc<dyn CartServiceTrait>,
    pub delivery_service: Arc<DeliveryService>,
    pub order_service: Arc<OrderService>,
}

impl ServiceContext {
    pub fn cart_service(&self) -> Arc<dyn CartServiceTrait> {
        Arc::clone(&self.cart_service)
    }

    /// Flips the session into or out of authenticated mode and keeps the
    /// API client's bearer token in step with it.
    pub fn set_session(&self, token: Option<String>) {
        self.auth_provider.set_authenticated(token.is_some());
        self.api_client.set_session_token(token);
    }
}

/// Builds the service graph: local database, writer actor, HTTP client, and
/// the cart/delivery/order services on top of them.
///
/// Must run on the app's async runtime; the writer actor is spawned here.
pub async fn initialize_context(app_data_dir: &str, api_base_url: &str) -> Result<ServiceContext> {
    let db_path = db::init(app_data_dir)?;
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let storage = Arc::new(AppStorageRepository::new(pool, writer));
    let auth_provider = Arc::new(SessionAuthProvider::default());
    let api_client = ApiClient::new(api_base_url);

    let local_repository = Arc::new(LocalCartRepository::new(storage));
    let remote_repository = Arc::new(RemoteCartRepository::new(CartApi::new(api_client.clone())));

    let cart_service: Arc<dyn CartServiceTrait> = Arc::new(CartService::new(
        local_repository,
        remote_repository,
        auth_provider.clone() as Arc<dyn AuthStateProviderTrait>,
    ));

    let delivery_service = Arc::new(DeliveryService::new(Arc::new(DeliveryApi::new(
        api_client.clone(),
    ))));

    let order_service = Arc::new(OrderService::new(
        Arc::new(OrdersApi::new(api_client.clone())),
        cart_service.clone(),
    ));

    Ok(ServiceContext {
        auth_provider,
        api_client,
        cart_service,
        delivery_service,
        order_service,
    })
}
