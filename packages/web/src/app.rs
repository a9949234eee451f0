//! Shared state and the route table.

use std::sync::Arc;

use api::Settings;
use axum::{
    extract::State,
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use store::Catalog;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};

use crate::extract::CurrentUser;
use crate::handlers::{auth, notes, pages, shop};

/// Everything handlers share. The catalog and settings never change after startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog: Arc<Catalog>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: SqlitePool, catalog: Catalog, settings: Settings) -> Self {
        Self {
            pool,
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        }
    }
}

/// Routes without the session layer.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/healthz", get(pages::healthz))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/logout", get(auth::logout))
        .route("/emergency", get(notes::list).post(notes::create))
        .route(
            "/emergency/update/{sno}",
            get(notes::edit_page).post(notes::update),
        )
        .route(
            "/emergency/delete/{sno}",
            get(notes::delete).post(notes::delete),
        )
        .route("/essentials", get(pages::essentials).post(pages::essentials))
        .route("/credits", get(pages::credits))
        .route(
            "/buy/{product_id}",
            get(shop::to_essentials).post(shop::buy),
        );

    // Older links address each product by its own path
    for product in state.catalog.iter() {
        let id = product.id;
        router = router.route(
            &product.legacy_path(),
            get(shop::to_essentials).post(
                move |State(state): State<AppState>, CurrentUser(user): CurrentUser| {
                    shop::buy_product(state, user, id)
                },
            ),
        );
    }

    router
        .fallback(pages::not_found)
        .with_state(state)
}

/// The full application: routes, sessions and request tracing.
pub fn app<Store>(state: AppState, session_store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(state.settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd);

    router(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}
