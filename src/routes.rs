use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment};
use crate::handlers::{auth, budget, catalog, dashboard, public};
use crate::middleware::{require_admin, require_sign_in};
use crate::state::AppState;

/// Build the full router: explicit routes first, then static assets from the
/// home directory and the budgets directory, in that order.
pub fn app(state: AppState) -> Router {
    let assets = &state.config.assets;
    let static_files =
        ServeDir::new(&assets.home_dir).fallback(ServeDir::new(&assets.budgets_dir));

    Router::new()
        // Public
        .route_service("/", ServeFile::new(&assets.index_file))
        .route("/hi", get(public::hi))
        .route("/health", get(public::health))
        // Accounts and catalog
        .nest("/api/v1/auth", auth_routes(&state))
        // Resources
        .merge(dashboard_routes())
        .merge(budget_routes())
        .fallback_service(static_files)
        // Global middleware, outermost first
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config)),
        )
        .with_state(state)
}

fn auth_routes(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/register", post(auth::register_post))
        .route("/login", post(auth::login_post))
        .route("/forgot-password", post(auth::forgot_password))
        .route("/addVendor", post(catalog::add_vendor))
        .route("/addEmployee", post(catalog::add_employee))
        .route("/addItem", post(catalog::add_item))
        .route("/addCustomer", post(catalog::add_customer))
        .route("/new-sales-order", post(catalog::new_sales_order))
        .route("/displayvendor", get(catalog::display_vendor))
        .route("/displaycustomer", get(catalog::display_customer))
        .route("/displayitem", get(catalog::display_item));

    let signed_in = Router::new()
        .route("/user-auth", get(auth::user_auth))
        .route_layer(from_fn_with_state(state.clone(), require_sign_in));

    // Layers run outermost-last: sign-in is checked before admin standing
    let admin = Router::new()
        .route("/test", get(auth::test))
        .route("/admin-auth", get(auth::admin_auth))
        .route_layer(from_fn_with_state(state.clone(), require_admin))
        .route_layer(from_fn_with_state(state.clone(), require_sign_in));

    public.merge(signed_in).merge(admin)
}

fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/api/dashboard", post(dashboard::post))
}

fn budget_routes() -> Router<AppState> {
    Router::new()
        .route("/Budgets/budget.html", get(budget::budget_list))
        .route("/budget-submit-form", post(budget::budget_submit))
        .route("/api/v1/budgets/:id", delete(budget::budget_delete))
}

/// Permissive only in development when no origins are configured
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let configured = &config.security.cors_origins;
    if configured.is_empty() {
        if config.environment == Environment::Development {
            return CorsLayer::permissive();
        }
        tracing::warn!("No CORS origins configured, cross-origin requests are refused");
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
