use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};
use careers_admin_backend::{
    config::Config,
    database::pool::{create_pool, run_migrations},
    middleware::cors::cors_layer,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let uploads_dir = config.uploads_dir.clone();
    let origins = config.origins();
    let server_address = config.server_address.clone();
    let app_state = AppState::new(pool, config)?;

    let admin_api = Router::new()
        .route("/api/auth/me", get(routes::auth::me))
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        .route("/api/analytics", get(routes::analytics::get_analytics))
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(routes::jobs::get_job)
                .put(routes::jobs::update_job)
                .delete(routes::jobs::delete_job),
        )
        .route("/api/jobs/:id/toggle", patch(routes::jobs::toggle_job))
        .route(
            "/api/applications",
            get(routes::applications::list_applications),
        )
        .route(
            "/api/applications/:id",
            get(routes::applications::get_application)
                .delete(routes::applications::delete_application),
        )
        .route(
            "/api/applications/:id/status",
            patch(routes::applications::update_application_status),
        )
        .route("/api/contact", get(routes::contact::list_inquiries))
        .route(
            "/api/contact/:id",
            get(routes::contact::get_inquiry).delete(routes::contact::delete_inquiry),
        )
        .route(
            "/api/contact/:id/reply",
            patch(routes::contact::reply_to_inquiry),
        )
        .route(
            "/api/contact/:id/status",
            patch(routes::contact::update_inquiry_status),
        )
        .route(
            "/api/settings/system",
            get(routes::settings::get_system_settings)
                .put(routes::settings::update_system_settings),
        )
        .route(
            "/api/settings/social",
            put(routes::settings::update_social_media),
        )
        .route(
            "/api/settings/notifications",
            get(routes::settings::get_notification_prefs)
                .put(routes::settings::update_notification_prefs),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            careers_admin_backend::middleware::auth::require_admin,
        ));

    let public_api = Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/logout", post(routes::auth::logout))
        .route(
            "/api/jobs/public/active",
            get(routes::jobs::list_public_jobs),
        )
        .route(
            "/api/applications/submit",
            post(routes::applications::submit_application),
        )
        .route("/api/contact/submit", post(routes::contact::submit_inquiry))
        .route(
            "/api/settings/public",
            get(routes::settings::get_public_settings),
        );

    info!("Serving uploads from: {}", uploads_dir);

    let app = admin_api
        .merge(public_api)
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .with_state(app_state)
        .layer(cors_layer(&origins))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));

    let addr: SocketAddr = server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
