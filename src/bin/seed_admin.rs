use careers_admin_backend::{
    config::Config,
    database::pool::{create_pool, run_migrations},
    AppState,
};
use clap::Parser;
use tracing::info;

/// Creates the initial super-admin account together with its default
/// notification preferences and system settings. Safe to re-run; an
/// existing account is left untouched.
#[derive(Parser, Debug)]
#[command(name = "seed_admin", about = "Seed the initial super-admin account")]
struct Cli {
    /// Admin email address
    #[arg(long)]
    email: String,
    /// Admin password (stored as an Argon2 hash)
    #[arg(long)]
    password: String,
    /// Display name for the account
    #[arg(long, default_value = "Admin User")]
    name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    let state = AppState::new(pool, config)?;

    let Some(admin) = state
        .auth_service
        .create_admin(&cli.email, &cli.password, &cli.name, "super-admin")
        .await?
    else {
        info!(email = %cli.email, "admin already exists, skipping");
        return Ok(());
    };

    state.settings_service.seed_defaults(admin.id).await?;
    info!(email = %admin.email, "super-admin created with default settings");

    Ok(())
}
