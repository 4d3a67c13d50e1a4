use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use tessera_accounts::config::AccountsConfig;
use tessera_accounts::router::build_router;
use tessera_accounts::state::AppState;
use tessera_accounts_migration::Migrator;

#[tokio::main]
async fn main() {
    tessera_core::tracing::init_tracing();

    let config = AccountsConfig::from_env().expect("invalid accounts configuration");

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
        info!("migrations applied");
    }

    let state = AppState {
        db,
        reinstate_policy: config.reinstate_policy,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
