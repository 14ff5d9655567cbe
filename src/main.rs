use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use veronica::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .layer(session)
        .with_state(AppState::new(db, &config));

    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
