//! Connections to the user store and the session store.

use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig};

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies require HTTPS, which local debug builds do not serve
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            config.session_inactivity_days,
        )));

    tracing::info!("Connected to session store");

    Ok(session)
}
