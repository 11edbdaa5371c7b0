use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::database::seed;
use activities::{web, ActivityStore, Config, StartupError};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Config::from_env()).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    let activities = match &config.seed_path {
        Some(path) => {
            info!(path = %path.display(), "Loading activities from seed file");
            seed::load_seed_file(path)?
        }
        None => seed::default_activities(),
    };
    let store = ActivityStore::new(activities);
    if store.is_empty().await {
        warn!("Activity registry is empty");
    }
    info!(activities = store.len().await, "Activity registry ready");

    let app = web::build_router(store, &config.static_dir);

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_bind_addr();
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(&fallback)
                .await
                .map_err(|source| StartupError::Bind {
                    addr: fallback,
                    source,
                })?
        }
    };

    let bound_addr = listener.local_addr().map_err(StartupError::Serve)?;
    info!(
        build = env!("ACTIVITIES_BUILD_ID"),
        "Server listening on http://{}", bound_addr
    );
    info!("Open http://{}/ to see the activities", bound_addr);

    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
