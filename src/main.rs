use dotenvy::dotenv;
use mealbox::{
    api::{AppState, server},
    config::{
        database,
        seed::{builtin_seed_menu, load_seed_menu},
        settings::Settings,
    },
    core::{seed, upload},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Read settings
    let settings = Settings::from_env()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 4. Open the database and create missing tables
    let db = database::connect(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the starter menu on an empty database
    let seed_menu = match &settings.menu_seed_path {
        Some(path) => load_seed_menu(path),
        None => builtin_seed_menu(),
    }
    .inspect_err(|e| error!("Failed to load seed menu: {}", e))?;
    seed::seed_menu_if_empty(&db, &seed_menu)
        .await
        .inspect_err(|e| error!("Failed to seed menu: {}", e))?;

    // 6. Make sure the upload directory exists
    upload::ensure_upload_dir(&settings.upload_dir)
        .await
        .inspect_err(|e| error!("Failed to create upload directory: {}", e))?;

    // 7. Serve
    let port = settings.port;
    server::run_server(AppState::new(db, settings), port).await
}
