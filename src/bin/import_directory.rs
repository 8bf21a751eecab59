//! Loads companies and consultants from a JSON export into the directory database.
//!
//! Usage: `import_directory <file.json>`

use std::{env, fs};

use dotenvy::dotenv;

use saaspertise::db::establish_connection_pool;
use saaspertise::models::config::ServerConfig;
use saaspertise::repository::DieselRepository;
use saaspertise::services::directory_import::{DirectoryExport, import_directory};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(path) = env::args().nth(1) else {
        log::error!("Usage: import_directory <file.json>");
        std::process::exit(1);
    };

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let export = match fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|text| {
            serde_json::from_str::<DirectoryExport>(&text).map_err(|e| e.to_string())
        }) {
        Ok(export) => export,
        Err(err) => {
            log::error!("Failed to read {path}: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url, 1) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match import_directory(&repo, export) {
        Ok(summary) => log::info!(
            "Imported {} companies, {} consultants, {} testimonials, {} case studies and {} portfolio items ({} skipped)",
            summary.companies,
            summary.consultants,
            summary.testimonials,
            summary.case_studies,
            summary.portfolio_items,
            summary.skipped
        ),
        Err(err) => {
            log::error!("Import failed: {err}");
            std::process::exit(1);
        }
    }
}
