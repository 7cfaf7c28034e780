mod config;
mod error;
mod leads;
mod services;
mod store;

use crate::config::Config;
use crate::store::LeadStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // The store is loaded once and only read afterwards.
    let store = match LeadStore::load(&config).await {
        Ok(store) => web::Data::new(store),
        Err(e) => {
            error!("Failed to load leads: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    info!("Server running at {}", config.url());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(services::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host.as_str(), config.port))?.run().await
}
