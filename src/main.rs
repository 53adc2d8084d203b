use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod query;
mod schema;
mod store;
#[cfg(test)]
mod testing;

use crate::config::Settings;
use crate::error::StartupError;
use crate::store::{MysqlStore, NutritionStore};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env()?;

    // set up database connection pool and make sure the table exists
    let pool = db::build_pool(&settings)?;
    db::init_schema(&pool)?;

    let store: web::Data<dyn NutritionStore> =
        web::Data::from(Arc::new(MysqlStore::new(pool)) as Arc<dyn NutritionStore>);

    log::info!(
        "starting HTTP server at http://{}:{}",
        settings.host,
        settings.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await?;
    Ok(())
}
