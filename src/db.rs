use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};

use crate::config::Settings;
use crate::error::StartupError;

pub(crate) type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

// `category` is matched byte for byte, hence the binary collation.
const CREATE_FOOD_NUTRITION: &str = "\
CREATE TABLE IF NOT EXISTS food_nutrition (
    id INTEGER NOT NULL AUTO_INCREMENT,
    name TEXT,
    category VARCHAR(255) COLLATE utf8mb4_bin,
    image_url TEXT,
    calories TEXT,
    protein TEXT,
    total_fat TEXT,
    saturated_fat TEXT,
    monounsaturated_fat TEXT,
    polyunsaturated_fat TEXT,
    cholesterol TEXT,
    sodium TEXT,
    potassium TEXT,
    carbohydrates TEXT,
    dietary_fiber TEXT,
    sugars TEXT,
    PRIMARY KEY (id),
    INDEX ix_food_nutrition_id (id),
    INDEX ix_food_nutrition_name (name(255))
) DEFAULT CHARSET = utf8mb4";

/// Builds the pool. Size falls back to the r2d2 default when unset.
pub(crate) fn build_pool(settings: &Settings) -> Result<DbPool, StartupError> {
    let manager = ConnectionManager::<MysqlConnection>::new(settings.database_url.as_str());
    let mut builder = r2d2::Pool::builder();
    if let Some(size) = settings.database_pool_size {
        builder = builder.max_size(size);
    }
    Ok(builder.build(manager)?)
}

pub(crate) fn create_schema(conn: &mut MysqlConnection) -> QueryResult<()> {
    diesel::sql_query(CREATE_FOOD_NUTRITION).execute(conn)?;
    Ok(())
}

/// Makes sure `food_nutrition` exists. Safe to run on every boot.
pub(crate) fn init_schema(pool: &DbPool) -> Result<(), StartupError> {
    let mut conn = pool.get()?;
    create_schema(&mut conn)?;
    log::info!("food_nutrition table ready");
    Ok(())
}
