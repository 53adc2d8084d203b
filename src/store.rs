use crate::db::DbPool;
use crate::error::StoreError;
use crate::models::NutritionRecord;
use crate::query;

/// Persistence seen from the handlers. Calls are blocking and must run on
/// `web::block`.
pub(crate) trait NutritionStore: Send + Sync {
    fn create(&self, name: &str) -> Result<NutritionRecord, StoreError>;
    fn find(&self, item_id: i32) -> Result<Option<NutritionRecord>, StoreError>;
    fn list(&self, skip: i64, limit: i64) -> Result<Vec<NutritionRecord>, StoreError>;
    fn by_category(&self, category: &str) -> Result<Vec<NutritionRecord>, StoreError>;
}

/// MySQL-backed store. Every call checks out its own connection, which goes
/// back to the pool when it drops, whether the query succeeded or not.
pub(crate) struct MysqlStore {
    pool: DbPool,
}

impl MysqlStore {
    pub(crate) fn new(pool: DbPool) -> Self {
        MysqlStore { pool }
    }
}

impl NutritionStore for MysqlStore {
    fn create(&self, name: &str) -> Result<NutritionRecord, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(query::insert_record(&mut conn, name)?)
    }

    fn find(&self, item_id: i32) -> Result<Option<NutritionRecord>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(query::find_record(&mut conn, item_id)?)
    }

    fn list(&self, skip: i64, limit: i64) -> Result<Vec<NutritionRecord>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(query::list_records(&mut conn, skip, limit)?)
    }

    fn by_category(&self, category: &str) -> Result<Vec<NutritionRecord>, StoreError> {
        let mut conn = self.pool.get()?;
        Ok(query::find_by_category(&mut conn, category)?)
    }
}
