//! In-process stand-ins for `MysqlStore` used by handler tests.

use std::sync::Mutex;

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::error::StoreError;
use crate::models::NutritionRecord;
use crate::store::NutritionStore;

pub(crate) fn record(id: i32, name: &str, category: Option<&str>) -> NutritionRecord {
    NutritionRecord {
        id,
        name: Some(name.to_string()),
        category: category.map(str::to_string),
        image_url: None,
        calories: None,
        protein: None,
        total_fat: None,
        saturated_fat: None,
        monounsaturated_fat: None,
        polyunsaturated_fat: None,
        cholesterol: None,
        sodium: None,
        potassium: None,
        carbohydrates: None,
        dietary_fiber: None,
        sugars: None,
    }
}

/// Keeps rows in id order, like `list_records` does against MySQL.
#[derive(Default)]
pub(crate) struct MemoryStore {
    rows: Mutex<Vec<NutritionRecord>>,
}

impl MemoryStore {
    pub(crate) fn with_records(mut rows: Vec<NutritionRecord>) -> Self {
        rows.sort_by_key(|r| r.id);
        MemoryStore {
            rows: Mutex::new(rows),
        }
    }
}

fn rejected(what: &str) -> StoreError {
    StoreError::Query(DieselError::DatabaseError(
        DatabaseErrorKind::Unknown,
        Box::new(format!("You have an error in your SQL syntax near '{}'", what)),
    ))
}

impl NutritionStore for MemoryStore {
    fn create(&self, name: &str) -> Result<NutritionRecord, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map_or(1, |r| r.id + 1);
        let row = record(id, name, None);
        rows.push(row.clone());
        Ok(row)
    }

    fn find(&self, item_id: i32) -> Result<Option<NutritionRecord>, StoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.id == item_id).cloned())
    }

    fn list(&self, skip: i64, limit: i64) -> Result<Vec<NutritionRecord>, StoreError> {
        // MySQL refuses negative LIMIT/OFFSET outright
        let skip = usize::try_from(skip).map_err(|_| rejected("OFFSET"))?;
        let limit = usize::try_from(limit).map_err(|_| rejected("LIMIT"))?;
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().skip(skip).take(limit).cloned().collect())
    }

    fn by_category(&self, category: &str) -> Result<Vec<NutritionRecord>, StoreError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }
}

/// Every call fails the way an unreachable server would.
pub(crate) struct FailingStore;

impl FailingStore {
    fn refused() -> StoreError {
        StoreError::Query(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("Can't connect to MySQL server on 'db' (111 \"Connection refused\")".to_string()),
        ))
    }
}

impl NutritionStore for FailingStore {
    fn create(&self, _name: &str) -> Result<NutritionRecord, StoreError> {
        Err(Self::refused())
    }

    fn find(&self, _item_id: i32) -> Result<Option<NutritionRecord>, StoreError> {
        Err(Self::refused())
    }

    fn list(&self, _skip: i64, _limit: i64) -> Result<Vec<NutritionRecord>, StoreError> {
        Err(Self::refused())
    }

    fn by_category(&self, _category: &str) -> Result<Vec<NutritionRecord>, StoreError> {
        Err(Self::refused())
    }
}
