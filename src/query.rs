use diesel::mysql::Mysql;
use diesel::prelude::*;
use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Binary, Bool, Unsigned};

use crate::models::{NewNutritionRecord, NutritionRecord};
use crate::schema::food_nutrition;

diesel::define_sql_function! {
    #[sql_name = "LAST_INSERT_ID"]
    fn last_insert_id() -> Unsigned<BigInt>;
}

pub(crate) fn insert_record(
    conn: &mut MysqlConnection,
    new_name: &str,
) -> QueryResult<NutritionRecord> {
    let new_id = conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let insert = diesel::insert_into(food_nutrition::table)
            .values(NewNutritionRecord { name: new_name });
        log::debug!("{}", diesel::debug_query::<Mysql, _>(&insert));
        insert.execute(conn)?;
        diesel::select(last_insert_id()).get_result::<u64>(conn)
    })?;
    //committed, now reload the row so every column comes back as stored
    let new_id = i32::try_from(new_id)
        .map_err(|e| diesel::result::Error::DeserializationError(Box::new(e)))?;
    food_nutrition::table
        .find(new_id)
        .select(NutritionRecord::as_select())
        .first(conn)
}

pub(crate) fn find_record(
    conn: &mut MysqlConnection,
    item_id: i32,
) -> QueryResult<Option<NutritionRecord>> {
    let query = food_nutrition::table
        .find(item_id)
        .select(NutritionRecord::as_select());
    log::debug!("{}", diesel::debug_query::<Mysql, _>(&query));
    query.first(conn).optional()
}

pub(crate) fn list_records(
    conn: &mut MysqlConnection,
    skip: i64,
    limit: i64,
) -> QueryResult<Vec<NutritionRecord>> {
    let query = food_nutrition::table
        .order(food_nutrition::id.asc())
        .limit(limit)
        .offset(skip)
        .select(NutritionRecord::as_select());
    log::debug!("{}", diesel::debug_query::<Mysql, _>(&query));
    query.load(conn)
}

pub(crate) fn find_by_category(
    conn: &mut MysqlConnection,
    wanted: &str,
) -> QueryResult<Vec<NutritionRecord>> {
    // utf8mb4_bin still pads trailing spaces, so compare raw bytes as well
    let query = food_nutrition::table
        .filter(food_nutrition::category.eq(wanted))
        .filter(
            sql::<Bool>("CAST(`food_nutrition`.`category` AS BINARY) = ")
                .bind::<Binary, _>(wanted.as_bytes()),
        )
        .order(food_nutrition::id.asc())
        .select(NutritionRecord::as_select());
    log::debug!("{}", diesel::debug_query::<Mysql, _>(&query));
    query.load(conn)
}
