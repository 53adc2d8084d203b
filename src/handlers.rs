use actix_web::{error::InternalError, get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::error::{ApiError, ErrorBody};
use crate::models::{NON_VEG, VEG};
use crate::store::NutritionStore;

type Store = web::Data<dyn NutritionStore>;

#[derive(Debug, Deserialize)]
pub(crate) struct CreateParams {
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    10
}

#[post("/items/")]
async fn create_item(
    params: web::Query<CreateParams>,
    store: Store,
) -> Result<HttpResponse, ApiError> {
    let name = params.into_inner().name;
    let item = web::block(move || store.create(&name))
        .await?
        .map_err(ApiError::persistence("Error creating item"))?;
    log::info!("created item {}", item.id);
    Ok(HttpResponse::Ok().json(item))
}

#[get("/items/{item_id}")]
async fn read_item(item_id: web::Path<i64>, store: Store) -> Result<HttpResponse, ApiError> {
    let requested = item_id.into_inner();
    // ids live in an INTEGER column, anything wider cannot exist
    let item_id = i32::try_from(requested).map_err(|_| ApiError::NotFound(requested))?;
    let item = web::block(move || store.find(item_id))
        .await?
        .map_err(ApiError::persistence(format!("Error retrieving item {}", item_id)))?
        .ok_or(ApiError::NotFound(requested))?;
    Ok(HttpResponse::Ok().json(item))
}

#[get("/items/")]
async fn read_items(
    page: web::Query<Pagination>,
    store: Store,
) -> Result<HttpResponse, ApiError> {
    let Pagination { skip, limit } = page.into_inner();
    let items = web::block(move || store.list(skip, limit))
        .await?
        .map_err(ApiError::persistence("Error retrieving items"))?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/items/veg/")]
async fn read_veg_items(store: Store) -> Result<HttpResponse, ApiError> {
    let items = web::block(move || store.by_category(VEG))
        .await?
        .map_err(ApiError::persistence("Error retrieving veg items"))?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/items/non-veg/")]
async fn read_nonveg_items(store: Store) -> Result<HttpResponse, ApiError> {
    let items = web::block(move || store.by_category(NON_VEG))
        .await?
        .map_err(ApiError::persistence("Error retrieving non-veg items"))?;
    Ok(HttpResponse::Ok().json(items))
}

/// Malformed query/path arguments never reach a handler; answer them with 422.
fn unprocessable<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let detail = err.to_string();
    let response = HttpResponse::UnprocessableEntity().json(ErrorBody { detail: &detail });
    InternalError::from_response(err, response).into()
}

/// Registers every route. The category listings go before `/items/{item_id}`.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(unprocessable))
        .app_data(web::PathConfig::default().error_handler(unprocessable))
        .service(read_veg_items)
        .service(read_nonveg_items)
        .service(read_items)
        .service(create_item)
        .service(read_item);
}
