use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::products::models::{
    CreateProductRequest, ProductPartialUpdate, ProductPriceUpdate, ProductResponse,
};
use crate::modules::products::services::ProductService;

/// Query parameters for listing products
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    pub status: Option<String>,
}

fn default_limit() -> u32 {
    50
}

/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .create_product(request.into_inner().into_dto(None))
        .await?;

    Ok(HttpResponse::Created().json(ProductResponse::from(product)))
}

/// GET /products
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let products = match query.status.as_deref() {
        Some(status) => {
            service
                .list_products_by_status(status, Some(query.limit), Some(query.offset))
                .await?
        }
        None => {
            service
                .list_products(Some(query.limit), Some(query.offset))
                .await?
        }
    };

    let products: Vec<ProductResponse> =
        products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(products))
}

/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let product = service
        .get_product_by_id(product_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with ID {} not found", product_id)))?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// PUT /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update_product(request.into_inner().into_dto(Some(path.into_inner())))
        .await?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// PATCH /products/{id}
pub async fn update_product_partial(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<ProductPartialUpdate>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update_product_partial(path.into_inner(), request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// PATCH /products/{id}/price
pub async fn update_price(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<ProductPriceUpdate>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update_product_price(path.into_inner(), request.price)
        .await?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// DELETE /products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    if !service.delete_product(product_id).await? {
        return Err(AppError::not_found(format!(
            "Product with ID {} not found",
            product_id
        )));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /products/{id}/soft
pub async fn deactivate_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.deactivate_product(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::patch().to(update_product_partial))
            .route("/{id}", web::delete().to(delete_product))
            .route("/{id}/price", web::patch().to(update_price))
            .route("/{id}/soft", web::delete().to(deactivate_product)),
    );
}
