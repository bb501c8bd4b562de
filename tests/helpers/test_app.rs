// Builds the full HTTP application over in-memory repositories

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};

use pluto::middleware::{json_error_handler, ErrorHandler, RequestId};
use pluto::modules;
use pluto::products::{InMemoryProductRepository, ProductService};
use pluto::users::{InMemoryUserRepository, UserService};

/// Application wired exactly like the binary, minus the database pool
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    let product_service = Arc::new(ProductService::new(Arc::new(
        InMemoryProductRepository::new(),
    )));

    App::new()
        .wrap(ErrorHandler)
        .wrap(RequestId)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(user_service))
        .app_data(web::Data::new(product_service))
        .configure(modules::configure)
}
