use actix_web::web;

pub mod health;
pub mod products;
pub mod users;

/// Register every HTTP route of the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(users::configure)
        .configure(products::configure);
}
