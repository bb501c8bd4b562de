mod product;
mod product_dto;
mod product_requests;

pub use product::{
    Product, ProductStatus, DESCRIPTION_MAX_LEN, MAX_PRICE_INTEGER_DIGITS, MAX_PRICE_SCALE,
    NAME_MAX_LEN,
};
pub use product_dto::{ProductDto, ProductPatch};
pub use product_requests::{
    CreateProductRequest, ProductPartialUpdate, ProductPriceUpdate, ProductResponse,
};
