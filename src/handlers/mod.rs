pub mod health;
pub mod openapi;
pub mod redirect;

pub use health::health_handler;
pub use openapi::openapi_handler;
pub use redirect::redirect_handler;
