pub mod catalogs;
mod model_client_http;

pub use model_client_http::HttpModelClient;
