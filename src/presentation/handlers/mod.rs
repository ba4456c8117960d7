mod health;
mod index;
mod upload;

pub use health::health_handler;
pub use index::index_handler;
pub use upload::upload_handler;
