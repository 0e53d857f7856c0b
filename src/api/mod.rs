pub mod auth;
pub mod common;
pub mod cors;
pub mod db;
pub mod health;
pub mod proxy;
pub mod setup;

pub use common::route_not_found;
pub use db::handle_db;
pub use health::health;
pub use proxy::proxy_wp;
pub use setup::setup_db;
