//! Клиентский слой: шов к удалённому сервису и драйвер сессии.

pub mod game_client;
pub mod service;

pub use game_client::GameClient;
pub use service::GameService;
