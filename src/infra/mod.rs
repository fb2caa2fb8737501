//! Инфраструктурный слой вокруг реконсилера:
//! - маппинги между формами сервиса и доменом;
//! - конфигурация клиента;
//! - сервис-заглушка с записанными ответами (тесты / replay);
//! - формат записанной сессии.

pub mod config;
pub mod mapping;
pub mod scripted;
pub mod transcript;

pub use config::{ClientConfig, ConfigError, GameLimits, ServiceEndpoint};
pub use mapping::*;
pub use scripted::ScriptedGameService;
pub use transcript::{Transcript, TranscriptGame, TranscriptStep};
