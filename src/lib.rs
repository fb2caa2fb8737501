//! Клиент карточной игры WordMatch.
//!
//! Вся логика игры живёт на удалённом сервисе. Здесь:
//! - доменная модель клиентского кэша сессии (`domain`);
//! - реконсилер, который применяет ответы сервиса к сессии (`engine`);
//! - формы сервиса и DTO для слоя представления (`api`);
//! - маппинги, конфиг, сервис-заглушка (`infra`);
//! - драйвер сессии поверх абстрактного сервиса (`client`).

pub mod api;
pub mod client;
pub mod domain;
pub mod engine;
pub mod infra;

pub use client::{GameClient, GameService};
pub use domain::{AttemptRecord, Card, GameSession, SessionPhase};
pub use engine::{apply_move_response, try_apply_move_response, MoveMessage, MoveResponse};
