//! Внешний API клиента.
//!
//! Здесь описываются:
//! - запросы к сервису (commands.rs);
//! - формы сервиса на проводе (dto.rs);
//! - DTO для слоя представления (queries.rs);
//! - ошибки (errors.rs) - то, что видит UI.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
