//! Histórico de rotas por usuário.
//!
//! Este módulo orquestra o cache de recência e o contador de frequência
//! de cada identidade, persistindo ambos através da capability de
//! armazenamento injetada.

mod store;

pub use store::{HistoryStore, HistoryViews};
