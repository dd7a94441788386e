//! # Trajeto
//!
//! Histórico de rotas de metrô com recência e frequência por usuário.
//!
//! O Trajeto mantém, para cada identidade autenticada, um cache LRU
//! limitado com as rotas pesquisadas recentemente e um contador
//! persistente de frequência por rota, ambos gravados de forma síncrona
//! em armazenamento chave-valor durável. O cálculo de rotas, a busca de
//! estações e a emissão de credenciais são colaboradores externos.
//!
//! ## Módulos
//!
//! - [`cli`] - Interface de linha de comando
//! - [`cache`] - Cache de recência e contador de frequência
//! - [`history`] - Orquestração do histórico por identidade
//! - [`storage`] - Capability de armazenamento chave-valor
//! - [`types`] - Tipos compartilhados

pub mod cache;
pub mod cli;
pub mod history;
pub mod storage;
pub mod types;

pub use types::config::Config;
pub use types::errors::{TrajetoError, TrajetoResult};
