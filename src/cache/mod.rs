//! Estruturas de cache do histórico de rotas.
//!
//! Cada usuário tem duas estruturas: um cache LRU limitado com as rotas
//! pesquisadas recentemente e um contador ilimitado de frequência por
//! rota. As duas compartilham a mesma chave normalizada de rota.

mod frequency;
mod lru;

pub use frequency::FrequencyTracker;
pub use lru::{RecencyCache, DEFAULT_CAPACITY};
