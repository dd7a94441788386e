//! Armazenamento chave-valor do Trajeto.
//!
//! O histórico é persistido através de uma capability injetada no
//! [`HistoryStore`](crate::history::HistoryStore), nunca alcançada como
//! recurso global. Há dois backends: memória (testes e uso efêmero) e
//! SQLite (durável).

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::TrajetoResult;

/// Capability de armazenamento chave-valor orientado a texto.
///
/// Não há garantia de atomicidade entre chaves distintas.
pub trait KeyValueStorage {
    /// Lê o valor de uma chave, se presente.
    fn get(&self, key: &str) -> TrajetoResult<Option<String>>;

    /// Grava o valor de uma chave, sobrescrevendo se já existir.
    fn set(&mut self, key: &str, value: &str) -> TrajetoResult<()>;

    /// Remove uma chave; sem efeito se ausente.
    fn remove(&mut self, key: &str) -> TrajetoResult<()>;
}
