//! Backend de armazenamento em memória.

use std::collections::HashMap;

use super::KeyValueStorage;
use crate::TrajetoResult;

/// Armazenamento em memória.
///
/// Duplo de testes e backend efêmero; o conteúdo morre com o processo.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Cria um armazenamento vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de chaves armazenadas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Verifica se está vazio.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> TrajetoResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrajetoResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TrajetoResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
