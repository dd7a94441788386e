//! Cache LRU limitado das rotas pesquisadas recentemente.

use std::num::NonZeroUsize;

use lru::LruCache;

/// Capacidade padrão do cache de recência.
pub const DEFAULT_CAPACITY: usize = 10;

/// Cache limitado com descarte da entrada menos recentemente usada.
///
/// A ordem de recência é total e reflete exatamente a sequência de
/// chamadas de `set`/`get`: a chave tocada por último é a mais fresca e
/// a menos recentemente tocada é a próxima candidata a descarte. O
/// tamanho nunca excede a capacidade fixada na construção.
pub struct RecencyCache<V> {
    cache: LruCache<String, V>,
}

impl<V> RecencyCache<V> {
    /// Cria um cache com a capacidade indicada.
    ///
    /// Capacidade zero é ajustada para 1.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            cache: LruCache::new(cap),
        }
    }

    /// Busca uma entrada, promovendo-a para mais recentemente usada.
    ///
    /// Retorna `None` sem efeito colateral se a chave não existir.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.cache.get(key)
    }

    /// Espia uma entrada sem alterar a ordem de recência.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.cache.peek(key)
    }

    /// Insere ou sobrescreve uma entrada, tornando-a a mais recente.
    ///
    /// Um `set` muda o tamanho em no máximo +1; quando a inserção excede
    /// a capacidade, exatamente a entrada menos recentemente usada é
    /// descartada.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.cache.put(key.into(), value);
    }

    /// Verifica presença sem alterar a ordem.
    pub fn contains(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    /// Número atual de entradas.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Capacidade máxima.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Remove todas as entradas.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Exporta as entradas em ordem da mais recente para a menos recente.
    pub fn to_entries(&self) -> Vec<(String, V)>
    where
        V: Clone,
    {
        self.cache
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Reconstrói um cache a partir de entradas mais-recente-primeiro.
    ///
    /// As inserções são reaplicadas da mais antiga para a mais nova, de
    /// modo que a ordem de recência restaurada seja idêntica à
    /// serializada. Reaplicar na ordem da lista inverteria a prioridade
    /// de descarte sem nenhum erro visível.
    pub fn from_entries(entries: Vec<(String, V)>, capacity: usize) -> Self {
        let mut cache = Self::new(capacity);
        for (key, value) in entries.into_iter().rev() {
            cache.set(key, value);
        }
        cache
    }
}

impl<V> Default for RecencyCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
