//! Orquestração do histórico de rotas por identidade.

use serde::{Deserialize, Serialize};

use crate::cache::{FrequencyTracker, RecencyCache};
use crate::storage::KeyValueStorage;
use crate::types::config::HistoryConfig;
use crate::types::routes::{route_key, RouteRecord};

/// Visões ordenadas do histórico de um usuário.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryViews {
    /// Rotas recentes, da mais recente para a menos recente.
    pub recent: Vec<(String, RouteRecord)>,

    /// Rotas frequentes, da mais visitada para a menos visitada.
    pub frequent: Vec<(String, u64)>,
}

impl HistoryViews {
    /// Visões vazias, retornadas para identidades ausentes.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Armazém do histórico de rotas por identidade.
///
/// Cada operação recebe a identidade explicitamente e opera sobre o
/// namespace derivado dela; identidades distintas nunca observam ou
/// mutam as entradas umas das outras. A persistência é write-through:
/// cada mutação é gravada de forma síncrona antes de retornar.
///
/// O armazém assume um único escritor ativo por identidade. Escritores
/// concorrentes sobre o mesmo namespace resultam em last-write-wins,
/// uma limitação documentada do modelo.
pub struct HistoryStore<S: KeyValueStorage> {
    storage: S,
    config: HistoryConfig,
}

impl<S: KeyValueStorage> HistoryStore<S> {
    /// Cria um armazém com a configuração padrão de histórico.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, HistoryConfig::default())
    }

    /// Cria um armazém com configuração específica.
    pub fn with_config(storage: S, config: HistoryConfig) -> Self {
        Self { storage, config }
    }

    /// Acesso ao armazenamento subjacente.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Registra uma rota pesquisada com sucesso e retorna as visões
    /// atualizadas.
    ///
    /// Sem identidade a operação é um no-op com visões vazias. Estado
    /// persistido ausente ou ilegível é tratado como vazio, e falhas de
    /// gravação são registradas em log sem propagar: nada aqui é fatal.
    pub fn record(&mut self, identity: Option<&str>, route: &RouteRecord) -> HistoryViews {
        let identity = match identity {
            Some(id) => id,
            None => return HistoryViews::empty(),
        };

        let key = route_key(&route.start, &route.end);
        let (recent_key, freq_key) = self.namespace_keys(identity);

        let mut cache = self.load_recency(&recent_key);
        let mut tracker = self.load_frequency(&freq_key);

        cache.set(key.as_str(), route.clone());
        tracker.increment(&key);

        let recent_entries = cache.to_entries();
        self.persist(&recent_key, &recent_entries);
        self.persist(&freq_key, &tracker.to_entries());

        let mut recent = recent_entries;
        recent.truncate(self.config.max_shown);

        HistoryViews {
            recent,
            frequent: tracker.top_n(self.config.max_shown),
        }
    }

    /// Consulta as visões do histórico sem mutar o armazenamento.
    pub fn query(&self, identity: Option<&str>) -> HistoryViews {
        let identity = match identity {
            Some(id) => id,
            None => return HistoryViews::empty(),
        };

        let (recent_key, freq_key) = self.namespace_keys(identity);

        let cache = self.load_recency(&recent_key);
        let tracker = self.load_frequency(&freq_key);

        let mut recent = cache.to_entries();
        recent.truncate(self.config.max_shown);

        HistoryViews {
            recent,
            frequent: tracker.top_n(self.config.max_shown),
        }
    }

    /// Remove o namespace persistido de uma identidade.
    ///
    /// Namespaces de outras identidades não são afetados.
    pub fn reset(&mut self, identity: Option<&str>) {
        let identity = match identity {
            Some(id) => id,
            None => return,
        };

        let (recent_key, freq_key) = self.namespace_keys(identity);

        if let Err(e) = self.storage.remove(&recent_key) {
            tracing::warn!(key = %recent_key, "Falha ao remover rotas recentes: {}", e);
        }
        if let Err(e) = self.storage.remove(&freq_key) {
            tracing::warn!(key = %freq_key, "Falha ao remover contagens: {}", e);
        }
    }

    fn namespace_keys(&self, identity: &str) -> (String, String) {
        (
            format!("{}{}:recent", self.config.namespace_prefix, identity),
            format!("{}{}:freq", self.config.namespace_prefix, identity),
        )
    }

    fn load_recency(&self, key: &str) -> RecencyCache<RouteRecord> {
        match self.load_entries::<Vec<(String, RouteRecord)>>(key) {
            Some(entries) => RecencyCache::from_entries(entries, self.config.capacity),
            None => RecencyCache::new(self.config.capacity),
        }
    }

    fn load_frequency(&self, key: &str) -> FrequencyTracker {
        match self.load_entries::<Vec<(String, u64)>>(key) {
            Some(entries) => FrequencyTracker::from_entries(entries),
            None => FrequencyTracker::new(),
        }
    }

    /// Carrega e decodifica o payload de uma chave, tratando ausência,
    /// falha de leitura e texto corrompido como estado vazio.
    fn load_entries<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(key = %key, "Falha ao ler estado, tratando como vazio: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::debug!(key = %key, "Estado ilegível, tratando como vazio: {}", e);
                None
            }
        }
    }

    fn persist<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(payload) => {
                if let Err(e) = self.storage.set(key, &payload) {
                    tracing::warn!(key = %key, "Falha ao persistir histórico: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!(key = %key, "Falha ao serializar histórico: {}", e);
            }
        }
    }
}
