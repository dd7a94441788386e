//! Contador de frequência de rotas.

use std::collections::HashMap;

/// Contagem e carimbo de toque de uma chave.
#[derive(Debug, Clone, Copy)]
struct FrequencyEntry {
    count: u64,
    touched: u64,
}

/// Contador ilimitado de visitas por chave de rota.
///
/// A contagem de uma chave só cresce, exatamente 1 por incremento, e só
/// é zerada por uma limpeza explícita. Empates no ranking são desfeitos
/// pela chave incrementada mais recentemente.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTracker {
    entries: HashMap<String, FrequencyEntry>,
    tick: u64,
}

impl FrequencyTracker {
    /// Cria um contador vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Incrementa a contagem de uma chave, retornando o novo valor.
    pub fn increment(&mut self, key: &str) -> u64 {
        self.tick += 1;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert(FrequencyEntry {
                count: 0,
                touched: 0,
            });
        entry.count += 1;
        entry.touched = self.tick;
        entry.count
    }

    /// Contagem atual de uma chave; zero se ausente.
    pub fn count(&self, key: &str) -> u64 {
        self.entries.get(key).map(|e| e.count).unwrap_or(0)
    }

    /// Retorna até `n` pares (chave, contagem) em ordem de contagem
    /// decrescente, empates desfeitos pela incrementada mais recente.
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Exporta todos os pares (chave, contagem).
    ///
    /// A forma persistida é uma lista de pares sem invariante de ordem;
    /// a emissão em ordem de ranking mantém a saída determinística.
    pub fn to_entries(&self) -> Vec<(String, u64)> {
        self.ranked()
    }

    /// Reconstrói o contador a partir de pares persistidos.
    ///
    /// Os carimbos de toque são atribuídos percorrendo a lista de trás
    /// para frente, de modo que pares listados antes vencem empates e um
    /// ciclo serializa-restaura preserva o ranking.
    pub fn from_entries(entries: Vec<(String, u64)>) -> Self {
        let mut tracker = Self::new();
        for (key, count) in entries.into_iter().rev() {
            tracker.tick += 1;
            let touched = tracker.tick;
            tracker.entries.insert(key, FrequencyEntry { count, touched });
        }
        tracker
    }

    /// Número de chaves rastreadas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Verifica se não há chaves rastreadas.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove todas as contagens.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.tick = 0;
    }

    fn ranked(&self) -> Vec<(String, u64)> {
        let mut all: Vec<(&String, &FrequencyEntry)> = self.entries.iter().collect();
        all.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(b.1.touched.cmp(&a.1.touched))
        });
        all.into_iter().map(|(k, e)| (k.clone(), e.count)).collect()
    }
}
