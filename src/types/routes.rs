//! Tipos de rota do Trajeto.

use serde::{Deserialize, Serialize};

/// Separador entre origem e destino nas chaves de rota.
///
/// A visão de rotas frequentes expõe a chave crua; quem consome a lista
/// separa origem e destino por este caractere, então a chave nunca é
/// transformada em hash.
pub const ROUTE_KEY_SEPARATOR: &str = "→";

/// Registro imutável de uma rota pesquisada com sucesso.
///
/// Os nomes dos campos seguem o formato de serialização persistido:
/// `metro` é omitido quando ausente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Estação de origem.
    pub start: String,

    /// Estação de destino.
    pub end: String,

    /// Nome da rede de metrô.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro: Option<String>,

    /// Duração estimada em minutos.
    pub time: f64,

    /// Tarifa estimada.
    pub fare: f64,

    /// Momento do registro em epoch millis.
    pub at: i64,
}

impl RouteRecord {
    /// Cria um registro com o timestamp atual.
    pub fn new(start: impl Into<String>, end: impl Into<String>, time: f64, fare: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            metro: None,
            time,
            fare,
            at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Define a rede de metrô.
    pub fn with_metro(mut self, metro: impl Into<String>) -> Self {
        self.metro = Some(metro.into());
        self
    }

    /// Chave normalizada desta rota.
    pub fn key(&self) -> String {
        route_key(&self.start, &self.end)
    }
}

/// Deriva a chave normalizada de um par origem/destino.
///
/// Dois registros equivalentes módulo caixa e espaços em volta colapsam
/// para a mesma chave, que identifica a rota tanto no cache de recência
/// quanto no contador de frequência.
pub fn route_key(start: &str, end: &str) -> String {
    format!(
        "{}{}{}",
        start.trim().to_lowercase(),
        ROUTE_KEY_SEPARATOR,
        end.trim().to_lowercase()
    )
}
