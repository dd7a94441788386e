//! Tipos de erro do Trajeto.

use thiserror::Error;

/// Tipo de resultado padrão do Trajeto.
pub type TrajetoResult<T> = Result<T, TrajetoError>;

/// Erros possíveis no Trajeto.
#[derive(Error, Debug)]
pub enum TrajetoError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro de armazenamento: {0}")]
    Storage(String),

    #[error("Configuração não encontrada em: {0}")]
    ConfigNotFound(String),

    #[error("{0}")]
    Other(String),
}

impl TrajetoError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de armazenamento.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::Storage(msg.into())
    }
}

impl From<rusqlite::Error> for TrajetoError {
    fn from(err: rusqlite::Error) -> Self {
        TrajetoError::Storage(err.to_string())
    }
}
