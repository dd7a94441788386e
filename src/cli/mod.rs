//! Interface de linha de comando do Trajeto.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trajeto - histórico de rotas de metrô por usuário.
#[derive(Parser, Debug)]
#[command(name = "trajeto")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "trajeto.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Registra uma rota pesquisada no histórico de um usuário.
    Record {
        /// Identidade do usuário.
        #[arg(short, long)]
        user: String,

        /// Estação de origem.
        #[arg(long)]
        start: String,

        /// Estação de destino.
        #[arg(long)]
        end: String,

        /// Nome da rede de metrô.
        #[arg(long)]
        metro: Option<String>,

        /// Duração estimada em minutos.
        #[arg(long, default_value_t = 0.0)]
        time: f64,

        /// Tarifa estimada.
        #[arg(long, default_value_t = 0.0)]
        fare: f64,
    },

    /// Mostra as rotas recentes e frequentes de um usuário.
    History {
        /// Identidade do usuário.
        #[arg(short, long)]
        user: String,
    },

    /// Limpa o histórico persistido de um usuário.
    Reset {
        /// Identidade do usuário.
        #[arg(short, long)]
        user: String,
    },

    /// Mostra a configuração atual.
    Config,

    /// Mostra versão.
    Version,
}
