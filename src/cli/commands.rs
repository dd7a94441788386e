//! Implementação dos comandos CLI do Trajeto.

use std::path::{Path, PathBuf};

use crate::history::{HistoryStore, HistoryViews};
use crate::storage::SqliteStorage;
use crate::types::config::Config;
use crate::types::routes::RouteRecord;
use crate::TrajetoResult;

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> TrajetoResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("trajeto.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    // Create .trajeto/ directory for the database
    let trajeto_dir = target_dir.join(".trajeto");
    if !trajeto_dir.exists() {
        std::fs::create_dir_all(&trajeto_dir)?;
        tracing::info!(".trajeto/ directory created");
    }

    update_gitignore(&target_dir)?;

    // Create default configuration
    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Trajeto initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!("Data directory: .trajeto/");

    Ok(())
}

/// Updates or creates .gitignore to include .trajeto/
fn update_gitignore(target_dir: &Path) -> TrajetoResult<()> {
    let gitignore_path = target_dir.join(".gitignore");
    let trajeto_entry = ".trajeto/";
    let trajeto_comment = "# Trajeto - local route history database";

    if gitignore_path.exists() {
        let content = std::fs::read_to_string(&gitignore_path)?;

        if content
            .lines()
            .any(|line| line.trim() == trajeto_entry || line.trim() == ".trajeto")
        {
            tracing::debug!(".gitignore already contains .trajeto/");
            return Ok(());
        }

        let mut new_content = content.trim_end().to_string();
        if !new_content.is_empty() {
            new_content.push_str("\n\n");
        }
        new_content.push_str(trajeto_comment);
        new_content.push('\n');
        new_content.push_str(trajeto_entry);
        new_content.push('\n');

        std::fs::write(&gitignore_path, new_content)?;
        println!(".gitignore updated with .trajeto/");
    } else {
        let content = format!("{}\n{}\n", trajeto_comment, trajeto_entry);
        std::fs::write(&gitignore_path, content)?;
        println!(".gitignore created with .trajeto/");
    }

    Ok(())
}

/// Registra uma rota no histórico do usuário e mostra as visões
/// atualizadas.
pub fn record(
    user: &str,
    start: &str,
    end: &str,
    metro: Option<&str>,
    time: f64,
    fare: f64,
    config: &Config,
) -> TrajetoResult<()> {
    let mut store = open_store(config)?;

    let mut route = RouteRecord::new(start, end, time, fare);
    if let Some(metro) = metro {
        route = route.with_metro(metro);
    }

    tracing::debug!(user = user, key = %route.key(), "Registrando rota");

    let views = store.record(Some(user), &route);
    print_views(user, &views);

    Ok(())
}

/// Mostra o histórico de um usuário.
pub fn history(user: &str, config: &Config) -> TrajetoResult<()> {
    let store = open_store(config)?;
    let views = store.query(Some(user));
    print_views(user, &views);

    Ok(())
}

/// Limpa o histórico persistido de um usuário.
pub fn reset(user: &str, config: &Config) -> TrajetoResult<()> {
    let mut store = open_store(config)?;
    store.reset(Some(user));

    println!("Histórico de '{}' removido.", user);

    Ok(())
}

/// Mostra a configuração atual.
pub fn config_cmd(config_path: &Path, config: &Config) -> TrajetoResult<()> {
    println!("# {}", config_path.display());
    println!("{}", toml::to_string_pretty(config)?);

    Ok(())
}

/// Mostra a versão.
pub fn version() {
    println!("trajeto {}", env!("CARGO_PKG_VERSION"));
}

fn open_store(config: &Config) -> TrajetoResult<HistoryStore<SqliteStorage>> {
    if let Some(parent) = config.storage.db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let storage = SqliteStorage::open(&config.storage.db_path)?;
    Ok(HistoryStore::with_config(storage, config.history.clone()))
}

fn print_views(user: &str, views: &HistoryViews) {
    println!("Rotas recentes de {}:", user);
    if views.recent.is_empty() {
        println!("  (nenhuma rota registrada)");
    }
    for (_, route) in &views.recent {
        let metro = route
            .metro
            .as_deref()
            .map(|m| format!(" [{}]", m))
            .unwrap_or_default();
        println!(
            "  {} → {}{} (~{} min, tarifa {})",
            route.start,
            route.end,
            metro,
            route.time.round(),
            route.fare
        );
    }

    println!();
    println!("Rotas frequentes:");
    if views.frequent.is_empty() {
        println!("  (nenhuma rota registrada)");
    }
    for (key, count) in &views.frequent {
        println!("  {} ({}x)", key, count);
    }
}
