//! Backend de armazenamento SQLite.

use std::path::Path;

use rusqlite::{params, Connection};

use super::KeyValueStorage;
use crate::TrajetoResult;

/// Armazenamento durável sobre SQLite.
///
/// Uma única tabela `kv` guarda os payloads serializados do histórico;
/// cada chave é gravada com upsert, sem transação entre chaves.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Abre ou cria o banco no caminho indicado.
    pub fn open<P: AsRef<Path>>(db_path: P) -> TrajetoResult<Self> {
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    /// Cria um banco em memória.
    pub fn open_in_memory() -> TrajetoResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> TrajetoResult<Self> {
        // Cria a tabela se não existir
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
        "#,
        )?;

        Ok(Self { conn })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> TrajetoResult<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?")?;
        let mut rows = stmt.query(params![key])?;

        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> TrajetoResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TrajetoResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();

        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_upsert_overwrites() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();

        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("kv.db");

        {
            let mut storage = SqliteStorage::open(&db_path).unwrap();
            storage.set("k", "v").unwrap();
        }

        let storage = SqliteStorage::open(&db_path).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
