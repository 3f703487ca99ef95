#![allow(dead_code)]

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_search::db::{DbPool, establish_connection_pool};
use pushkind_search::domain::contact::NewContact;
use pushkind_search::repository::DieselRepository;
use pushkind_search::repository::contact::ContactWriter;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Temporary SQLite database with all migrations applied.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non utf-8 temp path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        let conn: &mut SqliteConnection = &mut conn;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

/// Inserts `count` contacts named `Contact 01`, `Contact 02`, ...
pub fn seed_contacts(repo: &DieselRepository, count: usize) {
    let contacts = (1..=count)
        .map(|i| {
            NewContact::new(
                format!("Contact {i:02}"),
                Some(format!("contact{i:02}@example.com")),
                None,
            )
        })
        .collect::<Vec<_>>();
    repo.create_contacts(&contacts).expect("failed to seed contacts");
}
