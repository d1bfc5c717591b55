// Database module - SQLite store for investment offers

pub mod models;

use anyhow::Context;
use rusqlite::{params, Connection, Transaction};
use std::path::Path;
use tracing::{debug, info};

use crate::error::Result;

pub use models::{NewOffer, Offer};

/// Store file used when no path is given (relative to the working directory)
pub const DEFAULT_DB_FILE: &str = "banks.db";

/// Open database connection, creating the file if needed
pub fn open_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).context(format!("Failed to open database at {:?}", path))?;
    Ok(conn)
}

/// Create the `banks` table if it does not exist yet
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(include_str!("schema.sql"))
        .context("Failed to execute schema")?;
    Ok(())
}

/// Open the offer store at `path`, creating the file and schema on first use.
pub fn open_store(path: &Path) -> Result<OfferStore> {
    info!("Opening offer store at: {:?}", path);
    let conn = open_db(path)?;
    OfferStore::from_connection(conn)
}

/// Handle on the `banks` table. The connection closes when the store is dropped.
pub struct OfferStore {
    conn: Connection,
}

impl OfferStore {
    /// Wrap an already open connection (e.g. in-memory), creating the schema.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Start a batch of staged inserts. Nothing becomes durable until
    /// [`StagedOffers::persist`]; dropping the batch discards it.
    pub fn begin(&mut self) -> Result<StagedOffers<'_>> {
        let tx = self
            .conn
            .transaction()
            .context("Failed to begin offer batch")?;
        Ok(StagedOffers { tx, staged: 0 })
    }

    /// Every persisted offer, oldest first
    pub fn list_all(&self) -> Result<Vec<Offer>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, interest_rate, term_years, amount
             FROM banks
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], Offer::from_row)?;

        let mut offers = Vec::new();
        for row in rows {
            offers.push(row.context("Failed to read offer row")?);
        }
        debug!("Loaded {} offers", offers.len());
        Ok(offers)
    }

    /// Number of persisted offers
    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM banks", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Uncommitted offers belonging to one collection run
pub struct StagedOffers<'a> {
    tx: Transaction<'a>,
    staged: usize,
}

impl StagedOffers<'_> {
    /// Stage one offer, returns the id it keeps once persisted
    pub fn insert(&mut self, offer: &NewOffer) -> Result<i64> {
        self.tx
            .execute(
                "INSERT INTO banks (name, interest_rate, term_years, amount)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    offer.name,
                    offer.interest_rate,
                    offer.term_years,
                    offer.amount
                ],
            )
            .context(format!("Failed to stage offer {:?}", offer.name))?;
        self.staged += 1;
        Ok(self.tx.last_insert_rowid())
    }

    pub fn len(&self) -> usize {
        self.staged
    }

    pub fn is_empty(&self) -> bool {
        self.staged == 0
    }

    /// Commit all staged offers in one transaction
    pub fn persist(self) -> Result<usize> {
        let staged = self.staged;
        self.tx.commit().context("Failed to commit offers")?;
        info!("Persisted {} offers", staged);
        Ok(staged)
    }
}
