//! SQLite storage for the official roster.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::elections::ElectionInfo;
use crate::models::{Office, Official};
use crate::reconcile::FundingUpdate;

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tri-state funding filter: `Funded` selects rows whose flag is any value
/// other than the `"No"` sentinel, `Unfunded` selects the sentinel exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundingFilter {
    Funded,
    Unfunded,
}

/// Conjunctive filters for [`Db::search`]. Unset fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    pub state: Option<String>,
    pub office: Option<Office>,
    pub party: Option<String>,
    pub aipac: Option<FundingFilter>,
    pub war_industry: Option<FundingFilter>,
}

/// Aggregate roster statistics.
#[derive(Debug, Clone)]
pub struct RosterStats {
    pub total: i64,
    pub by_party: Vec<(String, i64)>,
    pub by_state: Vec<(String, i64)>,
    pub aipac_funded_count: i64,
    pub war_industry_funded_count: i64,
}

pub struct Db {
    conn: Connection,
}

const OFFICIAL_COLUMNS: &str = "external_id, first_name, middle_name, last_name, office, state, \
     district, party, region, dc_office_address, dc_zip, dc_phone, website, contact_form, email, \
     facebook, twitter, instagram, tiktok, aipac_funded, war_industry_funded, term_end, \
     next_primary, next_general, last_updated, verified";

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    pub fn init(&self) -> Result<(), DbError> {
        let version: i32 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version < 1 {
            self.migrate_v1()?;
            self.conn.pragma_update(None, "user_version", 1)?;
        }

        if version < 2 {
            self.migrate_v2()?;
            self.conn.pragma_update(None, "user_version", 2)?;
        }

        Ok(())
    }

    fn migrate_v1(&self) -> Result<(), DbError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS officials (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                external_id TEXT UNIQUE NOT NULL,
                first_name TEXT NOT NULL,
                middle_name TEXT,
                last_name TEXT NOT NULL,
                office TEXT NOT NULL,
                state TEXT NOT NULL,
                district TEXT NOT NULL,
                party TEXT NOT NULL,
                region TEXT,
                dc_office_address TEXT,
                dc_zip TEXT,
                dc_phone TEXT,
                website TEXT,
                contact_form TEXT,
                email TEXT,
                facebook TEXT,
                twitter TEXT,
                instagram TEXT,
                tiktok TEXT,
                aipac_funded TEXT NOT NULL DEFAULT 'No',
                war_industry_funded TEXT NOT NULL DEFAULT 'No',
                last_updated TEXT,
                verified INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        for sql in &[
            "CREATE INDEX IF NOT EXISTS idx_officials_state ON officials(state)",
            "CREATE INDEX IF NOT EXISTS idx_officials_district ON officials(district)",
            "CREATE INDEX IF NOT EXISTS idx_officials_party ON officials(party)",
            "CREATE INDEX IF NOT EXISTS idx_officials_aipac ON officials(aipac_funded)",
            "CREATE INDEX IF NOT EXISTS idx_officials_war ON officials(war_industry_funded)",
        ] {
            self.conn.execute(sql, [])?;
        }
        Ok(())
    }

    /// Adds the election-calendar columns. A "duplicate column name" failure
    /// means an earlier run already added them and is not an error.
    fn migrate_v2(&self) -> Result<(), DbError> {
        for sql in &[
            "ALTER TABLE officials ADD COLUMN term_end TEXT",
            "ALTER TABLE officials ADD COLUMN next_primary TEXT",
            "ALTER TABLE officials ADD COLUMN next_general TEXT",
        ] {
            match self.conn.execute(sql, []) {
                Ok(_) => {}
                Err(rusqlite::Error::SqliteFailure(_, Some(ref msg)))
                    if msg.contains("duplicate column name") =>
                {
                    tracing::debug!("column already present, skipping: {}", sql);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    pub fn official_count(&self) -> Result<i64, DbError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM officials", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Bulk upsert of imported officials, keyed on `external_id`.
    pub fn upsert_officials(&mut self, officials: &[Official]) -> Result<(), DbError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO officials (
                   external_id, first_name, middle_name, last_name, office, state, district,
                   party, region, dc_office_address, dc_zip, dc_phone, website, contact_form,
                   email, facebook, twitter, instagram, tiktok, aipac_funded,
                   war_industry_funded, last_updated, verified
                 )
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                         ?17, ?18, ?19, ?20, ?21, CURRENT_TIMESTAMP, ?22)
                 ON CONFLICT(external_id) DO UPDATE SET
                   first_name = excluded.first_name,
                   middle_name = excluded.middle_name,
                   last_name = excluded.last_name,
                   office = excluded.office,
                   state = excluded.state,
                   district = excluded.district,
                   party = excluded.party,
                   region = excluded.region,
                   dc_office_address = excluded.dc_office_address,
                   dc_zip = excluded.dc_zip,
                   dc_phone = excluded.dc_phone,
                   website = excluded.website,
                   contact_form = excluded.contact_form,
                   email = excluded.email,
                   facebook = excluded.facebook,
                   twitter = excluded.twitter,
                   instagram = excluded.instagram,
                   tiktok = excluded.tiktok,
                   aipac_funded = excluded.aipac_funded,
                   war_industry_funded = excluded.war_industry_funded,
                   last_updated = CURRENT_TIMESTAMP,
                   verified = excluded.verified",
            )?;

            for official in officials {
                stmt.execute(params![
                    official.external_id,
                    official.first_name,
                    official.middle_name,
                    official.last_name,
                    official.office.as_str(),
                    official.state,
                    official.district,
                    official.party,
                    official.region,
                    official.dc_office_address,
                    official.dc_zip,
                    official.dc_phone,
                    official.website,
                    official.contact_form,
                    official.email,
                    official.facebook,
                    official.twitter,
                    official.instagram,
                    official.tiktok,
                    official.aipac_funded,
                    official.war_industry_funded,
                    official.verified as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// The House officeholder for a district code (e.g. `FL-27`), if any.
    pub fn house_rep_by_district(&self, district: &str) -> Result<Option<Official>, DbError> {
        let sql = format!(
            "SELECT {OFFICIAL_COLUMNS} FROM officials WHERE district = ?1 AND office = 'U.S. House'"
        );
        self.conn
            .query_row(&sql, params![district], official_from_row)
            .optional()
            .map_err(DbError::from)
    }

    /// Both senators for a state, ordered by last name.
    pub fn senators_by_state(&self, state: &str) -> Result<Vec<Official>, DbError> {
        let sql = format!(
            "SELECT {OFFICIAL_COLUMNS} FROM officials
             WHERE state = ?1 AND office = 'U.S. Senate'
             ORDER BY last_name"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![state], official_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    }

    pub fn official_by_external_id(&self, external_id: &str) -> Result<Option<Official>, DbError> {
        let sql = format!("SELECT {OFFICIAL_COLUMNS} FROM officials WHERE external_id = ?1");
        self.conn
            .query_row(&sql, params![external_id], official_from_row)
            .optional()
            .map_err(DbError::from)
    }

    /// Filtered roster search. Filters are conjunctive; ordering is state,
    /// then office descending (senators first), then district.
    pub fn search(&self, filter: &SearchFilter) -> Result<Vec<Official>, DbError> {
        let mut sql = format!("SELECT {OFFICIAL_COLUMNS} FROM officials WHERE 1=1");
        let mut params_list: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref state) = filter.state {
            sql.push_str(&format!(" AND state = ?{}", params_list.len() + 1));
            params_list.push(Box::new(state.clone()));
        }
        if let Some(office) = filter.office {
            sql.push_str(&format!(" AND office = ?{}", params_list.len() + 1));
            params_list.push(Box::new(office.as_str().to_string()));
        }
        if let Some(ref party) = filter.party {
            sql.push_str(&format!(" AND party = ?{}", params_list.len() + 1));
            params_list.push(Box::new(party.clone()));
        }
        match filter.aipac {
            Some(FundingFilter::Funded) => sql.push_str(" AND aipac_funded != 'No'"),
            Some(FundingFilter::Unfunded) => sql.push_str(" AND aipac_funded = 'No'"),
            None => {}
        }
        match filter.war_industry {
            Some(FundingFilter::Funded) => sql.push_str(" AND war_industry_funded != 'No'"),
            Some(FundingFilter::Unfunded) => sql.push_str(" AND war_industry_funded = 'No'"),
            None => {}
        }

        sql.push_str(" ORDER BY state, office DESC, district");

        let mut stmt = self.conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_list.iter().map(|p| p.as_ref()).collect();
        let rows = stmt.query_map(params_refs.as_slice(), official_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    }

    /// Applies one reconciled funding update: sets exactly the two flags and
    /// bumps `last_updated`. Returns the number of rows changed.
    pub fn apply_funding_update(&self, update: &FundingUpdate) -> Result<usize, DbError> {
        let changed = self.conn.execute(
            "UPDATE officials
             SET aipac_funded = ?1,
                 war_industry_funded = ?2,
                 last_updated = CURRENT_TIMESTAMP
             WHERE external_id = ?3",
            params![update.aipac_funded, update.war_industry_funded, update.external_id],
        )?;
        Ok(changed)
    }

    /// Applies one election-calendar update and bumps `last_updated`.
    /// Returns the number of rows changed.
    pub fn apply_election_info(
        &self,
        external_id: &str,
        info: &ElectionInfo,
    ) -> Result<usize, DbError> {
        let changed = self.conn.execute(
            "UPDATE officials
             SET term_end = ?1,
                 next_primary = ?2,
                 next_general = ?3,
                 last_updated = CURRENT_TIMESTAMP
             WHERE external_id = ?4",
            params![info.term_end, info.next_primary, info.next_general, external_id],
        )?;
        Ok(changed)
    }

    pub fn stats(&self) -> Result<RosterStats, DbError> {
        let total = self.official_count()?;

        let mut stmt = self
            .conn
            .prepare("SELECT party, COUNT(*) FROM officials GROUP BY party ORDER BY COUNT(*) DESC")?;
        let by_party = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self
            .conn
            .prepare("SELECT state, COUNT(*) FROM officials GROUP BY state ORDER BY state")?;
        let by_state = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let aipac_funded_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM officials WHERE aipac_funded != 'No'",
            [],
            |row| row.get(0),
        )?;
        let war_industry_funded_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM officials WHERE war_industry_funded != 'No'",
            [],
            |row| row.get(0),
        )?;

        Ok(RosterStats {
            total,
            by_party,
            by_state,
            aipac_funded_count,
            war_industry_funded_count,
        })
    }
}

fn official_from_row(row: &rusqlite::Row<'_>) -> Result<Official, rusqlite::Error> {
    let office_raw: String = row.get(4)?;
    let office = Office::parse(&office_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            format!("unknown office '{}'", office_raw).into(),
        )
    })?;

    Ok(Official {
        external_id: row.get(0)?,
        first_name: row.get(1)?,
        middle_name: row.get(2)?,
        last_name: row.get(3)?,
        office,
        state: row.get(5)?,
        district: row.get(6)?,
        party: row.get(7)?,
        region: row.get(8)?,
        dc_office_address: row.get(9)?,
        dc_zip: row.get(10)?,
        dc_phone: row.get(11)?,
        website: row.get(12)?,
        contact_form: row.get(13)?,
        email: row.get(14)?,
        facebook: row.get(15)?,
        twitter: row.get(16)?,
        instagram: row.get(17)?,
        tiktok: row.get(18)?,
        aipac_funded: row.get(19)?,
        war_industry_funded: row.get(20)?,
        term_end: row.get(21)?,
        next_primary: row.get(22)?,
        next_general: row.get(23)?,
        last_updated: row.get(24)?,
        verified: row.get::<_, i64>(25)? != 0,
    })
}
