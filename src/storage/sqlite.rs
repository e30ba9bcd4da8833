use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::seed::SeedData;
use super::{Storage, StorageError};
use crate::model::{CoursePars, Player, RawScore, ScoringSystem, Tournament};

const SCHEMA: [&str; 5] = [
    include_str!("../sql/schema/sqlite/01_course.sql"),
    include_str!("../sql/schema/sqlite/02_player.sql"),
    include_str!("../sql/schema/sqlite/03_tournament.sql"),
    include_str!("../sql/schema/sqlite/04_tournament_handicap.sql"),
    include_str!("../sql/schema/sqlite/05_score.sql"),
];

pub const TABLE_DROP: &str = include_str!("../sql/schema/sqlite/00_table_drop.sql");

/// Row store backed by a single SQLite connection. Queries run on the
/// blocking pool, one at a time.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the tables exist.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened or the schema fails to apply
    pub fn open(db_name: &str) -> Result<Self, StorageError> {
        Self::from_connection(Connection::open(db_name)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the schema fails to apply
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(&SCHEMA.join("\n"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Drop and recreate every table.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the statements fail
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.with_connection(|conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(TABLE_DROP)?;
            tx.execute_batch(&SCHEMA.join("\n"))?;
            tx.commit()?;
            Ok(())
        })
        .await
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|e| StorageError::Db(format!("connection lock poisoned: {e}")))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| StorageError::Db(e.to_string()))?
    }

    /// Insert or update everything in `seed` in one transaction.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the seed fails validation or any statement fails
    pub async fn seed(&self, seed: SeedData) -> Result<(), StorageError> {
        seed.validate()?;
        let n_scores = seed.scores.len();

        self.with_connection(move |conn| {
            let tx = conn.transaction()?;
            for course in &seed.courses {
                tx.execute(
                    "INSERT INTO course (id, name, pars) VALUES (?1, ?2, ?3)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name, pars = excluded.pars",
                    params![course.id, course.name, serde_json::to_string(&course.pars)?],
                )?;
            }
            for player in &seed.players {
                tx.execute(
                    "INSERT INTO player (id, name, team, handicap) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name, team = excluded.team,
                     handicap = excluded.handicap",
                    params![player.id, player.name, player.team, player.handicap],
                )?;
            }
            for tournament in &seed.tournaments {
                tx.execute(
                    "INSERT INTO tournament (id, name, course_id, scoring_system) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name,
                     course_id = excluded.course_id, scoring_system = excluded.scoring_system",
                    params![
                        tournament.id,
                        tournament.name,
                        tournament.course_id,
                        tournament.scoring_system.as_str()
                    ],
                )?;
                for (player_id, handicap) in &tournament.handicaps {
                    tx.execute(
                        "INSERT INTO tournament_handicap (tournament_id, player_id, handicap)
                         VALUES (?1, ?2, ?3)
                         ON CONFLICT(tournament_id, player_id) DO UPDATE SET handicap = excluded.handicap",
                        params![tournament.id, player_id, handicap],
                    )?;
                }
            }
            for score in &seed.scores {
                tx.execute(
                    "INSERT INTO score (tournament_id, player_id, hole, strokes, par)
                     VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(tournament_id, player_id, hole) DO UPDATE SET
                     strokes = excluded.strokes, par = excluded.par",
                    params![
                        score.tournament_id,
                        score.player_id,
                        score.hole,
                        score.strokes,
                        score.par
                    ],
                )?;
            }
            tx.commit()?;
            Ok(())
        })
        .await?;

        log::info!("Seeded sqlite store with {n_scores} score rows");
        Ok(())
    }
}

#[async_trait]
impl Storage for SqliteStore {
    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament, StorageError> {
        let tournament_id = tournament_id.to_string();
        self.with_connection(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, name, course_id, scoring_system FROM tournament WHERE id = ?1",
                    params![tournament_id],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, String>(3)?,
                        ))
                    },
                )
                .optional()?;
            let Some((id, name, course_id, system)) = row else {
                return Err(StorageError::NotFound(format!("tournament '{tournament_id}'")));
            };
            let scoring_system = system
                .parse::<ScoringSystem>()
                .map_err(|e| StorageError::Parse(e.to_string()))?;
            Ok(Tournament {
                id,
                name,
                course_id,
                scoring_system,
            })
        })
        .await
    }

    async fn fetch_scores(&self, tournament_id: &str) -> Result<Vec<RawScore>, StorageError> {
        let tournament_id = tournament_id.to_string();
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT tournament_id, player_id, hole, strokes, par FROM score
                 WHERE tournament_id = ?1 ORDER BY rowid",
            )?;
            let rows = stmt.query_map(params![tournament_id], |row| {
                Ok(RawScore {
                    tournament_id: row.get(0)?,
                    player_id: row.get(1)?,
                    hole: row.get(2)?,
                    strokes: row.get(3)?,
                    par: row.get(4)?,
                })
            })?;
            let scores = rows.collect::<Result<Vec<_>, _>>()?;
            Ok(scores)
        })
        .await
    }

    async fn fetch_course_pars(&self, course_id: &str) -> Result<CoursePars, StorageError> {
        let course_id = course_id.to_string();
        self.with_connection(move |conn| {
            let pars: Option<String> = conn
                .query_row(
                    "SELECT pars FROM course WHERE id = ?1",
                    params![course_id],
                    |row| row.get(0),
                )
                .optional()?;
            let Some(pars) = pars else {
                return Err(StorageError::NotFound(format!("course '{course_id}'")));
            };
            let pars: Vec<i32> = serde_json::from_str(&pars)?;
            Ok(CoursePars::from(pars))
        })
        .await
    }

    async fn fetch_players(&self) -> Result<Vec<Player>, StorageError> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, name, team, handicap FROM player ORDER BY rowid")?;
            let rows = stmt.query_map([], |row| {
                Ok(Player {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    team: row.get(2)?,
                    handicap: row.get(3)?,
                })
            })?;
            let players = rows.collect::<Result<Vec<_>, _>>()?;
            Ok(players)
        })
        .await
    }

    async fn fetch_handicap_overrides(
        &self,
        tournament_id: &str,
    ) -> Result<HashMap<String, i32>, StorageError> {
        let tournament_id = tournament_id.to_string();
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT player_id, handicap FROM tournament_handicap WHERE tournament_id = ?1",
            )?;
            let rows = stmt.query_map(params![tournament_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)?))
            })?;
            let overrides = rows.collect::<Result<HashMap<_, _>, _>>()?;
            Ok(overrides)
        })
        .await
    }
}
