use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

pub const DEFAULT_DB_PATH: &str = "data/movies.sqlite";

/// One extracted film, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRecord {
    pub title: String,
    pub worldwide_gross: i64,
    pub year: i32,
}

pub fn connect(path: &Path) -> Result<Connection> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

/// Drop, recreate and repopulate the movies table in one transaction.
/// Every run replaces prior contents wholesale; an early error return
/// rolls the whole thing back when the transaction drops.
pub fn replace_all(conn: &Connection, films: &[FilmRecord]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "
        DROP TABLE IF EXISTS movies;
        CREATE TABLE movies (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            title           TEXT NOT NULL,
            worldwide_gross INTEGER,
            year            INTEGER
        );
        ",
    )?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO movies (title, worldwide_gross, year) VALUES (?1, ?2, ?3)",
        )?;
        for f in films {
            count += stmt.execute(rusqlite::params![f.title, f.worldwide_gross, f.year])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

pub fn fetch_movies(conn: &Connection, limit: usize) -> Result<Vec<FilmRecord>> {
    let sql = format!(
        "SELECT title, worldwide_gross, year FROM movies
         ORDER BY worldwide_gross DESC, id
         LIMIT {}",
        limit
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], |row| {
            Ok(FilmRecord {
                title: row.get(0)?,
                worldwide_gross: row.get(1)?,
                year: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub struct Stats {
    pub movies: usize,
    pub total_gross: i64,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let (movies, total_gross, earliest_year, latest_year) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(worldwide_gross), 0), MIN(year), MAX(year) FROM movies",
        [],
        |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
    )?;
    Ok(Stats {
        movies,
        total_gross,
        earliest_year,
        latest_year,
    })
}

// ── Tests ──
