pub mod columns;
pub mod normalize;
pub mod table;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::db::FilmRecord;
use columns::ColumnFallback;

static TR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

/// Full pipeline: html → target table → column map → normalized records.
pub fn extract_films(html: &str) -> Vec<FilmRecord> {
    extract_films_with(html, ColumnFallback::default())
}

pub fn extract_films_with(html: &str, fallback: ColumnFallback) -> Vec<FilmRecord> {
    let doc = Html::parse_document(html);
    let Some(target) = table::find_target_table(&doc) else {
        debug!("No wikitable found, emitting zero records");
        return Vec::new();
    };

    let rows: Vec<ElementRef> = target.select(&TR_SEL).collect();
    let Some((header, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = header
        .select(&CELL_SEL)
        .map(|c| c.text().collect::<String>())
        .collect();
    let map = columns::resolve_columns(&headers, fallback);

    let mut films = Vec::new();
    for row in data_rows {
        let cells: Vec<ElementRef> = row.select(&CELL_SEL).collect();
        if cells.len() <= map.max_index() {
            debug!("Skipping short row ({} cells)", cells.len());
            continue;
        }

        let title = cell_text(cells[map.title]);
        let year = normalize::extract_year(&cell_text(cells[map.year]));
        let gross = normalize::parse_gross(&normalize::collapse_ws(&cell_text(cells[map.gross])));

        // Emission invariant: all three fields must resolve, else drop silently
        match year {
            Some(year) if !title.is_empty() && gross != 0 => {
                films.push(FilmRecord {
                    title,
                    worldwide_gross: gross,
                    year,
                });
            }
            _ => debug!("Dropping row with unresolved fields (title={:?})", title),
        }
    }
    films
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

// ── Tests ──
