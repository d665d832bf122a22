use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table.wikitable").unwrap());
static CAPTION_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("caption").unwrap());

const CAPTION_PHRASE: &str = "highest-grossing films";

/// Pick the wikitable whose caption names the dataset; else the first
/// wikitable; else None (a valid zero-record outcome, not an error).
pub fn find_target_table(doc: &Html) -> Option<ElementRef<'_>> {
    let tables: Vec<ElementRef> = doc.select(&TABLE_SEL).collect();
    tables
        .iter()
        .copied()
        .find(|t| caption_text(*t).to_lowercase().contains(CAPTION_PHRASE))
        .or_else(|| tables.first().copied())
}

fn caption_text(table: ElementRef<'_>) -> String {
    table
        .select(&CAPTION_SEL)
        .next()
        .map(|c| c.text().collect::<String>())
        .unwrap_or_default()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captioned_table_beats_earlier_tables() {
        let html = r#"
            <table class="wikitable"><caption>Timeline of records</caption>
              <tr><th>Decoy</th></tr>
            </table>
            <table class="wikitable"><caption>Highest-grossing films as of 2024</caption>
              <tr><th>Real</th></tr>
            </table>
        "#;
        let doc = Html::parse_document(html);
        let table = find_target_table(&doc).unwrap();
        assert!(caption_text(table).contains("Highest-grossing"));
    }

    #[test]
    fn caption_match_is_case_insensitive() {
        let html = r#"
            <table class="wikitable"><caption>HIGHEST-GROSSING FILMS</caption>
              <tr><th>Real</th></tr>
            </table>
        "#;
        let doc = Html::parse_document(html);
        assert!(find_target_table(&doc).is_some());
    }

    #[test]
    fn falls_back_to_first_wikitable() {
        let html = r#"
            <table class="wikitable"><caption>Something else</caption>
              <tr><th>First</th></tr>
            </table>
            <table class="wikitable"><tr><th>Second</th></tr></table>
        "#;
        let doc = Html::parse_document(html);
        let table = find_target_table(&doc).unwrap();
        assert!(caption_text(table).contains("Something else"));
    }

    #[test]
    fn plain_tables_are_ignored() {
        let html = "<table><tr><th>Not a wikitable</th></tr></table>";
        let doc = Html::parse_document(html);
        assert!(find_target_table(&doc).is_none());
    }

    #[test]
    fn no_tables_is_none() {
        let doc = Html::parse_document("<p>No tables here</p>");
        assert!(find_target_table(&doc).is_none());
    }
}
