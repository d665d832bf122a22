/// Resolved physical indices for the three semantic columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: usize,
    pub year: usize,
    pub gross: usize,
}

impl ColumnMap {
    pub fn max_index(&self) -> usize {
        self.title.max(self.year).max(self.gross)
    }
}

/// Positional fallback applied per role when its header predicate finds no match.
/// A reordered table with unrecognizable headers will silently map the wrong
/// columns rather than fail; callers that know a different layout can override.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFallback {
    pub title: usize,
    pub year: usize,
    pub gross: usize,
}

/// Long-standing layout of the target page: Rank | Title | Year | Worldwide gross | Ref.
pub const WIKI_LAYOUT: ColumnFallback = ColumnFallback {
    title: 1,
    year: 2,
    gross: 3,
};

impl Default for ColumnFallback {
    fn default() -> Self {
        WIKI_LAYOUT
    }
}

/// Map header cell texts to the three semantic columns by substring predicates,
/// falling back positionally for any role that stays unmatched.
pub fn resolve_columns(headers: &[String], fallback: ColumnFallback) -> ColumnMap {
    let norm: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();

    let title = norm.iter().position(|h| h.contains("title"));
    let year = norm.iter().position(|h| h.contains("year"));
    let gross = norm
        .iter()
        .position(|h| h.contains("worldwide") && h.contains("gross"));

    ColumnMap {
        title: title.unwrap_or(fallback.title),
        year: year.unwrap_or(fallback.year),
        gross: gross.unwrap_or(fallback.gross),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn predicates_win_over_position() {
        // Reordered layout: predicates must resolve regardless of column order
        let h = headers(&["Worldwide gross", "Year", "Rank", "Title"]);
        let map = resolve_columns(&h, ColumnFallback::default());
        assert_eq!(
            map,
            ColumnMap {
                title: 3,
                year: 1,
                gross: 0
            }
        );
    }

    #[test]
    fn header_text_is_trimmed_and_lowercased() {
        let h = headers(&["Rank", "  TITLE ", "Release Year", "Worldwide GROSS (2024 $)"]);
        let map = resolve_columns(&h, ColumnFallback::default());
        assert_eq!(
            map,
            ColumnMap {
                title: 1,
                year: 2,
                gross: 3
            }
        );
    }

    #[test]
    fn gross_needs_both_words() {
        // "Domestic gross" must not satisfy the gross predicate
        let h = headers(&["Rank", "Title", "Year", "Domestic gross"]);
        let map = resolve_columns(&h, ColumnFallback::default());
        assert_eq!(map.gross, 3); // positional fallback, not a predicate hit
    }

    #[test]
    fn full_fallback_when_nothing_matches() {
        let h = headers(&["A", "B", "C", "D", "E"]);
        let map = resolve_columns(&h, ColumnFallback::default());
        assert_eq!(
            map,
            ColumnMap {
                title: 1,
                year: 2,
                gross: 3
            }
        );
    }

    #[test]
    fn partial_fallback_per_role() {
        // Only the year header is recognizable; other roles fall back
        let h = headers(&["#", "Name", "Year", "Takings"]);
        let map = resolve_columns(&h, ColumnFallback::default());
        assert_eq!(
            map,
            ColumnMap {
                title: 1,
                year: 2,
                gross: 3
            }
        );
    }

    #[test]
    fn custom_fallback_is_honored() {
        let h = headers(&["A", "B", "C"]);
        let fb = ColumnFallback {
            title: 0,
            year: 1,
            gross: 2,
        };
        let map = resolve_columns(&h, fb);
        assert_eq!(
            map,
            ColumnMap {
                title: 0,
                year: 1,
                gross: 2
            }
        );
    }

    #[test]
    fn max_index() {
        let map = ColumnMap {
            title: 1,
            year: 4,
            gross: 3,
        };
        assert_eq!(map.max_index(), 4);
    }
}
