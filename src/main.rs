mod db;
mod fetch;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boxoffice_scraper", about = "Wikipedia highest-grossing films scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the films page, extract records, replace DB contents
    Run {
        /// Page URL (default: the Wikipedia highest-grossing films list)
        #[arg(long)]
        url: Option<String>,
        /// Database path
        #[arg(long)]
        db: Option<PathBuf>,
        /// Extract from a local HTML file instead of the network
        #[arg(long)]
        from_file: Option<PathBuf>,
    },
    /// Parse a local HTML file and print records without touching the DB
    Extract {
        file: PathBuf,
    },
    /// Stored movies as a compact table
    Show {
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
        /// Database path
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Row count and gross totals
    Stats {
        /// Database path
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { url, db, from_file } => {
            let html = match from_file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let url = url.as_deref().unwrap_or(fetch::FILMS_URL);
                    fetch::fetch_page(url).await?
                }
            };

            let films = parser::extract_films(&html);
            if films.is_empty() {
                println!("No film records found in page; database left with an empty table.");
            }

            let db_path = db.unwrap_or_else(|| PathBuf::from(db::DEFAULT_DB_PATH));
            let conn = db::connect(&db_path)?;
            let inserted = db::replace_all(&conn, &films)?;
            println!("Inserted {} films into {}", inserted, db_path.display());
            Ok(())
        }
        Commands::Extract { file } => {
            let html = std::fs::read_to_string(&file)?;
            let films = parser::extract_films(&html);
            if films.is_empty() {
                println!("No film records found in {}", file.display());
                return Ok(());
            }
            print_films(&films);
            Ok(())
        }
        Commands::Show { limit, db } => {
            let db_path = db.unwrap_or_else(|| PathBuf::from(db::DEFAULT_DB_PATH));
            let conn = db::connect(&db_path)?;
            let films = db::fetch_movies(&conn, limit)?;
            if films.is_empty() {
                println!("No movies stored. Run 'run' first.");
                return Ok(());
            }
            print_films(&films);
            Ok(())
        }
        Commands::Stats { db } => {
            let db_path = db.unwrap_or_else(|| PathBuf::from(db::DEFAULT_DB_PATH));
            let conn = db::connect(&db_path)?;
            let s = db::get_stats(&conn)?;
            println!("Movies:      {}", s.movies);
            println!("Total gross: ${}", group_digits(s.total_gross));
            if let (Some(lo), Some(hi)) = (s.earliest_year, s.latest_year) {
                println!("Years:       {}-{}", lo, hi);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_films(films: &[db::FilmRecord]) {
    println!("{:>3} | {:<44} | {:>4} | {:>15}", "#", "Title", "Year", "Worldwide gross");
    println!("{}", "-".repeat(75));
    for (i, f) in films.iter().enumerate() {
        println!(
            "{:>3} | {:<44} | {:>4} | {:>15}",
            i + 1,
            truncate(&f.title, 44),
            f.year,
            format!("${}", group_digits(f.worldwide_gross)),
        );
    }
    println!("\n{} movies", films.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

/// 2847397339 → "2,847,397,339"
fn group_digits(n: i64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
