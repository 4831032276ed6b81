use std::collections::HashSet;
use std::fs;
use std::time::Instant;

use clap::Parser;

use ferret::{
    load_corpus, load_weights, Category, FieldWeights, Record, ScoredResult, SearchEngine,
    SearchOptions, SortOrder,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            category,
            sort,
            weights,
            json,
        } => run_search(&corpus, &query, limit, category, sort, weights.as_deref(), json),
        Commands::Inspect { corpus } => run_inspect(&corpus),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    corpus_path: &str,
    query: &str,
    limit: usize,
    category: Option<Category>,
    sort: SortOrder,
    weights_path: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let records = load_corpus(corpus_path).map_err(|e| e.to_string())?;
    let weights = match weights_path {
        Some(path) => load_weights(path).map_err(|e| e.to_string())?,
        None => FieldWeights::default(),
    };

    let engine = SearchEngine::with_weights(weights);
    let options = SearchOptions {
        limit,
        category,
        order: sort,
    };

    let started = Instant::now();
    let results = engine
        .search_with_options(&records, query, &options)
        .map_err(|e| e.to_string())?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    if json {
        let serialized = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{}", serialized);
        return Ok(());
    }

    print_results(query, &options, records.len(), &results, elapsed_ms);
    Ok(())
}

fn print_results(
    query: &str,
    options: &SearchOptions,
    corpus_len: usize,
    results: &[ScoredResult],
    elapsed_ms: f64,
) {
    println!();
    section_top("SEARCH");
    row(&format!(
        "  Query:    {}",
        themed(WHITE, &[BOLD], &format!("{:?}", query))
    ));
    row(&format!("  Corpus:   {} records", corpus_len));
    if let Some(category) = options.category {
        row(&format!("  Filter:   category = {}", category));
    }
    if options.order != SortOrder::Relevance {
        row(&format!("  Order:    {}", options.order));
    }
    row(&format!("  Matches:  {}", results.len()));
    row(&format!("  Time:     {} ms", timing_ms(elapsed_ms)));
    section_mid("RESULTS");

    if results.is_empty() {
        row("");
        row(&themed(
            GRAY,
            &[],
            "  Nothing matched. Check the spelling, or try a broader query.",
        ));
        row("");
    } else {
        for (rank, hit) in results.iter().enumerate() {
            print_hit(rank + 1, hit);
        }
        row("");
    }

    section_bot();
    println!();
}

fn print_hit(rank: usize, hit: &ScoredResult) {
    let record = &hit.record;
    row("");
    row(&format!(
        "  {:>2}. {}  {} {}",
        rank,
        score_value(hit.score),
        pad_right(&category_badge(record.category), 15),
        themed(WHITE, &[BOLD], &truncate_text(&record.title, 44)),
    ));
    if !record.snippet.is_empty() {
        row(&format!(
            "      {}",
            styled(&[DIM], &truncate_text(&record.snippet, BOX_WIDTH - 8))
        ));
    }
    let byline = match &record.author {
        Some(author) => format!("{} · {} · {}", record.source, author, date_of(&record.timestamp)),
        None => format!("{} · {}", record.source, date_of(&record.timestamp)),
    };
    row(&format!("      {}", themed(GRAY, &[], &byline)));
}

/// The date half of an RFC 3339 timestamp; falls back to the raw string.
fn date_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

fn run_inspect(corpus_path: &str) -> Result<(), String> {
    let records = load_corpus(corpus_path).map_err(|e| e.to_string())?;
    let file_size = fs::metadata(corpus_path)
        .map(|meta| meta.len() as usize)
        .unwrap_or(0);

    println!();
    double_header();
    title("FERRET CORPUS INSPECTOR");
    double_divider();
    row_double(&format!("  File:     {}", truncate_path(corpus_path, 55)));
    row_double(&format!("  Size:     {}", format_size(file_size)));
    row_double(&format!("  Records:  {}", records.len()));
    double_footer();
    println!();

    if records.is_empty() {
        println!(
            "{}",
            themed(GRAY, &[], "Corpus is valid but contains no records.")
        );
        println!();
        return Ok(());
    }

    print_breakdown(&records);
    println!();
    Ok(())
}

fn print_breakdown(records: &[Record]) {
    const BAR_WIDTH: usize = 24;

    let counts: Vec<(Category, usize)> = Category::ALL
        .iter()
        .map(|&category| {
            let count = records.iter().filter(|r| r.category == category).count();
            (category, count)
        })
        .collect();
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);

    section_top("CATEGORIES");
    row("");
    for (category, count) in &counts {
        let filled = if *count == 0 {
            0
        } else {
            ((*count * BAR_WIDTH) / max_count).max(1)
        };
        let bar = format!(
            "{}{}",
            themed(GREEN, &[], &"█".repeat(filled)),
            themed(GRAY, &[], &"░".repeat(BAR_WIDTH - filled)),
        );
        let pct = *count as f64 / records.len() as f64 * 100.0;
        row(&format!(
            "  {} {}  {:>4}  {:>5.1}%",
            pad_right(&category_badge(*category), 15),
            bar,
            count,
            pct
        ));
    }
    row("");

    section_mid("AUTHORS");
    row("");
    let authors: HashSet<&str> = records.iter().filter_map(|r| r.author.as_deref()).collect();
    let attributed = records.iter().filter(|r| r.author.is_some()).count();
    row(&format!(
        "  Distinct authors:  {:>4}   ({} of {} records attributed)",
        authors.len(),
        attributed,
        records.len()
    ));
    row("");

    section_mid("TIMESTAMPS");
    row("");
    // RFC 3339 strings order lexicographically
    let oldest = records.iter().map(|r| r.timestamp.as_str()).min().unwrap_or("-");
    let newest = records.iter().map(|r| r.timestamp.as_str()).max().unwrap_or("-");
    row(&format!("  Oldest:   {}", oldest));
    row(&format!("  Newest:   {}", newest));
    row("");
    section_bot();
}
