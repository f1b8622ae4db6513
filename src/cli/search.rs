// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};

use folio::config::SiteConfig;
use folio::content::ContentStore;
use folio::controller::{ControllerState, LiveSearch, SearchSnapshot};
use folio::highlight::{excerpt, highlight};
use folio::index::{build_index, SearchIndex};
use folio::search::search_with_limit;
use folio::types::{Field, SearchResult};
use folio::{Error, Result};

use super::display::{
    count_label, render_excerpt, render_segments, score_value, section_bot, section_top, themed,
    use_colors, BLUE, DIM, GRAY,
};
use super::site::print_json;

fn load_index(config: &SiteConfig) -> Result<Arc<SearchIndex>> {
    let content = ContentStore::load(&config.content)?;
    let start = Instant::now();
    let index = build_index(content.documents(), config.search.clone());
    tracing::info!(
        documents = index.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "built search index"
    );
    Ok(Arc::new(index))
}

pub fn run_once(config: &SiteConfig, term: &str, limit: usize, json: bool) -> Result<()> {
    let index = load_index(config)?;
    let results = search_with_limit(&index, term, limit);
    if json {
        return print_json(&results);
    }
    print_results(config, term, &results);
    Ok(())
}

/// Each stdin line is the full contents of the search box after a keystroke.
/// Results print whenever a debounced evaluation settles.
pub async fn run_interactive(config: &SiteConfig, limit: usize, json: bool) -> Result<()> {
    let index = load_index(config)?;
    let mut live = LiveSearch::new(index, config.debounce);
    let mut updates = live.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut eof = false;

    loop {
        tokio::select! {
            line = lines.next_line(), if !eof => {
                match line.map_err(|e| Error::io("<stdin>", e))? {
                    Some(term) => live.input(term),
                    None => {
                        eof = true;
                        if live.state() != ControllerState::Typing {
                            break;
                        }
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                print_snapshot(config, snapshot, limit, json)?;
                if eof && live.state() != ControllerState::Typing {
                    break;
                }
            }
        }
    }

    tracing::debug!(evaluations = live.evaluations(), "interactive search finished");
    Ok(())
}

fn print_snapshot(config: &SiteConfig, mut snapshot: SearchSnapshot, limit: usize, json: bool) -> Result<()> {
    snapshot.results.truncate(limit);
    if json {
        return print_json(&snapshot.results);
    }
    print_results(config, &snapshot.term, &snapshot.results);
    Ok(())
}

fn print_results(config: &SiteConfig, term: &str, results: &[SearchResult]) {
    let colors = use_colors();
    let label = format!("\"{}\" · {}", term, count_label(results.len(), "result"));
    println!("{}", section_top(&label));

    if results.is_empty() {
        println!("  {}", themed(GRAY, &[DIM], "No posts match."));
    }

    let min_len = config.highlight.min_match_length;
    for (rank, result) in results.iter().enumerate() {
        let doc = &result.item;
        let title = highlight(&doc.title, result.regions(Field::Title), min_len);
        println!(
            "{:>3}. {}  {}",
            rank + 1,
            render_segments(&title, colors),
            score_value(result.score)
        );
        println!("     {}", themed(BLUE, &[], &doc.url));

        let regions = result.regions(Field::Content);
        if !regions.is_empty() {
            let best = result.best(Field::Content);
            let cut = excerpt(&doc.content, regions, best, config.highlight.excerpt_options());
            println!("     {}", render_excerpt(&cut, colors));
        }
    }
    println!("{}", section_bot());
}
