//! Search command implementation.

use anyhow::{Result, bail};
use bpyweb_core::format::{format_compact, format_date, format_length};
use bpyweb_core::{ApiConfig, BeatmapDetails, BeatmapSearch, SearchQuery, difficulty_color};
use owo_colors::OwoColorize;

use super::paint;

/// Run the search command
pub fn run(config: &ApiConfig, query: &SearchQuery, json: bool) -> Result<()> {
    let search = BeatmapSearch::new(config);
    let result = search.search_beatmapsets(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_error() {
        bail!(
            "Search failed on every upstream: {}",
            result.queried_urls.join(", ")
        );
    }

    println!(
        "{} results from {} (page {}, ~{} total{})",
        result.results.len(),
        result.source.bold(),
        result.page,
        result.total,
        if result.has_more { ", more available" } else { "" }
    );

    for set in &result.results {
        print_set(set);
    }

    Ok(())
}

fn print_set(set: &BeatmapDetails) {
    let updated = set
        .last_update
        .map(|time| format!(", updated {}", format_date(time)))
        .unwrap_or_default();

    println!();
    println!(
        "{} {} - {} ({})",
        format!("#{}", set.set_id).dimmed(),
        set.artist,
        set.title.bold(),
        set.creator
    );
    println!(
        "  {} | {} plays | {} favourites{}",
        set.status,
        format_compact(set.play_count),
        format_compact(set.favourite_count),
        updated
    );

    for diff in &set.difficulties {
        let stars = format!("{:>5.2}*", diff.star_rating);
        println!(
            "  {} {:<10} {} [{}] {} BPM",
            paint(&stars, difficulty_color(diff.star_rating)),
            diff.mode.short_name(),
            diff.name,
            format_length(diff.total_length),
            diff.bpm
        );
    }
}
