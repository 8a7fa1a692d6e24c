//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (search would need live upstreams).

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use bpyweb_core::mode::{GameMode, ModeFilter, RelaxMode};
use bpyweb_core::search::{MapStatus, Server};
use clap::Parser;
use cli::{Args, Command};

#[test]
fn test_subcommand_is_required() {
    assert!(Args::try_parse_from(["bpyweb"]).is_err());
}

#[test]
fn test_parse_search_defaults() {
    let args = Args::try_parse_from(["bpyweb", "search"]).unwrap();
    assert!(args.config.is_none());
    match args.command {
        Command::Search {
            query,
            mode,
            status,
            server,
            page,
            page_size,
            json,
        } => {
            assert!(query.is_none());
            assert_eq!(mode, ModeFilter::All);
            assert!(status.is_none());
            assert_eq!(server, Server::Private);
            assert_eq!(page, 1);
            assert_eq!(page_size, 50);
            assert!(!json);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_parse_search_with_filters() {
    let args = Args::try_parse_from([
        "bpyweb", "search", "camellia", "-m", "rx!osu", "-s", "loved", "--server", "all", "-p",
        "3", "--json",
    ])
    .unwrap();
    match args.command {
        Command::Search {
            query,
            mode,
            status,
            server,
            page,
            json,
            ..
        } => {
            assert_eq!(query.as_deref(), Some("camellia"));
            assert_eq!(mode, ModeFilter::Mode(GameMode::RelaxStandard));
            assert_eq!(status, Some(MapStatus::Loved));
            assert_eq!(server, Server::All);
            assert_eq!(page, 3);
            assert!(json);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_parse_search_osu_server() {
    let args = Args::try_parse_from(["bpyweb", "search", "--server", "osu!"]).unwrap();
    match args.command {
        Command::Search { server, .. } => assert_eq!(server, Server::Osu),
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_parse_search_invalid_status_fails() {
    let result = Args::try_parse_from(["bpyweb", "search", "-s", "banned"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_mode() {
    let args = Args::try_parse_from(["bpyweb", "mode", "taiko", "--relax", "rx"]).unwrap();
    match args.command {
        Command::Mode { mode, relax } => {
            assert_eq!(mode, GameMode::Taiko);
            assert_eq!(relax, Some(RelaxMode::Relax));
        }
        _ => panic!("Expected Mode command"),
    }
}

#[test]
fn test_parse_mode_numeric() {
    let args = Args::try_parse_from(["bpyweb", "mode", "8"]).unwrap();
    match args.command {
        Command::Mode { mode, relax } => {
            assert_eq!(mode, GameMode::AutopilotStandard);
            assert!(relax.is_none());
        }
        _ => panic!("Expected Mode command"),
    }
}

#[test]
fn test_parse_mode_composite_keeps_explicit_relax() {
    let args = Args::try_parse_from(["bpyweb", "mode", "rx!osu", "-r", "ap"]).unwrap();
    match args.command {
        Command::Mode { mode, relax } => {
            assert_eq!(mode, GameMode::RelaxStandard);
            assert_eq!(relax, Some(RelaxMode::Autopilot));
        }
        _ => panic!("Expected Mode command"),
    }
}

#[test]
fn test_parse_grade() {
    let args = Args::try_parse_from([
        "bpyweb", "grade", "--mods", "HDHR", "--n300", "500", "--n100", "12", "--miss", "1",
    ])
    .unwrap();
    match args.command {
        Command::Grade {
            mode,
            mods,
            n300,
            n100,
            n50,
            miss,
            accuracy,
            ..
        } => {
            assert_eq!(mode, GameMode::Standard);
            assert_eq!(mods, "HDHR");
            assert_eq!((n300, n100, n50, miss), (500, 12, 0, 1));
            assert!(accuracy.is_none());
        }
        _ => panic!("Expected Grade command"),
    }
}

#[test]
fn test_parse_level_and_color() {
    let args = Args::try_parse_from(["bpyweb", "level", "30000"]).unwrap();
    assert!(matches!(args.command, Command::Level { score: 30000 }));

    let args = Args::try_parse_from(["bpyweb", "color", "1.5", "6.66"]).unwrap();
    match args.command {
        Command::Color { stars } => assert_eq!(stars, vec![1.5, 6.66]),
        _ => panic!("Expected Color command"),
    }

    assert!(Args::try_parse_from(["bpyweb", "color"]).is_err());
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "bpyweb",
        "--config",
        "bpyweb.toml",
        "--api-url",
        "https://api.example.net",
        "--mirror-url",
        "https://mirror.example.org",
        "mods",
        "72",
    ])
    .unwrap();
    assert_eq!(args.config, Some("bpyweb.toml".into()));
    assert_eq!(args.api_url, Some("https://api.example.net".to_string()));
    assert_eq!(args.mirror_url, Some("https://mirror.example.org".to_string()));
    match args.command {
        Command::Mods { input } => assert_eq!(input, "72"),
        _ => panic!("Expected Mods command"),
    }
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["bpyweb", "invalid-command"]);
    assert!(result.is_err());
}
