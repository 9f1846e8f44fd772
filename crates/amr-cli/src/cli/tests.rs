//! CLI parse tests.

use clap::Parser;

use super::{Cli, CliCommand};

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_resolve_single_url() {
    match parse(&["amr", "resolve", "https://game.example/img/logo.png"]) {
        CliCommand::Resolve { urls } => {
            assert_eq!(urls, vec!["https://game.example/img/logo.png"]);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_multiple_urls() {
    match parse(&["amr", "resolve", "/img/a.png", "/img/b.png"]) {
        CliCommand::Resolve { urls } => assert_eq!(urls.len(), 2),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_requires_a_url() {
    assert!(Cli::try_parse_from(["amr", "resolve"]).is_err());
}

#[test]
fn cli_parse_status() {
    match parse(&["amr", "status"]) {
        CliCommand::Status => {}
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_invalidate() {
    match parse(&["amr", "invalidate", "/img/logo.png"]) {
        CliCommand::Invalidate { url } => assert_eq!(url, "/img/logo.png"),
        _ => panic!("expected Invalidate"),
    }
}

#[test]
fn cli_parse_clear() {
    match parse(&["amr", "clear"]) {
        CliCommand::Clear => {}
        _ => panic!("expected Clear"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["amr", "check", "https://cdn.example/images/img/logo.png"]) {
        CliCommand::Check { url } => {
            assert_eq!(url, "https://cdn.example/images/img/logo.png");
        }
        _ => panic!("expected Check"),
    }
}
