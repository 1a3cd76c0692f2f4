use clap::Parser;
use std::path::PathBuf;
use uuid::Uuid;

use mock_interview::cli::{Cli, Commands};
use mock_interview::domain::models::{InterviewCategory, StorageBackend};

const SESSION_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

#[test]
fn test_parse_practice_with_category() {
    let cli = Cli::try_parse_from(vec![
        "mock-interview",
        "practice",
        "--category",
        "behavioral",
        "--job-title",
        "Data Engineer",
    ])
    .unwrap();

    match cli.command {
        Commands::Practice(args) => {
            assert_eq!(args.category, Some(InterviewCategory::Behavioral));
            assert!(args.resume.is_none());
            assert_eq!(args.owner, "anonymous");
            assert_eq!(args.job_title, "Data Engineer");
            assert_eq!(args.experience, "mid-level");
            assert_eq!(args.industry, "technology");
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
    assert!(cli.config.is_none());
}

#[test]
fn test_parse_practice_short_category_alias() {
    let cli = Cli::try_parse_from(vec!["mock-interview", "practice", "-t", "industry-specific"]).unwrap();

    match cli.command {
        Commands::Practice(args) => assert_eq!(args.category, Some(InterviewCategory::Industry)),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_practice_requires_category_or_resume() {
    assert!(Cli::try_parse_from(vec!["mock-interview", "practice"]).is_err());
    assert!(Cli::try_parse_from(vec!["mock-interview", "practice", "-t", "trivia"]).is_err());
}

#[test]
fn test_parse_practice_resume() {
    let cli = Cli::try_parse_from(vec!["mock-interview", "practice", "--resume", SESSION_ID]).unwrap();

    match cli.command {
        Commands::Practice(args) => {
            assert_eq!(args.resume, Some(Uuid::parse_str(SESSION_ID).unwrap()));
            assert!(args.category.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_resume_conflicts_with_category() {
    let result = Cli::try_parse_from(vec![
        "mock-interview",
        "practice",
        "--resume",
        SESSION_ID,
        "--category",
        "technical",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_history_filters() {
    let cli = Cli::try_parse_from(vec![
        "mock-interview",
        "history",
        "--owner",
        "alice",
        "-t",
        "technical",
    ])
    .unwrap();

    match cli.command {
        Commands::History(args) => {
            assert_eq!(args.owner, "alice");
            assert_eq!(args.category, Some(InterviewCategory::Technical));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_show_requires_valid_uuid() {
    let cli = Cli::try_parse_from(vec!["mock-interview", "show", SESSION_ID]).unwrap();
    match cli.command {
        Commands::Show(args) => assert_eq!(args.id, Uuid::parse_str(SESSION_ID).unwrap()),
        _ => panic!("Wrong top-level command"),
    }

    assert!(Cli::try_parse_from(vec!["mock-interview", "show", "not-a-uuid"]).is_err());
}

#[test]
fn test_parse_init_backend() {
    let cli = Cli::try_parse_from(vec!["mock-interview", "init"]).unwrap();
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.backend, StorageBackend::Sqlite);
            assert!(!args.force);
        }
        _ => panic!("Wrong top-level command"),
    }

    let cli = Cli::try_parse_from(vec!["mock-interview", "init", "--backend", "memory", "--force"]).unwrap();
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.backend, StorageBackend::Memory);
            assert!(args.force);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(vec![
        "mock-interview",
        "history",
        "--json",
        "--config",
        "custom/config.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("custom/config.yaml")));
}

#[test]
fn test_global_flags_before_subcommand() {
    let cli = Cli::try_parse_from(vec!["mock-interview", "-j", "-c", "other.yaml", "init"]).unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("other.yaml")));
    assert!(matches!(cli.command, Commands::Init(_)));
}
