use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use solid::demo::Principle;
use solid::{logging, SolidConfig, SolidError};

const USAGE: &str = "usage: solid [srp|ocp|lsp|isp|dip|all]... [--config <path>]";

struct Args {
    principles: Vec<Principle>,
    config_path: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, SolidError> {
    let mut principles: Vec<Principle> = Vec::new();
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| SolidError::Config("--config needs a path".to_string()))?;
                config_path = Some(PathBuf::from(path));
            }
            "all" => principles.extend(Principle::ALL),
            other => principles.push(other.parse()?),
        }
    }

    // Run in the order given, each principle once; none named means all.
    let mut seen = Vec::new();
    principles.retain(|p| {
        let first = !seen.contains(p);
        seen.push(*p);
        first
    });
    if principles.is_empty() {
        principles = Principle::ALL.to_vec();
    }

    Ok(Args {
        principles,
        config_path,
    })
}

fn run(args: Args) -> Result<(), SolidError> {
    let config = match &args.config_path {
        Some(path) => SolidConfig::load(path)?,
        None => SolidConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for principle in args.principles {
        writeln!(out, "\n{}", format!("=== {principle} ===").bold().cyan())?;
        principle.run(&config, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    logging::init();

    let result = parse_args(env::args().skip(1)).and_then(run);
    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        eprintln!("{USAGE}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_defaults_to_all_principles() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed.principles, Principle::ALL.to_vec());
        assert!(parsed.config_path.is_none());
    }

    #[test]
    fn test_single_principle_with_config() {
        let parsed = parse_args(args(&["dip", "--config", "solid.toml"])).unwrap();
        assert_eq!(parsed.principles, vec![Principle::DependencyInversion]);
        assert_eq!(parsed.config_path, Some(PathBuf::from("solid.toml")));
    }

    #[test]
    fn test_several_principles_run_in_order() {
        let parsed = parse_args(args(&["srp", "isp", "--config", "a.toml", "dip"])).unwrap();
        assert_eq!(
            parsed.principles,
            vec![
                Principle::SingleResponsibility,
                Principle::InterfaceSegregation,
                Principle::DependencyInversion,
            ]
        );
        assert_eq!(parsed.config_path, Some(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_repeated_principles_run_once() {
        let parsed = parse_args(args(&["lsp", "all", "lsp"])).unwrap();
        assert_eq!(parsed.principles[0], Principle::LiskovSubstitution);
        assert_eq!(parsed.principles.len(), Principle::ALL.len());
    }

    #[test]
    fn test_missing_config_path() {
        assert!(matches!(parse_args(args(&["--config"])), Err(SolidError::Config(_))));
    }

    #[test]
    fn test_unknown_principle() {
        assert!(matches!(
            parse_args(args(&["dry"])),
            Err(SolidError::UnknownPrinciple(_))
        ));
    }
}
