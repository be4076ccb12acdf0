use crate::cli::{TransitionArgs, WindowArgs};
use crate::error::{CliError, Result};
use linecat::workflows::query::CatalogReader;
use std::io::Write;
use tracing::info;

pub fn transition(
    reader: &mut CatalogReader,
    args: &TransitionArgs,
    out: &mut impl Write,
) -> Result<()> {
    let found = reader.get_transition(
        &args.key,
        &args.target.molecule,
        args.target.kind,
        args.filter.into(),
    )?;
    writeln!(out, "{}", found.line())?;
    Ok(())
}

/// Prints the anchor transition first, then its neighbours in file order.
pub fn window(reader: &mut CatalogReader, args: &WindowArgs, out: &mut impl Write) -> Result<()> {
    if args.width.is_nan() || args.width < 0.0 {
        return Err(CliError::Argument(format!(
            "Window width must be a non-negative number of MHz, got {}",
            args.width
        )));
    }

    let target = &args.target;
    let transitions = match (&args.anchor.key, args.anchor.frequency) {
        (Some(key), _) => reader.get_transitions(
            key,
            &target.molecule,
            target.kind,
            args.width,
            args.filter.into(),
        )?,
        (None, Some(frequency)) => reader.get_transitions_at(
            frequency,
            &target.molecule,
            target.kind,
            args.width,
            args.filter.into(),
        )?,
        (None, None) => {
            return Err(CliError::Argument(
                "Either --key or --frequency must be given".to_string(),
            ));
        }
    };

    info!(
        "Found {} transition(s) of '{}' in a {} MHz window.",
        transitions.len(),
        target.molecule,
        args.width
    );
    for transition in &transitions {
        writeln!(out, "{}", transition.line())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::commands::{fixtures, open_reader};
    use clap::Parser;
    use linecat::engine::error::CatalogError;
    use tempfile::tempdir;

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("linecat").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    fn run(root: &std::path::Path, args: &[&str]) -> Result<Vec<String>> {
        let mut reader = open_reader(&fixtures::catalog(root));
        let mut out = Vec::new();
        match command(args) {
            Commands::Transition(a) => transition(&mut reader, &a, &mut out)?,
            Commands::Window(a) => window(&mut reader, &a, &mut out)?,
            other => panic!("unexpected command {other:?}"),
        }
        Ok(String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect())
    }

    fn frequencies(lines: &[String]) -> Vec<f64> {
        lines
            .iter()
            .map(|l| l[..13].trim().parse().unwrap())
            .collect()
    }

    #[test]
    fn transition_prints_matching_line() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            &["transition", "230538", "-M", "CO", "-k", "jpl"],
        );
        // "CO" matches HCO+ first in directory order.
        assert!(matches!(
            result,
            Err(CliError::Catalog(CatalogError::TransitionNotFound { .. }))
        ));

        let lines = run(
            dir.path(),
            &["transition", "230538", "-M", "28001 CO", "-k", "jpl"],
        )
        .unwrap();
        assert_eq!(frequencies(&lines), vec![230538.0]);
    }

    #[test]
    fn transition_honours_filters() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            &[
                "transition",
                "230540",
                "-M",
                "28001 CO",
                "-k",
                "jpl",
                "--max-temperature",
                "100",
            ],
        );
        assert!(matches!(
            result,
            Err(CliError::Catalog(CatalogError::TransitionNotFound { .. }))
        ));
    }

    #[test]
    fn window_by_key_prints_anchor_first() {
        let dir = tempdir().unwrap();
        let lines = run(
            dir.path(),
            &[
                "window", "--key", "230540", "-M", "28001 CO", "-k", "jpl", "-w", "10",
            ],
        )
        .unwrap();
        assert_eq!(frequencies(&lines), vec![230540.0, 230538.0]);
    }

    #[test]
    fn window_by_frequency_anchors_on_nearest() {
        let dir = tempdir().unwrap();
        let lines = run(
            dir.path(),
            &[
                "window",
                "--frequency",
                "230538.5",
                "-M",
                "28001 CO",
                "-k",
                "jpl",
                "-w",
                "4",
                "--min-intensity",
                "-5",
            ],
        )
        .unwrap();
        assert_eq!(frequencies(&lines), vec![230538.0]);
    }

    #[test]
    fn window_rejects_negative_width() {
        let dir = tempdir().unwrap();
        let result = run(
            dir.path(),
            &[
                "window", "--key", "230540", "-M", "28001 CO", "-k", "jpl", "-w", "-1",
            ],
        );
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
