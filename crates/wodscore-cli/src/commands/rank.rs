//! Rank command for turning an event's scores into a leaderboard.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;
use wodscore_core::{Leaderboard, Ranker, SchemeRegistry, ScoreEntry, ScoreStatus, ScoringConfig};

pub fn run(scores_path: &str, scheme_id: &str, config_path: Option<&str>, json: bool) -> Result<()> {
    let registry = SchemeRegistry::standard();
    let scheme = registry.resolve(scheme_id)?;
    let config = match config_path {
        Some(path) => load_config(Path::new(path))?,
        None => ScoringConfig::default(),
    };
    let scores = load_scores(Path::new(scores_path))?;

    let board = Ranker::new(&registry).rank_with(&scores, scheme, &config)?;
    debug!(
        "Ranked {} entries, {} excluded",
        board.entries.len(),
        board.excluded.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", format_leaderboard(&board));
    }
    Ok(())
}

/// Read a TOML scoring configuration. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<ScoringConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: ScoringConfig =
        toml::from_str(&content).context("Failed to parse scoring config TOML")?;
    config.tiebreaker.validate()?;
    Ok(config)
}

/// Read a JSON array of score entries.
pub fn load_scores(path: &Path) -> Result<Vec<ScoreEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scores file: {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse scores JSON")
}

/// Leaderboard as a colored console table, excluded entries last.
pub fn format_leaderboard(board: &Leaderboard) -> String {
    let mut output = String::new();
    let id_width = board
        .entries
        .iter()
        .map(|e| e.competitor_id.len())
        .chain(board.excluded.iter().map(|e| e.competitor_id.len()))
        .max()
        .unwrap_or(0)
        .max("COMPETITOR".len());

    let header = format!(
        "{:>5}  {:<id_width$}  {:>6}  {}",
        "PLACE", "COMPETITOR", "POINTS", "SCORE"
    );
    let _ = writeln!(
        output,
        "{} ({}, {} ranked)",
        board.scheme.bold(),
        board.algorithm.display_name(),
        board.entries.len()
    );
    let _ = writeln!(output, "{}", header.dimmed());

    for entry in &board.entries {
        let place = format!("{:>5}", entry.place);
        let place = match entry.place {
            1 => place.yellow().bold().to_string(),
            2 | 3 => place.cyan().to_string(),
            _ => place,
        };
        let mut score = entry.display_score.clone();
        if let Some(tb) = &entry.tiebreak_display {
            let _ = write!(score, " (TB: {})", tb);
        }
        let score = if entry.status == ScoreStatus::Scored {
            score
        } else {
            score.dimmed().to_string()
        };
        let _ = writeln!(
            output,
            "{}  {:<id_width$}  {:>6}  {}",
            place, entry.competitor_id, entry.points, score
        );
    }

    if !board.excluded.is_empty() {
        let _ = writeln!(output, "{}", "Excluded".red().bold());
        for excluded in &board.excluded {
            let _ = writeln!(
                output,
                "  {:<id_width$}  {}",
                excluded.competitor_id,
                excluded.reason.to_string().red()
            );
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wodscore_core::{
        PointsConfig, Scheme, ScoringAlgorithm, StatusTreatment, TiebreakMethod,
    };

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_toml() {
        let file = write_temp(
            r#"
algorithm = "online"

[traditional]
first_place_points = 200
step = 10

[tiebreaker]
primary = "head_to_head"
head_to_head_event_id = "final"

[status_handling]
dnf = "zero"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.algorithm, ScoringAlgorithm::Online);
        assert_eq!(config.traditional, PointsConfig::new(200, 10));
        assert_eq!(config.tiebreaker.primary, TiebreakMethod::HeadToHead);
        assert_eq!(config.status_handling.dnf, StatusTreatment::Zero);
        assert_eq!(config.status_handling.withdrawn, StatusTreatment::Exclude);
    }

    #[test]
    fn test_load_config_empty_uses_defaults() {
        let file = write_temp("");
        assert_eq!(load_config(file.path()).unwrap(), ScoringConfig::default());
    }

    #[test]
    fn test_load_config_rejects_incomplete_head_to_head() {
        let file = write_temp("[tiebreaker]\nprimary = \"head_to_head\"\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/scoring.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_scores_and_format() {
        let file = write_temp(
            r#"[
                {"competitor_id": "amy", "value": 754000},
                {"competitor_id": "ben", "value": 754000, "tiebreak": {"scheme": "time", "value": 400000}},
                {"competitor_id": "cal", "status": "dnf"},
                {"competitor_id": "dee"}
            ]"#,
        );
        let scores = load_scores(file.path()).unwrap();
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[2].status, ScoreStatus::Dnf);

        let registry = SchemeRegistry::standard();
        let board = Ranker::new(&registry)
            .rank_with(&scores, Scheme::Time, &ScoringConfig::default())
            .unwrap();
        let table = format_leaderboard(&board);
        assert!(table.contains("amy"));
        assert!(table.contains("TB: 6:40"));
        assert!(table.contains("DNF"));
        assert!(table.contains("Excluded"));
        assert!(table.contains("no score submitted"));
    }
}
