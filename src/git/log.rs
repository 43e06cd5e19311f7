// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit subject enumeration through `git log`.

use crate::ci::CommitRange;
use crate::error::{CheckError, GitError, Result};
use std::path::Path;
use std::process::Command;

/// Character wrapped around each subject by [`SUBJECT_FORMAT`].
pub const SUBJECT_QUOTE: char = '\'';

/// Pretty format printing one quoted subject per commit.
pub const SUBJECT_FORMAT: &str = "--pretty=format:'%s'";

/// List the subjects of every commit in `range`.
pub fn subjects_in_range(range: &CommitRange, workdir: Option<&Path>) -> Result<Vec<String>> {
    let revisions = range.revision_range();
    let command = format!("git log {} {}", revisions, SUBJECT_FORMAT);
    tracing::debug!("Running: {}", command);

    let mut cmd = Command::new("git");
    cmd.arg("log").arg(&revisions).arg(SUBJECT_FORMAT);
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| {
        CheckError::Git(GitError::SpawnFailed {
            command: command.clone(),
            message: e.to_string(),
        })
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CheckError::Git(GitError::CommandFailed {
            command,
            message: stderr.trim().to_string(),
        }));
    }

    let stdout = String::from_utf8(output.stdout).map_err(|e| {
        CheckError::Git(GitError::InvalidOutput {
            message: e.to_string(),
        })
    })?;

    let subjects = parse_subjects(&stdout);
    tracing::info!("found {} commits in {}", subjects.len(), revisions);
    Ok(subjects)
}

/// Split `git log` output into subjects, removing the quotes around each.
pub fn parse_subjects(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| unquote(line).to_string())
        .collect()
}

fn unquote(line: &str) -> &str {
    let line = line.strip_prefix(SUBJECT_QUOTE).unwrap_or(line);
    line.strip_suffix(SUBJECT_QUOTE).unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {:?} failed", args);
    }

    fn commit(dir: &Path, message: &str) {
        git(
            dir,
            &[
                "-c",
                "user.name=Test User",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
                "commit",
                "--allow-empty",
                "-q",
                "-m",
                message,
            ],
        );
    }

    #[test]
    fn test_parse_subjects() {
        let output = "'BUG: fix the thing properly'\n'MINOR: add a new keyword'";
        assert_eq!(
            parse_subjects(output),
            vec!["BUG: fix the thing properly", "MINOR: add a new keyword"]
        );
    }

    #[test]
    fn test_parse_strips_one_quote_pair() {
        assert_eq!(
            parse_subjects("'DOC: mention the 'quiet' mode'\n"),
            vec!["DOC: mention the 'quiet' mode"]
        );
        assert_eq!(parse_subjects("''it''"), vec!["'it'"]);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_subjects("").is_empty());
        assert!(parse_subjects("\n").is_empty());
    }

    #[test]
    fn test_subjects_in_range() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        commit(dir.path(), "MINOR: initial import of the tree");
        git(dir.path(), &["branch", "base"]);
        commit(dir.path(), "BUG: fix the thing properly");
        commit(dir.path(), "bug: fix it");

        let range = CommitRange::manual("base", "HEAD");
        let subjects = subjects_in_range(&range, Some(dir.path())).unwrap();
        assert_eq!(subjects, vec!["bug: fix it", "BUG: fix the thing properly"]);
    }

    #[test]
    fn test_unknown_revision_fails() {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "-q"]);
        commit(dir.path(), "MINOR: initial import of the tree");

        let range = CommitRange::manual("does-not-exist", "HEAD");
        let result = subjects_in_range(&range, Some(dir.path()));
        assert!(matches!(
            result,
            Err(CheckError::Git(GitError::CommandFailed { .. }))
        ));
    }
}
