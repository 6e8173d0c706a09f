//! Ignore rules for working-tree listings
//!
//! `.microgitignore` holds newline-separated glob patterns. A path is ignored
//! when a pattern matches either its full relative path or its file name.
//! Blank lines and lines starting with `#` are skipped. The metadata directory
//! and the ignore file itself are always ignored, so neither is ever staged or
//! removed by a checkout.

use anyhow::Context;
use glob::{MatchOptions, Pattern};
use std::path::Path;

pub const METADATA_DIR: &str = ".microgit";
pub const IGNORE_FILE: &str = ".microgitignore";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                Pattern::new(line.trim_end_matches('/'))
                    .with_context(|| format!("invalid ignore pattern: {line}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Read the ignore file from the workspace root; a missing file ignores nothing
    pub fn load(workspace_path: &Path) -> anyhow::Result<Self> {
        let ignore_path = workspace_path.join(IGNORE_FILE);

        if !ignore_path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&ignore_path)
            .with_context(|| format!("failed to read ignore file at {:?}", ignore_path))?;

        Self::parse(&content)
    }

    /// Check a path relative to the workspace root
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        let in_metadata_dir = relative_path
            .components()
            .any(|component| component.as_os_str() == METADATA_DIR);
        if in_metadata_dir || relative_path == Path::new(IGNORE_FILE) {
            return true;
        }

        // a pattern matching a directory also hides everything beneath it
        relative_path.ancestors().any(|ancestor| {
            let Some(name) = ancestor.file_name() else {
                return false;
            };
            let name = name.to_string_lossy();
            let ancestor_path = ancestor.to_string_lossy().replace('\\', "/");

            self.patterns.iter().any(|pattern| {
                pattern.matches_with(&name, MATCH_OPTIONS)
                    || pattern.matches_with(&ancestor_path, MATCH_OPTIONS)
            })
        })
    }
}
