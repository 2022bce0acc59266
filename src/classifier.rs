/// Files whose edits change a container image and therefore need a rebuild.
///
/// Matched as case-sensitive substrings of the full edited path, so
/// `apps/web/package.json` and `Dockerfile.dev` both count.
pub const DEFAULT_CRITICAL_PATTERNS: &[&str] = &[
    "package.json",
    "Dockerfile",
    "docker-compose.yml",
    "bun.lockb",
    "pnpm-lock.yaml",
    "pnpm-workspace.yaml",
    "turbo.json",
];

/// Ordered set of literal substrings that mark a path as critical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriticalPatternSet {
    patterns: Vec<String>,
}

/// Result of classifying an edited path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The path contains a critical pattern; the first match in set order is kept.
    Critical { pattern: String },
    /// Ordinary source edit, handled by hot reload.
    NonCritical,
}

impl CriticalPatternSet {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in set, with `extra` appended. Empty extras are dropped since
    /// an empty literal would match every path; repeats are kept once.
    pub fn with_extra(extra: &[String]) -> Self {
        let mut set = Self::default();
        for pattern in extra {
            if !pattern.is_empty() && !set.patterns.contains(pattern) {
                set.patterns.push(pattern.clone());
            }
        }
        set
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Classify `file_path` against the set.
    ///
    /// An empty path never matches, whatever the set contains.
    pub fn classify(&self, file_path: &str) -> Classification {
        if file_path.is_empty() {
            return Classification::NonCritical;
        }
        match self.patterns.iter().find(|p| file_path.contains(p.as_str())) {
            Some(pattern) => Classification::Critical {
                pattern: pattern.clone(),
            },
            None => Classification::NonCritical,
        }
    }
}

impl Default for CriticalPatternSet {
    fn default() -> Self {
        Self::new(DEFAULT_CRITICAL_PATTERNS.iter().copied())
    }
}

impl Classification {
    pub fn is_critical(&self) -> bool {
        matches!(self, Classification::Critical { .. })
    }
}
