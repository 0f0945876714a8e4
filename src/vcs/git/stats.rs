//! Repository status counters and their prompt symbols.

/// Counters for one `git status` snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub ahead: usize,
    pub behind: usize,
    pub untracked: usize,
    pub not_staged: usize,
    pub staged: usize,
    pub conflicted: usize,
}

/// One counter, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Ahead,
    Behind,
    Staged,
    NotStaged,
    Untracked,
    Conflicted,
}

impl StatKind {
    pub fn symbol(self) -> &'static str {
        match self {
            StatKind::Ahead => "↑",
            StatKind::Behind => "↓",
            StatKind::Staged => "staged",
            StatKind::NotStaged => "+",
            StatKind::Untracked => "?",
            StatKind::Conflicted => "*",
        }
    }
}

impl RepoStats {
    /// Any uncommitted, staged, untracked, or conflicted change.
    ///
    /// Ahead/behind alone don't make a repository dirty.
    pub fn is_dirty(&self) -> bool {
        self.untracked + self.not_staged + self.staged + self.conflicted > 0
    }

    pub fn get(&self, kind: StatKind) -> usize {
        match kind {
            StatKind::Ahead => self.ahead,
            StatKind::Behind => self.behind,
            StatKind::Staged => self.staged,
            StatKind::NotStaged => self.not_staged,
            StatKind::Untracked => self.untracked,
            StatKind::Conflicted => self.conflicted,
        }
    }

    /// Sub-segment text for each non-zero counter, in rendering order.
    ///
    /// Each is a space, then the count (only when above one), then the symbol:
    /// `" 2↑"`, `" ↓"`, `" staged"`.
    pub fn labels(&self) -> Vec<(StatKind, String)> {
        use strum::IntoEnumIterator;

        StatKind::iter()
            .filter_map(|kind| match self.get(kind) {
                0 => None,
                1 => Some((kind, format!(" {}", kind.symbol()))),
                n => Some((kind, format!(" {}{}", n, kind.symbol()))),
            })
            .collect()
    }
}
