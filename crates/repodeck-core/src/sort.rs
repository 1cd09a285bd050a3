use chrono::{DateTime, FixedOffset};

use crate::models::Repository;

/// Which column orders the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Updated,
    Stars,
    Forks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn flip(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current (criterion, direction) pair. Starts unsorted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl SortState {
    /// Header-click behavior: a new key starts ascending, the same key flips
    /// the direction.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.order = self.order.flip();
        } else {
            self.key = Some(key);
            self.order = SortOrder::Ascending;
        }
    }
}

/// Reorder `repos` per the sort state. Pure: the input is left untouched and
/// a new vector comes back. The underlying sort is stable, so tie groups keep
/// their incoming order in either direction. No key means no reordering at all.
pub fn sorted(repos: &[Repository], state: &SortState) -> Vec<Repository> {
    let mut out: Vec<Repository> = repos.to_vec();
    let Some(key) = state.key else {
        return out;
    };

    let compare = |a: &Repository, b: &Repository| match key {
        SortKey::Stars => a.stars.cmp(&b.stars),
        SortKey::Forks => a.forks.cmp(&b.forks),
        // Unparseable timestamps (None) order before every parseable one.
        SortKey::Updated => parse_timestamp(&a.updated_at).cmp(&parse_timestamp(&b.updated_at)),
    };

    // Descending flips the operands, not the output: equal keys still compare
    // Equal, so the stable sort keeps ties in incoming order either way.
    match state.order {
        SortOrder::Ascending => out.sort_by(compare),
        SortOrder::Descending => out.sort_by(|a, b| compare(b, a)),
    }
    out
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}
