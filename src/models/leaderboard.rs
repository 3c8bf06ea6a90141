//! Leaderboard ranking.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
}

impl Badge {
    /// Badges go to the top three ranks only.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Badge::Gold),
            2 => Some(Badge::Silver),
            3 => Some(Badge::Bronze),
            _ => None,
        }
    }
}

/// Whether the board covers every session or only the current meeting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Global,
    Meeting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub polls_attempted: u32,
    pub accuracy: u8,
    pub avg_time_secs: f32,
    pub total_points: u32,
    pub in_current_meeting: bool,
}

/// A ranked row: 1-based rank plus an optional badge.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub badge: Option<Badge>,
    pub entry: &'a LeaderboardEntry,
}

/// Rank entries by total points (highest first) for the given view.
///
/// Ties keep their input order.
pub fn rank_entries(entries: &[LeaderboardEntry], mode: ViewMode) -> Vec<RankedEntry<'_>> {
    let mut rows: Vec<&LeaderboardEntry> = entries
        .iter()
        .filter(|e| mode == ViewMode::Global || e.in_current_meeting)
        .collect();
    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    rows.into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            rank: i + 1,
            badge: Badge::for_rank(i + 1),
            entry,
        })
        .collect()
}

pub fn sample_entries() -> Vec<LeaderboardEntry> {
    vec![
        entry("1", "Carol Davis", 18, 95, 1.8, 1710, true),
        entry("2", "Alice Johnson", 15, 92, 2.3, 1380, true),
        entry("3", "Bob Smith", 12, 87, 3.1, 1044, false),
        entry("4", "David Wilson", 8, 78, 4.2, 624, true),
        entry("5", "Emma Brown", 10, 85, 2.9, 850, true),
    ]
}

fn entry(
    id: &str,
    name: &str,
    polls_attempted: u32,
    accuracy: u8,
    avg_time_secs: f32,
    total_points: u32,
    in_current_meeting: bool,
) -> LeaderboardEntry {
    LeaderboardEntry {
        id: id.into(),
        name: name.into(),
        polls_attempted,
        accuracy,
        avg_time_secs,
        total_points,
        in_current_meeting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_ranking_orders_by_points_and_awards_top_three() {
        let entries = sample_entries();
        let ranked = rank_entries(&entries, ViewMode::Global);

        let order: Vec<&str> = ranked.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(
            order,
            vec![
                "Carol Davis",
                "Alice Johnson",
                "Bob Smith",
                "Emma Brown",
                "David Wilson"
            ]
        );
        assert_eq!(ranked[0].badge, Some(Badge::Gold));
        assert_eq!(ranked[2].badge, Some(Badge::Bronze));
        assert_eq!(ranked[3].badge, None);
        assert_eq!(ranked[4].rank, 5);
    }

    #[test]
    fn meeting_view_reranks_the_subset() {
        let entries = sample_entries();
        let ranked = rank_entries(&entries, ViewMode::Meeting);

        assert_eq!(ranked.len(), 4);
        let emma = ranked.iter().find(|r| r.entry.name == "Emma Brown").unwrap();
        assert_eq!(emma.rank, 3);
        assert_eq!(emma.badge, Some(Badge::Bronze));
    }
}
