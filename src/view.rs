use crate::types::GameLog;

pub const RECENT_GAMES: usize = 5;
pub const PAGE_SIZE: usize = 8;

/// Which slice of a game log is on screen. Upstream order is most recent
/// first, so `Recent` is a prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLogWindow {
    #[default]
    Recent,
    All,
}

impl GameLogWindow {
    pub fn apply<'a>(&self, games: &'a [GameLog]) -> &'a [GameLog] {
        match self {
            GameLogWindow::Recent => &games[..games.len().min(RECENT_GAMES)],
            GameLogWindow::All => games,
        }
    }
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// 1-based page of `items`; empty when the page is out of range.
pub fn page<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Role;

    fn games(n: usize) -> Vec<GameLog> {
        (0..n)
            .map(|i| GameLog {
                game_id: i.to_string(),
                date: String::new(),
                opponent: "vs BOS".into(),
                role: Role::Skater,
                stats: vec![],
            })
            .collect()
    }

    #[test]
    fn test_recent_window() {
        assert_eq!(GameLogWindow::default(), GameLogWindow::Recent);
        assert_eq!(GameLogWindow::Recent.apply(&games(3)).len(), 3);

        let log = games(12);
        let recent = GameLogWindow::Recent.apply(&log);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].game_id, "0");
        assert_eq!(GameLogWindow::All.apply(&log).len(), 12);
    }

    #[test]
    fn test_pagination() {
        let log = games(17);
        assert_eq!(total_pages(log.len()), 3);
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(8), 1);

        assert_eq!(page(&log, 1).len(), 8);
        assert_eq!(page(&log, 2)[0].game_id, "8");
        assert_eq!(page(&log, 3).len(), 1);
        assert!(page(&log, 4).is_empty());
        assert!(page(&log, 0).is_empty());
        assert!(page(&log, usize::MAX).is_empty());
    }
}
