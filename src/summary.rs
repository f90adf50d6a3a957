use crate::format::{percentage, signed, toi_minutes};
use crate::types::{find_stat, stat_value, GameLog, Role, Stat, StatValue};

/// Totals over a window of a player's games.
pub struct GameLogSummary<'a>(&'a [GameLog]);

impl<'a> GameLogSummary<'a> {
    pub fn new(games: &'a [GameLog]) -> Self {
        Self(games)
    }

    /// `season_stats` supplies GAA, which game logs can't reproduce.
    pub fn totals(&self, role: Role, season_stats: Option<&[Stat]>) -> Vec<Stat> {
        if self.0.is_empty() {
            return Vec::new();
        }
        match role {
            Role::Goaltender => self.goaltender(season_stats),
            Role::Skater => self.skater(),
        }
    }

    fn games_played(&self) -> i64 {
        self.0.len() as i64
    }

    fn sum(&self, label: &str) -> i64 {
        self.0
            .iter()
            .map(|g| stat_value(&g.stats, label) as i64)
            .sum()
    }

    fn decisions(&self, decision: &str) -> i64 {
        self.0
            .iter()
            .filter(|g| {
                find_stat(&g.stats, "DEC")
                    .is_some_and(|s| matches!(&s.value, StatValue::Text(d) if d == decision))
            })
            .count() as i64
    }

    fn goaltender(&self, season_stats: Option<&[Stat]>) -> Vec<Stat> {
        let goals_against = self.sum("GA");
        let shots_against = self.sum("SA");
        let save_pct = if shots_against > 0 {
            percentage((shots_against - goals_against) as f64 / shots_against as f64)
        } else {
            percentage(0.0)
        };

        let mut stats = vec![
            Stat::new("GP", self.games_played()),
            Stat::new("W", self.decisions("W")),
            Stat::new("L", self.decisions("L")),
            Stat::new("GA", goals_against),
            Stat::new("SA", shots_against),
            Stat::new("SV%", save_pct),
        ];
        if let Some(gaa) = season_stats.and_then(|s| find_stat(s, "GAA")) {
            stats.push(gaa.clone());
        }
        stats
    }

    fn skater(&self) -> Vec<Stat> {
        let goals = self.sum("G");
        let assists = self.sum("A");
        let toi: i64 = self
            .0
            .iter()
            .filter_map(|g| find_stat(&g.stats, "TOI"))
            .map(|s| toi_minutes(&s.value.to_string()))
            .sum();

        vec![
            Stat::new("GP", self.games_played()),
            Stat::new("G", goals),
            Stat::new("A", assists),
            Stat::new("P", goals + assists),
            Stat::new("+/-", signed(self.sum("+/-"))),
            Stat::new("TOI", toi),
        ]
    }
}
