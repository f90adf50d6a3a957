use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LocalizedName {
    pub default: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub team_name: LocalizedName,
    pub team_abbrev: LocalizedName,
    pub team_logo: String,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClubStatsResponse {
    #[serde(default)]
    pub skaters: Vec<PlayerSeasonStats>,
    #[serde(default)]
    pub goalies: Vec<PlayerSeasonStats>,
}

/// Season totals for one player. Skaters and goalies share the shape but
/// populate different fields.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonStats {
    pub player_id: u64,
    pub headshot: Option<String>,
    pub first_name: LocalizedName,
    pub last_name: LocalizedName,
    pub sweater_number: Option<u32>,
    #[serde(default)]
    pub position_code: String,
    pub games_played: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub points: Option<i64>,
    pub plus_minus: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub shutouts: Option<i64>,
    pub save_percentage: Option<f64>,
    pub goals_against_average: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub forwards: Vec<RosterPlayer>,
    #[serde(default)]
    pub defensemen: Vec<RosterPlayer>,
    #[serde(default)]
    pub goalies: Vec<RosterPlayer>,
}

impl RosterResponse {
    pub fn players(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.forwards
            .iter()
            .chain(self.defensemen.iter())
            .chain(self.goalies.iter())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: u64,
    pub sweater_number: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogResponse {
    #[serde(default)]
    pub game_log: Vec<GameLogEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    pub game_id: u64,
    pub game_date: String,
    pub opponent_abbrev: String,
    /// "H" home, "R" road.
    pub home_road_flag: String,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
    pub points: Option<i64>,
    pub plus_minus: Option<i64>,
    pub toi: Option<String>,
    // goalie only
    pub save_pctg: Option<f64>,
    pub goals_against: Option<i64>,
    pub shots_against: Option<i64>,
    pub decision: Option<String>,
}
