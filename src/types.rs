use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LeagueName {
    Nhl,
    Nfl,
    Mlb,
    Nba,
    Mls,
}

impl fmt::Display for LeagueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeagueName::Nhl => "NHL",
            LeagueName::Nfl => "NFL",
            LeagueName::Mlb => "MLB",
            LeagueName::Nba => "NBA",
            LeagueName::Mls => "MLS",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SportType {
    Hockey,
    Football,
    Baseball,
    Basketball,
    Soccer,
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SportType::Hockey => "hockey",
            SportType::Football => "football",
            SportType::Baseball => "baseball",
            SportType::Basketball => "basketball",
            SportType::Soccer => "soccer",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HockeyPosition {
    Center,
    LeftWing,
    RightWing,
    Defense,
    Goalie,
}

impl HockeyPosition {
    pub fn code(&self) -> &'static str {
        match self {
            HockeyPosition::Center => "C",
            HockeyPosition::LeftWing => "L",
            HockeyPosition::RightWing => "R",
            HockeyPosition::Defense => "D",
            HockeyPosition::Goalie => "G",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FootballPosition {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Kicker,
    Defense,
    OffensiveLine,
    DefensiveLine,
    Linebacker,
    Cornerback,
    Safety,
}

impl FootballPosition {
    pub fn code(&self) -> &'static str {
        match self {
            FootballPosition::Quarterback => "QB",
            FootballPosition::RunningBack => "RB",
            FootballPosition::WideReceiver => "WR",
            FootballPosition::TightEnd => "TE",
            FootballPosition::Kicker => "K",
            FootballPosition::Defense => "DEF",
            FootballPosition::OffensiveLine => "OL",
            FootballPosition::DefensiveLine => "DL",
            FootballPosition::Linebacker => "LB",
            FootballPosition::Cornerback => "CB",
            FootballPosition::Safety => "S",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseballPosition {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
}

impl BaseballPosition {
    pub fn code(&self) -> &'static str {
        match self {
            BaseballPosition::Pitcher => "P",
            BaseballPosition::Catcher => "C",
            BaseballPosition::FirstBase => "1B",
            BaseballPosition::SecondBase => "2B",
            BaseballPosition::ThirdBase => "3B",
            BaseballPosition::Shortstop => "SS",
            BaseballPosition::LeftField => "LF",
            BaseballPosition::CenterField => "CF",
            BaseballPosition::RightField => "RF",
            BaseballPosition::DesignatedHitter => "DH",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BasketballPosition {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl BasketballPosition {
    pub fn code(&self) -> &'static str {
        match self {
            BasketballPosition::PointGuard => "PG",
            BasketballPosition::ShootingGuard => "SG",
            BasketballPosition::SmallForward => "SF",
            BasketballPosition::PowerForward => "PF",
            BasketballPosition::Center => "C",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoccerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl SoccerPosition {
    pub fn code(&self) -> &'static str {
        match self {
            SoccerPosition::Goalkeeper => "GK",
            SoccerPosition::Defender => "DEF",
            SoccerPosition::Midfielder => "MID",
            SoccerPosition::Forward => "FWD",
        }
    }
}

/// Player position. Each sport has its own closed set of codes;
/// anything an adapter cannot place becomes `Unknown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    Hockey(HockeyPosition),
    Football(FootballPosition),
    Baseball(BaseballPosition),
    Basketball(BasketballPosition),
    Soccer(SoccerPosition),
    #[default]
    Unknown,
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Position::Hockey(p) => p.code(),
            Position::Football(p) => p.code(),
            Position::Baseball(p) => p.code(),
            Position::Basketball(p) => p.code(),
            Position::Soccer(p) => p.code(),
            Position::Unknown => "N/A",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Which stat schema a record follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Skater,
    Goaltender,
}

/// Counts are numbers; percentages, averages, time on ice and positive
/// differentials arrive pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(i64),
    Text(String),
}

impl StatValue {
    /// Numeric reading of the value, used for sorting and totals.
    /// Text that doesn't parse reads as zero.
    pub fn as_f64(&self) -> f64 {
        match self {
            StatValue::Number(n) => *n as f64,
            StatValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StatValue {
    fn from(n: i64) -> Self {
        StatValue::Number(n)
    }
}

impl From<u32> for StatValue {
    fn from(n: u32) -> Self {
        StatValue::Number(n.into())
    }
}

impl From<String> for StatValue {
    fn from(s: String) -> Self {
        StatValue::Text(s)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: StatValue,
}

impl Stat {
    pub fn new(label: &'static str, value: impl Into<StatValue>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Looks a stat up by label.
pub fn find_stat<'a>(stats: &'a [Stat], label: &str) -> Option<&'a Stat> {
    stats.iter().find(|s| s.label == label)
}

/// Numeric value of a stat, zero when the label is missing.
pub fn stat_value(stats: &[Stat], label: &str) -> f64 {
    find_stat(stats, label).map_or(0.0, |s| s.value.as_f64())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub logo_url: String,
    pub wins: u32,
    pub losses: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Jersey number, empty when the roster didn't provide one.
    pub number: String,
    pub stats: Vec<Stat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headshot_url: Option<String>,
}

impl Player {
    /// Stats shown on a roster card.
    pub fn headline_stats(&self) -> &[Stat] {
        &self.stats[..self.stats.len().min(4)]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLog {
    pub game_id: String,
    pub date: String,
    pub opponent: String,
    pub role: Role,
    pub stats: Vec<Stat>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stat_value_as_f64() {
        assert_eq!(StatValue::Number(-2).as_f64(), -2.0);
        assert_eq!(StatValue::from("0.917").as_f64(), 0.917);
        assert_eq!(StatValue::from("+3").as_f64(), 3.0);
        assert_eq!(StatValue::from("18:30").as_f64(), 0.0);
    }

    #[test]
    fn test_stat_value_serializes_untagged() {
        let stats = vec![Stat::new("G", 4i64), Stat::new("SV%", "0.917")];
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"[{"label":"G","value":4},{"label":"SV%","value":"0.917"}]"#
        );
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::Hockey(HockeyPosition::Defense).to_string(), "D");
        assert_eq!(Position::Baseball(BaseballPosition::FirstBase).to_string(), "1B");
        assert_eq!(Position::Unknown.to_string(), "N/A");
    }

    #[test]
    fn test_headline_stats() {
        let mut player = Player {
            id: "1".into(),
            name: "Test Player".into(),
            position: Position::Unknown,
            number: String::new(),
            stats: vec![Stat::new("GP", 10i64), Stat::new("G", 2i64)],
            headshot_url: None,
        };
        assert_eq!(player.headline_stats().len(), 2);

        player.stats.extend([
            Stat::new("A", 3i64),
            Stat::new("P", 5i64),
            Stat::new("+/-", "+1"),
        ]);
        let labels: Vec<_> = player.headline_stats().iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["GP", "G", "A", "P"]);
    }

    #[test]
    fn test_stat_value_lookup_defaults_to_zero() {
        let stats = vec![Stat::new("P", 12i64)];
        assert_eq!(stat_value(&stats, "P"), 12.0);
        assert_eq!(stat_value(&stats, "G"), 0.0);
    }
}
