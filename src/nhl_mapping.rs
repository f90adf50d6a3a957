//! Normalization of NHL API shapes into the domain model.
//!
//! Everything here is pure; the HTTP side lives in `nhl_client`.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::format::{average, percentage, signed, ZERO_TOI};
use crate::nhl_types::{ClubStatsResponse, GameLogEntry, PlayerSeasonStats, RosterResponse, Standing};
use crate::types::{
    stat_value, GameLog, HockeyPosition, Player, Position, Role, Stat, StatValue, Team,
};

const GOALIE_CODE: &str = "G";

pub fn position_from_code(code: &str) -> Position {
    let position = match code {
        "C" => HockeyPosition::Center,
        "L" => HockeyPosition::LeftWing,
        "R" => HockeyPosition::RightWing,
        "D" => HockeyPosition::Defense,
        GOALIE_CODE => HockeyPosition::Goalie,
        _ => return Position::Unknown,
    };
    Position::Hockey(position)
}

pub fn map_team(standing: Standing) -> Team {
    Team {
        // abbreviation doubles as the routing key
        id: standing.team_abbrev.default.clone(),
        name: standing.team_name.default,
        abbreviation: standing.team_abbrev.default,
        logo_url: standing.team_logo,
        wins: standing.wins,
        losses: standing.losses,
    }
}

pub fn jersey_numbers(roster: &RosterResponse) -> HashMap<u64, u32> {
    roster
        .players()
        .filter_map(|p| p.sweater_number.map(|n| (p.id, n)))
        .collect()
}

/// Season stats for one player. A stat is only emitted when the upstream
/// field is present.
pub fn season_stats(p: &PlayerSeasonStats) -> Vec<Stat> {
    let mut stats = Vec::new();
    let mut push = |label: &'static str, value: Option<StatValue>| {
        if let Some(value) = value {
            stats.push(Stat { label, value });
        }
    };

    push("GP", p.games_played.map(StatValue::from));
    if p.position_code == GOALIE_CODE {
        push("W", p.wins.map(StatValue::from));
        push("L", p.losses.map(StatValue::from));
        push("SV%", p.save_percentage.map(percentage));
        push("GAA", p.goals_against_average.map(average));
        push("SO", p.shutouts.map(StatValue::from));
    } else {
        push("G", p.goals.map(StatValue::from));
        push("A", p.assists.map(StatValue::from));
        push("P", p.points.map(StatValue::from));
        push("+/-", p.plus_minus.map(signed));
    }

    stats
}

pub fn map_player(p: PlayerSeasonStats, numbers: &HashMap<u64, u32>) -> Player {
    let stats = season_stats(&p);
    Player {
        id: p.player_id.to_string(),
        name: format!("{} {}", p.first_name.default, p.last_name.default),
        position: position_from_code(&p.position_code),
        number: numbers
            .get(&p.player_id)
            .map(u32::to_string)
            .unwrap_or_default(),
        stats,
        headshot_url: p.headshot,
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Points, then goals, highest first. Ties keep upstream order.
pub fn sort_skaters(skaters: &mut [Player]) {
    skaters.sort_by(|a, b| {
        descending(stat_value(&a.stats, "P"), stat_value(&b.stats, "P"))
            .then_with(|| descending(stat_value(&a.stats, "G"), stat_value(&b.stats, "G")))
    });
}

/// Save percentage, highest first. Ties keep upstream order.
pub fn sort_goalies(goalies: &mut [Player]) {
    goalies.sort_by(|a, b| descending(stat_value(&a.stats, "SV%"), stat_value(&b.stats, "SV%")));
}

/// Builds the display roster: sorted skaters followed by sorted goalies.
pub fn build_roster(club_stats: ClubStatsResponse, numbers: &HashMap<u64, u32>) -> Vec<Player> {
    let mut skaters: Vec<Player> = club_stats
        .skaters
        .into_iter()
        .map(|p| map_player(p, numbers))
        .collect();
    sort_skaters(&mut skaters);

    let mut goalies: Vec<Player> = club_stats
        .goalies
        .into_iter()
        .map(|p| {
            let mut player = map_player(p, numbers);
            player.position = Position::Hockey(HockeyPosition::Goalie);
            player
        })
        .collect();
    sort_goalies(&mut goalies);

    skaters.append(&mut goalies);
    skaters
}

/// The game log carries no position, only a goalie-only field.
pub fn game_role(entry: &GameLogEntry) -> Role {
    if entry.save_pctg.is_some() {
        Role::Goaltender
    } else {
        Role::Skater
    }
}

pub fn opponent_label(entry: &GameLogEntry) -> String {
    let venue = if entry.home_road_flag == "H" { "vs" } else { "@" };
    format!("{venue} {}", entry.opponent_abbrev)
}

fn goalie_game_stats(entry: &GameLogEntry) -> Vec<Stat> {
    let mut stats = Vec::with_capacity(4);
    if let Some(decision) = entry.decision.as_deref().filter(|d| !d.is_empty()) {
        stats.push(Stat::new("DEC", decision));
    }
    if let Some(ga) = entry.goals_against {
        stats.push(Stat::new("GA", ga));
    }
    if let Some(sa) = entry.shots_against {
        stats.push(Stat::new("SA", sa));
    }
    if let Some(pct) = entry.save_pctg {
        stats.push(Stat::new("SV%", percentage(pct)));
    }
    stats
}

fn skater_game_stats(entry: &GameLogEntry) -> Vec<Stat> {
    let goals = entry.goals.unwrap_or(0);
    let assists = entry.assists.unwrap_or(0);
    let points = entry.points.unwrap_or(goals + assists);
    let toi = entry.toi.clone().unwrap_or_else(|| ZERO_TOI.into());

    vec![
        Stat::new("G", goals),
        Stat::new("A", assists),
        Stat::new("P", points),
        Stat::new("+/-", signed(entry.plus_minus.unwrap_or(0))),
        Stat::new("TOI", toi),
    ]
}

pub fn map_game(entry: GameLogEntry) -> GameLog {
    let role = game_role(&entry);
    let stats = match role {
        Role::Goaltender => goalie_game_stats(&entry),
        Role::Skater => skater_game_stats(&entry),
    };
    GameLog {
        game_id: entry.game_id.to_string(),
        opponent: opponent_label(&entry),
        date: entry.game_date,
        role,
        stats,
    }
}
