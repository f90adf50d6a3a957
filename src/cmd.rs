use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use crate::client::LeagueAdapter;
use crate::config::Config;
use crate::registry::adapter_for;
use crate::summary::GameLogSummary;
use crate::types::{GameLog, HockeyPosition, LeagueName, Player, Position, Role, Stat, Team};
use crate::view::{page, total_pages, GameLogWindow};

#[derive(Parser, Debug)]
#[command(version, about = "League standings, rosters and player game logs")]
pub struct Cli {
    /// League to query
    #[arg(long, value_enum, global = true, default_value_t = LeagueName::Nhl)]
    pub league: LeagueName,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// League standings
    Teams,
    /// One team and its roster
    Team { team_id: String },
    /// A player's game log with totals
    Games {
        player_id: String,
        /// Team the player belongs to; adds season context to the totals
        #[arg(long)]
        team: Option<String>,
        /// Show the whole season instead of the last five games
        #[arg(long)]
        all: bool,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn stat_line(stats: &[Stat]) -> String {
    stats
        .iter()
        .map(|s| format!("{} {}", s.label, s.value))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn teams(adapter: &dyn LeagueAdapter, json: bool) -> anyhow::Result<()> {
    let teams = adapter.list_teams().await?;
    if json {
        return print_json(&teams);
    }

    println!("{} Standings", adapter.league_name());
    println!(" W-L | Team | Id");
    for team in teams {
        println!(" {}-{} | {} | {}", team.wins, team.losses, team.name, team.id);
    }
    Ok(())
}

#[derive(Serialize)]
struct TeamView {
    team: Team,
    players: Vec<Player>,
}

async fn team(adapter: &dyn LeagueAdapter, team_id: &str, json: bool) -> anyhow::Result<()> {
    let (team, players) =
        tokio::try_join!(adapter.get_team(team_id), adapter.list_players(team_id))?;
    if json {
        return print_json(&TeamView { team, players });
    }

    println!("{} ({}) {}W - {}L", team.name, team.abbreviation, team.wins, team.losses);
    println!(" # | Player | Pos | Stats");
    for player in players {
        println!(
            " {} | {} | {} | {}",
            player.number,
            player.name,
            player.position,
            stat_line(player.headline_stats())
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct GamesView<'a> {
    title: &'static str,
    totals: Vec<Stat>,
    page: usize,
    total_pages: usize,
    games: &'a [GameLog],
}

async fn games(
    adapter: &dyn LeagueAdapter,
    player_id: &str,
    team_id: Option<&str>,
    window: GameLogWindow,
    page_number: usize,
    json: bool,
) -> anyhow::Result<()> {
    let log = adapter.get_player_games(player_id).await?;

    // season stats come from the roster, when we know the team
    let player = match team_id {
        Some(team_id) => adapter
            .list_players(team_id)
            .await?
            .into_iter()
            .find(|p| p.id == player_id),
        None => None,
    };
    let role = match &player {
        Some(p) if p.position == Position::Hockey(HockeyPosition::Goalie) => Role::Goaltender,
        Some(_) => Role::Skater,
        None => log.first().map_or(Role::Skater, |g| g.role),
    };

    let shown = window.apply(&log);
    let (title, season_stats) = match window {
        GameLogWindow::All => ("Season Totals", player.as_ref().map(|p| p.stats.as_slice())),
        GameLogWindow::Recent => ("Last 5 Games Totals", None),
    };
    let totals = GameLogSummary::new(shown).totals(role, season_stats);
    let view = GamesView {
        title,
        totals,
        page: page_number,
        total_pages: total_pages(shown.len()),
        games: page(shown, page_number),
    };
    info!(player_id, games = log.len(), "loaded game log");

    if json {
        return print_json(&view);
    }

    if let Some(player) = &player {
        println!("{} #{} {}", player.name, player.number, player.position);
    }
    println!("{}: {}", view.title, stat_line(&view.totals));
    println!("Date | Opponent | Stats");
    for game in view.games {
        println!(" {} | {} | {}", game.date, game.opponent, stat_line(&game.stats));
    }
    println!("page {} of {}", view.page, view.total_pages.max(1));
    Ok(())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let adapter = adapter_for(self.league, &config)?;
        info!(league = %adapter.league_name(), sport = %adapter.sport_type(), "adapter ready");

        match self.cmd {
            Cmd::Teams => teams(adapter.as_ref(), self.json).await?,
            Cmd::Team { team_id } => team(adapter.as_ref(), &team_id, self.json).await?,
            Cmd::Games {
                player_id,
                team,
                all,
                page,
            } => {
                let window = if all {
                    GameLogWindow::All
                } else {
                    GameLogWindow::Recent
                };
                games(
                    adapter.as_ref(),
                    &player_id,
                    team.as_deref(),
                    window,
                    page,
                    self.json,
                )
                .await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["my_sports", "teams"]).unwrap();
        assert_eq!(cli.league, LeagueName::Nhl);
        assert!(!cli.json);
        assert!(matches!(cli.cmd, Cmd::Teams));
    }

    #[test]
    fn test_parse_games() {
        let cli = Cli::try_parse_from([
            "my_sports", "games", "8478402", "--team", "EDM", "--all", "--page", "2", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.cmd {
            Cmd::Games {
                player_id,
                team,
                all,
                page,
            } => {
                assert_eq!(player_id, "8478402");
                assert_eq!(team.as_deref(), Some("EDM"));
                assert!(all);
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_league() {
        let cli = Cli::try_parse_from(["my_sports", "--league", "nba", "teams"]).unwrap();
        assert_eq!(cli.league, LeagueName::Nba);
        assert!(Cli::try_parse_from(["my_sports", "--league", "xfl", "teams"]).is_err());
    }

    #[test]
    fn test_stat_line() {
        let stats = vec![Stat::new("G", 1i64), Stat::new("TOI", "18:30")];
        assert_eq!(stat_line(&stats), "G 1  TOI 18:30");
    }
}
