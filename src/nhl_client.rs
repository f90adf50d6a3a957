use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::LeagueAdapter;
use crate::config::Config;
use crate::error::{Error, JSONError};
use crate::nhl_mapping::{build_roster, jersey_numbers, map_game, map_team};
use crate::nhl_types::*;
use crate::types::{GameLog, LeagueName, Player, SportType, Team};

pub const NHL_BASE_URL: &str = "https://api-web.nhle.com/v1";

pub struct NhlAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl NhlAdapter {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.nhl_base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, path: &str) -> Result<T, Error> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, resource, "fetching");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(resource, status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| JSONError::new(resource, e).into())
    }

    async fn standings(&self) -> Result<StandingsResponse, Error> {
        self.get("standings", "/standings/now").await
    }

    async fn club_stats(&self, team_id: &str) -> Result<ClubStatsResponse, Error> {
        self.get("roster", &format!("/club-stats/{team_id}/now")).await
    }

    async fn roster(&self, team_id: &str) -> Result<RosterResponse, Error> {
        self.get("roster numbers", &format!("/roster/{team_id}/current"))
            .await
    }

    async fn game_log(&self, player_id: &str) -> Result<GameLogResponse, Error> {
        self.get("player game log", &format!("/player/{player_id}/game-log/now"))
            .await
    }
}

#[async_trait]
impl LeagueAdapter for NhlAdapter {
    fn league_name(&self) -> LeagueName {
        LeagueName::Nhl
    }

    fn sport_type(&self) -> SportType {
        SportType::Hockey
    }

    async fn list_teams(&self) -> Result<Vec<Team>, Error> {
        let standings = self.standings().await?;
        Ok(standings.standings.into_iter().map(map_team).collect())
    }

    async fn list_players(&self, team_id: &str) -> Result<Vec<Player>, Error> {
        let (club_stats, roster) = tokio::join!(self.club_stats(team_id), self.roster(team_id));
        let club_stats = club_stats?;

        // jersey numbers are optional; players still list without them
        let numbers = match roster {
            Ok(roster) => jersey_numbers(&roster),
            Err(e) => {
                warn!(team_id, error = %e, "roster unavailable, listing players without numbers");
                HashMap::new()
            }
        };

        Ok(build_roster(club_stats, &numbers))
    }

    async fn get_player_games(&self, player_id: &str) -> Result<Vec<GameLog>, Error> {
        let log = self.game_log(player_id).await?;
        Ok(log.game_log.into_iter().map(map_game).collect())
    }
}
