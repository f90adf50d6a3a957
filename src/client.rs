use async_trait::async_trait;

use crate::error::Error;
use crate::types::{GameLog, LeagueName, Player, SportType, Team};

/// One league's upstream API, normalized into the shared domain model.
///
/// Implementations hold no state besides their transport. Adding a league
/// means adding an implementation and registering it in
/// [`crate::registry::adapter_for`].
#[async_trait]
pub trait LeagueAdapter: Send + Sync {
    fn league_name(&self) -> LeagueName;
    fn sport_type(&self) -> SportType;

    async fn list_teams(&self) -> Result<Vec<Team>, Error>;

    /// Upstreams generally lack a single-team endpoint, so the default
    /// re-lists every team and picks the match.
    async fn get_team(&self, id: &str) -> Result<Team, Error> {
        self.list_teams()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TeamNotFound(id.into()))
    }

    async fn list_players(&self, team_id: &str) -> Result<Vec<Player>, Error>;

    async fn get_player_games(&self, player_id: &str) -> Result<Vec<GameLog>, Error>;
}
