use crate::client::LeagueAdapter;
use crate::config::Config;
use crate::error::Error;
use crate::nhl_client::NhlAdapter;
use crate::types::LeagueName;

pub fn adapter_for(league: LeagueName, config: &Config) -> Result<Box<dyn LeagueAdapter>, Error> {
    match league {
        LeagueName::Nhl => Ok(Box::new(NhlAdapter::new(config)?)),
        other => Err(Error::UnsupportedLeague(other)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::SportType;

    #[test]
    fn test_nhl_adapter() {
        let adapter = adapter_for(LeagueName::Nhl, &Config::default()).unwrap();
        assert_eq!(adapter.league_name(), LeagueName::Nhl);
        assert_eq!(adapter.sport_type(), SportType::Hockey);
    }

    #[test]
    fn test_unsupported_league() {
        for league in [LeagueName::Nba, LeagueName::Nfl, LeagueName::Mlb, LeagueName::Mls] {
            let err = adapter_for(league, &Config::default()).err().unwrap();
            assert!(matches!(err, Error::UnsupportedLeague(l) if l == league));
        }
    }
}
