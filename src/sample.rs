//! Random demo fixture lists.
//!
//! Produces `Home vs Away` lines in the format [`MatchListParser`] reads,
//! drawn from a fixed team pool per region.
//!
//! [`MatchListParser`]: crate::parser::MatchListParser

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::error::DomainError;

/// Redraws of the away team before a same-team pairing is accepted.
const MAX_AWAY_REDRAWS: usize = 10;

const EPL: &[&str] = &[
    "Arsenal", "Aston Villa", "Bournemouth", "Brentford", "Brighton", "Burnley",
    "Chelsea", "Crystal Palace", "Everton", "Fulham", "Liverpool", "Luton Town",
    "Man City", "Man Utd", "Newcastle", "Nottm Forest", "Sheffield Utd", "Tottenham",
    "West Ham", "Wolves",
];

const LA_LIGA: &[&str] = &[
    "Alaves", "Almeria", "Athletic Bilbao", "Atletico Madrid", "Barcelona", "Cadiz",
    "Celta Vigo", "Getafe", "Girona", "Granada", "Las Palmas", "Mallorca", "Osasuna",
    "Rayo Vallecano", "Real Betis", "Real Madrid", "Real Sociedad", "Sevilla", "Valencia",
    "Villarreal",
];

const AFRICA: &[&str] = &[
    "Vipers SC", "KCCA FC", "SC Villa", "Express FC", "URA FC", "Simba SC", "Young Africans",
    "Azam FC", "Gor Mahia", "AFC Leopards", "Mamelodi Sundowns", "Orlando Pirates",
    "Kaizer Chiefs", "Al Ahly", "Zamalek", "Raja Casablanca",
];

const USA: &[&str] = &[
    "Inter Miami", "LA Galaxy", "LAFC", "New York City FC", "NY Red Bulls", "Seattle Sounders",
    "Atlanta United", "Orlando City", "Columbus Crew",
];

const REST: &[&str] = &[
    "Bayern Munich", "Dortmund", "PSG", "Marseille", "Juventus", "AC Milan", "Inter Milan",
    "Napoli", "Ajax", "PSV", "Porto", "Benfica", "Al Hilal", "Al Nassr",
];

/// Team pool a sample list is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Region {
    /// Every pool combined.
    #[default]
    All,
    Epl,
    LaLiga,
    Africa,
    Usa,
    Rest,
}

impl Region {
    /// Teams in this region.
    #[must_use]
    pub fn teams(&self) -> Vec<&'static str> {
        match self {
            Self::All => [EPL, LA_LIGA, AFRICA, USA, REST].concat(),
            Self::Epl => EPL.to_vec(),
            Self::LaLiga => LA_LIGA.to_vec(),
            Self::Africa => AFRICA.to_vec(),
            Self::Usa => USA.to_vec(),
            Self::Rest => REST.to_vec(),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Epl => "epl",
            Self::LaLiga => "laliga",
            Self::Africa => "africa",
            Self::Usa => "usa",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "epl" => Ok(Self::Epl),
            "laliga" | "la_liga" => Ok(Self::LaLiga),
            "africa" => Ok(Self::Africa),
            "usa" | "mls" => Ok(Self::Usa),
            "rest" => Ok(Self::Rest),
            other => Err(DomainError::UnknownRegion(other.to_string())),
        }
    }
}

/// `count` random `Home vs Away` lines from `region`.
///
/// Teams may repeat across lines. Within a line the away team is redrawn a
/// few times to avoid a team playing itself.
pub fn sample_fixtures<R: Rng + ?Sized>(count: usize, region: Region, rng: &mut R) -> Vec<String> {
    let pool = region.teams();
    (0..count)
        .filter_map(|_| {
            let home = *pool.choose(rng)?;
            let mut away = *pool.choose(rng)?;
            for _ in 0..MAX_AWAY_REDRAWS {
                if away != home {
                    break;
                }
                away = *pool.choose(rng)?;
            }
            Some(format!("{home} vs {away}"))
        })
        .collect()
}
