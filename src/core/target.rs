//! Targeting grammar.
//!
//! Actions name their targets with short strings on the wire: `"player"`,
//! `"enemy<N>"` (zero-based monster index in the current room) or
//! `"all enemies"`. [`Target`] is the parsed form; [`TargetKind`] is the
//! looser descriptor a card carries, where a single enemy is still
//! unresolved ("an enemy") until play time supplies the index.
//!
//! ```
//! use deckcrawl::core::Target;
//!
//! assert_eq!("enemy0".parse::<Target>().unwrap(), Target::Enemy(0));
//! assert_eq!(Target::AllEnemies.to_string(), "all enemies");
//! assert!("enemy".parse::<Target>().is_err()); // ambiguous
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A fully resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The player.
    Player,
    /// A single monster, by zero-based index in the current room.
    Enemy(usize),
    /// Every monster in the current room.
    AllEnemies,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Player => write!(f, "player"),
            Target::Enemy(index) => write!(f, "enemy{index}"),
            Target::AllEnemies => write!(f, "all enemies"),
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Target::Player),
            "all enemies" => Ok(Target::AllEnemies),
            "enemy" => Err(Error::AmbiguousTarget),
            _ => match s.strip_prefix("enemy") {
                Some(index) => index
                    .parse::<usize>()
                    .map(Target::Enemy)
                    .map_err(|_| Error::UnknownTarget(s.to_string())),
                None => Err(Error::UnknownTarget(s.to_string())),
            },
        }
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// The target descriptor a card carries.
///
/// `Enemy` means "one enemy of the caller's choosing": it must be resolved
/// to a concrete index (or escalated to all enemies) before the card can
/// resolve. The other two need no extra input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    #[serde(rename = "player")]
    Player,
    #[serde(rename = "enemy")]
    Enemy,
    #[serde(rename = "all enemies")]
    AllEnemies,
}

impl TargetKind {
    /// The target this descriptor resolves to when the caller names none.
    ///
    /// A bare single-enemy descriptor is ambiguous and fails; the caller
    /// must supply `enemy<N>` or `all enemies`.
    pub fn default_target(self) -> Result<Target, Error> {
        match self {
            TargetKind::Player => Ok(Target::Player),
            TargetKind::AllEnemies => Ok(Target::AllEnemies),
            TargetKind::Enemy => Err(Error::AmbiguousTarget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grammar() {
        assert_eq!("player".parse::<Target>().unwrap(), Target::Player);
        assert_eq!("enemy0".parse::<Target>().unwrap(), Target::Enemy(0));
        assert_eq!("enemy12".parse::<Target>().unwrap(), Target::Enemy(12));
        assert_eq!(
            "all enemies".parse::<Target>().unwrap(),
            Target::AllEnemies
        );
    }

    #[test]
    fn test_bare_enemy_is_ambiguous() {
        assert_eq!("enemy".parse::<Target>(), Err(Error::AmbiguousTarget));
    }

    #[test]
    fn test_unknown_targets_fail() {
        for bad in ["enemies", "Player", "enemy-1", "enemyx", "all", ""] {
            assert_eq!(
                bad.parse::<Target>(),
                Err(Error::UnknownTarget(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for target in [Target::Player, Target::Enemy(3), Target::AllEnemies] {
            assert_eq!(target.to_string().parse::<Target>().unwrap(), target);
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Target::Enemy(1)).unwrap();
        assert_eq!(json, "\"enemy1\"");

        let parsed: Target = serde_json::from_str("\"all enemies\"").unwrap();
        assert_eq!(parsed, Target::AllEnemies);

        assert!(serde_json::from_str::<Target>("\"enemy\"").is_err());
    }

    #[test]
    fn test_default_target() {
        assert_eq!(
            TargetKind::Player.default_target().unwrap(),
            Target::Player
        );
        assert_eq!(
            TargetKind::AllEnemies.default_target().unwrap(),
            Target::AllEnemies
        );
        assert_eq!(
            TargetKind::Enemy.default_target(),
            Err(Error::AmbiguousTarget)
        );
    }
}
