use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete, high-level action produced by the input adapter.
///
/// The game consumes actions, never raw key events. Actions the game does not
/// act on (`Noop`) are accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Steer toward the left lane.
    LaneLeft,
    /// Steer toward the right lane.
    LaneRight,
    /// No-op (an action kind the game does not recognize).
    Noop,
}

impl Action {
    /// The tag used for this action on the command line and in JSON.
    pub fn tag(self) -> &'static str {
        match self {
            Action::LaneLeft => "LANE_LEFT",
            Action::LaneRight => "LANE_RIGHT",
            Action::Noop => "NOOP",
        }
    }

    /// Parse an action tag leniently: any tag that is not a known action kind
    /// becomes [`Action::Noop`], which the game ignores.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: ParseActionError| {
            tracing::debug!("{err}, treating as NOOP");
            Action::Noop
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action tag `{0}` (expected LANE_LEFT, LANE_RIGHT or NOOP)")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LANE_LEFT" => Ok(Action::LaneLeft),
            "LANE_RIGHT" => Ok(Action::LaneRight),
            "NOOP" => Ok(Action::Noop),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags() {
        assert_eq!("LANE_LEFT".parse::<Action>(), Ok(Action::LaneLeft));
        assert_eq!("lane_right".parse::<Action>(), Ok(Action::LaneRight));
        assert_eq!(" NOOP ".parse::<Action>(), Ok(Action::Noop));
    }

    #[test]
    fn parse_unknown_tag_fails() {
        let err = "JUMP".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("JUMP".into()));
        assert!(err.to_string().contains("JUMP"));
    }

    #[test]
    fn from_tag_maps_unknown_kinds_to_noop() {
        assert_eq!(Action::from_tag("LANE_LEFT"), Action::LaneLeft);
        assert_eq!(Action::from_tag("lane_right"), Action::LaneRight);
        assert_eq!(Action::from_tag("JUMP"), Action::Noop);
        assert_eq!(Action::from_tag(""), Action::Noop);
    }

    #[test]
    fn display_matches_tag() {
        for action in [Action::LaneLeft, Action::LaneRight, Action::Noop] {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }
}
