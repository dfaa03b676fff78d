use thiserror::Error;

pub type MatchResult<T> = Result<T, MatchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid player action provided: {action} for player {player}")]
    InvalidPlayerAction { player: String, action: String },

    /// Never returned from the engine: the action is substituted and the error only logged.
    #[error("{player} cannot {action} in the current possession state, using {replacement}")]
    IllegalBallAction {
        player: String,
        action: String,
        replacement: String,
    },

    #[error("player {player} not on the pitch {axis}: {value}")]
    OutOfBoundsPosition {
        player: String,
        axis: char,
        value: f32,
    },

    #[error("unknown player id: {0}")]
    UnknownPlayer(u32),
}

impl From<serde_json::Error> for MatchError {
    fn from(e: serde_json::Error) -> Self {
        MatchError::MalformedInput(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = MatchError::OutOfBoundsPosition {
            player: String::from("Peter"),
            axis: 'X',
            value: -4.0,
        };

        assert_eq!(err.to_string(), "player Peter not on the pitch X: -4");
    }

    #[test]
    fn test_json_error_is_malformed_input() {
        let err: MatchError = serde_json::from_str::<u32>("{").unwrap_err().into();

        assert!(matches!(err, MatchError::MalformedInput(_)));
    }
}
