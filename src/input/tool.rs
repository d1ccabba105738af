//! Drawing tool selection.

use std::fmt;

/// Drawing tool selection.
///
/// The active tool determines how stroke segments are rendered while the user
/// drags. Tools are selected by key (`C` / `D`) or from the CLI at startup;
/// switching mid-gesture affects subsequent segments only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// White chalk stick - additive strokes with glow and grain (default)
    #[default]
    Chalk,
    /// Felt duster - subtractive wipe that leaves a faint dust film
    Duster,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Chalk => write!(f, "Chalk"),
            Tool::Duster => write!(f, "Duster"),
        }
    }
}

impl std::str::FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chalk" => Ok(Tool::Chalk),
            "duster" | "eraser" => Ok(Tool::Duster),
            other => Err(format!("unknown tool '{other}' (expected chalk or duster)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tool_names_case_insensitively() {
        assert_eq!("Chalk".parse::<Tool>().unwrap(), Tool::Chalk);
        assert_eq!("DUSTER".parse::<Tool>().unwrap(), Tool::Duster);
        assert_eq!("eraser".parse::<Tool>().unwrap(), Tool::Duster);
        assert!("crayon".parse::<Tool>().is_err());
    }
}
