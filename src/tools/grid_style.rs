use serde::{Deserialize, Serialize};

/// How cell borders are drawn over the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridStyle {
    #[default]
    None,
    Solid,
    Dotted,
}

impl GridStyle {
    /// Next style in the fixed rotation None → Solid → Dotted → None.
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Solid,
            Self::Solid => Self::Dotted,
            Self::Dotted => Self::None,
        }
    }

    /// Label written back onto the grid-style button.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Grid: none",
            Self::Solid => "Grid: solid",
            Self::Dotted => "Grid: dotted",
        }
    }

    pub fn has_lines(&self) -> bool {
        !matches!(self, Self::None)
    }
}
