use std::fmt;

/// Phases of one shopping-list generation, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Collecting,
    Converting,
    Summing,
    Rounding,
    Categorizing,
    Done,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Collecting,
        Phase::Converting,
        Phase::Summing,
        Phase::Rounding,
        Phase::Categorizing,
        Phase::Done,
    ];

    /// The phase after this one. `Done` is terminal.
    pub fn next(self) -> Phase {
        match self {
            Self::Collecting => Self::Converting,
            Self::Converting => Self::Summing,
            Self::Summing => Self::Rounding,
            Self::Rounding => Self::Categorizing,
            Self::Categorizing | Self::Done => Self::Done,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Collecting => "collecting",
            Self::Converting => "converting",
            Self::Summing => "summing",
            Self::Rounding => "rounding",
            Self::Categorizing => "categorizing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
