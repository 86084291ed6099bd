//! Per-letter feedback status

/// Status of a letter, either on the board or in the alphabet tracker
///
/// The integer codes match the observation encoding:
/// - -1 = Unknown (no guess has revealed anything yet)
/// - 0 = Absent (gray)
/// - 1 = Present in the hidden word, wrong position (yellow)
/// - 2 = Correct position (green)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl Status {
    /// Lowest observation code
    pub const MIN_CODE: i8 = -1;

    /// Highest observation code
    pub const MAX_CODE: i8 = 2;

    /// Integer code used in observations
    #[inline]
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Unknown => -1,
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`Status::code`]
    #[must_use]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Self::Unknown),
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
