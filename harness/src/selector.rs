//! Selector decoding: CLI bytes → one binary decision per position.
//!
//! Byte `'0'` selects the low arm; every other byte selects the high arm.
//! Decisions are independent of each other and produced left to right.

/// Which arm of a decision is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Selector byte `'0'`.
    Low,
    /// Any other selector byte.
    High,
}

impl Side {
    /// Decode one selector byte.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        if byte == b'0' {
            Self::Low
        } else {
            Self::High
        }
    }

    /// Canonical name for traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// One binary branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Position in the selector (and in the layout).
    pub index: usize,
    /// The arm chosen at this position.
    pub side: Side,
}

/// How selector length is checked against the decision count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorMode {
    /// Length must equal the decision count.
    #[default]
    Exact,
    /// Bytes past the decision count are ignored. Too-short is still fatal.
    Prefix,
}

/// Typed failure for selector decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Fewer bytes than decisions.
    #[error("selector too short: need {required} characters, got {actual}")]
    TooShort { required: usize, actual: usize },
    /// More bytes than decisions under [`SelectorMode::Exact`].
    #[error("selector length {actual} does not match decision count {required}")]
    LengthMismatch { required: usize, actual: usize },
}

/// A decoded, immutable selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    raw: Vec<u8>,
    decisions: Vec<Decision>,
}

impl Selector {
    /// Decode `raw` for a layout with `decision_count` decisions.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::TooShort`] if `raw` has fewer bytes than
    /// decisions, or [`SelectorError::LengthMismatch`] if it has more and
    /// `mode` is [`SelectorMode::Exact`].
    pub fn decode(
        raw: &[u8],
        decision_count: usize,
        mode: SelectorMode,
    ) -> Result<Self, SelectorError> {
        if raw.len() < decision_count {
            return Err(SelectorError::TooShort {
                required: decision_count,
                actual: raw.len(),
            });
        }
        if mode == SelectorMode::Exact && raw.len() != decision_count {
            return Err(SelectorError::LengthMismatch {
                required: decision_count,
                actual: raw.len(),
            });
        }
        let decisions = raw[..decision_count]
            .iter()
            .enumerate()
            .map(|(index, &byte)| Decision {
                index,
                side: Side::from_byte(byte),
            })
            .collect();
        Ok(Self {
            raw: raw.to_vec(),
            decisions,
        })
    }

    /// The bytes as supplied on the command line.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Decisions in evaluation order.
    #[must_use]
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }
}
