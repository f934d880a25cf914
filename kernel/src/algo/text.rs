//! Substring extraction and two-valued string comparison.
//!
//! Strings are treated as NUL-terminated byte sequences: the end of a slice
//! and an embedded `0` byte both act as the terminator.

/// Error type for the text kernels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The output buffer could not be acquired.
    #[error("Unable to allocate memory.")]
    Allocation { requested: usize },
    /// The requested window reads past the end of the source text.
    #[error("substring [{start}, {start}+{length}) exceeds source of {available} bytes")]
    OutOfRange {
        start: usize,
        length: usize,
        available: usize,
    },
}

/// An owned `length + 1` byte buffer whose last byte is `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NulTerminated {
    bytes: Vec<u8>,
}

impl NulTerminated {
    /// Content bytes, without the terminator.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Full buffer including the trailing `0`.
    #[must_use]
    pub fn with_terminator(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up ownership without releasing the buffer.
    ///
    /// The memory stays allocated until the process exits.
    #[must_use]
    pub fn leak(self) -> &'static [u8] {
        self.bytes.leak()
    }
}

/// Copy `length` bytes starting at 1-based `position` into a fresh buffer.
///
/// `position` 0 behaves like 1 (the skip loop runs `position - 1` times and a
/// negative count skips nothing).
///
/// # Errors
///
/// - [`TextError::Allocation`] if `length + 1` bytes cannot be reserved.
/// - [`TextError::OutOfRange`] if the window extends past the source.
pub fn substring(text: &[u8], position: usize, length: usize) -> Result<NulTerminated, TextError> {
    let start = position.saturating_sub(1);
    let requested = length
        .checked_add(1)
        .ok_or(TextError::Allocation { requested: usize::MAX })?;
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(requested)
        .map_err(|_| TextError::Allocation { requested })?;

    let window = start
        .checked_add(length)
        .and_then(|end| text.get(start..end))
        .ok_or(TextError::OutOfRange {
            start,
            length,
            available: text.len(),
        })?;
    bytes.extend_from_slice(window);
    bytes.push(0);
    Ok(NulTerminated { bytes })
}

/// Outcome of [`compare`]. There is no "greater" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSignal {
    /// Both strings terminated at the same position with no mismatch.
    Equal,
    /// Anything else.
    NotEqual,
}

impl CompareSignal {
    /// The integer the comparison returns: `0` or `-1`.
    #[must_use]
    pub const fn as_c_int(self) -> i32 {
        match self {
            Self::Equal => 0,
            Self::NotEqual => -1,
        }
    }
}

/// Walk both strings in lockstep while bytes match.
///
/// Stops at the first mismatch or at either terminator. Reports `Equal` only
/// if both strings terminate at the stopping position.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> CompareSignal {
    let at = |s: &[u8], i: usize| s.get(i).copied().unwrap_or(0);
    let mut c = 0;
    while at(a, c) == at(b, c) {
        if at(a, c) == 0 || at(b, c) == 0 {
            break;
        }
        c += 1;
    }
    if at(a, c) == 0 && at(b, c) == 0 {
        CompareSignal::Equal
    } else {
        CompareSignal::NotEqual
    }
}
