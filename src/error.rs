//! Central error types for the MethodXML encoder.
//!
//! Only *data* errors live here: text that cannot be unescaped, and marker
//! sequences that cannot be paired into ranges. Contract violations by the
//! caller (rewinding a checkpoint forward, closing an element whose open tag
//! was rewound away) are programmer errors and panic immediately instead of
//! returning a variant — see [`crate::writer::MarkupWriter::rewind`].

use core::fmt;

/// All recoverable error conditions of the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An `&` begins a sequence that is none of the three known escape
    /// tokens (`&lt;` `&gt;` `&amp;`).
    InvalidEscape {
        /// Byte-Offset des `&` im Eingabetext.
        offset: usize,
    },
    /// An `&` is never terminated by a `;` before the input ends.
    UnclosedEscape {
        /// Byte-Offset des `&` im Eingabetext.
        offset: usize,
    },
    /// A close marker without a matching open marker, or open markers left
    /// dangling at the end of the sequence.
    UnbalancedMarkers {
        /// Position des Markers der die Balance verletzt.
        position: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape { offset } => {
                write!(f, "invalid escape token at byte offset {offset} (expected &lt; &gt; or &amp;)")
            }
            Self::UnclosedEscape { offset } => {
                write!(f, "unclosed escape token at byte offset {offset} (missing ';')")
            }
            Self::UnbalancedMarkers { position } => {
                write!(f, "unbalanced open/close markers at position {position}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_escape_display() {
        let e = Error::InvalidEscape { offset: 7 };
        let msg = e.to_string();
        assert!(msg.contains("invalid escape"), "{msg}");
        assert!(msg.contains("7"), "{msg}");
    }

    #[test]
    fn unclosed_escape_display() {
        let e = Error::UnclosedEscape { offset: 12 };
        let msg = e.to_string();
        assert!(msg.contains("unclosed"), "{msg}");
        assert!(msg.contains("12"), "{msg}");
    }

    #[test]
    fn unbalanced_markers_display() {
        let e = Error::UnbalancedMarkers { position: 3 };
        let msg = e.to_string();
        assert!(msg.contains("unbalanced"), "{msg}");
        assert!(msg.contains("3"), "{msg}");
    }
}
