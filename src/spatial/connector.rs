//! Connectors: the labeled, polarized attachment points on piece edges
//!
//! Two connectors join when they share a label and point in opposite
//! directions. Equality is stricter and requires the same polarity too.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::io::configuration::{HEAD_MARKER, TAIL_MARKER};
use crate::io::error::PuzzleError;

/// Direction of a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Written as `>` in piece files
    Head,
    /// Written as `<` in piece files
    Tail,
}

impl Polarity {
    /// The other polarity
    pub const fn opposite(self) -> Self {
        match self {
            Self::Head => Self::Tail,
            Self::Tail => Self::Head,
        }
    }

    /// Marker character used in the text format
    pub const fn marker(self) -> char {
        match self {
            Self::Head => HEAD_MARKER,
            Self::Tail => TAIL_MARKER,
        }
    }

    /// Parse a marker character
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            HEAD_MARKER => Some(Self::Head),
            TAIL_MARKER => Some(Self::Tail),
            _ => None,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Shared connector label
///
/// Cloning is a reference count bump, so pieces stay cheap to copy
/// around the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(Arc<str>);

impl Label {
    /// Create a label from any string
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the label in characters
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled, polarized connection point on one edge of a piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connector {
    label: Label,
    polarity: Polarity,
}

impl Connector {
    /// Create a connector
    pub fn new(label: &str, polarity: Polarity) -> Self {
        Self {
            label: Label::new(label),
            polarity,
        }
    }

    /// Create a head connector
    pub fn head(label: &str) -> Self {
        Self::new(label, Polarity::Head)
    }

    /// Create a tail connector
    pub fn tail(label: &str) -> Self {
        Self::new(label, Polarity::Tail)
    }

    /// Connector label
    pub const fn label(&self) -> &Label {
        &self.label
    }

    /// Connector polarity
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The connector that would join this one
    #[must_use]
    pub fn counterpart(&self) -> Self {
        Self {
            label: self.label.clone(),
            polarity: self.polarity.opposite(),
        }
    }

    /// Check whether this connector joins `other`
    pub fn is_compatible(&self, other: &Self) -> bool {
        is_compatible(self, other)
    }
}

/// Two connectors join iff their labels match and their polarities differ
pub fn is_compatible(a: &Connector, b: &Connector) -> bool {
    a.polarity != b.polarity && a.label == b.label
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, self.polarity)
    }
}

impl FromStr for Connector {
    type Err = PuzzleError;

    /// Parse a `label>` or `label<` token
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let Some(marker) = chars.next_back() else {
            return Err(PuzzleError::InvalidConnector {
                token: token.to_string(),
                reason: "empty token",
            });
        };

        let Some(polarity) = Polarity::from_marker(marker) else {
            return Err(PuzzleError::InvalidConnector {
                token: token.to_string(),
                reason: "missing trailing '>' or '<' marker",
            });
        };

        let label = chars.as_str();
        if label.is_empty() {
            return Err(PuzzleError::InvalidConnector {
                token: token.to_string(),
                reason: "label is empty",
            });
        }

        Ok(Self::new(label, polarity))
    }
}
