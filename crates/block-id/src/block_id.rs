//! Internal implementation of [`BlockId`].

use crate::{BlockIdError, BlockIdResult};
use std::{fmt, str::FromStr};

/// Number of characters in a raw (unhyphenated) identifier.
pub const RAW_LEN: usize = 32;

/// Number of characters in a hyphenated identifier.
pub const HYPHENATED_LEN: usize = 36;

/// Group widths of the hyphenated form.
const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// A Notion block identifier in hyphenated `8-4-4-4-12` form.
///
/// Once constructed via [`BlockId::parse`], the contained string is always 36 characters long
/// with hyphens at positions 8, 13, 18 and 23. The characters between the hyphens are exactly
/// the characters of the raw input, in order and with their original case.
///
/// # Display format
/// Displays as the hyphenated form, which is what the block-children endpoint expects in its
/// path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockId(String);

impl BlockId {
    /// Re-segments a raw 32-character identifier into hyphenated form.
    ///
    /// Length is counted in characters, not bytes. No character-set validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`BlockIdError::InvalidLength`] if `raw` is not exactly [`RAW_LEN`] characters.
    pub fn parse(raw: &str) -> BlockIdResult<Self> {
        let actual = raw.chars().count();
        if actual != RAW_LEN {
            return Err(BlockIdError::InvalidLength { actual });
        }

        let mut hyphenated = String::with_capacity(raw.len() + GROUPS.len() - 1);
        let mut chars = raw.chars();
        for (i, width) in GROUPS.iter().enumerate() {
            if i > 0 {
                hyphenated.push('-');
            }
            hyphenated.extend(chars.by_ref().take(*width));
        }

        Ok(Self(hyphenated))
    }

    /// Returns the hyphenated form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BlockId {
    type Err = BlockIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
