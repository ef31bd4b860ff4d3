//! # Special Tokens
//!
//! The reserved literals which occupy the lowest vocabulary indices.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Default beginning-of-sequence literal.
pub const DEFAULT_BOS_TOKEN: &str = "<BOS>";

/// Default end-of-sequence literal.
pub const DEFAULT_EOS_TOKEN: &str = "<EOS>";

/// Default unknown-token literal.
pub const DEFAULT_UNK_TOKEN: &str = "<UNK>";

/// Default padding literal.
pub const DEFAULT_PAD_TOKEN: &str = "<PAD>";

/// The role of a special token.
///
/// Iteration order is the reservation order: `Bos`, `Eos`, `Unk`, `Pad`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumIter,
    strum::Display,
    strum::EnumString
)]
#[strum(serialize_all = "lowercase")]
pub enum SpecialRole {
    /// Beginning of sequence.
    Bos,

    /// End of sequence.
    Eos,

    /// Unknown token.
    Unk,

    /// Padding.
    Pad,
}

/// The configured special token literals.
///
/// Each literal is independently optional; `None` disables the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTokens {
    /// Beginning-of-sequence literal.
    pub bos_token: Option<String>,

    /// End-of-sequence literal.
    pub eos_token: Option<String>,

    /// Unknown-token literal.
    pub unk_token: Option<String>,

    /// Padding literal.
    pub pad_token: Option<String>,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            bos_token: Some(DEFAULT_BOS_TOKEN.to_string()),
            eos_token: Some(DEFAULT_EOS_TOKEN.to_string()),
            unk_token: Some(DEFAULT_UNK_TOKEN.to_string()),
            pad_token: Some(DEFAULT_PAD_TOKEN.to_string()),
        }
    }
}

impl SpecialTokens {
    /// A configuration with every role disabled.
    pub fn none() -> Self {
        Self {
            bos_token: None,
            eos_token: None,
            unk_token: None,
            pad_token: None,
        }
    }

    /// Get the literal for a role, if enabled.
    pub fn get(
        &self,
        role: SpecialRole,
    ) -> Option<&str> {
        match role {
            SpecialRole::Bos => self.bos_token.as_deref(),
            SpecialRole::Eos => self.eos_token.as_deref(),
            SpecialRole::Unk => self.unk_token.as_deref(),
            SpecialRole::Pad => self.pad_token.as_deref(),
        }
    }

    /// Set (or clear) the literal for a role.
    pub fn set<S: Into<String>>(
        &mut self,
        role: SpecialRole,
        literal: Option<S>,
    ) {
        let literal = literal.map(Into::into);
        match role {
            SpecialRole::Bos => self.bos_token = literal,
            SpecialRole::Eos => self.eos_token = literal,
            SpecialRole::Unk => self.unk_token = literal,
            SpecialRole::Pad => self.pad_token = literal,
        }
    }

    /// Set (or clear) the literal for a role.
    ///
    /// ## Returns
    /// The updated `SpecialTokens` instance.
    pub fn with<S: Into<String>>(
        mut self,
        role: SpecialRole,
        literal: Option<S>,
    ) -> Self {
        self.set(role, literal);
        self
    }

    /// The unknown-token literal, if enabled.
    pub fn unk(&self) -> Option<&str> {
        self.get(SpecialRole::Unk)
    }

    /// Iterate over the enabled `(role, literal)` pairs in reservation order.
    pub fn enabled(&self) -> impl Iterator<Item = (SpecialRole, &str)> {
        SpecialRole::iter().filter_map(|role| self.get(role).map(|lit| (role, lit)))
    }

    /// The enabled literals in reservation order.
    pub fn literals(&self) -> Vec<&str> {
        self.enabled().map(|(_, lit)| lit).collect()
    }

    /// Number of enabled roles.
    pub fn len(&self) -> usize {
        self.enabled().count()
    }

    /// Are all roles disabled?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is `token` one of the enabled literals?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.enabled().any(|(_, lit)| lit == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let specials = SpecialTokens::default();
        assert_eq!(specials.literals(), vec!["<BOS>", "<EOS>", "<UNK>", "<PAD>"]);
        assert_eq!(specials.len(), 4);
        assert!(specials.contains("<UNK>"));
        assert!(!specials.contains("unk"));
    }

    #[test]
    fn test_partial_enable_keeps_order() {
        let specials = SpecialTokens::none()
            .with(SpecialRole::Pad, Some("[pad]"))
            .with(SpecialRole::Bos, Some("[bos]"));

        assert_eq!(
            specials.enabled().collect::<Vec<_>>(),
            vec![(SpecialRole::Bos, "[bos]"), (SpecialRole::Pad, "[pad]")]
        );
        assert_eq!(specials.unk(), None);
        assert!(SpecialTokens::none().is_empty());
    }

    #[test]
    fn test_role_names() {
        assert_eq!(SpecialRole::Unk.to_string(), "unk");
        assert_eq!("pad".parse::<SpecialRole>().unwrap(), SpecialRole::Pad);
    }

    #[test]
    fn test_serde_null_disables() {
        let specials: SpecialTokens =
            serde_json::from_str(r#"{"eos_token": null, "pad_token": "[PAD]"}"#).unwrap();

        assert_eq!(specials.get(SpecialRole::Bos), Some("<BOS>"));
        assert_eq!(specials.get(SpecialRole::Eos), None);
        assert_eq!(specials.get(SpecialRole::Pad), Some("[PAD]"));
    }
}
