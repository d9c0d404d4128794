//! Classification of C/C++ type spellings.
//!
//! Maps a spelling such as `unsigned long` or `std::string_view` to the
//! [`TypeDescriptor`] a C printf call would use for it. Used by `printxc`
//! to check templates written for C callers.
//!
//! # Precedence
//!
//! 1. descriptors registered in a [`TypeRegistry`]
//! 2. [`CLASS_RULES`], first match wins
//!
//! Anything else is [`ClassifyError::UnknownType`].

mod rules;
mod spelling;

use printx_ir::TypeDescriptor;
use rustc_hash::FxHashMap;
use thiserror::Error;

pub use rules::{ClassRule, BUILTINS, CLASS_RULES};
pub use spelling::{Base, Declarator, Qualifiers, Spelling, TemplateArg};

/// Why a spelling could not be classified.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ClassifyError {
    #[error("no printf conversion for type `{0}`")]
    UnknownType(String),

    #[error("cannot parse type `{spelling}`: {reason}")]
    Malformed {
        spelling: String,
        reason: &'static str,
    },
}

/// User-registered descriptors, keyed by canonical spelling.
#[derive(Clone, Default, Debug)]
pub struct TypeRegistry {
    overrides: FxHashMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `descriptor` for `spelling`, replacing any earlier entry.
    ///
    /// The spelling is normalized first, so `unsigned` and `unsigned int`
    /// name the same entry.
    pub fn register(
        &mut self,
        spelling: &str,
        descriptor: TypeDescriptor,
    ) -> Result<(), ClassifyError> {
        let key = parse(spelling)?.to_string();
        tracing::debug!(%key, %descriptor, "registered type");
        self.overrides.insert(key, descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Classify a spelling, consulting registered descriptors first.
    pub fn classify(&self, spelling: &str) -> Result<TypeDescriptor, ClassifyError> {
        let parsed = parse(spelling)?;
        let key = parsed.to_string();
        if let Some(&descriptor) = self.overrides.get(&key) {
            tracing::trace!(%key, "registered");
            return Ok(descriptor);
        }
        for rule in CLASS_RULES {
            if let Some(descriptor) = (rule.classify)(&parsed) {
                tracing::trace!(%key, rule = rule.name, %descriptor, "classified");
                return Ok(descriptor);
            }
        }
        Err(ClassifyError::UnknownType(key))
    }
}

/// Classify a spelling with the builtin rules only.
pub fn classify(spelling: &str) -> Result<TypeDescriptor, ClassifyError> {
    TypeRegistry::new().classify(spelling)
}

fn parse(spelling: &str) -> Result<Spelling, ClassifyError> {
    Spelling::parse(spelling).map_err(|reason| ClassifyError::Malformed {
        spelling: spelling.to_string(),
        reason,
    })
}
