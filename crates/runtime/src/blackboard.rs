//! Typed shared-state store for the decision tree.
//!
//! Keys are typed constants ([`BbKey<T>`]), so the key→type binding is fixed
//! where the key is declared. The store still records the type registered
//! under each name and rejects mismatched reads and writes, which catches two
//! keys sharing a name with different types.
//!
//! Entries are never deleted; they live as long as the agent.

use std::any::{Any, type_name};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

/// Typed handle to a blackboard entry.
pub struct BbKey<T: 'static> {
    name: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> BbKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }

    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> PartialEq for BbKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T: 'static> Eq for BbKey<T> {}

impl<T: 'static> fmt::Debug for BbKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BbKey<{}>({:?})", type_name::<T>(), self.name)
    }
}

/// Contract violations on blackboard access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("blackboard key `{key}` is not registered")]
    Missing { key: &'static str },

    #[error("blackboard key `{key}` holds `{stored}`, not `{requested}`")]
    TypeMismatch {
        key: &'static str,
        stored: &'static str,
        requested: &'static str,
    },
}

struct Entry {
    type_name: &'static str,
    value: Box<dyn Any>,
}

/// Keyed store of typed values.
#[derive(Default)]
pub struct Blackboard {
    entries: BTreeMap<&'static str, Entry>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.entries.contains_key(key.name)
    }

    /// Writes `value`, registering the key on first use.
    ///
    /// Fails if the key was registered with a different type.
    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) -> Result<(), BlackboardError> {
        match self.entries.get_mut(key.name) {
            Some(entry) => {
                let slot = entry.value.downcast_mut::<T>().ok_or(
                    BlackboardError::TypeMismatch {
                        key: key.name,
                        stored: entry.type_name,
                        requested: type_name::<T>(),
                    },
                )?;
                *slot = value;
            }
            None => {
                self.entries.insert(
                    key.name,
                    Entry {
                        type_name: type_name::<T>(),
                        value: Box::new(value),
                    },
                );
            }
        }
        Ok(())
    }

    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Result<&T, BlackboardError> {
        let entry = self
            .entries
            .get(key.name)
            .ok_or(BlackboardError::Missing { key: key.name })?;
        entry
            .value
            .downcast_ref::<T>()
            .ok_or(BlackboardError::TypeMismatch {
                key: key.name,
                stored: entry.type_name,
                requested: type_name::<T>(),
            })
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Result<&mut T, BlackboardError> {
        let entry = self
            .entries
            .get_mut(key.name)
            .ok_or(BlackboardError::Missing { key: key.name })?;
        let stored = entry.type_name;
        entry
            .value
            .downcast_mut::<T>()
            .ok_or(BlackboardError::TypeMismatch {
                key: key.name,
                stored,
                requested: type_name::<T>(),
            })
    }
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, entry)| (name, entry.type_name)))
            .finish()
    }
}
