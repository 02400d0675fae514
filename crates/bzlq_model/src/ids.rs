//! Typed dense IDs for every ID-referenced `aquery` entity.
//!
//! These are slot indices into a [`WireTable`](crate::arena::WireTable), not
//! the wire IDs themselves; keeping them distinct types stops an artifact slot
//! from being used to index the dep-set table.

use crate::arena::ArenaId;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        pub struct $name(u32);

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// Slot of a path fragment.
    PathFragmentId
);

define_id!(
    /// Slot of an artifact.
    ArtifactId
);

define_id!(
    /// Slot of a dep-set.
    DepSetId
);

define_id!(
    /// Slot of a configuration.
    ConfigurationId
);

define_id!(
    /// Slot of an aspect descriptor.
    AspectDescriptorId
);

define_id!(
    /// Slot of an action's owning target.
    ActionTargetId
);

define_id!(
    /// Slot of a rule class name.
    RuleClassId
);
