//! Strongly typed, zero-cost identifier wrappers.
//!
//! `NodeId` and `EdgeId` wrap the 64-bit signed identifiers that originate
//! from the source map — they are opaque keys, not indices. [`route-graph`]
//! maps them to dense internal indices at insertion time (see its
//! `graph` module); nothing outside that crate should assume a `NodeId`'s
//! numeric value has any relationship to storage order.

use std::fmt;

/// Generate a typed wrapper around a user-facing `i64` identifier.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub i64);

        impl $name {
            #[inline(always)]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline(always)]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<i64> for $name {
            #[inline(always)]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline(always)]
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

typed_id! {
    /// Stable identifier of a graph node, as assigned by the source map.
    pub struct NodeId;
}

typed_id! {
    /// Stable identifier of a directed graph edge, unique within a graph.
    pub struct EdgeId;
}
