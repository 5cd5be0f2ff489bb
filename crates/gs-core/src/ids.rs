//! Strongly typed OpenStreetMap identifiers.
//!
//! OSM ids are signed 64-bit integers (negative ids appear in unsaved edits),
//! so the wrappers keep the raw `i64`.  They are `Copy + Ord + Hash` so they
//! can be used as map keys and sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw OSM integer id.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// OSM node id.
    pub struct NodeId(i64);
}

typed_id! {
    /// OSM way id.
    pub struct WayId(i64);
}
