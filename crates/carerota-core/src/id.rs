//! Identity newtypes.
//!
//! All identifiers are opaque strings owned by upstream collaborators. They
//! order lexicographically, which the optimizer relies on for its stable
//! candidate enumeration.

use std::borrow::Borrow;
use std::fmt;

/// Generates a string-backed identifier newtype.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifies a staff member in the staff directory.
    StaffId
);

string_id!(
    /// Identifies a shift in the shift store.
    ShiftId
);

string_id!(
    /// Identifies the care facility operator a run belongs to.
    OrganizationId
);

string_id!(
    /// A certification kind, e.g. `CPR` or `FIRST_AID`.
    CertificationType
);
