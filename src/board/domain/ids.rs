//! Numeric identifiers assigned by the server.

use super::ParseIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a server-assigned identifier.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying numeric value.
            #[must_use]
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                value
                    .trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| ParseIdError {
                        kind: $kind,
                        value: value.to_owned(),
                    })
            }
        }
    };
}

numeric_id!(
    /// Identifier of a task.
    TaskId,
    "task"
);
numeric_id!(
    /// Identifier of a task state (board column).
    TaskStateId,
    "task state"
);
numeric_id!(
    /// Identifier of a user account.
    UserId,
    "user"
);
numeric_id!(
    /// Identifier of an epic.
    EpicId,
    "epic"
);
numeric_id!(
    /// Identifier of a project.
    ProjectId,
    "project"
);
