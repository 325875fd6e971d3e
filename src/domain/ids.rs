//! Strongly-typed identifiers parsed from request path segments.
//!
//! Every operation that receives an identifier from the transport layer goes
//! through these `FromStr` impls, so the empty / non-numeric checks live in
//! one place and run before any store access.

use std::fmt;
use std::str::FromStr;

use super::errors::DomainError;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $invalid:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err(DomainError::InvalidArgument($invalid.to_string()));
                }
                raw.parse::<i64>()
                    .map($name)
                    .map_err(|_| DomainError::InvalidArgument($invalid.to_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Primary key of a row in `orders`.
    OrderId,
    "Invalid order ID"
);
id_type!(
    /// Primary key of a row in `users`; also the owner reference on an order.
    UserId,
    "Invalid user ID"
);
