/// ID types for Learn2Code entities
///
/// The backend keys every table with a 64-bit integer, so each identifier is a
/// transparent newtype over `i64` that serializes as a bare JSON number.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend identifier
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw identifier
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Course identifier, also the cart line item key
    CourseId
);

numeric_id!(
    /// User (account holder) identifier, sent as `X-User-Id`
    UserId
);

numeric_id!(
    /// Student profile identifier (a child managed by a parent account)
    StudentId
);

numeric_id!(
    /// Payment identifier
    PaymentId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_serializes_as_bare_number() {
        let json = serde_json::to_string(&CourseId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: CourseId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
    }

    #[test]
    fn user_id_display() {
        let id = UserId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn ids_parse_from_cli_strings() {
        assert_eq!(" 3 ".parse::<StudentId>().unwrap(), StudentId::new(3));
        assert!("abc".parse::<PaymentId>().is_err());
    }
}
