//! Persona catalog.
//!
//! The three roles are fixed at compile time. Each carries the label shown in
//! toasts and the route its shell treats as home.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raised when a string does not name a catalog role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {value}")]
pub struct UnknownRole {
    /// The rejected input, trimmed.
    pub value: String,
}

/// Persona the shell is presented for.
///
/// Serialised as the catalog key (`"ARCHITECT"`); either the key or the
/// lowercase id is accepted on input.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::Role;
///
/// let role = Role::parse("architect").unwrap();
/// assert_eq!(role, Role::Architect);
/// assert_eq!(role.home_route(), "/studio");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Architect / creator persona.
    Architect,
    /// Marketplace customer persona.
    Customer,
    /// Supply network persona.
    Supplier,
}

impl Role {
    /// Catalog order.
    pub const ALL: [Role; 3] = [Role::Architect, Role::Customer, Role::Supplier];

    /// Upper-case catalog key, e.g. `ARCHITECT`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Architect => "ARCHITECT",
            Self::Customer => "CUSTOMER",
            Self::Supplier => "SUPPLIER",
        }
    }

    /// Lower-case identifier, e.g. `architect`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Architect => "architect",
            Self::Customer => "customer",
            Self::Supplier => "supplier",
        }
    }

    /// Human label used in the session display name and login toast.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Architect => "Architect / Creator",
            Self::Customer => "Ecosystem Customer",
            Self::Supplier => "Supply Node",
        }
    }

    /// Default landing route for the persona.
    #[must_use]
    pub const fn home_route(self) -> &'static str {
        match self {
            Self::Architect => "/studio",
            Self::Customer => "/customer",
            Self::Supplier => "/supplier",
        }
    }

    /// Resolve a catalog key or id, ignoring ASCII case and surrounding space.
    pub fn parse(raw: &str) -> Result<Self, UnknownRole> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|role| {
                trimmed.eq_ignore_ascii_case(role.key()) || trimmed.eq_ignore_ascii_case(role.id())
            })
            .ok_or_else(|| UnknownRole {
                value: trimmed.to_owned(),
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ARCHITECT", Role::Architect)]
    #[case("architect", Role::Architect)]
    #[case(" Customer ", Role::Customer)]
    #[case("supplier", Role::Supplier)]
    fn parses_keys_and_ids(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(Role::parse(raw), Ok(expected));
    }

    #[rstest]
    #[case("UNKNOWN_ROLE")]
    #[case("")]
    #[case("admin")]
    fn rejects_names_outside_the_catalog(#[case] raw: &str) {
        let err = Role::parse(raw).expect_err("not a catalog role");
        assert_eq!(err.value, raw.trim());
    }

    #[rstest]
    #[case(Role::Architect, "/studio")]
    #[case(Role::Customer, "/customer")]
    #[case(Role::Supplier, "/supplier")]
    fn home_routes_match_catalog(#[case] role: Role, #[case] route: &str) {
        assert_eq!(role.home_route(), route);
    }

    #[test]
    fn serde_uses_catalog_key() {
        let json = serde_json::to_string(&Role::Supplier).expect("serialise role");
        assert_eq!(json, "\"SUPPLIER\"");
        let back: Role = serde_json::from_str("\"supplier\"").expect("deserialise id");
        assert_eq!(back, Role::Supplier);
    }
}
