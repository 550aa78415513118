//! Current-user session and the profile badge derived from it.

use serde::Serialize;
use utoipa::ToSchema;

use super::Role;

/// Identity of whoever is using the shell.
///
/// ## Invariants
/// - `role` is always a catalog role.
/// - `display_name` is `"{label} User"` and cannot be set independently.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::{Role, Session};
///
/// let session = Session::new(Role::Supplier);
/// assert_eq!(session.display_name(), "Supply Node User");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[schema(value_type = String, example = "ARCHITECT")]
    role: Role,
    #[schema(example = "Architect / Creator User")]
    display_name: String,
}

impl Session {
    /// Fresh session bound to `role`.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            display_name: format!("{} User", role.label()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Name and mode shown in the shell's profile badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShellProfile {
    #[schema(example = "Guest")]
    pub name: String,
    #[schema(example = "Visitor Mode")]
    pub mode: String,
}

impl ShellProfile {
    /// Badge for `session`, falling back to the guest badge.
    #[must_use]
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self {
                name: session.display_name().to_owned(),
                mode: format!("{} Mode", session.role().id()),
            },
            None => Self {
                name: "Guest".to_owned(),
                mode: "Visitor Mode".to_owned(),
            },
        }
    }
}
