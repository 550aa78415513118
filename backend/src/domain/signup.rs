//! Sign-in / sign-up wizard.
//!
//! The wizard walks a visitor from the login view through basic details and
//! role selection to optional role-specific details. It ends with the role
//! the store should sign in; it never talks to the store itself.
//!
//! ```text
//! Login <-> SignupBasic -> SignupRole -> SignupDetails
//!   |                         |  ^            |
//!   v                         v  +-- back ----+
//! Complete(Customer)     Complete(Customer)   v
//!                                        Complete(role)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

use super::Role;
use super::auth::CREDENTIAL_LOGIN_ROLE;

/// Screen the wizard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupView {
    Login,
    SignupBasic,
    SignupRole,
    SignupDetails,
}

/// Result of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    /// The wizard moved to (or stayed on) this view.
    Show(SignupView),
    /// The wizard finished; sign the visitor in with this role.
    Complete(Role),
}

/// Rejected wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },
    #[error("details for {provided} do not match the selected role {selected}")]
    DetailsMismatch { selected: Role, provided: Role },
    #[error("action not available from the {view:?} view")]
    UnexpectedView { view: SignupView },
}

/// Account basics collected on the first signup screen.
///
/// `Debug` output redacts both password fields.
#[derive(Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BasicDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birthday: String,
    #[schema(value_type = String)]
    pub password: Zeroizing<String>,
    #[schema(value_type = String)]
    pub confirm_password: Zeroizing<String>,
}

impl fmt::Debug for BasicDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicDetails")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("birthday", &self.birthday)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

impl BasicDetails {
    fn validate(&self) -> Result<(), SignupError> {
        let required = [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ];
        if let Some((field, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SignupError::MissingField { field });
        }
        if *self.password != *self.confirm_password {
            return Err(SignupError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Whether an architect works alone or for a firm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[default]
    Freelance,
    Company,
}

/// Profile details asked of roles other than customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RoleDetails {
    #[serde(rename_all = "camelCase")]
    Architect {
        nickname: String,
        #[serde(default)]
        experience: String,
        #[serde(default)]
        work_type: WorkType,
        #[serde(default)]
        description: String,
    },
    #[serde(rename_all = "camelCase")]
    Supplier {
        company_name: String,
        #[serde(default)]
        business_years: String,
    },
}

impl RoleDetails {
    /// The role these details belong to.
    pub fn role(&self) -> Role {
        match self {
            Self::Architect { .. } => Role::Architect,
            Self::Supplier { .. } => Role::Supplier,
        }
    }

    fn validate(&self) -> Result<(), SignupError> {
        let (field, value) = match self {
            Self::Architect { nickname, .. } => ("nickname", nickname),
            Self::Supplier { company_name, .. } => ("companyName", company_name),
        };
        if value.trim().is_empty() {
            return Err(SignupError::MissingField { field });
        }
        Ok(())
    }
}

/// Wizard state.
///
/// # Examples
/// ```
/// use ecosystem_shell::domain::{Role, SignupFlow, SignupStep};
///
/// let mut flow = SignupFlow::new();
/// assert_eq!(flow.submit_login(), Ok(SignupStep::Complete(Role::Customer)));
/// ```
#[derive(Debug, Default)]
pub struct SignupFlow {
    view: Option<SignupView>,
    basic: Option<BasicDetails>,
    role: Option<Role>,
}

impl SignupFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SignupView {
        self.view.unwrap_or(SignupView::Login)
    }

    /// Basics accepted on the first signup screen, if any.
    pub fn basic(&self) -> Option<&BasicDetails> {
        self.basic.as_ref()
    }

    /// Role picked on the role screen, if any.
    pub fn selected_role(&self) -> Option<Role> {
        self.role
    }

    /// Swap between login and signup; leaving signup clears the form.
    pub fn toggle(&mut self) -> SignupStep {
        let next = match self.view() {
            SignupView::Login => SignupView::SignupBasic,
            SignupView::SignupBasic | SignupView::SignupRole | SignupView::SignupDetails => {
                self.basic = None;
                self.role = None;
                SignupView::Login
            }
        };
        self.show(next)
    }

    /// Mock sign-in from the login view.
    pub fn submit_login(&mut self) -> Result<SignupStep, SignupError> {
        self.expect_view(SignupView::Login)?;
        Ok(SignupStep::Complete(CREDENTIAL_LOGIN_ROLE))
    }

    /// Accept account basics and move on to role selection.
    pub fn submit_basic(&mut self, basic: BasicDetails) -> Result<SignupStep, SignupError> {
        self.expect_view(SignupView::SignupBasic)?;
        basic.validate()?;
        self.basic = Some(basic);
        Ok(self.show(SignupView::SignupRole))
    }

    /// Customers finish here; other roles need a details screen.
    pub fn select_role(&mut self, role: Role) -> Result<SignupStep, SignupError> {
        self.expect_view(SignupView::SignupRole)?;
        self.role = Some(role);
        match role {
            Role::Customer => Ok(SignupStep::Complete(role)),
            Role::Architect | Role::Supplier => Ok(self.show(SignupView::SignupDetails)),
        }
    }

    /// Return from the details screen to role selection.
    pub fn back(&mut self) -> Result<SignupStep, SignupError> {
        self.expect_view(SignupView::SignupDetails)?;
        Ok(self.show(SignupView::SignupRole))
    }

    /// Finish with role-specific details.
    pub fn submit_details(&mut self, details: &RoleDetails) -> Result<SignupStep, SignupError> {
        self.expect_view(SignupView::SignupDetails)?;
        let selected = self.role.ok_or(SignupError::UnexpectedView {
            view: SignupView::SignupDetails,
        })?;
        if details.role() != selected {
            return Err(SignupError::DetailsMismatch {
                selected,
                provided: details.role(),
            });
        }
        details.validate()?;
        Ok(SignupStep::Complete(selected))
    }

    fn show(&mut self, view: SignupView) -> SignupStep {
        self.view = Some(view);
        SignupStep::Show(view)
    }

    fn expect_view(&self, expected: SignupView) -> Result<(), SignupError> {
        let view = self.view();
        if view == expected {
            Ok(())
        } else {
            Err(SignupError::UnexpectedView { view })
        }
    }
}
