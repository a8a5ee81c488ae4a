pub use postdeck_core::api::LOGIN_FAILED_MESSAGE;
use postdeck_core::models::Credential;

use crate::common::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Ephemeral form state. Nothing here outlives the login screen.
#[derive(Debug, Default)]
pub struct LoginState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginState {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    /// Builds a credential from the fields as typed, empty values included.
    pub fn credential(&self) -> Credential {
        Credential::new(self.username.value(), self.password.value())
    }
}
