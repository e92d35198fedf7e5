use serde::Serialize;
use crate::directory::User;
use crate::session::NoticeArea;

/// One message slot per editable field. All fields are checked every time,
/// a submission with three empty fields reports three messages at once.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct EditFieldErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl EditFieldErrors {
    pub fn is_clean(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EditUserForm {
    pub action: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub errors: EditFieldErrors,
    pub submit_label: &'static str,
    pub cancel_action: &'static str,
}

impl EditUserForm {
    pub fn new(
        user_id: i64,
        first_name: String,
        last_name: String,
        email: String,
        errors: EditFieldErrors,
    ) -> Self {
        EditUserForm {
            action: format!("/users/edit/{user_id}"),
            first_name,
            last_name,
            email,
            errors,
            submit_label: "Save Changes",
            cancel_action: "/users",
        }
    }

    pub fn from_user(user: &User) -> Self {
        EditUserForm::new(
            user.id,
            user.first_name.clone(),
            user.last_name.clone(),
            user.email.clone(),
            EditFieldErrors::default(),
        )
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EditUserScreen {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub back_action: &'static str,
    /// None when the user could not be fetched. The screen then carries
    /// nothing but the error notice.
    pub form: Option<EditUserForm>,
    pub notices: NoticeArea,
}

impl EditUserScreen {
    pub fn new(form: Option<EditUserForm>, notices: NoticeArea) -> Self {
        EditUserScreen {
            heading: "Edit User Profile",
            subtitle: "Update user information",
            back_action: "/users",
            form,
            notices,
        }
    }
}
