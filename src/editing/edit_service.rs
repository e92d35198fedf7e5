use std::sync::Arc;
use tracing::warn;
use crate::core::AppState;
use crate::directory::UserChanges;
use crate::editing::model::{EditFieldErrors, EditUserForm, EditUserScreen};
use crate::session::{Notice, NoticeArea};

/// What the submitted form carried, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EditInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

pub enum EditOutcome {
    /// Stored by the directory, the caller goes back to the list.
    Saved,
    /// Validation or the directory said no, the form renders again.
    Rework(EditUserScreen),
}

pub struct EditService;

impl EditService {

    /// Opens the editor for one user. Entering it ends the lifetime of the
    /// list snapshot, going back to the list always reloads.
    pub async fn load_editor(state: Arc<AppState>, token: &str, user_id: i64) -> EditUserScreen {
        state.sessions.clear_snapshot(token).await;
        let mut notices = state.sessions.take_notices(token).await;

        match state.directory.fetch_user(user_id).await {
            Ok(user) => {
                EditUserScreen::new(Some(EditUserForm::from_user(&user)), NoticeArea::new(notices))
            }
            Err(err) => {
                warn!("Loading user {} for the editor failed: {}", user_id, err);
                notices.push(Notice::error("Error fetching user data"));
                EditUserScreen::new(None, NoticeArea::new(notices))
            }
        }
    }

    pub async fn submit(
        state: Arc<AppState>,
        token: &str,
        user_id: i64,
        input: EditInput,
    ) -> EditOutcome {
        let errors = validate_edit(&input);
        if !errors.is_clean() {
            let form = EditUserForm::new(user_id, input.first_name, input.last_name, input.email, errors);
            return EditOutcome::Rework(EditUserScreen::new(Some(form), NoticeArea::empty()));
        }

        let changes = UserChanges {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
        };
        match state.directory.update_user(user_id, &changes).await {
            Ok(()) => {
                state.sessions.clear_snapshot(token).await;
                state.sessions
                    .push_notice(token, Notice::success("User updated successfully"))
                    .await;
                EditOutcome::Saved
            }
            Err(err) => {
                warn!("Updating user {} failed: {}", user_id, err);
                let form = EditUserForm::new(
                    user_id,
                    input.first_name,
                    input.last_name,
                    input.email,
                    EditFieldErrors::default(),
                );
                EditOutcome::Rework(EditUserScreen::new(
                    Some(form),
                    NoticeArea::new(vec![Notice::error("Error updating user")]),
                ))
            }
        }
    }
}

/// Checks the three fields one by one, a missing field never hides another.
pub fn validate_edit(input: &EditInput) -> EditFieldErrors {
    let mut errors = EditFieldErrors::default();
    if input.first_name.is_empty() {
        errors.first_name = Some("First Name is required".to_string());
    }
    if input.last_name.is_empty() {
        errors.last_name = Some("Last Name is required".to_string());
    }
    if input.email.is_empty() {
        errors.email = Some("Email is required".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(first_name: &str, last_name: &str, email: &str) -> EditInput {
        EditInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn a_filled_form_is_clean() {
        let errors = validate_edit(&input("George", "Bluth", "george.bluth@reqres.in"));
        assert!(errors.is_clean());
    }

    #[test]
    fn all_empty_fields_report_together() {
        let errors = validate_edit(&input("", "", ""));
        assert_eq!(errors.first_name.as_deref(), Some("First Name is required"));
        assert_eq!(errors.last_name.as_deref(), Some("Last Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
    }

    #[test]
    fn one_missing_field_reports_alone() {
        let errors = validate_edit(&input("George", "", "george.bluth@reqres.in"));
        assert!(errors.first_name.is_none());
        assert_eq!(errors.last_name.as_deref(), Some("Last Name is required"));
        assert!(errors.email.is_none());
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let errors = validate_edit(&input(" ", "Bluth", "george.bluth@reqres.in"));
        assert!(errors.is_clean());
    }
}
