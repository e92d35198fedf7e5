use std::sync::Arc;
use tracing::warn;
use crate::core::AppState;
use crate::directory::{DirectoryError, User, UserPage};
use crate::listing::model::{
    DeleteDialogView, NavbarView, PaginationControls, SearchBox, UserListScreen, UserRow, UserTable,
};
use crate::session::{Notice, NoticeArea};

/// The list view state as resolved from the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub filter: String,
    pub pending_delete: Option<i64>,
}

pub enum DeleteOutcome {
    /// The directory confirmed, the dialog closes and the page reloads.
    Deleted,
    /// The directory refused, the dialog stays where it is.
    Failed,
    /// A delete of this session is still running, nothing was sent.
    AlreadyRunning,
}

pub struct ListService;

impl ListService {

    /// Builds the list screen for one request. Directory trouble never
    /// escapes, it ends up in the notice corner and the previous snapshot
    /// stays on display.
    pub async fn load_screen(state: Arc<AppState>, token: &str, query: ListQuery) -> UserListScreen {
        let mut notices = state.sessions.take_notices(token).await;

        let snapshot = match Self::current_page(&state, token, query.page).await {
            Ok(page) => Some(page),
            Err(err) => {
                warn!("Loading page {} from the directory failed: {}", query.page, err);
                notices.push(Notice::error("Error fetching users"));
                state.sessions.snapshot(token).await
            }
        };

        let dialog = match query.pending_delete {
            Some(user_id) => Some(DeleteDialogView::new(
                user_id,
                query.page,
                &query.filter,
                state.sessions.delete_busy(token).await,
            )),
            None => None,
        };

        let rows = match snapshot.as_ref() {
            Some(page) => filter_users(&page.data, &query.filter)
                .iter()
                .map(|user| UserRow::from_user(user, query.page, &query.filter))
                .collect(),
            None => Vec::new(),
        };

        UserListScreen {
            navbar: NavbarView::new(),
            heading: "User Management",
            subtitle: "Manage your system users",
            search: SearchBox {
                placeholder: "Search users...",
                value: query.filter.clone(),
                page: query.page,
                action: "/users",
            },
            table: UserTable::new(rows),
            pagination: snapshot
                .as_ref()
                .filter(|page| page.total_pages > 0)
                .map(|page| PaginationControls::new(query.page, page.total_pages, &query.filter)),
            dialog,
            notices: NoticeArea::new(notices),
        }
    }

    //the page in the url is the only thing that triggers a fetch, a filter
    //change alone reuses what the session already holds
    async fn current_page(
        state: &Arc<AppState>,
        token: &str,
        page: u32,
    ) -> Result<UserPage, DirectoryError> {
        if let Some(snapshot) = state.sessions.snapshot(token).await {
            if snapshot.page == page {
                return Ok(snapshot);
            }
        }
        let fresh = state.directory.fetch_page(page).await?;
        state.sessions.store_snapshot(token, fresh.clone()).await;
        Ok(fresh)
    }

    /// Sends the delete the dialog asked for, unless one is already on its
    /// way. The permit makes a second confirmation a no-op instead of a
    /// second request and reopens the latch when it drops, also when this
    /// future is abandoned while the directory call is still out.
    pub async fn confirm_delete(state: Arc<AppState>, token: &str, user_id: i64) -> DeleteOutcome {
        let permit = match state.sessions.try_begin_delete(token).await {
            Some(permit) => permit,
            None => return DeleteOutcome::AlreadyRunning,
        };
        let result = state.directory.delete_user(user_id).await;
        drop(permit);

        match result {
            Ok(()) => {
                state.sessions.clear_snapshot(token).await;
                state.sessions
                    .push_notice(token, Notice::success("User deleted successfully!"))
                    .await;
                DeleteOutcome::Deleted
            }
            Err(DirectoryError::NotFound) => {
                state.sessions
                    .push_notice(token, Notice::error("Employee not found"))
                    .await;
                DeleteOutcome::Failed
            }
            Err(DirectoryError::Transport { .. }) => {
                state.sessions
                    .push_notice(token, Notice::error("Something went wrong. Please try again."))
                    .await;
                DeleteOutcome::Failed
            }
            Err(err) => {
                warn!("Deleting user {} failed: {}", user_id, err);
                state.sessions
                    .push_notice(token, Notice::error("Failed to delete employee"))
                    .await;
                DeleteOutcome::Failed
            }
        }
    }
}

/// Case insensitive substring match over first name, last name, email and
/// the printed id. Works on the loaded snapshot only, never on the wire.
pub fn filter_users(users: &[User], filter: &str) -> Vec<User> {
    if filter.is_empty() {
        return users.to_vec();
    }
    let needle = filter.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.first_name.to_lowercase().contains(&needle)
                || user.last_name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || user.id.to_string().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<User> {
        vec![
            User {
                id: 1,
                first_name: "George".to_string(),
                last_name: "Bluth".to_string(),
                email: "george.bluth@reqres.in".to_string(),
                avatar: "https://reqres.in/img/faces/1-image.jpg".to_string(),
            },
            User {
                id: 2,
                first_name: "Janet".to_string(),
                last_name: "Weaver".to_string(),
                email: "janet.weaver@reqres.in".to_string(),
                avatar: "https://reqres.in/img/faces/2-image.jpg".to_string(),
            },
            User {
                id: 12,
                first_name: "Rachel".to_string(),
                last_name: "Howell".to_string(),
                email: "rachel.howell@reqres.in".to_string(),
                avatar: "https://reqres.in/img/faces/12-image.jpg".to_string(),
            },
        ]
    }

    #[test]
    fn matches_are_case_insensitive() {
        let hits = filter_users(&roster(), "george");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "george.bluth@reqres.in");

        assert_eq!(filter_users(&roster(), "GEORGE"), hits);
    }

    #[test]
    fn every_field_participates() {
        assert_eq!(filter_users(&roster(), "weaver").len(), 1);
        assert_eq!(filter_users(&roster(), "reqres.in").len(), 3);
    }

    #[test]
    fn the_printed_id_matches_as_substring() {
        //"2" hits both user 2 and user 12
        let hits = filter_users(&roster(), "2");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 2);
        assert_eq!(hits[1].id, 12);
    }

    #[test]
    fn an_empty_filter_returns_the_page_untouched() {
        assert_eq!(filter_users(&roster(), ""), roster());
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_users(&roster(), "ge");
        let twice = filter_users(&once, "ge");
        assert_eq!(once, twice);
    }

    #[test]
    fn no_match_leaves_nothing() {
        assert!(filter_users(&roster(), "zzz").is_empty());
    }
}
