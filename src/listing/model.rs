use serde::Serialize;
use url::form_urlencoded;
use crate::core::{PageItem, pagination_window};
use crate::directory::User;
use crate::session::NoticeArea;

/// The fixed identity block in the top bar.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NavbarView {
    pub brand: &'static str,
    pub user_name: &'static str,
    pub user_email: &'static str,
    pub logout_action: &'static str,
}

impl NavbarView {
    pub fn new() -> Self {
        NavbarView {
            brand: "CRUDUI",
            user_name: "Admin",
            user_email: "eve.holt@reqres.in",
            logout_action: "/logout",
        }
    }
}

impl Default for NavbarView {
    fn default() -> Self {
        NavbarView::new()
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SearchBox {
    pub placeholder: &'static str,
    pub value: String,
    /// Hidden field so a submitted search stays on the loaded page
    /// instead of falling back to the first one.
    pub page: u32,
    pub action: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UserRow {
    pub id: i64,
    pub avatar: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub edit_action: String,
    pub delete_action: String,
}

impl UserRow {
    pub fn from_user(user: &User, page: u32, filter: &str) -> Self {
        UserRow {
            id: user.id,
            avatar: user.avatar.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            edit_action: format!("/users/edit/{}", user.id),
            delete_action: list_url(page, filter, Some(user.id)),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UserTable {
    pub rows: Vec<UserRow>,
    /// Shown in place of rows when there is nothing left to list.
    pub empty_message: Option<&'static str>,
}

impl UserTable {
    pub fn new(rows: Vec<UserRow>) -> Self {
        let empty_message = rows
            .is_empty()
            .then_some("No users found matching your search");
        UserTable { rows, empty_message }
    }
}

/// One pagination slot. Gaps are the ellipsis entries, nothing to click.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum PageLink {
    Number { number: u32, url: String, current: bool },
    Gap { gap: bool },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PaginationControls {
    /// Absent on the first page, Prev is disabled there.
    pub prev: Option<String>,
    pub pages: Vec<PageLink>,
    /// Absent on the last page.
    pub next: Option<String>,
}

impl PaginationControls {
    pub fn new(page: u32, total_pages: u32, filter: &str) -> Self {
        let prev = (page > 1).then(|| list_url(page - 1, filter, None));
        let next = (page < total_pages).then(|| list_url(page + 1, filter, None));
        let pages = pagination_window(page, total_pages)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(number) => PageLink::Number {
                    number,
                    url: list_url(number, filter, None),
                    current: number == page,
                },
                PageItem::Gap => PageLink::Gap { gap: true },
            })
            .collect();
        PaginationControls { prev, pages, next }
    }
}

/// Hidden fields of the confirm form. The POST restates the view this
/// way so the redirect after it can restore the screen without anyone
/// picking the query string of an action URL apart.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DeleteFormFields {
    pub page: u32,
    pub q: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DeleteDialogView {
    pub title: &'static str,
    pub label: &'static str,
    pub user_id: i64,
    /// Mirrors the delete latch. While true the confirm control is
    /// disabled and shows a spinner.
    pub busy: bool,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    pub confirm_action: String,
    pub cancel_action: String,
    pub form_fields: DeleteFormFields,
}

impl DeleteDialogView {
    pub fn new(user_id: i64, page: u32, filter: &str, busy: bool) -> Self {
        DeleteDialogView {
            title: "Warning",
            label: "Are you sure you want to delete this Employee Data?",
            user_id,
            busy,
            confirm_label: "Yes, Delete",
            cancel_label: "Cancel",
            confirm_action: format!("/users/{user_id}/delete"),
            cancel_action: list_url(page, filter, None),
            form_fields: DeleteFormFields { page, q: filter.to_string() },
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct UserListScreen {
    pub navbar: NavbarView,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub search: SearchBox,
    pub table: UserTable,
    pub pagination: Option<PaginationControls>,
    pub dialog: Option<DeleteDialogView>,
    pub notices: NoticeArea,
}

/// Address of the list screen with the whole view state in the query
/// string. The page number in here is the one thing that drives fetching.
pub fn list_url(page: u32, filter: &str, pending_delete: Option<i64>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    if !filter.is_empty() {
        query.append_pair("q", filter);
    }
    if let Some(id) = pending_delete {
        query.append_pair("delete", &id.to_string());
    }
    format!("/users?{}", query.finish())
}
