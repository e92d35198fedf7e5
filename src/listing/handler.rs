use std::sync::Arc;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::{Extension, Form, Json};
use serde::Deserialize;
use crate::core::AppState;
use crate::listing::list_service::{DeleteOutcome, ListQuery, ListService};
use crate::listing::model::{UserListScreen, list_url};
use crate::session::SessionToken;

#[derive(Deserialize, Debug)]
pub struct ListQueryParams {
    pub page: Option<String>,
    pub q: Option<String>,
    pub delete: Option<String>,
}

impl ListQueryParams {
    pub fn resolve(self) -> ListQuery {
        ListQuery {
            page: resolve_page(self.page.as_deref()),
            filter: self.q.unwrap_or_default(),
            pending_delete: self.delete.and_then(|id| id.parse::<i64>().ok()),
        }
    }
}

//absent or unreadable page numbers fall back to the first page
pub fn resolve_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .map(|page| page.max(1))
        .unwrap_or(1)
}

pub async fn handle_user_list(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Query(params): Query<ListQueryParams>,
) -> Json<UserListScreen> {
    let screen = ListService::load_screen(state, &token, params.resolve()).await;
    Json(screen)
}

//the form carries the view state so the redirect can restore it
#[derive(Deserialize, Debug)]
pub struct DeleteFormParams {
    pub page: Option<String>,
    pub q: Option<String>,
}

pub async fn handle_confirm_delete(
    State(state): State<Arc<AppState>>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Path(user_id): Path<i64>,
    Form(params): Form<DeleteFormParams>,
) -> Redirect {
    let page = resolve_page(params.page.as_deref());
    let filter = params.q.unwrap_or_default();

    match ListService::confirm_delete(state, &token, user_id).await {
        DeleteOutcome::Deleted => Redirect::to(&list_url(page, &filter, None)),
        DeleteOutcome::Failed | DeleteOutcome::AlreadyRunning => {
            Redirect::to(&list_url(page, &filter, Some(user_id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(resolve_page(None), 1);
        assert_eq!(resolve_page(Some("")), 1);
        assert_eq!(resolve_page(Some("two")), 1);
        assert_eq!(resolve_page(Some("-3")), 1);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        assert_eq!(resolve_page(Some("0")), 1);
    }

    #[test]
    fn readable_pages_pass_through() {
        assert_eq!(resolve_page(Some("2")), 2);
        assert_eq!(resolve_page(Some("17")), 17);
    }

    #[test]
    fn query_params_resolve_to_a_list_query() {
        let params = ListQueryParams {
            page: Some("2".to_string()),
            q: Some("george".to_string()),
            delete: Some("7".to_string()),
        };
        let query = params.resolve();
        assert_eq!(query.page, 2);
        assert_eq!(query.filter, "george");
        assert_eq!(query.pending_delete, Some(7));
    }

    #[test]
    fn unreadable_delete_ids_are_dropped() {
        let params = ListQueryParams {
            page: None,
            q: None,
            delete: Some("seven".to_string()),
        };
        assert_eq!(params.resolve().pending_delete, None);
    }
}
