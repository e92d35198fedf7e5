use http::StatusCode;
use reqwest::Client;
use snafu::ResultExt;
use typed_builder::TypedBuilder;
use url::Url;
use crate::directory::error::{DecodeSnafu, DirectoryError, TransportSnafu};
use crate::directory::model::{Credentials, RejectionBody, TokenResponse, User, UserChanges, UserEnvelope, UserPage};

/// Typed client for the remote user directory, one method per endpoint the
/// console uses. No retries and no client side timeouts, a call either
/// comes back or fails with a transport error.
#[derive(Debug, Clone, TypedBuilder)]
pub struct DirectoryClient {
    #[builder(default = Client::new())]
    client: Client,
    base_url: Url,
}

impl DirectoryClient {

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn fetch_page(&self, page: u32) -> Result<UserPage, DirectoryError> {
        let response = self.client
            .get(self.endpoint("users"))
            .query(&[("page", page)])
            .send()
            .await
            .context(TransportSnafu)?;

        match response.status() {
            status if status.is_success() => response.json::<UserPage>().await.context(DecodeSnafu),
            status => Err(DirectoryError::UnexpectedStatus { status }),
        }
    }

    pub async fn fetch_user(&self, id: i64) -> Result<User, DirectoryError> {
        let response = self.client
            .get(self.endpoint(&format!("users/{id}")))
            .send()
            .await
            .context(TransportSnafu)?;

        match response.status() {
            status if status.is_success() => {
                let envelope = response.json::<UserEnvelope>().await.context(DecodeSnafu)?;
                Ok(envelope.data)
            }
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound),
            status => Err(DirectoryError::UnexpectedStatus { status }),
        }
    }

    pub async fn update_user(&self, id: i64, changes: &UserChanges) -> Result<(), DirectoryError> {
        let response = self.client
            .patch(self.endpoint(&format!("users/{id}")))
            .json(changes)
            .send()
            .await
            .context(TransportSnafu)?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound),
            status => Err(DirectoryError::UnexpectedStatus { status }),
        }
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), DirectoryError> {
        let response = self.client
            .delete(self.endpoint(&format!("users/{id}")))
            .send()
            .await
            .context(TransportSnafu)?;

        match response.status() {
            //only 200 and 201 count as done, a bare 204 is treated as a failure
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound),
            status => Err(DirectoryError::UnexpectedStatus { status }),
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<String, DirectoryError> {
        let response = self.client
            .post(self.endpoint("login"))
            .json(credentials)
            .send()
            .await
            .context(TransportSnafu)?;

        if response.status().is_success() {
            let body = response.json::<TokenResponse>().await.context(DecodeSnafu)?;
            Ok(body.token)
        } else {
            //a rejection usually explains itself, pass the reason along if present
            let body = response.json::<RejectionBody>().await.unwrap_or_default();
            Err(DirectoryError::RejectedLogin { message: body.error })
        }
    }
}
