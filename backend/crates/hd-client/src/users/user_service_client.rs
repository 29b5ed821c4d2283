use crate::{ClientResult, RemoteUser, ServiceClient};

use uuid::Uuid;

/// Read access to the central user service
#[derive(Clone)]
pub struct UserServiceClient {
    client: ServiceClient,
}

impl UserServiceClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// `GET /api/v1/users/{id}`, forwarding `token` when given
    pub async fn get_user(&self, id: Uuid, token: Option<&str>) -> ClientResult<RemoteUser> {
        self.client
            .get_json(&format!("/api/v1/users/{}", id), token)
            .await
    }

    /// Like [`get_user`](Self::get_user) but a missing user is `Ok(None)`
    pub async fn find_user(&self, id: Uuid, token: Option<&str>) -> ClientResult<Option<RemoteUser>> {
        match self.get_user(id, token).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn user_exists(&self, id: Uuid, token: Option<&str>) -> ClientResult<bool> {
        Ok(self.find_user(id, token).await?.is_some())
    }
}
