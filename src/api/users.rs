use async_trait::async_trait;
use tracing::instrument;

use crate::api::client::ApiClient;
use crate::core::error::ApiResult;
use crate::core::models::{NewUser, User};
use crate::core::services::UserService;

pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        UsersApi { client }
    }
}

#[async_trait]
impl UserService for UsersApi {
    #[instrument(name = "CreateUser", skip(self, user), fields(username = %user.username))]
    async fn create_user(&self, user: &NewUser) -> ApiResult<User> {
        self.client.post("/users", user).await
    }
}
