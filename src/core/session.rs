use crate::core::config::SessionConfig;
use crate::core::models::User;

/// The signed-in user every view acts on behalf of.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> i64 {
        self.user.user_id
    }
}

impl From<&SessionConfig> for Session {
    fn from(config: &SessionConfig) -> Self {
        Session::new(User {
            user_id: config.user_id,
            username: config.username.clone(),
            email: config.email.clone(),
        })
    }
}
