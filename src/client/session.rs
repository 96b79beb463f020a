use serde::{Deserialize, Serialize};

// Key the browser front end stores the logged-in user under.
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    // Anything missing or unreadable yields an anonymous session.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::anonymous();
        };

        match serde_json::from_str::<SessionUser>(raw) {
            Ok(user) if !user.id.trim().is_empty() => Self::logged_in(user),
            Ok(_) => Self::anonymous(),
            Err(e) => {
                tracing::warn!("Ignoring stored session: {}", e);
                Self::anonymous()
            }
        }
    }

    pub fn to_stored(&self) -> Option<String> {
        self.user
            .as_ref()
            .and_then(|user| serde_json::to_string(user).ok())
    }

    pub fn login(&mut self, user: SessionUser) {
        tracing::info!("Session started for user {}", user.id);
        self.user = Some(user);
    }

    pub fn logout(&mut self) -> Option<SessionUser> {
        let user = self.user.take();
        if let Some(user) = &user {
            tracing::info!("Session ended for user {}", user.id);
        }
        user
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
