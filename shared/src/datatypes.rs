use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus::logger::tracing::warn;
use serde::{Deserialize, Deserializer, Serialize};

/// The marker the auth slice uses for "no avatar image was uploaded".
const NO_AVATAR: &str = "none";

/// Errors raised while turning a stored or received auth slice into an [`AuthState`].
#[derive(Debug, thiserror::Error)]
pub enum AuthSliceError {
    #[error("the username of an authenticated user must not be empty")]
    EmptyUsername,
    #[error("the auth slice is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A username that is guaranteed to contain at least one visible character.
///
/// The name is kept exactly as given, surrounding whitespace included.
#[derive(PartialEq, Eq, Clone, Debug, Hash)]
pub struct Username(String);

impl Username {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The uppercased first visible character, used as the glyph of a placeholder avatar.
    #[must_use]
    pub fn initial(&self) -> String {
        self.0
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

impl TryFrom<String> for Username {
    type Error = AuthSliceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(AuthSliceError::EmptyUsername);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Username {
    type Error = AuthSliceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the avatar of a user is displayed.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Avatar {
    /// No image is set, a coloured badge with the initial is shown instead.
    Placeholder,
    /// Reference (usually an url) to an uploaded image.
    Image(String),
}

#[derive(PartialEq, Clone, Debug)]
pub struct User {
    pub username: Username,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub avatar: Avatar,
}

/// The authentication state as seen by the front-end.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "AuthSlice", into = "AuthSlice")]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl AuthState {
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(user) => Some(user),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Parse the json representation of the auth slice.
    pub fn from_json(json: &str) -> Result<Self, AuthSliceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, AuthSliceError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The auth slice the way it is stored in the browser and sent by the server.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AuthSlice {
    #[serde(rename = "isAuthenticated", default)]
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSlice>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserSlice {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Avatar", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "CreatedAt", deserialize_with = "deserialize_created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "avatar", default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Accept RFC 3339 timestamps as well as timestamps without an offset, which are
/// read as UTC.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("invalid CreatedAt `{raw}`: {e}")))
}

impl UserSlice {
    fn avatar(&self) -> Avatar {
        if self.avatar.as_deref() == Some(NO_AVATAR) {
            return Avatar::Placeholder;
        }
        [&self.avatar_url, &self.avatar]
            .into_iter()
            .flatten()
            .find(|reference| !reference.is_empty() && reference.as_str() != NO_AVATAR)
            .map_or(Avatar::Placeholder, |reference| {
                Avatar::Image(reference.clone())
            })
    }
}

impl TryFrom<UserSlice> for User {
    type Error = AuthSliceError;

    fn try_from(slice: UserSlice) -> Result<Self, Self::Error> {
        let avatar = slice.avatar();
        Ok(Self {
            username: Username::try_from(slice.user_name)?,
            email: slice.email,
            created_at: slice.created_at,
            avatar,
        })
    }
}

impl From<User> for UserSlice {
    fn from(user: User) -> Self {
        let (avatar_url, avatar) = match user.avatar {
            Avatar::Placeholder => (None, Some(NO_AVATAR.to_string())),
            Avatar::Image(url) => (Some(url.clone()), Some(url)),
        };
        Self {
            user_name: user.username.0,
            email: user.email,
            avatar_url,
            created_at: user.created_at,
            avatar,
        }
    }
}

impl TryFrom<AuthSlice> for AuthState {
    type Error = AuthSliceError;

    fn try_from(slice: AuthSlice) -> Result<Self, Self::Error> {
        match (slice.is_authenticated, slice.user) {
            (false, _) => Ok(Self::Anonymous),
            (true, Some(user)) => Ok(Self::Authenticated(User::try_from(user)?)),
            (true, None) => {
                warn!("Auth slice claims an authenticated session without a user, treating it as anonymous");
                Ok(Self::Anonymous)
            }
        }
    }
}

impl From<AuthState> for AuthSlice {
    fn from(state: AuthState) -> Self {
        match state {
            AuthState::Anonymous => Self::default(),
            AuthState::Authenticated(user) => Self {
                is_authenticated: true,
                user: Some(user.into()),
            },
        }
    }
}

/// The languages the front-end is translated to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
pub enum Lang {
    #[default]
    #[strum(serialize = "en-US")]
    EnUS,
    #[strum(serialize = "de-DE")]
    DeDE,
}

impl Lang {
    #[must_use]
    pub const fn locale(self) -> chrono::Locale {
        match self {
            Self::EnUS => chrono::Locale::en_US,
            Self::DeDE => chrono::Locale::de_DE,
        }
    }
}
