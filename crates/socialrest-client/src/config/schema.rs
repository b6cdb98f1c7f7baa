use serde::Deserialize;
use socialrest_core::error::{Result, SocialRestError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub client: ClientSection,

    #[serde(default)]
    pub credentials: Credentials,

    #[serde(default)]
    pub fixtures: Fixtures,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            client: ClientSection::default(),
            credentials: Credentials::default(),
            fixtures: Fixtures::default(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SocialRestError::UnsupportedVersion);
        }

        self.client.validate()?;
        self.credentials.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 0 keeps the transport default (no connect timeout).
    #[serde(default)]
    pub connect_timeout_ms: u64,
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_ms: 0,
        }
    }
}

impl ClientSection {
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SocialRestError::BadRequest(
                "client.base_url must start with http:// or https://".into(),
            ));
        }
        if self.connect_timeout_ms > 600000 {
            return Err(SocialRestError::BadRequest(
                "client.connect_timeout_ms must be at most 600000".into(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: default_email(),
            password: default_password(),
        }
    }
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(SocialRestError::BadRequest(
                "credentials.email must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_email() -> String {
    "helena.hills@social.com".into()
}
fn default_password() -> String {
    "password789".into()
}

/// Ids the catalogued actions target.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixtures {
    #[serde(default = "default_post_id")]
    pub post_id: u64,

    // Comment 1 belongs to another user in the mock data.
    #[serde(default = "default_comment_id")]
    pub comment_id: u64,

    #[serde(default = "default_group_id")]
    pub group_id: u64,

    /// Used by the delete actions to exercise the not-found path.
    #[serde(default = "default_missing_id")]
    pub missing_id: u64,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            post_id: default_post_id(),
            comment_id: default_comment_id(),
            group_id: default_group_id(),
            missing_id: default_missing_id(),
        }
    }
}

fn default_post_id() -> u64 {
    101
}
fn default_comment_id() -> u64 {
    2
}
fn default_group_id() -> u64 {
    1
}
fn default_missing_id() -> u64 {
    9999
}
