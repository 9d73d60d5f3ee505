use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A registered push endpoint. The engine only ever reads devices; they are
/// managed elsewhere.
#[derive(Debug, Clone)]
pub struct Device {
    pub id: ID,
    pub name: String,
    pub url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Device {
    pub fn new(name: &str, url: &str) -> anyhow::Result<Self> {
        let parsed_url =
            url::Url::parse(url).map_err(|_| anyhow::anyhow!("Malformed device url: {}", url))?;
        let allowed_schemes = ["https", "http"];
        if !allowed_schemes.contains(&parsed_url.scheme()) {
            return Err(anyhow::anyhow!(
                "Device url scheme must be one of {:?}, got: {}",
                allowed_schemes,
                parsed_url.scheme()
            ));
        }

        Ok(Self {
            id: Default::default(),
            name: name.into(),
            url: url.into(),
            enabled: true,
            created_at: Utc::now(),
        })
    }
}

impl Entity for Device {
    fn id(&self) -> &ID {
        &self.id
    }
}
