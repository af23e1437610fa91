use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of `GET /`.
#[derive(Serialize, Debug, Clone)]
pub struct ServiceStatus {
    pub message: String,
    pub version: String,
    pub status: &'static str,
}

impl ServiceStatus {
    pub fn online(message: impl Into<String>, version: impl Into<String>) -> Self {
        Self { message: message.into(), version: version.into(), status: "online" }
    }
}
