#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    Auth,
    Schema,
    PolicyDeny,
    RateLimit,
    Config,
    Storage,
    Unknown,
}

impl ErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Auth => "Auth",
            ErrorKind::Schema => "Schema",
            ErrorKind::PolicyDeny => "PolicyDeny",
            ErrorKind::RateLimit => "RateLimit",
            ErrorKind::Config => "Config",
            ErrorKind::Storage => "Storage",
            ErrorKind::Unknown => "Unknown",
        }
    }
}
