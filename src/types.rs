/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    /// Any scheme without a default port
    Other,
}

impl SchemeType {
    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::Other => None,
        }
    }
}
