use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    Decode {
        field: String,
        source: serde_json::Error,
    },
    Encode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Decode { field, source } => {
                write!(f, "failed to decode field `{}`: {}", field, source)
            }
            ClientError::Encode(e) => write!(f, "failed to encode payload: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Decode { source, .. } => Some(source),
            ClientError::Encode(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Encode(err)
    }
}
