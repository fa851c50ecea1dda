mod client_error;

pub use client_error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;
