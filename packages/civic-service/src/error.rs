pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Provider error: {message}")]
	Provider { message: String },
}
impl From<civic_providers::Error> for Error {
	fn from(err: civic_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
