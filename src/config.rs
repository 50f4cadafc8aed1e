pub const DEFAULT_DATABASE_URL: &str = "sqlite://puppyshelter.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Connection string handed to [`crate::sql::open`].
	pub database_url: String,
}

impl Config {
	/// Reads `DATABASE_URL`, loading `.env` first if there is one.
	pub fn from_env() -> Self {
		if let Err(e) = dotenvy::dotenv() {
			if !e.not_found() {
				tracing::warn!("can't read .env: {e}");
			}
		}
		let database_url = std::env::var("DATABASE_URL")
			.unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
		Config{ database_url }
	}

	/// `url` wins over whatever the environment says.
	pub fn with_database_url(mut self, url: Option<String>) -> Self {
		if let Some(url) = url {
			self.database_url = url;
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flag_overrides_environment() {
		let config = Config{ database_url: DEFAULT_DATABASE_URL.to_string() };
		assert_eq!(config.clone().with_database_url(None), config);
		assert_eq!(
			config.with_database_url(Some("sqlite::memory:".to_string())).database_url,
			"sqlite::memory:"
		);
	}
}
