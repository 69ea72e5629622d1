use std::{env, time::Duration};

use crate::seed::SeedPolicy;

#[cfg(feature = "dynamodb")]
use crate::storage::dynamodb::AwsConfig;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Table holding the albums (default: "albums")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local
    pub endpoint_url: Option<String>,
    /// Upper bound on a single DynamoDB operation in milliseconds (default: 5,000)
    pub dynamodb_timeout_ms: u64,
    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Retries of the first sample-data write while the table provisions (default: 3)
    pub seed_retry_limit: u32,
    /// Wait between those attempts in seconds (default: 5)
    pub seed_backoff_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Albums table name (default: "albums")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `DYNAMODB_TIMEOUT_MS` - DynamoDB operation timeout (default: 5,000)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 10)
    /// - `SEED_RETRY_LIMIT` - Sample-data retry limit (default: 3)
    /// - `SEED_BACKOFF_SECS` - Sample-data retry backoff (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let number = |name: &str| lookup(name).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            table_name: lookup("TABLE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "albums".to_string()),
            region: lookup("AWS_REGION")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: lookup("AWS_ENDPOINT_URL").filter(|v| !v.is_empty()),
            dynamodb_timeout_ms: number("DYNAMODB_TIMEOUT_MS").unwrap_or(5_000),
            request_timeout_secs: number("REQUEST_TIMEOUT_SECS").unwrap_or(10),
            seed_retry_limit: lookup("SEED_RETRY_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(3),
            seed_backoff_secs: number("SEED_BACKOFF_SECS").unwrap_or(5),
        }
    }

    /// Get the HTTP request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Retry policy for the sample-data seeder.
    pub fn seed_policy(&self) -> SeedPolicy {
        SeedPolicy {
            retry_limit: self.seed_retry_limit,
            backoff: Duration::from_secs(self.seed_backoff_secs),
        }
    }

    /// SDK client settings derived from this configuration.
    #[cfg(feature = "dynamodb")]
    pub fn aws_config(&self) -> AwsConfig {
        AwsConfig {
            endpoint_url: self.endpoint_url.clone(),
            region: self.region.clone(),
            operation_timeout: Duration::from_millis(self.dynamodb_timeout_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
