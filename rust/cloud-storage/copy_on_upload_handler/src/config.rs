use std::str::FromStr;

use anyhow::Context;

/// What to do when S3 itself rejects the copy (as opposed to the request never completing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderErrorPolicy {
    /// Log the provider error and report the invocation as successful
    #[default]
    Log,
    /// Fail the invocation the same way a transport failure does
    Fail,
}

impl FromStr for ProviderErrorPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(ProviderErrorPolicy::Log),
            "fail" => Ok(ProviderErrorPolicy::Fail),
            other => Err(anyhow::anyhow!(
                "unknown provider error policy {other}, expected log or fail"
            )),
        }
    }
}

/// The configuration parameters for the lambda.
///
/// These are pulled from the environment variables set on the function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Overrides the S3 endpoint, e.g. for localstack
    pub endpoint: Option<String>,

    /// The bucket objects are copied from
    pub source_bucket: String,

    /// The bucket objects are copied into
    pub destination_bucket: String,

    pub provider_error_policy: ProviderErrorPolicy,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("AWS_ENDPOINT").filter(|endpoint| !endpoint.is_empty());
        let source_bucket =
            lookup("AWS_S3_BUCKET_ONE").context("AWS_S3_BUCKET_ONE must be provided")?;
        let destination_bucket =
            lookup("AWS_S3_BUCKET_TWO").context("AWS_S3_BUCKET_TWO must be provided")?;
        let provider_error_policy = lookup("PROVIDER_ERROR_POLICY")
            .map(|policy| policy.parse::<ProviderErrorPolicy>())
            .transpose()
            .context("PROVIDER_ERROR_POLICY is invalid")?
            .unwrap_or_default();

        Ok(Config {
            endpoint,
            source_bucket,
            destination_bucket,
            provider_error_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("AWS_ENDPOINT", "http://localhost:4566"),
            ("AWS_S3_BUCKET_ONE", "bucket-one"),
            ("AWS_S3_BUCKET_TWO", "bucket-two"),
            ("PROVIDER_ERROR_POLICY", "fail"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                endpoint: Some("http://localhost:4566".to_string()),
                source_bucket: "bucket-one".to_string(),
                destination_bucket: "bucket-two".to_string(),
                provider_error_policy: ProviderErrorPolicy::Fail,
            }
        );
    }

    #[test]
    fn endpoint_and_policy_are_optional() {
        let config = Config::from_lookup(lookup_from(&[
            ("AWS_ENDPOINT", ""),
            ("AWS_S3_BUCKET_ONE", "bucket-one"),
            ("AWS_S3_BUCKET_TWO", "bucket-two"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, None);
        assert_eq!(config.provider_error_policy, ProviderErrorPolicy::Log);
    }

    #[test]
    fn missing_source_bucket() {
        let err =
            Config::from_lookup(lookup_from(&[("AWS_S3_BUCKET_TWO", "bucket-two")])).unwrap_err();
        assert_eq!(err.to_string(), "AWS_S3_BUCKET_ONE must be provided");
    }

    #[test]
    fn missing_destination_bucket() {
        let err =
            Config::from_lookup(lookup_from(&[("AWS_S3_BUCKET_ONE", "bucket-one")])).unwrap_err();
        assert_eq!(err.to_string(), "AWS_S3_BUCKET_TWO must be provided");
    }

    #[test]
    fn unknown_policy() {
        let err = Config::from_lookup(lookup_from(&[
            ("AWS_S3_BUCKET_ONE", "bucket-one"),
            ("AWS_S3_BUCKET_TWO", "bucket-two"),
            ("PROVIDER_ERROR_POLICY", "retry"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "PROVIDER_ERROR_POLICY is invalid");
    }
}
