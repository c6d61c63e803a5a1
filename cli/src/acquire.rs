#![deny(missing_docs)]

//! # Spec Acquisition
//!
//! Obtains the raw OpenAPI document, either from a local JSON file or from a
//! live backend after a login handshake.
//!
//! The remote flow is two dependent requests: `POST /auth/login` with the
//! credentials, then `GET /server/specs/oas` with the returned bearer token.
//! No retries and no token caching; every invocation logs in afresh. The
//! fetched document is returned unvalidated, its shape is the deriver's
//! concern.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use typegen_core::{AppError, AppResult};
use url::Url;

/// Source configuration for one acquisition.
#[derive(Debug, Clone, Default)]
pub struct AcquireOptions {
    /// Local spec file; takes precedence over remote retrieval.
    pub spec_file: Option<PathBuf>,
    /// Remote backend base URL.
    pub host: Option<String>,
    /// Login email.
    pub email: Option<String>,
    /// Login password.
    pub password: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Required shape of the login response. Extra fields are tolerated,
/// missing or ill-typed ones are not.
#[derive(Deserialize)]
struct AuthResponse {
    data: AuthData,
}

#[derive(Deserialize)]
struct AuthData {
    access_token: String,
    #[allow(dead_code)]
    expires: i64,
    #[allow(dead_code)]
    refresh_token: String,
}

/// Validates the login response shape and extracts the access token.
fn parse_auth_response(body: Value) -> AppResult<String> {
    let auth: AuthResponse = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Unexpected login response: {}", e)))?;
    Ok(auth.data.access_token)
}

/// Acquires the raw OpenAPI document described by `options`.
///
/// Required fields are checked in order: host (unless a spec file is given),
/// then email, then password.
pub fn acquire_spec(options: &AcquireOptions) -> AppResult<Value> {
    if let Some(path) = &options.spec_file {
        debug!("reading spec from {:?}", path);
        let content = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&content)?);
    }

    let host = options.host.as_deref().ok_or_else(|| {
        AppError::Configuration(String::from("Either spec-file or host must be specified"))
    })?;
    let email = options
        .email
        .as_deref()
        .ok_or_else(|| AppError::Configuration(String::from("email must be specified")))?;
    let password = options
        .password
        .as_deref()
        .ok_or_else(|| AppError::Configuration(String::from("password must be specified")))?;

    let base = Url::parse(host)
        .map_err(|e| AppError::Configuration(format!("Invalid host URL: {}", e)))?;
    let login_url = base
        .join("/auth/login")
        .map_err(|e| AppError::Configuration(format!("Invalid host URL: {}", e)))?;
    let spec_url = base
        .join("/server/specs/oas")
        .map_err(|e| AppError::Configuration(format!("Invalid host URL: {}", e)))?;

    debug!("POST {}", login_url);
    let mut login_response = ureq::post(login_url.as_str())
        .send_json(LoginRequest { email, password })
        .map_err(|e| AppError::Network(format!("Login request failed: {}", e)))?;
    let login_body: Value = login_response
        .body_mut()
        .read_json()
        .map_err(|e| AppError::Network(format!("Login response was not JSON: {}", e)))?;
    let access_token = parse_auth_response(login_body)?;

    debug!("GET {}", spec_url);
    let mut spec_response = ureq::get(spec_url.as_str())
        .header("Authorization", &format!("Bearer {}", access_token))
        .call()
        .map_err(|e| AppError::Network(format!("Spec request failed: {}", e)))?;
    spec_response
        .body_mut()
        .read_json()
        .map_err(|e| AppError::Network(format!("Spec response was not JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_spec_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!({ "openapi": "3.0.1", "paths": {} })).unwrap();

        let options = AcquireOptions {
            spec_file: Some(file.path().to_path_buf()),
            ..AcquireOptions::default()
        };
        let doc = acquire_spec(&options).unwrap();
        assert_eq!(doc["openapi"], "3.0.1");
    }

    #[test]
    fn test_spec_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let options = AcquireOptions {
            spec_file: Some(file.path().to_path_buf()),
            ..AcquireOptions::default()
        };
        assert!(matches!(acquire_spec(&options), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_spec_file_missing() {
        let options = AcquireOptions {
            spec_file: Some(PathBuf::from("/nonexistent/spec.json")),
            ..AcquireOptions::default()
        };
        assert!(matches!(acquire_spec(&options), Err(AppError::Io(_))));
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let expect_configuration = |options: &AcquireOptions, needle: &str| {
            match acquire_spec(options) {
                Err(AppError::Configuration(message)) => assert!(
                    message.contains(needle),
                    "expected {:?} in {:?}",
                    needle,
                    message
                ),
                other => panic!("expected a configuration error, got {:?}", other.err()),
            }
        };

        let mut options = AcquireOptions::default();
        expect_configuration(&options, "spec-file or host");

        options.host = Some(String::from("https://cms.example.com"));
        expect_configuration(&options, "email");

        options.email = Some(String::from("admin@example.com"));
        expect_configuration(&options, "password");
    }

    #[test]
    fn test_invalid_host_url() {
        let options = AcquireOptions {
            host: Some(String::from("not a url")),
            email: Some(String::from("admin@example.com")),
            password: Some(String::from("secret")),
            ..AcquireOptions::default()
        };
        assert!(matches!(
            acquire_spec(&options),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn test_auth_response_valid() {
        let body = json!({
            "data": {
                "access_token": "token-123",
                "expires": 900000,
                "refresh_token": "refresh-456",
                "extra": "ignored"
            }
        });
        assert_eq!(parse_auth_response(body).unwrap(), "token-123");
    }

    #[test]
    fn test_auth_response_rejects_bad_shapes() {
        let bodies = [
            json!({}),
            json!({ "data": {} }),
            // Missing refresh_token
            json!({ "data": { "access_token": "t", "expires": 900000 } }),
            // expires must be an integer
            json!({ "data": { "access_token": "t", "expires": "soon", "refresh_token": "r" } }),
            // access_token must be a string
            json!({ "data": { "access_token": 7, "expires": 900000, "refresh_token": "r" } }),
        ];
        for body in bodies {
            assert!(matches!(
                parse_auth_response(body),
                Err(AppError::Validation(_))
            ));
        }
    }
}
