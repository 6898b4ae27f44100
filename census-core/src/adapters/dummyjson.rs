//! dummyjson API client
//!
//! Handles the single GET against the public `/users` endpoint and maps the
//! camelCase payload into domain records.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::result::{Error, Result as DomainResult};
use crate::domain::User;

/// Default public endpoint serving the user collection
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users";

/// dummyjson API client
#[derive(Debug)]
pub struct DummyJsonClient {
    client: Client,
    users_url: String,
}

/// dummyjson API response envelope
///
/// The endpoint wraps the collection alongside paging fields we ignore;
/// the default page is accepted as the full set.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<RawUser>,
}

/// dummyjson user record from the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub address: Option<RawAddress>,
}

/// Nested address object; only the city is used
#[derive(Debug, Deserialize)]
pub struct RawAddress {
    #[serde(default)]
    pub city: Option<String>,
}

/// Result of fetching the user collection
pub struct FetchedUsers {
    pub users: Vec<User>,
    pub warnings: Vec<String>,
}

impl DummyJsonClient {
    /// Create a new client for the given users endpoint
    pub fn new(users_url: &str) -> Result<Self> {
        let parsed = Url::parse(users_url).context("Invalid URL format")?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!("Directory URL must use http or https, got '{}'", other),
        }

        if parsed.host_str().unwrap_or("").is_empty() {
            anyhow::bail!("Directory URL must include a host");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            users_url: users_url.to_string(),
        })
    }

    /// Fetch the full user collection
    ///
    /// Malformed records are skipped and reported as warnings; they never
    /// abort the fetch.
    pub fn get_users(&self) -> Result<FetchedUsers> {
        let response = self
            .client
            .get(&self.users_url)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        let data: UsersResponse = response
            .json()
            .context("Failed to parse directory response")?;

        Ok(map_users(data))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Connection timed out after 30 seconds")
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to the directory endpoint")
        } else {
            anyhow::anyhow!("Directory request failed: {}", error)
        }
    }

    /// Check response status and return appropriate errors
    fn check_response_status(&self, response: &reqwest::blocking::Response) -> Result<()> {
        match response.status().as_u16() {
            200 => Ok(()),
            404 => anyhow::bail!(
                "No user collection at this endpoint (HTTP 404). \
                Check the sourceUrl setting."
            ),
            429 => anyhow::bail!("The directory endpoint is rate limiting requests (HTTP 429)"),
            status => anyhow::bail!("Directory API error: HTTP {}", status),
        }
    }
}

/// Map the wire envelope into domain records, skipping malformed entries
fn map_users(data: UsersResponse) -> FetchedUsers {
    let mut users = Vec::new();
    let mut warnings = Vec::new();

    for raw in data.users {
        match map_user(&raw) {
            Ok(user) => users.push(user),
            Err(e) => warnings.push(format!("Skipping user {}: {}", raw.id, e)),
        }
    }

    FetchedUsers { users, warnings }
}

/// Map a raw record to a domain User
fn map_user(raw: &RawUser) -> DomainResult<User> {
    let city = raw
        .address
        .as_ref()
        .and_then(|a| a.city.clone())
        .ok_or_else(|| Error::validation("missing city"))?;

    let birth_date = parse_birth_date(&raw.birth_date)?;

    Ok(User::new(
        raw.id,
        raw.first_name.clone(),
        raw.last_name.clone(),
        birth_date,
        city,
    ))
}

/// Parse a source birth date
///
/// The endpoint sends unpadded dates ("1996-5-30"); chrono's numeric
/// fields accept that form.
fn parse_birth_date(s: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| Error::decode(format!("bad birth date '{}'", s)))
}


// =============================================================================
// DummyJsonProvider - implements DirectoryProvider trait
// =============================================================================

use crate::ports::{DirectoryProvider, FetchUsersResult};

/// dummyjson directory provider
///
/// Implements the DirectoryProvider trait for loading the real user
/// collection over HTTP.
pub struct DummyJsonProvider {
    users_url: String,
}

impl DummyJsonProvider {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
        }
    }
}

impl Default for DummyJsonProvider {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

impl DirectoryProvider for DummyJsonProvider {
    fn name(&self) -> &str {
        "dummyjson"
    }

    fn fetch_users(&self) -> DomainResult<FetchUsersResult> {
        // A bad endpoint is a settings problem, not a network one
        let client = DummyJsonClient::new(&self.users_url)
            .map_err(|e| Error::Config(e.to_string()))?;

        let fetched = client
            .get_users()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(FetchUsersResult {
            users: fetched.users,
            warnings: fetched.warnings,
        })
    }
}
