//! Backoffice HTTP client.
//!
//! Both endpoint shapes belong to the CMS and are not versioned; field and
//! query-parameter names must match it exactly. The cookie-holding
//! [`ureq::Agent`] is the session: the login response sets an auth cookie
//! the package-fetch call relies on, so one [`HttpBackoffice`] is built per
//! run and dropped when the run ends.

use std::path::Path;

use uresolver_core::{Credentials, PackageRecord};

use crate::error::ClientError;

/// Backoffice login endpoint, relative to the normalized host.
pub const LOGIN_PATH: &str = "/umbraco/backoffice/UmbracoApi/Authentication/PostLogin";

/// Package installer endpoint, relative to the normalized host.
pub const INSTALLER_PATH: &str = "/umbraco/developer/packages/installer.aspx";

/// Prefix `http://` unless the host already carries a scheme.
///
/// A trailing slash is dropped so endpoint paths can be appended directly.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

/// The two exchanges a restore run makes against the backoffice.
///
/// Trait seam so the pipeline can be driven by a fake in tests.
pub trait Backoffice {
    /// Authenticate the session. Aborting error on rejection or transport
    /// failure.
    fn login(&self) -> Result<(), ClientError>;

    /// Ask the server to stage `package`'s archive at `staging_path` on the
    /// local filesystem. Returns the response status for any HTTP
    /// completion; a fetch that "succeeded" with an error status surfaces
    /// later as a missing staged file.
    fn fetch_package(
        &self,
        package: &PackageRecord,
        staging_path: &Path,
    ) -> Result<u16, ClientError>;
}

/// Live client against a CMS backoffice.
pub struct HttpBackoffice {
    agent: ureq::Agent,
    base_url: String,
    credentials: Credentials,
}

impl HttpBackoffice {
    /// Build a fresh session for one run. The agent's cookie store starts
    /// empty; `login` populates it.
    pub fn new(host: &str, credentials: Credentials) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: normalize_host(host),
            credentials,
        }
    }
}

impl Backoffice for HttpBackoffice {
    fn login(&self) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        tracing::debug!("logging in via {url}");
        match self.agent.post(&url).send_form(&[
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ]) {
            Ok(resp) if (200..300).contains(&resp.status()) => {
                tracing::info!("logged in as {}", self.credentials.username);
                Ok(())
            }
            Ok(resp) => Err(ClientError::UnexpectedLoginStatus {
                status: resp.status(),
            }),
            Err(ureq::Error::Status(400, _)) => Err(ClientError::InvalidCredentials),
            Err(ureq::Error::Status(status, _)) => {
                Err(ClientError::UnexpectedLoginStatus { status })
            }
            Err(ureq::Error::Transport(source)) => Err(ClientError::Network {
                url,
                source: Box::new(source),
            }),
        }
    }

    fn fetch_package(
        &self,
        package: &PackageRecord,
        staging_path: &Path,
    ) -> Result<u16, ClientError> {
        let url = format!(
            "{}{}?repoGuid={}&guid={}",
            self.base_url, INSTALLER_PATH, package.repository_guid, package.package_guid
        );
        let staging = staging_path.to_string_lossy();
        tracing::debug!("fetching package {} via {url}", package.package_guid);
        match self
            .agent
            .post(&url)
            .send_form(&[("body_tempFile", staging.as_ref())])
        {
            Ok(resp) => Ok(resp.status()),
            // The server's answer is not consumed; error statuses surface
            // as a missing staged file at the placer step.
            Err(ureq::Error::Status(status, _)) => Ok(status),
            Err(ureq::Error::Transport(source)) => Err(ClientError::Network {
                url,
                source: Box::new(source),
            }),
        }
    }
}
