// Storefront authentication
//
// Form-based login/logout. The login response sets the session cookie in
// the client's jar; every later request from the same client carries it.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::SiteClient;
use crate::error::Error;

pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";

impl SiteClient {
    /// Submit the login form (`POST /login`, form-encoded `username` and
    /// `password`).
    ///
    /// Returns the session cookie value the server issued. A non-success
    /// status, or a success without any cookie, is `Error::LoginFailed`;
    /// network failures stay `Error::Transport`.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<String, Error> {
        debug!("logging in as {username}");

        let form = [("username", username), ("password", password.expose_secret())];
        let resp = self.post_form(LOGIN_PATH, &form).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::LoginFailed {
                status: status.as_u16(),
            });
        }

        let remote_session_id = self.session_cookie().ok_or(Error::LoginFailed {
            status: status.as_u16(),
        })?;

        debug!("login successful");
        Ok(remote_session_id)
    }

    /// End the remote session (`GET /logout`).
    pub async fn logout(&self) -> Result<(), Error> {
        self.get_page(LOGOUT_PATH).await?;
        debug!("logout complete");
        Ok(())
    }

    /// Check that the cookie in the jar is still accepted by the server.
    ///
    /// Any page answer that isn't the account page (redirect to the login
    /// form, error status) reads as a dead session.
    pub async fn validate_session(&self) -> Result<(), Error> {
        self.account().await.map(|_| ())
    }
}
