// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication and account endpoints for the three portals.

use serde::Deserialize;
use serde_json::Value;

use lexlink_core::{LexlinkError, Role};

use crate::client::ApiClient;
use crate::types::{AccountSession, Credentials, RegisterClient, RegisterLawyer};

#[derive(Debug, Deserialize)]
struct LoginEnvelope {
    token: String,
    #[serde(default)]
    client: Option<Value>,
    #[serde(default)]
    lawyer: Option<Value>,
    #[serde(default)]
    admin: Option<Value>,
}

impl LoginEnvelope {
    fn into_session(self) -> AccountSession {
        AccountSession {
            token: self.token,
            profile: self
                .client
                .or(self.lawyer)
                .or(self.admin)
                .unwrap_or(Value::Null),
        }
    }
}

impl ApiClient {
    /// Logs in to the portal for `role`. Empty fields are rejected
    /// before any network call.
    pub async fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> Result<AccountSession, LexlinkError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(LexlinkError::Validation(
                "email and password are required".into(),
            ));
        }

        let path = match role {
            Role::Client => "/api/login-client",
            Role::Lawyer => "/api/login-lawyer",
            Role::Admin => "/api/admin/login",
        };

        let envelope: LoginEnvelope = self.post_json(path, credentials).await?;
        Ok(envelope.into_session())
    }

    /// Registers a client account.
    pub async fn register_client(&self, body: &RegisterClient) -> Result<Value, LexlinkError> {
        self.post_json("/api/register-client", body).await
    }

    /// Registers a lawyer account. The account stays out of the public
    /// directory until KYC is approved.
    pub async fn register_lawyer(&self, body: &RegisterLawyer) -> Result<Value, LexlinkError> {
        self.post_json("/api/register-lawyer", body).await
    }

    /// Fetches the authenticated account's profile for `role`.
    pub async fn profile(&self, role: Role) -> Result<Value, LexlinkError> {
        let path = match role {
            Role::Client => "/api/client-profile",
            Role::Lawyer => "/api/lawyer-profile",
            Role::Admin => {
                return Err(LexlinkError::Validation(
                    "admin accounts have no profile endpoint".into(),
                ));
            }
        };
        self.get_json(path).await
    }

    /// Updates the authenticated account's profile for `role`.
    pub async fn update_profile(&self, role: Role, body: &Value) -> Result<Value, LexlinkError> {
        let path = match role {
            Role::Client => "/api/client-profile",
            Role::Lawyer => "/api/lawyer-profile",
            Role::Admin => {
                return Err(LexlinkError::Validation(
                    "admin accounts have no profile endpoint".into(),
                ));
            }
        };
        self.put_json(path, body).await
    }

    /// Changes the authenticated account's password.
    pub async fn change_password(
        &self,
        role: Role,
        current_password: &str,
        new_password: &str,
    ) -> Result<Value, LexlinkError> {
        if new_password.is_empty() {
            return Err(LexlinkError::Validation("new password is required".into()));
        }
        let path = match role {
            Role::Client => "/api/client/change-password",
            Role::Lawyer => "/api/lawyer/change-password",
            Role::Admin => {
                return Err(LexlinkError::Validation(
                    "admin password changes are not supported".into(),
                ));
            }
        };
        self.put_json(
            path,
            &serde_json::json!({
                "current_password": current_password,
                "new_password": new_password,
            }),
        )
        .await
    }

    /// Requests a password-reset OTP email.
    pub async fn request_password_reset_otp(
        &self,
        email: &str,
        role: Role,
    ) -> Result<Value, LexlinkError> {
        if email.trim().is_empty() {
            return Err(LexlinkError::Validation("email is required".into()));
        }
        self.post_json(
            "/api/send-password-reset-otp",
            &serde_json::json!({"email": email, "user_type": role.to_string()}),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::test_client;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn login_returns_token_and_role_profile() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-client"))
            .and(body_json(
                serde_json::json!({"email": "c@example.com", "password": "pw"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Login successful",
                "token": "jwt-abc",
                "client": {"id": 3, "name": "Chandra"}
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let session = client
            .login(
                Role::Client,
                &Credentials {
                    email: "c@example.com".into(),
                    password: "pw".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(session.token, "jwt-abc");
        assert_eq!(session.profile["name"], "Chandra");
    }

    #[tokio::test]
    async fn login_rejects_empty_fields_before_any_call() {
        let client = test_client("http://127.0.0.1:9");
        let err = client
            .login(
                Role::Lawyer,
                &Credentials {
                    email: " ".into(),
                    password: String::new(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LexlinkError::Validation(_)));
    }

    #[tokio::test]
    async fn bad_credentials_map_to_auth_expired() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login-lawyer"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "Invalid email or password"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .login(
                Role::Lawyer,
                &Credentials {
                    email: "l@example.com".into(),
                    password: "nope".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LexlinkError::AuthExpired));
    }
}
