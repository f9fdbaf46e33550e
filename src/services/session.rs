use crate::api::ApiError;
use crate::models::{User, UserStatus};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Top-level screen selected by the session state
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Splash,
    Login { notice: Option<String> },
    Pending,
    Main,
}

pub fn route_for(loading: bool, user: Option<&User>) -> Route {
    if loading {
        return Route::Splash;
    }
    match user {
        None => Route::Login { notice: None },
        Some(user) => match user.status {
            UserStatus::Approved => Route::Main,
            UserStatus::Pending => Route::Pending,
            UserStatus::Rejected => Route::Login {
                notice: Some(ApiError::AccountRejected.to_string()),
            },
        },
    }
}

pub fn is_authenticated(user: Option<&User>) -> bool {
    user.is_some_and(User::is_approved)
}

/// Outcome of a login attempt, as the login form needs it
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFailure {
    /// Show the pending screen for this email
    Pending,
    Message(String),
}

pub fn classify_login_error(err: &ApiError) -> LoginFailure {
    match err {
        ApiError::AccountPending => LoginFailure::Pending,
        ApiError::AccountRejected => LoginFailure::Message(err.to_string()),
        ApiError::Server { message, .. } if !message.trim().is_empty() => {
            LoginFailure::Message(message.clone())
        }
        ApiError::ServerUnreachable(_) => {
            LoginFailure::Message("Unable to reach the server. Please try again later.".to_string())
        }
        _ => LoginFailure::Message(LOGIN_FAILED.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn user(status: UserStatus) -> User {
        User {
            id: "u1".into(),
            email: "a@b.c".into(),
            name: "Ann".into(),
            role: UserRole::User,
            status,
            created_at: None,
        }
    }

    #[test]
    fn test_routes() {
        assert_eq!(route_for(true, None), Route::Splash);
        assert_eq!(route_for(true, Some(&user(UserStatus::Approved))), Route::Splash);
        assert_eq!(route_for(false, None), Route::Login { notice: None });
        assert_eq!(route_for(false, Some(&user(UserStatus::Pending))), Route::Pending);
        assert_eq!(route_for(false, Some(&user(UserStatus::Approved))), Route::Main);
        assert_eq!(
            route_for(false, Some(&user(UserStatus::Rejected))),
            Route::Login {
                notice: Some("Your account has been rejected. Please contact support.".into())
            }
        );
    }

    #[test]
    fn test_is_authenticated_requires_approval() {
        assert!(!is_authenticated(None));
        assert!(!is_authenticated(Some(&user(UserStatus::Pending))));
        assert!(is_authenticated(Some(&user(UserStatus::Approved))));
    }

    #[test]
    fn test_login_error_messages() {
        assert_eq!(classify_login_error(&ApiError::AccountPending), LoginFailure::Pending);
        assert_eq!(
            classify_login_error(&ApiError::AccountRejected),
            LoginFailure::Message("Your account has been rejected. Please contact support.".into())
        );
        assert_eq!(
            classify_login_error(&ApiError::Server {
                status: 400,
                message: "Invalid credentials".into()
            }),
            LoginFailure::Message("Invalid credentials".into())
        );
        assert_eq!(
            classify_login_error(&ApiError::Server {
                status: 500,
                message: String::new()
            }),
            LoginFailure::Message(LOGIN_FAILED.into())
        );
        assert_eq!(
            classify_login_error(&ApiError::Unauthorized),
            LoginFailure::Message(LOGIN_FAILED.into())
        );
    }
}
