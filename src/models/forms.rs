use serde::Deserialize;

/// The form payload for logging in.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// The form payload for registering a new account.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
