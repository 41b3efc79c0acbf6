pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

pub(crate) mod storage;

// common functions and types for the handlers
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public shape of a user record. The password hash never leaves the
/// handlers.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

pub fn valid_password(password: &str) -> bool {
    // bcrypt only reads the first 72 bytes of input
    !password.is_empty() && password.len() <= 72
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("user.name+tag@example.co.uk"));

        assert!(!valid_email(""));
        assert!(!valid_email("nope"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("a b@x.com"));
        assert!(!valid_email("a@@x.com"));
    }

    #[test]
    fn test_valid_password() {
        assert!(valid_password("secret1"));
        assert!(valid_password(&"a".repeat(72)));

        assert!(!valid_password(""));
        assert!(!valid_password(&"a".repeat(73)));
    }
}
