//! Sign-in request bodies and token extraction.
//!
//! Aquarium returns the session token inside the sign-in response body. The
//! client moves that token into its [`Session`](crate::Session) and hands the
//! remaining payload back to the caller; this module holds the pieces of that
//! exchange that do not touch the network.

use serde_json::{json, Value};

use crate::config::AccessToken;
use crate::error::ConfigError;

/// Path of the user sign-in endpoint.
pub const SIGNIN_PATH: &str = "signin";

/// Path of the current user endpoint.
pub const ME_PATH: &str = "users/me";

/// Field of a sign-in response carrying the session token.
const TOKEN_FIELD: &str = "token";

/// Returns the request body for user sign-in.
pub(crate) fn signin_body(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

/// Returns the request body for bot sign-in.
pub(crate) fn bot_signin_body(secret: &str) -> Value {
    json!({ "secret": secret })
}

/// Returns the sign-in path for the bot identified by `key`.
///
/// The key is inserted as-is; escaping is left to URL parsing.
#[must_use]
pub fn bot_signin_path(key: &str) -> String {
    format!("bots/{key}/signin")
}

/// Removes the token from a sign-in response and returns it.
///
/// A non-empty string `token` on a JSON object is taken as-is, and a
/// non-zero number is taken as its decimal text. `null`, `""`, `0`, booleans
/// and compound values leave the response untouched and yield `Ok(None)`.
/// The order of the remaining fields is preserved.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidToken`] if the token cannot be used as a
/// header value. The response is left untouched in that case.
pub(crate) fn take_token(response: &mut Value) -> Result<Option<AccessToken>, ConfigError> {
    let Some(object) = response.as_object_mut() else {
        return Ok(None);
    };

    let token = match object.get(TOKEN_FIELD) {
        Some(Value::String(token)) if !token.is_empty() => AccessToken::new(token.as_str())?,
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => {
            AccessToken::new(number.to_string())?
        }
        _ => return Ok(None),
    };

    *object = std::mem::take(object)
        .into_iter()
        .filter(|(key, _)| key != TOKEN_FIELD)
        .collect();

    Ok(Some(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signin_body_serializes_credentials() {
        let body = signin_body("a@b.com", "x");
        assert_eq!(body.to_string(), r#"{"email":"a@b.com","password":"x"}"#);
    }

    #[test]
    fn test_bot_signin_body_serializes_secret_only() {
        let body = bot_signin_body("s3cr3t");
        assert_eq!(body.to_string(), r#"{"secret":"s3cr3t"}"#);
    }

    #[test]
    fn test_bot_signin_path() {
        assert_eq!(bot_signin_path("123456"), "bots/123456/signin");
    }

    #[test]
    fn test_take_token_strips_field_and_keeps_order() {
        let mut response = json!({"user": {"_key": "1"}, "token": "T1", "expires": 10});

        let token = take_token(&mut response).unwrap().unwrap();

        assert_eq!(token.as_ref(), "T1");
        assert_eq!(response, json!({"user": {"_key": "1"}, "expires": 10}));
        let keys: Vec<&String> = response.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["user", "expires"]);
    }

    #[test]
    fn test_take_token_ignores_missing_or_empty_token() {
        let mut missing = json!({"user": {}});
        assert!(take_token(&mut missing).unwrap().is_none());
        assert_eq!(missing, json!({"user": {}}));

        let mut empty = json!({"user": {}, "token": ""});
        assert!(take_token(&mut empty).unwrap().is_none());
        assert_eq!(empty, json!({"user": {}, "token": ""}));

        let mut null = json!({"user": {}, "token": null});
        assert!(take_token(&mut null).unwrap().is_none());
        assert_eq!(null, json!({"user": {}, "token": null}));
    }

    #[test]
    fn test_take_token_accepts_numeric_token() {
        let mut response = json!({"user": {}, "token": 123456});

        let token = take_token(&mut response).unwrap().unwrap();

        assert_eq!(token.as_ref(), "123456");
        assert_eq!(response, json!({"user": {}}));
    }

    #[test]
    fn test_take_token_ignores_zero_and_non_scalar_tokens() {
        for token in [json!(0), json!(false), json!(true), json!({"v": "T"}), json!(["T"])] {
            let mut response = json!({"user": {}, "token": token.clone()});
            assert!(take_token(&mut response).unwrap().is_none());
            assert_eq!(response["token"], token);
        }
    }

    #[test]
    fn test_take_token_ignores_non_objects() {
        let mut response = json!(["token"]);
        assert!(take_token(&mut response).unwrap().is_none());
        assert_eq!(response, json!(["token"]));
    }

    #[test]
    fn test_take_token_rejects_invalid_header_value() {
        let mut response = json!({"token": "bad\ntoken"});
        assert!(matches!(
            take_token(&mut response),
            Err(ConfigError::InvalidToken)
        ));
        assert_eq!(response, json!({"token": "bad\ntoken"}));
    }
}
