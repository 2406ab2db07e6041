//! HTTP Basic 凭证 (RFC 7617)

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{CredentialsError, Result};

/// `Authorization: Basic ...` 中携带的用户 ID 与密码
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    user_id: String,
    password: Option<String>,
}

impl BasicCredentials {
    /// 以用户 ID 与密码创建
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: Some(password.into()),
        }
    }

    /// 解析 `Authorization` 头的值
    ///
    /// 不是 Basic 方案时返回 `Ok(None)`；方案名不区分大小写。凭证部分无法
    /// 解码时返回错误。解码结果中没有 `:` 时，整段视为用户 ID。
    pub fn parse(header_value: &str) -> Result<Option<Self>> {
        let header_value = header_value.trim();
        let Some((scheme, encoded)) = header_value.split_once(' ') else {
            return Ok(None);
        };
        if !scheme.eq_ignore_ascii_case("basic") {
            return Ok(None);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CredentialsError::InvalidBase64(e.to_string()))?;
        let decoded = String::from_utf8(decoded).map_err(|_| CredentialsError::InvalidUtf8)?;

        let credentials = match decoded.split_once(':') {
            Some((user_id, password)) => Self {
                user_id: user_id.to_string(),
                password: Some(password.to_string()),
            },
            None => Self {
                user_id: decoded,
                password: None,
            },
        };
        Ok(Some(credentials))
    }

    /// 用户 ID（客户端凭证中为客户端 ID）
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// 密码（客户端凭证中为客户端密钥）
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// 格式化为 `Authorization` 头的值
    pub fn to_header_value(&self) -> String {
        let plain = match &self.password {
            Some(password) => format!("{}:{}", self.user_id, password),
            None => self.user_id.clone(),
        };
        format!("Basic {}", STANDARD.encode(plain.as_bytes()))
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user_id", &self.user_id)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_basic() {
        let credentials = BasicCredentials::parse("Basic dXNlcjpwYXNz").unwrap().unwrap();
        assert_eq!(credentials.user_id(), "user");
        assert_eq!(credentials.password(), Some("pass"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let credentials = BasicCredentials::parse("bAsIc dXNlcjpwYXNz").unwrap();
        assert!(credentials.is_some());
    }

    #[test]
    fn test_not_basic() {
        assert!(BasicCredentials::parse("Bearer abc").unwrap().is_none());
        assert!(BasicCredentials::parse("Basic").unwrap().is_none());
        assert!(BasicCredentials::parse("").unwrap().is_none());
    }

    #[test]
    fn test_password_may_contain_colon() {
        let header = BasicCredentials::new("client", "se:cret").to_header_value();
        let credentials = BasicCredentials::parse(&header).unwrap().unwrap();
        assert_eq!(credentials.user_id(), "client");
        assert_eq!(credentials.password(), Some("se:cret"));
    }

    #[test]
    fn test_missing_colon() {
        // "client" 的 Base64
        let credentials = BasicCredentials::parse("Basic Y2xpZW50").unwrap().unwrap();
        assert_eq!(credentials.user_id(), "client");
        assert_eq!(credentials.password(), None);
        assert_eq!(credentials.to_header_value(), "Basic Y2xpZW50");
    }

    #[test]
    fn test_invalid_payload() {
        let err = BasicCredentials::parse("Basic !!!").unwrap_err();
        assert!(matches!(err, Error::Credentials(CredentialsError::InvalidBase64(_))));

        // 0xFF 0xFE 不是 UTF-8
        let err = BasicCredentials::parse("Basic //4=").unwrap_err();
        assert!(matches!(err, Error::Credentials(CredentialsError::InvalidUtf8)));
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", BasicCredentials::new("client", "secret"));
        assert!(debug.contains("client"));
        assert!(!debug.contains("secret"));
    }
}
