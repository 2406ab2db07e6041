//! `Authorization` 头辅助工具
//!
//! 授权服务器把收到的 `Authorization` 头交给 Authlete API 之前，通常需要先
//! 解析出其中的凭证或令牌：
//!
//! - **Basic 凭证** ([`BasicCredentials`]): 客户端 ID 与密钥 (RFC 7617)
//! - **Bearer 令牌** ([`extract_bearer_token`]): RFC 6750
//! - **DPoP 令牌** ([`extract_dpop_token`]): RFC 9449
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::web::{BasicCredentials, extract_bearer_token};
//!
//! let credentials = BasicCredentials::parse("Basic Y2xpZW50OnNlY3JldA==")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(credentials.user_id(), "client");
//! assert_eq!(credentials.password(), Some("secret"));
//!
//! assert_eq!(extract_bearer_token("Bearer abc.def"), Some("abc.def"));
//! ```

mod credentials;
mod token;

pub use credentials::BasicCredentials;
pub use token::{extract_bearer_token, extract_dpop_token};
