//! 跨端点共享的代码集合
//!
//! 服务与客户端配置、授权请求解析结果中都会出现的标准 OAuth 2.0 / OpenID
//! Connect 代码集合。线上值一律采用 Authlete API 使用的大写名称
//! （例如 `"AUTHORIZATION_CODE"`、`"CLIENT_SECRET_BASIC"`）；对应的标准参数值
//! 可以通过各类型的辅助方法获取。
//!
//! ```rust
//! use authlete_dto::types::{GrantType, ResponseType};
//!
//! assert_eq!(GrantType::AuthorizationCode.wire_value(), "AUTHORIZATION_CODE");
//! assert_eq!(GrantType::AuthorizationCode.parameter_value(), "authorization_code");
//!
//! let rt = ResponseType::from_parameter_value("id_token code").unwrap();
//! assert_eq!(rt, ResponseType::CodeIdToken);
//! ```

mod client;
mod flow;
mod jose;
mod service;

pub use client::{ApplicationType, ClientAuthMethod, ClientType, SubjectType};
pub use flow::{ClaimType, DeliveryMode, Display, GrantType, Prompt, ResponseType, UserCodeCharset};
pub use jose::{JweAlg, JweEnc, JwsAlg};
pub use service::{ServiceProfile, Sns};
