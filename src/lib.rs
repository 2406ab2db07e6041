//! # authlete-dto
//!
//! Authlete API 的 Rust 数据传输对象库。
//!
//! 本库只提供与 Authlete REST API 交换的请求/响应结构及其中出现的枚举，
//! 不包含 HTTP 传输，也不实现授权服务器的判定逻辑。
//!
//! ## 功能特性
//!
//! - **统一的数组约定**: 每个 DTO 都能展开为保持键顺序的映射，并从映射恢复
//! - **JSON 转换**: 建立在数组约定之上，支持 `to_json`/`from_json`
//! - **类型校验**: 读取时类型不符的字段会返回指明键名的错误
//! - **封闭枚举**: 每个变体都有显式的线上值，未知值不会被伪造
//! - **serde 集成**: 所有 DTO 与枚举都实现了 `Serialize`/`Deserialize`
//! - **连接配置**: 读取 `AUTHLETE_*` 环境变量
//!
//! ## Features
//!
//! - `backchannel` - CIBA 相关 DTO
//! - `device` - 设备授权流程 DTO
//! - `management` - 服务/客户端管理、动态注册、Grant Management、JOSE 校验 DTO
//! - `web` - `Authorization` 头解析工具
//! - `full` - 启用所有功能
//!
//! 默认启用所有 features。
//!
//! ## 令牌请求示例
//!
//! ```rust
//! use authlete_dto::{ApiResult, Jsonable};
//! use authlete_dto::dto::token::{TokenAction, TokenRequest, TokenResponse};
//!
//! // 把收到的令牌请求转交给 /auth/token
//! let request = TokenRequest::new()
//!     .with_parameters("grant_type=authorization_code&code=abc")
//!     .with_client_id("57297408867")
//!     .with_client_secret("secret");
//! let body = request.to_json();
//! assert!(body.starts_with(r#"{"parameters":"grant_type=authorization_code&code=abc""#));
//!
//! // 解析 /auth/token 的响应
//! let response = TokenResponse::from_json(
//!     r#"{"resultCode":"A050001","action":"OK","responseContent":"{}"}"#,
//! )
//! .unwrap();
//! assert_eq!(response.action(), Some(TokenAction::Ok));
//! assert_eq!(response.result_code(), Some("A050001"));
//! ```
//!
//! ## 未知枚举值
//!
//! ```rust
//! use authlete_dto::Jsonable;
//! use authlete_dto::dto::token::{TokenFailReason, TokenResponse};
//!
//! // 无法识别的 action 被视为未设置
//! let response = TokenResponse::from_json(r#"{"action":"SOMETHING_NEW"}"#).unwrap();
//! assert_eq!(response.action(), None);
//!
//! // 直接解析时返回错误
//! assert!("SOMETHING_NEW".parse::<TokenFailReason>().is_err());
//! assert_eq!(TokenFailReason::value_of("SOMETHING_NEW"), None);
//! ```
//!
//! ## 配置示例
//!
//! ```rust
//! use authlete_dto::config::AuthleteConfiguration;
//!
//! let config = AuthleteConfiguration::new()
//!     .with_service_credentials("api-key", "api-secret")
//!     .with_api_version("V2");
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod conv;
pub mod dto;
pub mod error;
pub mod types;

#[cfg(feature = "web")]
pub mod web;

pub use error::{Error, Result};

// ============================================================================
// 转换约定导出
// ============================================================================

pub use conv::{Array, Arrayable, Jsonable};

// ============================================================================
// DTO 相关导出
// ============================================================================

pub use config::AuthleteConfiguration;
pub use dto::{ApiResponse, ApiResult};

// ============================================================================
// 宏内部使用
// ============================================================================

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use serde;
    pub use serde_json;
    pub use tracing;
}
