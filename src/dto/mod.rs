//! Authlete API 的请求/响应 DTO
//!
//! 每个子模块对应一组远端端点，包含请求 DTO、响应 DTO 以及响应中出现的
//! action / reason / result 枚举：
//!
//! - **授权** (`authorization`): `/auth/authorization`、`/fail`、`/issue`
//! - **PAR** (`par`): `/pushed_auth_req`
//! - **令牌** (`token`): `/auth/token` 及其 `fail`/`issue`/`create`/`update`
//! - **内省** (`introspection`): `/auth/introspection` 与标准内省
//! - **撤销** (`revocation`): `/auth/revocation`
//! - **UserInfo** (`userinfo`): `/auth/userinfo` 与 `/issue`
//! - **服务/客户端** (`service`, `client`): 配置记录
//! - **CIBA** (`backchannel`, feature `backchannel`)
//! - **设备流程** (`device`, feature `device`)
//! - **管理 API** (`management`, `registration`, `grant`, `jose`, feature `management`)
//!
//! 响应 DTO 都以 [`ApiResponse`] 的两个字段开头，并实现 [`ApiResult`]。
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::conv::Jsonable;
//! use authlete_dto::dto::ApiResult;
//! use authlete_dto::dto::token::{TokenAction, TokenResponse};
//!
//! let json = r#"{
//!     "resultCode": "A050001",
//!     "resultMessage": "[A050001] The token request was processed successfully.",
//!     "action": "OK",
//!     "responseContent": "{\"access_token\":\"abc\"}",
//!     "accessTokenDuration": 3600
//! }"#;
//!
//! let response = TokenResponse::from_json(json).unwrap();
//! assert_eq!(response.action(), Some(TokenAction::Ok));
//! assert_eq!(response.result_code(), Some("A050001"));
//! assert_eq!(response.access_token_duration(), 3600);
//! assert_eq!(response.to_api_response().result_code(), Some("A050001"));
//! ```

pub mod authorization;
pub mod client;
pub mod common;
pub mod introspection;
pub mod par;
pub mod revocation;
pub mod service;
pub mod token;
pub mod userinfo;

#[cfg(feature = "backchannel")]
pub mod backchannel;

#[cfg(feature = "device")]
pub mod device;

#[cfg(feature = "management")]
pub mod grant;
#[cfg(feature = "management")]
pub mod jose;
#[cfg(feature = "management")]
pub mod management;
#[cfg(feature = "management")]
pub mod registration;

// ============================================================================
// 公共类型导出
// ============================================================================

pub use client::{Client, ClientExtension};
pub use common::{ApiResponse, DynamicScope, NamedUri, Pair, Property, Scope, SnsCredentials, TaggedValue};
pub use service::Service;

// ============================================================================
// ApiResult
// ============================================================================

/// 所有 API 响应共有的结果信息
///
/// 由 `dto!` 宏的 `: ApiResponse` 形式自动实现。
pub trait ApiResult {
    /// 结果代码，例如 `A004001`
    fn result_code(&self) -> Option<&str>;

    /// 结果消息
    fn result_message(&self) -> Option<&str>;

    /// 只保留结果信息的 [`ApiResponse`] 副本
    fn to_api_response(&self) -> ApiResponse {
        let mut response = ApiResponse::new();
        response
            .set_result_code(self.result_code().map(str::to_string))
            .set_result_message(self.result_message().map(str::to_string));
        response
    }
}

impl ApiResult for ApiResponse {
    fn result_code(&self) -> Option<&str> {
        ApiResponse::result_code(self)
    }

    fn result_message(&self) -> Option<&str> {
        ApiResponse::result_message(self)
    }
}
