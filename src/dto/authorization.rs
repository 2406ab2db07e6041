//! 授权端点 (`/auth/authorization`)
//!
//! 授权服务器收到授权请求后，将原始参数转交 `/auth/authorization`；根据响应的
//! [`AuthorizationAction`]，或直接向用户代理返回错误，或与用户交互后调用
//! `/auth/authorization/issue` 或 `/auth/authorization/fail`。
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::conv::Jsonable;
//! use authlete_dto::dto::authorization::{AuthorizationFailReason, AuthorizationFailRequest};
//!
//! let request = AuthorizationFailRequest::new()
//!     .with_ticket("ticket-1")
//!     .with_reason(AuthorizationFailReason::ConsentDenied);
//!
//! assert_eq!(
//!     request.to_json(),
//!     r#"{"ticket":"ticket-1","reason":"CONSENT_DENIED","description":null}"#
//! );
//! ```

use crate::dto::client::Client;
use crate::dto::common::{DynamicScope, Property, Scope};
use crate::dto::service::Service;
use crate::types::{Display, Prompt};
use crate::{dto, wire_enum};

// ============================================================================
// /auth/authorization
// ============================================================================

dto! {
    /// 授权请求
    pub struct AuthorizationRequest {
        /// 授权请求的原始参数（`application/x-www-form-urlencoded` 格式）
        parameters: string => "parameters",
        /// 任意上下文，原样出现在后续响应中
        context: string => "context",
    }
}

wire_enum! {
    /// 授权服务器收到授权响应后应采取的动作
    pub enum AuthorizationAction {
        /// 内部错误，返回 500 Internal Server Error
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// 请求有误且无法重定向，返回 400 Bad Request
        BadRequest => "BAD_REQUEST",
        /// 以 302 Found 重定向到 `responseContent` 中的位置
        Location => "LOCATION",
        /// 返回 200 OK，`responseContent` 为自动提交的 HTML 表单
        Form => "FORM",
        /// 不需要用户交互，直接调用 issue/fail API
        NoInteraction => "NO_INTERACTION",
        /// 需要认证用户并取得同意
        Interaction => "INTERACTION",
    }
}

dto! {
    /// 授权响应
    pub struct AuthorizationResponse : ApiResponse {
        action: enumeration<AuthorizationAction> => "action",
        /// 发起请求的客户端
        client: object<Client> => "client",
        display: enumeration<Display> => "display",
        /// `max_age` 请求参数
        max_age: int => "maxAge",
        service: object<Service> => "service",
        /// 请求的权限范围
        scopes: objects<Scope> => "scopes",
        dynamic_scopes: objects<DynamicScope> => "dynamicScopes",
        ui_locales: strings => "uiLocales",
        claims_locales: strings => "claimsLocales",
        /// 需要放入 ID Token 的声明名称
        claims: strings => "claims",
        acrs: strings => "acrs",
        acr_essential: bool => "acrEssential",
        client_id_alias_used: bool => "clientIdAliasUsed",
        subject: string => "subject",
        login_hint: string => "loginHint",
        prompts: enums<Prompt> => "prompts",
        lowest_prompt: enumeration<Prompt> => "lowestPrompt",
        request_object_payload: string => "requestObjectPayload",
        id_token_claims: string => "idTokenClaims",
        user_info_claims: string => "userInfoClaims",
        resources: strings => "resources",
        purpose: string => "purpose",
        response_content: string => "responseContent",
        /// 调用 issue/fail API 时需要的票据
        ticket: string => "ticket",
    }
}

impl AuthorizationResponse {
    /// 请求的权限范围名称
    pub fn scope_names(&self) -> Vec<&str> {
        self.scopes
            .iter()
            .flatten()
            .filter_map(Scope::name)
            .collect()
    }

    /// 是否包含指定的 `prompt` 值
    pub fn has_prompt(&self, prompt: Prompt) -> bool {
        self.prompts
            .as_deref()
            .is_some_and(|prompts| prompts.contains(&prompt))
    }
}

// ============================================================================
// /auth/authorization/fail
// ============================================================================

wire_enum! {
    /// 授权失败的原因
    pub enum AuthorizationFailReason {
        Unknown => "UNKNOWN",
        /// 用户未登录，且 `prompt=none`
        NotLoggedIn => "NOT_LOGGED_IN",
        MaxAgeNotSupported => "MAX_AGE_NOT_SUPPORTED",
        /// 距上次认证超过 `max_age`
        ExceedsMaxAge => "EXCEEDS_MAX_AGE",
        /// 当前用户与请求的 `sub` 不同
        DifferentSubject => "DIFFERENT_SUBJECT",
        AcrNotSatisfied => "ACR_NOT_SATISFIED",
        /// 用户拒绝授权
        ConsentDenied => "CONSENT_DENIED",
        ServerError => "SERVER_ERROR",
        NotAuthenticated => "NOT_AUTHENTICATED",
        AccountSelectionRequired => "ACCOUNT_SELECTION_REQUIRED",
        ConsentRequired => "CONSENT_REQUIRED",
        InteractionRequired => "INTERACTION_REQUIRED",
        /// 请求的资源无效 (RFC 8707)
        InvalidTarget => "INVALID_TARGET",
    }
}

dto! {
    /// 授权失败请求
    pub struct AuthorizationFailRequest {
        ticket: string => "ticket",
        reason: enumeration<AuthorizationFailReason> => "reason",
        /// 覆盖默认 `error_description` 的文本
        description: string => "description",
    }
}

wire_enum! {
    /// 授权失败响应后应采取的动作
    pub enum AuthorizationFailAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Location => "LOCATION",
        Form => "FORM",
    }
}

dto! {
    /// 授权失败响应
    pub struct AuthorizationFailResponse : ApiResponse {
        action: enumeration<AuthorizationFailAction> => "action",
        response_content: string => "responseContent",
    }
}

// ============================================================================
// /auth/authorization/issue
// ============================================================================

dto! {
    /// 授权签发请求
    pub struct AuthorizationIssueRequest {
        ticket: string => "ticket",
        /// 已认证用户的主体标识
        subject: string => "subject",
        /// 覆盖 ID Token 中 `sub` 的值
        sub: string => "sub",
        /// 用户认证时间（自 epoch 起的秒数）
        auth_time: int => "authTime",
        acr: string => "acr",
        /// ID Token 声明（JSON 文本）
        claims: string => "claims",
        properties: objects<Property> => "properties",
        /// 替换请求中的权限范围
        scopes: strings => "scopes",
        idt_header_params: string => "idtHeaderParams",
        consented_claims: strings => "consentedClaims",
    }
}

wire_enum! {
    /// 授权签发响应后应采取的动作
    pub enum AuthorizationIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Location => "LOCATION",
        Form => "FORM",
    }
}

dto! {
    /// 授权签发响应
    pub struct AuthorizationIssueResponse : ApiResponse {
        action: enumeration<AuthorizationIssueAction> => "action",
        response_content: string => "responseContent",
        access_token: string => "accessToken",
        access_token_expires_at: int => "accessTokenExpiresAt",
        access_token_duration: int => "accessTokenDuration",
        id_token: string => "idToken",
        authorization_code: string => "authorizationCode",
        jwt_access_token: string => "jwtAccessToken",
    }
}
