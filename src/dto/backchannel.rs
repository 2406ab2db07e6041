//! Client Initiated Backchannel Authentication (CIBA)
//!
//! `/backchannel/authentication` 处理后端认证请求；授权服务器识别用户后调用
//! `issue` 取得 `auth_req_id`，或调用 `fail` 拒绝请求；用户在认证设备上完成
//! 操作后调用 `complete`。
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::conv::Arrayable;
//! use authlete_dto::dto::backchannel::{
//!     BackchannelAuthenticationCompleteRequest, BackchannelAuthenticationCompleteResult,
//! };
//!
//! let request = BackchannelAuthenticationCompleteRequest::new()
//!     .with_ticket("tk")
//!     .with_result(BackchannelAuthenticationCompleteResult::Authorized)
//!     .with_subject("user-1");
//!
//! assert_eq!(request.to_array()["result"], "AUTHORIZED");
//! ```

use crate::dto::common::{Property, Scope};
use crate::types::DeliveryMode;
use crate::{dto, wire_enum};

// ============================================================================
// /backchannel/authentication
// ============================================================================

dto! {
    /// 后端认证请求
    pub struct BackchannelAuthenticationRequest {
        parameters: string => "parameters",
        client_id: string => "clientId",
        client_secret: string => "clientSecret",
        client_certificate: string => "clientCertificate",
        client_certificate_path: strings => "clientCertificatePath",
    }
}

wire_enum! {
    /// 后端认证响应后应采取的动作
    pub enum BackchannelAuthenticationAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        Unauthorized => "UNAUTHORIZED",
        BadRequest => "BAD_REQUEST",
        /// 请求有效，需要根据提示识别用户
        UserIdentification => "USER_IDENTIFICATION",
    }
}

wire_enum! {
    /// 用户识别提示的类型
    pub enum UserIdentificationHintType {
        /// `id_token_hint`
        IdToken => "ID_TOKEN",
        /// `login_hint`
        LoginHint => "LOGIN_HINT",
        /// `login_hint_token`
        LoginHintToken => "LOGIN_HINT_TOKEN",
    }
}

dto! {
    /// 后端认证响应
    pub struct BackchannelAuthenticationResponse : ApiResponse {
        action: enumeration<BackchannelAuthenticationAction> => "action",
        response_content: string => "responseContent",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        client_name: string => "clientName",
        delivery_mode: enumeration<DeliveryMode> => "deliveryMode",
        scopes: objects<Scope> => "scopes",
        claim_names: strings => "claimNames",
        client_notification_token: string => "clientNotificationToken",
        acrs: strings => "acrs",
        hint_type: enumeration<UserIdentificationHintType> => "hintType",
        /// 提示的值，含义取决于 `hintType`
        hint: string => "hint",
        /// `id_token_hint` 中的 `sub`
        sub: string => "sub",
        binding_message: string => "bindingMessage",
        user_code: string => "userCode",
        user_code_required: bool => "userCodeRequired",
        /// 客户端请求的有效期（秒）
        requested_expiry: int => "requestedExpiry",
        request_context: string => "requestContext",
        warnings: strings => "warnings",
        resources: strings => "resources",
        ticket: string => "ticket",
    }
}

// ============================================================================
// /backchannel/authentication/fail
// ============================================================================

wire_enum! {
    /// 后端认证失败的原因
    pub enum BackchannelAuthenticationFailReason {
        AccessDenied => "ACCESS_DENIED",
        ExpiredLoginHintToken => "EXPIRED_LOGIN_HINT_TOKEN",
        InvalidBindingMessage => "INVALID_BINDING_MESSAGE",
        InvalidTarget => "INVALID_TARGET",
        InvalidUserCode => "INVALID_USER_CODE",
        MissingUserCode => "MISSING_USER_CODE",
        ServerError => "SERVER_ERROR",
        UnauthorizedClient => "UNAUTHORIZED_CLIENT",
        UnknownUserId => "UNKNOWN_USER_ID",
    }
}

dto! {
    /// 后端认证失败请求
    pub struct BackchannelAuthenticationFailRequest {
        ticket: string => "ticket",
        reason: enumeration<BackchannelAuthenticationFailReason> => "reason",
        error_description: string => "errorDescription",
        error_uri: string => "errorUri",
    }
}

wire_enum! {
    /// 后端认证失败响应后应采取的动作
    pub enum BackchannelAuthenticationFailAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        Forbidden => "FORBIDDEN",
        BadRequest => "BAD_REQUEST",
    }
}

dto! {
    /// 后端认证失败响应
    pub struct BackchannelAuthenticationFailResponse : ApiResponse {
        action: enumeration<BackchannelAuthenticationFailAction> => "action",
        response_content: string => "responseContent",
    }
}

// ============================================================================
// /backchannel/authentication/issue
// ============================================================================

dto! {
    /// 后端认证签发请求
    pub struct BackchannelAuthenticationIssueRequest {
        ticket: string => "ticket",
    }
}

wire_enum! {
    /// 后端认证签发响应后应采取的动作
    pub enum BackchannelAuthenticationIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// 票据无效或已过期
        InvalidTicket => "INVALID_TICKET",
        Ok => "OK",
    }
}

dto! {
    /// 后端认证签发响应
    pub struct BackchannelAuthenticationIssueResponse : ApiResponse {
        action: enumeration<BackchannelAuthenticationIssueAction> => "action",
        response_content: string => "responseContent",
        auth_req_id: string => "authReqId",
        /// `auth_req_id` 的有效期（秒）
        expires_in: int => "expiresIn",
        /// 轮询间隔（秒）
        interval: int => "interval",
    }
}

// ============================================================================
// /backchannel/authentication/complete
// ============================================================================

wire_enum! {
    /// 终端用户在认证设备上的操作结果
    pub enum BackchannelAuthenticationCompleteResult {
        Authorized => "AUTHORIZED",
        AccessDenied => "ACCESS_DENIED",
        TransactionFailed => "TRANSACTION_FAILED",
    }
}

dto! {
    /// 后端认证完成请求
    pub struct BackchannelAuthenticationCompleteRequest {
        ticket: string => "ticket",
        result: enumeration<BackchannelAuthenticationCompleteResult> => "result",
        subject: string => "subject",
        /// 用户认证时间（自 epoch 起的秒数）
        auth_time: int => "authTime",
        acr: string => "acr",
        claims: string => "claims",
        properties: objects<Property> => "properties",
        scopes: strings => "scopes",
        idt_header_params: string => "idtHeaderParams",
        error_description: string => "errorDescription",
        error_uri: string => "errorUri",
    }
}

wire_enum! {
    /// 后端认证完成响应后应采取的动作
    pub enum BackchannelAuthenticationCompleteAction {
        ServerError => "SERVER_ERROR",
        /// 轮询模式，无需通知客户端
        NoAction => "NO_ACTION",
        /// 需要向客户端通知端点发送 `responseContent`
        Notification => "NOTIFICATION",
    }
}

dto! {
    /// 后端认证完成响应
    pub struct BackchannelAuthenticationCompleteResponse : ApiResponse {
        action: enumeration<BackchannelAuthenticationCompleteAction> => "action",
        response_content: string => "responseContent",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        client_name: string => "clientName",
        delivery_mode: enumeration<DeliveryMode> => "deliveryMode",
        client_notification_endpoint: string => "clientNotificationEndpoint",
        client_notification_token: string => "clientNotificationToken",
        auth_req_id: string => "authReqId",
        access_token: string => "accessToken",
        refresh_token: string => "refreshToken",
        id_token: string => "idToken",
        access_token_duration: int => "accessTokenDuration",
        refresh_token_duration: int => "refreshTokenDuration",
        id_token_duration: int => "idTokenDuration",
        jwt_access_token: string => "jwtAccessToken",
        resources: strings => "resources",
    }
}
