//! 设备授权流程 (RFC 8628)
//!
//! - `/device/authorization`: 设备授权端点
//! - `/device/verification`: 校验用户输入的用户码
//! - `/device/complete`: 报告用户的授权结果

use chrono::{DateTime, Utc};

use crate::conv::time::millis_to_datetime;
use crate::dto::common::{Property, Scope};
use crate::{dto, wire_enum};

// ============================================================================
// /device/authorization
// ============================================================================

dto! {
    /// 设备授权请求
    pub struct DeviceAuthorizationRequest {
        parameters: string => "parameters",
        client_id: string => "clientId",
        client_secret: string => "clientSecret",
        client_certificate: string => "clientCertificate",
        client_certificate_path: strings => "clientCertificatePath",
    }
}

wire_enum! {
    /// 设备授权响应后应采取的动作
    pub enum DeviceAuthorizationAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Ok => "OK",
    }
}

dto! {
    /// 设备授权响应
    pub struct DeviceAuthorizationResponse : ApiResponse {
        action: enumeration<DeviceAuthorizationAction> => "action",
        response_content: string => "responseContent",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        client_name: string => "clientName",
        scopes: objects<Scope> => "scopes",
        claim_names: strings => "claimNames",
        acrs: strings => "acrs",
        device_code: string => "deviceCode",
        /// 展示给用户的用户码
        user_code: string => "userCode",
        verification_uri: string => "verificationUri",
        verification_uri_complete: string => "verificationUriComplete",
        /// 设备码有效期（秒）
        expires_in: int => "expiresIn",
        /// 轮询间隔（秒）
        interval: int => "interval",
        warnings: strings => "warnings",
        resources: strings => "resources",
    }
}

// ============================================================================
// /device/verification
// ============================================================================

dto! {
    /// 用户码校验请求
    pub struct DeviceVerificationRequest {
        user_code: string => "userCode",
    }
}

wire_enum! {
    /// 用户码校验响应后应采取的动作
    pub enum DeviceVerificationAction {
        ServerError => "SERVER_ERROR",
        /// 用户码不存在
        NotExist => "NOT_EXIST",
        /// 用户码已过期
        Expired => "EXPIRED",
        /// 用户码有效，需要认证用户并取得同意
        Valid => "VALID",
    }
}

dto! {
    /// 用户码校验响应
    pub struct DeviceVerificationResponse : ApiResponse {
        action: enumeration<DeviceVerificationAction> => "action",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        client_name: string => "clientName",
        scopes: objects<Scope> => "scopes",
        claim_names: strings => "claimNames",
        acrs: strings => "acrs",
        /// 用户码过期时间（毫秒时间戳）
        expires_at: int => "expiresAt",
        resources: strings => "resources",
    }
}

impl DeviceVerificationResponse {
    /// 用户码过期时间
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.expires_at)
    }
}

// ============================================================================
// /device/complete
// ============================================================================

wire_enum! {
    /// 用户对设备授权请求的处理结果
    pub enum DeviceCompleteResult {
        Authorized => "AUTHORIZED",
        AccessDenied => "ACCESS_DENIED",
        TransactionFailed => "TRANSACTION_FAILED",
    }
}

dto! {
    /// 设备授权完成请求
    pub struct DeviceCompleteRequest {
        user_code: string => "userCode",
        result: enumeration<DeviceCompleteResult> => "result",
        subject: string => "subject",
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
    /// 设备授权完成响应后应采取的动作
    pub enum DeviceCompleteAction {
        Success => "SUCCESS",
        InvalidRequest => "INVALID_REQUEST",
        UserCodeExpired => "USER_CODE_EXPIRED",
        UserCodeNotExist => "USER_CODE_NOT_EXIST",
        ServerError => "SERVER_ERROR",
    }
}

dto! {
    /// 设备授权完成响应
    pub struct DeviceCompleteResponse : ApiResponse {
        action: enumeration<DeviceCompleteAction> => "action",
    }
}
