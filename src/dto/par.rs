//! 推送授权请求 (RFC 9126, `/pushed_auth_req`)

use crate::{dto, wire_enum};

dto! {
    /// 推送授权请求
    pub struct PushedAuthReqRequest {
        /// 请求体的原始参数
        parameters: string => "parameters",
        client_id: string => "clientId",
        client_secret: string => "clientSecret",
        /// 双向 TLS 中客户端证书（PEM）
        client_certificate: string => "clientCertificate",
        /// 客户端证书链
        client_certificate_path: strings => "clientCertificatePath",
        /// `DPoP` 头的值
        dpop: string => "dpop",
        /// 请求的 HTTP 方法
        htm: string => "htm",
        /// 请求的 URL
        htu: string => "htu",
    }
}

wire_enum! {
    /// 推送授权响应后应采取的动作
    pub enum PushedAuthReqAction {
        /// 返回 201 Created
        Created => "CREATED",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        /// 返回 413 Payload Too Large
        PayloadTooLarge => "PAYLOAD_TOO_LARGE",
        InternalServerError => "INTERNAL_SERVER_ERROR",
    }
}

dto! {
    /// 推送授权响应
    pub struct PushedAuthReqResponse : ApiResponse {
        action: enumeration<PushedAuthReqAction> => "action",
        response_content: string => "responseContent",
        /// 在授权请求中使用的 `request_uri`
        request_uri: string => "requestUri",
    }
}
