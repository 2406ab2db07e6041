//! 令牌撤销 (RFC 7009, `/auth/revocation`)

use crate::{dto, wire_enum};

dto! {
    /// 撤销请求
    pub struct RevocationRequest {
        parameters: string => "parameters",
        client_id: string => "clientId",
        client_secret: string => "clientSecret",
        client_certificate: string => "clientCertificate",
        client_certificate_path: strings => "clientCertificatePath",
    }
}

wire_enum! {
    /// 撤销响应后应采取的动作
    pub enum RevocationAction {
        InvalidClient => "INVALID_CLIENT",
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Ok => "OK",
    }
}

dto! {
    /// 撤销响应
    pub struct RevocationResponse : ApiResponse {
        action: enumeration<RevocationAction> => "action",
        response_content: string => "responseContent",
    }
}
