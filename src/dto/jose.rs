//! JOSE 校验 (`/jose/verify`)

use crate::dto;

dto! {
    /// JOSE 校验请求
    pub struct JoseVerifyRequest {
        /// 待校验的 JWS/JWE
        jose: string => "jose",
        /// 必须包含的声明
        mandatory_claims: strings => "mandatoryClaims",
        /// 允许的时钟偏差（秒）
        clock_skew: int => "clockSkew",
        /// 用于查找验证密钥的客户端标识
        client_identifier: string => "clientIdentifier",
        /// 是否由客户端签名
        signed_by_client: bool => "signedByClient",
    }
}

dto! {
    /// JOSE 校验响应
    pub struct JoseVerifyResponse : ApiResponse {
        valid: bool => "valid",
        signature_valid: bool => "signatureValid",
        missing_claims: strings => "missingClaims",
        invalid_claims: strings => "invalidClaims",
        error_descriptions: strings => "errorDescriptions",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::Jsonable;

    #[test]
    fn test_verify_response() {
        let response = JoseVerifyResponse::from_json(
            r#"{"valid":false,"signatureValid":true,"missingClaims":["exp"],"errorDescriptions":["exp is missing"]}"#,
        )
        .unwrap();

        assert!(!response.valid());
        assert!(response.signature_valid());
        assert_eq!(response.missing_claims(), Some(&["exp".to_string()][..]));
        assert!(response.invalid_claims().is_none());
    }

    #[test]
    fn test_verify_request_clock_skew_type() {
        let err = JoseVerifyRequest::from_json(r#"{"clockSkew":1.5}"#).unwrap_err();
        assert_eq!(err.key(), Some("clockSkew"));
    }
}
