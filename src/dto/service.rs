//! 服务配置记录
//!
//! 一个服务对应一个授权服务器实例。[`Service`] 出现在授权响应中，也是服务
//! 管理 API 的主体。

use crate::dto;
use crate::dto::common::{NamedUri, Pair, Scope, SnsCredentials};
use crate::types::{
    ClaimType, ClientAuthMethod, DeliveryMode, Display, GrantType, JwsAlg, ResponseType,
    ServiceProfile, Sns, UserCodeCharset,
};

dto! {
    /// 服务配置
    pub struct Service {
        // 基本信息
        number: int => "number",
        service_owner_number: int => "serviceOwnerNumber",
        service_name: string => "serviceName",
        issuer: string => "issuer",
        description: string => "description",
        api_key: int => "apiKey",
        api_secret: string => "apiSecret",
        clients_per_developer: int => "clientsPerDeveloper",
        client_id_alias_enabled: bool => "clientIdAliasEnabled",
        metadata: objects<Pair> => "metadata",
        created_at: int => "createdAt",
        modified_at: int => "modifiedAt",
        supported_service_profiles: enums<ServiceProfile> => "supportedServiceProfiles",
        error_description_omitted: bool => "errorDescriptionOmitted",
        error_uri_omitted: bool => "errorUriOmitted",

        // 认证回调与社交登录
        authentication_callback_endpoint: string => "authenticationCallbackEndpoint",
        authentication_callback_api_key: string => "authenticationCallbackApiKey",
        authentication_callback_api_secret: string => "authenticationCallbackApiSecret",
        supported_snses: enums<Sns> => "supportedSnses",
        sns_credentials: objects<SnsCredentials> => "snsCredentials",
        supported_acrs: strings => "supportedAcrs",

        // 授权端点
        authorization_endpoint: string => "authorizationEndpoint",
        direct_authorization_endpoint_enabled: bool => "directAuthorizationEndpointEnabled",
        supported_ui_locales: strings => "supportedUiLocales",
        supported_displays: enums<Display> => "supportedDisplays",
        supported_grant_types: enums<GrantType> => "supportedGrantTypes",
        supported_response_types: enums<ResponseType> => "supportedResponseTypes",
        supported_authorization_details_types: strings => "supportedAuthorizationDetailsTypes",
        pkce_required: bool => "pkceRequired",
        pkce_s256_required: bool => "pkceS256Required",
        authorization_response_duration: int => "authorizationResponseDuration",
        authorization_signature_key_id: string => "authorizationSignatureKeyId",

        // PAR
        pushed_auth_req_endpoint: string => "pushedAuthReqEndpoint",
        pushed_auth_req_duration: int => "pushedAuthReqDuration",
        par_required: bool => "parRequired",
        request_object_required: bool => "requestObjectRequired",
        traditional_request_object_processing_applied: bool => "traditionalRequestObjectProcessingApplied",

        // 令牌端点
        token_endpoint: string => "tokenEndpoint",
        direct_token_endpoint_enabled: bool => "directTokenEndpointEnabled",
        supported_token_auth_methods: enums<ClientAuthMethod> => "supportedTokenAuthMethods",
        missing_client_id_allowed: bool => "missingClientIdAllowed",
        mutual_tls_validate_pki_cert_chain: bool => "mutualTlsValidatePkiCertChain",
        trusted_root_certificates: strings => "trustedRootCertificates",
        mtls_endpoint_aliases: objects<NamedUri> => "mtlsEndpointAliases",
        tls_client_certificate_bound_access_tokens: bool => "tlsClientCertificateBoundAccessTokens",

        // 撤销与内省
        revocation_endpoint: string => "revocationEndpoint",
        direct_revocation_endpoint_enabled: bool => "directRevocationEndpointEnabled",
        supported_revocation_auth_methods: enums<ClientAuthMethod> => "supportedRevocationAuthMethods",
        introspection_endpoint: string => "introspectionEndpoint",
        direct_introspection_endpoint_enabled: bool => "directIntrospectionEndpointEnabled",
        supported_introspection_auth_methods: enums<ClientAuthMethod> => "supportedIntrospectionAuthMethods",

        // 令牌
        access_token_type: string => "accessTokenType",
        /// 访问令牌有效期（秒）
        access_token_duration: int => "accessTokenDuration",
        single_access_token_per_subject: bool => "singleAccessTokenPerSubject",
        access_token_sign_alg: enumeration<JwsAlg> => "accessTokenSignAlg",
        access_token_signature_key_id: string => "accessTokenSignatureKeyId",
        /// 刷新令牌有效期（秒）
        refresh_token_duration: int => "refreshTokenDuration",
        refresh_token_duration_kept: bool => "refreshTokenDurationKept",
        refresh_token_kept: bool => "refreshTokenKept",
        id_token_duration: int => "idTokenDuration",
        id_token_signature_key_id: string => "idTokenSignatureKeyId",
        allowable_clock_skew: int => "allowableClockSkew",

        // 权限范围与声明
        supported_scopes: objects<Scope> => "supportedScopes",
        scope_required: bool => "scopeRequired",
        supported_claim_types: enums<ClaimType> => "supportedClaimTypes",
        supported_claim_locales: strings => "supportedClaimLocales",
        supported_claims: strings => "supportedClaims",
        claim_shortcut_restrictive: bool => "claimShortcutRestrictive",

        // JWK Set 与 UserInfo
        jwks_uri: string => "jwksUri",
        direct_jwks_endpoint_enabled: bool => "directJwksEndpointEnabled",
        jwks: string => "jwks",
        user_info_endpoint: string => "userInfoEndpoint",
        direct_user_info_endpoint_enabled: bool => "directUserInfoEndpointEnabled",
        user_info_signature_key_id: string => "userInfoSignatureKeyId",

        // 动态客户端注册
        dynamic_registration_supported: bool => "dynamicRegistrationSupported",
        registration_endpoint: string => "registrationEndpoint",
        registration_management_endpoint: string => "registrationManagementEndpoint",
        dcr_scope_used_as_requestable: bool => "dcrScopeUsedAsRequestable",

        policy_uri: string => "policyUri",
        tos_uri: string => "tosUri",
        service_documentation: string => "serviceDocumentation",
        end_session_endpoint: string => "endSessionEndpoint",

        // CIBA
        backchannel_authentication_endpoint: string => "backchannelAuthenticationEndpoint",
        supported_backchannel_token_delivery_modes: enums<DeliveryMode> => "supportedBackchannelTokenDeliveryModes",
        backchannel_auth_req_id_duration: int => "backchannelAuthReqIdDuration",
        backchannel_polling_interval: int => "backchannelPollingInterval",
        backchannel_user_code_parameter_supported: bool => "backchannelUserCodeParameterSupported",
        backchannel_binding_message_required_in_fapi: bool => "backchannelBindingMessageRequiredInFapi",

        // 设备流程
        device_authorization_endpoint: string => "deviceAuthorizationEndpoint",
        device_verification_uri: string => "deviceVerificationUri",
        device_verification_uri_complete: string => "deviceVerificationUriComplete",
        device_flow_code_duration: int => "deviceFlowCodeDuration",
        device_flow_polling_interval: int => "deviceFlowPollingInterval",
        user_code_charset: enumeration<UserCodeCharset> => "userCodeCharset",
        user_code_length: int => "userCodeLength",

        // Grant Management
        grant_management_endpoint: string => "grantManagementEndpoint",
        grant_management_action_required: bool => "grantManagementActionRequired",

        attributes: objects<Pair> => "attributes",
    }
}

impl Service {
    /// 是否支持指定的授权类型
    pub fn supports_grant_type(&self, grant_type: GrantType) -> bool {
        self.supported_grant_types
            .as_deref()
            .is_some_and(|types| types.contains(&grant_type))
    }

    /// 是否启用了指定的配置文件
    pub fn supports_profile(&self, profile: ServiceProfile) -> bool {
        self.supported_service_profiles
            .as_deref()
            .is_some_and(|profiles| profiles.contains(&profile))
    }

    /// 按名称查找支持的权限范围
    pub fn find_scope(&self, name: &str) -> Option<&Scope> {
        self.supported_scopes
            .iter()
            .flatten()
            .find(|s| s.name() == Some(name))
    }

    /// 按别名查找 mTLS 端点
    pub fn mtls_endpoint_alias(&self, name: &str) -> Option<&str> {
        self.mtls_endpoint_aliases
            .iter()
            .flatten()
            .find(|alias| alias.name() == Some(name))
            .and_then(NamedUri::uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::{Arrayable, Jsonable};
    use serde_json::json;

    #[test]
    fn test_service_lookups() {
        let service = Service::new()
            .with_service_name("Example")
            .with_supported_grant_types(vec![GrantType::AuthorizationCode, GrantType::Ciba])
            .with_supported_service_profiles(vec![ServiceProfile::Fapi])
            .with_supported_scopes(vec![Scope::of("openid"), Scope::of("payment")])
            .with_mtls_endpoint_aliases(vec![
                NamedUri::new()
                    .with_name("token_endpoint")
                    .with_uri("https://mtls.example.com/token"),
            ]);

        assert!(service.supports_grant_type(GrantType::Ciba));
        assert!(!service.supports_grant_type(GrantType::Password));
        assert!(service.supports_profile(ServiceProfile::Fapi));
        assert!(service.find_scope("payment").is_some());
        assert!(service.find_scope("email").is_none());
        assert_eq!(
            service.mtls_endpoint_alias("token_endpoint"),
            Some("https://mtls.example.com/token")
        );
    }

    #[test]
    fn test_service_from_partial_json() {
        let service = Service::from_json(
            r#"{"number":5,"serviceName":"svc","supportedDisplays":["PAGE","POPUP"],"userCodeCharset":"BASE20"}"#,
        )
        .unwrap();

        assert_eq!(service.number(), 5);
        assert_eq!(service.supported_displays(), Some(&[Display::Page, Display::Popup][..]));
        assert_eq!(service.user_code_charset(), Some(UserCodeCharset::Base20));
        assert!(service.supported_scopes().is_none());
        assert!(!service.pkce_required());
    }

    #[test]
    fn test_service_wrong_type_names_key() {
        let err = Service::from_json(r#"{"pkceRequired":"yes"}"#).unwrap_err();
        assert_eq!(err.key(), Some("pkceRequired"));
    }

    #[test]
    fn test_service_roundtrip_with_sns() {
        let service = Service::new()
            .with_supported_snses(vec![Sns::Facebook])
            .with_sns_credentials(vec![
                SnsCredentials::new()
                    .with_sns(Sns::Facebook)
                    .with_api_key("key"),
            ]);

        let array = service.to_array();
        assert_eq!(array["snsCredentials"][0]["sns"], json!("FACEBOOK"));
        assert_eq!(Service::from_array(&array).unwrap(), service);
    }
}
