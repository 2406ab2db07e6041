//! 客户端配置记录
//!
//! [`Client`] 既出现在授权响应中（发起请求的客户端），也是客户端管理 API 与
//! 动态客户端注册 API 的主体。

use chrono::{DateTime, Utc};

use crate::conv::time::millis_to_datetime;
use crate::dto;
use crate::dto::common::{Pair, TaggedValue};
use crate::types::{
    ApplicationType, ClientAuthMethod, ClientType, DeliveryMode, GrantType, JweAlg, JweEnc,
    JwsAlg, ResponseType, SubjectType,
};

dto! {
    /// 客户端的扩展设置
    pub struct ClientExtension {
        /// 客户端可以请求的权限范围
        requestable_scopes: strings => "requestableScopes",
        /// `requestableScopes` 是否生效
        requestable_scopes_enabled: bool => "requestableScopesEnabled",
        /// 覆盖服务设置的访问令牌有效期（秒），`0` 表示不覆盖
        access_token_duration: int => "accessTokenDuration",
        /// 覆盖服务设置的刷新令牌有效期（秒），`0` 表示不覆盖
        refresh_token_duration: int => "refreshTokenDuration",
        /// 是否允许令牌交换
        token_exchange_permitted: bool => "tokenExchangePermitted",
    }
}

dto! {
    /// 客户端配置
    pub struct Client {
        // 基本信息
        number: int => "number",
        service_number: int => "serviceNumber",
        developer: string => "developer",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_enabled: bool => "clientIdAliasEnabled",
        client_secret: string => "clientSecret",
        client_type: enumeration<ClientType> => "clientType",
        application_type: enumeration<ApplicationType> => "applicationType",
        client_name: string => "clientName",
        client_names: objects<TaggedValue> => "clientNames",
        description: string => "description",
        descriptions: objects<TaggedValue> => "descriptions",
        logo_uri: string => "logoUri",
        logo_uris: objects<TaggedValue> => "logoUris",
        client_uri: string => "clientUri",
        client_uris: objects<TaggedValue> => "clientUris",
        policy_uri: string => "policyUri",
        policy_uris: objects<TaggedValue> => "policyUris",
        tos_uri: string => "tosUri",
        tos_uris: objects<TaggedValue> => "tosUris",
        contacts: strings => "contacts",
        software_id: string => "softwareId",
        software_version: string => "softwareVersion",
        dynamically_registered: bool => "dynamicallyRegistered",
        /// 创建时间（毫秒时间戳）
        created_at: int => "createdAt",
        /// 更新时间（毫秒时间戳）
        modified_at: int => "modifiedAt",

        // 授权
        redirect_uris: strings => "redirectUris",
        response_types: enums<ResponseType> => "responseTypes",
        grant_types: enums<GrantType> => "grantTypes",
        default_max_age: int => "defaultMaxAge",
        default_acrs: strings => "defaultAcrs",
        auth_time_required: bool => "authTimeRequired",
        login_uri: string => "loginUri",
        subject_type: enumeration<SubjectType> => "subjectType",
        sector_identifier_uri: string => "sectorIdentifierUri",
        par_required: bool => "parRequired",
        request_object_required: bool => "requestObjectRequired",
        request_uris: strings => "requestUris",

        // 令牌端点认证
        token_auth_method: enumeration<ClientAuthMethod> => "tokenAuthMethod",
        token_auth_sign_alg: enumeration<JwsAlg> => "tokenAuthSignAlg",
        self_signed_certificate_key_id: string => "selfSignedCertificateKeyId",
        tls_client_auth_subject_dn: string => "tlsClientAuthSubjectDn",
        tls_client_auth_san_dns: string => "tlsClientAuthSanDns",
        tls_client_auth_san_uri: string => "tlsClientAuthSanUri",
        tls_client_auth_san_ip: string => "tlsClientAuthSanIp",
        tls_client_auth_san_email: string => "tlsClientAuthSanEmail",
        tls_client_certificate_bound_access_tokens: bool => "tlsClientCertificateBoundAccessTokens",

        // JOSE
        jwks_uri: string => "jwksUri",
        jwks: string => "jwks",
        request_sign_alg: enumeration<JwsAlg> => "requestSignAlg",
        request_encryption_alg: enumeration<JweAlg> => "requestEncryptionAlg",
        request_encryption_enc: enumeration<JweEnc> => "requestEncryptionEnc",
        id_token_sign_alg: enumeration<JwsAlg> => "idTokenSignAlg",
        id_token_encryption_alg: enumeration<JweAlg> => "idTokenEncryptionAlg",
        id_token_encryption_enc: enumeration<JweEnc> => "idTokenEncryptionEnc",
        user_info_sign_alg: enumeration<JwsAlg> => "userInfoSignAlg",
        user_info_encryption_alg: enumeration<JweAlg> => "userInfoEncryptionAlg",
        user_info_encryption_enc: enumeration<JweEnc> => "userInfoEncryptionEnc",
        authorization_sign_alg: enumeration<JwsAlg> => "authorizationSignAlg",
        authorization_encryption_alg: enumeration<JweAlg> => "authorizationEncryptionAlg",
        authorization_encryption_enc: enumeration<JweEnc> => "authorizationEncryptionEnc",

        // CIBA
        bc_delivery_mode: enumeration<DeliveryMode> => "bcDeliveryMode",
        bc_notification_endpoint: string => "bcNotificationEndpoint",
        bc_request_sign_alg: enumeration<JwsAlg> => "bcRequestSignAlg",
        bc_user_code_required: bool => "bcUserCodeRequired",

        extension: object<ClientExtension> => "extension",
        attributes: objects<Pair> => "attributes",
    }
}

impl Client {
    /// 是否登记了指定的授权类型
    pub fn allows_grant_type(&self, grant_type: GrantType) -> bool {
        self.grant_types
            .as_deref()
            .is_some_and(|types| types.contains(&grant_type))
    }

    /// 是否登记了指定的重定向 URI（精确匹配）
    pub fn has_redirect_uri(&self, uri: &str) -> bool {
        self.redirect_uris
            .iter()
            .flatten()
            .any(|registered| registered == uri)
    }

    /// 按语言标签查找客户端名称，没有时回退到 `clientName`
    pub fn client_name_for(&self, tag: &str) -> Option<&str> {
        self.client_names
            .iter()
            .flatten()
            .find(|n| n.tag() == Some(tag))
            .and_then(TaggedValue::value)
            .or_else(|| self.client_name())
    }

    /// 按键查找属性值
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .flatten()
            .find(|p| p.key() == Some(key))
            .and_then(Pair::value)
    }

    /// 创建时间
    pub fn created(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.created_at)
    }

    /// 更新时间
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.modified_at)
    }
}
