//! 集成测试：数组与 JSON 转换约定
//!
//! 测试往返转换、继承字段合并、类型校验以及 serde 集成。

use authlete_dto::conv::{Array, Arrayable, Jsonable};
use authlete_dto::dto::authorization::{
    AuthorizationAction, AuthorizationIssueRequest, AuthorizationResponse,
};
use authlete_dto::dto::introspection::{IntrospectionAction, IntrospectionResponse};
use authlete_dto::dto::token::{
    TokenAction, TokenFailReason, TokenFailRequest, TokenRequest, TokenResponse,
};
use authlete_dto::dto::userinfo::UserInfoRequest;
use authlete_dto::dto::{ApiResult, Client, Pair, Property, Scope, Service, TaggedValue};
use authlete_dto::error::{Error, ValidationError};
use authlete_dto::types::{Display, GrantType, Prompt};
use authlete_dto::{dto, types};
use rstest::rstest;
use serde_json::{Value, json};

fn sample_authorization_response() -> AuthorizationResponse {
    AuthorizationResponse::new()
        .with_result_code("A004001")
        .with_result_message("[A004001] Authlete has successfully issued a ticket.")
        .with_action(AuthorizationAction::Interaction)
        .with_client(
            Client::new()
                .with_client_id(57297408867)
                .with_client_name("My Client")
                .with_client_names(vec![TaggedValue::of("ja", "マイクライアント")])
                .with_grant_types(vec![GrantType::AuthorizationCode]),
        )
        .with_display(Display::Page)
        .with_max_age(3600)
        .with_service(Service::new().with_number(1).with_service_name("Example"))
        .with_scopes(vec![Scope::of("openid"), Scope::of("email").with_default_entry(true)])
        .with_prompts(vec![Prompt::Login, Prompt::Consent])
        .with_lowest_prompt(Prompt::Login)
        .with_ui_locales(vec!["ja".to_string(), "en".to_string()])
        .with_subject("user-1")
        .with_ticket("ticket-123")
}

/// 测试往返转换：数组形式
#[test]
fn test_array_roundtrip_with_nested_objects() {
    let original = sample_authorization_response();

    let array = original.to_array();
    let restored = AuthorizationResponse::from_array(&array).expect("array roundtrip should succeed");

    assert_eq!(restored, original);
}

/// 测试往返转换：JSON 形式
#[test]
fn test_json_roundtrip_with_nested_objects() {
    let original = sample_authorization_response();

    let json = original.to_json();
    let restored = AuthorizationResponse::from_json(&json).expect("json roundtrip should succeed");
    assert_eq!(restored, original);

    let pretty = original.to_json_pretty().unwrap();
    assert_eq!(AuthorizationResponse::from_json(&pretty).unwrap(), original);
}

/// 测试空 DTO 的往返转换
#[test]
fn test_empty_dto_roundtrip() {
    let empty = TokenResponse::new();
    let json = empty.to_json();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["accessToken"], Value::Null);
    assert_eq!(value["accessTokenDuration"], json!(0));
    assert_eq!(value["clientIdAliasUsed"], json!(false));

    assert_eq!(TokenResponse::from_json(&json).unwrap(), empty);
    assert_eq!(TokenResponse::from_json("{}").unwrap(), empty);
}

/// 测试空数组与未设置的区别
#[test]
fn test_empty_list_differs_from_absent() {
    let with_empty = TokenRequest::new().with_properties(Vec::new());
    let absent = TokenRequest::new();

    assert_eq!(with_empty.to_array()["properties"], json!([]));
    assert_eq!(absent.to_array()["properties"], Value::Null);

    let restored = TokenRequest::from_json(&with_empty.to_json()).unwrap();
    assert_eq!(restored.properties(), Some(&[][..]));
    assert_ne!(restored, absent);
}

/// 测试令牌失败请求的 JSON 形式
#[test]
fn test_token_fail_request_scenario() {
    let mut request = TokenFailRequest::new();
    request
        .set_ticket("T1".to_string())
        .set_reason(TokenFailReason::InvalidTarget);

    let json = request.to_json();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, json!({"ticket": "T1", "reason": "invalid_target"}));

    let decoded = TokenFailRequest::from_json(r#"{"ticket":"T1","reason":"invalid_target"}"#)
        .expect("exact json should decode");
    assert_eq!(decoded, request);
}

/// 测试继承字段：基类字段在前，子类字段在后，且都能恢复
#[test]
fn test_inheritance_composition() {
    let response = IntrospectionResponse::new()
        .with_result_code("A056001")
        .with_result_message("ok")
        .with_action(IntrospectionAction::Ok)
        .with_subject("user-1");

    let array = response.to_array();
    let keys: Vec<&str> = array.keys().map(String::as_str).collect();
    assert_eq!(&keys[..3], &["resultCode", "resultMessage", "action"]);

    let restored = IntrospectionResponse::from_array(&array).unwrap();
    assert_eq!(restored.result_code(), Some("A056001"));
    assert_eq!(restored.result_message(), Some("ok"));
    assert_eq!(restored.subject(), Some("user-1"));

    let base = restored.to_api_response();
    assert_eq!(base.to_array().len(), 2);
    assert_eq!(base.result_code(), Some("A056001"));
}

/// 测试 ApiResult 可以统一处理不同的响应
#[test]
fn test_api_result_is_generic() {
    fn code_of(response: &dyn ApiResult) -> Option<&str> {
        response.result_code()
    }

    let token = TokenResponse::new().with_result_code("A050001");
    let introspection = IntrospectionResponse::new().with_result_code("A056001");

    assert_eq!(code_of(&token), Some("A050001"));
    assert_eq!(code_of(&introspection), Some("A056001"));
}

/// 测试类型不符时返回指明键名的错误
#[rstest]
#[case::string_field(json!({"ticket": 1}), "ticket", "a string")]
#[case::int_field(json!({"accessTokenDuration": "3600"}), "accessTokenDuration", "an integer")]
#[case::float_for_int(json!({"clientId": 1.5}), "clientId", "an integer")]
#[case::bool_field(json!({"clientIdAliasUsed": "true"}), "clientIdAliasUsed", "a boolean")]
#[case::string_list(json!({"scopes": "openid"}), "scopes", "an array")]
#[case::string_list_element(json!({"scopes": ["openid", 7]}), "scopes[1]", "a string")]
#[case::enum_field(json!({"action": 3}), "action", "a string")]
#[case::object_list_element(json!({"properties": [{"key": "k"}, "v"]}), "properties[1]", "an object")]
#[case::nested_field(json!({"properties": [{"hidden": "no"}]}), "properties[0].hidden", "a boolean")]
fn test_type_rejection(#[case] input: Value, #[case] key: &str, #[case] expected: &str) {
    let err = TokenResponse::from_json(&input.to_string()).unwrap_err();

    match err {
        Error::Validation(ValidationError::InvalidType {
            key: actual_key,
            expected: actual_expected,
            ..
        }) => {
            assert_eq!(actual_key, key);
            assert_eq!(actual_expected, expected);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// 测试读取失败时目标对象保持不变
#[test]
fn test_failed_copy_leaves_target_untouched() {
    let mut request = UserInfoRequest::new().with_token("original");
    let mut bad = Array::new();
    bad.insert("token".to_string(), json!("replaced"));
    bad.insert("dpop".to_string(), json!(false));

    assert!(request.copy_from_array(&bad).is_err());
    assert_eq!(request.token(), Some("original"));
    assert_eq!(request.dpop(), None);
}

/// 测试超出 i64 范围的整数
#[test]
fn test_integer_out_of_range() {
    let err = TokenResponse::from_json(r#"{"clientId":18446744073709551615}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::OutOfRange { ref key, .. }) if key == "clientId"
    ));
}

/// 测试非对象的 JSON 文本
#[test]
fn test_non_object_json() {
    assert!(matches!(TokenRequest::from_json("[]"), Err(Error::Validation(_))));
    assert!(matches!(TokenRequest::from_json("not json"), Err(Error::Json(_))));
}

/// 测试 serde 集成与数组形式一致
#[test]
fn test_serde_matches_array_form() {
    let issue = AuthorizationIssueRequest::new()
        .with_ticket("tk")
        .with_subject("user-1")
        .with_properties(vec![Property::of("tenant", "a")]);

    let via_serde = serde_json::to_value(&issue).unwrap();
    assert_eq!(via_serde, Value::Object(issue.to_array()));

    let back: AuthorizationIssueRequest = serde_json::from_value(via_serde).unwrap();
    assert_eq!(back, issue);

    assert_eq!(serde_json::to_value(TokenAction::Password).unwrap(), json!("PASSWORD"));
    assert!(serde_json::from_value::<TokenAction>(json!("password")).is_err());
}

/// 测试 DTO 嵌入到应用自身的 serde 结构中
#[test]
fn test_embedding_in_application_types() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Envelope {
        id: u32,
        attributes: Vec<Pair>,
        reason: TokenFailReason,
    }

    let envelope = Envelope {
        id: 7,
        attributes: vec![Pair::of("k", "v")],
        reason: TokenFailReason::Unknown,
    };

    let json = serde_json::to_string(&envelope).unwrap();
    assert_eq!(
        json,
        r#"{"id":7,"attributes":[{"key":"k","value":"v"}],"reason":"unknown"}"#
    );
    assert_eq!(serde_json::from_str::<Envelope>(&json).unwrap(), envelope);

    let err = serde_json::from_str::<Envelope>(r#"{"id":7,"attributes":[{"key":5}],"reason":"unknown"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("'key' must be a string"));
}

// ============================================================================
// 全字段往返转换
// ============================================================================

/// 所有枚举的线上值，用于为枚举字段挑选合法取值
fn known_wire_values() -> Vec<&'static str> {
    let mut values = Vec::new();

    macro_rules! collect {
        ($($(#[$m:meta])* $ty:ty),+ $(,)?) => {
            $(
                $(#[$m])*
                values.extend(<$ty>::VALUES.iter().map(|v| v.wire_value()));
            )+
        };
    }

    collect!(
        types::ApplicationType,
        types::ClaimType,
        types::ClientAuthMethod,
        types::ClientType,
        types::DeliveryMode,
        types::Display,
        types::GrantType,
        types::JweAlg,
        types::JweEnc,
        types::JwsAlg,
        types::Prompt,
        types::ResponseType,
        types::ServiceProfile,
        types::Sns,
        types::SubjectType,
        types::UserCodeCharset,
        dto::authorization::AuthorizationAction,
        dto::authorization::AuthorizationFailAction,
        dto::authorization::AuthorizationFailReason,
        dto::authorization::AuthorizationIssueAction,
        dto::introspection::IntrospectionAction,
        dto::introspection::StandardIntrospectionAction,
        dto::par::PushedAuthReqAction,
        dto::revocation::RevocationAction,
        dto::token::TokenAction,
        dto::token::TokenCreateAction,
        dto::token::TokenFailAction,
        dto::token::TokenFailReason,
        dto::token::TokenIssueAction,
        dto::token::TokenUpdateAction,
        dto::userinfo::UserInfoAction,
        dto::userinfo::UserInfoIssueAction,
        #[cfg(feature = "backchannel")]
        dto::backchannel::BackchannelAuthenticationAction,
        #[cfg(feature = "backchannel")]
        dto::backchannel::BackchannelAuthenticationCompleteAction,
        #[cfg(feature = "backchannel")]
        dto::backchannel::BackchannelAuthenticationCompleteResult,
        #[cfg(feature = "backchannel")]
        dto::backchannel::BackchannelAuthenticationFailAction,
        #[cfg(feature = "backchannel")]
        dto::backchannel::BackchannelAuthenticationFailReason,
        #[cfg(feature = "backchannel")]
        dto::backchannel::BackchannelAuthenticationIssueAction,
        #[cfg(feature = "backchannel")]
        dto::backchannel::UserIdentificationHintType,
        #[cfg(feature = "device")]
        dto::device::DeviceAuthorizationAction,
        #[cfg(feature = "device")]
        dto::device::DeviceCompleteAction,
        #[cfg(feature = "device")]
        dto::device::DeviceCompleteResult,
        #[cfg(feature = "device")]
        dto::device::DeviceVerificationAction,
        #[cfg(feature = "management")]
        dto::grant::GrantManagementAction,
        #[cfg(feature = "management")]
        dto::grant::GrantManagementResponseAction,
        #[cfg(feature = "management")]
        dto::registration::ClientRegistrationAction,
    );

    values
}

/// 判断候选值是否被字段原样接受
///
/// 对象候选值会被展开为嵌套 DTO 的完整数组形式，只要求结果非空。
fn accepts(candidate: &Value, stored: &Value) -> bool {
    match candidate {
        Value::Object(_) => stored.is_object(),
        Value::Array(items) if items.first().is_some_and(Value::is_object) => {
            stored.as_array().is_some_and(|a| a.len() == 1 && a[0].is_object())
        }
        _ => stored == candidate,
    }
}

/// 从 DTO 自身的数组形式出发，为每个字段找到一个能被接受的非默认值
fn populate<T: Arrayable>(wire_values: &[&'static str]) -> Array {
    let mut array = T::default().to_array();
    let keys: Vec<String> = array.keys().cloned().collect();

    for key in keys {
        let candidates: Vec<Value> = match &array[&key] {
            Value::Number(_) => vec![json!(42)],
            Value::Bool(_) => vec![json!(true)],
            Value::String(_) => vec![json!("https://example.com")],
            _ => {
                // 依次尝试：字符串、字符串数组、枚举值、枚举值数组、对象、对象数组
                let mut c = vec![json!("x"), json!(["x"])];
                c.extend(wire_values.iter().map(|w| json!(w)));
                c.extend(wire_values.iter().map(|w| json!([w])));
                c.push(json!({}));
                c.push(json!([{}]));
                c
            }
        };

        let value = candidates
            .into_iter()
            .find(|candidate| {
                let mut trial = array.clone();
                trial.insert(key.clone(), candidate.clone());
                T::from_array(&trial)
                    .map(|decoded| accepts(candidate, &decoded.to_array()[&key]))
                    .unwrap_or(false)
            })
            .unwrap_or_else(|| panic!("no value fits '{key}'"));

        array.insert(key, value);
    }

    array
}

fn assert_full_roundtrip<T>()
where
    T: Arrayable + PartialEq + std::fmt::Debug,
{
    let wire_values = known_wire_values();
    let filled = T::from_array(&populate::<T>(&wire_values)).expect("filled array should decode");

    // 每个字段都已设置
    let array = filled.to_array();
    assert!(array.values().all(|v| !v.is_null()), "unset field in {array:?}");
    assert_ne!(filled, T::default());

    assert_eq!(T::from_array(&array).expect("array roundtrip"), filled);
    assert_eq!(T::from_json(&filled.to_json()).expect("json roundtrip"), filled);
}

macro_rules! full_roundtrip_tests {
    ($($(#[$m:meta])* $name:ident => $ty:ty),+ $(,)?) => {
        $(
            $(#[$m])*
            /// 测试所有字段都设置时的往返转换
            #[test]
            fn $name() {
                assert_full_roundtrip::<$ty>();
            }
        )+
    };
}

full_roundtrip_tests! {
    test_full_roundtrip_api_response => dto::ApiResponse,
    test_full_roundtrip_pair => dto::Pair,
    test_full_roundtrip_property => dto::Property,
    test_full_roundtrip_tagged_value => dto::TaggedValue,
    test_full_roundtrip_named_uri => dto::NamedUri,
    test_full_roundtrip_scope => dto::Scope,
    test_full_roundtrip_dynamic_scope => dto::DynamicScope,
    test_full_roundtrip_sns_credentials => dto::SnsCredentials,
    test_full_roundtrip_client_extension => dto::ClientExtension,
    test_full_roundtrip_client => dto::Client,
    test_full_roundtrip_service => dto::Service,
    test_full_roundtrip_configuration => authlete_dto::AuthleteConfiguration,

    test_full_roundtrip_authorization_request => dto::authorization::AuthorizationRequest,
    test_full_roundtrip_authorization_response => dto::authorization::AuthorizationResponse,
    test_full_roundtrip_authorization_fail_request => dto::authorization::AuthorizationFailRequest,
    test_full_roundtrip_authorization_fail_response => dto::authorization::AuthorizationFailResponse,
    test_full_roundtrip_authorization_issue_request => dto::authorization::AuthorizationIssueRequest,
    test_full_roundtrip_authorization_issue_response => dto::authorization::AuthorizationIssueResponse,

    test_full_roundtrip_par_request => dto::par::PushedAuthReqRequest,
    test_full_roundtrip_par_response => dto::par::PushedAuthReqResponse,

    test_full_roundtrip_token_request => dto::token::TokenRequest,
    test_full_roundtrip_token_response => dto::token::TokenResponse,
    test_full_roundtrip_token_fail_request => dto::token::TokenFailRequest,
    test_full_roundtrip_token_fail_response => dto::token::TokenFailResponse,
    test_full_roundtrip_token_issue_request => dto::token::TokenIssueRequest,
    test_full_roundtrip_token_issue_response => dto::token::TokenIssueResponse,
    test_full_roundtrip_token_create_request => dto::token::TokenCreateRequest,
    test_full_roundtrip_token_create_response => dto::token::TokenCreateResponse,
    test_full_roundtrip_token_update_request => dto::token::TokenUpdateRequest,
    test_full_roundtrip_token_update_response => dto::token::TokenUpdateResponse,

    test_full_roundtrip_introspection_request => dto::introspection::IntrospectionRequest,
    test_full_roundtrip_introspection_response => dto::introspection::IntrospectionResponse,
    test_full_roundtrip_standard_introspection_request => dto::introspection::StandardIntrospectionRequest,
    test_full_roundtrip_standard_introspection_response => dto::introspection::StandardIntrospectionResponse,

    test_full_roundtrip_revocation_request => dto::revocation::RevocationRequest,
    test_full_roundtrip_revocation_response => dto::revocation::RevocationResponse,

    test_full_roundtrip_userinfo_request => dto::userinfo::UserInfoRequest,
    test_full_roundtrip_userinfo_response => dto::userinfo::UserInfoResponse,
    test_full_roundtrip_userinfo_issue_request => dto::userinfo::UserInfoIssueRequest,
    test_full_roundtrip_userinfo_issue_response => dto::userinfo::UserInfoIssueResponse,

    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_request => dto::backchannel::BackchannelAuthenticationRequest,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_response => dto::backchannel::BackchannelAuthenticationResponse,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_fail_request => dto::backchannel::BackchannelAuthenticationFailRequest,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_fail_response => dto::backchannel::BackchannelAuthenticationFailResponse,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_issue_request => dto::backchannel::BackchannelAuthenticationIssueRequest,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_issue_response => dto::backchannel::BackchannelAuthenticationIssueResponse,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_complete_request => dto::backchannel::BackchannelAuthenticationCompleteRequest,
    #[cfg(feature = "backchannel")]
    test_full_roundtrip_backchannel_complete_response => dto::backchannel::BackchannelAuthenticationCompleteResponse,

    #[cfg(feature = "device")]
    test_full_roundtrip_device_authorization_request => dto::device::DeviceAuthorizationRequest,
    #[cfg(feature = "device")]
    test_full_roundtrip_device_authorization_response => dto::device::DeviceAuthorizationResponse,
    #[cfg(feature = "device")]
    test_full_roundtrip_device_verification_request => dto::device::DeviceVerificationRequest,
    #[cfg(feature = "device")]
    test_full_roundtrip_device_verification_response => dto::device::DeviceVerificationResponse,
    #[cfg(feature = "device")]
    test_full_roundtrip_device_complete_request => dto::device::DeviceCompleteRequest,
    #[cfg(feature = "device")]
    test_full_roundtrip_device_complete_response => dto::device::DeviceCompleteResponse,

    #[cfg(feature = "management")]
    test_full_roundtrip_service_list_request => dto::management::ServiceListRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_service_list_response => dto::management::ServiceListResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_list_request => dto::management::ClientListRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_list_response => dto::management::ClientListResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_secret_refresh_response => dto::management::ClientSecretRefreshResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_secret_update_request => dto::management::ClientSecretUpdateRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_secret_update_response => dto::management::ClientSecretUpdateResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_authorization_get_list_request => dto::management::ClientAuthorizationGetListRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_authorization_update_request => dto::management::ClientAuthorizationUpdateRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_authorization_delete_request => dto::management::ClientAuthorizationDeleteRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_authorized_client_list_response => dto::management::AuthorizedClientListResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_granted_scopes_get_response => dto::management::GrantedScopesGetResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_registration_request => dto::registration::ClientRegistrationRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_client_registration_response => dto::registration::ClientRegistrationResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_grant_scope => dto::grant::GrantScope,
    #[cfg(feature = "management")]
    test_full_roundtrip_grant => dto::grant::Grant,
    #[cfg(feature = "management")]
    test_full_roundtrip_grant_management_request => dto::grant::GrantManagementRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_grant_management_response => dto::grant::GrantManagementResponse,
    #[cfg(feature = "management")]
    test_full_roundtrip_jose_verify_request => dto::jose::JoseVerifyRequest,
    #[cfg(feature = "management")]
    test_full_roundtrip_jose_verify_response => dto::jose::JoseVerifyResponse,
}
