//! 服务与客户端管理 API
//!
//! 服务/客户端列表、客户端密钥管理、客户端授权管理以及已授予权限范围的
//! 查询。列表请求带有分页参数，默认取 `[0, 5)`。
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::conv::Jsonable;
//! use authlete_dto::dto::management::{ServiceListRequest, ServiceListResponse};
//!
//! let request = ServiceListRequest::new();
//! assert_eq!((request.start(), request.end()), (0, 5));
//!
//! let response = ServiceListResponse::from_json(r#"{"totalCount":0}"#).unwrap();
//! assert!(response.services().is_none());
//! assert!(response.services_or_empty().is_empty());
//! ```

use crate::conv::{Array, Arrayable, WireField, ensure_integer};
use crate::dto;
use crate::dto::client::Client;
use crate::dto::service::Service;
use crate::error::Result;

/// 分页请求默认的起始位置（含）
pub const DEFAULT_START: i64 = 0;

/// 分页请求默认的结束位置（不含）
pub const DEFAULT_END: i64 = 5;

/// 读取分页整数，键缺失时保留当前值
fn read_int_or(array: &Array, key: &str, current: i64) -> Result<i64> {
    match array.get(key) {
        None | Some(serde_json::Value::Null) => Ok(current),
        Some(value) => ensure_integer(key, value),
    }
}

/// 为分页请求生成 `start`/`end` 访问器
macro_rules! range_accessors {
    () => {
        /// 起始位置（含）
        pub fn start(&self) -> i64 {
            self.start
        }

        /// 设置起始位置
        pub fn set_start(&mut self, start: i64) -> &mut Self {
            self.start = start;
            self
        }

        /// 以构建器方式设置起始位置
        pub fn with_start(mut self, start: i64) -> Self {
            self.start = start;
            self
        }

        /// 结束位置（不含）
        pub fn end(&self) -> i64 {
            self.end
        }

        /// 设置结束位置
        pub fn set_end(&mut self, end: i64) -> &mut Self {
            self.end = end;
            self
        }

        /// 以构建器方式设置结束位置
        pub fn with_end(mut self, end: i64) -> Self {
            self.end = end;
            self
        }

        /// 同时设置起止位置
        pub fn with_range(self, start: i64, end: i64) -> Self {
            self.with_start(start).with_end(end)
        }
    };
}

// ============================================================================
// 服务列表
// ============================================================================

/// 服务列表请求 (`/service/get/list`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceListRequest {
    start: i64,
    end: i64,
}

impl Default for ServiceListRequest {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl ServiceListRequest {
    /// 以默认分页范围创建
    pub fn new() -> Self {
        Self::default()
    }

    range_accessors!();
}

impl Arrayable for ServiceListRequest {
    fn copy_to_array(&self, array: &mut Array) {
        array.insert("start".to_string(), self.start.into());
        array.insert("end".to_string(), self.end.into());
    }

    fn copy_from_array(&mut self, array: &Array) -> Result<()> {
        let start = read_int_or(array, "start", self.start)?;
        let end = read_int_or(array, "end", self.end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

crate::__impl_array_conversions!(ServiceListRequest);

dto! {
    /// 服务列表响应
    pub struct ServiceListResponse : ApiResponse {
        start: int => "start",
        end: int => "end",
        /// 服务总数
        total_count: int => "totalCount",
        services: objects<Service> => "services",
    }
}

impl ServiceListResponse {
    /// 服务列表，未返回时为空切片
    pub fn services_or_empty(&self) -> &[Service] {
        self.services.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// 客户端列表
// ============================================================================

/// 客户端列表请求 (`/client/get/list`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientListRequest {
    developer: Option<String>,
    start: i64,
    end: i64,
}

impl Default for ClientListRequest {
    fn default() -> Self {
        Self {
            developer: None,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl ClientListRequest {
    /// 以默认分页范围创建
    pub fn new() -> Self {
        Self::default()
    }

    /// 只列出该开发者的客户端
    pub fn developer(&self) -> Option<&str> {
        self.developer.as_deref()
    }

    /// 设置开发者，传入 `None` 表示列出全部
    pub fn set_developer(&mut self, developer: impl Into<Option<String>>) -> &mut Self {
        self.developer = developer.into();
        self
    }

    /// 以构建器方式设置开发者
    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = Some(developer.into());
        self
    }

    range_accessors!();
}

impl Arrayable for ClientListRequest {
    fn copy_to_array(&self, array: &mut Array) {
        array.insert("developer".to_string(), self.developer.to_wire());
        array.insert("start".to_string(), self.start.into());
        array.insert("end".to_string(), self.end.into());
    }

    fn copy_from_array(&mut self, array: &Array) -> Result<()> {
        let developer = Option::<String>::from_wire("developer", array.get("developer"))?;
        let start = read_int_or(array, "start", self.start)?;
        let end = read_int_or(array, "end", self.end)?;
        self.developer = developer;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

crate::__impl_array_conversions!(ClientListRequest);

dto! {
    /// 客户端列表响应
    pub struct ClientListResponse : ApiResponse {
        developer: string => "developer",
        start: int => "start",
        end: int => "end",
        total_count: int => "totalCount",
        clients: objects<Client> => "clients",
    }
}

impl ClientListResponse {
    /// 客户端列表，未返回时为空切片
    pub fn clients_or_empty(&self) -> &[Client] {
        self.clients.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// 客户端密钥
// ============================================================================

dto! {
    /// 客户端密钥刷新响应 (`/client/secret/refresh`)
    pub struct ClientSecretRefreshResponse : ApiResponse {
        new_client_secret: string => "newClientSecret",
        old_client_secret: string => "oldClientSecret",
    }
}

dto! {
    /// 客户端密钥更新请求 (`/client/secret/update`)
    pub struct ClientSecretUpdateRequest {
        /// 新的密钥，只能包含 RFC 6749 允许的字符，最长 86 个字符
        client_secret: string => "clientSecret",
    }
}

dto! {
    /// 客户端密钥更新响应
    pub struct ClientSecretUpdateResponse : ApiResponse {
        new_client_secret: string => "newClientSecret",
        old_client_secret: string => "oldClientSecret",
    }
}

// ============================================================================
// 客户端授权
// ============================================================================

/// 已授权客户端列表请求 (`/client/authorization/get/list`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAuthorizationGetListRequest {
    subject: Option<String>,
    developer: Option<String>,
    start: i64,
    end: i64,
}

impl Default for ClientAuthorizationGetListRequest {
    fn default() -> Self {
        Self {
            subject: None,
            developer: None,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl ClientAuthorizationGetListRequest {
    /// 以默认分页范围创建
    pub fn new() -> Self {
        Self::default()
    }

    /// 为指定用户创建
    pub fn for_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    /// 资源所有者的主体标识
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// 设置主体
    pub fn set_subject(&mut self, subject: impl Into<Option<String>>) -> &mut Self {
        self.subject = subject.into();
        self
    }

    /// 以构建器方式设置主体
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// 只列出该开发者的客户端
    pub fn developer(&self) -> Option<&str> {
        self.developer.as_deref()
    }

    /// 设置开发者
    pub fn set_developer(&mut self, developer: impl Into<Option<String>>) -> &mut Self {
        self.developer = developer.into();
        self
    }

    /// 以构建器方式设置开发者
    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = Some(developer.into());
        self
    }

    range_accessors!();
}

impl Arrayable for ClientAuthorizationGetListRequest {
    fn copy_to_array(&self, array: &mut Array) {
        array.insert("subject".to_string(), self.subject.to_wire());
        array.insert("developer".to_string(), self.developer.to_wire());
        array.insert("start".to_string(), self.start.into());
        array.insert("end".to_string(), self.end.into());
    }

    fn copy_from_array(&mut self, array: &Array) -> Result<()> {
        let subject = Option::<String>::from_wire("subject", array.get("subject"))?;
        let developer = Option::<String>::from_wire("developer", array.get("developer"))?;
        let start = read_int_or(array, "start", self.start)?;
        let end = read_int_or(array, "end", self.end)?;
        self.subject = subject;
        self.developer = developer;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

crate::__impl_array_conversions!(ClientAuthorizationGetListRequest);

dto! {
    /// 客户端授权更新请求 (`/client/authorization/update`)
    pub struct ClientAuthorizationUpdateRequest {
        subject: string => "subject",
        /// 新的权限范围，`None` 表示不修改
        scopes: strings => "scopes",
    }
}

dto! {
    /// 客户端授权删除请求 (`/client/authorization/delete`)
    pub struct ClientAuthorizationDeleteRequest {
        subject: string => "subject",
    }
}

dto! {
    /// 已授权客户端列表响应
    pub struct AuthorizedClientListResponse : ApiResponse {
        start: int => "start",
        end: int => "end",
        total_count: int => "totalCount",
        developer: string => "developer",
        subject: string => "subject",
        clients: objects<Client> => "clients",
    }
}

impl AuthorizedClientListResponse {
    /// 客户端列表，未返回时为空切片
    pub fn clients_or_empty(&self) -> &[Client] {
        self.clients.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// 已授予的权限范围
// ============================================================================

dto! {
    /// 已授予权限范围查询响应 (`/client/granted_scopes/get`)
    pub struct GrantedScopesGetResponse : ApiResponse {
        service_api_key: int => "serviceApiKey",
        client_id: int => "clientId",
        subject: string => "subject",
        /// 最近一次授予的权限范围
        latest_granted_scopes: strings => "latestGrantedScopes",
        /// 累计授予的权限范围
        merged_granted_scopes: strings => "mergedGrantedScopes",
        /// 最后修改时间（毫秒时间戳）
        modified_at: int => "modifiedAt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::Jsonable;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let request = ServiceListRequest::new();
        assert_eq!(request.start(), 0);
        assert_eq!(request.end(), 5);

        let request = ClientListRequest::default();
        assert_eq!((request.start(), request.end()), (DEFAULT_START, DEFAULT_END));
        assert_eq!(request.developer(), None);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let request = ClientListRequest::from_json(r#"{"developer":"dev"}"#).unwrap();
        assert_eq!(request.developer(), Some("dev"));
        assert_eq!(request.start(), 0);
        assert_eq!(request.end(), 5);

        let request = ServiceListRequest::from_json(r#"{"end":20}"#).unwrap();
        assert_eq!((request.start(), request.end()), (0, 20));
    }

    #[test]
    fn test_pagination_type_error() {
        let err = ServiceListRequest::from_json(r#"{"start":"0"}"#).unwrap_err();
        assert_eq!(err.key(), Some("start"));
    }

    #[test]
    fn test_pagination_roundtrip() {
        let mut request = ClientAuthorizationGetListRequest::for_subject("user-1");
        request.set_start(10).set_end(30);

        let array = request.to_array();
        assert_eq!(serde_json::Value::Object(array.clone()), json!({
            "subject": "user-1", "developer": null, "start": 10, "end": 30
        }));
        assert_eq!(ClientAuthorizationGetListRequest::from_array(&array).unwrap(), request);
    }

    #[test]
    fn test_services_absent() {
        let response = ServiceListResponse::from_json(r#"{"start":0,"end":5,"totalCount":0}"#).unwrap();
        assert!(response.services().is_none());
        assert!(response.services_or_empty().is_empty());

        let array = response.to_array();
        assert_eq!(array["services"], serde_json::Value::Null);
        assert_eq!(ServiceListResponse::from_array(&array).unwrap(), response);
    }

    #[test]
    fn test_services_present() {
        let response = ServiceListResponse::from_json(
            r#"{"totalCount":2,"services":[{"number":1},{"number":2}]}"#,
        )
        .unwrap();
        let numbers: Vec<i64> = response.services_or_empty().iter().map(Service::number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_client_secret_update() {
        let response = ClientSecretUpdateResponse::from_json(
            r#"{"resultCode":"A148001","newClientSecret":"new","oldClientSecret":"old"}"#,
        )
        .unwrap();
        assert_eq!(response.new_client_secret(), Some("new"));
        assert_eq!(response.old_client_secret(), Some("old"));
    }

    #[test]
    fn test_granted_scopes() {
        let response = GrantedScopesGetResponse::new()
            .with_client_id(57)
            .with_subject("user-1")
            .with_latest_granted_scopes(vec!["openid".to_string()])
            .with_merged_granted_scopes(vec!["openid".to_string(), "email".to_string()]);

        let restored = GrantedScopesGetResponse::from_json(&response.to_json()).unwrap();
        assert_eq!(restored, response);
    }
}
