//! Authlete 连接配置
//!
//! 只保存连接远端 API 所需的设置，不负责发送请求。配置可以来自环境变量、
//! 任意键值来源，或者与 DTO 相同约定的 JSON 文件。
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::config::AuthleteConfiguration;
//!
//! let config = AuthleteConfiguration::from_lookup(|key| match key {
//!     "AUTHLETE_SERVICE_APIKEY" => Some("21653835348762".to_string()),
//!     "AUTHLETE_SERVICE_APISECRET" => Some("uE4NgqeIpuSV_XejQ7Ds3jsgA1yXhjR1MXJ1LbPuyls".to_string()),
//!     _ => None,
//! });
//!
//! assert_eq!(config.base_url, "https://api.authlete.com");
//! assert!(config.validate().is_ok());
//! assert_eq!(config.service_credentials().map(|(key, _)| key), Some("21653835348762"));
//! ```

use std::fmt;

use tracing::debug;
use url::Url;

use crate::conv::{Array, Arrayable, WireField, ensure_string};
use crate::error::{ConfigError, Error, Result};

/// 默认的 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.authlete.com";

// 环境变量名
const ENV_BASE_URL: &str = "AUTHLETE_BASE_URL";
const ENV_SERVICE_OWNER_API_KEY: &str = "AUTHLETE_SERVICEOWNER_APIKEY";
const ENV_SERVICE_OWNER_API_SECRET: &str = "AUTHLETE_SERVICEOWNER_APISECRET";
const ENV_SERVICE_API_KEY: &str = "AUTHLETE_SERVICE_APIKEY";
const ENV_SERVICE_API_SECRET: &str = "AUTHLETE_SERVICE_APISECRET";
const ENV_SERVICE_OWNER_ACCESS_TOKEN: &str = "AUTHLETE_SERVICEOWNER_ACCESSTOKEN";
const ENV_SERVICE_ACCESS_TOKEN: &str = "AUTHLETE_SERVICE_ACCESSTOKEN";
const ENV_API_VERSION: &str = "AUTHLETE_API_VERSION";

/// Authlete 连接配置
#[derive(Clone, PartialEq, Eq)]
pub struct AuthleteConfiguration {
    /// API 地址
    pub base_url: String,
    /// 服务所有者 API Key（管理 API 使用）
    pub service_owner_api_key: Option<String>,
    /// 服务所有者 API Secret
    pub service_owner_api_secret: Option<String>,
    /// 服务 API Key（授权服务器调用的 API 使用）
    pub service_api_key: Option<String>,
    /// 服务 API Secret
    pub service_api_secret: Option<String>,
    /// 服务所有者访问令牌
    pub service_owner_access_token: Option<String>,
    /// 服务访问令牌
    pub service_access_token: Option<String>,
    /// API 版本，例如 `V3`
    pub api_version: Option<String>,
}

impl Default for AuthleteConfiguration {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_owner_api_key: None,
            service_owner_api_secret: None,
            service_api_key: None,
            service_api_secret: None,
            service_owner_access_token: None,
            service_access_token: None,
            api_version: None,
        }
    }
}

impl AuthleteConfiguration {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从环境变量读取
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取，键为 `AUTHLETE_*` 环境变量名
    ///
    /// 空字符串视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let config = Self {
            base_url: get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            service_owner_api_key: get(ENV_SERVICE_OWNER_API_KEY),
            service_owner_api_secret: get(ENV_SERVICE_OWNER_API_SECRET),
            service_api_key: get(ENV_SERVICE_API_KEY),
            service_api_secret: get(ENV_SERVICE_API_SECRET),
            service_owner_access_token: get(ENV_SERVICE_OWNER_ACCESS_TOKEN),
            service_access_token: get(ENV_SERVICE_ACCESS_TOKEN),
            api_version: get(ENV_API_VERSION),
        };

        debug!(
            base_url = %config.base_url,
            api_version = config.api_version.as_deref().unwrap_or("-"),
            has_service_credentials = config.service_credentials().is_some(),
            has_service_owner_credentials = config.service_owner_credentials().is_some(),
            "loaded authlete configuration"
        );

        config
    }

    /// 设置 API 地址
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 设置服务所有者凭证
    pub fn with_service_owner_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.service_owner_api_key = Some(api_key.into());
        self.service_owner_api_secret = Some(api_secret.into());
        self
    }

    /// 设置服务凭证
    pub fn with_service_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.service_api_key = Some(api_key.into());
        self.service_api_secret = Some(api_secret.into());
        self
    }

    /// 设置服务所有者访问令牌
    pub fn with_service_owner_access_token(mut self, token: impl Into<String>) -> Self {
        self.service_owner_access_token = Some(token.into());
        self
    }

    /// 设置服务访问令牌
    pub fn with_service_access_token(mut self, token: impl Into<String>) -> Self {
        self.service_access_token = Some(token.into());
        self
    }

    /// 设置 API 版本
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// 服务 API Key 与 Secret，两者都设置时返回
    pub fn service_credentials(&self) -> Option<(&str, &str)> {
        self.service_api_key
            .as_deref()
            .zip(self.service_api_secret.as_deref())
    }

    /// 服务所有者 API Key 与 Secret，两者都设置时返回
    pub fn service_owner_credentials(&self) -> Option<(&str, &str)> {
        self.service_owner_api_key
            .as_deref()
            .zip(self.service_owner_api_secret.as_deref())
    }

    /// 服务 API 的 Basic 凭证
    #[cfg(feature = "web")]
    pub fn service_basic_credentials(&self) -> Option<crate::web::BasicCredentials> {
        self.service_credentials()
            .map(|(key, secret)| crate::web::BasicCredentials::new(key, secret))
    }

    /// 服务所有者 API 的 Basic 凭证
    #[cfg(feature = "web")]
    pub fn service_owner_basic_credentials(&self) -> Option<crate::web::BasicCredentials> {
        self.service_owner_credentials()
            .map(|(key, secret)| crate::web::BasicCredentials::new(key, secret))
    }

    /// 验证配置
    ///
    /// 只检查 API 地址；所需凭证取决于调用哪类 API，因此不做要求。
    pub fn validate(&self) -> Result<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingRequired("baseUrl".to_string()).into());
        }

        let invalid = |message: String| -> Error {
            ConfigError::InvalidValue {
                key: "baseUrl".to_string(),
                message,
            }
            .into()
        };

        let url = Url::parse(base_url).map_err(|e| invalid(format!("'{base_url}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("expected an http(s) URL, got '{base_url}'")));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid(format!("'{base_url}' has no host")));
        }

        Ok(())
    }
}

impl fmt::Debug for AuthleteConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn masked(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "***")
        }

        f.debug_struct("AuthleteConfiguration")
            .field("base_url", &self.base_url)
            .field("service_owner_api_key", &self.service_owner_api_key)
            .field("service_owner_api_secret", &masked(&self.service_owner_api_secret))
            .field("service_api_key", &self.service_api_key)
            .field("service_api_secret", &masked(&self.service_api_secret))
            .field("service_owner_access_token", &masked(&self.service_owner_access_token))
            .field("service_access_token", &masked(&self.service_access_token))
            .field("api_version", &self.api_version)
            .finish()
    }
}

// ============================================================================
// 数组形式
// ============================================================================

impl Arrayable for AuthleteConfiguration {
    fn copy_to_array(&self, array: &mut Array) {
        array.insert("baseUrl".to_string(), self.base_url.clone().into());
        array.insert("serviceOwnerApiKey".to_string(), self.service_owner_api_key.to_wire());
        array.insert(
            "serviceOwnerApiSecret".to_string(),
            self.service_owner_api_secret.to_wire(),
        );
        array.insert("serviceApiKey".to_string(), self.service_api_key.to_wire());
        array.insert("serviceApiSecret".to_string(), self.service_api_secret.to_wire());
        array.insert(
            "serviceOwnerAccessToken".to_string(),
            self.service_owner_access_token.to_wire(),
        );
        array.insert(
            "serviceAccessToken".to_string(),
            self.service_access_token.to_wire(),
        );
        array.insert("apiVersion".to_string(), self.api_version.to_wire());
    }

    fn copy_from_array(&mut self, array: &Array) -> Result<()> {
        let read = |key: &str| Option::<String>::from_wire(key, array.get(key));

        let base_url = match array.get("baseUrl") {
            None | Some(serde_json::Value::Null) => self.base_url.clone(),
            Some(value) => ensure_string("baseUrl", value)?.to_string(),
        };
        let service_owner_api_key = read("serviceOwnerApiKey")?;
        let service_owner_api_secret = read("serviceOwnerApiSecret")?;
        let service_api_key = read("serviceApiKey")?;
        let service_api_secret = read("serviceApiSecret")?;
        let service_owner_access_token = read("serviceOwnerAccessToken")?;
        let service_access_token = read("serviceAccessToken")?;
        let api_version = read("apiVersion")?;

        *self = Self {
            base_url,
            service_owner_api_key,
            service_owner_api_secret,
            service_api_key,
            service_api_secret,
            service_owner_access_token,
            service_access_token,
            api_version,
        };
        Ok(())
    }
}

crate::__impl_array_conversions!(AuthleteConfiguration);
