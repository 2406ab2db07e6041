//! 动态客户端注册 (RFC 7591 / RFC 7592, `/client/registration`)

use crate::dto::client::Client;
use crate::{dto, wire_enum};

dto! {
    /// 客户端注册请求
    ///
    /// 注册时只需 `json`；读取、更新、删除时还需要注册访问令牌与客户端 ID。
    pub struct ClientRegistrationRequest {
        /// 客户端元数据（JSON 文本）
        json: string => "json",
        /// 注册访问令牌
        token: string => "token",
        client_id: string => "clientId",
    }
}

wire_enum! {
    /// 客户端注册响应后应采取的动作
    pub enum ClientRegistrationAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        /// 注册成功，返回 201 Created
        Created => "CREATED",
        Unauthorized => "UNAUTHORIZED",
        /// 读取成功
        Ok => "OK",
        /// 更新成功
        Updated => "UPDATED",
        /// 删除成功，返回 204 No Content
        Deleted => "DELETED",
    }
}

dto! {
    /// 客户端注册响应
    pub struct ClientRegistrationResponse : ApiResponse {
        action: enumeration<ClientRegistrationAction> => "action",
        response_content: string => "responseContent",
        client: object<Client> => "client",
    }
}
