//! 服务配置相关的代码集合

use crate::wire_enum;

wire_enum! {
    /// 服务遵循的安全配置文件
    pub enum ServiceProfile {
        /// Financial-grade API
        Fapi => "FAPI",
        /// UK Open Banking
        OpenBanking => "OPEN_BANKING",
    }
}

wire_enum! {
    /// 可用于服务所有者登录的社交网络
    pub enum Sns {
        Facebook => "FACEBOOK",
    }
}
