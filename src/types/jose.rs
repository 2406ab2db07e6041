//! JOSE 算法

use crate::wire_enum;

wire_enum! {
    /// JWS 签名算法 (RFC 7518 Section 3.1)
    pub enum JwsAlg {
        None => "NONE",
        Hs256 => "HS256",
        Hs384 => "HS384",
        Hs512 => "HS512",
        Rs256 => "RS256",
        Rs384 => "RS384",
        Rs512 => "RS512",
        Es256 => "ES256",
        Es384 => "ES384",
        Es512 => "ES512",
        Ps256 => "PS256",
        Ps384 => "PS384",
        Ps512 => "PS512",
        Es256k => "ES256K",
        EdDsa => "EdDSA",
    }
}

impl JwsAlg {
    /// JOSE 头 `alg` 中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            JwsAlg::None => "none",
            other => other.wire_value(),
        }
    }

    /// 是否为对称（HMAC）算法
    pub fn is_symmetric(self) -> bool {
        matches!(self, JwsAlg::Hs256 | JwsAlg::Hs384 | JwsAlg::Hs512)
    }
}

wire_enum! {
    /// JWE 密钥管理算法 (RFC 7518 Section 4.1)
    pub enum JweAlg {
        Rsa1_5 => "RSA1_5",
        RsaOaep => "RSA_OAEP",
        RsaOaep256 => "RSA_OAEP_256",
        A128Kw => "A128KW",
        A192Kw => "A192KW",
        A256Kw => "A256KW",
        Dir => "DIR",
        EcdhEs => "ECDH_ES",
        EcdhEsA128Kw => "ECDH_ES_A128KW",
        EcdhEsA192Kw => "ECDH_ES_A192KW",
        EcdhEsA256Kw => "ECDH_ES_A256KW",
        A128GcmKw => "A128GCMKW",
        A192GcmKw => "A192GCMKW",
        A256GcmKw => "A256GCMKW",
        Pbes2Hs256A128Kw => "PBES2_HS256_A128KW",
        Pbes2Hs384A192Kw => "PBES2_HS384_A192KW",
        Pbes2Hs512A256Kw => "PBES2_HS512_A256KW",
    }
}

impl JweAlg {
    /// JOSE 头 `alg` 中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            JweAlg::Rsa1_5 => "RSA1_5",
            JweAlg::RsaOaep => "RSA-OAEP",
            JweAlg::RsaOaep256 => "RSA-OAEP-256",
            JweAlg::A128Kw => "A128KW",
            JweAlg::A192Kw => "A192KW",
            JweAlg::A256Kw => "A256KW",
            JweAlg::Dir => "dir",
            JweAlg::EcdhEs => "ECDH-ES",
            JweAlg::EcdhEsA128Kw => "ECDH-ES+A128KW",
            JweAlg::EcdhEsA192Kw => "ECDH-ES+A192KW",
            JweAlg::EcdhEsA256Kw => "ECDH-ES+A256KW",
            JweAlg::A128GcmKw => "A128GCMKW",
            JweAlg::A192GcmKw => "A192GCMKW",
            JweAlg::A256GcmKw => "A256GCMKW",
            JweAlg::Pbes2Hs256A128Kw => "PBES2-HS256+A128KW",
            JweAlg::Pbes2Hs384A192Kw => "PBES2-HS384+A192KW",
            JweAlg::Pbes2Hs512A256Kw => "PBES2-HS512+A256KW",
        }
    }

    /// 按 JOSE 头名称查找
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|a| a.name() == name)
    }
}

wire_enum! {
    /// JWE 内容加密算法 (RFC 7518 Section 5.1)
    pub enum JweEnc {
        A128CbcHs256 => "A128CBC_HS256",
        A192CbcHs384 => "A192CBC_HS384",
        A256CbcHs512 => "A256CBC_HS512",
        A128Gcm => "A128GCM",
        A192Gcm => "A192GCM",
        A256Gcm => "A256GCM",
    }
}

impl JweEnc {
    /// JOSE 头 `enc` 中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            JweEnc::A128CbcHs256 => "A128CBC-HS256",
            JweEnc::A192CbcHs384 => "A192CBC-HS384",
            JweEnc::A256CbcHs512 => "A256CBC-HS512",
            JweEnc::A128Gcm => "A128GCM",
            JweEnc::A192Gcm => "A192GCM",
            JweEnc::A256Gcm => "A256GCM",
        }
    }

    /// 按 JOSE 头名称查找
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|e| e.name() == name)
    }
}
