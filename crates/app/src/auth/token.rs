//! Bearer token format: `sc_v1_{uuid}.{secret}`.
//!
//! The uuid is stored in the clear and identifies the row; the 32 byte secret
//! is hex encoded and only its SHA-256 digest is ever persisted.

use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::auth::ApiTokenUuid;

const PREFIX: &str = "sc_v1_";
const SECRET_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiTokenError {
    #[error("token does not start with `{PREFIX}`")]
    Prefix,

    #[error("token identifier is not a uuid")]
    Identifier,

    #[error("token secret is not {SECRET_LEN} hex encoded bytes")]
    Secret,
}

/// A complete bearer token, identifier plus secret.
pub struct ApiToken {
    uuid: ApiTokenUuid,
    secret: Zeroizing<[u8; SECRET_LEN]>,
}

impl ApiToken {
    /// Fresh token with a time-ordered identifier and an OS-random secret.
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = Zeroizing::new([0_u8; SECRET_LEN]);

        OsRng.fill_bytes(&mut secret[..]);

        Self {
            uuid: ApiTokenUuid::from_uuid(Uuid::now_v7()),
            secret,
        }
    }

    #[must_use]
    pub fn uuid(&self) -> ApiTokenUuid {
        self.uuid
    }

    /// Hex SHA-256 over `{uuid}:{secret}`, the value kept in storage.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();

        hasher.update(self.uuid.into_uuid().simple().to_string());
        hasher.update(b":");
        hasher.update(&self.secret[..]);

        to_hex(&hasher.finalize())
    }

    /// Compares against a stored digest in time independent of where they differ.
    #[must_use]
    pub fn matches(&self, stored_digest: &str) -> bool {
        let digest = self.digest();

        digest.len() == stored_digest.len()
            && digest
                .bytes()
                .zip(stored_digest.bytes())
                .fold(0, |diff, (a, b)| diff | (a ^ b))
                == 0
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = Zeroizing::new(to_hex(&self.secret[..]));

        write!(f, "{PREFIX}{}.{}", self.uuid.into_uuid().simple(), secret.as_str())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken")
            .field("uuid", &self.uuid)
            .finish_non_exhaustive()
    }
}

impl FromStr for ApiToken {
    type Err = ApiTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let rest = raw.strip_prefix(PREFIX).ok_or(ApiTokenError::Prefix)?;
        let (uuid, secret_hex) = rest.split_once('.').ok_or(ApiTokenError::Identifier)?;

        let uuid = Uuid::try_parse(uuid).map_err(|_invalid| ApiTokenError::Identifier)?;

        if secret_hex.len() != SECRET_LEN * 2
            || !secret_hex.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ApiTokenError::Secret);
        }

        let mut secret = Zeroizing::new([0_u8; SECRET_LEN]);

        for (index, byte) in secret.iter_mut().enumerate() {
            let pair = &secret_hex[index * 2..index * 2 + 2];

            *byte = u8::from_str_radix(pair, 16).map_err(|_invalid| ApiTokenError::Secret)?;
        }

        Ok(Self {
            uuid: ApiTokenUuid::from_uuid(uuid),
            secret,
        })
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut hex, byte| {
            let _infallible = write!(hex, "{byte:02x}");
            hex
        })
}
