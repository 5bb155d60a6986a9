use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Role;

// HS256 requires at least a 256-bit key
const MIN_KEY_BYTES: usize = 32;

const TOKEN_TTL_SECS: i64 = 10 * 60 * 60;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("signing key must be at least {MIN_KEY_BYTES} bytes")]
    KeyTooShort,

    #[error("invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies the signed bearer tokens presented on authenticated
/// requests. Pure function of token + key + clock; no state is kept between
/// requests.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.len() < MIN_KEY_BYTES {
            return Err(TokenError::KeyTooShort);
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Produces a compact token embedding the subject and role claim, valid
    /// for ten hours from issuance.
    pub fn issue(&self, subject: &str, role: Role) -> Result<String, TokenError> {
        let iat = chrono::Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            role: role.as_str().to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Fails when the signature does not verify, the structure is malformed,
    /// or the token has expired.
    pub fn parse(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }

    /// True iff the embedded subject matches and the expiry is strictly in
    /// the future. Fails closed on any parse error.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.parse(token)
            .map(|claims| {
                claims.sub == expected_subject && claims.exp > chrono::Utc::now().timestamp()
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("0123456789abcdef0123456789abcdef").unwrap()
    }

    #[test]
    fn rejects_short_signing_key() {
        assert!(matches!(
            TokenService::new("too-short"),
            Err(TokenError::KeyTooShort)
        ));
    }

    #[test]
    fn issued_token_validates_for_its_subject() {
        let tokens = service();
        let token = tokens.issue("alice", Role::User).unwrap();
        assert!(tokens.validate(&token, "alice"));
    }

    #[test]
    fn issued_token_fails_for_other_subject() {
        let tokens = service();
        let token = tokens.issue("alice", Role::User).unwrap();
        assert!(!tokens.validate(&token, "bob"));
    }

    #[test]
    fn parse_round_trips_subject_and_role() {
        let tokens = service();
        let token = tokens.issue("carol", Role::Admin).unwrap();
        let claims = tokens.parse(&token).unwrap();
        assert_eq!(claims.sub, "carol");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn expired_token_fails_validation() {
        let tokens = service();
        // Forge a token that expired an hour ago, signed with the same key
        let iat = chrono::Utc::now().timestamp() - TOKEN_TTL_SECS - 3600;
        let claims = TokenClaims {
            sub: "alice".to_string(),
            role: "USER".to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("0123456789abcdef0123456789abcdef".as_bytes()),
        )
        .unwrap();
        assert!(tokens.parse(&token).is_err());
        assert!(!tokens.validate(&token, "alice"));
    }

    #[test]
    fn tampered_token_fails_closed() {
        let tokens = service();
        let token = tokens.issue("alice", Role::User).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        assert!(!tokens.validate(&tampered, "alice"));
        assert!(!tokens.validate("not-a-token", "alice"));
    }
}
