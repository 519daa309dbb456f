use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use sha2::Sha256;

use crate::data::user::UserRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::auth::RegisterDto;
use crate::model::user::{CreateUserParams, RoleName, UserDto};

/// Reset tokens stay valid this long after issue.
const RESET_TOKEN_TTL_SECONDS: i64 = 30 * 60;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| AppError::InternalError(format!("Stored password hash is invalid: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Builds a password reset token of the form
/// `base64url("{user_id}:{expiry}:{mac}")` where the MAC is an HMAC-SHA256
/// over `"{user_id}:{expiry}"` keyed with the user's current password hash.
/// Changing the password rotates the key, so outstanding tokens die with it.
pub fn sign_reset_token(
    user_id: i32,
    expires_at: i64,
    password_hash: &str,
) -> Result<String, AppError> {
    let payload = format!("{user_id}:{expires_at}");

    let mut mac = Hmac::<Sha256>::new_from_slice(password_hash.as_bytes())
        .map_err(|e| AppError::InternalError(format!("Failed to key reset token MAC: {e}")))?;
    mac.update(payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    Ok(URL_SAFE_NO_PAD.encode(format!("{payload}:{signature}")))
}

/// Splits a reset token back into (user_id, expiry, signature) without
/// verifying anything. Verification needs the user's stored hash, which the
/// caller has to look up first.
pub fn parse_reset_token(token: &str) -> Result<(i32, i64, String), AuthError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| AuthError::ResetTokenInvalid)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::ResetTokenInvalid)?;

    let mut parts = decoded.splitn(3, ':');
    let user_id = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or(AuthError::ResetTokenInvalid)?;
    let expires_at = parts
        .next()
        .and_then(|p| p.parse::<i64>().ok())
        .ok_or(AuthError::ResetTokenInvalid)?;
    let signature = parts
        .next()
        .ok_or(AuthError::ResetTokenInvalid)?
        .to_string();

    Ok((user_id, expires_at, signature))
}

/// Checks a parsed token against the user's current password hash and the
/// clock. The MAC comparison goes through `Mac::verify_slice`, which is
/// constant-time, and happens before the expiry check so a forged token
/// learns nothing about expiry handling.
pub fn verify_reset_token(
    user_id: i32,
    expires_at: i64,
    signature: &str,
    password_hash: &str,
    now: i64,
) -> Result<(), AuthError> {
    let payload = format!("{user_id}:{expires_at}");

    let mut mac = Hmac::<Sha256>::new_from_slice(password_hash.as_bytes())
        .map_err(|_| AuthError::ResetTokenInvalid)?;
    mac.update(payload.as_bytes());

    let signature = hex::decode(signature).map_err(|_| AuthError::ResetTokenInvalid)?;
    mac.verify_slice(&signature)
        .map_err(|_| AuthError::ResetTokenInvalid)?;

    if now > expires_at {
        return Err(AuthError::ResetTokenInvalid);
    }

    Ok(())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies credentials and returns the user on success. The captcha
    /// answer must have been checked by the controller before this runs.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role);

        Ok(UserDto::from_parts(user, role))
    }

    /// Self-service registration always lands in the Student role; staff
    /// accounts are provisioned by an admin.
    pub async fn register(&self, params: RegisterDto) -> Result<UserDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::Conflict("Username is already taken".to_string()));
        }
        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = hash_password(&params.password)?;
        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: Some(params.email),
                password_hash,
                full_name: params.full_name,
                role: RoleName::Student,
                date_of_birth: None,
                phone: None,
                address: None,
                enrollment_year: None,
                hire_date: None,
                specialization: None,
                occupation: None,
            })
            .await?;

        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role);

        Ok(UserDto::from_parts(user, role))
    }

    pub async fn change_password(
        &self,
        user_id: i32,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        if !verify_password(old_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let new_hash = hash_password(new_password)?;
        user_repo.set_password_hash(user_id, new_hash).await?;

        Ok(())
    }

    /// Issues a reset token for the account behind `email`, or `None` when
    /// no such account exists. The controller answers identically either
    /// way so the endpoint cannot be used to probe for registered emails.
    pub async fn issue_reset_token(&self, email: &str) -> Result<Option<String>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let expires_at = Utc::now().timestamp() + RESET_TOKEN_TTL_SECONDS;
        let token = sign_reset_token(user.id, expires_at, &user.password_hash)?;

        Ok(Some(token))
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let (user_id, expires_at, signature) = parse_reset_token(token)?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::ResetTokenInvalid)?;

        verify_reset_token(
            user_id,
            expires_at,
            &signature,
            &user.password_hash,
            Utc::now().timestamp(),
        )?;

        let new_hash = hash_password(new_password)?;
        user_repo.set_password_hash(user_id, new_hash).await?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn password_roundtrip_verifies() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn reset_token_roundtrip() {
        let token = sign_reset_token(42, 1_999_999_999, "some-password-hash").unwrap();
        let (user_id, expires_at, signature) = parse_reset_token(&token).unwrap();

        assert_eq!(user_id, 42);
        assert_eq!(expires_at, 1_999_999_999);
        verify_reset_token(
            user_id,
            expires_at,
            &signature,
            "some-password-hash",
            1_999_999_000,
        )
        .unwrap();
    }

    #[test]
    fn reset_token_rejects_expired() {
        let token = sign_reset_token(42, 1_000, "hash").unwrap();
        let (user_id, expires_at, signature) = parse_reset_token(&token).unwrap();

        let result = verify_reset_token(user_id, expires_at, &signature, "hash", 1_001);
        assert!(matches!(result, Err(AuthError::ResetTokenInvalid)));
    }

    #[test]
    fn reset_token_dies_with_password_change() {
        let token = sign_reset_token(42, i64::MAX, "old-hash").unwrap();
        let (user_id, expires_at, signature) = parse_reset_token(&token).unwrap();

        let result = verify_reset_token(user_id, expires_at, &signature, "new-hash", 0);
        assert!(matches!(result, Err(AuthError::ResetTokenInvalid)));
    }

    #[test]
    fn reset_token_rejects_tampered_signature() {
        let token = sign_reset_token(42, i64::MAX, "hash").unwrap();
        let (user_id, expires_at, signature) = parse_reset_token(&token).unwrap();

        let mut tampered = signature.into_bytes();
        tampered[0] = if tampered[0] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(tampered).unwrap();

        let result = verify_reset_token(user_id, expires_at, &tampered, "hash", 0);
        assert!(matches!(result, Err(AuthError::ResetTokenInvalid)));

        let result = verify_reset_token(user_id, expires_at, "not-hex", "hash", 0);
        assert!(matches!(result, Err(AuthError::ResetTokenInvalid)));
    }

    #[test]
    fn reset_token_rejects_garbage() {
        assert!(parse_reset_token("not-base64!!").is_err());
        assert!(parse_reset_token("").is_err());

        let missing_parts = URL_SAFE_NO_PAD.encode("42:123");
        assert!(parse_reset_token(&missing_parts).is_err());
    }
}
