use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::data::user::UserRepository;
use crate::error::auth::AuthError;
use crate::error::AppError;
use crate::model::user::UserDto;

const VERIFY_PROMPT: &str = "Compare the two photos. Do they show the same person? \
    Answer with exactly one word: yes or no.";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Interprets the model's reply. Anything other than an unambiguous "yes"
/// counts as a mismatch, so a confused or refusing model fails closed.
pub fn parse_verdict(reply: &str) -> bool {
    let normalized = reply.trim().to_ascii_lowercase();
    normalized == "yes" || normalized.starts_with("yes.") || normalized.starts_with("yes,")
}

/// Strips an optional `data:*;base64,` prefix from a captured frame.
pub fn strip_data_url(image: &str) -> &str {
    match image.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => image,
    }
}

pub struct FaceLoginService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a Config,
}

impl<'a> FaceLoginService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
        }
    }

    /// Logs a user in by comparing a captured frame against their stored
    /// avatar. Unavailable unless the deployment has a Gemini API key and
    /// the user has an avatar on file.
    pub async fn login(&self, username: &str, image: &str) -> Result<UserDto, AppError> {
        let api_key = self
            .config
            .gemini_api_key
            .as_deref()
            .ok_or(AuthError::FaceLoginUnavailable)?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let avatar_url = user
            .avatar_url
            .as_deref()
            .ok_or(AuthError::FaceLoginUnavailable)?;
        let reference = self.load_reference_image(avatar_url).await?;

        let submitted = strip_data_url(image);
        // Reject frames that are not valid base64 before calling out.
        STANDARD
            .decode(submitted)
            .map_err(|_| AuthError::FaceVerificationFailed)?;

        let verdict = self.compare(api_key, &reference, submitted).await?;
        if !parse_verdict(&verdict) {
            return Err(AuthError::FaceVerificationFailed.into());
        }

        let role = user_repo
            .find_with_role(user.id)
            .await?
            .and_then(|(_, role)| role);

        Ok(UserDto::from_parts(user, role))
    }

    /// Reads the stored avatar from the upload directory and re-encodes it
    /// for the comparison request.
    async fn load_reference_image(&self, avatar_url: &str) -> Result<String, AppError> {
        let relative = avatar_url
            .strip_prefix("/uploads/")
            .ok_or(AuthError::FaceLoginUnavailable)?;

        // The stored URL is server-generated, but keep traversal out anyway.
        if relative.contains("..") {
            return Err(AuthError::FaceLoginUnavailable.into());
        }

        let path = std::path::Path::new(&self.config.upload_dir).join(relative);
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|_| AuthError::FaceLoginUnavailable)?;

        Ok(STANDARD.encode(bytes))
    }

    async fn compare(
        &self,
        api_key: &str,
        reference_b64: &str,
        submitted_b64: &str,
    ) -> Result<String, AppError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.config.gemini_model, api_key
        );

        let body = json!({
            "contents": [{
                "parts": [
                    { "text": VERIFY_PROMPT },
                    { "inline_data": { "mime_type": "image/jpeg", "data": reference_b64 } },
                    { "inline_data": { "mime_type": "image/jpeg", "data": submitted_b64 } },
                ]
            }]
        });

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .json::<GenerateContentResponse>()
            .await?;

        let reply = response
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|mut p| p.drain(..).next())
            .and_then(|p| p.text)
            .ok_or(AuthError::FaceVerificationFailed)?;

        Ok(reply)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verdict_requires_unambiguous_yes() {
        assert!(parse_verdict("yes"));
        assert!(parse_verdict(" Yes. "));
        assert!(parse_verdict("YES, same person"));

        assert!(!parse_verdict("no"));
        assert!(!parse_verdict("maybe yes"));
        assert!(!parse_verdict("I cannot determine that"));
        assert!(!parse_verdict(""));
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(strip_data_url("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_url("AAAA"), "AAAA");
        assert_eq!(strip_data_url("image/png;base64,AAAA"), "image/png;base64,AAAA");
    }
}
