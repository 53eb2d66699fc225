//! GitHub Actions identity and build context
//!
//! Uploads are authorized with the short-lived OIDC token GitHub Actions
//! issues to a job, and tagged with the commit/branch/PR the job runs for.
//! Every function here reads the [`Environment`] it is given, never the
//! process environment directly.
//!
//! The variable names and the slug encoding are a contract with the CI host
//! and the upload service respectively and must not change.

mod error;

pub use error::ProviderError;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::env::Environment;
use crate::http::{HttpClient, HttpRequest};

pub const GITHUB_ACTIONS: &str = "GITHUB_ACTIONS";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_SHA: &str = "GITHUB_SHA";
pub const GITHUB_REF: &str = "GITHUB_REF";
pub const GITHUB_REF_NAME: &str = "GITHUB_REF_NAME";
pub const GITHUB_HEAD_REF: &str = "GITHUB_HEAD_REF";
pub const GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";
pub const GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const GITHUB_JOB: &str = "GITHUB_JOB";
pub const ACTIONS_ID_TOKEN_REQUEST_URL: &str = "ACTIONS_ID_TOKEN_REQUEST_URL";
pub const ACTIONS_ID_TOKEN_REQUEST_TOKEN: &str = "ACTIONS_ID_TOKEN_REQUEST_TOKEN";

/// Service name reported to the upload endpoint.
pub const SERVICE: &str = "github-actions";

/// Audience the identity token is minted for.
pub const TOKEN_AUDIENCE: &str = "https://codecov.io";

const DEFAULT_SERVER_URL: &str = "https://github.com";

static PULL_REQUEST_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^refs/pull/(\d+)/merge$").expect("valid pull request ref regex"));

/// Build context sent with the presigned-URL request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextParams {
    pub branch: String,
    pub commit: String,
    pub pr: String,
    pub service: String,
    pub slug: String,
    pub build: String,
    #[serde(rename = "buildURL")]
    pub build_url: String,
    pub job: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    value: Option<String>,
}

/// True when running inside a GitHub Actions job.
pub fn is_running_in_ci(env: &Environment) -> bool {
    env.get(GITHUB_ACTIONS) == Some("true")
}

/// Encode `owner/repo` the way the upload service expects.
///
/// ```
/// use bundle_report::provider::encode_repo_slug;
///
/// assert_eq!(encode_repo_slug("owner/repo"), "owner:::repo::::");
/// assert_eq!(encode_repo_slug("no-slash"), "no-slash::::");
/// ```
pub fn encode_repo_slug(slug: &str) -> String {
    match slug.split_once('/') {
        Some((owner, repo)) => format!("{owner}:::{repo}::::"),
        None => format!("{slug}::::"),
    }
}

/// Pull request number from a `refs/pull/<n>/merge` ref, or `""`.
pub fn extract_pr_number(git_ref: &str) -> String {
    PULL_REQUEST_REF
        .captures(git_ref)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Source branch for pull requests, otherwise the ref name, otherwise `""`.
pub fn extract_branch(env: &Environment) -> String {
    env.non_empty(GITHUB_HEAD_REF)
        .or_else(|| env.non_empty(GITHUB_REF_NAME))
        .unwrap_or_default()
        .to_string()
}

/// Collect the build context for the current job.
///
/// # Errors
///
/// [`ProviderError::MissingEnv`] when `GITHUB_REPOSITORY` or `GITHUB_SHA` is
/// not set.
pub fn gather_context_params(env: &Environment) -> Result<ContextParams, ProviderError> {
    let repository = env
        .non_empty(GITHUB_REPOSITORY)
        .ok_or_else(|| ProviderError::missing_env(GITHUB_REPOSITORY))?;
    let commit = env
        .non_empty(GITHUB_SHA)
        .ok_or_else(|| ProviderError::missing_env(GITHUB_SHA))?;

    let run_id = env.non_empty(GITHUB_RUN_ID);
    let build_url = match run_id {
        Some(run_id) => {
            let server = env.non_empty(GITHUB_SERVER_URL).unwrap_or(DEFAULT_SERVER_URL);
            format!("{server}/{repository}/actions/runs/{run_id}")
        }
        None => String::new(),
    };

    Ok(ContextParams {
        branch: extract_branch(env),
        commit: commit.to_string(),
        pr: extract_pr_number(env.get(GITHUB_REF).unwrap_or_default()),
        service: SERVICE.to_string(),
        slug: encode_repo_slug(repository),
        build: run_id.unwrap_or_default().to_string(),
        build_url,
        job: env.get(GITHUB_JOB).unwrap_or_default().to_string(),
    })
}

/// Exchange the job's runtime token for an OIDC identity token.
///
/// # Errors
///
/// - [`ProviderError::MissingEnv`] when the token request URL or runtime
///   token is not set
/// - [`ProviderError::TokenRequestFailed`] on a non-2xx response
/// - [`ProviderError::MissingField`] when the response has no `value`
pub async fn fetch_identity_token(
    env: &Environment,
    client: &dyn HttpClient,
) -> Result<String, ProviderError> {
    let request_url = env
        .non_empty(ACTIONS_ID_TOKEN_REQUEST_URL)
        .ok_or_else(|| ProviderError::missing_env(ACTIONS_ID_TOKEN_REQUEST_URL))?;
    let runtime_token = env
        .non_empty(ACTIONS_ID_TOKEN_REQUEST_TOKEN)
        .ok_or_else(|| ProviderError::missing_env(ACTIONS_ID_TOKEN_REQUEST_TOKEN))?;

    let request = HttpRequest::get(format!("{request_url}&audience={TOKEN_AUDIENCE}"))
        .header("Authorization", format!("Bearer {runtime_token}"));

    tracing::debug!("requesting identity token");
    let response = client.send(request).await?;
    if !response.is_success() {
        return Err(ProviderError::TokenRequestFailed {
            status: response.status,
            status_text: response.status_text,
        });
    }

    let body: TokenResponse = response.json()?;
    body.value
        .ok_or(ProviderError::MissingField { field: "value" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedClient;

    fn ci_env() -> Environment {
        [
            (GITHUB_ACTIONS, "true"),
            (GITHUB_REPOSITORY, "acme/web"),
            (GITHUB_SHA, "0123abcd"),
            (GITHUB_REF, "refs/pull/42/merge"),
            (GITHUB_REF_NAME, "42/merge"),
            (GITHUB_HEAD_REF, "feature/login"),
            (GITHUB_RUN_ID, "9001"),
            (GITHUB_SERVER_URL, "https://github.example"),
            (GITHUB_JOB, "build"),
            (ACTIONS_ID_TOKEN_REQUEST_URL, "https://token.example/req?api-version=2.0"),
            (ACTIONS_ID_TOKEN_REQUEST_TOKEN, "runtime-secret"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn ci_flag_must_be_literal_true() {
        assert!(is_running_in_ci(&ci_env()));
        assert!(!is_running_in_ci(&Environment::new().with(GITHUB_ACTIONS, "1")));
        assert!(!is_running_in_ci(&Environment::new()));
    }

    #[test]
    fn slug_encoding() {
        assert_eq!(encode_repo_slug("owner/repo"), "owner:::repo::::");
        assert_eq!(encode_repo_slug("no-slash"), "no-slash::::");
        assert_eq!(encode_repo_slug("org/group/repo"), "org:::group/repo::::");
    }

    #[test]
    fn pr_number_only_from_merge_refs() {
        assert_eq!(extract_pr_number("refs/pull/42/merge"), "42");
        assert_eq!(extract_pr_number("refs/heads/main"), "");
        assert_eq!(extract_pr_number("refs/pull/42/head"), "");
        assert_eq!(extract_pr_number(""), "");
    }

    #[test]
    fn branch_prefers_head_ref() {
        assert_eq!(extract_branch(&ci_env()), "feature/login");

        let push = Environment::new().with(GITHUB_REF_NAME, "main").with(GITHUB_HEAD_REF, "");
        assert_eq!(extract_branch(&push), "main");

        assert_eq!(extract_branch(&Environment::new()), "");
    }

    #[test]
    fn gathers_full_context() {
        let params = gather_context_params(&ci_env()).unwrap();

        assert_eq!(
            params,
            ContextParams {
                branch: "feature/login".into(),
                commit: "0123abcd".into(),
                pr: "42".into(),
                service: "github-actions".into(),
                slug: "acme:::web::::".into(),
                build: "9001".into(),
                build_url: "https://github.example/acme/web/actions/runs/9001".into(),
                job: "build".into(),
            }
        );

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["buildURL"], "https://github.example/acme/web/actions/runs/9001");
    }

    #[test]
    fn context_without_run_id_has_no_build_url() {
        let env = Environment::new()
            .with(GITHUB_REPOSITORY, "acme/web")
            .with(GITHUB_SHA, "abc");

        let params = gather_context_params(&env).unwrap();

        assert_eq!(params.build, "");
        assert_eq!(params.build_url, "");
        assert_eq!(params.pr, "");
        assert_eq!(params.job, "");
    }

    #[test]
    fn server_url_defaults_to_github() {
        let env = Environment::new()
            .with(GITHUB_REPOSITORY, "acme/web")
            .with(GITHUB_SHA, "abc")
            .with(GITHUB_RUN_ID, "7");

        let params = gather_context_params(&env).unwrap();
        assert_eq!(params.build_url, "https://github.com/acme/web/actions/runs/7");
    }

    #[test]
    fn context_requires_repository_and_sha() {
        let err = gather_context_params(&Environment::new().with(GITHUB_SHA, "abc")).unwrap_err();
        assert!(err.to_string().contains("GITHUB_REPOSITORY"));

        let err =
            gather_context_params(&Environment::new().with(GITHUB_REPOSITORY, "a/b")).unwrap_err();
        assert!(err.to_string().contains("GITHUB_SHA"));
    }

    #[tokio::test]
    async fn fetches_token_with_audience_and_bearer() {
        let client = ScriptedClient::new().respond(200, "OK", r#"{"value":"oidc-jwt"}"#);

        let token = fetch_identity_token(&ci_env(), &client).await.unwrap();

        assert_eq!(token, "oidc-jwt");
        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "https://token.example/req?api-version=2.0&audience=https://codecov.io"
        );
        assert_eq!(
            requests[0].header_value("Authorization"),
            Some("Bearer runtime-secret")
        );
    }

    #[tokio::test]
    async fn token_fetch_requires_env() {
        let client = ScriptedClient::new();

        let env = Environment::new().with(ACTIONS_ID_TOKEN_REQUEST_TOKEN, "t");
        let err = fetch_identity_token(&env, &client).await.unwrap_err();
        assert!(err.to_string().contains(ACTIONS_ID_TOKEN_REQUEST_URL));

        let env = Environment::new().with(ACTIONS_ID_TOKEN_REQUEST_URL, "https://x?y=1");
        let err = fetch_identity_token(&env, &client).await.unwrap_err();
        assert!(err.to_string().contains(ACTIONS_ID_TOKEN_REQUEST_TOKEN));

        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn token_fetch_reports_http_status() {
        let client = ScriptedClient::new().respond(403, "Forbidden", "");

        let err = fetch_identity_token(&ci_env(), &client).await.unwrap_err();

        assert!(matches!(err, ProviderError::TokenRequestFailed { status: 403, .. }));
        assert!(err.to_string().contains("403 Forbidden"));
    }

    #[tokio::test]
    async fn token_fetch_is_not_retried() {
        let client = ScriptedClient::new()
            .respond(503, "Service Unavailable", "")
            .respond(200, "OK", r#"{"value":"jwt"}"#);

        let err = fetch_identity_token(&ci_env(), &client).await.unwrap_err();

        assert!(matches!(err, ProviderError::TokenRequestFailed { status: 503, .. }));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn token_fetch_requires_value_field() {
        let client = ScriptedClient::new().respond(200, "OK", r#"{"count":1}"#);

        let err = fetch_identity_token(&ci_env(), &client).await.unwrap_err();

        assert!(matches!(err, ProviderError::MissingField { field: "value" }));
        assert!(err.to_string().contains("value"));
    }
}
