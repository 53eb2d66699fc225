//! # bundle-report
//!
//! Turns an esbuild metafile into a Codecov bundle-analysis report and
//! uploads it from GitHub Actions.
//!
//! ## Quick Start
//!
//! ### Build a report
//!
//! ```no_run
//! use bundle_report::{transform, Metafile, TransformOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metafile: Metafile = std::fs::read_to_string("meta.json")?.parse()?;
//! let report = transform(&metafile, &TransformOptions::new("web").output_dir("dist"));
//!
//! for asset in &report.assets {
//!     println!("{} {} {:?}", asset.normalized_name, asset.byte_size, asset.gzip_byte_size);
//! }
//! # Ok(()) }
//! ```
//!
//! ### Upload it from CI
//!
//! ```no_run
//! use bundle_report::http::ReqwestClient;
//! use bundle_report::provider::{fetch_identity_token, gather_context_params};
//! use bundle_report::{upload, Environment, UploadOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let payload = String::new();
//! let env = Environment::from_process();
//! let client = ReqwestClient::new();
//!
//! let token = fetch_identity_token(&env, &client).await?;
//! let params = gather_context_params(&env)?;
//! let result = upload(&client, &payload, &token, &params, &UploadOptions::default()).await;
//!
//! if !result.success {
//!     eprintln!("upload failed: {}", result.error.unwrap_or_default());
//! }
//! # Ok(()) }
//! ```

pub mod compress;
pub mod env;
pub mod http;
pub mod metafile;
pub mod normalize;
pub mod payload;
pub mod provider;
pub mod reader;
pub mod transform;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_utils;

pub use compress::estimate_gzip_size;
pub use env::Environment;
pub use metafile::{Metafile, MetafileError};
pub use normalize::normalize;
pub use payload::{Asset, BundleReport, BundlerInfo, Chunk, Module, ProducerInfo};
pub use provider::{ContextParams, ProviderError};
pub use transform::{TransformOptions, transform, transform_with};
pub use upload::{RetryPolicy, UploadError, UploadOptions, UploadResult, upload};
