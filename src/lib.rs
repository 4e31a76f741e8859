//! Password strength checking library
//!
//! Provides a fast local heuristic for live feedback while typing, a
//! deny-list of known-weak passwords, pure render-state derivation for
//! checker UIs, and a client for an authoritative remote scoring service.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced live-feedback estimator with
//!   cancellation support
//! - `client` (default): Enables the remote scoring service client
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to a deny-list extension file
//!   (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{estimate, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = estimate(&password);
//!
//! println!("Score: {}", result.score);
//! println!("Strength: {}", result.strength());
//! assert!(result.strength() >= Strength::Fair);
//! ```

// Internal modules
mod denylist;
mod estimator;
mod render;
mod sections;
mod types;

#[cfg(feature = "client")]
mod client;

// Public API
pub use denylist::{
    get_denylist, get_denylist_path, init_denylist, init_denylist_from_path, is_denylisted,
    DenylistError,
};
pub use estimator::estimate;
pub use render::{render_state, security_tips, CheckPhase, RenderState};
pub use types::{PasswordScore, Strength, StrengthEstimate};

#[cfg(feature = "async")]
pub use estimator::estimate_tx;

#[cfg(feature = "client")]
pub use client::{CheckError, CheckResponse, ScoringClient};
