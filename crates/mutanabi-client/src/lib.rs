//! Client for the remote poem generation service.
//!
//! The service is an opaque HTTP endpoint: one `GET` with the seed word and
//! the requested length as query parameters, answered with a JSON body that
//! holds the poem text. There is no authentication and no retry.
//!
//! # Example
//!
//! ```no_run
//! use mutanabi_client::{ClientSettings, GenerationClient};
//! use mutanabi_model::ValidatedInput;
//!
//! async fn generate() -> mutanabi_client::Result<()> {
//!     let client = GenerationClient::new(&ClientSettings::default())?;
//!     let poem = client.generate(&ValidatedInput::new("قمر", 5)).await?;
//!     println!("{poem}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod payload;

pub use client::{GenerationClient, request_url};
pub use config::ClientSettings;
pub use error::{ClientError, Result};
pub use generator::PoemGenerator;
pub use payload::PoemPayload;
