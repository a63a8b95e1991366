//! Wire-format types for release descriptors consumed by the updraft
//! update checker.
//!
//! A release descriptor is the remote answer to "what is the latest
//! release": a tag plus the downloadable assets published under it.
//! [`ReleaseManifest::parse`] decodes one strictly — every required field
//! must be present and non-null, and a violation fails the whole decode
//! with the offending field path. No partial manifests are ever produced;
//! retrying the update-check cycle is the caller's decision.
//!
//! ```
//! use updraft_release::ReleaseManifest;
//!
//! let manifest = ReleaseManifest::parse(
//!     r#"{"tag_name":"v1.0","assets":[{"name":"a.zip","browser_download_url":"http://x/a.zip"}]}"#,
//! )
//! .unwrap();
//! assert_eq!(manifest.tag, "v1.0");
//! assert_eq!(manifest.assets[0].name, "a.zip");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Release descriptor wire types and the strict decoder.
pub mod release;

pub use release::{Asset, DecodeError, ReleaseManifest};
