//! Host runtime profiling for the updraft update checker.
//!
//! This crate answers three questions about the hosting execution
//! environment, cheaply and consistently:
//! - Is the process running under an alternate managed runtime?
//! - Is the session interactive?
//! - Which alternate-runtime version is present, and does it fall in the
//!   version window of a known defect that needs a workaround?
//!
//! Detection runs once. [`RuntimeProfile::detect`] consults a [`HostProbe`]
//! at most once per fact and freezes the answers into an immutable value;
//! every query afterwards is a plain field read. Embedders that want a
//! process-wide profile publish the value once:
//!
//! ```
//! use std::sync::OnceLock;
//! use updraft_runtime::{NativeHost, RuntimeProfile};
//!
//! static PROFILE: OnceLock<RuntimeProfile> = OnceLock::new();
//!
//! let profile = PROFILE.get_or_init(|| RuntimeProfile::detect(&NativeHost));
//! assert!(!profile.is_alternate_runtime());
//! ```
//!
//! Every probing step is fail-soft: a stage that cannot complete degrades to
//! "no information available" with a diagnostic attached to the profile,
//! never an error or a panic.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Capability-detection seam between the detector and the hosting runtime.
pub mod probe;
/// Immutable runtime profile construction and queries.
pub mod profile;
/// Dotted numeric runtime versions and the defect-range predicate.
pub mod version;

pub use probe::{HostProbe, NativeHost};
pub use profile::RuntimeProfile;
pub use version::{RuntimeVersion, VersionProbeError};
