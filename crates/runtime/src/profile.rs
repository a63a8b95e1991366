use crate::probe::HostProbe;
use crate::version::{RuntimeVersion, VersionProbeError};
use tracing::debug;

/// Immutable snapshot of everything the detector knows about the hosting
/// environment.
///
/// Built once by [`RuntimeProfile::detect`]; all queries read the frozen
/// snapshot and never probe again, so two consecutive calls to any query
/// always return identical results and the value can be shared across
/// threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProfile {
    alternate_runtime: bool,
    interactive: bool,
    version: Option<RuntimeVersion>,
    version_absence: Option<VersionProbeError>,
}

impl RuntimeProfile {
    /// Probes the host once and freezes the answers.
    ///
    /// Each [`HostProbe`] method is consulted at most once. The diagnostic
    /// display-name hook is consulted only when the alternate-runtime
    /// marker is present, so native hosts never execute that path.
    ///
    /// Interactivity resolution:
    /// 1. Platform says interactive — believed, regardless of runtime.
    /// 2. Platform says non-interactive, native runtime — the negative is
    ///    trusted.
    /// 3. Platform says non-interactive, alternate runtime — its platform
    ///    API always under-reports interactivity as `false`, so this
    ///    resolves to `true`. A best-effort guess, not a guarantee; there
    ///    is no reliable signal on that runtime today.
    ///
    /// Version resolution is fail-soft: whichever pipeline stage cannot
    /// complete is logged at debug and kept on the profile as
    /// [`version_absence`](Self::version_absence); nothing here errors or
    /// panics.
    pub fn detect(probe: &dyn HostProbe) -> Self {
        let alternate_runtime = probe.alternate_runtime_present();

        let interactive = if probe.session_interactive() {
            true
        } else {
            // An alternate runtime under-reports interactivity; assume
            // interactive there and trust the negative everywhere else.
            alternate_runtime
        };

        let (version, version_absence) = match Self::resolve_version(probe, alternate_runtime) {
            Ok(version) => (Some(version), None),
            Err(absence) => {
                debug!(stage = %absence, "alternate runtime version unavailable");
                (None, Some(absence))
            }
        };

        Self {
            alternate_runtime,
            interactive,
            version,
            version_absence,
        }
    }

    fn resolve_version(
        probe: &dyn HostProbe,
        alternate_runtime: bool,
    ) -> Result<RuntimeVersion, VersionProbeError> {
        if !alternate_runtime {
            return Err(VersionProbeError::MarkerMissing);
        }
        let display = probe
            .runtime_display_name()
            .ok_or(VersionProbeError::HookMissing)?;
        RuntimeVersion::from_display_name(&display)
    }

    /// Whether the process runs under the alternate managed runtime.
    #[must_use]
    pub fn is_alternate_runtime(&self) -> bool {
        self.alternate_runtime
    }

    /// Whether the session resolved as interactive.
    ///
    /// Under the alternate runtime this is a best-effort default of `true`
    /// whenever the platform reported `false`; see [`RuntimeProfile::detect`].
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// The resolved alternate-runtime version, when one could be extracted.
    #[must_use]
    pub fn alternate_runtime_version(&self) -> Option<RuntimeVersion> {
        self.version
    }

    /// The pipeline stage that prevented version resolution, when no
    /// version is available.
    #[must_use]
    pub fn version_absence(&self) -> Option<&VersionProbeError> {
        self.version_absence.as_ref()
    }

    /// Whether the known alternate-runtime defect requires a workaround.
    ///
    /// True only when running on the alternate runtime with a resolved
    /// version inside the affected range
    /// ([`RuntimeVersion::has_known_defect`]). An absent version, a native
    /// runtime, or any version outside the range answers `false`.
    #[must_use]
    pub fn requires_defect_workaround(&self) -> bool {
        self.alternate_runtime
            && self
                .version
                .as_ref()
                .is_some_and(RuntimeVersion::has_known_defect)
    }
}
