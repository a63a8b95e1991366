use std::io::IsTerminal;

/// Answers raw questions about the hosting execution environment.
///
/// This is the seam between [`profile`](crate::profile) and the process
/// host. The library ships [`NativeHost`] for ordinary builds; embedders
/// that run under an alternate managed runtime implement this trait over
/// whatever introspection surface that runtime exposes. Test suites
/// implement it with scripted fakes.
///
/// Implementations should treat every method as a one-shot probe:
/// [`RuntimeProfile::detect`](crate::RuntimeProfile::detect) calls each
/// method at most once and never calls [`runtime_display_name`] unless
/// [`alternate_runtime_present`] returned `true`.
///
/// [`runtime_display_name`]: HostProbe::runtime_display_name
/// [`alternate_runtime_present`]: HostProbe::alternate_runtime_present
pub trait HostProbe {
    /// Whether the alternate runtime's marker is present in this process.
    fn alternate_runtime_present(&self) -> bool;

    /// Whether the platform reports this session as interactive.
    ///
    /// A `false` from an alternate runtime is not trusted; see the
    /// resolution policy on [`RuntimeProfile::detect`](crate::RuntimeProfile::detect).
    fn session_interactive(&self) -> bool;

    /// Raw display string from the alternate runtime's diagnostic hook.
    ///
    /// The hook is an unstable contract: a descriptive string whose first
    /// whitespace-delimited token is a dotted numeric version. Returns
    /// `None` when the hook is missing or unreachable.
    fn runtime_display_name(&self) -> Option<String>;
}

/// Probe for ordinary native builds: no alternate runtime is present and
/// interactivity is read from the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl HostProbe for NativeHost {
    fn alternate_runtime_present(&self) -> bool {
        false
    }

    fn session_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn runtime_display_name(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_host_reports_no_alternate_runtime() {
        assert!(!NativeHost.alternate_runtime_present());
        assert_eq!(NativeHost.runtime_display_name(), None);
    }
}
