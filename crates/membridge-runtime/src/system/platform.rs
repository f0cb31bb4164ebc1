//! Platform identification helpers.

use membridge_core::PlatformVersion;
use sysinfo::System;

/// Running Linux kernel version, or `None` on other OS families.
pub fn linux_kernel_version() -> Option<PlatformVersion> {
    if cfg!(target_os = "linux") {
        System::kernel_version()
            .as_deref()
            .and_then(PlatformVersion::parse)
    } else {
        None
    }
}

/// Short OS name as reported by the OS (e.g. "Ubuntu", "Darwin").
pub fn os_name() -> Option<String> {
    System::name()
}

/// OS release string as reported by the OS.
pub fn os_release() -> Option<String> {
    System::os_version()
}

/// Raw kernel version string.
pub fn kernel_release() -> Option<String> {
    System::kernel_version()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_version_only_on_linux() {
        let version = linux_kernel_version();
        #[cfg(target_os = "linux")]
        assert!(version.is_some());
        #[cfg(not(target_os = "linux"))]
        assert!(version.is_none());
    }
}
