use crate::{UPDATE_SCRIPT_NAME_UNIX, UPDATE_SCRIPT_NAME_WINDOWS};

/// Operating systems the update flow knows how to drive. Anything else is
/// `Other` and fails the attempt before any process is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostPlatform {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl HostPlatform {
    pub(crate) fn from_os_name(os_name: &str) -> Self {
        match os_name {
            "windows" => HostPlatform::Windows,
            "linux" => HostPlatform::Linux,
            "macos" => HostPlatform::MacOs,
            _ => HostPlatform::Other,
        }
    }

    pub(crate) fn update_script_name(self) -> Option<&'static str> {
        match self {
            HostPlatform::Windows => Some(UPDATE_SCRIPT_NAME_WINDOWS),
            HostPlatform::Linux | HostPlatform::MacOs => Some(UPDATE_SCRIPT_NAME_UNIX),
            HostPlatform::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HostPlatform;

    #[test]
    fn from_os_name_recognizes_the_supported_targets() {
        assert_eq!(HostPlatform::from_os_name("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os_name("linux"), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os_name("macos"), HostPlatform::MacOs);
    }

    #[test]
    fn from_os_name_treats_everything_else_as_other() {
        assert_eq!(HostPlatform::from_os_name("freebsd"), HostPlatform::Other);
        assert_eq!(HostPlatform::from_os_name("android"), HostPlatform::Other);
        assert_eq!(HostPlatform::from_os_name(""), HostPlatform::Other);
    }

    #[test]
    fn update_script_name_matches_the_platform_convention() {
        assert_eq!(
            HostPlatform::Windows.update_script_name(),
            Some("update_app.bat")
        );
        assert_eq!(
            HostPlatform::Linux.update_script_name(),
            Some("update_app.sh")
        );
        assert_eq!(
            HostPlatform::MacOs.update_script_name(),
            Some("update_app.sh")
        );
        assert_eq!(HostPlatform::Other.update_script_name(), None);
    }
}
