/// Check/request flow gating access to audio capture.
///
/// The session asks `is_granted` first and falls back to `request`, which
/// may block on a host permission prompt. Both answers are advisory for a
/// single listening attempt; hosts may revoke permission between calls.
pub trait PermissionGate: Send + Sync {
    /// Whether capture permission is currently granted
    fn is_granted(&self) -> bool;

    /// Prompt for permission, returning whether it was granted
    fn request(&self) -> bool;
}

/// Gate that always grants, for hosts without a permission model
#[derive(Debug, Clone, Default)]
pub struct AlwaysGranted;

impl AlwaysGranted {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionGate for AlwaysGranted {
    fn is_granted(&self) -> bool {
        true
    }

    fn request(&self) -> bool {
        true
    }
}

/// Gate that always denies
#[derive(Debug, Clone, Default)]
pub struct AlwaysDenied;

impl AlwaysDenied {
    pub fn new() -> Self {
        Self
    }
}

impl PermissionGate for AlwaysDenied {
    fn is_granted(&self) -> bool {
        false
    }

    fn request(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_granted() {
        let gate = AlwaysGranted::new();
        assert!(gate.is_granted());
        assert!(gate.request());
    }

    #[test]
    fn test_always_denied() {
        let gate = AlwaysDenied::new();
        assert!(!gate.is_granted());
        assert!(!gate.request());
    }
}
