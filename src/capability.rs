/// Capability proving the current principal resolved as admin.
///
/// Obtained from [`BusinessSelection::admin_cap`](crate::BusinessSelection::admin_cap)
/// and required by [`BusinessSelection::select_as_admin`](crate::BusinessSelection::select_as_admin).
///
/// It cannot be constructed outside this crate. Each capability is bound to
/// the identity it was issued for: after any identity change it no longer
/// authorizes anything.
///
/// ```compile_fail
/// # use business_access::AdminCap;
/// // AdminCap cannot be forged:
/// let cap = AdminCap { generation: 0 }; // Error: field is private
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminCap {
    // Identity generation this capability was issued for
    generation: u64,
}

impl AdminCap {
    /// Creates a new AdminCap.
    ///
    /// This is `pub(crate)` so only the selection container can issue it.
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_cap_carries_its_generation() {
        let cap = AdminCap::new(7);
        assert_eq!(cap.generation(), 7);
        assert_eq!(cap, AdminCap::new(7));
        assert_ne!(cap, AdminCap::new(8));
    }
}
