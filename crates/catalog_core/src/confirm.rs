use crate::ProductId;

/// Yes/no barrier in front of a single pending deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfirmationGate {
    pending: Option<ProductId>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the gate, replacing any target that was already pending.
    pub fn open(&mut self, id: ProductId) {
        self.pending = Some(id);
    }

    /// Closes the gate and hands back the target to act on.
    pub fn confirm(&mut self) -> Option<ProductId> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<ProductId> {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_overwrites_pending_target() {
        let mut gate = ConfirmationGate::new();
        gate.open(1);
        gate.open(2);
        assert_eq!(gate.confirm(), Some(2));
        assert!(!gate.is_open());
    }

    #[test]
    fn cancel_clears_without_yielding() {
        let mut gate = ConfirmationGate::new();
        gate.open(4);
        gate.cancel();
        assert_eq!(gate.pending(), None);
        assert_eq!(gate.confirm(), None);
    }
}
