use crate::rpc::structs::pending_add::PendingAdd;

impl PendingAdd {
    pub fn new(hash: String, name: String, attempts: u32) -> PendingAdd {
        PendingAdd {
            hash,
            name,
            attempts_left: attempts,
            resolved_id: None,
        }
    }

    /// Consumes one attempt; `false` once the budget is spent.
    pub fn take_attempt(&mut self) -> bool {
        if self.attempts_left == 0 {
            return false;
        }
        self.attempts_left -= 1;
        true
    }
}
