/// Created once a submission went out, dropped when the hash is indexed or the budget is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAdd {
    pub hash: String,
    pub name: String,
    pub attempts_left: u32,
    pub resolved_id: Option<i64>,
}
