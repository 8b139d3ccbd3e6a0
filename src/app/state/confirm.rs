/// Pending delete waiting on an explicit yes/no from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirm {
    pub abbv: String,
}
