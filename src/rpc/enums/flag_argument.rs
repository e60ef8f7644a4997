#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagArgument {
    Absent,
    Bool(bool),
    /// Some clients send numbers instead of booleans.
    Number(f64),
}
