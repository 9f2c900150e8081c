/// End-of-citation marker: `已上`, usually bracket-wrapped as `｛已上｝`.
pub struct Termination;

impl Termination {
    /// The marker text. Bracketed forms contain it as a substring.
    pub const MARKER: &'static str = "已上";

    pub fn matches(trimmed: &str) -> bool {
        trimmed.contains(Self::MARKER)
    }
}
