/// Ruby notation `{base|reading}`: attaches a phonetic reading to a base run.
///
/// There is no escaping. The base runs to the first `|`, the reading to the
/// first `}` after it; both must be non-empty.
pub struct Ruby;

impl Ruby {
    pub const OPEN: u8 = b'{';
    pub const SEPARATOR: u8 = b'|';
    pub const CLOSE: u8 = b'}';
}
