/// Who authored a transcript turn. The external role vocabulary ("user",
/// "model") is deliberately absent here; backends map at the wire boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}
