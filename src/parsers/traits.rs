/// Common seam for backup-dialect parsers: sniff support, then parse the
/// whole document into this dialect's record type.
pub trait Parser {
    type Output;

    fn parse(content: &str) -> Result<Vec<Self::Output>, String>;

    fn is_supported(filename: Option<&str>, content: &str) -> bool;
}
