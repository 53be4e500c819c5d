//! Whitelist entry name resolution.

/// Separator between the read-side and write-side name of an entry.
pub const SEPARATOR: char = ':';

/// A resolved whitelist entry.
///
/// `NAME` reads and writes the same name; `READ:WRITE` reads the value under
/// one name and writes it under another. Only the first separator splits, so
/// `A:B:C` writes to `B:C`. A leading separator keeps the entry whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMapping {
    /// Name used to look up the value in the environment.
    pub read_as: String,
    /// Name used when writing to the target.
    pub write_as: String,
}

impl NameMapping {
    /// Resolve an entry. Total: every string is a valid mapping.
    pub fn parse(entry: &str) -> Self {
        match entry.find(SEPARATOR) {
            Some(at) if at > 0 => Self {
                read_as: entry[..at].to_string(),
                write_as: entry[at + 1..].to_string(),
            },
            _ => Self {
                read_as: entry.to_string(),
                write_as: entry.to_string(),
            },
        }
    }

    pub fn is_renamed(&self) -> bool {
        self.read_as != self.write_as
    }
}
