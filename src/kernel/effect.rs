#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The file-system state changed and the blob must be rewritten.
    PersistFileSystem,
}
