/// One file picked in the new-bill form's file input: the raw input value
/// (which may still carry path separators) and the file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub input_value: String,
    pub content: Vec<u8>,
}

/// What the record store hands back after staging an attachment: where the
/// uploaded file lives, and the key of the draft record it was attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillCreation {
    pub file_url: String,
    pub key: String,
}
