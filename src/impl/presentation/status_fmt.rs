use crate::entities::BillStatus;

/// Display label of a bill status. "Refused" has always shipped
/// untranslated; kept as-is to match the rendered tables.
pub fn format_status(status: BillStatus) -> String {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
    .to_string()
}
