use serde::{Deserialize as _, Deserializer};
use serde_derive::{Deserialize, Serialize};

use crate::entities::{BillCreation, BillRecord, BillStatus};

/// Wire shape of a bill record (camelCase JSON). Older records in the
/// store can miss fields or carry the VAT as a bare number, so everything
/// non-essential is defaulted and the VAT accepts both shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BillRecordModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) email: String,
    #[serde(rename = "type", default)]
    pub(crate) expense_type: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) amount: f64,
    #[serde(default)]
    pub(crate) date: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub(crate) vat: String,
    #[serde(default)]
    pub(crate) pct: u32,
    #[serde(default)]
    pub(crate) commentary: String,
    #[serde(default)]
    pub(crate) file_url: Option<String>,
    #[serde(default)]
    pub(crate) file_name: Option<String>,
    #[serde(default = "default_status")]
    pub(crate) status: BillStatus,
    #[serde(default)]
    pub(crate) comment_admin: String,
}

fn default_status() -> BillStatus {
    BillStatus::Pending
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
        Missing,
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Raw::Number(n) => n.to_string(),
        Raw::Missing => String::new(),
    })
}

impl From<BillRecordModel> for BillRecord {
    fn from(model: BillRecordModel) -> Self {
        BillRecord {
            id: model.id,
            email: model.email,
            expense_type: model.expense_type,
            name: model.name,
            amount: model.amount,
            date: model.date,
            vat: model.vat,
            pct: model.pct,
            commentary: model.commentary,
            file_url: model.file_url,
            file_name: model.file_name,
            status: model.status,
            comment_admin: model.comment_admin,
        }
    }
}

impl From<&BillRecord> for BillRecordModel {
    fn from(bill: &BillRecord) -> Self {
        BillRecordModel {
            id: bill.id.clone(),
            email: bill.email.clone(),
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            amount: bill.amount,
            date: bill.date.clone(),
            vat: bill.vat.clone(),
            pct: bill.pct,
            commentary: bill.commentary.clone(),
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
            status: bill.status,
            comment_admin: bill.comment_admin.clone(),
        }
    }
}

/// Wire shape of the create-call response: the uploaded attachment's URL
/// and the key of the draft record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BillCreatedModel {
    pub(crate) file_url: String,
    pub(crate) key: String,
}

impl From<BillCreatedModel> for BillCreation {
    fn from(model: BillCreatedModel) -> Self {
        BillCreation {
            file_url: model.file_url,
            key: model.key,
        }
    }
}
