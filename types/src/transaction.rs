//! The `Transaction` record and its storage encoding.

use serde::{Deserialize, Serialize};

use crate::TypesError;

/// A card transaction tracked by the dispute ledger.
///
/// Every field is an opaque string. `bill_details` and `customer_details`
/// carry their own `key:value,key:value` sub-encoding, which the store never
/// interprets.
///
/// On the wire the record is a JSON object with the fields `TranId`,
/// `ApprovalCode`, `BillDetails`, `CustomerDetails` and `Status`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// Unique key of the record in world state. Immutable once stored.
    pub tran_id: String,
    pub approval_code: String,
    /// Store id, item category and purchase date.
    pub bill_details: String,
    /// Customer name, phone number and card number.
    pub customer_details: String,
    /// Free-form status such as `Successful`, `failure` or `disputed`.
    pub status: String,
}

impl Transaction {
    pub fn new(
        tran_id: impl Into<String>,
        approval_code: impl Into<String>,
        bill_details: impl Into<String>,
        customer_details: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            tran_id: tran_id.into(),
            approval_code: approval_code.into(),
            bill_details: bill_details.into(),
            customer_details: customer_details.into(),
            status: status.into(),
        }
    }

    /// Encode the record into the bytes written to world state.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, TypesError> {
        serde_json::to_vec(self).map_err(|e| TypesError::Serialization {
            id: self.tran_id.clone(),
            reason: e.to_string(),
        })
    }

    /// Decode a record previously written by [`Transaction::to_json_bytes`].
    ///
    /// Unknown fields are ignored; a missing field is an error.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        serde_json::from_slice(bytes).map_err(|e| TypesError::Deserialization(e.to_string()))
    }
}
