use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// One balance line of an account, as reported by Horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub asset_type: String,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_issuer: Option<String>,
    pub balance: String,
}

impl Balance {
    pub fn asset_label(&self) -> String {
        match (&self.asset_code, self.asset_type.as_str()) {
            (_, "native") => "XLM".to_owned(),
            (Some(code), _) => code.clone(),
            (None, other) => other.to_owned(),
        }
    }
}

/// Account payload. `id` is the public key string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sequence: Option<String>,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: String,
    pub transaction_hash: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

/// Read-only view of the account slice handed to views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountSnapshot {
    pub is_authenticated: bool,
    pub data: Option<AccountData>,
}

impl AccountSnapshot {
    pub fn public_key(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_data_tolerates_missing_fields() {
        let data: AccountData = serde_json::from_str("{}").expect("decode");
        assert_eq!(data, AccountData::default());
    }

    #[test]
    fn payment_record_reads_horizon_type_field() {
        let record: PaymentRecord = serde_json::from_value(serde_json::json!({
            "id": "1",
            "type": "payment",
            "created_at": "2024-01-01T00:00:00Z",
            "transaction_hash": "abc",
            "amount": "10.0000000"
        }))
        .expect("decode");
        assert_eq!(record.kind, "payment");
        assert_eq!(record.amount.as_deref(), Some("10.0000000"));
        assert!(record.asset_code.is_none());
    }

    #[test]
    fn native_balance_is_labelled_xlm() {
        let native = Balance {
            asset_type: "native".to_owned(),
            asset_code: None,
            asset_issuer: None,
            balance: "1.0".to_owned(),
        };
        assert_eq!(native.asset_label(), "XLM");
    }

    #[test]
    fn snapshot_public_key_handles_absent_data() {
        assert_eq!(AccountSnapshot::default().public_key(), None);
        let snapshot = AccountSnapshot {
            is_authenticated: true,
            data: Some(AccountData::default()),
        };
        assert_eq!(snapshot.public_key(), None);
    }
}
