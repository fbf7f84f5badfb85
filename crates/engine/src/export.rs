//! CSV export of the (possibly filtered) transaction history.

use csv::Writer;
use serde::Serialize;

use api_types::transaction::Transaction;

use crate::{EngineError, ResultEngine};

/// One CSV row; field order defines the column order.
#[derive(Serialize)]
struct TransactionRow<'a> {
    date: String,
    material: &'a str,
    action: &'a str,
    quantity: u64,
    tokens: i64,
    counterparty: &'a str,
    status: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            date: tx.occurred_at.to_rfc3339(),
            material: &tx.material,
            action: tx.action.as_str(),
            quantity: tx.quantity,
            tokens: tx.tokens,
            counterparty: &tx.counterparty,
            status: tx.status.as_str(),
        }
    }
}

/// Serializes transactions to CSV text with a header row.
///
/// Quoting follows RFC 4180 (fields containing comma, quote or newline are
/// quoted, inner quotes doubled) via the `csv` writer. An empty input
/// produces an empty document, no header.
pub fn transactions_csv(transactions: &[Transaction]) -> ResultEngine<String> {
    let export = |message: String| EngineError::Export(message);

    let mut writer = Writer::from_writer(Vec::new());
    for tx in transactions {
        writer
            .serialize(TransactionRow::from(tx))
            .map_err(|err| export(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| export(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| export(err.to_string()))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use api_types::transaction::{TxAction, TxStatus};

    use super::*;

    fn tx(material: &str, counterparty: &str) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            occurred_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            action: TxAction::WasteListed,
            material: material.to_string(),
            quantity: 50,
            tokens: 40,
            counterparty: counterparty.to_string(),
            status: TxStatus::Verified,
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let csv = transactions_csv(&[tx("Plastic", "Marketplace")]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,material,action,quantity,tokens,counterparty,status"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("Plastic"));
        assert!(row.contains("Waste Listed"));
        assert!(row.contains("Verified"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_history_exports_an_empty_document() {
        assert_eq!(transactions_csv(&[]).unwrap(), "");
    }

    #[test]
    fn quotes_fields_containing_commas() {
        let csv = transactions_csv(&[tx("Plastic", "GreenWorks, Co.")]).unwrap();
        assert!(csv.contains("\"GreenWorks, Co.\""));
    }

    #[test]
    fn doubles_embedded_quotes() {
        let csv = transactions_csv(&[tx("Plastic", "The \"Loop\"")]).unwrap();
        assert!(csv.contains("\"The \"\"Loop\"\"\""));
    }
}
