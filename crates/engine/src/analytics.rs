//! Read-only aggregations over listings and transaction history.
//!
//! Everything here is a pure view computed on demand from the snapshot the
//! caller holds; nothing mutates state.

use api_types::{
    transaction::{Transaction, TxAction},
    waste::WasteItem,
};

/// Number of leaderboard slots on the impact screen.
pub const TOP_RECYCLERS: usize = 5;
/// Number of material slots on the impact screen.
pub const TOP_MATERIALS: usize = 6;

/// Tokens earned by one recycler through listings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecyclerTotal {
    pub name: String,
    pub tokens: i64,
}

/// Total listed quantity of one material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialTotal {
    pub material: String,
    pub quantity: u64,
}

/// Sum of listed quantities, in kilograms.
pub fn total_waste_quantity(items: &[WasteItem]) -> u64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of the positive (credit) transaction legs.
///
/// Debits are excluded so circulating supply is not double-counted.
pub fn total_circulating_tokens(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(|tx| tx.tokens.max(0)).sum()
}

/// Estimated CO2 saved, in tons: `round(tokens * 0.2 / 100)`.
///
/// A fixed linear placeholder conversion; the displayed value depends on
/// this exact formula.
pub fn estimated_co2_saved_tons(transactions: &[Transaction]) -> i64 {
    let tokens = total_circulating_tokens(transactions) as f64;
    (tokens * 0.2 / 100.0).round() as i64
}

/// Top recyclers by tokens earned from listings.
///
/// Groups `Waste Listed` transactions by counterparty, sums the token
/// amounts, sorts descending and keeps the first `n`. Ties keep the
/// counterparty's first-encounter order (stable sort over insertion order).
pub fn top_recyclers(transactions: &[Transaction], n: usize) -> Vec<RecyclerTotal> {
    let mut totals: Vec<RecyclerTotal> = Vec::new();
    for tx in transactions {
        if tx.action != TxAction::WasteListed {
            continue;
        }
        match totals.iter_mut().find(|entry| entry.name == tx.counterparty) {
            Some(entry) => entry.tokens += tx.tokens,
            None => totals.push(RecyclerTotal {
                name: tx.counterparty.clone(),
                tokens: tx.tokens,
            }),
        }
    }
    totals.sort_by(|a, b| b.tokens.cmp(&a.tokens));
    totals.truncate(n);
    totals
}

/// Most traded materials by listed quantity, first `n`, stable tie-break.
pub fn top_materials(items: &[WasteItem], n: usize) -> Vec<MaterialTotal> {
    let mut totals: Vec<MaterialTotal> = Vec::new();
    for item in items {
        match totals
            .iter_mut()
            .find(|entry| entry.material == item.material)
        {
            Some(entry) => entry.quantity += item.quantity,
            None => totals.push(MaterialTotal {
                material: item.material.clone(),
                quantity: item.quantity,
            }),
        }
    }
    totals.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    totals.truncate(n);
    totals
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use api_types::{ItemStatus, Location, transaction::TxStatus};

    use super::*;

    fn item(material: &str, quantity: u64) -> WasteItem {
        WasteItem {
            id: Uuid::new_v4(),
            material: material.to_string(),
            quantity,
            owner: "Owner".to_string(),
            location: Location::Local,
            credits: 10,
            description: String::new(),
            status: ItemStatus::Available,
            images: Vec::new(),
        }
    }

    fn listed(counterparty: &str, tokens: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            action: TxAction::WasteListed,
            material: "Plastic".to_string(),
            quantity: 10,
            tokens,
            counterparty: counterparty.to_string(),
            status: TxStatus::Verified,
        }
    }

    fn purchased(tokens: i64) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            action: TxAction::WastePurchased,
            material: "Metal".to_string(),
            quantity: 10,
            tokens,
            counterparty: "Urban Scrap".to_string(),
            status: TxStatus::Completed,
        }
    }

    #[test]
    fn circulating_tokens_count_only_credit_legs() {
        let txs = vec![listed("A", 40), purchased(-60), listed("B", 100)];
        assert_eq!(total_circulating_tokens(&txs), 140);
    }

    #[test]
    fn totals_are_order_independent() {
        let txs = vec![listed("A", 40), purchased(-60), listed("B", 100)];
        let mut reversed = txs.clone();
        reversed.reverse();
        assert_eq!(
            total_circulating_tokens(&txs),
            total_circulating_tokens(&reversed)
        );

        let items = vec![item("Plastic", 120), item("Metal", 60)];
        let mut items_reversed = items.clone();
        items_reversed.reverse();
        assert_eq!(
            total_waste_quantity(&items),
            total_waste_quantity(&items_reversed)
        );
    }

    #[test]
    fn co2_conversion_is_the_literal_formula() {
        // 700 circulating tokens -> round(700 * 0.2 / 100) = 1 ton.
        let txs = vec![listed("A", 700)];
        assert_eq!(estimated_co2_saved_tons(&txs), 1);
        // 1300 -> round(2.6) = 3.
        let txs = vec![listed("A", 1300)];
        assert_eq!(estimated_co2_saved_tons(&txs), 3);
        assert_eq!(estimated_co2_saved_tons(&[]), 0);
    }

    #[test]
    fn top_recyclers_groups_sorts_and_truncates() {
        let txs = vec![
            listed("GreenWorks", 40),
            purchased(-60),
            listed("PaperLoop", 100),
            listed("GreenWorks", 80),
        ];
        let top = top_recyclers(&txs, 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "GreenWorks");
        assert_eq!(top[0].tokens, 120);
        assert_eq!(top[1].name, "PaperLoop");

        assert_eq!(top_recyclers(&txs, 1).len(), 1);
    }

    #[test]
    fn top_recyclers_ties_keep_encounter_order() {
        let txs = vec![listed("First", 50), listed("Second", 50)];
        let top = top_recyclers(&txs, 5);
        assert_eq!(top[0].name, "First");
        assert_eq!(top[1].name, "Second");
    }

    #[test]
    fn top_materials_matches_expected_ordering() {
        let items = vec![item("Plastic", 120), item("Plastic", 30), item("Metal", 60)];
        let top = top_materials(&items, 6);
        assert_eq!(
            top,
            vec![
                MaterialTotal {
                    material: "Plastic".to_string(),
                    quantity: 150
                },
                MaterialTotal {
                    material: "Metal".to_string(),
                    quantity: 60
                },
            ]
        );
    }
}
