//! Predicate-based filtering over listings and transaction history.
//!
//! All criteria are AND-combined; the free-text search is the only
//! multi-field OR. Filters are pure and idempotent: re-applying the same
//! criteria to an already filtered list is a no-op.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use api_types::{
    filter::{ItemFilter, TransactionFilter},
    transaction::Transaction,
    waste::WasteItem,
};

/// Folds a string for matching: NFKD, combining marks stripped, lowercased.
///
/// Keeps search accent-insensitive so "café" matches "Cafe".
fn search_key(input: &str) -> String {
    let mut out = String::new();
    for ch in input.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

fn matches_search(needle: &str, haystacks: &[&str]) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    let needle = search_key(needle.trim());
    haystacks
        .iter()
        .any(|haystack| search_key(haystack).contains(&needle))
}

/// Filters marketplace listings by `criteria`.
pub fn filter_items(items: &[WasteItem], criteria: &ItemFilter) -> Vec<WasteItem> {
    items
        .iter()
        .filter(|item| {
            matches_search(
                &criteria.search,
                &[&item.material, &item.owner, &item.description],
            ) && criteria
                .material
                .as_deref()
                .is_none_or(|material| item.material == material)
                && criteria.status.is_none_or(|status| item.status == status)
                && criteria
                    .location
                    .is_none_or(|location| item.location == location)
                && item.credits >= criteria.min_credits
                && item.quantity >= criteria.min_quantity
        })
        .cloned()
        .collect()
}

/// Filters the transaction history by `criteria`.
///
/// Date bounds are inclusive whole days in UTC: `from` starts at 00:00:00,
/// `to` ends at 23:59:59. A missing bound leaves that side open.
pub fn filter_transactions(
    transactions: &[Transaction],
    criteria: &TransactionFilter,
) -> Vec<Transaction> {
    let action_key = criteria
        .action
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
        .map(search_key);

    transactions
        .iter()
        .filter(|tx| {
            let in_range = {
                let date = tx.occurred_at.date_naive();
                criteria.from.is_none_or(|from| date >= from)
                    && criteria.to.is_none_or(|to| date <= to)
            };

            matches_search(
                &criteria.search,
                &[&tx.material, tx.action.as_str(), &tx.counterparty],
            ) && action_key
                .as_deref()
                .is_none_or(|key| search_key(tx.action.as_str()).contains(key))
                && in_range
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    use api_types::{
        ItemStatus, Location,
        transaction::{TxAction, TxStatus},
    };

    use super::*;

    fn item(material: &str, owner: &str, credits: i64, quantity: u64) -> WasteItem {
        WasteItem {
            id: Uuid::new_v4(),
            material: material.to_string(),
            quantity,
            owner: owner.to_string(),
            location: Location::Regional,
            credits,
            description: "Sorted and baled.".to_string(),
            status: ItemStatus::Available,
            images: Vec::new(),
        }
    }

    fn tx(action: TxAction, material: &str, counterparty: &str, day: u32) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            occurred_at: Utc.with_ymd_and_hms(2025, 3, day, 15, 30, 0).unwrap(),
            action,
            material: material.to_string(),
            quantity: 10,
            tokens: 10,
            counterparty: counterparty.to_string(),
            status: TxStatus::Completed,
        }
    }

    #[test]
    fn search_matches_any_text_field_case_insensitively() {
        let items = vec![
            item("Plastic", "GreenWorks Co.", 90, 120),
            item("Metal", "Urban Scrap", 150, 60),
        ];
        let criteria = ItemFilter {
            search: "greenworks".to_string(),
            ..Default::default()
        };
        let matched = filter_items(&items, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].material, "Plastic");
    }

    #[test]
    fn categorical_filters_are_and_combined() {
        let items = vec![
            item("Plastic", "GreenWorks Co.", 90, 120),
            item("Plastic", "City MRF", 20, 10),
            item("Metal", "Urban Scrap", 150, 60),
        ];
        let criteria = ItemFilter {
            material: Some("Plastic".to_string()),
            min_credits: 50,
            ..Default::default()
        };
        let matched = filter_items(&items, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].owner, "GreenWorks Co.");
    }

    #[test]
    fn thresholds_apply_to_credits_and_quantity() {
        let items = vec![
            item("Glass", "City MRF", 60, 200),
            item("Paper", "PaperLoop", 80, 100),
        ];
        let criteria = ItemFilter {
            min_quantity: 150,
            ..Default::default()
        };
        let matched = filter_items(&items, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].material, "Glass");
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = vec![
            item("Plastic", "GreenWorks Co.", 90, 120),
            item("Metal", "Urban Scrap", 150, 60),
        ];
        let criteria = ItemFilter {
            search: "sorted".to_string(),
            min_credits: 100,
            ..Default::default()
        };
        let once = filter_items(&items, &criteria);
        let twice = filter_items(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn transaction_action_filter_is_a_substring_match() {
        let txs = vec![
            tx(TxAction::WasteListed, "Plastic", "Marketplace", 1),
            tx(TxAction::WastePurchased, "Metal", "Urban Scrap", 2),
            tx(TxAction::TokensPurchased, "T2C", "Trash2Cash", 3),
        ];
        let criteria = TransactionFilter {
            action: Some("purchased".to_string()),
            ..Default::default()
        };
        let matched = filter_transactions(&txs, &criteria);
        assert_eq!(matched.len(), 2);

        let all = TransactionFilter {
            action: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_transactions(&txs, &all).len(), 3);
    }

    #[test]
    fn date_bounds_are_inclusive_and_open_ended() {
        let txs = vec![
            tx(TxAction::WasteListed, "Plastic", "Marketplace", 1),
            tx(TxAction::WasteListed, "Glass", "Marketplace", 5),
            tx(TxAction::WasteListed, "Paper", "Marketplace", 9),
        ];
        let criteria = TransactionFilter {
            from: NaiveDate::from_ymd_opt(2025, 3, 5),
            to: NaiveDate::from_ymd_opt(2025, 3, 9),
            ..Default::default()
        };
        let matched = filter_transactions(&txs, &criteria);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].material, "Glass");

        let open_start = TransactionFilter {
            to: NaiveDate::from_ymd_opt(2025, 3, 1),
            ..Default::default()
        };
        assert_eq!(filter_transactions(&txs, &open_start).len(), 1);
    }

    #[test]
    fn transaction_search_covers_action_label() {
        let txs = vec![
            tx(TxAction::TokensPurchased, "T2C", "Trash2Cash", 3),
            tx(TxAction::WasteListed, "Plastic", "Marketplace", 4),
        ];
        let criteria = TransactionFilter {
            search: "tokens".to_string(),
            ..Default::default()
        };
        let matched = filter_transactions(&txs, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].material, "T2C");
    }
}
