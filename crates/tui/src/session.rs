//! The app's single gateway to the ledger engine.
//!
//! Owns the one live [`Snapshot`] and replaces it wholesale with whatever a
//! ledger call returns; screens only ever read it. Also handles the
//! simulated sign-in delay and the optional JSON cache so a session
//! survives restarting the binary on the same machine.

use std::{fs, path::Path, time::Duration};

use chrono::Utc;
use uuid::Uuid;

use api_types::{
    filter::TransactionFilter,
    waste::{ListingDraft, WasteItem},
};
use engine::{EngineError, Snapshot, Tokens, filter};

use crate::error::Result;

/// Matches the original demo's fake authentication delay.
const LOGIN_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug)]
pub struct Session {
    username: String,
    snapshot: Snapshot,
}

impl Session {
    /// "Signs in": waits the simulated delay, then restores the cached
    /// snapshot (unless `fresh`) or seeds the demo data.
    pub async fn login(username: &str, state_path: &str, fresh: bool) -> Result<Self> {
        tokio::time::sleep(LOGIN_DELAY).await;

        let snapshot = if fresh {
            Snapshot::seeded(Utc::now())
        } else {
            match load_cached(state_path)? {
                Some(cached) => {
                    tracing::info!(path = state_path, "restored cached session");
                    cached
                }
                None => Snapshot::seeded(Utc::now()),
            }
        };

        Ok(Self {
            username: username.to_string(),
            snapshot,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Purchases a listing. On success the snapshot is replaced; the
    /// rejection (if any) is returned for the UI to surface.
    pub fn buy_item(&mut self, item_id: Uuid) -> std::result::Result<WasteItem, EngineError> {
        let bought = self
            .snapshot
            .item(item_id)
            .cloned()
            .ok_or_else(|| EngineError::ItemNotAvailable("unknown listing".to_string()))?;
        let next = self.snapshot.buy_item(item_id, Utc::now())?;
        tracing::info!(
            material = bought.material.as_str(),
            credits = bought.credits,
            "item purchased"
        );
        self.snapshot = next;
        Ok(bought)
    }

    /// Creates a listing and returns the credited payout.
    pub fn create_listing(&mut self, draft: &ListingDraft) -> std::result::Result<Tokens, EngineError> {
        let credits = engine::listing_credits(draft);
        let next = self
            .snapshot
            .create_listing(draft, &self.username, Utc::now())?;
        tracing::info!(
            material = draft.material.as_str(),
            quantity = draft.quantity,
            credits = credits.raw(),
            "listing created"
        );
        self.snapshot = next;
        Ok(credits)
    }

    pub fn buy_tokens(&mut self, amount: Tokens) -> std::result::Result<(), EngineError> {
        let next = self.snapshot.buy_tokens(amount, Utc::now())?;
        tracing::info!(amount = amount.raw(), "tokens purchased");
        self.snapshot = next;
        Ok(())
    }

    /// Writes the filtered transaction history as CSV and returns the row
    /// count.
    pub fn export_transactions(
        &self,
        criteria: &TransactionFilter,
        path: &str,
    ) -> Result<usize> {
        let rows = filter::filter_transactions(&self.snapshot.transactions, criteria);
        let csv = engine::export::transactions_csv(&rows)?;
        fs::write(path, csv)?;
        tracing::info!(path, rows = rows.len(), "transactions exported");
        Ok(rows.len())
    }

    /// Caches the snapshot as pretty JSON.
    pub fn save(&self, path: &str) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&self.snapshot)?;
        fs::write(path, payload)?;
        Ok(())
    }
}

fn load_cached(path: &str) -> Result<Option<Snapshot>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}
