use serde::{Deserialize, Serialize};

// ===== Backend error body =====

/// Body the wallet backend sends alongside any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub reason: String,
}

// ===== Bulk delete =====

/// Query filter for bulk deletes, encoded as repeated `ids=` pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdsFilter {
    pub ids: Vec<String>,
}

impl IdsFilter {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        self.ids.iter().map(|id| ("ids", id.clone())).collect()
    }
}

/// Number of rows a bulk delete removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedCount(pub u64);
