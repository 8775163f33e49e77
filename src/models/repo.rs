use serde::{Deserialize, Serialize};

/// One repository from the user's repository listing. The listing is a
/// single page of up to 100 entries in server-assigned order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub html_url: String,
}
