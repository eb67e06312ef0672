use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JIRA 帳號認證資訊，建立後不可變更
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    email: String,
    token: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("token", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub key: String,
    pub status_name: String,
    pub story_points: u64,
    pub summary: String,
}

/// 可供選擇的候選項目 (id 與顯示名稱)
pub trait Candidate {
    fn id(&self) -> i64;
    fn label(&self) -> &str;
}

impl Candidate for Board {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.display_name
    }
}

impl Candidate for Epic {
    fn id(&self) -> i64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// 工作流程狀態的代號，宣告順序即為目錄順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKey {
    Todo,
    Doing,
    Closed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub count: u64,
    pub sp_sum: u64,
}

impl Tally {
    /// 超出 u64 範圍時停在上限
    pub fn add(&mut self, story_points: u64) {
        self.count = self.count.saturating_add(1);
        self.sp_sum = self.sp_sum.saturating_add(story_points);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub per_status: BTreeMap<StatusKey, Tally>,
    pub overall: Tally,
}
