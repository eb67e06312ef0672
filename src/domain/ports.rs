use crate::domain::model::Credential;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// 對遠端 API 發出單次認證 GET 請求並回傳解析後的 JSON
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &Url, credential: &Credential) -> Result<serde_json::Value>;
}

/// 同步的單行輸入，測試時可替換成預先寫好的回答
pub trait Prompt {
    fn prompt_line(&mut self, message: &str) -> Result<String>;

    /// 輸出一行提示訊息，不等待回答
    fn say(&mut self, message: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn story_point_field(&self) -> &str;
    fn credentials_path(&self) -> &str;
}
