use crate::domain::model::{Board, Credential, Epic, Ticket};
use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{InspectorError, Result, Stage};
use serde_json::Value;
use url::Url;

/// JIRA Agile REST API 的端點
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url).map_err(|e| InspectorError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        // join() 需要結尾的斜線才不會覆蓋最後一段路徑
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| InspectorError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.base.to_string(),
                reason: format!("Cannot build endpoint '{}': {}", path, e),
            })
    }

    pub fn boards(&self) -> Result<Url> {
        self.join("rest/agile/latest/board")
    }

    pub fn epics(&self, board_id: i64) -> Result<Url> {
        self.join(&format!("rest/agile/latest/board/{}/epic", board_id))
    }

    pub fn tickets(&self, board_id: i64, epic_id: i64) -> Result<Url> {
        self.join(&format!(
            "rest/agile/latest/board/{}/epic/{}/issue",
            board_id, epic_id
        ))
    }
}

/// 持有認證資訊與目前取得的 board / epic / ticket
///
/// 每次 fetch 都會取代同類型的既有集合，不會累積。
pub struct Session<T: Transport> {
    credential: Credential,
    transport: T,
    endpoints: Endpoints,
    story_point_field: String,
    boards: Vec<Board>,
    epics: Vec<Epic>,
    tickets: Vec<Ticket>,
}

impl<T: Transport> Session<T> {
    pub fn new<C: ConfigProvider>(credential: Credential, transport: T, config: &C) -> Result<Self> {
        Ok(Self {
            credential,
            transport,
            endpoints: Endpoints::new(config.base_url())?,
            story_point_field: config.story_point_field().to_string(),
            boards: Vec::new(),
            epics: Vec::new(),
            tickets: Vec::new(),
        })
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn epics(&self) -> &[Epic] {
        &self.epics
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub async fn fetch_boards(&mut self) -> Result<&[Board]> {
        let url = self.endpoints.boards()?;
        let body = self.transport.get_json(&url, &self.credential).await?;

        let mut boards = entries(&body, "values", &url)?
            .iter()
            .map(|entry| parse_board(entry, &url))
            .collect::<Result<Vec<_>>>()?;
        boards.sort_by_key(|b| b.id);
        tracing::info!("Fetched {} boards", boards.len());

        self.boards = boards;
        non_empty(&self.boards, Stage::Board)
    }

    pub async fn fetch_epics(&mut self, board_id: i64) -> Result<&[Epic]> {
        let url = self.endpoints.epics(board_id)?;
        let body = self.transport.get_json(&url, &self.credential).await?;

        let mut epics = entries(&body, "values", &url)?
            .iter()
            .map(|entry| parse_epic(entry, &url))
            .collect::<Result<Vec<_>>>()?;
        epics.sort_by_key(|e| e.id);
        tracing::info!("Fetched {} epics for board {}", epics.len(), board_id);

        self.epics = epics;
        non_empty(&self.epics, Stage::Epic)
    }

    pub async fn fetch_tickets(&mut self, board_id: i64, epic_id: i64) -> Result<&[Ticket]> {
        let url = self.endpoints.tickets(board_id, epic_id)?;
        let body = self.transport.get_json(&url, &self.credential).await?;

        let mut tickets = entries(&body, "issues", &url)?
            .iter()
            .map(|entry| parse_ticket(entry, &self.story_point_field, &url))
            .collect::<Result<Vec<_>>>()?;
        tickets.sort_by(|a, b| a.key.cmp(&b.key));
        tracing::info!(
            "Fetched {} tickets for board {} epic {}",
            tickets.len(),
            board_id,
            epic_id
        );

        self.tickets = tickets;
        non_empty(&self.tickets, Stage::Ticket)
    }
}

fn non_empty<E>(items: &[E], stage: Stage) -> Result<&[E]> {
    if items.is_empty() {
        tracing::warn!("No {} returned", stage);
        Err(InspectorError::EmptyResult { stage })
    } else {
        Ok(items)
    }
}

fn entries<'a>(body: &'a Value, field: &str, url: &Url) -> Result<&'a Vec<Value>> {
    body.get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| InspectorError::UnexpectedPayload {
            url: url.to_string(),
            message: format!("missing '{}' array", field),
        })
}

/// id 可能是數字或數字字串
fn parse_id(entry: &Value, url: &Url) -> Result<i64> {
    let id = match entry.get("id") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    id.ok_or_else(|| InspectorError::UnexpectedPayload {
        url: url.to_string(),
        message: format!("entry without a numeric id: {}", entry),
    })
}

fn parse_board(entry: &Value, url: &Url) -> Result<Board> {
    let display_name = entry
        .pointer("/location/displayName")
        .or_else(|| entry.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Board {
        id: parse_id(entry, url)?,
        display_name,
    })
}

fn parse_epic(entry: &Value, url: &Url) -> Result<Epic> {
    Ok(Epic {
        id: parse_id(entry, url)?,
        name: entry
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}

fn parse_ticket(entry: &Value, story_point_field: &str, url: &Url) -> Result<Ticket> {
    let key = entry
        .get("key")
        .and_then(Value::as_str)
        .ok_or_else(|| InspectorError::UnexpectedPayload {
            url: url.to_string(),
            message: "issue without a key".to_string(),
        })?
        .to_string();

    let fields = entry.get("fields");
    let text = |pointer: &str| {
        fields
            .and_then(|f| f.pointer(pointer))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Ok(Ticket {
        key,
        status_name: text("/status/name"),
        summary: text("/summary"),
        story_points: story_points(fields.and_then(|f| f.get(story_point_field))),
    })
}

/// SP 欄位：整數直接使用、小數捨去、數字字串解析，其餘 (含負數) 視為 0
pub fn story_points(value: Option<&Value>) -> u64 {
    let points = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    };
    points.and_then(|p| u64::try_from(p).ok()).unwrap_or(0)
}
