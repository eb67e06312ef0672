use crate::domain::model::StatusKey;
use crate::domain::ports::Prompt;
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// 固定的狀態目錄，順序為 todo, doing, closed
pub const CATALOG: [StatusKey; 3] = [StatusKey::Todo, StatusKey::Doing, StatusKey::Closed];

impl StatusKey {
    /// JIRA 上顯示的狀態名稱
    pub fn label(&self) -> &'static str {
        match self {
            StatusKey::Todo => "To Do",
            StatusKey::Doing => "進行中",
            StatusKey::Closed => "完了",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        CATALOG.into_iter().find(|key| key.label() == label)
    }

    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| CATALOG.get(i).copied())
    }
}

/// 使用者選擇的狀態集合，永遠不為空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSelection {
    keys: BTreeSet<StatusKey>,
}

impl StatusSelection {
    pub fn all() -> Self {
        Self {
            keys: CATALOG.into_iter().collect(),
        }
    }

    /// 空集合代表全部狀態
    pub fn from_keys(keys: impl IntoIterator<Item = StatusKey>) -> Self {
        let keys: BTreeSet<StatusKey> = keys.into_iter().collect();
        if keys.is_empty() {
            Self::all()
        } else {
            Self { keys }
        }
    }

    /// 解析以逗號分隔的索引，超出範圍或非數字的項目直接忽略
    pub fn parse(raw: &str) -> Self {
        let keys = raw
            .split(',')
            .filter_map(|token| token.trim().parse::<i64>().ok())
            .filter_map(StatusKey::from_index);
        Self::from_keys(keys)
    }

    pub fn contains(&self, key: StatusKey) -> bool {
        self.keys.contains(&key)
    }

    /// 依目錄順序回傳
    pub fn keys(&self) -> impl Iterator<Item = StatusKey> + '_ {
        self.keys.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.keys().map(|key| key.label()).collect()
    }

    /// 票券狀態名稱需完全符合所選的標籤
    pub fn match_label(&self, status_name: &str) -> Option<StatusKey> {
        StatusKey::from_label(status_name).filter(|key| self.contains(*key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub fn render_catalog() -> String {
    let mut lines = vec!["=".repeat(40), "ステータス一覧".to_string(), "-".repeat(40)];
    for (index, key) in CATALOG.iter().enumerate() {
        lines.push(format!("{}: {}", index, key.label()));
    }
    lines.push("=".repeat(40));
    lines.join("\n")
}

pub fn prompt_selection<P: Prompt>(prompt: &mut P) -> Result<StatusSelection> {
    let raw = prompt.prompt_line("ステータス番号をカンマ区切りで選択してください（空欄で全て）：")?;
    let selection = StatusSelection::parse(&raw);
    tracing::debug!("Status selection from '{}': {:?}", raw.trim(), selection.labels());
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_labels() {
        let labels: Vec<&str> = CATALOG.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!["To Do", "進行中", "完了"]);
    }

    #[test]
    fn test_empty_input_selects_all() {
        assert_eq!(StatusSelection::parse(""), StatusSelection::all());
        assert_eq!(StatusSelection::parse("   "), StatusSelection::all());
    }

    #[test]
    fn test_out_of_range_only_selects_all() {
        let selection = StatusSelection::parse("99,-1");
        assert_eq!(selection, StatusSelection::all());
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_out_of_range_indices_are_dropped() {
        let selection = StatusSelection::parse("2, 7, x, 0");
        assert_eq!(selection.labels(), vec!["To Do", "完了"]);
    }

    #[test]
    fn test_duplicates_collapse_and_catalog_order_wins() {
        let selection = StatusSelection::parse("2,0,2,2");
        assert_eq!(selection.len(), 2);
        assert_eq!(
            selection.keys().collect::<Vec<_>>(),
            vec![StatusKey::Todo, StatusKey::Closed]
        );
    }

    #[test]
    fn test_match_label_requires_exact_selected_label() {
        let selection = StatusSelection::parse("0");
        assert_eq!(selection.match_label("To Do"), Some(StatusKey::Todo));
        assert_eq!(selection.match_label("完了"), None);
        assert_eq!(selection.match_label("to do"), None);
        assert_eq!(selection.match_label("Backlog"), None);
    }

    struct ScriptedPrompt {
        answers: Vec<String>,
    }

    impl Prompt for ScriptedPrompt {
        fn prompt_line(&mut self, _message: &str) -> Result<String> {
            Ok(self.answers.remove(0))
        }

    fn say(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
    }

    #[test]
    fn test_prompt_selection_reads_one_line() {
        let mut prompt = ScriptedPrompt {
            answers: vec!["1".to_string()],
        };
        let selection = prompt_selection(&mut prompt).unwrap();
        assert_eq!(selection.labels(), vec!["進行中"]);
    }

    #[test]
    fn test_render_catalog_lists_indices() {
        let rendered = render_catalog();
        assert!(rendered.contains("0: To Do"));
        assert!(rendered.contains("1: 進行中"));
        assert!(rendered.contains("2: 完了"));
    }
}
