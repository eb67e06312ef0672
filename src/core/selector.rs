use crate::domain::model::Candidate;
use crate::domain::ports::Prompt;
use crate::utils::error::{InspectorError, Result, Stage};
use crate::utils::text::rjust;

/// 產生候選清單的逐行表示，每次呼叫都會重新產生
pub fn present<C: Candidate>(candidates: &[C], id_width: usize) -> impl Iterator<Item = String> + '_ {
    candidates
        .iter()
        .map(move |c| format!("{}, {}", rjust(&c.id().to_string(), id_width), c.label()))
}

/// 從候選清單中選出一個 id，只接受完全相符的整數
pub fn choose<C: Candidate>(stage: Stage, candidates: &[C], raw_input: &str) -> Result<i64> {
    let input = raw_input.trim();
    let invalid = || InspectorError::InvalidSelection {
        stage,
        input: input.to_string(),
    };

    let id: i64 = input.parse().map_err(|_| invalid())?;
    if candidates.iter().any(|c| c.id() == id) {
        Ok(id)
    } else {
        Err(invalid())
    }
}

pub fn prompt_choice<C: Candidate, P: Prompt>(
    stage: Stage,
    candidates: &[C],
    prompt: &mut P,
) -> Result<i64> {
    if candidates.is_empty() {
        return Err(InspectorError::InvalidSelection {
            stage,
            input: String::new(),
        });
    }

    let message = match stage {
        Stage::Board => "ボードidを選択してください：",
        Stage::Epic => "エピックidを選択してください：",
        Stage::Ticket => "チケットを選択してください：",
    };
    let raw = prompt.prompt_line(message)?;
    let id = choose(stage, candidates, &raw)?;
    tracing::debug!("Selected {} id {}", stage, id);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Board;

    fn boards() -> Vec<Board> {
        vec![
            Board {
                id: 1,
                display_name: "Alpha".to_string(),
            },
            Board {
                id: 5,
                display_name: "Beta".to_string(),
            },
        ]
    }

    #[test]
    fn test_present_right_justifies_ids() {
        let lines: Vec<String> = present(&boards(), 3).collect();
        assert_eq!(lines, vec!["  1, Alpha", "  5, Beta"]);
    }

    #[test]
    fn test_choose_existing_id() {
        assert_eq!(choose(Stage::Board, &boards(), "5").unwrap(), 5);
        assert_eq!(choose(Stage::Board, &boards(), " 1\n").unwrap(), 1);
    }

    #[test]
    fn test_choose_absent_id_is_invalid() {
        let err = choose(Stage::Board, &boards(), "3").unwrap_err();
        assert!(matches!(
            err,
            InspectorError::InvalidSelection {
                stage: Stage::Board,
                ..
            }
        ));
    }

    #[test]
    fn test_choose_rejects_non_numeric_and_partial() {
        assert!(choose(Stage::Board, &boards(), "").is_err());
        assert!(choose(Stage::Board, &boards(), "5a").is_err());
        assert!(choose(Stage::Board, &boards(), "Beta").is_err());
    }

    #[test]
    fn test_choose_from_empty_candidates() {
        let empty: Vec<Board> = Vec::new();
        assert!(choose(Stage::Board, &empty, "1").is_err());
    }

    struct FixedPrompt(&'static str);

    impl Prompt for FixedPrompt {
        fn prompt_line(&mut self, _message: &str) -> Result<String> {
            Ok(self.0.to_string())
        }

    fn say(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
    }

    #[test]
    fn test_prompt_choice_skips_prompt_for_empty_candidates() {
        let empty: Vec<Board> = Vec::new();
        let mut prompt = FixedPrompt("1");
        assert!(prompt_choice(Stage::Epic, &empty, &mut prompt).is_err());
    }

    #[test]
    fn test_prompt_choice_returns_selected_id() {
        let mut prompt = FixedPrompt("1");
        assert_eq!(prompt_choice(Stage::Board, &boards(), &mut prompt).unwrap(), 1);
    }
}
