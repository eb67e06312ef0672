use crate::core::{Credential, Prompt};
use crate::utils::error::{InspectorError, Result};
use std::path::Path;

/// 認證檔中讀到的值，可能缺少 email 或 token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFile {
    pub email: Option<String>,
    pub token: Option<String>,
}

impl CredentialFile {
    /// 讀取 key=value 格式的認證檔
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            InspectorError::ConfigError {
                message: format!(
                    "認証情報ファイル'{}'を準備してください。",
                    path.file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                ),
            }
        })?;
        Ok(Self::parse(&content))
    }

    /// 只以第一個 '=' 分隔，token 內可以含有 '='
    pub fn parse(content: &str) -> Self {
        let mut file = Self::default();
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                "email" => file.email = non_empty(value),
                "token" => file.token = non_empty(value),
                _ => {}
            }
        }
        file
    }

    pub fn is_complete(&self) -> bool {
        self.email.is_some() && self.token.is_some()
    }

    /// 缺少的欄位改由互動輸入補齊，空白回答會重新詢問
    pub fn resolve<P: Prompt>(mut self, prompt: &mut P) -> Result<Credential> {
        if !self.is_complete() {
            tracing::info!("Credential file is incomplete, asking interactively");
            prompt.say("JIRAアカウント情報を入力してください。")?;
        }

        loop {
            if self.email.is_none() {
                self.email = non_empty(&prompt.prompt_line("email:")?);
            }
            if self.token.is_none() {
                self.token = non_empty(&prompt.prompt_line("API token:")?);
            }
            if let (Some(email), Some(token)) = (&self.email, &self.token) {
                return Ok(Credential::new(email.as_str(), token.as_str()));
            }
            prompt.say("正しく入力してください。")?;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct ScriptedPrompt {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
        said: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Vec::new(),
                said: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn prompt_line(&mut self, message: &str) -> Result<String> {
            self.asked.push(message.to_string());
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| InspectorError::InputClosed {
                    what: message.to_string(),
                })
        }

        fn say(&mut self, message: &str) -> Result<()> {
            self.said.push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_parse_key_value_lines() {
        let file = CredentialFile::parse("email=dev@example.com\n\n# comment\ntoken=abc=def==\nother=1\n");
        assert_eq!(file.email.as_deref(), Some("dev@example.com"));
        assert_eq!(file.token.as_deref(), Some("abc=def=="));
        assert!(file.is_complete());
    }

    #[test]
    fn test_later_duplicates_win_and_empty_values_are_missing() {
        let file = CredentialFile::parse("email=old@example.com\nemail=new@example.com\ntoken=\n");
        assert_eq!(file.email.as_deref(), Some("new@example.com"));
        assert_eq!(file.token, None);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"email=dev@example.com\ntoken=s3cr3t\n")
            .unwrap();

        let file = CredentialFile::from_file(temp_file.path()).unwrap();
        assert!(file.is_complete());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = CredentialFile::from_file("/nonexistent/dir/token.txt").unwrap_err();
        match err {
            InspectorError::ConfigError { message } => {
                assert_eq!(message, "認証情報ファイル'token.txt'を準備してください。");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_complete_file_does_not_prompt() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let credential = CredentialFile::parse("email=a@b.c\ntoken=t")
            .resolve(&mut prompt)
            .unwrap();
        assert_eq!(credential.email(), "a@b.c");
        assert_eq!(credential.token(), "t");
        assert!(prompt.asked.is_empty());
        assert!(prompt.said.is_empty());
    }

    #[test]
    fn test_prompts_only_for_missing_token() {
        let mut prompt = ScriptedPrompt::new(&["typed-token"]);
        let credential = CredentialFile::parse("email=a@b.c")
            .resolve(&mut prompt)
            .unwrap();
        assert_eq!(credential.token(), "typed-token");
        assert_eq!(prompt.asked, vec!["API token:"]);
    }

    #[test]
    fn test_blank_answers_are_asked_again() {
        let mut prompt = ScriptedPrompt::new(&["", "tok", "a@b.c"]);
        let credential = CredentialFile::default().resolve(&mut prompt).unwrap();
        assert_eq!(credential.email(), "a@b.c");
        assert_eq!(credential.token(), "tok");
        assert_eq!(prompt.asked, vec!["email:", "API token:", "email:"]);
        assert_eq!(
            prompt.said,
            vec!["JIRAアカウント情報を入力してください。", "正しく入力してください。"]
        );
    }

    #[test]
    fn test_notices_go_through_prompt_output() {
        let mut prompt =
            crate::adapters::StdinPrompt::with_io(std::io::Cursor::new("a@b.c\ntok\n"), Vec::new());
        CredentialFile::default().resolve(&mut prompt).unwrap();
        let mut expected = String::from("JIRAアカウント情報を入力してください。\n");
        expected.push_str("email:API token:");
        assert_eq!(prompt.into_output(), expected.into_bytes());
    }

    #[test]
    fn test_closed_input_while_prompting() {
        let mut prompt = ScriptedPrompt::new(&[]);
        assert!(matches!(
            CredentialFile::default().resolve(&mut prompt),
            Err(InspectorError::InputClosed { .. })
        ));
    }
}
