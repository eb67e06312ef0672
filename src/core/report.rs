use crate::core::selector::present;
use crate::core::status::{render_catalog, StatusSelection};
use crate::domain::model::{AggregationResult, Board, Candidate, Epic, StatusKey, Tally, Ticket};
use crate::utils::error::{no_results_message, Result, Stage};
use crate::utils::text::rjust;
use std::io::Write;

const RULE_WIDTH: usize = 40;
const BOARD_ID_WIDTH: usize = 3;
const EPIC_ID_WIDTH: usize = 6;
const TICKET_KEY_WIDTH: usize = 7;
const STATUS_WIDTH: usize = 6;
const SP_WIDTH: usize = 2;

fn heading(title: &str, header: String) -> Vec<String> {
    vec![
        "=".repeat(RULE_WIDTH),
        title.to_string(),
        "-".repeat(RULE_WIDTH),
        header,
        "=".repeat(RULE_WIDTH),
    ]
}

fn render_listing<C: Candidate>(
    stage: Stage,
    title: &str,
    label_header: &str,
    candidates: &[C],
    id_width: usize,
) -> String {
    if candidates.is_empty() {
        return no_results_message(stage).to_string();
    }

    let mut lines = heading(title, format!("{}, {}", rjust("id", id_width), label_header));
    lines.extend(present(candidates, id_width));
    lines.join("\n")
}

pub fn render_boards(boards: &[Board]) -> String {
    render_listing(Stage::Board, "ボード一覧", "ボード名", boards, BOARD_ID_WIDTH)
}

pub fn render_epics(epics: &[Epic]) -> String {
    render_listing(Stage::Epic, "エピック一覧", "エピック名", epics, EPIC_ID_WIDTH)
}

fn ticket_row(ticket: &Ticket) -> String {
    format!(
        "{}, {}, {}, {}",
        rjust(&ticket.key, TICKET_KEY_WIDTH),
        rjust(&ticket.status_name, STATUS_WIDTH),
        rjust(&ticket.story_points.to_string(), SP_WIDTH),
        ticket.summary
    )
}

/// 最終報表：票券表格、總件數、各狀態件數、SP 合計、各狀態 SP
pub fn render_report(
    filtered: &[Ticket],
    selection: &StatusSelection,
    result: &AggregationResult,
) -> String {
    let header = format!(
        "{}, {}, {}, {}",
        rjust("番号", TICKET_KEY_WIDTH),
        rjust("状態", STATUS_WIDTH),
        rjust("SP", SP_WIDTH),
        "チケット名"
    );
    let mut lines = heading("チケット一覧", header);
    lines.extend(filtered.iter().map(ticket_row));
    lines.push("-".repeat(RULE_WIDTH));

    let tally = |key: StatusKey| -> Tally {
        result.per_status.get(&key).copied().unwrap_or_default()
    };

    lines.push(format!("チケット合計：{}件", result.overall.count));
    for key in selection.keys() {
        lines.push(format!(
            "  {}：{}件",
            rjust(key.label(), STATUS_WIDTH),
            tally(key).count
        ));
    }

    lines.push(format!("SP合計：{}", result.overall.sp_sum));
    for key in selection.keys() {
        lines.push(format!(
            "  {}：{}",
            rjust(key.label(), STATUS_WIDTH),
            tally(key).sp_sum
        ));
    }

    lines.join("\n")
}

/// 將各階段的表格寫到輸出
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn boards(&mut self, boards: &[Board]) -> Result<()> {
        self.emit(&render_boards(boards))
    }

    pub fn epics(&mut self, epics: &[Epic]) -> Result<()> {
        self.emit(&render_epics(epics))
    }

    pub fn no_results(&mut self, stage: Stage) -> Result<()> {
        self.emit(no_results_message(stage))
    }

    pub fn status_catalog(&mut self) -> Result<()> {
        self.emit(&render_catalog())
    }

    pub fn report(
        &mut self,
        filtered: &[Ticket],
        selection: &StatusSelection,
        result: &AggregationResult,
    ) -> Result<()> {
        self.emit(&render_report(filtered, selection, result))
    }
}
