use crate::core::aggregate::aggregate;
use crate::core::report::Reporter;
use crate::core::selector::prompt_choice;
use crate::core::session::Session;
use crate::core::status::{prompt_selection, StatusSelection};
use crate::domain::model::{AggregationResult, Ticket};
use crate::domain::ports::{Prompt, Transport};
use crate::utils::error::{InspectorError, Result, Stage};
use std::io::Write;

/// 一次下鑽的結果
#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub board_id: i64,
    pub epic_id: i64,
    pub selection: StatusSelection,
    pub tickets: Vec<Ticket>,
    pub result: AggregationResult,
}

/// 依序執行 board → epic → ticket → 狀態篩選 → 報表
pub struct Inspector<T: Transport, P: Prompt, W: Write> {
    session: Session<T>,
    prompt: P,
    reporter: Reporter<W>,
}

impl<T: Transport, P: Prompt, W: Write> Inspector<T, P, W> {
    pub fn new(session: Session<T>, prompt: P, out: W) -> Self {
        Self {
            session,
            prompt,
            reporter: Reporter::new(out),
        }
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.reporter.into_inner()
    }

    pub async fn run(&mut self) -> Result<Inspection> {
        tracing::info!("Starting drill-down as {}", self.session.credential().email());

        // Board
        if let Err(e) = self.session.fetch_boards().await.map(|_| ()) {
            return self.terminal(Stage::Board, e);
        }
        self.reporter.boards(self.session.boards())?;
        let board_id = prompt_choice(Stage::Board, self.session.boards(), &mut self.prompt)?;

        // Epic
        if let Err(e) = self.session.fetch_epics(board_id).await.map(|_| ()) {
            return self.terminal(Stage::Epic, e);
        }
        self.reporter.epics(self.session.epics())?;
        let epic_id = prompt_choice(Stage::Epic, self.session.epics(), &mut self.prompt)?;

        // Ticket
        if let Err(e) = self.session.fetch_tickets(board_id, epic_id).await.map(|_| ()) {
            return self.terminal(Stage::Ticket, e);
        }

        self.reporter.status_catalog()?;
        let selection = prompt_selection(&mut self.prompt)?;

        let (filtered, result) = aggregate(self.session.tickets(), &selection);
        self.reporter.report(&filtered, &selection, &result)?;

        tracing::info!(
            "Reported {} of {} tickets ({} SP)",
            result.overall.count,
            self.session.tickets().len(),
            result.overall.sp_sum
        );

        Ok(Inspection {
            board_id,
            epic_id,
            selection,
            tickets: filtered,
            result,
        })
    }

    /// 取得結果為空時只輸出一行訊息，流程在此結束
    fn terminal<R>(&mut self, stage: Stage, err: InspectorError) -> Result<R> {
        if matches!(err, InspectorError::EmptyResult { .. }) {
            self.reporter.no_results(stage)?;
        }
        Err(err)
    }
}
