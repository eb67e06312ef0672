use crate::core::status::StatusSelection;
use crate::domain::model::{AggregationResult, Tally, Ticket};

/// 依狀態篩選票券並計算件數與 SP 合計
///
/// 回傳依 key 排序後的篩選結果。不在選擇範圍內的票券完全不列入計算；
/// 每個選擇的狀態都會有一個統計項目，即使件數為 0。
pub fn aggregate(tickets: &[Ticket], selection: &StatusSelection) -> (Vec<Ticket>, AggregationResult) {
    let mut ordered: Vec<&Ticket> = tickets.iter().collect();
    ordered.sort_by(|a, b| a.key.cmp(&b.key));

    let mut result = AggregationResult {
        per_status: selection.keys().map(|key| (key, Tally::default())).collect(),
        overall: Tally::default(),
    };
    let mut filtered = Vec::new();

    for ticket in ordered {
        let Some(key) = selection.match_label(&ticket.status_name) else {
            continue;
        };

        result
            .per_status
            .entry(key)
            .or_default()
            .add(ticket.story_points);
        result.overall.add(ticket.story_points);
        filtered.push(ticket.clone());
    }

    tracing::debug!(
        "Aggregated {} of {} tickets ({} SP)",
        result.overall.count,
        tickets.len(),
        result.overall.sp_sum
    );

    (filtered, result)
}
