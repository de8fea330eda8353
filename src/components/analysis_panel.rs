use yew::prelude::*;

use crate::model::{BoardAction, BoardState};

#[derive(Properties, PartialEq, Clone)]
pub struct AnalysisPanelProps {
    pub board: UseReducerHandle<BoardState>,
}

#[function_component(AnalysisPanel)]
pub fn analysis_panel(props: &AnalysisPanelProps) -> Html {
    let board = props.board.clone();

    let toggle_heatmap = {
        let board = board.clone();
        Callback::from(move |_| board.dispatch(BoardAction::ToggleHeatmap))
    };
    let clear_heatmap = {
        let board = board.clone();
        Callback::from(move |_| board.dispatch(BoardAction::ClearHeatmap))
    };

    let toggle_style = if board.show_heatmap {
        "background:#1f6feb; color:#fff; border:1px solid #1f6feb; border-radius:6px; padding:4px 10px;"
    } else {
        "background:#21262d; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:4px 10px;"
    };

    html! {<div style="display:flex; flex-direction:column; gap:6px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:140px;">
        <div style="font-size:12px; font-weight:bold;">{"Analysis"}</div>
        <button onclick={toggle_heatmap} style={toggle_style}>
            { if board.show_heatmap { "Heatmap On" } else { "Heatmap Off" } }
        </button>
        <button onclick={clear_heatmap}>{"Clear Heatmap"}</button>
        <div style="font-size:11px; opacity:0.7; line-height:1.3;">
            {"Drag players to record movement. Hotter cells mark longer dwell."}
        </div>
    </div>}
}
