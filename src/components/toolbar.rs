use crate::model::{BoardAction, BoardState, Tool};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToolbarProps {
    pub board: UseReducerHandle<BoardState>,
}

const TOOLS: [(Tool, &str); 6] = [
    (Tool::Select, "V"),
    (Tool::Pass, "P"),
    (Tool::Run, "R"),
    (Tool::Zone, "Z"),
    (Tool::Shape, "S"),
    (Tool::Measure, "M"),
];

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let board = props.board.clone();

    let tool_button = |tool: Tool, key: &str| {
        let active = match tool {
            // The shape tool is an overlay toggle, not a mode.
            Tool::Shape => board.show_team_shape,
            t => board.active_tool == t,
        };
        let onclick = {
            let board = board.clone();
            Callback::from(move |_| board.dispatch(BoardAction::SelectTool(tool)))
        };
        let style = if active {
            "background:#1f6feb; color:#fff; border:1px solid #1f6feb; border-radius:6px; padding:4px 10px;"
        } else {
            "background:#21262d; color:#c9d1d9; border:1px solid #30363d; border-radius:6px; padding:4px 10px;"
        };
        html! {
            <button {onclick} {style} title={format!("{} ({key})", tool.label())}>
                { tool.label() }
                <span style="font-size:10px; opacity:0.6; margin-left:4px;">{ key.to_string() }</span>
            </button>
        }
    };

    let undo_cb = {
        let board = board.clone();
        Callback::from(move |_| board.dispatch(BoardAction::Undo))
    };
    let clear_cb = {
        let board = board.clone();
        Callback::from(move |_| board.dispatch(BoardAction::ClearBoard))
    };

    html! {<div style="display:flex; gap:6px; align-items:center; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
        { for TOOLS.iter().map(|&(tool, key)| tool_button(tool, key)) }
        <span style="width:1px; align-self:stretch; background:#30363d;"></span>
        <button onclick={undo_cb} disabled={board.elements.is_empty()}>{"Undo"}</button>
        <button onclick={clear_cb}>{"Clear"}</button>
    </div>}
}
