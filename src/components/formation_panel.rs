use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::formations::FORMATIONS;
use crate::model::{BoardAction, BoardState};

#[derive(Properties, PartialEq, Clone)]
pub struct FormationPanelProps {
    pub board: UseReducerHandle<BoardState>,
}

#[function_component(FormationPanel)]
pub fn formation_panel(props: &FormationPanelProps) -> Html {
    let board = props.board.clone();
    let name_ref = use_node_ref();

    let on_preset = {
        let board = board.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                board.dispatch(BoardAction::LoadFormation {
                    name: select.value(),
                });
            }
        })
    };

    let on_save = {
        let board = board.clone();
        let name_ref = name_ref.clone();
        Callback::from(move |_| {
            let Some(input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = input.value().trim().to_string();
            if name.is_empty() {
                return;
            }
            board.dispatch(BoardAction::SaveFormation { name });
            input.set_value("");
        })
    };

    let saved_rows = board.saved.iter().enumerate().map(|(index, sf)| {
        let onclick = {
            let board = board.clone();
            Callback::from(move |_| board.dispatch(BoardAction::LoadSaved { index }))
        };
        html! {
            <div style="display:flex; justify-content:space-between; align-items:center; gap:6px;">
                <span style="font-size:12px; overflow:hidden; text-overflow:ellipsis;">{ sf.name.clone() }</span>
                <button {onclick}>{"Load"}</button>
            </div>
        }
    });

    html! {<div style="display:flex; flex-direction:column; gap:6px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:180px;">
        <div style="font-size:12px; font-weight:bold;">{"Formation"}</div>
        <select onchange={on_preset}>
            { for FORMATIONS.iter().map(|(name, _)| html! {
                <option value={*name} selected={board.current_formation == *name}>{ *name }</option>
            }) }
        </select>
        <div style="display:flex; gap:4px;">
            <input ref={name_ref} type="text" placeholder="Save as..." style="flex:1; min-width:0;" />
            <button onclick={on_save}>{"Save"}</button>
        </div>
        { if board.saved.is_empty() {
            html!{ <div style="font-size:11px; opacity:0.6;">{"No saved formations"}</div> }
        } else {
            html!{ <div style="display:flex; flex-direction:column; gap:4px; max-height:140px; overflow-y:auto;">{ for saved_rows }</div> }
        } }
    </div>}
}
