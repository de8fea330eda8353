use super::{
    analysis_panel::AnalysisPanel, formation_panel::FormationPanel, pitch_view::PitchView,
    timeline::Timeline, toolbar::Toolbar,
};
use crate::model::{BoardAction, BoardState, SavedFormation, Tool};
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

const SAVED_FORMATIONS_KEY: &str = "tb_saved_formations";

fn shortcut_tool(key: &str) -> Option<Tool> {
    match key {
        "v" => Some(Tool::Select),
        "p" => Some(Tool::Pass),
        "r" => Some(Tool::Run),
        "z" => Some(Tool::Zone),
        "s" => Some(Tool::Shape),
        "m" => Some(Tool::Measure),
        _ => None,
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let board = use_reducer(BoardState::new);

    // Load persisted saved formations
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(SAVED_FORMATIONS_KEY) {
                        if let Ok(list) = serde_json::from_str::<Vec<SavedFormation>>(&raw) {
                            clog(&format!("restored {} saved formations", list.len()));
                            board.dispatch(BoardAction::RestoreSaved(list));
                        }
                    }
                }
            }
            || ()
        });
    }
    // Persist saved-formation changes
    {
        let board = board.clone();
        use_effect_with(board.saved.clone(), move |saved| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(saved) {
                        let _ = store.set_item(SAVED_FORMATIONS_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    // Keyboard shortcuts for tool switching
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let key_cb = {
                let board = board.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.ctrl_key() || e.meta_key() || e.alt_key() {
                        return;
                    }
                    // Typing in the save-name field must not switch tools.
                    if let Some(target) = e.target() {
                        if let Some(el) = target.dyn_ref::<web_sys::HtmlElement>() {
                            let tag = el.tag_name().to_lowercase();
                            if tag == "input" || tag == "select" || tag == "textarea" {
                                return;
                            }
                        }
                    }
                    if let Some(tool) = shortcut_tool(&e.key().to_lowercase()) {
                        board.dispatch(BoardAction::SelectTool(tool));
                        e.prevent_default();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    key_cb.as_ref().unchecked_ref(),
                );
                drop(key_cb);
            }
        });
    }

    html! {<div style="display:flex; flex-direction:column; gap:10px; padding:12px; max-width:1200px; margin:0 auto; color:#c9d1d9; background:#0d1117; min-height:100vh; box-sizing:border-box;">
        <Toolbar board={board.clone()} />
        <div style="display:flex; gap:10px; align-items:flex-start;">
            <div style="flex:1; min-width:0;">
                <PitchView board={board.clone()} />
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <FormationPanel board={board.clone()} />
                <AnalysisPanel board={board.clone()} />
            </div>
        </div>
        <Timeline board={board.clone()} />
    </div>}
}
