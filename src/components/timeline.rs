//! Frame timeline: snapshot strip, playback transport, and the interval that
//! drives automatic advancement.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::model::{BoardAction, BoardState, PlaybackSpeed};

#[derive(Properties, PartialEq, Clone)]
pub struct TimelineProps {
    pub board: UseReducerHandle<BoardState>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    let board = props.board.clone();

    // The interval is rebuilt whenever playback state, speed, or the frame
    // count changes, and torn down when playback stops or the panel unmounts.
    {
        let board = board.clone();
        let key = (board.playing, board.speed, board.frames.len());
        use_effect_with(key, move |(playing, speed, frame_count)| {
            let mut interval_id = None;
            if *playing && *frame_count > 0 {
                if let Some(window) = web_sys::window() {
                    let tick = {
                        let board = board.clone();
                        Closure::wrap(Box::new(move || {
                            board.dispatch(BoardAction::Advance);
                        }) as Box<dyn FnMut()>)
                    };
                    if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        speed.interval_ms(),
                    ) {
                        interval_id = Some((window, id, tick));
                    }
                }
            }
            move || {
                if let Some((window, id, tick)) = interval_id {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    let add_frame = {
        let board = board.clone();
        Callback::from(move |_| {
            board.dispatch(BoardAction::SetPlaying(false));
            board.dispatch(BoardAction::AddFrame);
        })
    };
    let step = |delta: i64| {
        let board = board.clone();
        Callback::from(move |_| {
            if board.frames.is_empty() {
                return;
            }
            let len = board.frames.len() as i64;
            let index = (board.current_frame as i64 + delta).rem_euclid(len) as usize;
            board.dispatch(BoardAction::SetPlaying(false));
            board.dispatch(BoardAction::Playback { index });
        })
    };
    let toggle_play = {
        let board = board.clone();
        Callback::from(move |_| board.dispatch(BoardAction::SetPlaying(!board.playing)))
    };
    let on_speed = {
        let board = board.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                let speed = match select.value().as_str() {
                    "0.5" => PlaybackSpeed::Half,
                    "2" => PlaybackSpeed::Double,
                    _ => PlaybackSpeed::Normal,
                };
                board.dispatch(BoardAction::SetSpeed(speed));
            }
        })
    };

    let frame_buttons = board.frames.iter().enumerate().map(|(index, _)| {
        let active = index == board.current_frame;
        let onclick = {
            let board = board.clone();
            Callback::from(move |_| {
                board.dispatch(BoardAction::SetPlaying(false));
                board.dispatch(BoardAction::Playback { index });
            })
        };
        let style = if active {
            "background:#1f6feb; color:#fff; border:1px solid #1f6feb; border-radius:4px; min-width:28px;"
        } else {
            "background:#21262d; color:#c9d1d9; border:1px solid #30363d; border-radius:4px; min-width:28px;"
        };
        html! { <button {onclick} {style}>{ index + 1 }</button> }
    });

    let no_frames = board.frames.is_empty();
    html! {<div style="display:flex; flex-direction:column; gap:6px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px;">
        <div style="display:flex; gap:4px; flex-wrap:wrap; min-height:24px;">
            { for frame_buttons }
            { if no_frames { html!{ <span style="font-size:11px; opacity:0.6;">{"No frames yet"}</span> } } else { html!{} } }
        </div>
        <div style="display:flex; gap:6px; align-items:center;">
            <button onclick={add_frame}>{"+ Frame"}</button>
            <button onclick={step(-1)} disabled={no_frames}>{"|<"}</button>
            <button onclick={toggle_play} disabled={no_frames}>
                { if board.playing { "Pause" } else { "Play" } }
            </button>
            <button onclick={step(1)} disabled={no_frames}>{">|"}</button>
            <select onchange={on_speed}>
                <option value="0.5" selected={board.speed == PlaybackSpeed::Half}>{ PlaybackSpeed::Half.label() }</option>
                <option value="1" selected={board.speed == PlaybackSpeed::Normal}>{ PlaybackSpeed::Normal.label() }</option>
                <option value="2" selected={board.speed == PlaybackSpeed::Double}>{ PlaybackSpeed::Double.label() }</option>
            </select>
        </div>
    </div>}
}
