//! The pitch canvas: renders the board and feeds mouse/touch input through
//! the coordinate mapper into the reducer.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, TouchEvent};
use yew::prelude::*;

use crate::geometry::{Bounds, PitchSpace, Point, angle_degrees, bounding_box, midpoint};
use crate::heatmap;
use crate::model::{BoardAction, BoardState, ElementKind, TacticalElement, Tool, team_shape_segments};
use crate::util::format_distance;

#[derive(Properties, PartialEq, Clone)]
pub struct PitchViewProps {
    pub board: UseReducerHandle<BoardState>,
}

fn cursor_for(tool: Tool) -> &'static str {
    match tool {
        Tool::Select => "default",
        Tool::Shape => "pointer",
        _ => "crosshair",
    }
}

fn client_bounds(canvas: &HtmlCanvasElement) -> Bounds {
    let rect = canvas.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn draw_arrow(
    ctx: &CanvasRenderingContext2d,
    space: PitchSpace,
    bounds: Bounds,
    el: &TacticalElement,
) {
    let (x1, y1) = space.to_client(bounds, el.start);
    let (x2, y2) = space.to_client(bounds, el.end);
    let (color, dashed, width) = match el.kind {
        ElementKind::Pass => ("rgba(255, 255, 255, 1)", true, 2.0),
        _ => ("rgba(255, 255, 0, 1)", false, 3.0),
    };
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    if dashed {
        let dash = js_sys::Array::of2(&6.0.into(), &6.0.into());
        ctx.set_line_dash(&dash).ok();
    }
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new()).ok();

    // Arrowhead aligned with the line.
    let angle = angle_degrees(Point::new(x1, y1), Point::new(x2, y2)).to_radians();
    let size = 9.0;
    ctx.save();
    ctx.translate(x2, y2).ok();
    ctx.rotate(angle).ok();
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.move_to(0.0, 0.0);
    ctx.line_to(-size, -size * 0.5);
    ctx.line_to(-size * 0.6, 0.0);
    ctx.line_to(-size, size * 0.5);
    ctx.close_path();
    ctx.fill();
    ctx.restore();
}

fn draw_zone(
    ctx: &CanvasRenderingContext2d,
    space: PitchSpace,
    bounds: Bounds,
    el: &TacticalElement,
) {
    let rect = bounding_box(el.start, el.end);
    let (x, y) = space.to_client(bounds, Point::new(rect.left, rect.top));
    let content = space.content_rect(bounds);
    let w = rect.width / space.width * content.width;
    let h = rect.height / space.height * content.height;
    ctx.set_fill_style_str("rgba(255, 255, 0, 0.2)");
    ctx.fill_rect(x, y, w, h);
    ctx.set_stroke_style_str("rgba(255, 255, 0, 0.8)");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(x, y, w, h);
}

fn draw_measurement(
    ctx: &CanvasRenderingContext2d,
    space: PitchSpace,
    bounds: Bounds,
    el: &TacticalElement,
) {
    let (x1, y1) = space.to_client(bounds, el.start);
    let (x2, y2) = space.to_client(bounds, el.end);
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();

    let label = format_distance(el.start, el.end);
    let (mx, my) = space.to_client(bounds, midpoint(el.start, el.end));
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.6)");
    ctx.fill_rect(mx - 22.0, my - 10.0, 44.0, 20.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&label, mx, my).ok();
}

fn draw_pitch_markings(ctx: &CanvasRenderingContext2d, space: PitchSpace, bounds: Bounds) {
    let content = space.content_rect(bounds);
    ctx.set_fill_style_str("#15803d");
    ctx.fill_rect(content.left, content.top, content.width, content.height);

    ctx.set_stroke_style_str("#ffffff");
    ctx.set_line_width(2.0);
    ctx.stroke_rect(content.left, content.top, content.width, content.height);

    let line = |a: Point, b: Point| {
        let (x1, y1) = space.to_client(bounds, a);
        let (x2, y2) = space.to_client(bounds, b);
        ctx.begin_path();
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        ctx.stroke();
    };
    let rect = |p: Point, w: f64, h: f64| {
        let (x, y) = space.to_client(bounds, p);
        ctx.stroke_rect(
            x,
            y,
            w / space.width * content.width,
            h / space.height * content.height,
        );
    };

    // Halfway line and center circle.
    line(
        Point::new(space.width / 2.0, 0.0),
        Point::new(space.width / 2.0, space.height),
    );
    let (cx, cy) = space.to_client(bounds, Point::new(space.width / 2.0, space.height / 2.0));
    ctx.begin_path();
    ctx.arc(cx, cy, content.width * 0.08, 0.0, std::f64::consts::PI * 2.0)
        .ok();
    ctx.stroke();

    // Penalty and goal areas on both ends (percent-space approximations).
    let py = space.height * 0.22;
    let ph = space.height * 0.56;
    let gy = space.height * 0.36;
    let gh = space.height * 0.28;
    rect(Point::new(0.0, py), space.width * 0.16, ph);
    rect(Point::new(0.0, gy), space.width * 0.06, gh);
    rect(Point::new(space.width * 0.84, py), space.width * 0.16, ph);
    rect(Point::new(space.width * 0.94, gy), space.width * 0.06, gh);
}

fn draw_board(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, rs: &BoardState) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    let bounds = Bounds::new(0.0, 0.0, w, h);
    let space = rs.space;

    ctx.set_fill_style_str("#0e1116");
    ctx.fill_rect(0.0, 0.0, w, h);
    draw_pitch_markings(ctx, space, bounds);
    let content = space.content_rect(bounds);

    if rs.show_heatmap {
        for cell in heatmap::aggregate(&rs.players, space, heatmap::GRID_SIZE) {
            let (x, y) = space.to_client(bounds, Point::new(cell.x, cell.y));
            ctx.set_fill_style_str(&heatmap::heat_css(cell.intensity));
            ctx.fill_rect(
                x,
                y,
                cell.width / space.width * content.width,
                cell.height / space.height * content.height,
            );
        }
    }

    if rs.show_team_shape {
        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.25)");
        ctx.set_line_width(3.0);
        for (a, b) in team_shape_segments(&rs.players) {
            let (x1, y1) = space.to_client(bounds, a);
            let (x2, y2) = space.to_client(bounds, b);
            ctx.begin_path();
            ctx.move_to(x1, y1);
            ctx.line_to(x2, y2);
            ctx.stroke();
        }
    }

    for el in rs.elements.iter().chain(rs.current.iter()) {
        match el.kind {
            ElementKind::Zone => draw_zone(ctx, space, bounds, el),
            ElementKind::Measure => draw_measurement(ctx, space, bounds, el),
            ElementKind::Pass | ElementKind::Run => draw_arrow(ctx, space, bounds, el),
        }
    }

    // Players: shirt circle plus role tag.
    let radius = (content.width * 0.016).max(8.0);
    for p in &rs.players {
        let (x, y) = space.to_client(bounds, p.position);
        ctx.begin_path();
        ctx.set_fill_style_str("#3b82f6");
        ctx.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0).ok();
        ctx.fill();
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(2.0);
        ctx.stroke();
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 11px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&p.id.to_string(), x, y).ok();
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
        ctx.fill_rect(x + radius + 2.0, y - 7.0, 24.0, 14.0);
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("9px sans-serif");
        ctx.fill_text(p.role(), x + radius + 14.0, y).ok();
    }

    if let Some(current) = &rs.current {
        let msg = match current.kind {
            ElementKind::Pass => "Drawing Pass...",
            ElementKind::Run => "Drawing Run...",
            ElementKind::Zone => "Creating Zone...",
            ElementKind::Measure => "Measuring Distance...",
        };
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
        ctx.fill_rect(w / 2.0 - 70.0, 8.0, 140.0, 22.0);
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(msg, w / 2.0, 19.0).ok();
    }
}

#[function_component(PitchView)]
pub fn pitch_view(props: &PitchViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let board_ref = use_mut_ref(|| props.board.clone());

    // Refresh the stored handle and redraw whenever the board changes.
    {
        let board_ref = board_ref.clone();
        let current_handle = props.board.clone();
        let draw_ref_local = draw_ref.clone();
        let version = props.board.version;
        use_effect_with(version, move |_| {
            *board_ref.borrow_mut() = current_handle.clone();
            if let Some(f) = &*draw_ref_local.borrow() {
                f();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let board = props.board.clone();
        let board_ref_setup = board_ref.clone();
        let draw_ref_setup = draw_ref.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let apply_canvas_size = {
                let canvas = canvas.clone();
                move || {
                    let w = canvas.client_width().max(0) as u32;
                    let h = canvas.client_height().max(0) as u32;
                    canvas.set_width(w);
                    canvas.set_height(h);
                }
            };
            apply_canvas_size();

            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let board_ref = board_ref_setup.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let ctx = match canvas.get_context("2d").ok().flatten() {
                        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
                            Ok(c) => c,
                            Err(_) => return,
                        },
                        None => return,
                    };
                    let handle = board_ref.borrow();
                    let rs = (**handle).clone();
                    draw_board(&ctx, &canvas, &rs);
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Mouse input. Down/move stay on the canvas, up goes on the
            // window so releases outside the pitch still end the gesture.
            let mousedown_cb = {
                let canvas = canvas.clone();
                let board = board.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let space = board.space;
                    let point = space.from_client(
                        client_bounds(&canvas),
                        e.client_x() as f64,
                        e.client_y() as f64,
                    );
                    board.dispatch(BoardAction::PointerDown { point });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
                .unwrap();

            let mousemove_cb = {
                let canvas = canvas.clone();
                let board_ref = board_ref_setup.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let handle = board_ref.borrow().clone();
                    // Idle moves never touch the reducer.
                    if handle.dragged.is_none() && handle.current.is_none() {
                        return;
                    }
                    let space = handle.space;
                    let point = space.from_client(
                        client_bounds(&canvas),
                        e.client_x() as f64,
                        e.client_y() as f64,
                    );
                    handle.dispatch(BoardAction::PointerMove {
                        point,
                        at: js_sys::Date::now(),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
                .unwrap();

            let mouseup_cb = {
                let board_ref = board_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let handle = board_ref.borrow().clone();
                    if handle.dragged.is_some() || handle.current.is_some() {
                        handle.dispatch(BoardAction::PointerUp);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .unwrap();

            // Leaving the pitch behaves exactly like pointer-up.
            let mouseleave_cb = {
                let board_ref = board_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let handle = board_ref.borrow().clone();
                    if handle.dragged.is_some() || handle.current.is_some() {
                        handle.dispatch(BoardAction::PointerUp);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Touch input shares the mouse path: same mapper, same actions.
            let touch_start_cb = {
                let canvas = canvas.clone();
                let board = board.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let space = board.space;
                        let point = space.from_client(
                            client_bounds(&canvas),
                            t0.client_x() as f64,
                            t0.client_y() as f64,
                        );
                        board.dispatch(BoardAction::PointerDown { point });
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_move_cb = {
                let canvas = canvas.clone();
                let board_ref = board_ref_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        let handle = board_ref.borrow().clone();
                        if handle.dragged.is_some() || handle.current.is_some() {
                            let space = handle.space;
                            let point = space.from_client(
                                client_bounds(&canvas),
                                t0.client_x() as f64,
                                t0.client_y() as f64,
                            );
                            handle.dispatch(BoardAction::PointerMove {
                                point,
                                at: js_sys::Date::now(),
                            });
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let touch_end_cb = {
                let board_ref = board_ref_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if e.touches().length() == 0 {
                        let handle = board_ref.borrow().clone();
                        if handle.dragged.is_some() || handle.current.is_some() {
                            handle.dispatch(BoardAction::PointerUp);
                        }
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                )
                .ok();

            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &mouseleave_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &resize_cb,
                );
            }
        });
    }

    let cursor = cursor_for(props.board.active_tool);
    html! {
        <canvas
            ref={canvas_ref}
            id="pitch-canvas"
            style={format!("display:block; width:100%; aspect-ratio:16/9; touch-action:none; border-radius:8px; cursor:{};", cursor)}
        ></canvas>
    }
}
