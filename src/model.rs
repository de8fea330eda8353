//! Board state for the tactics editor: players, tactical annotations, the
//! frame timeline, and the reducer every input gesture goes through.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::formations::{self, DEFAULT_FORMATION, FormationSlot};
use crate::geometry::{PitchSpace, Point};

/// Per-axis hit radius (in percent space) for picking up a player.
pub const PLAYER_HIT_THRESHOLD: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Select,
    Pass,
    Run,
    Zone,
    Measure,
    Shape,
}

impl Tool {
    /// The annotation a drawing tool produces; `None` for select/shape.
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Tool::Pass => Some(ElementKind::Pass),
            Tool::Run => Some(ElementKind::Run),
            Tool::Zone => Some(ElementKind::Zone),
            Tool::Measure => Some(ElementKind::Measure),
            Tool::Select | Tool::Shape => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "Select & Move",
            Tool::Pass => "Pass Arrow",
            Tool::Run => "Player Run",
            Tool::Zone => "Zone",
            Tool::Measure => "Measure",
            Tool::Shape => "Team Shape",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Pass,
    Run,
    Zone,
    Measure,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TacticalElement {
    pub kind: ElementKind,
    pub start: Point,
    pub end: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds, monotonic per player (insertion order).
    pub timestamp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u8,
    pub position: Point,
    /// Append-only while dragging; cleared on formation load / heatmap clear.
    pub history: Vec<PositionSample>,
}

impl Player {
    pub fn role(&self) -> &'static str {
        formations::role(self.id)
    }
}

/// Independent snapshot of the board; owns deep copies of everything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub players: Vec<Player>,
    pub elements: Vec<TacticalElement>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedFormation {
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackSpeed {
    Half,
    Normal,
    Double,
}

impl PlaybackSpeed {
    pub fn multiplier(self) -> f64 {
        match self {
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Double => 2.0,
        }
    }

    pub fn interval_ms(self) -> i32 {
        (1000.0 / self.multiplier()) as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackSpeed::Half => "0.5x",
            PlaybackSpeed::Normal => "1x",
            PlaybackSpeed::Double => "2x",
        }
    }
}

/// Segments connecting each defensive/midfield/attacking band, used by the
/// team-shape overlay. Bands are thirds of the y axis; players inside a band
/// are joined left to right.
pub fn team_shape_segments(players: &[Player]) -> Vec<(Point, Point)> {
    let bands: [fn(f64) -> bool; 3] = [
        |y| y > 65.0,
        |y| y > 35.0 && y <= 65.0,
        |y| y <= 35.0,
    ];
    let mut segments = Vec::new();
    for band in bands {
        let mut line: Vec<&Player> = players.iter().filter(|p| band(p.position.y)).collect();
        if line.len() < 2 {
            continue;
        }
        line.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        for pair in line.windows(2) {
            segments.push((pair[0].position, pair[1].position));
        }
    }
    segments
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub space: PitchSpace,
    pub players: Vec<Player>,
    pub active_tool: Tool,
    /// Player id currently being dragged (select tool only).
    pub dragged: Option<u8>,
    pub elements: Vec<TacticalElement>,
    /// The element between gesture begin and commit.
    pub current: Option<TacticalElement>,
    pub show_team_shape: bool,
    pub show_heatmap: bool,
    pub current_formation: String,
    pub saved: Vec<SavedFormation>,
    pub frames: Vec<Frame>,
    pub current_frame: usize,
    pub playing: bool,
    pub speed: PlaybackSpeed,
    /// Bumped on every reduce; redraw effects key on it.
    pub version: u64,
}

impl BoardState {
    pub fn new() -> Self {
        let slots = formations::formation(DEFAULT_FORMATION)
            .expect("default formation present");
        Self {
            space: PitchSpace::PERCENT,
            players: players_from_slots(slots),
            active_tool: Tool::Select,
            dragged: None,
            elements: Vec::new(),
            current: None,
            show_team_shape: false,
            show_heatmap: false,
            current_formation: DEFAULT_FORMATION.to_string(),
            saved: Vec::new(),
            frames: Vec::new(),
            current_frame: 0,
            playing: false,
            speed: PlaybackSpeed::Normal,
            version: 0,
        }
    }

    /// Rectangular hit test: both axes within the threshold independently.
    /// Ties resolve to the closest player by Chebyshev distance.
    pub fn nearest_player(&self, point: Point, threshold: f64) -> Option<u8> {
        self.players
            .iter()
            .filter_map(|p| {
                let dx = (p.position.x - point.x).abs();
                let dy = (p.position.y - point.y).abs();
                (dx <= threshold && dy <= threshold).then(|| (p.id, dx.max(dy)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    fn load_slots(&mut self, slots: &[FormationSlot]) {
        self.players = players_from_slots(slots);
        self.dragged = None;
    }

    fn move_player(&mut self, id: u8, point: Point, at: f64) {
        let point = self.space.clamp(point);
        if let Some(p) = self.players.iter_mut().find(|p| p.id == id) {
            p.position = point;
            p.history.push(PositionSample {
                x: point.x,
                y: point.y,
                timestamp: at,
            });
        }
    }

    fn reset_histories(&mut self) {
        for p in &mut self.players {
            p.history.clear();
        }
    }

    fn commit_element(&mut self) {
        if let Some(el) = self.current.take() {
            self.elements.push(el);
            self.sync_current_frame();
        }
    }

    fn snapshot(&self) -> Frame {
        Frame {
            players: self.players.clone(),
            elements: self.elements.clone(),
        }
    }

    /// Editing while viewing an existing frame overwrites that frame.
    fn sync_current_frame(&mut self) {
        if self.current_frame < self.frames.len() {
            self.frames[self.current_frame] = self.snapshot();
        }
    }

    fn playback(&mut self, index: usize) {
        let Some(frame) = self.frames.get(index) else {
            return;
        };
        self.players = frame.players.clone();
        self.elements = frame.elements.clone();
        self.current_frame = index;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

fn players_from_slots(slots: &[FormationSlot]) -> Vec<Player> {
    slots
        .iter()
        .map(|s| Player {
            id: s.id,
            position: Point::new(s.x, s.y),
            history: Vec::new(),
        })
        .collect()
}

#[derive(Clone, Debug)]
pub enum BoardAction {
    SelectTool(Tool),
    PointerDown { point: Point },
    PointerMove { point: Point, at: f64 },
    /// Pointer up, leave, and cancel all arrive here; any in-flight element
    /// is committed and any drag ends.
    PointerUp,
    Undo,
    ClearBoard,
    LoadFormation { name: String },
    SaveFormation { name: String },
    LoadSaved { index: usize },
    /// Replace the saved-formation list wholesale (localStorage rehydration).
    RestoreSaved(Vec<SavedFormation>),
    ToggleHeatmap,
    ClearHeatmap,
    AddFrame,
    Playback { index: usize },
    Advance,
    SetPlaying(bool),
    SetSpeed(PlaybackSpeed),
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use BoardAction::*;
        let mut new = (*self).clone();
        match action {
            SelectTool(tool) => {
                // Switching tools mid-gesture commits, never drops, the
                // transient element.
                new.commit_element();
                new.dragged = None;
                match tool {
                    Tool::Shape => {
                        new.show_team_shape = !new.show_team_shape;
                    }
                    Tool::Measure if new.active_tool == Tool::Measure => {
                        // Toggling measure off drops all measurements.
                        new.elements.retain(|el| el.kind != ElementKind::Measure);
                        new.active_tool = Tool::Select;
                    }
                    _ => {
                        new.active_tool = tool;
                    }
                }
            }
            PointerDown { point } => {
                let point = new.space.clamp(point);
                if let Some(kind) = new.active_tool.element_kind() {
                    new.current = Some(TacticalElement {
                        kind,
                        start: point,
                        end: point,
                    });
                } else if new.active_tool == Tool::Select {
                    new.dragged = new.nearest_player(point, PLAYER_HIT_THRESHOLD);
                }
            }
            PointerMove { point, at } => {
                let point = new.space.clamp(point);
                if let Some(id) = new.dragged {
                    if new.active_tool == Tool::Select {
                        new.move_player(id, point, at);
                        new.sync_current_frame();
                    }
                }
                if let Some(el) = new.current.as_mut() {
                    el.end = point;
                }
            }
            PointerUp => {
                new.commit_element();
                new.dragged = None;
            }
            Undo => {
                new.elements.pop();
            }
            ClearBoard => {
                new.elements.clear();
                new.current = None;
                new.show_team_shape = false;
                new.frames.clear();
                new.current_frame = 0;
                new.playing = false;
            }
            LoadFormation { name } => {
                if let Some(slots) = formations::formation(&name) {
                    new.load_slots(slots);
                    new.current_formation = name;
                }
            }
            SaveFormation { name } => {
                let name = name.trim().to_string();
                if !name.is_empty() {
                    let slots = new
                        .players
                        .iter()
                        .map(|p| FormationSlot {
                            id: p.id,
                            x: p.position.x,
                            y: p.position.y,
                        })
                        .collect();
                    new.saved.push(SavedFormation { name, slots });
                }
            }
            LoadSaved { index } => {
                // Corrupt entries (wrong squad size) are never applied.
                if let Some(sf) = new.saved.get(index).cloned() {
                    if sf.slots.len() == new.players.len() {
                        new.load_slots(&sf.slots);
                        new.current_formation = sf.name;
                    }
                }
            }
            RestoreSaved(list) => {
                new.saved = list;
            }
            ToggleHeatmap => {
                new.show_heatmap = !new.show_heatmap;
            }
            ClearHeatmap => {
                new.reset_histories();
            }
            AddFrame => {
                new.commit_element();
                new.frames.push(new.snapshot());
                new.current_frame = new.frames.len() - 1;
            }
            Playback { index } => {
                new.commit_element();
                new.playback(index);
            }
            Advance => {
                if new.frames.is_empty() {
                    new.playing = false;
                } else {
                    let next = (new.current_frame + 1) % new.frames.len();
                    new.playback(next);
                    // Wrapping past the last frame stops auto-playback.
                    if next == 0 {
                        new.playing = false;
                    }
                }
            }
            SetPlaying(p) => {
                new.playing = p && !new.frames.is_empty();
            }
            SetSpeed(s) => {
                new.speed = s;
            }
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: BoardState, action: BoardAction) -> BoardState {
        Rc::new(state).reduce(action).as_ref().clone()
    }

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn player(state: &BoardState, id: u8) -> &Player {
        state.players.iter().find(|p| p.id == id).unwrap()
    }

    #[test]
    fn default_state_has_eleven_players() {
        let s = BoardState::new();
        assert_eq!(s.players.len(), 11);
        let mut ids: Vec<u8> = s.players.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());
        assert_eq!(player(&s, 10).position, pt(75.0, 50.0));
    }

    #[test]
    fn select_tool_pointer_down_does_not_begin_element() {
        let s = reduce(BoardState::new(), BoardAction::PointerDown { point: pt(50.0, 50.0) });
        assert!(s.current.is_none());
    }

    #[test]
    fn pointer_move_without_gesture_is_a_noop() {
        let before = BoardState::new();
        let after = reduce(
            before.clone(),
            BoardAction::PointerMove { point: pt(30.0, 30.0), at: 1.0 },
        );
        assert_eq!(after.players, before.players);
        assert!(after.current.is_none());
    }

    #[test]
    fn drawing_gesture_commits_element() {
        let mut s = reduce(BoardState::new(), BoardAction::SelectTool(Tool::Pass));
        s = reduce(s, BoardAction::PointerDown { point: pt(10.0, 10.0) });
        assert_eq!(
            s.current,
            Some(TacticalElement {
                kind: ElementKind::Pass,
                start: pt(10.0, 10.0),
                end: pt(10.0, 10.0),
            })
        );
        s = reduce(s, BoardAction::PointerMove { point: pt(40.0, 20.0), at: 1.0 });
        assert_eq!(s.current.unwrap().end, pt(40.0, 20.0));
        s = reduce(s, BoardAction::PointerUp);
        assert!(s.current.is_none());
        assert_eq!(s.elements.len(), 1);
        assert_eq!(s.elements[0].end, pt(40.0, 20.0));
    }

    #[test]
    fn zero_length_commit_is_kept() {
        let mut s = reduce(BoardState::new(), BoardAction::SelectTool(Tool::Run));
        s = reduce(s, BoardAction::PointerDown { point: pt(25.0, 25.0) });
        s = reduce(s, BoardAction::PointerUp);
        assert_eq!(s.elements.len(), 1);
        assert_eq!(s.elements[0].start, s.elements[0].end);
    }

    #[test]
    fn tool_switch_commits_transient() {
        let mut s = reduce(BoardState::new(), BoardAction::SelectTool(Tool::Zone));
        s = reduce(s, BoardAction::PointerDown { point: pt(10.0, 10.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(20.0, 30.0), at: 1.0 });
        s = reduce(s, BoardAction::SelectTool(Tool::Select));
        assert!(s.current.is_none());
        assert_eq!(s.elements.len(), 1);
        assert_eq!(s.elements[0].kind, ElementKind::Zone);
    }

    #[test]
    fn undo_removes_tail_and_tolerates_empty() {
        let mut s = reduce(BoardState::new(), BoardAction::Undo);
        assert!(s.elements.is_empty());
        s = reduce(s, BoardAction::SelectTool(Tool::Pass));
        for x in [20.0, 40.0] {
            s = reduce(s, BoardAction::PointerDown { point: pt(x, 10.0) });
            s = reduce(s, BoardAction::PointerUp);
        }
        assert_eq!(s.elements.len(), 2);
        s = reduce(s, BoardAction::Undo);
        assert_eq!(s.elements.len(), 1);
        assert_eq!(s.elements[0].start, pt(20.0, 10.0));
    }

    #[test]
    fn clear_discards_transient_and_frames() {
        let mut s = reduce(BoardState::new(), BoardAction::AddFrame);
        s = reduce(s, BoardAction::SelectTool(Tool::Zone));
        s = reduce(s, BoardAction::PointerDown { point: pt(10.0, 10.0) });
        s = reduce(s, BoardAction::ClearBoard);
        assert!(s.current.is_none());
        assert!(s.elements.is_empty());
        assert!(s.frames.is_empty());
        assert_eq!(s.current_frame, 0);
        assert!(!s.playing);
    }

    #[test]
    fn shape_toggles_overlay_without_changing_tool() {
        let mut s = reduce(BoardState::new(), BoardAction::SelectTool(Tool::Pass));
        s = reduce(s, BoardAction::SelectTool(Tool::Shape));
        assert!(s.show_team_shape);
        assert_eq!(s.active_tool, Tool::Pass);
        s = reduce(s, BoardAction::SelectTool(Tool::Shape));
        assert!(!s.show_team_shape);
    }

    #[test]
    fn measure_toggle_off_drops_measurements_only() {
        let mut s = reduce(BoardState::new(), BoardAction::SelectTool(Tool::Pass));
        s = reduce(s, BoardAction::PointerDown { point: pt(10.0, 10.0) });
        s = reduce(s, BoardAction::PointerUp);
        s = reduce(s, BoardAction::SelectTool(Tool::Measure));
        s = reduce(s, BoardAction::PointerDown { point: pt(10.0, 10.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(50.0, 50.0), at: 1.0 });
        s = reduce(s, BoardAction::PointerUp);
        assert_eq!(s.elements.len(), 2);
        s = reduce(s, BoardAction::SelectTool(Tool::Measure));
        assert_eq!(s.elements.len(), 1);
        assert_eq!(s.elements[0].kind, ElementKind::Pass);
        assert_eq!(s.active_tool, Tool::Select);
    }

    #[test]
    fn drag_moves_only_the_target_player() {
        let mut s = BoardState::new();
        let before = s.players.clone();
        s = reduce(s, BoardAction::PointerDown { point: pt(76.0, 51.0) });
        assert_eq!(s.dragged, Some(10));
        s = reduce(s, BoardAction::PointerMove { point: pt(80.0, 55.0), at: 1000.0 });
        assert_eq!(player(&s, 10).position, pt(80.0, 55.0));
        assert_eq!(player(&s, 10).history.len(), 1);
        for p in before.iter().filter(|p| p.id != 10) {
            let now = player(&s, p.id);
            assert_eq!(now.position, p.position);
            assert!(now.history.is_empty());
        }
        s = reduce(s, BoardAction::PointerMove { point: pt(81.0, 56.0), at: 1100.0 });
        assert_eq!(player(&s, 10).history.len(), 2);
    }

    #[test]
    fn pointer_up_ends_drag() {
        let mut s = reduce(BoardState::new(), BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerUp);
        assert!(s.dragged.is_none());
        s = reduce(s, BoardAction::PointerMove { point: pt(60.0, 60.0), at: 1.0 });
        assert_eq!(player(&s, 10).position, pt(75.0, 50.0));
        assert!(player(&s, 10).history.is_empty());
    }

    #[test]
    fn drag_positions_are_clamped_to_the_pitch() {
        let mut s = reduce(BoardState::new(), BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(500.0, -40.0), at: 1.0 });
        assert_eq!(player(&s, 10).position, pt(100.0, 0.0));
    }

    #[test]
    fn nearest_player_uses_per_axis_thresholds() {
        let s = BoardState::new();
        // Player 10 sits at (75, 50).
        assert_eq!(s.nearest_player(pt(78.9, 53.9), 4.0), Some(10));
        assert_eq!(s.nearest_player(pt(79.1, 50.0), 4.0), None);
        assert_eq!(s.nearest_player(pt(75.0, 54.1), 4.0), None);
        // (25,45) and (25,55) are both within 6 of (25,49); the closer wins.
        assert_eq!(s.nearest_player(pt(25.0, 49.0), 6.0), Some(3));
    }

    #[test]
    fn load_formation_resets_every_history() {
        let mut s = reduce(BoardState::new(), BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(80.0, 55.0), at: 5.0 });
        s = reduce(s, BoardAction::PointerUp);
        s = reduce(s, BoardAction::LoadFormation { name: "4-4-2".into() });
        assert_eq!(s.current_formation, "4-4-2");
        assert_eq!(player(&s, 10).position, pt(75.0, 40.0));
        assert!(s.players.iter().all(|p| p.history.is_empty()));
        // Unknown preset leaves state alone.
        let t = reduce(s.clone(), BoardAction::LoadFormation { name: "9-0-1".into() });
        assert_eq!(t.players, s.players);
        assert_eq!(t.current_formation, "4-4-2");
    }

    #[test]
    fn clear_heatmap_keeps_positions() {
        let mut s = reduce(BoardState::new(), BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(70.0, 45.0), at: 9.0 });
        s = reduce(s, BoardAction::ClearHeatmap);
        assert_eq!(player(&s, 10).position, pt(70.0, 45.0));
        assert!(s.players.iter().all(|p| p.history.is_empty()));
    }

    #[test]
    fn save_and_load_named_formation() {
        let mut s = reduce(BoardState::new(), BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(82.0, 44.0), at: 1.0 });
        s = reduce(s, BoardAction::PointerUp);
        s = reduce(s, BoardAction::SaveFormation { name: "high press".into() });
        assert_eq!(s.saved.len(), 1);
        s = reduce(s, BoardAction::LoadFormation { name: "4-4-2".into() });
        s = reduce(s, BoardAction::LoadSaved { index: 0 });
        assert_eq!(s.current_formation, "high press");
        assert_eq!(player(&s, 10).position, pt(82.0, 44.0));
        assert!(player(&s, 10).history.is_empty());
        // Blank names and stale indices are ignored.
        let t = reduce(s.clone(), BoardAction::SaveFormation { name: "   ".into() });
        assert_eq!(t.saved.len(), 1);
        let t = reduce(s.clone(), BoardAction::LoadSaved { index: 7 });
        assert_eq!(t.players, s.players);
    }

    #[test]
    fn restore_saved_replaces_the_list() {
        let saved = vec![SavedFormation {
            name: "counter".into(),
            slots: vec![FormationSlot { id: 1, x: 10.0, y: 50.0 }],
        }];
        let s = reduce(BoardState::new(), BoardAction::RestoreSaved(saved.clone()));
        assert_eq!(s.saved, saved);
        // Loading an undersized entry must not break the 11-player squad.
        let t = reduce(s.clone(), BoardAction::LoadSaved { index: 0 });
        assert_eq!(t.players, s.players);
    }

    #[test]
    fn add_frame_becomes_current_and_snapshots_deeply() {
        let mut s = reduce(BoardState::new(), BoardAction::SelectTool(Tool::Pass));
        s = reduce(s, BoardAction::PointerDown { point: pt(10.0, 10.0) });
        s = reduce(s, BoardAction::PointerUp);
        s = reduce(s, BoardAction::SelectTool(Tool::Select));
        s = reduce(s, BoardAction::AddFrame);
        assert_eq!(s.frames.len(), 1);
        assert_eq!(s.current_frame, 0);
        let saved = s.frames[0].clone();
        // Formation load mutates live state but not the stored frame.
        s = reduce(s, BoardAction::LoadFormation { name: "3-5-2".into() });
        assert_eq!(s.frames[0], saved);
        // Playback restores the snapshot exactly.
        s = reduce(s, BoardAction::Playback { index: 0 });
        assert_eq!(s.players, saved.players);
        assert_eq!(s.elements, saved.elements);
    }

    #[test]
    fn editing_the_viewed_frame_overwrites_it() {
        let mut s = reduce(BoardState::new(), BoardAction::AddFrame);
        s = reduce(s, BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(60.0, 40.0), at: 1.0 });
        s = reduce(s, BoardAction::PointerUp);
        let stored = s.frames[0]
            .players
            .iter()
            .find(|p| p.id == 10)
            .unwrap()
            .position;
        assert_eq!(stored, pt(60.0, 40.0));
    }

    #[test]
    fn playback_out_of_range_is_a_noop() {
        let mut s = reduce(BoardState::new(), BoardAction::AddFrame);
        let before = s.clone();
        s = reduce(s, BoardAction::Playback { index: 3 });
        assert_eq!(s.players, before.players);
        assert_eq!(s.current_frame, 0);
    }

    #[test]
    fn advance_wraps_and_stops_playback() {
        let mut s = reduce(BoardState::new(), BoardAction::AddFrame);
        s = reduce(s, BoardAction::AddFrame);
        s = reduce(s, BoardAction::Playback { index: 0 });
        s = reduce(s, BoardAction::SetPlaying(true));
        assert!(s.playing);
        s = reduce(s, BoardAction::Advance);
        assert_eq!(s.current_frame, 1);
        assert!(s.playing);
        s = reduce(s, BoardAction::Advance);
        assert_eq!(s.current_frame, 0);
        assert!(!s.playing);
    }

    #[test]
    fn playback_controls_guard_empty_timeline() {
        let mut s = reduce(BoardState::new(), BoardAction::SetPlaying(true));
        assert!(!s.playing);
        s = reduce(s, BoardAction::Advance);
        assert_eq!(s.current_frame, 0);
        assert!(!s.playing);
    }

    #[test]
    fn playback_speed_intervals() {
        assert_eq!(PlaybackSpeed::Half.interval_ms(), 2000);
        assert_eq!(PlaybackSpeed::Normal.interval_ms(), 1000);
        assert_eq!(PlaybackSpeed::Double.interval_ms(), 500);
    }

    #[test]
    fn team_shape_connects_bands_left_to_right() {
        let s = BoardState::new();
        let segs = team_shape_segments(&s.players);
        // 4-3-3: 2 players above 65, 6 in the middle band, 3 at or below 35.
        assert_eq!(segs.len(), 1 + 5 + 2);
        assert_eq!(segs[0], (pt(25.0, 75.0), pt(75.0, 75.0)));
        // Segments within a band are sorted by x.
        for (a, b) in &segs {
            assert!(a.x <= b.x);
        }
    }

    #[test]
    fn drag_snapshot_then_reload_walkthrough() {
        // Default formation, drag the striker, snapshot, reload 4-4-2.
        let mut s = BoardState::new();
        s = reduce(s, BoardAction::PointerDown { point: pt(75.0, 50.0) });
        s = reduce(s, BoardAction::PointerMove { point: pt(80.0, 55.0), at: 42.0 });
        s = reduce(s, BoardAction::PointerUp);
        assert_eq!(player(&s, 10).position, pt(80.0, 55.0));
        assert_eq!(player(&s, 10).history.len(), 1);
        s = reduce(s, BoardAction::AddFrame);
        assert_eq!(s.frames.len(), 1);
        s = reduce(s, BoardAction::LoadFormation { name: "4-4-2".into() });
        assert_eq!(player(&s, 10).position, pt(75.0, 40.0));
        assert!(player(&s, 10).history.is_empty());
        let stored = s.frames[0]
            .players
            .iter()
            .find(|p| p.id == 10)
            .unwrap();
        assert_eq!(stored.position, pt(80.0, 55.0));
        assert_eq!(stored.history.len(), 1);
    }
}
