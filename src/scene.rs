//! Frame composition.
//!
//! `compose` turns the controller's view into a flat list of rectangles and
//! text lines in canvas pixels (origin top-left, y down). The renderer draws
//! whatever it is given and holds no sorting state of its own.

use crate::config::{BAR_WIDTH, MARGIN_SLOTS, WINDOW_SIZE};
use crate::controller::Mode;
use crate::engine::{Algorithm, Bar, BarState, Stats};

const OUTLINE_WIDTH: f32 = 1.0;
const TITLE_SIZE: f32 = 30.0;
const BODY_SIZE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            1.0,
        ]
    }
}

pub mod palette {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(170, 170, 170);
    pub const NORMAL: Color = Color::rgb(128, 0, 128);
    pub const COMPARED: Color = Color::rgb(0, 0, 255);
    pub const CANDIDATE: Color = Color::rgb(64, 224, 208);
    pub const SORTED: Color = Color::rgb(0, 255, 0);
    pub const OUTLINE: Color = Color::rgb(0, 0, 0);
    pub const TEXT: Color = Color::rgb(0, 0, 0);
}

pub fn fill(state: BarState) -> Color {
    match state {
        BarState::Normal => palette::NORMAL,
        BarState::Compared => palette::COMPARED,
        BarState::CandidateMinimum => palette::CANDIDATE,
        BarState::Sorted => palette::SORTED,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: Color,
}

/// Horizontally centered text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub center_y: f32,
    pub size: f32,
}

/// Where the overlay places its controls. The slider only exists while a
/// sort is on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Widgets {
    pub menu_button: Rect,
    pub speed_slider: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub text_color: Color,
    pub quads: Vec<Quad>,
    pub text: Vec<TextLine>,
    pub widgets: Widgets,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub canvas: f32,
    pub bar_width: f32,
    pub margin_slots: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas: WINDOW_SIZE as f32,
            bar_width: BAR_WIDTH as f32,
            margin_slots: MARGIN_SLOTS,
        }
    }
}

impl Layout {
    /// Bars stand on the bottom edge; one pixel of height per unit.
    pub fn bar_rect(&self, bar: &Bar) -> Rect {
        let x = (self.margin_slots as f32 + bar.slot as f32) * self.bar_width;
        let h = bar.height as f32;
        Rect::new(x, self.canvas - h, self.bar_width, h)
    }

    pub fn menu_button(&self) -> Rect {
        Rect::new(10.0, 10.0, 70.0, 30.0)
    }

    pub fn speed_slider(&self) -> Rect {
        Rect::new(self.canvas / 4.0, self.canvas * 5.0 / 6.0, self.canvas / 2.0, 25.0)
    }
}

/// What the controller exposes for drawing.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    pub mode: Mode,
    pub bars: &'a [Bar],
    pub algorithm: Option<Algorithm>,
    pub stats: Stats,
}

pub fn compose(view: &View<'_>, layout: &Layout) -> Scene {
    let mut scene = Scene {
        background: palette::BACKGROUND,
        text_color: palette::TEXT,
        quads: Vec::new(),
        text: Vec::new(),
        widgets: Widgets {
            menu_button: layout.menu_button(),
            speed_slider: None,
        },
    };

    match view.mode {
        Mode::Menu => {
            push_text(&mut scene, layout, "Select Sorting Algorithm", 30.0, TITLE_SIZE);
            push_text(&mut scene, layout, "Press 1 for Selection Sort", 60.0, BODY_SIZE);
            push_text(&mut scene, layout, "Press 2 for Bubble Sort", 90.0, BODY_SIZE);
            push_text(&mut scene, layout, "Press R to Reset, Q to Quit", 120.0, BODY_SIZE);
        }
        Mode::Running => {
            for bar in view.bars {
                push_bar(&mut scene, layout, bar);
            }
            let name = view.algorithm.map_or("None", Algorithm::name);
            push_text(&mut scene, layout, &format!("Sorting Algorithm: {name}"), 30.0, TITLE_SIZE);
            push_text(
                &mut scene,
                layout,
                &format!("Comparisons: {} Swaps: {}", view.stats.comparisons, view.stats.swaps),
                60.0,
                BODY_SIZE,
            );
            push_text(
                &mut scene,
                layout,
                "Press SPACE to start/pause, R to reset, Q to quit",
                90.0,
                BODY_SIZE,
            );
            scene.widgets.speed_slider = Some(layout.speed_slider());
        }
    }
    scene
}

fn push_bar(scene: &mut Scene, layout: &Layout, bar: &Bar) {
    let rect = layout.bar_rect(bar);
    scene.quads.push(Quad {
        rect,
        color: fill(bar.state),
    });
    // Left, right and top edges; the bottom sits on the canvas edge
    let edges = [
        Rect::new(rect.x, rect.y, OUTLINE_WIDTH, rect.h),
        Rect::new(rect.x + rect.w - OUTLINE_WIDTH, rect.y, OUTLINE_WIDTH, rect.h),
        Rect::new(rect.x, rect.y, rect.w, OUTLINE_WIDTH),
    ];
    scene.quads.extend(edges.into_iter().map(|rect| Quad {
        rect,
        color: palette::OUTLINE,
    }));
}

/// Text clears a background band first so it stays readable over bars.
fn push_text(scene: &mut Scene, layout: &Layout, text: &str, center_y: f32, size: f32) {
    scene.quads.push(Quad {
        rect: Rect::new(0.0, center_y - size / 2.0, layout.canvas, size),
        color: scene.background,
    });
    scene.text.push(TextLine {
        text: text.to_owned(),
        center_y,
        size,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(slot: usize, height: u32, state: BarState) -> Bar {
        Bar { slot, height, state }
    }

    #[test]
    fn menu_shows_instructions_only() {
        let bars = [bar(0, 100, BarState::Normal)];
        let view = View {
            mode: Mode::Menu,
            bars: &bars,
            algorithm: None,
            stats: Stats::default(),
        };
        let scene = compose(&view, &Layout::default());
        let lines: Vec<&str> = scene.text.iter().map(|line| line.text.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Select Sorting Algorithm",
                "Press 1 for Selection Sort",
                "Press 2 for Bubble Sort",
                "Press R to Reset, Q to Quit",
            ]
        );
        assert!(scene.quads.iter().all(|quad| quad.color == palette::BACKGROUND));
        assert_eq!(scene.widgets.menu_button, Layout::default().menu_button());
        assert!(scene.widgets.speed_slider.is_none());
    }

    #[test]
    fn running_draws_bars_and_stats() {
        let bars = [
            bar(0, 40, BarState::Normal),
            bar(1, 10, BarState::Compared),
            bar(2, 30, BarState::CandidateMinimum),
            bar(3, 50, BarState::Sorted),
        ];
        let view = View {
            mode: Mode::Running,
            bars: &bars,
            algorithm: Some(Algorithm::Selection),
            stats: Stats { comparisons: 7, swaps: 2 },
        };
        let scene = compose(&view, &Layout::default());

        assert_eq!(scene.quads.len(), bars.len() * 4 + 3);
        let fills: Vec<Color> = scene.quads.iter().step_by(4).take(4).map(|q| q.color).collect();
        assert_eq!(
            fills,
            vec![palette::NORMAL, palette::COMPARED, palette::CANDIDATE, palette::SORTED]
        );
        assert_eq!(scene.text[0].text, "Sorting Algorithm: Selection Sort");
        assert_eq!(scene.text[1].text, "Comparisons: 7 Swaps: 2");
        assert_eq!(scene.widgets.menu_button, Layout::default().menu_button());
        assert!(scene.widgets.speed_slider.is_some());
    }

    #[test]
    fn bars_stand_on_the_bottom_edge_after_margin() {
        let layout = Layout::default();
        let rect = layout.bar_rect(&bar(2, 120, BarState::Normal));
        assert_eq!(rect, Rect::new(140.0, 480.0, 20.0, 120.0));
    }

    #[test]
    fn default_widgets_match_canvas() {
        let layout = Layout::default();
        assert_eq!(layout.menu_button(), Rect::new(10.0, 10.0, 70.0, 30.0));
        assert_eq!(layout.speed_slider(), Rect::new(150.0, 500.0, 300.0, 25.0));
    }
}
