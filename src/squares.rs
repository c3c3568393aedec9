use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use folio_core::grid::{
    cell_origin, hovered_cell, visible_cells, GridDirection, GridMotion, GridOffset,
    DEFAULT_BORDER_COLOR, DEFAULT_GRID_SPEED, DEFAULT_HOVER_FILL_COLOR, DEFAULT_SQUARE_SIZE,
    VIGNETTE_EDGE_COLOR,
};

const GRID_LINE_WIDTH: f64 = 0.5;
const VIGNETTE_CENTER_COLOR: &str = "rgba(6, 0, 16, 0)";

#[derive(Properties, PartialEq)]
pub(crate) struct SquaresProps {
    #[prop_or_default]
    pub direction: GridDirection,
    #[prop_or(DEFAULT_GRID_SPEED)]
    pub speed: f32,
    #[prop_or(DEFAULT_SQUARE_SIZE)]
    pub square_size: f32,
    #[prop_or(AttrValue::Static(DEFAULT_BORDER_COLOR))]
    pub border_color: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_HOVER_FILL_COLOR))]
    pub hover_fill_color: AttrValue,
}

struct SquaresState {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    motion: GridMotion,
    square_size: f32,
    border_color: String,
    hover_fill_color: String,
    offset: Cell<GridOffset>,
    hovered: Cell<Option<(i32, i32)>>,
    css_size: Cell<(f32, f32)>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl SquaresState {
    /// Match the pixel buffer to the displayed size. Resizing resets the
    /// context transform, so the density scale is reapplied here.
    fn resize(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let ratio = window.device_pixel_ratio();
        let width = self.canvas.client_width() as f32;
        let height = self.canvas.client_height() as f32;
        self.canvas.set_width((width as f64 * ratio) as u32);
        self.canvas.set_height((height as f64 * ratio) as u32);
        let _ = self.context.scale(ratio, ratio);
        self.css_size.set((width, height));
    }

    fn tick(&self) {
        let mut offset = self.offset.get();
        offset.advance(self.motion, self.square_size);
        self.offset.set(offset);
        self.draw();
    }

    fn draw(&self) {
        let (width, height) = self.css_size.get();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let ctx = &self.context;
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        let offset = self.offset.get();
        let square = self.square_size as f64;
        let cols = visible_cells(width, self.square_size) as i32;
        let rows = visible_cells(height, self.square_size) as i32;
        let hovered = self.hovered.get();
        ctx.set_line_width(GRID_LINE_WIDTH);
        for col in 0..cols {
            for row in 0..rows {
                let x = cell_origin(col, offset.x, self.square_size) as f64;
                let y = cell_origin(row, offset.y, self.square_size) as f64;
                if hovered == Some((col, row)) {
                    ctx.set_fill_style_str(&self.hover_fill_color);
                    ctx.fill_rect(x, y, square, square);
                }
                ctx.set_stroke_style_str(&self.border_color);
                ctx.stroke_rect(x, y, square, square);
            }
        }
        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;
        let radius = ((width * width + height * height) as f64).sqrt() / 2.0;
        if let Ok(gradient) =
            ctx.create_radial_gradient(center_x, center_y, 0.0, center_x, center_y, radius)
        {
            let _ = gradient.add_color_stop(0.0, VIGNETTE_CENTER_COLOR);
            let _ = gradient.add_color_stop(1.0, VIGNETTE_EDGE_COLOR);
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
        }
    }

    fn set_pointer(&self, client_x: f32, client_y: f32) {
        let rect = self.canvas.get_bounding_client_rect();
        let x = client_x - rect.left() as f32;
        let y = client_y - rect.top() as f32;
        self.hovered
            .set(hovered_cell(x, y, self.offset.get(), self.square_size));
    }

    fn clear_pointer(&self) {
        self.hovered.set(None);
    }
}

fn schedule_frame(state: &Rc<SquaresState>) {
    let next = Rc::clone(state);
    let handle = request_animation_frame(move |_timestamp| {
        next.tick();
        schedule_frame(&next);
    });
    *state.frame.borrow_mut() = Some(handle);
}

/// Full-bleed scrolling grid behind the page content. Everything here is
/// torn down on unmount: dropping the frame handle cancels the pending
/// callback and dropping the listeners detaches them.
#[function_component(SquaresBackground)]
pub(crate) fn squares_background(props: &SquaresProps) -> Html {
    let canvas_ref = use_node_ref();
    let config = (
        props.direction,
        props.speed,
        props.square_size,
        props.border_color.clone(),
        props.hover_fill_color.clone(),
    );
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            config,
            move |(direction, speed, square_size, border_color, hover_fill_color)| {
                let mut listeners = Vec::new();
                let state = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|value| value.dyn_into::<CanvasRenderingContext2d>().ok());
                    let Some(context) = context else {
                        console::warn!("squares: 2d context unavailable, background disabled");
                        return None;
                    };
                    Some(Rc::new(SquaresState {
                        canvas,
                        context,
                        motion: GridMotion {
                            direction: *direction,
                            speed: *speed,
                        },
                        square_size: *square_size,
                        border_color: border_color.to_string(),
                        hover_fill_color: hover_fill_color.to_string(),
                        offset: Cell::new(GridOffset::default()),
                        hovered: Cell::new(None),
                        css_size: Cell::new((0.0, 0.0)),
                        frame: RefCell::new(None),
                    }))
                });
                if let Some(state) = state.as_ref() {
                    state.resize();
                    let window = web_sys::window().expect("window available");
                    let resize_state = Rc::clone(state);
                    listeners.push(EventListener::new(&window, "resize", move |_| {
                        resize_state.resize();
                    }));
                    let move_state = Rc::clone(state);
                    listeners.push(EventListener::new(
                        &state.canvas,
                        "mousemove",
                        move |event: &Event| {
                            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                                move_state
                                    .set_pointer(event.client_x() as f32, event.client_y() as f32);
                            }
                        },
                    ));
                    let leave_state = Rc::clone(state);
                    listeners.push(EventListener::new(&state.canvas, "mouseleave", move |_| {
                        leave_state.clear_pointer();
                    }));
                    schedule_frame(state);
                }
                move || {
                    if let Some(state) = state {
                        state.frame.borrow_mut().take();
                    }
                    drop(listeners);
                }
            },
        );
    }
    html! {
        <canvas ref={canvas_ref} class="squares-canvas" aria-hidden="true"></canvas>
    }
}
