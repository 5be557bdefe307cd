//! Entry point, event listeners and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, GameRng, Simulation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::input::{handle_key_down, handle_key_up, handle_pointer_move};
use crate::renderer::CanvasRenderer;
use crate::scoreboard::DomScoreboard;

type Shared<T> = Rc<RefCell<T>>;
type FrameCallback = Shared<Option<Closure<dyn FnMut()>>>;

/// Start the game on the canvas with id `canvas_id`
///
/// The arena takes the canvas's pixel size. The loop runs until the page goes away.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{canvas_id} not found")))?
        .dyn_into::<HtmlCanvasElement>()?;

    let config = Config::with_arena(canvas.width() as f32, canvas.height() as f32);
    let sim = Rc::new(RefCell::new(Simulation::new(config, GameRng::from_entropy())));

    install_listeners(&document, &canvas, &sim)?;

    let renderer = CanvasRenderer::new(&canvas)?;
    let mut scoreboard = DomScoreboard::new(document);
    sim.borrow().start(&mut scoreboard);

    run_loop(window, sim, renderer, scoreboard)?;

    tracing::info!(
        canvas_id,
        width = canvas.width(),
        height = canvas.height(),
        "Game started"
    );
    Ok(())
}

fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(EnvFilter::new("info"));

    // A second start() on the same page keeps the first subscriber
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

/// Keyboard and pointer callbacks only write the simulation's input state
fn install_listeners(
    document: &Document,
    canvas: &HtmlCanvasElement,
    sim: &Shared<Simulation>,
) -> Result<(), JsValue> {
    let key_down_sim = sim.clone();
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(input) = handle_key_down(&event.key()) {
            key_down_sim.borrow_mut().ingest(input);
        }
    });
    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let key_up_sim = sim.clone();
    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(input) = handle_key_up(&event.key()) {
            key_up_sim.borrow_mut().ingest(input);
        }
    });
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    let pointer_sim = sim.clone();
    let surface = canvas.clone();
    let on_mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let top = surface.get_bounding_client_rect().top();
        let input = handle_pointer_move(f64::from(event.client_y()), top);
        pointer_sim.borrow_mut().ingest(input);
    });
    canvas.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;
    on_mouse_move.forget();

    Ok(())
}

/// Tick, draw and reschedule once per display refresh
fn run_loop(
    window: Window,
    sim: Shared<Simulation>,
    mut renderer: CanvasRenderer,
    mut scoreboard: DomScoreboard,
) -> Result<(), JsValue> {
    let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
    let next = frame_cb.clone();
    let loop_window = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        sim.borrow_mut().frame(&mut renderer, &mut scoreboard);

        if let Err(e) = request_frame(&loop_window, &next) {
            tracing::error!(error = ?e, "Failed to schedule next frame");
        }
    }));

    request_frame(&window, &frame_cb)
}

fn request_frame(window: &Window, frame_cb: &FrameCallback) -> Result<(), JsValue> {
    if let Some(closure) = frame_cb.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}
