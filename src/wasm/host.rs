use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, HtmlCanvasElement, MouseEvent, Window};

use super::render::PointRenderer;
use crate::{Animator, FieldConfig, HostEvent, InitError, Theme};

/// Dataset keys forwarded to `FieldConfig::with_overrides`.
const DATA_KEYS: [&str; 4] = ["particleCount", "seed", "pointSize", "opacity"];

struct Background {
    animator: Animator,
    renderer: PointRenderer,
}

impl Background {
    fn dispatch(&mut self, event: HostEvent) {
        let Background { animator, renderer } = self;
        animator.handle(event, renderer);
    }
}

/// Build the scene on canvas `#canvas_id`, hook up resize and pointer
/// listeners and start the frame loop.
pub fn start(canvas_id: &str) -> Result<(), InitError> {
    let window = window().ok_or(InitError::NoWindow)?;
    let document = window.document().ok_or(InitError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| InitError::CanvasNotFound(canvas_id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| InitError::NotACanvas(canvas_id.to_owned()))?;

    let config = read_config(&canvas)?;
    let theme = read_theme(&window, &document);
    let seed = config
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * (1u64 << 53) as f64) as u64);
    let mut rng = SmallRng::seed_from_u64(seed);

    let renderer = PointRenderer::new(&canvas, config.count)?;
    let (width, height, ratio) = viewport(&window);
    let animator = Animator::init_scene(config, theme, width, height, ratio, &mut rng)?;

    let state = Rc::new(RefCell::new(Background { animator, renderer }));
    state.borrow_mut().dispatch(HostEvent::Resize { width, height, pixel_ratio: ratio });

    // Resize canvas to fit window
    let resize_closure = {
        let state = state.clone();
        Closure::wrap(Box::new(move || {
            if let Some(w) = web_sys::window() {
                let (width, height, pixel_ratio) = viewport(&w);
                state
                    .borrow_mut()
                    .dispatch(HostEvent::Resize { width, height, pixel_ratio });
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let pointer_closure = {
        let state = state.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            state.borrow_mut().dispatch(HostEvent::PointerMove {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
            });
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    document
        .add_event_listener_with_callback("mousemove", pointer_closure.as_ref().unchecked_ref())?;
    pointer_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself. The `Option` lets the closure be
    // created first and then looked up from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state.borrow_mut().dispatch(HostEvent::Frame);

        // schedule next
        if let Err(e) = request_frame(f.borrow().as_ref()) {
            log::error!("frame loop stopped: {}", e);
        }
    }) as Box<dyn FnMut()>));

    request_frame(g.borrow().as_ref())?;
    log::info!("particle background running on #{}", canvas_id);
    Ok(())
}

fn request_frame(callback: Option<&Closure<dyn FnMut()>>) -> Result<(), InitError> {
    let callback = callback.ok_or_else(|| InitError::Js("frame callback dropped".into()))?;
    window()
        .ok_or(InitError::NoWindow)?
        .request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

/// Inner size in CSS pixels and the device pixel ratio.
fn viewport(window: &Window) -> (f64, f64, f64) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (
        dim(window.inner_width()),
        dim(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

fn read_config(canvas: &HtmlCanvasElement) -> Result<FieldConfig, InitError> {
    let dataset = canvas.dataset();
    let values: Vec<(&str, String)> = DATA_KEYS
        .iter()
        .filter_map(|&key| dataset.get(key).map(|v| (key, v)))
        .collect();
    FieldConfig::default().with_overrides(values.iter().map(|(k, v)| (*k, v.as_str())))
}

/// Theme colors come from CSS custom properties on the root element; read once.
fn read_theme(window: &Window, document: &Document) -> Theme {
    let style = document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten());
    match style {
        Some(style) => {
            let bg = style.get_property_value("--bg-dark").unwrap_or_default();
            let accent = style.get_property_value("--accent-blue").unwrap_or_default();
            Theme::from_css(&bg, &accent)
        }
        None => {
            log::warn!("computed style unavailable, using default colors");
            Theme::default()
        }
    }
}
