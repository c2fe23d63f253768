use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::timing::{self, FrameLoop};
use crate::particles::{ParticleConfig, ParticleField, Scene};
#[cfg(not(target_arch = "wasm32"))]
use crate::particles::Shape;

const CANVAS_ID: &str = "particle-canvas";

/// Animated particle field behind `children`.
///
/// The field is (re)built whenever the container is resized, and a click
/// drops a new particle where the pointer is. On the web the frame is painted
/// straight onto a `<canvas>`; native shells render the recorded [`Scene`] as
/// SVG.
#[component]
pub fn ParticleBackdrop(children: Element) -> Element {
    let mut field = use_signal(|| Option::<ParticleField>::None);
    let scene = use_signal(Scene::default);
    let mut task = use_signal(|| Option::<Task>::None);
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);
    let frames = use_hook(FrameLoop::new);
    let config = use_hook(ParticleConfig::site);

    {
        let frames = frames.clone();
        use_drop(move || frames.stop());
    }

    let mut restart = move |width: f64, height: f64| {
        frames.stop();
        if let Some(previous) = task.write().take() {
            previous.cancel();
        }
        if width < 1.0 || height < 1.0 {
            field.set(None);
            return;
        }

        debug!(target: "particles", width, height, "restarting particle field");
        field.set(Some(ParticleField::new(
            config.clone(),
            width,
            height,
            &mut rand::thread_rng(),
        )));

        let frames = frames.clone();
        let handle = spawn(async move {
            frames
                .run(timing::next_frame, move || {
                    field.with_mut(|f| {
                        if let Some(f) = f.as_mut() {
                            f.step();
                        }
                    });
                    paint(&field.peek(), scene);
                })
                .await;
        });
        task.set(Some(handle));
    };

    let add_particle = move |evt: MouseEvent| async move {
        let point = evt.client_coordinates();
        let Some(mounted) = container() else {
            return;
        };
        let Ok(rect) = mounted.get_client_rect().await else {
            return;
        };
        let (x, y) = (point.x - rect.origin.x, point.y - rect.origin.y);
        field.with_mut(|f| {
            if let Some(f) = f.as_mut() {
                f.add_at(x, y, &mut rand::thread_rng());
            }
        });
    };

    rsx! {
        div {
            class: "particle-backdrop",
            onmounted: move |evt| container.set(Some(evt.data())),
            onresize: move |evt| {
                if let Ok(size) = evt.get_content_box_size() {
                    restart(size.width, size.height);
                }
            },
            onclick: add_particle,
            {surface(scene)}
            div { class: "particle-backdrop__content", {children} }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn surface(_scene: Signal<Scene>) -> Element {
    rsx! {
        canvas { id: CANVAS_ID, class: "particle-backdrop__surface", "aria-hidden": "true" }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn surface(scene: Signal<Scene>) -> Element {
    let scene = scene.read();
    let (width, height) = scene.size();

    rsx! {
        svg {
            id: CANVAS_ID,
            class: "particle-backdrop__surface",
            "aria-hidden": "true",
            width: "{width}",
            height: "{height}",
            view_box: "0 0 {width} {height}",
            for shape in scene.shapes() {
                {render_shape(shape)}
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn render_shape(shape: &Shape) -> Element {
    match shape {
        Shape::Disc {
            x,
            y,
            radius,
            color,
            opacity,
        } => rsx! {
            circle { cx: "{x}", cy: "{y}", r: "{radius}", fill: "{color}", fill_opacity: "{opacity}" }
        },
        Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            opacity,
        } => rsx! {
            line {
                x1: "{x1}",
                y1: "{y1}",
                x2: "{x2}",
                y2: "{y2}",
                stroke: "{color}",
                stroke_opacity: "{opacity}",
                stroke_width: "1"
            }
        },
    }
}

/// Draw the current frame onto the platform surface.
#[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
fn paint(field: &Option<ParticleField>, mut scene: Signal<Scene>) {
    let Some(field) = field else {
        return;
    };

    #[cfg(target_arch = "wasm32")]
    {
        let _ = scene;
        let (width, height) = field.size();
        if let Some(mut canvas) = crate::particles::CanvasSurface::by_id(CANVAS_ID, width, height) {
            field.render(&mut canvas);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        scene.with_mut(|s| field.render(s));
    }
}
