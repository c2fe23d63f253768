//! Timers and the per-frame scheduling primitive used by animations.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use super::config::FALLBACK_FRAME_MS;

/// Sleep for `ms` milliseconds on the current platform's timer.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// Resolves on the next display refresh.
///
/// On the web this is `requestAnimationFrame`; dropping the future before it
/// fires cancels the request. Native shells fall back to a fixed interval.
#[cfg(target_arch = "wasm32")]
pub fn next_frame() -> AnimationFrame {
    AnimationFrame::request()
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn next_frame() {
    sleep_ms(FALLBACK_FRAME_MS).await;
}

#[cfg(target_arch = "wasm32")]
pub use web_frame::AnimationFrame;

#[cfg(target_arch = "wasm32")]
mod web_frame {
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures_channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// A pending `requestAnimationFrame` callback.
    pub struct AnimationFrame {
        handle: Option<i32>,
        fired: oneshot::Receiver<()>,
        _callback: Closure<dyn FnMut()>,
    }

    impl AnimationFrame {
        pub(super) fn request() -> Self {
            let (tx, fired) = oneshot::channel();
            let mut tx = Some(tx);
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(());
                }
            });
            let handle = web_sys::window().and_then(|w| {
                w.request_animation_frame(callback.as_ref().unchecked_ref())
                    .ok()
            });
            Self {
                handle,
                fired,
                _callback: callback,
            }
        }
    }

    impl Future for AnimationFrame {
        type Output = ();

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            let this = self.get_mut();
            match Pin::new(&mut this.fired).poll(cx) {
                Poll::Ready(_) => {
                    this.handle = None;
                    Poll::Ready(())
                }
                Poll::Pending => Poll::Pending,
            }
        }
    }

    impl Drop for AnimationFrame {
        fn drop(&mut self) {
            if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}

/// Repeating per-frame callback with an explicit liveness flag.
///
/// Each call to [`FrameLoop::run`] starts a new generation; the previous
/// generation (if still awaiting a frame) sees it is stale and exits without
/// ticking. [`FrameLoop::stop`] retires the current generation the same way.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    generation: Rc<Cell<u64>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stop rescheduling. The pending frame, if any, will not tick.
    pub fn stop(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        self.running.set(false);
    }

    /// Await `next_frame` then call `tick`, until stopped or superseded.
    pub async fn run<N, F, T>(&self, mut next_frame: N, mut tick: T)
    where
        N: FnMut() -> F,
        F: Future<Output = ()>,
        T: FnMut(),
    {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.running.set(true);

        loop {
            next_frame().await;
            if self.generation.get() != generation {
                break;
            }
            tick();
        }

        if self.generation.get() == generation {
            self.running.set(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn stop_from_inside_tick_ends_the_loop() {
        let frames = FrameLoop::new();
        let ticks = Rc::new(Cell::new(0));

        let handle = frames.clone();
        let counter = ticks.clone();
        block_on(frames.run(
            || async {},
            move || {
                counter.set(counter.get() + 1);
                if counter.get() == 5 {
                    handle.stop();
                }
            },
        ));

        assert_eq!(ticks.get(), 5);
        assert!(!frames.is_running());
    }

    #[test]
    fn stop_while_waiting_skips_the_pending_tick() {
        let frames = FrameLoop::new();
        let ticks = Rc::new(Cell::new(0));
        let waits = Rc::new(Cell::new(0));

        let handle = frames.clone();
        let wait_counter = waits.clone();
        let counter = ticks.clone();
        block_on(frames.run(
            move || {
                wait_counter.set(wait_counter.get() + 1);
                if wait_counter.get() == 3 {
                    handle.stop();
                }
                async {}
            },
            move || counter.set(counter.get() + 1),
        ));

        assert_eq!(waits.get(), 3);
        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn a_new_run_supersedes_the_previous_one() {
        let frames = FrameLoop::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        // The first generation is parked on a frame that fires only after the
        // second generation has started.
        let (tx, rx) = futures_channel::oneshot::channel::<()>();
        let mut rx = Some(rx);
        let first_log = log.clone();
        let first = frames.run(
            move || {
                let rx = rx.take();
                async move {
                    if let Some(rx) = rx {
                        let _ = rx.await;
                    }
                }
            },
            move || first_log.borrow_mut().push("first"),
        );

        let second_log = log.clone();
        let restarter = frames.clone();
        let second = async move {
            let _ = tx.send(());
            let mut n = 0;
            restarter
                .clone()
                .run(
                    || async {},
                    move || {
                        second_log.borrow_mut().push("second");
                        n += 1;
                        if n == 2 {
                            restarter.stop();
                        }
                    },
                )
                .await;
        };

        block_on(async {
            let mut first = Box::pin(first);
            // Park the first generation on its frame.
            assert!(futures::poll!(first.as_mut()).is_pending());
            second.await;
            first.await;
        });

        assert_eq!(*log.borrow(), vec!["second", "second"]);
    }
}
