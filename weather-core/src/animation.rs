//! Frame-advance animation loop.
//!
//! [`animate`] draws frame 0 straight away, then hands the rest of the loop
//! to a single tokio task: sleep for the frame delay, check that the
//! animation is still running, erase the previous block, draw the next
//! frame. Only one task draws for a given animation, so redraws never race.
//! The running check and the redraw happen under a lock that
//! [`AnimationHandle::stop`] also takes, so a frame that has started is
//! finished before `stop` returns and none starts after.
//!
//! ## Example
//!
//! ```rust,ignore
//! use weather_core::{animation, render::RenderContext, selector::get_scene};
//!
//! let scene = get_scene(500, true);
//! let ctx = RenderContext::detect(Some("night"));
//! let mut handle = animation::animate(
//!     scene,
//!     ctx,
//!     Duration::from_millis(300),
//!     animation::TerminalSink::stdout(),
//!     || {},
//! );
//! tokio::time::sleep(Duration::from_secs(3)).await;
//! handle.stop();
//! ```

use std::{
    fmt,
    io::{self, Write},
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU8, Ordering},
    },
    time::Duration,
};

use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    terminal::{Clear, ClearType},
};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    render::{RenderContext, render_to_string},
    scene::Scene,
};

/// Lifecycle of one animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Nothing is scheduled (static scenes never leave this state on their own).
    Idle,
    Running,
    /// Terminal; a stopped animation never runs again.
    Stopped,
}

impl AnimationState {
    fn to_u8(self) -> u8 {
        match self {
            AnimationState::Idle => 0,
            AnimationState::Running => 1,
            AnimationState::Stopped => 2,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => AnimationState::Idle,
            1 => AnimationState::Running,
            _ => AnimationState::Stopped,
        }
    }
}

/// State shared between a handle and its loop task.
#[derive(Debug)]
struct SharedState {
    state: AtomicU8,
    /// Held for the running check plus the redraw that follows it.
    draw_lock: Mutex<()>,
}

impl SharedState {
    fn new(state: AnimationState) -> Self {
        Self {
            state: AtomicU8::new(state.to_u8()),
            draw_lock: Mutex::new(()),
        }
    }

    fn get(&self) -> AnimationState {
        AnimationState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set(&self, state: AnimationState) {
        self.state.store(state.to_u8(), Ordering::Release);
    }

    fn lock_draw(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a panicked drawer leaves nothing torn.
        self.draw_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    fn is_running(&self) -> bool {
        self.get() == AnimationState::Running
    }
}

/// Where animation frames end up.
pub trait FrameSink: Send + 'static {
    /// Remove the `lines` most recently drawn lines.
    fn erase(&mut self, lines: usize) -> io::Result<()>;

    fn draw(&mut self, frame_index: usize, text: &str) -> io::Result<()>;
}

/// Draws frames to a terminal stream, redrawing in place.
#[derive(Debug)]
pub struct TerminalSink<W> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + 'static> FrameSink for TerminalSink<W> {
    fn erase(&mut self, lines: usize) -> io::Result<()> {
        if lines == 0 {
            return Ok(());
        }
        let lines = u16::try_from(lines).unwrap_or(u16::MAX);
        queue!(self.out, MoveToPreviousLine(lines), Clear(ClearType::FromCursorDown))
    }

    fn draw(&mut self, _frame_index: usize, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

/// Cancellation handle for a running animation.
///
/// Dropping the handle does not stop the loop; call [`AnimationHandle::stop`].
pub struct AnimationHandle {
    state: Arc<SharedState>,
    task: Option<JoinHandle<()>>,
    on_complete: Option<Box<dyn FnOnce() + Send>>,
}

impl AnimationHandle {
    pub fn state(&self) -> AnimationState {
        self.state.get()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Stop the loop. No frame is drawn after this returns.
    ///
    /// A redraw already in progress is waited for. Safe to call any number
    /// of times; `on_complete` runs on the first call.
    pub fn stop(&mut self) {
        self.state.set(AnimationState::Stopped);
        drop(self.state.lock_draw());
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("animation stopped");
        }
        if let Some(done) = self.on_complete.take() {
            done();
        }
    }
}

impl fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("state", &self.state())
            .field("scheduled", &self.task.is_some())
            .finish()
    }
}

/// Start cycling through the frames of `scene`.
///
/// Frame 0 is drawn before this returns. Scenes with a single frame are
/// drawn once, `on_complete` runs immediately and no loop is started. For
/// animated scenes `on_complete` runs when the handle is stopped.
///
/// Must be called from within a tokio runtime when `scene` is animated.
pub fn animate<S, F>(
    scene: &'static Scene,
    ctx: RenderContext,
    frame_delay: Duration,
    mut sink: S,
    on_complete: F,
) -> AnimationHandle
where
    S: FrameSink,
    F: FnOnce() + Send + 'static,
{
    let state = Arc::new(SharedState::new(AnimationState::Idle));

    let drawn = draw_frame(&mut sink, scene, 0, &ctx).unwrap_or_else(|err| {
        warn!(scene = scene.name, error = %err, "failed to draw first frame");
        0
    });

    if !scene.is_animated() {
        on_complete();
        return AnimationHandle {
            state,
            task: None,
            on_complete: None,
        };
    }

    state.set(AnimationState::Running);
    debug!(
        scene = scene.name,
        frames = scene.frame_count(),
        delay = ?frame_delay,
        "animation started"
    );

    let task = tokio::spawn(run_loop(
        scene,
        ctx,
        frame_delay,
        sink,
        Arc::clone(&state),
        drawn,
    ));

    AnimationHandle {
        state,
        task: Some(task),
        on_complete: Some(Box::new(on_complete)),
    }
}

async fn run_loop<S: FrameSink>(
    scene: &'static Scene,
    ctx: RenderContext,
    frame_delay: Duration,
    mut sink: S,
    state: Arc<SharedState>,
    mut drawn: usize,
) {
    let mut frame_index = 1 % scene.frame_count();

    loop {
        tokio::time::sleep(frame_delay).await;

        match step(&mut sink, scene, frame_index, &ctx, drawn, &state) {
            Some(Ok(lines)) => drawn = lines,
            Some(Err(err)) => {
                warn!(scene = scene.name, frame_index, error = %err, "redraw failed, stopping animation");
                state.set(AnimationState::Stopped);
                break;
            }
            // A stop may land while this step was already scheduled.
            None => break,
        }

        frame_index = (frame_index + 1) % scene.frame_count();
    }
}

/// One locked redraw; `None` once the animation is no longer running.
///
/// Kept synchronous so the guard can never be held across an await.
fn step<S: FrameSink>(
    sink: &mut S,
    scene: &Scene,
    frame_index: usize,
    ctx: &RenderContext,
    drawn: usize,
    state: &SharedState,
) -> Option<io::Result<usize>> {
    let _guard = state.lock_draw();
    if !state.is_running() {
        return None;
    }
    Some(redraw(sink, scene, frame_index, ctx, drawn))
}

fn redraw<S: FrameSink>(
    sink: &mut S,
    scene: &Scene,
    frame_index: usize,
    ctx: &RenderContext,
    drawn: usize,
) -> io::Result<usize> {
    if drawn > 0 {
        sink.erase(drawn)?;
    }
    draw_frame(sink, scene, frame_index, ctx)
}

/// Draw one frame and return how many lines it took (0 when suppressed).
fn draw_frame<S: FrameSink>(
    sink: &mut S,
    scene: &Scene,
    frame_index: usize,
    ctx: &RenderContext,
) -> io::Result<usize> {
    let text = render_to_string(scene, frame_index, ctx);
    if text.is_empty() {
        return Ok(0);
    }
    sink.draw(frame_index, &text)?;
    Ok(scene.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{self, Role};
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    static FOUR: Scene = Scene {
        name: "four",
        width: 5,
        height: 1,
        default_role: Role::Cloud,
        char_roles: &[],
        frames: &[&["0"], &["1"], &["2"], &["3"]],
    };

    static STILL: Scene = Scene {
        name: "still",
        width: 5,
        height: 2,
        default_role: Role::Sun,
        char_roles: &[],
        frames: &[&["o", "|"]],
    };

    #[derive(Clone, Default)]
    struct Recorder {
        frames: Arc<Mutex<Vec<usize>>>,
        erased: Arc<Mutex<Vec<usize>>>,
        fail_after: Option<usize>,
    }

    impl Recorder {
        fn frames(&self) -> Vec<usize> {
            self.frames.lock().unwrap().clone()
        }
    }

    impl FrameSink for Recorder {
        fn erase(&mut self, lines: usize) -> io::Result<()> {
            self.erased.lock().unwrap().push(lines);
            Ok(())
        }

        fn draw(&mut self, frame_index: usize, _text: &str) -> io::Result<()> {
            let mut frames = self.frames.lock().unwrap();
            if self.fail_after.is_some_and(|n| frames.len() >= n) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            frames.push(frame_index);
            Ok(())
        }
    }

    fn ctx() -> RenderContext {
        RenderContext::new(80, false, None)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[tokio::test(start_paused = true)]
    async fn frames_advance_in_order_until_stopped() {
        let rec = Recorder::default();
        let mut handle = animate(&FOUR, ctx(), ms(10), rec.clone(), || {});
        assert_eq!(handle.state(), AnimationState::Running);
        assert_eq!(rec.frames(), vec![0]);

        tokio::time::sleep(ms(35)).await;
        assert_eq!(rec.frames(), vec![0, 1, 2, 3]);

        handle.stop();
        assert_eq!(handle.state(), AnimationState::Stopped);
        tokio::time::sleep(ms(50)).await;
        assert_eq!(rec.frames(), vec![0, 1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn frame_index_wraps_around() {
        let rec = Recorder::default();
        let mut handle = animate(&FOUR, ctx(), ms(10), rec.clone(), || {});
        tokio::time::sleep(ms(65)).await;
        handle.stop();
        assert_eq!(rec.frames(), vec![0, 1, 2, 3, 0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn each_redraw_erases_previous_block() {
        let rec = Recorder::default();
        let mut handle = animate(&scene::RAIN, ctx(), ms(10), rec.clone(), || {});
        tokio::time::sleep(ms(25)).await;
        handle.stop();
        assert_eq!(*rec.erased.lock().unwrap(), vec![scene::RAIN.height; 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_first_step_prevents_redraw() {
        let rec = Recorder::default();
        let mut handle = animate(&FOUR, ctx(), ms(10), rec.clone(), || {});
        handle.stop();
        tokio::time::sleep(ms(50)).await;
        assert_eq!(rec.frames(), vec![0]);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rec = Recorder::default();
        let mut handle = animate(&FOUR, ctx(), ms(10), rec.clone(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(ms(15)).await;
        handle.stop();
        handle.stop();
        tokio::time::sleep(ms(50)).await;

        assert_eq!(rec.frames(), vec![0, 1]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handle.state(), AnimationState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn static_scene_draws_once_and_completes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rec = Recorder::default();
        let mut handle = animate(&STILL, ctx(), ms(10), rec.clone(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handle.state(), AnimationState::Idle);
        tokio::time::sleep(ms(50)).await;
        assert_eq!(rec.frames(), vec![0]);

        handle.stop();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handle.state(), AnimationState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn narrow_terminal_draws_nothing_but_keeps_running() {
        let rec = Recorder::default();
        let narrow = RenderContext::new(20, false, None);
        let mut handle = animate(&FOUR, narrow, ms(10), rec.clone(), || {});
        tokio::time::sleep(ms(35)).await;
        assert!(rec.frames().is_empty());
        assert!(rec.erased.lock().unwrap().is_empty());
        assert!(handle.is_running());
        handle.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn draw_failure_stops_the_loop() {
        let rec = Recorder {
            fail_after: Some(2),
            ..Recorder::default()
        };
        let mut handle = animate(&FOUR, ctx(), ms(10), rec.clone(), || {});
        tokio::time::sleep(ms(50)).await;
        assert_eq!(rec.frames(), vec![0, 1]);
        assert_eq!(handle.state(), AnimationState::Stopped);
        handle.stop();
    }

    /// Records when each draw finishes; frame 1 takes a while to draw.
    #[derive(Clone, Default)]
    struct SlowSink {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl FrameSink for SlowSink {
        fn erase(&mut self, _lines: usize) -> io::Result<()> {
            Ok(())
        }

        fn draw(&mut self, frame_index: usize, _text: &str) -> io::Result<()> {
            if frame_index == 1 {
                std::thread::sleep(ms(100));
            }
            self.events.lock().unwrap().push(format!("drew {frame_index}"));
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn stop_waits_for_a_redraw_in_progress() {
        let sink = SlowSink::default();
        let events = Arc::clone(&sink.events);
        let mut handle = animate(&FOUR, ctx(), ms(10), sink, || {});

        // Frame 1 starts drawing at ~10ms and finishes at ~110ms.
        tokio::time::sleep(ms(40)).await;
        std::thread::spawn(move || {
            handle.stop();
            handle
        })
        .join()
        .unwrap();
        events.lock().unwrap().push("stopped".to_string());

        tokio::time::sleep(ms(150)).await;
        assert_eq!(*events.lock().unwrap(), vec!["drew 0", "drew 1", "stopped"]);
    }

    #[test]
    fn terminal_sink_writes_frames_and_erases_with_escapes() {
        let mut sink = TerminalSink::new(Vec::new());
        sink.draw(0, "ab\ncd").unwrap();
        sink.erase(0).unwrap();
        let plain_len = sink.out.len();
        assert_eq!(sink.out, b"ab\ncd\n");

        sink.erase(2).unwrap();
        let out = sink.into_inner();
        assert!(out.len() > plain_len);
        assert!(out[plain_len..].starts_with(b"\x1b["));
    }
}
