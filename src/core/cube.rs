use crate::core::constants::*;

/// Receives every orientation change, synchronously.
pub trait RenderTarget {
    fn apply_rotation(&mut self, rotation_x: f64, rotation_y: f64);
    /// Toggle the "being dragged" visual state (cursor, transitions).
    fn set_dragging(&mut self, dragging: bool);
}

/// Handle of one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Per-frame callback scheduling. The scheduled frame calls back into
/// [`CubeController::tick`].
pub trait FrameScheduler {
    /// Returns `None` when the host cannot schedule a frame.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Device-class and viewport queries.
pub trait DeviceProbe {
    fn supports_touch(&self) -> bool;
    fn viewport_width(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            rotation_x: DEFAULT_ROTATION_X,
            rotation_y: DEFAULT_ROTATION_Y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeFace {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl CubeFace {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "front" => Some(CubeFace::Front),
            "back" => Some(CubeFace::Back),
            "left" => Some(CubeFace::Left),
            "right" => Some(CubeFace::Right),
            "top" => Some(CubeFace::Top),
            "bottom" => Some(CubeFace::Bottom),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
        }
    }

    pub fn orientation(self) -> Orientation {
        let name = self.name();
        let (rotation_x, rotation_y) = FACE_ROTATIONS
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, x, y)| (x, y))
            .unwrap_or((DEFAULT_ROTATION_X, DEFAULT_ROTATION_Y));
        Orientation {
            rotation_x,
            rotation_y,
        }
    }
}

/// Drag and auto-rotation speeds for the current device and viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensitivityProfile {
    pub drag_speed: f64,
    pub auto_speed: f64,
}

/// Overridable tuning; `Default` reads `core::constants`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeConfig {
    pub pointer_drag_speed: f64,
    pub touch_drag_speed: f64,
    pub wide_auto_speed: f64,
    pub narrow_auto_speed: f64,
    pub narrow_viewport_max_px: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            pointer_drag_speed: POINTER_DRAG_SPEED,
            touch_drag_speed: TOUCH_DRAG_SPEED,
            wide_auto_speed: WIDE_AUTO_ROTATION_SPEED,
            narrow_auto_speed: NARROW_AUTO_ROTATION_SPEED,
            narrow_viewport_max_px: NARROW_VIEWPORT_MAX_PX,
        }
    }
}

impl CubeConfig {
    /// Touch devices and narrow viewports both get the reduced pair of speeds.
    pub fn profile_for(&self, supports_touch: bool, viewport_width: f64) -> SensitivityProfile {
        if supports_touch || viewport_width < self.narrow_viewport_max_px {
            SensitivityProfile {
                drag_speed: self.touch_drag_speed,
                auto_speed: self.narrow_auto_speed,
            }
        } else {
            SensitivityProfile {
                drag_speed: self.pointer_drag_speed,
                auto_speed: self.wide_auto_speed,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Mouse(i32),
    Touch(i32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    pub last_x: f64,
    pub last_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub x: f64,
    pub y: f64,
}

/// Input already translated out of the DOM.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    MouseDown { button: i16, x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    TouchStart { touches: Vec<TouchPoint> },
    TouchMove { touches: Vec<TouchPoint> },
    TouchEnd { remaining: usize },
    ContextMenu,
}

/// Last known page and viewport visibility. Auto-rotation only runs while
/// both hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewGate {
    pub page_visible: bool,
    pub in_view: bool,
}

impl Default for ViewGate {
    fn default() -> Self {
        Self {
            page_visible: true,
            in_view: true,
        }
    }
}

impl ViewGate {
    #[inline]
    pub fn is_open(self) -> bool {
        self.page_visible && self.in_view
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeState {
    AutoRotating,
    Stopped,
    Dragging,
}

pub struct CubeController<R: RenderTarget, S: FrameScheduler> {
    target: R,
    scheduler: S,
    config: CubeConfig,
    orientation: Orientation,
    profile: SensitivityProfile,
    session: Option<DragSession>,
    auto_rotate: bool,
    frame: Option<FrameHandle>,
    initialized: bool,
}

impl<R: RenderTarget, S: FrameScheduler> CubeController<R, S> {
    pub fn new(target: R, scheduler: S, config: CubeConfig) -> Self {
        let profile = config.profile_for(false, config.narrow_viewport_max_px);
        Self {
            target,
            scheduler,
            config,
            orientation: Orientation::default(),
            profile,
            session: None,
            auto_rotate: true,
            frame: None,
            initialized: false,
        }
    }

    /// Apply the device profile, draw the default orientation and start
    /// auto-rotation. Later calls do nothing.
    pub fn initialize(&mut self, device: &impl DeviceProbe) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.handle_resize(device);
        self.render();
        self.start_auto_rotation();
        log::info!(
            "[cube] initialized touch={} drag_speed={} auto_speed={}",
            device.supports_touch(),
            self.profile.drag_speed,
            self.profile.auto_speed
        );
    }

    /// Start a drag session. Ignored while another session is active.
    pub fn begin_drag(&mut self, pointer_id: i32, x: f64, y: f64) -> bool {
        self.begin_session(DragSource::Mouse(pointer_id), x, y)
    }

    fn begin_session(&mut self, source: DragSource, x: f64, y: f64) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.stop_auto_rotation();
        self.session = Some(DragSession {
            source,
            last_x: x,
            last_y: y,
        });
        self.target.set_dragging(true);
        log::info!("[cube] begin drag {:?} at ({}, {})", source, x, y);
        true
    }

    /// Rotate by the movement since the last recorded position. No-op
    /// without an active session.
    pub fn continue_drag(&mut self, x: f64, y: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let dx = x - session.last_x;
        let dy = y - session.last_y;
        session.last_x = x;
        session.last_y = y;
        self.orientation.rotation_y += dx * self.profile.drag_speed;
        // Vertical drag is inverted.
        self.orientation.rotation_x -= dy * self.profile.drag_speed;
        self.render();
    }

    /// Finish the active session and resume auto-rotation if enabled.
    pub fn end_drag(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        self.target.set_dragging(false);
        log::info!("[cube] end drag at {:?}", self.orientation);
        self.start_auto_rotation();
    }

    /// One auto-rotation frame. Reschedules itself only while enabled and
    /// not dragging.
    pub fn tick(&mut self) {
        // The frame that called us has fired; its handle is spent.
        self.frame = None;
        if self.session.is_some() || !self.auto_rotate {
            return;
        }
        self.orientation.rotation_y += self.profile.auto_speed;
        self.render();
        self.frame = self.scheduler.request_frame();
    }

    pub fn start_auto_rotation(&mut self) {
        if !self.auto_rotate || self.session.is_some() || self.frame.is_some() {
            return;
        }
        self.frame = self.scheduler.request_frame();
    }

    pub fn stop_auto_rotation(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Start or pause the auto-rotation loop to match `gate`. The enabled flag
    /// is left alone.
    pub fn follow_view(&mut self, gate: ViewGate) {
        if gate.is_open() {
            self.start_auto_rotation();
        } else {
            self.stop_auto_rotation();
        }
    }

    /// Back to the default orientation. Session and auto-rotation are left
    /// alone.
    pub fn reset(&mut self) {
        self.orientation = Orientation::default();
        self.render();
    }

    /// Flip auto-rotation and return the new enabled state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        if self.auto_rotate {
            self.start_auto_rotation();
        } else {
            self.stop_auto_rotation();
        }
        log::info!("[cube] auto-rotate={}", self.auto_rotate);
        self.auto_rotate
    }

    pub fn rotate_to_face(&mut self, face: CubeFace) {
        self.orientation = face.orientation();
        self.render();
    }

    /// Unknown names leave the orientation unchanged.
    pub fn rotate_to_face_named(&mut self, name: &str) {
        match CubeFace::parse(name) {
            Some(face) => self.rotate_to_face(face),
            None => log::debug!("[cube] ignoring unknown face {:?}", name),
        }
    }

    pub fn handle_resize(&mut self, device: &impl DeviceProbe) {
        self.profile = self
            .config
            .profile_for(device.supports_touch(), device.viewport_width());
    }

    /// Dispatch a translated DOM event. Returns `true` when the event was
    /// consumed and the browser default should be suppressed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::MouseDown { button, x, y } => {
                *button == PRIMARY_MOUSE_BUTTON && self.begin_drag(MOUSE_POINTER_ID, *x, *y)
            }
            InputEvent::MouseMove { x, y } => match self.session {
                Some(DragSession {
                    source: DragSource::Mouse(_),
                    ..
                }) => {
                    self.continue_drag(*x, *y);
                    false
                }
                _ => false,
            },
            InputEvent::MouseUp => {
                if matches!(
                    self.session,
                    Some(DragSession {
                        source: DragSource::Mouse(_),
                        ..
                    })
                ) {
                    self.end_drag();
                }
                false
            }
            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [only] => self.begin_session(DragSource::Touch(only.id), only.x, only.y),
                _ => false,
            },
            InputEvent::TouchMove { touches } => match (self.session, touches.as_slice()) {
                (
                    Some(DragSession {
                        source: DragSource::Touch(_),
                        ..
                    }),
                    [only],
                ) => {
                    self.continue_drag(only.x, only.y);
                    true
                }
                _ => false,
            },
            InputEvent::TouchEnd { .. } => {
                if matches!(
                    self.session,
                    Some(DragSession {
                        source: DragSource::Touch(_),
                        ..
                    })
                ) {
                    self.end_drag();
                }
                false
            }
            InputEvent::ContextMenu => true,
        }
    }

    fn render(&mut self) {
        self.orientation.rotation_x = self
            .orientation
            .rotation_x
            .clamp(ROTATION_X_MIN, ROTATION_X_MAX);
        self.target
            .apply_rotation(self.orientation.rotation_x, self.orientation.rotation_y);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn profile(&self) -> SensitivityProfile {
        self.profile
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    pub fn is_auto_rotation_scheduled(&self) -> bool {
        self.frame.is_some()
    }

    pub fn state(&self) -> CubeState {
        if self.session.is_some() {
            CubeState::Dragging
        } else if self.frame.is_some() {
            CubeState::AutoRotating
        } else {
            CubeState::Stopped
        }
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<R: RenderTarget, S: FrameScheduler> Drop for CubeController<R, S> {
    fn drop(&mut self) {
        // No frame may fire into a controller that no longer exists.
        self.stop_auto_rotation();
    }
}

/// CSS transform for an orientation. Y is emitted unreduced so consecutive
/// frames never jump a full turn.
pub fn rotation_transform(rotation_x: f64, rotation_y: f64) -> String {
    format!("rotateX({}deg) rotateY({}deg)", rotation_x, rotation_y)
}
