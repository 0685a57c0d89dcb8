use std::collections::HashSet;

use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::Result;

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Keys the demos react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Q,
    E,
    P,
    O,
    K,
    L,
    Num1,
    Num2,
    Num3,
    Num4,
    RightBracket,
    LeftBracket,
}

impl Key {
    pub fn from_keycode(keycode: Keycode) -> Option<Self> {
        let key = match keycode {
            Keycode::W => Key::W,
            Keycode::A => Key::A,
            Keycode::S => Key::S,
            Keycode::D => Key::D,
            Keycode::Q => Key::Q,
            Keycode::E => Key::E,
            Keycode::P => Key::P,
            Keycode::O => Key::O,
            Keycode::K => Key::K,
            Keycode::L => Key::L,
            Keycode::Num1 | Keycode::Kp1 => Key::Num1,
            Keycode::Num2 | Keycode::Kp2 => Key::Num2,
            Keycode::Num3 | Keycode::Kp3 => Key::Num3,
            Keycode::Num4 | Keycode::Kp4 => Key::Num4,
            Keycode::RightBracket => Key::RightBracket,
            Keycode::LeftBracket => Key::LeftBracket,
            _ => return None,
        };
        Some(key)
    }
}

/// Input gathered over one frame.
///
/// Keys are level-triggered: a key stays in `held` from its key-down event
/// until its key-up event. Mouse motion and scroll accumulate until
/// [`InputState::end_frame`] resets them.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    /// Mouse motion this frame in pixels, y positive upwards.
    pub mouse_delta: (f32, f32),
    /// Vertical wheel motion this frame.
    pub scroll: f32,
    pub right_button: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Adds raw SDL relative motion, reversing y so moving the mouse up is positive.
    pub fn add_mouse_motion(&mut self, xrel: i32, yrel: i32) {
        self.mouse_delta.0 += xrel as f32;
        self.mouse_delta.1 -= yrel as f32;
    }

    pub fn add_scroll(&mut self, amount: f32) {
        self.scroll += amount;
    }

    /// Clears per-frame accumulators; held keys and buttons persist.
    pub fn end_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll = 0.0;
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Sleeps off the rest of the frame budget and returns the milliseconds
    /// elapsed since the previous call.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    sdl_context: sdl2::Sdl,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let info = canvas.info();
        log::info!("renderer: {} ({width}x{height})", info.name);

        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // texture is declared before texture_creator so it is dropped first.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            sdl_context,
            width,
            height,
        })
    }

    /// Hides the cursor and reports unbounded relative motion.
    pub fn capture_mouse(&self, capture: bool) {
        self.sdl_context.mouse().set_relative_mouse_mode(capture);
    }

    /// Drains pending events into `input`. Quit wins over resize.
    pub fn poll_events(&mut self, input: &mut InputState) -> WindowEvent {
        let mut result = WindowEvent::None;
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        input.press(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        input.release(key);
                    }
                }
                Event::MouseMotion { xrel, yrel, .. } => input.add_mouse_motion(xrel, yrel),
                Event::MouseWheel { y, .. } => input.add_scroll(y as f32),
                Event::MouseButtonDown { mouse_btn, .. } => {
                    debug!("{} mouse button pressed", button_name(mouse_btn));
                    if mouse_btn == MouseButton::Right {
                        input.right_button = true;
                    }
                }
                Event::MouseButtonUp { mouse_btn, .. } => {
                    debug!("{} mouse button released", button_name(mouse_btn));
                    if mouse_btn == MouseButton::Right {
                        input.right_button = false;
                    }
                }
                _ => {}
            }
        }
        result
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

fn button_name(button: MouseButton) -> &'static str {
    match button {
        MouseButton::Left => "left",
        MouseButton::Middle => "middle",
        MouseButton::Right => "right",
        _ => "unhandled",
    }
}
