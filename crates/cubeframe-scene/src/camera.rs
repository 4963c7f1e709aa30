//! Camera controls and orbit navigation

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

/// Where the camera starts, looking at the origin
const INITIAL_EYE: Vec3 = Vec3::new(2.0, 2.0, 2.0);

const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 20.0;
const MAX_ELEVATION: f32 = 1.5;

/// Camera controller settings
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
    pub target_focus: Vec3,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::looking_from(INITIAL_EYE, Vec3::ZERO)
    }
}

impl CameraSettings {
    /// Orbit state that places the eye at `eye` around `target`
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        Self {
            distance,
            target_distance: distance,
            azimuth: offset.x.atan2(offset.z),
            elevation: (offset.y / distance).asin(),
            target,
            target_focus: target,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }

    /// Eye position for the current orbit state (Y up)
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.elevation.cos();
        self.target
            + Vec3::new(
                horizontal * self.azimuth.sin(),
                self.distance * self.elevation.sin(),
                horizontal * self.azimuth.cos(),
            )
    }

    fn orbit(&mut self, delta: Vec2) {
        self.azimuth -= delta.x * self.sensitivity;
        self.elevation =
            (self.elevation + delta.y * self.sensitivity).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    fn zoom(&mut self, factor: f32) {
        self.target_distance = (self.target_distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TouchGesture {
    /// One finger orbits
    Orbit,
    /// Two fingers zoom
    Pinch,
}

/// Gesture for the active touches; none while egui holds the pointer
fn touch_gesture(touches: usize, egui_wants_pointer: bool) -> Option<TouchGesture> {
    if egui_wants_pointer {
        return None;
    }
    match touches {
        1 => Some(TouchGesture::Orbit),
        2 => Some(TouchGesture::Pinch),
        _ => None,
    }
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for camera controls
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, update_camera);
    }
}

fn spawn_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        Transform::from_translation(settings.eye()).looking_at(settings.target, Vec3::Y),
        MainCamera,
    ));
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    time: Res<Time>,
    mut contexts: bevy_egui::EguiContexts,
) {
    // Check if egui wants the mouse - if so, don't process camera controls
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        settings.orbit(total_motion);
    }

    // Pan in the camera's view plane
    if mouse_button.pressed(MouseButton::Right) && !egui_wants_pointer {
        let right = Vec3::new(settings.azimuth.cos(), 0.0, -settings.azimuth.sin());
        let pan_speed = settings.distance * 0.002;
        settings.target_focus -= right * total_motion.x * pan_speed;
        settings.target_focus += Vec3::Y * total_motion.y * pan_speed;
    }

    if !egui_wants_pointer {
        for scroll in mouse_wheel.read() {
            let zoom_factor = 1.0 - scroll.y * settings.zoom_speed * 0.3;
            settings.zoom(zoom_factor);
        }
    } else {
        // Drain the scroll events even if we're not using them
        for _ in mouse_wheel.read() {}
    }

    match touch_gesture(touch_input.iter().count(), egui_wants_pointer) {
        Some(TouchGesture::Orbit) => {
            for touch in touch_input.iter() {
                let delta = touch.delta();
                if delta != Vec2::ZERO {
                    settings.orbit(delta);
                }
            }
        }
        Some(TouchGesture::Pinch) => {
            let touches: Vec<_> = touch_input.iter().collect();
            if let (Some(t1), Some(t2)) = (touches.first(), touches.get(1)) {
                let curr_dist = t1.position().distance(t2.position());
                let prev_dist = (t1.position() - t1.delta()).distance(t2.position() - t2.delta());
                settings.zoom(prev_dist / curr_dist.max(1.0));
            }
        }
        None => {}
    }

    // Damping: ease distance and target toward their goals
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance += (settings.target_distance - settings.distance) * lerp_factor;
    settings.target = settings.target + (settings.target_focus - settings.target) * lerp_factor;

    if let Ok(mut transform) = camera_query.single_mut() {
        transform.translation = settings.eye();
        transform.look_at(settings.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye_matches_initial_position() {
        let settings = CameraSettings::default();
        assert!(settings.eye().abs_diff_eq(INITIAL_EYE, 1e-5));
        assert!((settings.distance - 12.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_orbit_clamps_elevation() {
        let mut settings = CameraSettings::default();
        settings.orbit(Vec2::new(0.0, 10_000.0));
        assert_eq!(settings.elevation, MAX_ELEVATION);
        settings.orbit(Vec2::new(0.0, -10_000.0));
        assert_eq!(settings.elevation, -MAX_ELEVATION);
    }

    #[test]
    fn test_zoom_clamps_distance() {
        let mut settings = CameraSettings::default();
        settings.zoom(100.0);
        assert_eq!(settings.target_distance, MAX_DISTANCE);
        settings.zoom(0.0);
        assert_eq!(settings.target_distance, MIN_DISTANCE);
    }

    #[test]
    fn test_touch_gestures_yield_to_egui() {
        assert_eq!(touch_gesture(1, false), Some(TouchGesture::Orbit));
        assert_eq!(touch_gesture(2, false), Some(TouchGesture::Pinch));
        assert_eq!(touch_gesture(3, false), None);
        assert_eq!(touch_gesture(1, true), None);
        assert_eq!(touch_gesture(2, true), None);
    }

    #[test]
    fn test_eye_keeps_distance_while_orbiting() {
        let mut settings = CameraSettings::default();
        settings.orbit(Vec2::new(120.0, -40.0));
        assert!((settings.eye().distance(settings.target) - settings.distance).abs() < 1e-4);
    }
}
