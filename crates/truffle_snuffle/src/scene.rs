//! The pig-and-truffle scene
//!
//! Frame order: input, jump, easing, integration, camera follow, then a
//! fresh collision pass over the pig/truffle pair.

use truffle_engine::debug::{CollisionDebugVisualizer, DebugRenderer};
use truffle_engine::foundation::math::Mat4;
use truffle_engine::foundation::time::FrameTime;
use truffle_engine::input::InputState;
use truffle_engine::physics::{Body, BodyId, CollisionPair, PhysicsWorld};
use truffle_engine::render::Camera;

use crate::config::GameConfig;
use crate::controls::{Jump, PlayerController};
use crate::easing::PingPongEase;
use crate::error::GameError;

/// What happened during one scene update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Pig and truffle are touching after this frame
    pub colliding: bool,
    /// Contact began this frame
    pub entered: bool,
    /// Contact ended this frame
    pub exited: bool,
    /// The player pressed Escape
    pub exit_requested: bool,
}

/// Game scene holding the pig, the truffle and the camera
pub struct TruffleScene {
    world: PhysicsWorld,
    player: BodyId,
    truffle: BodyId,
    pairs: Vec<CollisionPair>,
    camera: Camera,
    controller: PlayerController,
    jump: Jump,
    easing: PingPongEase,
    easing_enabled: bool,
    visualizer: CollisionDebugVisualizer,
    was_colliding: bool,
}

impl TruffleScene {
    /// Build the scene from configuration
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let player_body = config
            .player
            .build_body()
            .map_err(|source| GameError::Model { object: "player", source })?;
        let truffle_body = config
            .truffle
            .build_body()
            .map_err(|source| GameError::Model { object: "truffle", source })?;

        let mut world = PhysicsWorld::new();
        let player = world.insert(player_body);
        let truffle = world.insert(truffle_body);

        let mut camera = config.camera.clone();
        camera.follow(world.body(player).position);

        let mut visualizer = CollisionDebugVisualizer::new().with_colors(config.debug.colors);
        visualizer.enabled = config.debug.draw_volumes;

        log::info!(
            "Scene ready: player {:?} at {:?}, truffle {:?} at {:?}",
            world.body(player).bounding_type,
            world.body(player).position.as_slice(),
            world.body(truffle).bounding_type,
            world.body(truffle).position.as_slice(),
        );

        Ok(Self {
            world,
            player,
            truffle,
            pairs: vec![CollisionPair::new(player, truffle)],
            camera,
            controller: PlayerController::new(&config.gameplay),
            jump: Jump::new(&config.gameplay),
            easing: PingPongEase::new(config.easing.duration, config.easing.start, config.easing.end),
            easing_enabled: config.easing.enabled,
            visualizer,
            was_colliding: false,
        })
    }

    /// Advance the scene by one frame
    pub fn update(&mut self, frame: FrameTime, input: &InputState) -> FrameReport {
        let exit_requested = input.exit_requested();

        let player = self.world.body_mut(self.player);
        self.controller.apply(player, input);
        self.jump.update(player, input, frame.total);

        let eased = self.easing.update(frame.delta);
        if self.easing_enabled {
            self.world.body_mut(self.truffle).position = eased;
        }

        self.world.integrate_all(frame.delta);
        self.camera.follow(self.world.body(self.player).position);

        self.world.detect_collisions(&self.pairs);
        let colliding = self.world.body(self.player).is_colliding();
        let report = FrameReport {
            colliding,
            entered: colliding && !self.was_colliding,
            exited: !colliding && self.was_colliding,
            exit_requested,
        };
        self.was_colliding = colliding;

        if report.entered {
            log::info!("The pig found the truffle at {:.2}s", frame.total);
        } else if report.exited {
            log::info!("The pig wandered off the truffle at {:.2}s", frame.total);
        }
        log::trace!(
            "t={:.3} pig pos={:?} vel={:?} airborne={}",
            frame.total,
            self.player_body().position.as_slice(),
            self.player_body().velocity.as_slice(),
            self.jump.is_airborne(),
        );

        report
    }

    /// Draw every collision volume
    pub fn draw_debug(&self, renderer: &mut impl DebugRenderer) {
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix();
        self.visualizer.draw_world(renderer, &self.world, &view, &projection);
    }

    /// World matrices of the pig and truffle models, in that order
    pub fn model_transforms(&self) -> [Mat4; 2] {
        [self.player_body().world_matrix(), self.truffle_body().world_matrix()]
    }

    /// The pig
    pub fn player_body(&self) -> &Body {
        self.world.body(self.player)
    }

    /// The truffle
    pub fn truffle_body(&self) -> &Body {
        self.world.body(self.truffle)
    }

    #[cfg(test)]
    pub fn player_body_mut(&mut self) -> &mut Body {
        self.world.body_mut(self.player)
    }

    /// The follow camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use truffle_engine::debug::{DebugDrawSystem, DebugShape};
    use truffle_engine::foundation::math::{Point3, Vec3};
    use truffle_engine::input::KeyCode;
    use truffle_engine::physics::CollisionState;

    const DT: f32 = 1.0 / 60.0;

    fn run(scene: &mut TruffleScene, frames: usize, total: &mut f32, input: &InputState) -> Vec<FrameReport> {
        (0..frames)
            .map(|_| {
                *total += DT;
                scene.update(FrameTime::new(DT, *total), input)
            })
            .collect()
    }

    #[test]
    fn test_default_scene_starts_apart() {
        let mut scene = TruffleScene::new(&GameConfig::default()).unwrap();
        let mut total = 0.0;

        let reports = run(&mut scene, 10, &mut total, &InputState::new());

        assert!(reports.iter().all(|r| !r.colliding));
        assert_eq!(scene.player_body().collision_state(), CollisionState::Idle);
        assert_relative_eq!(scene.player_body().position, Vec3::zeros());
    }

    #[test]
    fn test_pig_walks_into_truffle_and_back_out() {
        let mut scene = TruffleScene::new(&GameConfig::default()).unwrap();
        let mut total = 0.0;

        // Face +X (16 * 0.1 rad is close to a quarter turn), then walk
        run(&mut scene, 16, &mut total, &InputState::from_keys([KeyCode::Left]));
        let walking = run(&mut scene, 60, &mut total, &InputState::from_keys([KeyCode::Up]));

        let entered_at = walking.iter().position(|r| r.entered).expect("pig never reached the truffle");
        assert!(walking[entered_at..].iter().all(|r| r.colliding));
        assert!(scene.truffle_body().is_colliding());
        assert_eq!(scene.truffle_body().colliding_with().len(), 1);

        // Teleport back to the start: contact ends on the next pass
        scene.player_body_mut().position = Vec3::zeros();
        scene.player_body_mut().velocity = Vec3::zeros();
        let back = run(&mut scene, 1, &mut total, &InputState::new());
        assert!(back[0].exited);
        assert!(!scene.truffle_body().is_colliding());
    }

    #[test]
    fn test_camera_tracks_player() {
        let mut scene = TruffleScene::new(&GameConfig::default()).unwrap();
        let mut total = 0.0;

        run(&mut scene, 30, &mut total, &InputState::from_keys([KeyCode::Up]));

        assert_relative_eq!(scene.camera().target, scene.player_body().position);
        assert!(scene.player_body().position.z > 0.0);
    }

    #[test]
    fn test_jump_lifts_collision_volume() {
        let mut scene = TruffleScene::new(&GameConfig::default()).unwrap();
        let mut total = 0.0;

        run(&mut scene, 1, &mut total, &InputState::from_keys([KeyCode::Space]));
        run(&mut scene, 10, &mut total, &InputState::new());

        assert!(scene.player_body().position.y > 0.0);
        let origin = scene.model_transforms()[0].transform_point(&Point3::origin());
        assert_relative_eq!(origin.y, scene.player_body().position.y, epsilon = 1e-3);
    }

    #[test]
    fn test_easing_moves_truffle_when_enabled() {
        let mut config = GameConfig::default();
        config.easing.enabled = true;
        let mut scene = TruffleScene::new(&config).unwrap();
        let mut total = 0.0;

        run(&mut scene, 90, &mut total, &InputState::new());

        let x = scene.truffle_body().position.x;
        assert!(x > 200.0 && x < 400.0, "truffle at {}", x);
    }

    #[test]
    fn test_escape_is_reported() {
        let mut scene = TruffleScene::new(&GameConfig::default()).unwrap();
        let mut total = 0.0;

        let reports = run(&mut scene, 1, &mut total, &InputState::from_keys([KeyCode::Escape]));

        assert!(reports[0].exit_requested);
    }

    #[test]
    fn test_debug_draw_shows_both_volumes() {
        let config = GameConfig::default();
        let scene = TruffleScene::new(&config).unwrap();
        let mut recorder = DebugDrawSystem::new();

        scene.draw_debug(&mut recorder);

        assert_eq!(recorder.shape_count(), 2);
        assert!(recorder.shapes().iter().any(|s| matches!(s, DebugShape::Sphere { .. })));
        assert!(recorder.shapes().iter().any(|s| matches!(s, DebugShape::Box { .. })));
        assert!(recorder.shapes().iter().all(|s| s.color() == config.debug.colors.sphere_idle));
    }
}
