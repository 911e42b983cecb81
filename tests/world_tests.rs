use anyhow::anyhow;
use glam::DVec3;
use trail_walker::core::InputState;
use trail_walker::loaders::ActorModel;
use trail_walker::{MovementMode, SceneConfig, World};

#[cfg(test)]
mod world_tests {
    use super::*;

    fn forward() -> InputState {
        InputState { forward: true, ..Default::default() }
    }

    fn world_with_hiker(mode: MovementMode) -> World {
        let mut world = World::new(SceneConfig::default(), mode).unwrap();
        assert!(world.receive_actor(Ok(ActorModel::hiker())).is_some());
        world
    }

    #[test]
    fn test_tick_is_gated_until_actor_loads() {
        let mut world = World::new(SceneConfig::default(), MovementMode::FollowPath).unwrap();
        let camera = world.camera().position;

        for _ in 0..10 {
            assert!(world.tick(&forward()).is_none());
        }
        assert_eq!(world.progress(), 0.0);
        assert_eq!(world.camera().position, camera);

        world.receive_actor(Ok(ActorModel::hiker()));
        let state = world.tick(&forward()).unwrap();
        assert_eq!(state.frame, 0);
        assert!(state.progress > 0.0);
    }

    #[test]
    fn test_failed_load_keeps_world_inert() {
        let mut world = World::new(SceneConfig::default(), MovementMode::FollowPath).unwrap();
        assert!(world.receive_actor(Err(anyhow!("model missing"))).is_none());
        assert!(world.actor().is_none());
        assert!(world.tick(&forward()).is_none());
    }

    #[test]
    fn test_walking_forward_accumulates_progress() {
        let mut world = world_with_hiker(MovementMode::FollowPath);
        for _ in 0..100 {
            world.tick(&forward()).unwrap();
        }
        assert!((world.progress() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_opposing_input_holds_position() {
        let mut world = world_with_hiker(MovementMode::FollowPath);
        for _ in 0..50 {
            world.tick(&forward());
        }
        let before = world.progress();

        let both = InputState { forward: true, backward: true, ..Default::default() };
        for _ in 0..50 {
            world.tick(&both);
        }
        assert_eq!(world.progress(), before);
    }

    #[test]
    fn test_progress_stops_at_trail_end() {
        let config = SceneConfig { path_speed: 0.3, ..Default::default() };
        let mut world = World::new(config, MovementMode::FollowPath).unwrap();
        world.receive_actor(Ok(ActorModel::hiker()));

        let mut last = None;
        for _ in 0..10 {
            last = world.tick(&forward());
        }
        let state = last.unwrap();
        assert_eq!(state.progress, 1.0);
        assert!((state.actor.position - DVec3::new(110.0, 0.0, 0.0)).length() < 1e-9);
        // Nothing left to look ahead to; the camera aims at the actor
        assert!((state.camera_look_at - state.actor.position).length() < 1e-9);
    }

    #[test]
    fn test_camera_trails_behind_actor() {
        let mut world = world_with_hiker(MovementMode::FollowPath);
        let mut state = None;
        for _ in 0..400 {
            state = world.tick(&InputState::default());
        }
        let state = state.unwrap();

        let behind = state.actor.transform().transform_point3(DVec3::new(0.0, 5.0, -10.0));
        assert!((state.camera_position - behind).length() < 1e-6);
    }

    #[test]
    fn test_free_roam_moves_on_ground_plane() {
        let mut world = world_with_hiker(MovementMode::FreeRoam);
        let start = world.tick(&InputState::default()).unwrap().actor.position;

        let input = InputState { forward: true, left: true, ..Default::default() };
        let moved = world.tick(&input).unwrap();

        assert!((moved.actor.position - (start + DVec3::new(-0.1, 0.0, -0.1))).length() < 1e-9);
        assert_eq!(moved.progress, 0.0);
        assert_eq!(moved.camera_look_at, moved.actor.position);
    }

    #[test]
    fn test_free_roam_camera_pulls_further_back() {
        let mut world = world_with_hiker(MovementMode::FreeRoam);
        let mut state = None;
        for _ in 0..600 {
            state = world.tick(&InputState::default());
        }
        let state = state.unwrap();

        let behind = state.actor.transform().transform_point3(DVec3::new(0.0, 10.0, -40.0));
        assert!((state.camera_position - behind).length() < 1e-6);
        assert_eq!(world.camera().smoothing, 0.05);
    }

    #[test]
    fn test_toggle_round_trip_snaps_back_to_trail() {
        let mut world = world_with_hiker(MovementMode::FollowPath);
        for _ in 0..25 {
            world.tick(&forward());
        }
        let progress = world.progress();
        let on_trail = world.curve().point_at(progress);

        let toggle = InputState { toggle_mode: true, ..Default::default() };
        world.tick(&toggle).unwrap();
        assert_eq!(world.mode(), MovementMode::FreeRoam);

        let wander = InputState { right: true, ..Default::default() };
        let away = world.tick(&wander).unwrap();
        assert!((away.actor.position - on_trail).length() > 0.05);
        assert_eq!(away.progress, progress);

        let back = world.tick(&toggle).unwrap();
        assert_eq!(world.mode(), MovementMode::FollowPath);
        assert!((back.actor.position - on_trail).length() < 1e-9);
    }
}
