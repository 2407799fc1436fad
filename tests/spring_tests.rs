use pointmass::{PointSystem, Spring, Vec2};

#[test]
fn spring_at_rest_length_is_idle() {
    let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    let a = system.create_point(1.0, 0.0, 0.0).unwrap();
    let b = system.create_point(1.0, 3.0, 4.0).unwrap();
    let s = system.create_spring(a, b, 2.0, 0.3, 5.0).unwrap();

    system.apply_forces();
    assert!(system.point(a).unwrap().force.length() < 1e-12);
    assert!(system.point(b).unwrap().force.length() < 1e-12);
    assert!(system.spring(s).unwrap().resting(system.points()));
}

#[test]
fn stretched_spring_forces_point_at_each_other() {
    let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    let a = system.create_point(1.0, 0.0, 0.0).unwrap();
    let b = system.create_point(1.0, 10.0, 0.0).unwrap();
    system.create_spring(a, b, 1.0, 0.0, 5.0).unwrap();

    system.apply_forces();
    assert_eq!(system.point(a).unwrap().force, Vec2::new(5.0, 0.0));
    assert_eq!(system.point(b).unwrap().force, Vec2::new(-5.0, 0.0));
}

#[test]
fn undamped_spring_oscillates_around_rest_length() {
    let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    let anchor = system.create_point(1.0, 0.0, 0.0).unwrap();
    let bob = system.create_point(1.0, 3.0, 0.0).unwrap();
    system.point_mut(anchor).unwrap().make_fixed();
    system.create_spring(anchor, bob, 1.0, 0.0, 2.0).unwrap();

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    for _ in 0..700 {
        system.tick(0.01);
        let x = system.point(bob).unwrap().position.x;
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    // x(t) = 2 + cos t, so a full period visits both extremes.
    assert!((max_x - 3.0).abs() < 1e-4, "max_x = {}", max_x);
    assert!((min_x - 1.0).abs() < 1e-4, "min_x = {}", min_x);
}

#[test]
fn damped_spring_loses_energy() {
    let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    let anchor = system.create_point(1.0, 0.0, 0.0).unwrap();
    let bob = system.create_point(1.0, 4.0, 0.0).unwrap();
    system.point_mut(anchor).unwrap().make_fixed();
    let s = system.create_spring(anchor, bob, 1.0, 0.4, 2.0).unwrap();

    let initial = system.spring(s).unwrap().stretch(system.points()).unwrap().abs();
    for _ in 0..300 {
        system.tick(0.1);
    }
    let after = system.spring(s).unwrap().stretch(system.points()).unwrap().abs();
    assert!(after < initial * 0.01, "stretch went from {} to {}", initial, after);
}

#[test]
fn coincident_endpoints_add_nothing() {
    let mut system: PointSystem<f32> = PointSystem::new(0.0, 0.0, 0.0);
    let a = system.create_point(1.0, 1.0, 1.0).unwrap();
    let b = system.create_point(1.0, 1.0, 1.0).unwrap();
    system.create_spring(a, b, 5.0, 1.0, 2.0).unwrap();

    system.apply_forces();
    assert!(system.point(a).unwrap().force.is_zero());
    system.tick(1.0);
    let pa = system.point(a).unwrap().position;
    assert!(pa.x.is_finite() && pa.y.is_finite());
}

#[test]
fn turned_off_spring_is_ignored_by_tick() {
    let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    let a = system.create_point(1.0, 0.0, 0.0).unwrap();
    let b = system.create_point(1.0, 10.0, 0.0).unwrap();
    let s = system.create_spring(a, b, 1.0, 0.0, 5.0).unwrap();
    system.spring_mut(s).unwrap().turn_off();

    system.tick(1.0);
    assert_eq!(system.point(a).unwrap().position, Vec2::new(0.0, 0.0));
    assert!(!system.needs_update());
}

#[test]
fn spring_parameters_are_adjustable() {
    let mut spring: Spring<f32> = Spring::new(0, 1, 1.0, 0.0, 1.0);
    spring.set_strength(3.0);
    spring.set_damping(0.2);
    spring.set_rest_length(4.0);
    assert_eq!(spring.strength(), 3.0);
    assert_eq!(spring.damping(), 0.2);
    assert_eq!(spring.rest_length(), 4.0);
    assert!(spring.connects(1));
    assert!(!spring.connects(2));
}
