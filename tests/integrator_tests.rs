use pointmass::{IntegrationMethod, PointSystem, SystemConfig, Vec2};

fn falling_system(method: IntegrationMethod) -> PointSystem<f64> {
    let config = SystemConfig::new()
        .with_gravity(Vec2::new(0.0, -9.81))
        .with_drag(0.0)
        .with_method(method);
    let mut system = PointSystem::with_config(config);
    system.create_point(1.0, 0.0, 100.0).unwrap();
    system
}

#[test]
fn free_fall_is_exact_for_both_methods() {
    for method in [IntegrationMethod::RungeKutta4, IntegrationMethod::ModifiedEuler] {
        let mut system = falling_system(method);
        let dt = 1.0 / 60.0;
        for _ in 0..60 {
            system.tick(dt);
        }
        let p = system.point(0).unwrap();
        let expected_y = 100.0 - 0.5 * 9.81 * 1.0;
        assert!(
            (p.position.y - expected_y).abs() < 1e-9,
            "{:?}: pos.y = {}, expected {}",
            method,
            p.position.y,
            expected_y
        );
        assert!((p.velocity.y + 9.81).abs() < 1e-9);
    }
}

#[test]
fn runge_kutta_beats_modified_euler_on_a_spring() {
    let run = |method: IntegrationMethod| {
        let mut system: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
        system.set_integrator(method);
        let anchor = system.create_point(1.0, 0.0, 0.0).unwrap();
        let bob = system.create_point(1.0, 2.0, 0.0).unwrap();
        system.point_mut(anchor).unwrap().make_fixed();
        system.create_spring(anchor, bob, 4.0, 0.0, 1.0).unwrap();
        for _ in 0..100 {
            system.tick(0.05);
        }
        // x(t) = 1 + cos(2t) at t = 5
        let expected = 1.0 + libm::cos(10.0);
        (system.point(bob).unwrap().position.x - expected).abs()
    };
    let rk4_error = run(IntegrationMethod::RungeKutta4);
    let euler_error = run(IntegrationMethod::ModifiedEuler);
    assert!(rk4_error < 1e-4, "rk4 error = {}", rk4_error);
    assert!(rk4_error < euler_error, "rk4 {} vs euler {}", rk4_error, euler_error);
}

#[test]
fn larger_steps_stay_close_under_runge_kutta() {
    let mut fine: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    let mut coarse: PointSystem<f64> = PointSystem::new(0.0, 0.0, 0.0);
    for system in [&mut fine, &mut coarse] {
        let a = system.create_point(1.0, 0.0, 0.0).unwrap();
        let b = system.create_point(1.0, 3.0, 0.0).unwrap();
        system.create_spring(a, b, 1.0, 0.2, 1.0).unwrap();
    }
    for _ in 0..100 {
        fine.tick(0.01);
    }
    for _ in 0..10 {
        coarse.tick(0.1);
    }
    for (f, c) in fine.positions().iter().zip(coarse.positions().iter()) {
        assert!(f.distance(*c) < 1e-4, "fine {:?} vs coarse {:?}", f, c);
    }
}
