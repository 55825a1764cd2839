use approx::assert_relative_eq;
use frame_solver::prelude::*;

const E: f64 = 2e11;
const G: f64 = 7.692e10;
const L: f64 = 5.0;

fn section() -> Section {
    Section::new(1.66e-3, 1.97e-8, 6.35e-6, 8.20e-7)
}

/// Two-node cantilever along global X, fixed at the origin
fn build_cantilever(tip_load: NodeLoad) -> (FrameModel, NodeId, NodeId, BarId) {
    let mut model = FrameModel::new();
    let material = model.add_material("Steel", Material::new(E, G, 0.3, 7850.0)).unwrap();
    let section = model.add_section("S", section()).unwrap();
    let root = model.add_node("Root", Node::new(0.0, 0.0, 0.0)).unwrap();
    let tip = model.add_node("Tip", Node::new(L, 0.0, 0.0)).unwrap();
    let bar = model.add_bar("B", Bar::new(root, tip, section, material)).unwrap();
    model.add_support(root, Support::fixed()).unwrap();
    model.add_load_case(LoadCase::new("Tip").with_node_load(tip, tip_load)).unwrap();
    (model, root, tip, bar)
}

#[test]
fn tip_deflection_and_rotation_match_beam_theory() {
    let p = -5000.0;
    let (mut model, _, tip, _) = build_cantilever(NodeLoad::force("P", 0.0, p, 0.0));
    model.analyze().unwrap();

    let iz = section().iz;
    let disp = model.node_displacement(tip, "Tip").unwrap();
    assert_relative_eq!(disp.dy, p * L.powi(3) / (3.0 * E * iz), max_relative = 1e-6);
    assert_relative_eq!(disp.rz, p * L.powi(2) / (2.0 * E * iz), max_relative = 1e-6);
    assert!(disp.dz.abs() < 1e-15);
}

#[test]
fn combined_tip_load_matches_closed_form() {
    let (fx, fy, fz) = (10e3, 11e3, 12e3);
    let (mx, my, mz) = (10e3, 11e3, 12e3);
    let (mut model, root, tip, _) = build_cantilever(NodeLoad::new("P", fx, fy, fz, mx, my, mz));
    model.analyze().unwrap();

    let s = section();
    let disp = model.node_displacement(tip, "Tip").unwrap();
    assert_relative_eq!(disp.dx, fx * L / (E * s.area), max_relative = 1e-6);
    assert_relative_eq!(
        disp.dy,
        fy * L.powi(3) / (3.0 * E * s.iz) + mz * L.powi(2) / (2.0 * E * s.iz),
        max_relative = 1e-6
    );
    assert_relative_eq!(
        disp.dz,
        fz * L.powi(3) / (3.0 * E * s.iy) - my * L.powi(2) / (2.0 * E * s.iy),
        max_relative = 1e-6
    );
    assert_relative_eq!(disp.rx, mx * L / (G * s.ix), max_relative = 1e-6);
    assert_relative_eq!(
        disp.ry,
        -fz * L.powi(2) / (2.0 * E * s.iy) + my * L / (E * s.iy),
        max_relative = 1e-6
    );
    assert_relative_eq!(
        disp.rz,
        fy * L.powi(2) / (2.0 * E * s.iz) + mz * L / (E * s.iz),
        max_relative = 1e-6
    );

    // Root reactions balance the tip load and its lever arm
    let rxn = model.node_reactions(root, "Tip").unwrap();
    assert_relative_eq!(rxn.fx, -fx, max_relative = 1e-9);
    assert_relative_eq!(rxn.fy, -fy, max_relative = 1e-9);
    assert_relative_eq!(rxn.fz, -fz, max_relative = 1e-9);
    assert_relative_eq!(rxn.mx, -mx, max_relative = 1e-9);
    assert_relative_eq!(rxn.my, fz * L - my, max_relative = 1e-9);
    assert_relative_eq!(rxn.mz, -(mz + fy * L), max_relative = 1e-9);

    // The free tip has no reaction
    let free = model.node_reactions(tip, "Tip").unwrap();
    assert_eq!(free.as_array(), [0.0; 6]);
}

#[test]
fn end_forces_of_tip_loaded_cantilever() {
    let p = -1000.0;
    let (mut model, _, _, bar) = build_cantilever(NodeLoad::force("P", 0.0, p, 0.0));
    model.analyze().unwrap();

    let forces = model.bar_end_forces(bar, "Tip").unwrap();
    assert_relative_eq!(forces[1], -p, max_relative = 1e-9);
    assert_relative_eq!(forces[5], -p * L, max_relative = 1e-9);
    assert_relative_eq!(forces[7], p, max_relative = 1e-9);
    assert!(forces[11].abs() < 1e-6);

    // Hogging along the whole length, zero at the tip
    let root = model.moment_z(bar, 0.0, "Tip").unwrap();
    assert_relative_eq!(root.right, p * L, max_relative = 1e-9);
    let mid = model.moment_z(bar, L / 2.0, "Tip").unwrap();
    assert_relative_eq!(mid.left, p * L / 2.0, max_relative = 1e-9);
    let shear = model.shear_y(bar, 1.0, "Tip").unwrap();
    assert_relative_eq!(shear.left, -p, max_relative = 1e-9);
}

#[test]
fn penalty_and_elimination_agree() {
    let load = NodeLoad::new("P", 10e3, 11e3, 12e3, 10e3, 11e3, 12e3);
    let (mut penalty, root, tip, _) = build_cantilever(load.clone());
    let (mut elimination, _, _, _) = build_cantilever(load);

    penalty.analyze().unwrap();
    elimination
        .analyze_with(&AnalysisOptions::linear().with_elimination())
        .unwrap();

    let a = penalty.node_displacement(tip, "Tip").unwrap().as_array();
    let b = elimination.node_displacement(tip, "Tip").unwrap().as_array();
    for (x, y) in a.iter().zip(&b) {
        assert_relative_eq!(*x, *y, max_relative = 1e-8);
    }

    let ra = penalty.node_reactions(root, "Tip").unwrap().as_array();
    let rb = elimination.node_reactions(root, "Tip").unwrap().as_array();
    for (x, y) in ra.iter().zip(&rb) {
        assert_relative_eq!(*x, *y, max_relative = 1e-8);
    }

    // Elimination leaves the fixed node exactly in place
    let fixed = elimination.node_displacement(root, "Tip").unwrap();
    assert_eq!(fixed.as_array(), [0.0; 6]);
}

#[test]
fn uniform_load_on_cantilever() {
    let w = -2000.0;
    let (mut model, root, tip, bar) = build_cantilever(NodeLoad::force("None", 0.0, 0.0, 0.0));
    model
        .add_load_case(
            LoadCase::new("UDL").with_distributed_load(bar, BarDistributedLoad::uniform("w", LoadComponent::Fy, w)),
        )
        .unwrap();
    model.analyze().unwrap();

    let iz = section().iz;
    let disp = model.node_displacement(tip, "UDL").unwrap();
    assert_relative_eq!(disp.dy, w * L.powi(4) / (8.0 * E * iz), max_relative = 1e-6);

    let rxn = model.node_reactions(root, "UDL").unwrap();
    assert_relative_eq!(rxn.fy, -w * L, max_relative = 1e-9);
    assert_relative_eq!(rxn.mz, -w * L * L / 2.0, max_relative = 1e-9);

    let forces = model.bar_end_forces(bar, "UDL").unwrap();
    assert!(forces[7].abs() < 1e-6);
    assert!(forces[11].abs() < 1e-6);
}
