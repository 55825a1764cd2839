//! Portal frame under gravity and wind, analyzed case by case and in combination

use anyhow::Result;
use frame_solver::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Frame Solver Example: Portal Frame ===\n");

    let mut model = FrameModel::new();

    let steel = model.add_material("Steel", Material::steel())?;
    let column = model.add_section("Column", Section::rectangular(0.3, 0.3))?;
    let girder = model.add_section("Girder", Section::rectangular(0.3, 0.5))?;

    // Portal frame: 6 m span, 4 m height
    //
    //    N3 -------- N4
    //    |           |
    //    |           |
    //    N1          N2
    //   ///         ///
    let n1 = model.add_node("N1", Node::new(0.0, 0.0, 0.0))?;
    let n2 = model.add_node("N2", Node::new(6.0, 0.0, 0.0))?;
    let n3 = model.add_node("N3", Node::new(0.0, 4.0, 0.0))?;
    let n4 = model.add_node("N4", Node::new(6.0, 4.0, 0.0))?;

    let col1 = model.add_bar("Col1", Bar::new(n1, n3, column, steel))?;
    let col2 = model.add_bar("Col2", Bar::new(n2, n4, column, steel))?;
    let beam = model.add_bar("Beam", Bar::new(n3, n4, girder, steel))?;

    model.add_support(n1, Support::fixed())?;
    model.add_support(n2, Support::fixed())?;

    // 20 kN/m downward on the beam plus a 15 kN service point load at midspan
    model.add_load_case(
        LoadCase::new("Dead")
            .with_description("Self weight and finishes")
            .with_distributed_load(
                beam,
                BarDistributedLoad::uniform("UDL", LoadComponent::Fy, -20000.0).in_global(),
            )
            .with_point_load(
                beam,
                BarPointLoad::component("Plant", 3.0, LoadComponent::Fy, -15000.0).in_global(),
            ),
    )?;

    // Lateral load at the left eave
    model.add_load_case(
        LoadCase::new("Wind").with_node_load(n3, NodeLoad::force("Gust", 10000.0, 0.0, 0.0)),
    )?;

    model.add_load_combination(LoadCombination::new("1.4D").with_case("Dead", 1.4))?;
    model.add_load_combination(
        LoadCombination::new("1.2D + 1.0W")
            .with_case("Dead", 1.2)
            .with_case("Wind", 1.0),
    )?;

    println!("Running linear analysis...\n");
    model.analyze()?;

    let names: Vec<String> = model.results()?.names().map(str::to_string).collect();
    for name in &names {
        println!("=== Results for {} ===\n", name);

        println!("Node Displacements:");
        for node in [n1, n2, n3, n4] {
            let disp = model.node_displacement(node, name)?;
            println!(
                "  {}: DX={:.4}mm, DY={:.4}mm, RZ={:.6}rad",
                model.node_name(node)?,
                disp.dx * 1000.0,
                disp.dy * 1000.0,
                disp.rz
            );
        }

        println!("\nSupport Reactions:");
        for node in [n1, n2] {
            let rxn = model.node_reactions(node, name)?;
            println!(
                "  {}: FX={:.2}kN, FY={:.2}kN, MZ={:.2}kN·m",
                model.node_name(node)?,
                rxn.fx / 1000.0,
                rxn.fy / 1000.0,
                rxn.mz / 1000.0
            );
        }

        println!("\nBar Forces:");
        for bar in [col1, col2, beam] {
            let start = model.bar_forces_start(bar, name)?;
            let end = model.bar_forces_end(bar, name)?;
            println!(
                "  {}: N={:.2}kN, V={:.2}/{:.2}kN, M={:.2}/{:.2}kN·m",
                model.bar_name(bar)?,
                start.axial / 1000.0,
                start.shear_y / 1000.0,
                end.shear_y / 1000.0,
                start.moment_z / 1000.0,
                end.moment_z / 1000.0
            );
        }

        // Diagrams only see point loads; the UDL shows up in the end forces alone
        let mid = model.moment_z(beam, 3.0, name)?;
        println!(
            "\nBeam moment at midspan (point loads only): {:.2}/{:.2}kN·m",
            mid.left / 1000.0,
            mid.right / 1000.0
        );

        let summary = model.summary(name)?;
        println!("\nSummary:");
        println!("  Max displacement: {:.4}mm at {}", summary.max_displacement * 1000.0, summary.max_disp_node);
        println!("  Max reaction: {:.2}kN at {}", summary.max_reaction / 1000.0, summary.max_reaction_node);
        println!("  Max axial: {:.2}kN in {}", summary.max_axial / 1000.0, summary.max_axial_bar);
        println!("  Max moment: {:.2}kN·m in {}", summary.max_moment / 1000.0, summary.max_moment_bar);
        println!();
    }

    println!("=== Summary (JSON) ===\n");
    println!("{}", serde_json::to_string_pretty(&model.summary("1.2D + 1.0W")?)?);

    println!("\n=== Analysis Complete ===");
    Ok(())
}
