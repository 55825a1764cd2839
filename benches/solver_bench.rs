//! Benchmarks for the frame solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_solver::prelude::*;

fn create_cantilever_model() -> FrameModel {
    let mut model = FrameModel::new();

    let steel = model.add_material("Steel", Material::steel()).unwrap();
    let section = model.add_section("Section", Section::rectangular(0.3, 0.5)).unwrap();

    let n1 = model.add_node("N1", Node::new(0.0, 0.0, 0.0)).unwrap();
    let n2 = model.add_node("N2", Node::new(10.0, 0.0, 0.0)).unwrap();

    let bar = model.add_bar("M1", Bar::new(n1, n2, section, steel)).unwrap();
    model.add_support(n1, Support::fixed()).unwrap();
    model
        .add_load_case(
            LoadCase::new("Case 1")
                .with_node_load(n2, NodeLoad::force("P", 0.0, -10000.0, 0.0))
                .with_distributed_load(bar, BarDistributedLoad::uniform("w", LoadComponent::Fy, -2000.0)),
        )
        .unwrap();

    model
}

fn create_multi_story_frame(stories: usize, bays: usize) -> FrameModel {
    let mut model = FrameModel::new();

    let steel = model.add_material("Steel", Material::steel()).unwrap();
    let column = model.add_section("Column", Section::rectangular(0.4, 0.4)).unwrap();
    let girder = model.add_section("Beam", Section::rectangular(0.3, 0.6)).unwrap();

    let story_height = 3.5;
    let bay_width = 6.0;

    let mut grid = Vec::with_capacity(stories + 1);
    for story in 0..=stories {
        let mut row = Vec::with_capacity(bays + 1);
        for bay in 0..=bays {
            let name = format!("N{}_{}", story, bay);
            let x = bay as f64 * bay_width;
            let y = story as f64 * story_height;
            row.push(model.add_node(&name, Node::new(x, y, 0.0)).unwrap());
        }
        grid.push(row);
    }

    for story in 0..stories {
        for bay in 0..=bays {
            let name = format!("Col{}_{}", story, bay);
            let bar = Bar::new(grid[story][bay], grid[story + 1][bay], column, steel);
            model.add_bar(&name, bar).unwrap();
        }
    }

    let mut dead = LoadCase::new("Dead");
    let mut wind = LoadCase::new("Wind");
    for story in 1..=stories {
        for bay in 0..bays {
            let name = format!("Beam{}_{}", story, bay);
            let bar = Bar::new(grid[story][bay], grid[story][bay + 1], girder, steel);
            let id = model.add_bar(&name, bar).unwrap();
            dead = dead.with_distributed_load(
                id,
                BarDistributedLoad::uniform("w", LoadComponent::Fy, -15000.0).in_global(),
            );
        }
        wind = wind.with_node_load(grid[story][0], NodeLoad::force("W", 5000.0, 0.0, 0.0));
    }

    for &base in &grid[0] {
        model.add_support(base, Support::fixed()).unwrap();
    }

    model.add_load_case(dead).unwrap();
    model.add_load_case(wind).unwrap();
    model
        .add_load_combination(LoadCombination::new("1.2D + 1.0W").with_case("Dead", 1.2).with_case("Wind", 1.0))
        .unwrap();

    model
}

fn benchmark_cantilever(c: &mut Criterion) {
    c.bench_function("cantilever_linear", |b| {
        b.iter(|| {
            let mut model = create_cantilever_model();
            model.analyze().unwrap();
            black_box(&model);
        })
    });
}

fn benchmark_small_frame(c: &mut Criterion) {
    c.bench_function("frame_3story_2bay_linear", |b| {
        b.iter(|| {
            let mut model = create_multi_story_frame(3, 2);
            model.analyze().unwrap();
            black_box(&model);
        })
    });
}

fn benchmark_medium_frame(c: &mut Criterion) {
    c.bench_function("frame_10story_5bay_linear", |b| {
        b.iter(|| {
            let mut model = create_multi_story_frame(10, 5);
            model.analyze().unwrap();
            black_box(&model);
        })
    });
}

fn benchmark_reanalysis(c: &mut Criterion) {
    // Element matrices stay cached between runs; only the solve repeats
    let mut model = create_multi_story_frame(5, 3);
    c.bench_function("frame_5story_3bay_reanalysis", |b| {
        b.iter(|| {
            model.analyze().unwrap();
            black_box(&model);
        })
    });
}

fn benchmark_elimination(c: &mut Criterion) {
    let options = AnalysisOptions::linear().with_elimination();
    c.bench_function("frame_5story_3bay_elimination", |b| {
        b.iter(|| {
            let mut model = create_multi_story_frame(5, 3);
            model.analyze_with(&options).unwrap();
            black_box(&model);
        })
    });
}

criterion_group!(
    benches,
    benchmark_cantilever,
    benchmark_small_frame,
    benchmark_medium_frame,
    benchmark_reanalysis,
    benchmark_elimination,
);

criterion_main!(benches);
