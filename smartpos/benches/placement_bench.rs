use booth_layout::entities::{BoothDesign, ElementKind, PricingRates, Room};
use booth_layout::placement::PlacementEngine;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, place_bench);

const ROOM_SIDES: [f64; 3] = [6.0, 12.0, 20.0];
const N_OCCUPANTS: usize = 20;

/// Benchmark a single placement in rooms of increasing size, already furnished with `N_OCCUPANTS` elements.
/// Larger rooms mean more grid candidates to rank and filter.
fn place_bench(c: &mut Criterion) {
    let engine = PlacementEngine::default();
    let mut group = c.benchmark_group("place_one");
    for side in ROOM_SIDES {
        let room = Room::try_new(side, side, 3.0).expect("valid room");
        let mut design = BoothDesign::new("bench", room, PricingRates::default());
        for kind in ElementKind::ALL.into_iter().cycle().take(N_OCCUPANTS) {
            design.add_element(kind, &engine);
        }
        let footprint = ElementKind::VrStation.spec(&room).footprint;

        group.bench_function(BenchmarkId::from_parameter(side), |b| {
            b.iter(|| engine.place(black_box(&footprint), design.elements(), &room))
        });
    }
    group.finish();
}
