// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_scaling::{
    ResizeSubscription, ScalingConfig, ScalingContainer, ViewportDimensions, ViewportHost,
    compute_scale,
};

struct StaticWindow(ViewportDimensions);

struct NoopObserver;

impl ResizeSubscription for NoopObserver {
    fn disconnect(&mut self) {}
}

impl ViewportHost for StaticWindow {
    fn measure(&self) -> Option<ViewportDimensions> {
        Some(self.0)
    }

    fn observe_root(&mut self) -> Box<dyn ResizeSubscription> {
        Box::new(NoopObserver)
    }
}

fn bench_compute_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/compute_scale");
    let widths: Vec<u32> = (1..4096).collect();
    group.throughput(Throughput::Elements(widths.len() as u64));

    for (name, config) in [
        ("shrink_only", ScalingConfig::default()),
        (
            "bounded_grow",
            ScalingConfig::default()
                .with_disable_scaling_above_min_width(false)
                .with_max_scale(2.0),
        ),
    ] {
        group.bench_with_input(BenchmarkId::new(name, widths.len()), &widths, |b, widths| {
            b.iter(|| {
                for &w in widths {
                    black_box(compute_scale(black_box(w), &config));
                }
            });
        });
    }

    group.finish();
}

fn bench_drag_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/drag_resize");

    // Models a window edge being dragged one pixel per notification.
    for steps in [256_u32, 2_048] {
        group.throughput(Throughput::Elements(u64::from(steps)));
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let mut window = StaticWindow(ViewportDimensions::new(1024, 768));
            let mut container = ScalingContainer::new(ScalingConfig::default())
                .expect("default config is valid");
            container.mount(&mut window);
            let ctx = container.context();
            b.iter(|| {
                for i in 0..steps {
                    let width = 1024 - (i % 1000);
                    container.apply_measurement(ViewportDimensions::new(width, 768));
                    black_box(ctx.scaled_vh(50.0));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_scale, bench_drag_resize);
criterion_main!(benches);
