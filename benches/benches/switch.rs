// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_segmented_switch::{
    FrameAnimator, HighlightLayer, SegmentedSwitch, SpringAnimation, SwitchGesture, TransitionId,
};

/// Drops every frame and remembers the latest transition.
#[derive(Debug, Default)]
struct NullAnimator {
    last: Option<TransitionId>,
}

impl FrameAnimator for NullAnimator {
    fn set_frame_immediate(&mut self, layer: HighlightLayer, frame: Rect) {
        black_box((layer, frame));
    }

    fn animate(
        &mut self,
        layer: HighlightLayer,
        transition: TransitionId,
        from: Rect,
        to: Rect,
        _spring: &SpringAnimation,
    ) {
        black_box((layer, from, to));
        self.last = Some(transition);
    }
}

fn switch(segments: usize) -> SegmentedSwitch<NullAnimator> {
    let titles = (0..segments).map(|i| format!("Segment {i}"));
    let mut switch = SegmentedSwitch::new(titles, NullAnimator::default());
    switch
        .set_size(Size::new(80.0 * segments as f64, 32.0))
        .unwrap();
    switch
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch/drag");

    // A full drag: begin on the highlight, sweep across the row, release with a flick.
    for segments in [2usize, 4, 16] {
        let steps = 120;
        let span = 80.0 * segments as f64;
        group.bench_with_input(
            BenchmarkId::new("sweep", segments),
            &segments,
            |b, &segments| {
                b.iter_batched(
                    || switch(segments),
                    |mut sw| {
                        sw.handle_gesture(SwitchGesture::PanBegan(Point::new(40.0, 16.0)));
                        for step in 0..steps {
                            let dx = span * f64::from(step) / f64::from(steps);
                            sw.handle_gesture(SwitchGesture::PanChanged {
                                translation: Vec2::new(dx, 0.0),
                            });
                        }
                        sw.handle_gesture(SwitchGesture::PanEnded {
                            velocity: Vec2::new(900.0, 0.0),
                        });
                        black_box(sw.selected_index());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_taps(c: &mut Criterion) {
    let mut group = c.benchmark_group("switch/tap");

    for segments in [2usize, 16] {
        group.bench_with_input(
            BenchmarkId::new("across_row", segments),
            &segments,
            |b, &segments| {
                let mut sw = switch(segments);
                let mut x = 0.0;
                b.iter(|| {
                    x = (x + 37.0) % (80.0 * segments as f64);
                    sw.handle_gesture(SwitchGesture::Tap(Point::new(x, 16.0)));
                    if let Some(transition) = sw.animator_mut().last.take() {
                        sw.finish_transition(transition, true);
                    }
                    black_box(sw.selected_index());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_drag_stream, bench_taps);
criterion_main!(benches);
