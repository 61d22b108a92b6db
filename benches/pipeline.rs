use criterion::{black_box, criterion_group, criterion_main, Criterion};
use opencv::core::{Mat, Point, Rect, Scalar, CV_8UC3};
use opencv::imgproc;
use sheetscan::FrameProcessor;

/// Synthetic 640x480 workbench frame: one sheet, two holes
fn scenario_frame() -> Mat {
    let mut frame =
        Mat::new_rows_cols_with_default(480, 640, CV_8UC3, Scalar::all(40.0)).unwrap();
    imgproc::rectangle(
        &mut frame,
        Rect::new(100, 80, 400, 300),
        Scalar::all(255.0),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )
    .unwrap();
    imgproc::circle(
        &mut frame,
        Point::new(150, 150),
        20,
        Scalar::new(200.0, 200.0, 195.0, 0.0),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )
    .unwrap();
    imgproc::circle(
        &mut frame,
        Point::new(400, 300),
        15,
        Scalar::new(0.0, 0.0, 180.0, 0.0),
        imgproc::FILLED,
        imgproc::LINE_8,
        0,
    )
    .unwrap();
    frame
}

fn benchmark_frame_processing(c: &mut Criterion) {
    let processor = FrameProcessor::new();
    let frame = scenario_frame();

    c.bench_function("process_640x480_frame", |b| {
        b.iter(|| processor.process(black_box(&frame)).unwrap())
    });
}

criterion_group!(benches, benchmark_frame_processing);
criterion_main!(benches);
