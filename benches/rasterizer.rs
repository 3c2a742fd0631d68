use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel3d::bench::{FrameBuffer, Rasterizer, ScanlineRasterizer, Triangle};
use pixel3d::math::vec3::Vec3;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffers() -> (Vec<u32>, Vec<f32>) {
    let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
    (vec![0u32; size], vec![0.0f32; size])
}

fn small_triangle() -> Triangle {
    Triangle::new(
        [
            Vec3::new(100.0, 100.0, 0.5),
            Vec3::new(120.0, 100.0, 0.5),
            Vec3::new(110.0, 120.0, 0.5),
        ],
        0xFFFF0000,
    )
}

fn medium_triangle() -> Triangle {
    Triangle::new(
        [
            Vec3::new(100.0, 100.0, 0.5),
            Vec3::new(300.0, 100.0, 0.5),
            Vec3::new(200.0, 300.0, 0.5),
        ],
        0xFFFF0000,
    )
}

fn large_triangle() -> Triangle {
    Triangle::new(
        [
            Vec3::new(50.0, 50.0, 0.5),
            Vec3::new(750.0, 100.0, 0.5),
            Vec3::new(400.0, 550.0, 0.5),
        ],
        0xFFFF0000,
    )
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                // Reset the depth buffer so every iteration does the same
                // writes instead of failing the depth test after the first.
                depth.fill(0.0);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_triangle(black_box(tri), &mut fb);
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                Triangle::new(
                    [
                        Vec3::new(x, y, 0.5),
                        Vec3::new(x + 35.0, y, 0.5),
                        Vec3::new(x + 17.5, y + 25.0, 0.5),
                    ],
                    0xFFFF0000,
                )
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.fill(0.0);
            let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
