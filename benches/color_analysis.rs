use criterion::{black_box, criterion_group, criterion_main, Criterion};
use swatchbook::{
    describe_color, generate_gradient, generate_harmony, HarmonyScheme, PaletteExtractor,
    PixelBuffer, Rgb,
};

/// 500x500 buffer of horizontal bands, the size an image is downscaled to
fn banded_buffer() -> PixelBuffer {
    let (width, height) = (500u32, 500u32);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let band = (y / 25) as u8;
        for x in 0..width {
            data.extend_from_slice(&[band.wrapping_mul(13), (x % 7) as u8, 200, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

fn benchmark_extraction(c: &mut Criterion) {
    let buffer = banded_buffer();
    let default = PaletteExtractor::new();
    let full_scan = PaletteExtractor::with_params(1, 8);

    c.bench_function("extract_palette_stride_10", |b| {
        b.iter(|| default.extract(black_box(&buffer)))
    });
    c.bench_function("extract_palette_stride_1", |b| {
        b.iter(|| full_scan.extract(black_box(&buffer)))
    });
}

fn benchmark_conversions(c: &mut Criterion) {
    let seed = Rgb::new(0x3B, 0x82, 0xF6);
    let stops = [Rgb::new(0xFF, 0x6B, 0x6B), seed, Rgb::new(0x4E, 0xCD, 0xC4)];

    c.bench_function("describe_color", |b| {
        b.iter(|| describe_color(black_box("#3B82F6"), None))
    });
    c.bench_function("harmony_all_schemes", |b| {
        b.iter(|| {
            HarmonyScheme::ALL
                .iter()
                .map(|&scheme| generate_harmony(black_box(seed), scheme).len())
                .sum::<usize>()
        })
    });
    c.bench_function("gradient_32_steps", |b| {
        b.iter(|| generate_gradient(black_box(&stops), 32))
    });
}

criterion_group!(benches, benchmark_extraction, benchmark_conversions);
criterion_main!(benches);
