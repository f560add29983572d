use image::{
    imageops::{self, FilterType},
    DynamicImage, GrayImage,
};

const HASH_SIZE: u32 = 8;
const INTENSITY_SIZE: u32 = 64;

fn downsample(img: &DynamicImage, width: u32, height: u32) -> GrayImage {
    imageops::resize(&img.to_luma8(), width, height, FilterType::Lanczos3)
}

/// Average hash: binarize each cell of an 8x8 grayscale grid against the
/// grid mean, packed into a 64-bit fingerprint.
pub fn ahash(img: &DynamicImage) -> u64 {
    let grid = downsample(img, HASH_SIZE, HASH_SIZE);
    let pixels: Vec<u8> = grid.pixels().map(|p| p.0[0]).collect();
    let avg = pixels.iter().map(|&p| f64::from(p)).sum::<f64>() / pixels.len() as f64;

    let mut bits = 0u64;
    for &p in &pixels {
        bits <<= 1;
        if f64::from(p) > avg {
            bits |= 1;
        }
    }
    bits
}

/// Difference hash: binarize each cell of a 9x8 grid against its
/// right-hand neighbour, packed into a 64-bit fingerprint.
pub fn dhash(img: &DynamicImage) -> u64 {
    let grid = downsample(img, HASH_SIZE + 1, HASH_SIZE);

    let mut bits = 0u64;
    for y in 0..HASH_SIZE {
        for x in 0..HASH_SIZE {
            bits <<= 1;
            if grid.get_pixel(x, y).0[0] > grid.get_pixel(x + 1, y).0[0] {
                bits |= 1;
            }
        }
    }
    bits
}

pub fn hamming(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Global grayscale similarity from the root-mean-square pixel difference
/// on a 64x64 downsampled grid. 1.0 means identical intensity profiles.
pub(crate) fn intensity_similarity(prev: &DynamicImage, cur: &DynamicImage) -> f64 {
    let a = downsample(prev, INTENSITY_SIZE, INTENSITY_SIZE);
    let b = downsample(cur, INTENSITY_SIZE, INTENSITY_SIZE);
    let mse = a
        .pixels()
        .zip(b.pixels())
        .map(|(x, y)| {
            let d = f64::from(x.0[0]) - f64::from(y.0[0]);
            d * d
        })
        .sum::<f64>()
        / f64::from(INTENSITY_SIZE * INTENSITY_SIZE);
    (1.0 - mse.sqrt() / 255.0).max(0.0)
}
