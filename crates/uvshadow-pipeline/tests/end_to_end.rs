//! End-to-end pipeline scenarios
//!
//! Synthetic captures run through the whole chain: registration, band
//! derivation, band algebra, presentation.

use uvshadow_core::{Raster, color};
use uvshadow_pipeline::{
    PipelineError, ProcessingSettings, Stage, process, process_with_artifacts,
};

/// White background with a black full-height vertical band.
fn banded(w: u32, h: u32, x0: u32, x1: u32) -> Raster {
    let img = Raster::new(w, h).unwrap();
    let mut m = img.try_into_mut().unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = if (x0..x1).contains(&x) { 0 } else { 255 };
            m.set_rgba_unchecked(x, y, v, v, v, 255);
        }
    }
    m.into()
}

/// Centered crop by straight row/column copy, for building expectations.
fn central_crop(img: &Raster, w: u32, h: u32) -> Raster {
    let x0 = (img.width() - w) / 2;
    let y0 = (img.height() - h) / 2;
    let out = Raster::new(w, h).unwrap();
    let mut m = out.try_into_mut().unwrap();
    for y in 0..h {
        for x in 0..w {
            m.set_pixel_unchecked(x, y, img.get_pixel_unchecked(x0 + x, y0 + y));
        }
    }
    m.into()
}

/// Nearest-neighbor 2x upscale, emulating the narrow camera's doubled
/// pixel density over the same scene.
fn doubled(img: &Raster) -> Raster {
    let out = Raster::new(img.width() * 2, img.height() * 2).unwrap();
    let mut m = out.try_into_mut().unwrap();
    for y in 0..img.height() * 2 {
        for x in 0..img.width() * 2 {
            m.set_pixel_unchecked(x, y, img.get_pixel_unchecked(x / 2, y / 2));
        }
    }
    m.into()
}

/// Deterministic speckle pattern (LCG), different per seed.
fn speckle(w: u32, h: u32, seed: u64) -> Raster {
    let img = Raster::new(w, h).unwrap();
    let mut m = img.try_into_mut().unwrap();
    let mut state = seed;
    for y in 0..h {
        for x in 0..w {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let r = (state >> 33) as u8;
            let g = (state >> 41) as u8;
            let b = (state >> 49) as u8;
            m.set_rgba_unchecked(x, y, r, g, b, 255);
        }
    }
    m.into()
}

fn zero_offset() -> ProcessingSettings {
    ProcessingSettings {
        camera_offset_px: 0,
        ..Default::default()
    }
}

#[test]
fn identical_scenes_produce_an_unchanged_composite() {
    // both cameras see the same black band; there is no UV-exclusive
    // signal, so the composite must equal the registered unfiltered image
    let wide = banded(128, 128, 56, 72);
    let scene = central_crop(&wide, 64, 64);
    let narrow = doubled(&scene);

    let run = process_with_artifacts(&wide, &narrow, &zero_offset()).unwrap();

    // registration reduced both captures to the same 64x64 scene
    assert_eq!(run.artifacts.unfiltered.data(), scene.data());
    assert_eq!(run.artifacts.filtered.data(), scene.data());

    // every band cancels: Suv is fully black and opaque
    for &px in run.artifacts.suv.data() {
        assert_eq!(px, color::compose_rgb(0, 0, 0));
    }

    // tinting a black mask contributes nothing
    assert_eq!(run.image.data(), scene.data());
}

#[test]
fn artifacts_are_retrievable_by_stage() {
    let wide = banded(128, 128, 56, 72);
    let narrow = doubled(&central_crop(&wide, 64, 64));

    let run = process_with_artifacts(&wide, &narrow, &zero_offset()).unwrap();

    for stage in [
        Stage::Unfiltered,
        Stage::Filtered,
        Stage::Sf,
        Stage::Sgr,
        Stage::Sb,
        Stage::SbPrime,
        Stage::Svis,
        Stage::Suv,
        Stage::SuvTinted,
    ] {
        let artifact = run.artifacts.get(stage).unwrap_or_else(|| {
            panic!("missing artifact for stage {stage}");
        });
        assert_eq!(artifact.dimensions(), (64, 64), "wrong size at {stage}");
    }
    assert!(run.artifacts.get(Stage::Final).is_none());
}

#[test]
fn flat_capture_aborts_with_a_named_band_failure() {
    // a mid-gray unfiltered capture has no contrast to stretch: the
    // unfiltered bands fail with a degenerate range and no composite exists
    let wide = Raster::new_filled(128, 128, color::compose_rgb(128, 128, 128)).unwrap();
    let narrow = Raster::new_filled(128, 128, color::compose_rgb(255, 255, 255)).unwrap();

    let err = process(&wide, &narrow, &zero_offset()).unwrap_err();
    let stage = err.stage().expect("failure should name a stage");
    assert!(
        matches!(stage, Stage::Sgr | Stage::Sb),
        "expected an unfiltered band, got {stage}"
    );
    assert!(err.to_string().contains("degenerate range"), "{err}");
}

#[test]
fn mismatched_framing_aborts_registration() {
    let wide = speckle(128, 128, 7);
    let narrow = speckle(100, 128, 8);

    let err = process(&wide, &narrow, &zero_offset()).unwrap_err();
    match err {
        PipelineError::Registration(source) => {
            assert!(source.to_string().contains("dimension mismatch"), "{source}");
        }
        other => panic!("expected registration failure, got {other:?}"),
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let wide = speckle(128, 128, 42);
    let narrow = speckle(128, 128, 43);
    let settings = ProcessingSettings {
        camera_offset_px: 10,
        ..Default::default()
    };

    let first = process_with_artifacts(&wide, &narrow, &settings).unwrap();
    let second = process_with_artifacts(&wide, &narrow, &settings).unwrap();

    assert_eq!(first.image.dimensions(), (64, 59));
    assert_eq!(first.image.data(), second.image.data());
    assert_eq!(first.artifacts.suv.data(), second.artifacts.suv.data());
    assert_eq!(
        first.artifacts.sb_prime.data(),
        second.artifacts.sb_prime.data()
    );
}

#[test]
fn offset_consumes_rows_from_both_captures() {
    let wide = speckle(128, 128, 1);
    let narrow = speckle(128, 128, 2);
    let settings = ProcessingSettings {
        camera_offset_px: 240,
        ..Default::default()
    };

    // a 240px offset would trim 120 rows from a 64-row registered frame
    let err = process(&wide, &narrow, &settings).unwrap_err();
    assert!(matches!(err, PipelineError::Registration(_)));

    let settings = ProcessingSettings {
        camera_offset_px: 24,
        ..Default::default()
    };
    let run = process_with_artifacts(&wide, &narrow, &settings).unwrap();
    assert_eq!(run.image.dimensions(), (64, 52));
}
