// tests/stddev_bands_test.rs

use benchplot::{
    compute_and_apply_bounds, draw_stddev_bands, BandStyle, Degree, Error, PlotAxis, PlotConfig,
    Scale,
};
use plotters::prelude::*;

const TICKS: [f64; 4] = [0., 1., 2., 3.];
const MEAN: [f64; 4] = [10., 12., 11., 15.];
const STD_DEV: [f64; 4] = [1., 0.5, 2., 1.5];

fn band_at(multiple: f64) -> (Vec<f64>, Vec<f64>) {
    MEAN.iter()
        .zip(STD_DEV.iter())
        .map(|(m, s)| (m - multiple * s, m + multiple * s))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_selects_band_count() {
        for (degree, expected) in [(1u8, 1), (2, 2), (3, 3)] {
            let mut axis = PlotAxis::default();
            draw_stddev_bands(&mut axis, &TICKS, &MEAN, &STD_DEV, &BandStyle::default(), degree)
                .unwrap();
            assert_eq!(axis.regions().len(), expected);

            for (i, region) in axis.regions().iter().enumerate() {
                let (lower, upper) = band_at((i + 1) as f64);
                assert_eq!(region.x, TICKS.to_vec());
                assert_eq!(region.lower, lower);
                assert_eq!(region.upper, upper);
                assert_eq!(region.color, BLACK);
                assert_eq!(region.alpha, 0.1);
            }
        }
    }

    #[test]
    fn test_invalid_degree_draws_nothing() {
        for degree in [0i32, 4] {
            let mut axis = PlotAxis::default();
            let err = draw_stddev_bands(
                &mut axis,
                &TICKS,
                &MEAN,
                &STD_DEV,
                &BandStyle::default(),
                degree,
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            assert!(axis.regions().is_empty());
        }
    }

    #[test]
    fn test_invalid_alpha_draws_nothing() {
        let mut axis = PlotAxis::default();
        let style = BandStyle {
            color: BLUE,
            alpha: 2.,
        };
        let err = draw_stddev_bands(&mut axis, &TICKS, &MEAN, &STD_DEV, &style, Degree::One)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(axis.regions().is_empty());
    }

    #[test]
    fn test_mismatched_lengths() {
        let mut axis = PlotAxis::default();
        let err = draw_stddev_bands(
            &mut axis,
            &TICKS[..3],
            &MEAN,
            &STD_DEV,
            &BandStyle::default(),
            Degree::Two,
        )
        .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { .. }));
        assert!(axis.regions().is_empty());
    }

    #[test]
    fn test_drawing_is_additive() {
        let mut axis = PlotAxis::default();
        let style = BandStyle::new(RED, 0.3).unwrap();
        draw_stddev_bands(&mut axis, &TICKS, &MEAN, &STD_DEV, &style, Degree::Three).unwrap();
        draw_stddev_bands(&mut axis, &TICKS, &MEAN, &STD_DEV, &style, Degree::Three).unwrap();
        assert_eq!(axis.regions().len(), 6);
        assert_eq!(axis.regions()[0], axis.regions()[3]);
    }

    #[test]
    fn test_config_drives_both_helpers() {
        let config = PlotConfig::from_json_str(
            r#"{"scale": "log", "gap": 0, "color": "b", "alpha": 0.2, "degree": 2}"#,
        )
        .unwrap();
        let mut axis = PlotAxis::new(config.scale);
        compute_and_apply_bounds(&mut axis, &MEAN, config.scale, config.gap).unwrap();
        draw_stddev_bands(
            &mut axis,
            &TICKS,
            &MEAN,
            &STD_DEV,
            &config.band_style().unwrap(),
            config.degree,
        )
        .unwrap();
        assert_eq!(axis.bounds(), Some((10., 100.)));
        assert_eq!(axis.regions().len(), 2);
        assert_eq!(axis.regions()[1].color, BLUE);
    }

    #[test]
    fn test_render_onto_bitmap() {
        let (width, height) = (64u32, 48u32);
        let mut buffer = vec![255u8; (width * height * 3) as usize];

        for scale in [Scale::Linear, Scale::Logarithmic] {
            buffer.fill(255);
            let mut axis = PlotAxis::new(scale);
            compute_and_apply_bounds(&mut axis, &MEAN, scale, 1.).unwrap();
            draw_stddev_bands(&mut axis, &TICKS, &MEAN, &STD_DEV, &BandStyle::default(), 3u8)
                .unwrap();
            {
                let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
                    .into_drawing_area();
                axis.draw_on(&root).unwrap();
                root.present().unwrap();
            }
            assert!(buffer.iter().any(|&channel| channel < 255));
        }
    }

    #[test]
    fn test_render_with_mesh_onto_bitmap() {
        let (width, height) = (200u32, 150u32);
        let mut buffer = vec![255u8; (width * height * 3) as usize];

        for scale in [Scale::Linear, Scale::Logarithmic] {
            buffer.fill(255);
            let mut axis = PlotAxis::new(scale);
            compute_and_apply_bounds(&mut axis, &MEAN, scale, 1.).unwrap();
            draw_stddev_bands(&mut axis, &TICKS, &MEAN, &STD_DEV, &BandStyle::default(), 2u8)
                .unwrap();
            {
                let root = BitMapBackend::with_buffer(&mut buffer, (width, height))
                    .into_drawing_area();
                axis.draw_with_mesh(&root, "spectrum").unwrap();
                root.present().unwrap();
            }
            assert!(buffer.iter().any(|&channel| channel < 255));
        }
    }

    #[test]
    fn test_render_rejects_non_positive_log_bounds() {
        let mut buffer = vec![255u8; 16 * 16 * 3];
        let mut axis = PlotAxis::new(Scale::Logarithmic);
        compute_and_apply_bounds(&mut axis, &[-4., 3.], Scale::Linear, 0.).unwrap();

        let root = BitMapBackend::with_buffer(&mut buffer, (16, 16)).into_drawing_area();
        assert!(matches!(
            axis.draw_on(&root),
            Err(Error::NumericDomain(_))
        ));
    }
}
